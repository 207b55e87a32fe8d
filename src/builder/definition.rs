//! Serializable table definitions.
//!
//! A definition describes a table as plain data so it can live in a JSON
//! document next to the code that drives the machine. Error translators are
//! code and can only be attached through [`TableBuilder::translator`].

use crate::builder::declaration::Declaration;
use crate::builder::error::BuildError;
use crate::builder::table::TableBuilder;
use crate::core::{Event, State};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Plain-data description of a transition table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableDefinition<E: Event, S: State> {
    /// Diagram title. Empty means untitled.
    #[serde(default)]
    pub name: String,

    pub transitions: Vec<Declaration<E, S>>,

    #[serde(default = "HashMap::new")]
    pub state_names: HashMap<S, String>,

    #[serde(default = "HashMap::new")]
    pub event_names: HashMap<E, String>,
}

impl<E, S> TableDefinition<E, S>
where
    E: Event + DeserializeOwned,
    S: State + DeserializeOwned,
{
    /// Parse a definition from JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::builder::{TableBuilder, TableDefinition};
    ///
    /// let json = r#"{
    ///     "name": "door",
    ///     "transitions": [
    ///         { "event": "open", "sources": ["closed"], "destination": "opened" },
    ///         { "event": "close", "sources": ["opened"], "destination": "closed" }
    ///     ]
    /// }"#;
    ///
    /// let definition: TableDefinition<String, String> = TableDefinition::from_json(json).unwrap();
    /// let table = TableBuilder::from(definition).build();
    /// assert_eq!(table.name(), "door");
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<E, S> TableDefinition<E, S>
where
    E: Event + Serialize,
    S: State + Serialize,
{
    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<E: Event, S: State> From<TableDefinition<E, S>> for TableBuilder<E, S> {
    fn from(definition: TableDefinition<E, S>) -> Self {
        TableBuilder::new()
            .name(definition.name)
            .declarations(definition.transitions)
            .state_names(definition.state_names)
            .event_names(definition.event_names)
    }
}
