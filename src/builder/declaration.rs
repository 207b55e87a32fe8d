//! Transition declarations and their builder.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// One declared transition: `event` moves any of `sources` to `destination`.
///
/// Declarations are input only. The table builder expands each one into a
/// `(event, source) -> destination` entry per source state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration<E, S> {
    pub event: E,
    pub sources: Vec<S>,
    pub destination: S,
    /// Display name for the event, used instead of its `Display` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<E, S> Declaration<E, S> {
    pub fn new<I>(event: E, sources: I, destination: S) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            event,
            sources: sources.into_iter().collect(),
            destination,
            name: None,
        }
    }

    /// Attach a display name for the event.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Builder for constructing declarations with a fluent API.
pub struct DeclarationBuilder<E, S> {
    event: Option<E>,
    sources: Vec<S>,
    destination: Option<S>,
    name: Option<String>,
}

impl<E, S> DeclarationBuilder<E, S> {
    pub fn new() -> Self {
        Self {
            event: None,
            sources: Vec::new(),
            destination: None,
            name: None,
        }
    }

    /// Set the triggering event (required).
    pub fn event(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Add a source state. Call repeatedly for several sources.
    pub fn from(mut self, state: S) -> Self {
        self.sources.push(state);
        self
    }

    /// Add several source states at once.
    pub fn from_any<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.sources.extend(states);
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.destination = Some(state);
        self
    }

    /// Set the event's display name (optional).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the declaration.
    pub fn build(self) -> Result<Declaration<E, S>, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.sources.is_empty() {
            return Err(BuildError::MissingSourceState);
        }
        let destination = self.destination.ok_or(BuildError::MissingDestinationState)?;

        Ok(Declaration {
            event,
            sources: self.sources,
            destination,
            name: self.name,
        })
    }
}

impl<E, S> Default for DeclarationBuilder<E, S> {
    fn default() -> Self {
        Self::new()
    }
}
