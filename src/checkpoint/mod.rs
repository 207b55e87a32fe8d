//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint records where a machine is, not how it got there. The table
//! itself is code and is not serialized; restoring pairs a checkpoint with
//! a table of the same name.

use crate::core::{Event, State, TransitionTable};
use crate::machine::{Machine, SyncMachine};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's current state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the table the machine ran on
    pub table_name: String,

    /// Current state of the machine
    pub current_state: S,
}

impl<S> Checkpoint<S> {
    pub fn new(table_name: impl Into<String>, current_state: S) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            table_name: table_name.into(),
            current_state,
        }
    }

    /// Check that this checkpoint can be restored onto `table`.
    pub fn validate<E: Event>(&self, table: &TransitionTable<E, S>) -> Result<(), CheckpointError>
    where
        S: State,
    {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.table_name != table.name() {
            return Err(CheckpointError::TableMismatch {
                expected: table.name().to_string(),
                found: self.table_name.clone(),
            });
        }
        Ok(())
    }
}

impl<S: Serialize> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }
}

impl<S: DeserializeOwned> Checkpoint<S> {
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<E: Event, S: State> Machine<E, S> {
    /// Resume a machine from a checkpoint taken on a table with the same name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::builder::{Declaration, TableBuilder};
    /// use switchyard::checkpoint::Checkpoint;
    /// use switchyard::machine::{Fsm, Machine};
    /// use std::sync::Arc;
    ///
    /// let table = Arc::new(
    ///     TableBuilder::new()
    ///         .name("door")
    ///         .declare(Declaration::new("open", ["closed"], "opened"))
    ///         .build(),
    /// );
    ///
    /// let mut machine = Machine::new("closed", Arc::clone(&table));
    /// machine.trigger(&"open").unwrap();
    /// let saved = machine.checkpoint().to_json().unwrap();
    ///
    /// let checkpoint: Checkpoint<String> = Checkpoint::from_json(&saved).unwrap();
    /// assert_eq!(checkpoint.current_state, "opened");
    /// ```
    pub fn restore(
        checkpoint: Checkpoint<S>,
        table: impl Into<Arc<TransitionTable<E, S>>>,
    ) -> Result<Self, CheckpointError> {
        let table = table.into();
        checkpoint.validate(&table)?;
        debug!(id = %checkpoint.id, table = table.name(), "restoring machine from checkpoint");
        Ok(Self::new(checkpoint.current_state, table))
    }
}

impl<E: Event, S: State> SyncMachine<E, S> {
    /// Resume a synchronized machine from a checkpoint.
    pub fn restore(
        checkpoint: Checkpoint<S>,
        table: impl Into<Arc<TransitionTable<E, S>>>,
    ) -> Result<Self, CheckpointError> {
        let table = table.into();
        checkpoint.validate(&table)?;
        debug!(id = %checkpoint.id, table = table.name(), "restoring synchronized machine from checkpoint");
        Ok(Self::new(checkpoint.current_state, table))
    }
}
