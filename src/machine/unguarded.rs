//! Machine without internal synchronization.

use super::Fsm;
use crate::builder::BuildError;
use crate::core::{Event, State, TransitionError, TransitionTable};
use std::sync::Arc;
use tracing::{debug, trace};

/// State machine holding its current state in a plain field.
///
/// Mutation needs `&mut self`, so sharing one instance across threads
/// requires external locking; use [`SyncMachine`](super::SyncMachine) to
/// get that built in.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::Declaration;
/// use switchyard::core::TransitionTable;
/// use switchyard::machine::{Fsm, Machine};
///
/// let table = TransitionTable::new(vec![
///     Declaration::new("open", ["closed"], "opened"),
///     Declaration::new("close", ["opened"], "closed"),
/// ]);
/// let mut door = Machine::new("closed", table);
///
/// door.trigger(&"open").unwrap();
/// assert!(door.is(&"opened"));
/// assert!(door.trigger(&"open").unwrap_err().is_inappropriate_event());
/// assert_eq!(door.current(), "opened");
/// ```
#[derive(Clone, Debug)]
pub struct Machine<E: Event, S: State> {
    table: Arc<TransitionTable<E, S>>,
    current: S,
}

impl<E: Event, S: State> Machine<E, S> {
    /// Create a machine in `initial`, which the table does not need to know.
    pub fn new(initial: S, table: impl Into<Arc<TransitionTable<E, S>>>) -> Self {
        let table = table.into();
        debug!(table = table.name(), initial = %initial, "created machine");
        Self {
            table,
            current: initial,
        }
    }

    /// Create a machine, rejecting an initial state the table never mentions.
    pub fn try_new(
        initial: S,
        table: impl Into<Arc<TransitionTable<E, S>>>,
    ) -> Result<Self, BuildError> {
        let table = table.into();
        if !table.contains_state(&initial) {
            return Err(BuildError::UnknownInitialState(initial.to_string()));
        }
        Ok(Self::new(initial, table))
    }

    /// Borrow the current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The shared table handle, for building further machines.
    pub fn shared_table(&self) -> &Arc<TransitionTable<E, S>> {
        &self.table
    }
}

impl<E: Event, S: State> Fsm<E, S> for Machine<E, S> {
    fn table(&self) -> &TransitionTable<E, S> {
        &self.table
    }

    fn current(&self) -> S {
        self.current.clone()
    }

    fn is(&self, state: &S) -> bool {
        &self.current == state
    }

    fn set_current(&mut self, state: S) {
        self.current = state;
    }

    fn trigger(&mut self, event: &E) -> Result<(), TransitionError> {
        match self.table.transform(&self.current, event) {
            Ok(next) => {
                debug!(from = %self.current, to = %next, event = %event, "transition applied");
                self.current = next.clone();
                Ok(())
            }
            Err(err) => {
                trace!(state = %self.current, event = %event, kind = ?err.kind(), "transition rejected");
                Err(err)
            }
        }
    }

    fn clone_with_state(&self, state: S) -> Self {
        debug!(table = self.table.name(), current = %state, "cloned machine");
        Self {
            table: Arc::clone(&self.table),
            current: state,
        }
    }
}
