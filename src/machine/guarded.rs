//! Machine whose current state sits behind a reader/writer lock.

use super::Fsm;
use crate::builder::BuildError;
use crate::core::{Event, State, TransitionError, TransitionTable};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

/// Thread-safe state machine.
///
/// Reads of the current state take a shared lock, `trigger` and
/// `set_current` take an exclusive lock, and every lock is scoped to a
/// single operation. Table lookups for the query operations run after the
/// read lock is released; `trigger` holds the write lock across its lookup
/// so the read-modify-write is atomic.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use switchyard::builder::Declaration;
/// use switchyard::core::TransitionTable;
/// use switchyard::machine::SyncMachine;
///
/// let table = TransitionTable::new(vec![
///     Declaration::new("tick", ["a"], "b"),
///     Declaration::new("tick", ["b"], "a"),
/// ]);
/// let machine = Arc::new(SyncMachine::new("a", table));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let machine = Arc::clone(&machine);
///         thread::spawn(move || machine.trigger(&"tick").unwrap())
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(machine.current(), "a");
/// ```
pub struct SyncMachine<E: Event, S: State> {
    table: Arc<TransitionTable<E, S>>,
    current: RwLock<S>,
}

impl<E: Event, S: State> SyncMachine<E, S> {
    /// Create a machine in `initial`, which the table does not need to know.
    pub fn new(initial: S, table: impl Into<Arc<TransitionTable<E, S>>>) -> Self {
        let table = table.into();
        debug!(table = table.name(), initial = %initial, "created synchronized machine");
        Self {
            table,
            current: RwLock::new(initial),
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

    /// The shared table handle, for building further machines.
    pub fn shared_table(&self) -> &Arc<TransitionTable<E, S>> {
        &self.table
    }

    pub fn current(&self) -> S {
        self.read().clone()
    }

    pub fn is(&self, state: &S) -> bool {
        *self.read() == *state
    }

    pub fn set_current(&self, state: S) {
        *self.write() = state;
    }

    /// Apply `event` to the current state; see [`Fsm::trigger`].
    pub fn trigger(&self, event: &E) -> Result<(), TransitionError> {
        let mut current = self.write();
        match self.table.transform(&current, event) {
            Ok(next) => {
                debug!(from = %*current, to = %next, event = %event, "transition applied");
                *current = next.clone();
                Ok(())
            }
            Err(err) => {
                trace!(state = %*current, event = %event, kind = ?err.kind(), "transition rejected");
                Err(err)
            }
        }
    }

    pub fn match_current_occurs(&self, event: &E) -> bool {
        let current = self.current();
        self.table.match_occurs(&current, event)
    }

    pub fn match_current_all_occur(&self, events: &[E]) -> bool {
        let current = self.current();
        self.table.match_all_occur(&current, events)
    }

    pub fn available_current_events(&self) -> BTreeSet<E> {
        let current = self.current();
        self.table.available_events(&current)
    }

    /// A new machine sharing this table, starting from `state`.
    pub fn clone_with_state(&self, state: S) -> Self {
        debug!(table = self.table.name(), current = %state, "cloned synchronized machine");
        Self {
            table: Arc::clone(&self.table),
            current: RwLock::new(state),
        }
    }

    // A panic elsewhere cannot leave the cursor half-written, so a poisoned
    // lock still guards a valid state.
    fn read(&self) -> RwLockReadGuard<'_, S> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, S> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Event, S: State> Clone for SyncMachine<E, S> {
    /// The clone gets its own lock around a copy of the current state.
    fn clone(&self) -> Self {
        self.clone_with_state(self.current())
    }
}

impl<E: Event, S: State> fmt::Debug for SyncMachine<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncMachine")
            .field("table", &self.table)
            .field("current", &*self.read())
            .finish()
    }
}

impl<E: Event, S: State> Fsm<E, S> for SyncMachine<E, S> {
    fn table(&self) -> &TransitionTable<E, S> {
        &self.table
    }

    fn current(&self) -> S {
        SyncMachine::current(self)
    }

    fn is(&self, state: &S) -> bool {
        SyncMachine::is(self, state)
    }

    fn set_current(&mut self, state: S) {
        SyncMachine::set_current(self, state)
    }

    fn trigger(&mut self, event: &E) -> Result<(), TransitionError> {
        SyncMachine::trigger(self, event)
    }

    fn clone_with_state(&self, state: S) -> Self {
        SyncMachine::clone_with_state(self, state)
    }

    fn match_current_occurs(&self, event: &E) -> bool {
        SyncMachine::match_current_occurs(self, event)
    }

    fn match_current_all_occur(&self, events: &[E]) -> bool {
        SyncMachine::match_current_all_occur(self, events)
    }

    fn available_current_events(&self) -> BTreeSet<E> {
        SyncMachine::available_current_events(self)
    }
}
