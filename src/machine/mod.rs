//! State machines that hold a current state over a shared table.
//!
//! Both variants share the [`Fsm`] contract and differ only in how the
//! cursor is protected:
//!
//! - [`Machine`]: plain field, mutated through `&mut self`
//! - [`SyncMachine`]: `RwLock`-guarded field, mutated through `&self` so
//!   one instance can be shared behind an `Arc`
//!
//! Cloning either variant shares the table and copies only the cursor.

mod guarded;
mod unguarded;

pub use guarded::SyncMachine;
pub use unguarded::Machine;

use crate::checkpoint::Checkpoint;
use crate::core::{Event, State, TransitionError, TransitionTable};
use crate::visualize::{self, VisualizeError, VisualizeFormat};
use std::collections::BTreeSet;

/// Operations common to every state machine variant.
pub trait Fsm<E: Event, S: State> {
    /// The table this machine reads transitions from.
    fn table(&self) -> &TransitionTable<E, S>;

    /// A copy of the current state.
    fn current(&self) -> S;

    /// Overwrite the current state without consulting the table.
    fn set_current(&mut self, state: S);

    /// Apply `event` to the current state.
    ///
    /// On success the current state becomes the destination. On failure it
    /// is left untouched and the (possibly translated) lookup error is
    /// returned.
    fn trigger(&mut self, event: &E) -> Result<(), TransitionError>;

    /// A new machine sharing this table, starting from `state`.
    fn clone_with_state(&self, state: S) -> Self
    where
        Self: Sized;

    fn is(&self, state: &S) -> bool {
        &self.current() == state
    }

    fn match_current_occurs(&self, event: &E) -> bool {
        self.table().match_occurs(&self.current(), event)
    }

    fn match_current_all_occur(&self, events: &[E]) -> bool {
        self.table().match_all_occur(&self.current(), events)
    }

    fn available_current_events(&self) -> BTreeSet<E> {
        self.table().available_events(&self.current())
    }

    /// Snapshot the current state for later [`restore`](Machine::restore).
    fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint::new(self.table().name(), self.current())
    }

    /// Render the table with this machine's current state highlighted.
    fn visualize(&self, format: VisualizeFormat) -> Result<String, VisualizeError> {
        visualize::visualize(self, format)
    }
}
