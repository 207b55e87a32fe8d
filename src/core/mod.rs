//! Core transition table types and logic.
//!
//! This module contains the immutable part of a state machine:
//! - Event and state value traits
//! - The transition table and its lookup rules
//! - Lookup errors and the error translator hook
//!
//! Nothing in here holds a current state; see [`crate::machine`] for that.

mod error;
mod state;
mod table;

pub use error::{ErrorKind, ErrorTranslator, TransitionError};
pub use state::{Event, State};
pub use table::{TransitionTable, TriggerSource};
