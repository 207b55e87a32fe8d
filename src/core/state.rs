//! Value traits for events and states.
//!
//! A transition table is keyed by `(event, source state)` pairs, enumerated
//! in a deterministic order, and rendered into diagrams. Event and state
//! values therefore need to be hashable, totally ordered and printable.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for state machine states.
///
/// Blanket-implemented for every type with the required capabilities, so
/// `String`, `&'static str`, integers and enums declared with
/// [`fsm_enum!`](crate::fsm_enum) all qualify.
///
/// # Required Traits
///
/// - `Clone`: the machine cursor hands out owned copies
/// - `Eq` + `Hash`: states are part of the lookup key
/// - `Ord`: states are sorted for enumeration and diagram output
/// - `Display`: the natural rendering used when no custom name is set
/// - `Send` + `Sync`: tables are shared across threads
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&"closed");
/// assert_state(&String::from("open"));
/// assert_state(&42u8);
/// ```
pub trait State: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static {}

/// Trait for events that trigger transitions.
///
/// Same capabilities as [`State`], kept separate so signatures read as
/// `TransitionTable<E, S>` rather than two anonymous type parameters.
pub trait Event: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static {}

impl<T> Event for T where T: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static {}
