//! Builder API for ergonomic table construction.
//!
//! This module provides fluent builders, a serializable table definition
//! and macros for creating transition tables with minimal boilerplate.

pub mod declaration;
pub mod definition;
pub mod error;
pub mod macros;
pub mod table;

pub use declaration::{Declaration, DeclarationBuilder};
pub use definition::TableDefinition;
pub use error::BuildError;
pub use table::TableBuilder;

use crate::core::{Event, State};

/// Create a declaration for a single source state.
///
/// # Example
///
/// ```
/// use switchyard::builder::transition;
///
/// let declaration = transition("open", "closed", "opened");
/// assert_eq!(declaration.sources, vec!["closed"]);
/// ```
pub fn transition<E: Event, S: State>(event: E, source: S, destination: S) -> Declaration<E, S> {
    Declaration::new(event, [source], destination)
}

/// Create a declaration that fires from any of several source states.
///
/// # Example
///
/// ```
/// use switchyard::builder::transition_from_any;
///
/// let declaration = transition_from_any("reset", ["one", "two", "three"], "one");
/// assert_eq!(declaration.sources.len(), 3);
/// ```
pub fn transition_from_any<E, S, I>(event: E, sources: I, destination: S) -> Declaration<E, S>
where
    E: Event,
    S: State,
    I: IntoIterator<Item = S>,
{
    Declaration::new(event, sources, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_builds_single_source() {
        let declaration = transition("open", "closed", "opened");

        assert_eq!(declaration.event, "open");
        assert_eq!(declaration.sources, vec!["closed"]);
        assert_eq!(declaration.destination, "opened");
        assert_eq!(declaration.name, None);
    }

    #[test]
    fn transition_from_any_keeps_source_order() {
        let declaration = transition_from_any("reset", ["three", "one", "two"], "one");

        assert_eq!(declaration.sources, vec!["three", "one", "two"]);
    }
}
