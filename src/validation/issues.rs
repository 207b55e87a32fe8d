//! Problems found in a set of declarations.

use thiserror::Error;

/// A single problem with the declarations handed to a table builder.
///
/// Values are rendered with their `Display` form so issues can be reported
/// without carrying the table's type parameters around.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeclarationIssue {
    #[error("event '{event}' is declared without any source state")]
    EmptySources { event: String },

    #[error(
        "event '{event}' from '{source_state}' leads to '{first}' and later to '{second}'"
    )]
    ConflictingDestination {
        event: String,
        source_state: String,
        first: String,
        second: String,
    },
}
