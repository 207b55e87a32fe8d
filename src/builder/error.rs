//! Build errors for declaration and table builders.

use crate::validation::DeclarationIssue;
use thiserror::Error;

/// Errors that can occur when building declarations, tables and machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Declaration event not specified. Call .event(event)")]
    MissingEvent,

    #[error("Declaration has no source state. Call .from(state) at least once")]
    MissingSourceState,

    #[error("Declaration destination state not specified. Call .to(state)")]
    MissingDestinationState,

    #[error("Table declarations are invalid: {}", format_issues(.0))]
    InvalidDeclarations(Vec<DeclarationIssue>),

    #[error("Initial state '{0}' does not appear in the transition table")]
    UnknownInitialState(String),

    #[error("Table definition could not be parsed: {0}")]
    Definition(#[from] serde_json::Error),
}

fn format_issues(issues: &[DeclarationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
