//! Visualization errors.

use crate::core::TransitionError;
use thiserror::Error;

/// Errors that can occur while rendering a diagram.
#[derive(Debug, Error)]
pub enum VisualizeError {
    #[error("unknown visualize format: {0}")]
    UnknownFormat(String),

    /// An edge's destination could not be resolved.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}
