//! Transition lookup errors and the error translator hook.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors produced when a transition lookup fails.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The event is declared in the table, but not from this source state.
    #[error("fsm: event '{event}' inappropriate in the state '{state}'")]
    InappropriateEvent { event: String, state: String },

    /// The event does not appear in any table entry.
    #[error("fsm: event '{event}' does not exist")]
    NonExistentEvent { event: String },

    /// Replacement produced by an [`ErrorTranslator`].
    #[error(transparent)]
    Custom(Box<dyn StdError + Send + Sync>),
}

/// Classification of a [`TransitionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InappropriateEvent,
    NonExistentEvent,
    Custom,
}

impl TransitionError {
    /// Wrap a domain error, typically from inside a translator.
    pub fn custom<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::Custom(error.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InappropriateEvent { .. } => ErrorKind::InappropriateEvent,
            Self::NonExistentEvent { .. } => ErrorKind::NonExistentEvent,
            Self::Custom(_) => ErrorKind::Custom,
        }
    }

    pub fn is_inappropriate_event(&self) -> bool {
        self.kind() == ErrorKind::InappropriateEvent
    }

    pub fn is_non_existent_event(&self) -> bool {
        self.kind() == ErrorKind::NonExistentEvent
    }
}

/// Replaces canonical lookup errors with domain-specific ones.
///
/// Implementations must return errors they do not recognize unchanged.
/// Any `Fn(TransitionError) -> TransitionError` closure is a translator.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{ErrorTranslator, TransitionError};
///
/// let translator = |err: TransitionError| {
///     if err.is_non_existent_event() {
///         TransitionError::custom("no such button on this lamp")
///     } else {
///         err
///     }
/// };
///
/// let translated = translator.translate(TransitionError::NonExistentEvent {
///     event: "explode".to_string(),
/// });
/// assert_eq!(translated.to_string(), "no such button on this lamp");
/// ```
pub trait ErrorTranslator: Send + Sync {
    fn translate(&self, error: TransitionError) -> TransitionError;
}

impl<F> ErrorTranslator for F
where
    F: Fn(TransitionError) -> TransitionError + Send + Sync,
{
    fn translate(&self, error: TransitionError) -> TransitionError {
        self(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classifies_each_variant() {
        let inappropriate = TransitionError::InappropriateEvent {
            event: "open".to_string(),
            state: "opened".to_string(),
        };
        let missing = TransitionError::NonExistentEvent {
            event: "lock".to_string(),
        };
        let custom = TransitionError::custom("boom");

        assert_eq!(inappropriate.kind(), ErrorKind::InappropriateEvent);
        assert_eq!(missing.kind(), ErrorKind::NonExistentEvent);
        assert_eq!(custom.kind(), ErrorKind::Custom);
    }

    #[test]
    fn messages_name_event_and_state() {
        let err = TransitionError::InappropriateEvent {
            event: "open".to_string(),
            state: "opened".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fsm: event 'open' inappropriate in the state 'opened'"
        );

        let err = TransitionError::NonExistentEvent {
            event: "lock".to_string(),
        };
        assert_eq!(err.to_string(), "fsm: event 'lock' does not exist");
    }

    #[test]
    fn custom_error_is_transparent() {
        let err = TransitionError::custom("err1");
        assert_eq!(err.to_string(), "err1");
    }

    #[test]
    fn closure_translator_passes_unknown_errors_through() {
        let translator = |err: TransitionError| match err {
            TransitionError::InappropriateEvent { .. } => TransitionError::custom("err1"),
            other => other,
        };

        let passed = translator.translate(TransitionError::NonExistentEvent {
            event: "lock".to_string(),
        });
        assert!(passed.is_non_existent_event());

        let replaced = translator.translate(TransitionError::InappropriateEvent {
            event: "open".to_string(),
            state: "opened".to_string(),
        });
        assert_eq!(replaced.to_string(), "err1");
    }
}
