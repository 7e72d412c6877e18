//! Engine errors - logic-level failures of the reveal and sequencing core

use thiserror::Error;

/// Errors raised by the engines when they are driven incorrectly or fed a
/// malformed layout snapshot
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("Sequence of {steps} steps is exhausted")]
    ExhaustedSequence { steps: usize },

    #[error("Typewriter requires at least one message")]
    EmptyMessages,

    #[error("Invalid extent for section '{id}': {reason}")]
    InvalidExtent { id: String, reason: String },

    #[error("Duplicate section id '{id}' in layout snapshot")]
    DuplicateSection { id: String },

    #[error("Unknown reveal target {id}")]
    UnknownTarget { id: usize },

    #[error("Invalid engine state: {reason}")]
    InvalidState { reason: String },

    #[error("Invalid theme '{value}', expected 'dark' or 'light'")]
    InvalidTheme { value: String },
}

impl CoreError {
    pub fn exhausted(steps: usize) -> Self {
        Self::ExhaustedSequence { steps }
    }

    pub fn invalid_extent(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExtent {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_section(id: impl Into<String>) -> Self {
        Self::DuplicateSection { id: id.into() }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn invalid_theme(value: impl Into<String>) -> Self {
        Self::InvalidTheme {
            value: value.into(),
        }
    }
}
