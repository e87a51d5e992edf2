//! Shared error types for the services crate.

use thiserror::Error;

use sifir_core::model::{EntryError, QuestionError};

/// Errors emitted while building a question set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    #[error("practice table must be between 2 and 12, got {0}")]
    TableOutOfRange(u32),

    #[error("range bound must be between 2 and 12, got {0}")]
    RangeOutOfDomain(u32),

    #[error("invalid range: low {low} is greater than high {high}")]
    EmptyRange { low: u32, high: u32 },

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by the session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
}

/// Errors emitted by the hall-of-fame service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HallOfFameError {
    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Errors emitted by the game flow orchestrator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("no active session")]
    NoSession,

    #[error("session is not finished")]
    NotFinished,

    #[error("score has already been saved for this session")]
    AlreadySaved,

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    HallOfFame(#[from] HallOfFameError),
}
