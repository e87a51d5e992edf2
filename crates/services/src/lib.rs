#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod hall_of_fame;
pub mod options;
pub mod questions;
pub mod session;

pub use sifir_core::Clock;

pub use error::{BuildError, FlowError, HallOfFameError, SessionError};
pub use flow::GameFlow;
pub use hall_of_fame::{HallOfFameService, rank};
pub use options::generate_options;
pub use questions::{
    MEMORIZE_OPTION_COUNT, MEMORIZE_QUESTIONS, PRACTICE_QUESTIONS, QuestionSetBuilder,
};
pub use session::{
    AdvanceToken, ChoiceFeedback, GameSession, Outcome, Selection, SessionProgress, SessionResult,
};
