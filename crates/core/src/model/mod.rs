mod entry;
mod game;
mod ids;
mod question;

pub use entry::{EntryError, HallOfFameEntry, MAX_NAME_LEN};
pub use game::{ChoiceStatus, Difficulty, GameMode, GameModeParseError};
pub use ids::EntryId;
pub use question::{Question, QuestionError};
