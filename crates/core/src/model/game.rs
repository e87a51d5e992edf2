use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── GAME MODE ─────────────────────────────────────────────────────────────────
//

/// Top-level screens and play modes of the game.
///
/// Only `Normal` and `Memorize` sessions produce scores; `Menu` and
/// `HallOfFame` exist so persisted entries can name their origin with the
/// same enum the navigation layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Menu,
    /// Sequential practice of a single multiplication table.
    Normal,
    /// Random questions drawn from a table range.
    Memorize,
    HallOfFame,
}

impl GameMode {
    /// Stable string form used in the persisted layout.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Menu => "menu",
            GameMode::Normal => "normal",
            GameMode::Memorize => "memorize",
            GameMode::HallOfFame => "hall_of_fame",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a `GameMode` from its persisted string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModeParseError(pub String);

impl fmt::Display for GameModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game mode: {}", self.0)
    }
}

impl std::error::Error for GameModeParseError {}

impl FromStr for GameMode {
    type Err = GameModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(GameMode::Menu),
            "normal" => Ok(GameMode::Normal),
            "memorize" => Ok(GameMode::Memorize),
            "hall_of_fame" => Ok(GameMode::HallOfFame),
            other => Err(GameModeParseError(other.to_owned())),
        }
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier for practice sessions.
///
/// Difficulty only changes how many answer choices are offered; the
/// questions themselves are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of answer choices shown at this tier.
    #[must_use]
    pub fn option_count(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Stable string form used in the persisted layout.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── CHOICE STATUS ─────────────────────────────────────────────────────────────
//

/// Per-choice feedback state after an answer is selected.
///
/// `Missed` marks the true answer when a wrong choice was picked, so the
/// presentation layer can highlight it without treating it as selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStatus {
    Idle,
    Correct,
    Incorrect,
    Missed,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
