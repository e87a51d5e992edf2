use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Difficulty, EntryId, GameMode};

/// Maximum accepted length of a player name, in characters.
pub const MAX_NAME_LEN: usize = 15;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("player name cannot be empty")]
    EmptyName,

    #[error("player name is too long: {len} characters (max {MAX_NAME_LEN})")]
    NameTooLong { len: usize },

    #[error("total question count must be > 0")]
    ZeroTotal,

    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

//
// ─── HALL OF FAME ENTRY ────────────────────────────────────────────────────────
//

/// A persisted record of one completed, user-saved session result.
///
/// Entries are immutable once created and the hall of fame is append-only;
/// ranking is computed at read time, never stored.
///
/// Serde field names match the persisted layout, which uses camelCase for
/// the optional table number and an ISO `YYYY-MM-DD` date. Unknown ids or
/// fields from older versions of the store deserialize as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    id: EntryId,
    name: String,
    score: u32,
    total: u32,
    mode: GameMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
    #[serde(
        rename = "selectedSifir",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    selected_sifir: Option<u32>,
    date: NaiveDate,
}

impl HallOfFameEntry {
    /// Create a validated entry.
    ///
    /// The name is trimmed before validation. The caller supplies the id
    /// and calendar date so entry creation stays deterministic in tests.
    ///
    /// # Errors
    ///
    /// Returns `EntryError` when the trimmed name is empty or too long,
    /// when `total` is zero, or when `score` exceeds `total`.
    pub fn new(
        id: EntryId,
        name: &str,
        score: u32,
        total: u32,
        mode: GameMode,
        difficulty: Option<Difficulty>,
        selected_sifir: Option<u32>,
        date: NaiveDate,
    ) -> Result<Self, EntryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EntryError::EmptyName);
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(EntryError::NameTooLong { len });
        }
        if total == 0 {
            return Err(EntryError::ZeroTotal);
        }
        if score > total {
            return Err(EntryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            id,
            name: name.to_owned(),
            score,
            total,
            mode,
            difficulty,
            selected_sifir,
            date,
        })
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// The practice table this entry was earned on, if any.
    #[must_use]
    pub fn selected_sifir(&self) -> Option<u32> {
        self.selected_sifir
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Score as a fraction of total, the primary ranking key.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.score) / f64::from(self.total)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
