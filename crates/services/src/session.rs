use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use sifir_core::model::{ChoiceStatus, Difficulty, GameMode, Question};

use crate::error::SessionError;

// Epochs are unique across all sessions in the process so a token minted
// by a discarded session can never advance its replacement.
static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

fn fresh_epoch() -> u64 {
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

//
// ─── OUTCOMES AND FEEDBACK ─────────────────────────────────────────────────────
//

/// Per-question answer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Unanswered,
    Correct,
    Incorrect,
}

/// Feedback for one answer choice after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceFeedback {
    pub value: u32,
    pub status: ChoiceStatus,
}

/// Permit for the delayed auto-advance that follows every answer.
///
/// The presentation layer holds the token across its feedback delay and
/// then hands it back to [`GameSession::advance`]. The token is valid for
/// exactly one advance of the question it was minted for; a token from a
/// torn-down or replaced session is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    epoch: u64,
    index: usize,
}

/// Result of accepting a selection on the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub correct: bool,
    pub feedback: Vec<ChoiceFeedback>,
    pub advance: AdvanceToken,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub score: u32,
    pub is_over: bool,
}

/// Final outcome of a finished session, ready to become a saved entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    pub score: u32,
    pub total: u32,
    pub mode: GameMode,
    pub difficulty: Option<Difficulty>,
    pub selected_sifir: Option<u32>,
}

//
// ─── GAME SESSION ──────────────────────────────────────────────────────────────
//

/// One run through a generated question sequence.
///
/// Steps through the questions in order. Each question accepts exactly one
/// selection; the follow-up advance is token-gated so the presentation
/// delay between answer and next question cannot double-fire or land on a
/// replaced session.
pub struct GameSession {
    mode: GameMode,
    difficulty: Option<Difficulty>,
    selected_sifir: Option<u32>,
    range: Option<(u32, u32)>,
    questions: Vec<Question>,
    outcomes: Vec<Outcome>,
    current: usize,
    score: u32,
    awaiting_advance: bool,
    finished: bool,
    epoch: u64,
}

impl GameSession {
    /// Start a practice session over the given questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn practice(
        table: u32,
        difficulty: Difficulty,
        questions: Vec<Question>,
    ) -> Result<Self, SessionError> {
        Self::start(
            GameMode::Normal,
            Some(difficulty),
            Some(table),
            None,
            questions,
        )
    }

    /// Start a memorize session over the given questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn memorize(low: u32, high: u32, questions: Vec<Question>) -> Result<Self, SessionError> {
        Self::start(GameMode::Memorize, None, None, Some((low, high)), questions)
    }

    fn start(
        mode: GameMode,
        difficulty: Option<Difficulty>,
        selected_sifir: Option<u32>,
        range: Option<(u32, u32)>,
        questions: Vec<Question>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let outcomes = vec![Outcome::Unanswered; questions.len()];
        Ok(Self {
            mode,
            difficulty,
            selected_sifir,
            range,
            questions,
            outcomes,
            current: 0,
            score: 0,
            awaiting_advance: false,
            finished: false,
            epoch: fresh_epoch(),
        })
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn selected_sifir(&self) -> Option<u32> {
        self.selected_sifir
    }

    /// The memorize range this session was built from, if any.
    #[must_use]
    pub fn range(&self) -> Option<(u32, u32)> {
        self.range
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the session is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// 0-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.finished
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self
                .outcomes
                .iter()
                .filter(|o| **o != Outcome::Unanswered)
                .count(),
            score: self.score,
            is_over: self.finished,
        }
    }

    /// Accept an answer for the current question.
    ///
    /// The first selection per question is recorded: the score increments
    /// when `value` matches the answer, and the returned feedback marks
    /// the chosen option correct or incorrect, with the true answer marked
    /// missed after a wrong pick. Selections after the first (or on a
    /// finished session) are no-ops returning `None`.
    pub fn select(&mut self, value: u32) -> Option<Selection> {
        if self.finished || self.awaiting_advance {
            return None;
        }
        let question = self.questions.get(self.current)?;

        let correct = question.is_correct(value);
        self.outcomes[self.current] = if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        if correct {
            self.score += 1;
        }

        let feedback = question
            .options()
            .iter()
            .map(|&option| {
                let status = if option == value {
                    if correct {
                        ChoiceStatus::Correct
                    } else {
                        ChoiceStatus::Incorrect
                    }
                } else if !correct && question.is_correct(option) {
                    ChoiceStatus::Missed
                } else {
                    ChoiceStatus::Idle
                };
                ChoiceFeedback {
                    value: option,
                    status,
                }
            })
            .collect();

        self.awaiting_advance = true;
        Some(Selection {
            correct,
            feedback,
            advance: AdvanceToken {
                epoch: self.epoch,
                index: self.current,
            },
        })
    }

    /// Apply the delayed advance for a previously accepted selection.
    ///
    /// Moves to the next question, or finishes the session after the last
    /// one. Returns false (and changes nothing) when the token is stale:
    /// wrong epoch after a teardown, wrong question, already applied, or
    /// the session is over.
    pub fn advance(&mut self, token: AdvanceToken) -> bool {
        if self.finished
            || !self.awaiting_advance
            || token.epoch != self.epoch
            || token.index != self.current
        {
            return false;
        }

        self.awaiting_advance = false;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
        true
    }

    /// Invalidate the session on teardown.
    ///
    /// Outstanding advance tokens die with the old epoch, so a callback
    /// firing after the session was abandoned cannot mutate anything.
    pub fn invalidate(&mut self) {
        self.epoch = fresh_epoch();
        self.awaiting_advance = false;
    }

    /// Final result, available once the session is over.
    #[must_use]
    pub fn result(&self) -> Option<SessionResult> {
        if !self.finished {
            return None;
        }
        Some(SessionResult {
            score: self.score,
            total: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
            mode: self.mode,
            difficulty: self.difficulty,
            selected_sifir: self.selected_sifir,
        })
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("mode", &self.mode)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("awaiting_advance", &self.awaiting_advance)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
