use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised when constructing a question with broken invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("multiplier must be between 1 and 10, got {0}")]
    MultiplierOutOfRange(u32),

    #[error("multiplicand must be at least 1, got {0}")]
    MultiplicandOutOfRange(u32),

    #[error("option list must have between 2 and 4 choices, got {0}")]
    BadOptionCount(usize),

    #[error("option list does not contain the answer {0}")]
    MissingAnswer(u32),

    #[error("option list contains a duplicate value: {0}")]
    DuplicateOption(u32),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiplication question with its multiple-choice options.
///
/// The answer is derived once from the two factors at construction and
/// never recomputed. Instances are immutable; a session owns its questions
/// and discards them when it ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    multiplier: u32,
    multiplicand: u32,
    answer: u32,
    options: Vec<u32>,
}

impl Question {
    /// Create a question from its factors and pre-generated options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a factor is out of domain, if the option
    /// list is missing the answer, has a bad size, or contains duplicates.
    pub fn new(multiplier: u32, multiplicand: u32, options: Vec<u32>) -> Result<Self, QuestionError> {
        if !(1..=10).contains(&multiplier) {
            return Err(QuestionError::MultiplierOutOfRange(multiplier));
        }
        if multiplicand == 0 {
            return Err(QuestionError::MultiplicandOutOfRange(multiplicand));
        }
        if !(2..=4).contains(&options.len()) {
            return Err(QuestionError::BadOptionCount(options.len()));
        }

        let answer = multiplier * multiplicand;
        if !options.contains(&answer) {
            return Err(QuestionError::MissingAnswer(answer));
        }
        for (i, value) in options.iter().enumerate() {
            if options[..i].contains(value) {
                return Err(QuestionError::DuplicateOption(*value));
            }
        }

        Ok(Self {
            multiplier,
            multiplicand,
            answer,
            options,
        })
    }

    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    #[must_use]
    pub fn multiplicand(&self) -> u32 {
        self.multiplicand
    }

    /// The exact product of the two factors.
    #[must_use]
    pub fn answer(&self) -> u32 {
        self.answer
    }

    /// Answer choices in presentation order. Always contains `answer()`.
    #[must_use]
    pub fn options(&self) -> &[u32] {
        &self.options
    }

    /// Returns true if `value` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, value: u32) -> bool {
        value == self.answer
    }

    /// Prompt text, e.g. `7 × 8 = ?`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} × {} = ?", self.multiplier, self.multiplicand)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
