use rand::Rng;
use std::ops::RangeInclusive;

use sifir_core::model::{Difficulty, Question};

use crate::error::BuildError;
use crate::options::generate_options;

/// Number of questions in a practice (sequential) session.
pub const PRACTICE_QUESTIONS: u32 = 10;

/// Number of questions in a memorize (range) session.
pub const MEMORIZE_QUESTIONS: usize = 25;

/// Memorize mode always offers three choices, whatever the difficulty.
pub const MEMORIZE_OPTION_COUNT: usize = 3;

/// Tables selectable for practice mode.
pub const TABLE_DOMAIN: RangeInclusive<u32> = 2..=12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildKind {
    Practice { table: u32, difficulty: Difficulty },
    Memorize { low: u32, high: u32 },
}

/// Builds the ordered question sequence for one session.
///
/// Practice mode walks one table in order (1×n up to 10×n); memorize mode
/// samples independently from a table range. Distractors come from
/// [`generate_options`] in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSetBuilder {
    kind: BuildKind,
}

impl QuestionSetBuilder {
    /// Sequential practice of a single table at the given difficulty.
    #[must_use]
    pub fn practice(table: u32, difficulty: Difficulty) -> Self {
        Self {
            kind: BuildKind::Practice { table, difficulty },
        }
    }

    /// Random questions with multiplicands drawn from `[low, high]`.
    #[must_use]
    pub fn memorize(low: u32, high: u32) -> Self {
        Self {
            kind: BuildKind::Memorize { low, high },
        }
    }

    /// Generate the question sequence.
    ///
    /// # Errors
    ///
    /// Returns `BuildError` when the practice table or either memorize
    /// bound is outside 2..=12, or when the memorize range is empty.
    pub fn build(self, rng: &mut impl Rng) -> Result<Vec<Question>, BuildError> {
        match self.kind {
            BuildKind::Practice { table, difficulty } => build_practice(table, difficulty, rng),
            BuildKind::Memorize { low, high } => build_memorize(low, high, rng),
        }
    }
}

fn build_practice(
    table: u32,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Result<Vec<Question>, BuildError> {
    if !TABLE_DOMAIN.contains(&table) {
        return Err(BuildError::TableOutOfRange(table));
    }

    let count = difficulty.option_count();
    (1..=PRACTICE_QUESTIONS)
        .map(|multiplier| {
            let options = generate_options(multiplier * table, count, rng);
            Question::new(multiplier, table, options).map_err(BuildError::from)
        })
        .collect()
}

fn build_memorize(low: u32, high: u32, rng: &mut impl Rng) -> Result<Vec<Question>, BuildError> {
    // Memorize bounds come from the same table picker as practice mode,
    // which also keeps every product comfortably inside u32.
    for bound in [low, high] {
        if !TABLE_DOMAIN.contains(&bound) {
            return Err(BuildError::RangeOutOfDomain(bound));
        }
    }
    if low > high {
        return Err(BuildError::EmptyRange { low, high });
    }

    // Independent draws; repeated questions are allowed by design.
    (0..MEMORIZE_QUESTIONS)
        .map(|_| {
            let multiplicand = rng.random_range(low..=high);
            let multiplier = rng.random_range(1..=10);
            let options = generate_options(multiplier * multiplicand, MEMORIZE_OPTION_COUNT, rng);
            Question::new(multiplier, multiplicand, options).map_err(BuildError::from)
        })
        .collect()
}
