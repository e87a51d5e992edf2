use rand::Rng;
use rand::seq::SliceRandom;

/// Offsets are drawn uniformly from this closed range around the answer.
const OFFSET_MIN: i64 = -10;
const OFFSET_MAX: i64 = 9;

/// Draw budget before falling back to deterministic distractors.
///
/// For real inputs (products of factors >= 1) the sampling loop finds
/// enough distinct candidates within a handful of draws; the cap only
/// exists so the function is total for every input.
const MAX_DRAWS: u32 = 256;

/// Generate the multiple-choice options for a question.
///
/// Returns exactly `count` distinct values containing `answer`, in an
/// order that does not reveal which one is correct. Distractors are
/// rejection-sampled near the true answer so they stay plausible:
/// candidate = |answer + offset| with offset in [-10, 9], rejected when
/// zero, equal to the answer, or already picked.
///
/// The random source is injected so callers can seed it for
/// deterministic tests.
pub fn generate_options(answer: u32, count: usize, rng: &mut impl Rng) -> Vec<u32> {
    let mut options = vec![answer];

    let mut draws = 0;
    while options.len() < count && draws < MAX_DRAWS {
        draws += 1;
        let offset = rng.random_range(OFFSET_MIN..=OFFSET_MAX);
        let candidate = i64::from(answer) + offset;
        let candidate = u32::try_from(candidate.unsigned_abs()).unwrap_or(u32::MAX);
        if candidate != 0 && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    // Deterministic fallback once the draw budget is spent: values just
    // above the sampling window (answer + 9 is the highest reachable).
    let mut step = 11_u32;
    while options.len() < count {
        let candidate = answer.saturating_add(step);
        if candidate != 0 && !options.contains(&candidate) {
            options.push(candidate);
        }
        step += 1;
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn options_are_distinct_contain_answer_and_no_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for answer in 1..=144 {
            for count in 2..=4 {
                let options = generate_options(answer, count, &mut rng);
                assert_eq!(options.len(), count, "answer {answer} count {count}");
                assert!(options.contains(&answer));
                assert!(!options.contains(&0));
                for (i, value) in options.iter().enumerate() {
                    assert!(!options[..i].contains(value), "duplicate {value}");
                }
            }
        }
    }

    #[test]
    fn distractors_stay_near_the_answer() {
        let mut rng = StdRng::seed_from_u64(11);
        let options = generate_options(56, 4, &mut rng);
        for value in options {
            assert!((46..=66).contains(&value), "implausible distractor {value}");
        }
    }

    #[test]
    fn small_answers_still_terminate() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = generate_options(1, 4, &mut rng);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&1));
        assert!(!options.contains(&0));
    }

    /// Rng that always produces the lowest value of any requested range.
    ///
    /// With answer 5 every draw becomes offset -10, candidate |5 - 10| = 5,
    /// which is rejected forever, so the draw budget runs out.
    struct StuckRng;

    impl rand::RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn draw_budget_exhaustion_falls_back_deterministically() {
        let options = generate_options(5, 4, &mut StuckRng);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&5));
        assert!(!options.contains(&0));
        for (i, value) in options.iter().enumerate() {
            assert!(!options[..i].contains(value));
        }
        // Fallback values sit just outside the sampling window.
        for value in options.iter().filter(|&&v| v != 5) {
            assert!(*value >= 16);
        }
    }

    #[test]
    fn order_varies_across_seeds() {
        let a = generate_options(24, 4, &mut StdRng::seed_from_u64(1));
        let b = generate_options(24, 4, &mut StdRng::seed_from_u64(2));
        // Same guarantee set, but the correct answer must not sit at a
        // fixed position. Seeds are chosen so the orders differ.
        assert_ne!(a, b);
    }
}
