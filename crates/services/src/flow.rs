use rand::Rng;
use tracing::debug;

use sifir_core::model::{Difficulty, HallOfFameEntry};

use crate::error::FlowError;
use crate::hall_of_fame::HallOfFameService;
use crate::questions::QuestionSetBuilder;
use crate::session::GameSession;

/// Orchestrates the lifetime of game sessions and the hall of fame.
///
/// Holds at most one active session. Starting, restarting, or quitting
/// invalidates the outgoing session first, so any feedback callback it
/// still owes is dead before the replacement exists. A finished session's
/// score can be saved exactly once.
pub struct GameFlow {
    session: Option<GameSession>,
    saved: bool,
    hall_of_fame: HallOfFameService,
}

impl GameFlow {
    #[must_use]
    pub fn new(hall_of_fame: HallOfFameService) -> Self {
        Self {
            session: None,
            saved: false,
            hall_of_fame,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    #[must_use]
    pub fn hall_of_fame(&self) -> &HallOfFameService {
        &self.hall_of_fame
    }

    /// Start a practice session on the given table.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Build` for an out-of-domain table.
    pub fn start_practice(
        &mut self,
        table: u32,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> Result<&GameSession, FlowError> {
        let questions = QuestionSetBuilder::practice(table, difficulty).build(rng)?;
        debug!(table, %difficulty, "starting practice session");
        self.install(GameSession::practice(table, difficulty, questions)?)
    }

    /// Start a memorize session over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Build` for an invalid range.
    pub fn start_memorize(
        &mut self,
        low: u32,
        high: u32,
        rng: &mut impl Rng,
    ) -> Result<&GameSession, FlowError> {
        let questions = QuestionSetBuilder::memorize(low, high).build(rng)?;
        debug!(low, high, "starting memorize session");
        self.install(GameSession::memorize(low, high, questions)?)
    }

    /// Replay the current session's configuration with fresh questions.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NoSession` when nothing is active or the
    /// active session carries no replayable configuration.
    pub fn restart(&mut self, rng: &mut impl Rng) -> Result<&GameSession, FlowError> {
        let session = self.session.as_ref().ok_or(FlowError::NoSession)?;
        match (session.selected_sifir(), session.difficulty(), session.range()) {
            (Some(table), Some(difficulty), _) => self.start_practice(table, difficulty, rng),
            (_, _, Some((low, high))) => self.start_memorize(low, high, rng),
            _ => Err(FlowError::NoSession),
        }
    }

    /// Abandon the active session and return to the menu.
    pub fn quit(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.invalidate();
        }
        self.session = None;
        self.saved = false;
    }

    /// Save the finished session's score under the given player name.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NoSession` with no active session,
    /// `FlowError::NotFinished` before the last answer,
    /// `FlowError::AlreadySaved` on a second attempt, and
    /// `FlowError::HallOfFame` for an invalid name.
    pub fn save_score(&mut self, name: &str) -> Result<&HallOfFameEntry, FlowError> {
        let session = self.session.as_ref().ok_or(FlowError::NoSession)?;
        let result = session.result().ok_or(FlowError::NotFinished)?;
        if self.saved {
            return Err(FlowError::AlreadySaved);
        }

        let entry = self.hall_of_fame.append(name, &result)?;
        self.saved = true;
        Ok(entry)
    }

    fn install(&mut self, session: GameSession) -> Result<&GameSession, FlowError> {
        if let Some(old) = self.session.as_mut() {
            old.invalidate();
        }
        self.saved = false;
        Ok(self.session.insert(session))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sifir_core::model::GameMode;
    use sifir_core::time::fixed_clock;
    use std::sync::Arc;
    use storage::repository::InMemoryStore;

    fn flow() -> GameFlow {
        let store = InMemoryStore::new();
        GameFlow::new(HallOfFameService::open(Arc::new(store), fixed_clock()))
    }

    fn answer_all_correctly(flow: &mut GameFlow) {
        loop {
            let session = flow.session_mut().expect("active session");
            let Some(question) = session.current_question() else {
                break;
            };
            let answer = question.answer();
            let selection = session.select(answer).expect("selection accepted");
            session.advance(selection.advance);
        }
    }

    #[test]
    fn restart_replays_the_practice_configuration() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut flow = flow();
        flow.start_practice(9, Difficulty::Hard, &mut rng).unwrap();
        answer_all_correctly(&mut flow);

        let session = flow.restart(&mut rng).unwrap();
        assert_eq!(session.selected_sifir(), Some(9));
        assert_eq!(session.difficulty(), Some(Difficulty::Hard));
        assert!(!session.is_over());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn restart_replays_the_memorize_configuration() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut flow = flow();
        flow.start_memorize(3, 6, &mut rng).unwrap();

        let session = flow.restart(&mut rng).unwrap();
        assert_eq!(session.mode(), GameMode::Memorize);
        assert_eq!(session.range(), Some((3, 6)));
    }

    #[test]
    fn restart_without_a_session_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = flow();
        assert!(matches!(
            flow.restart(&mut rng).unwrap_err(),
            FlowError::NoSession
        ));
    }

    #[test]
    fn quit_discards_the_session() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut flow = flow();
        flow.start_practice(5, Difficulty::Easy, &mut rng).unwrap();
        flow.quit();
        assert!(flow.session().is_none());
    }

    #[test]
    fn stale_token_from_quit_session_cannot_touch_the_next_one() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut flow = flow();
        flow.start_practice(5, Difficulty::Easy, &mut rng).unwrap();
        let stale = {
            let session = flow.session_mut().unwrap();
            let answer = session.current_question().unwrap().answer();
            session.select(answer).unwrap().advance
        };
        flow.quit();

        flow.start_practice(6, Difficulty::Easy, &mut rng).unwrap();
        let session = flow.session_mut().unwrap();
        assert!(!session.advance(stale));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn save_requires_a_finished_session() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut flow = flow();

        assert!(matches!(
            flow.save_score("Ada").unwrap_err(),
            FlowError::NoSession
        ));

        flow.start_practice(5, Difficulty::Easy, &mut rng).unwrap();
        assert!(matches!(
            flow.save_score("Ada").unwrap_err(),
            FlowError::NotFinished
        ));
    }

    #[test]
    fn save_is_latched_to_one_entry_per_session() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut flow = flow();
        flow.start_practice(5, Difficulty::Easy, &mut rng).unwrap();
        answer_all_correctly(&mut flow);

        flow.save_score("Ada").unwrap();
        assert!(matches!(
            flow.save_score("Ada").unwrap_err(),
            FlowError::AlreadySaved
        ));
        assert_eq!(flow.hall_of_fame().entries().len(), 1);

        // A fresh session resets the latch.
        flow.restart(&mut rng).unwrap();
        answer_all_correctly(&mut flow);
        flow.save_score("Ada").unwrap();
        assert_eq!(flow.hall_of_fame().entries().len(), 2);
    }
}
