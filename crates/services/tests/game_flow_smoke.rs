use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use services::{Clock, GameFlow, HallOfFameService};
use sifir_core::model::{Difficulty, GameMode};
use sifir_core::time::fixed_now;
use storage::json_file::JsonFileStore;

fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

fn answer_all(flow: &mut GameFlow, correctly: bool) {
    loop {
        let session = flow.session_mut().expect("active session");
        let Some(question) = session.current_question() else {
            break;
        };
        let answer = question.answer();
        let pick = if correctly {
            answer
        } else {
            *question
                .options()
                .iter()
                .find(|&&v| v != answer)
                .expect("a wrong option exists")
        };
        let selection = session.select(pick).expect("selection accepted");
        session.advance(selection.advance);
    }
}

#[test]
fn perfect_practice_run_lands_in_the_hall_of_fame() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();
    let hall = HallOfFameService::open(Arc::new(store.clone()), fixed_clock());
    let mut flow = GameFlow::new(hall);
    let mut rng = StdRng::seed_from_u64(42);

    flow.start_practice(5, Difficulty::Easy, &mut rng).unwrap();
    {
        let session = flow.session().unwrap();
        assert_eq!(session.total_questions(), 10);
        assert_eq!(session.current_question().unwrap().options().len(), 2);
    }

    // Answers walk the table: 5, 10, ..., 50.
    for expected in (5..=50u32).step_by(5) {
        let session = flow.session_mut().unwrap();
        let question = session.current_question().expect("question available");
        assert_eq!(question.answer(), expected);
        let selection = session.select(expected).unwrap();
        session.advance(selection.advance);
    }

    let session = flow.session().unwrap();
    assert!(session.is_over());
    assert_eq!(session.score(), 10);

    let entry = flow.save_score("Ada").unwrap().clone();
    assert_eq!(entry.name(), "Ada");
    assert_eq!(entry.score(), 10);
    assert_eq!(entry.total(), 10);
    assert_eq!(entry.mode(), GameMode::Normal);
    assert_eq!(entry.selected_sifir(), Some(5));

    // The persisted store reflects the append and survives a reload.
    let reloaded = HallOfFameService::open(Arc::new(store), fixed_clock());
    assert_eq!(reloaded.entries().len(), 1);
    assert_eq!(reloaded.entries()[0], entry);
}

#[test]
fn memorize_run_scores_only_correct_answers() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();
    let hall = HallOfFameService::open(Arc::new(store), fixed_clock());
    let mut flow = GameFlow::new(hall);
    let mut rng = StdRng::seed_from_u64(7);

    flow.start_memorize(2, 5, &mut rng).unwrap();
    {
        let session = flow.session().unwrap();
        assert_eq!(session.total_questions(), 25);
    }

    answer_all(&mut flow, false);

    let session = flow.session().unwrap();
    assert!(session.is_over());
    assert_eq!(session.score(), 0);
    let result = session.result().unwrap();
    assert_eq!(result.total, 25);
    assert_eq!(result.mode, GameMode::Memorize);
    assert_eq!(result.selected_sifir, None);
}

#[test]
fn top_n_separates_modes_across_saved_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();
    let hall = HallOfFameService::open(Arc::new(store), fixed_clock());
    let mut flow = GameFlow::new(hall);
    let mut rng = StdRng::seed_from_u64(13);

    flow.start_practice(7, Difficulty::Medium, &mut rng).unwrap();
    answer_all(&mut flow, true);
    flow.save_score("Nor").unwrap();

    flow.start_memorize(2, 9, &mut rng).unwrap();
    answer_all(&mut flow, true);
    flow.save_score("Mem").unwrap();

    let normal_top = flow.hall_of_fame().top_n(GameMode::Normal, 10);
    assert_eq!(normal_top.len(), 1);
    assert_eq!(normal_top[0].name(), "Nor");

    let memorize_top = flow.hall_of_fame().top_n(GameMode::Memorize, 10);
    assert_eq!(memorize_top.len(), 1);
    assert_eq!(memorize_top[0].name(), "Mem");
}
