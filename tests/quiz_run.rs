use flashcard_quiz::import::json::import_questions;
use flashcard_quiz::{Progress, QuizError, QuizSession, SessionState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use tempfile::tempdir;

const EXPORT: &str = r#"[
  { "term": "Which gas do plants absorb?\nOxygen\nCarbon dioxide\nNitrogen", "definition": "Carbon dioxide" },
  { "term": "Pick the mammal\nShark\nDolphin\nTrout", "definition": "Dolphin" },
  { "term": "Capital of France?", "definition": "Paris" },
  { "term": "Largest ocean", "definition": "Pacific\nPacific Ocean" }
]"#;

fn write_export(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("export.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_full_run_all_correct() {
    let (_dir, path) = write_export(EXPORT);
    let mut rng = StdRng::seed_from_u64(11);

    let questions = import_questions(&path, &mut rng).unwrap();
    assert_eq!(questions.len(), 4);
    for question in &questions {
        assert!(!question.choices.is_empty());
        assert!(question.choices.len() <= 4);
    }

    let mut session = QuizSession::with_rng(questions, rng);
    let mut steps = 0;
    loop {
        let answer = session.current_question().unwrap().correct_answer.clone();
        let outcome = session.submit_answer(&answer).unwrap();
        assert!(outcome.correct);
        assert!(session.score() <= session.answered_count());

        steps += 1;
        if session.advance().unwrap() == Progress::Complete {
            break;
        }
    }

    assert_eq!(steps, 4);
    assert_eq!(session.state(), SessionState::Complete);
    let results = session.results();
    assert_eq!((results.score, results.total, results.percentage), (4, 4, 100));
}

#[test]
fn test_sampled_distractors_come_from_earlier_options() {
    let (_dir, path) = write_export(EXPORT);

    let questions = import_questions(&path, &mut StdRng::seed_from_u64(5)).unwrap();
    let explicit = ["Oxygen", "Carbon dioxide", "Nitrogen", "Shark", "Dolphin", "Trout"];

    let capital = &questions[2];
    assert_eq!(capital.choices.len(), 4);
    for choice in capital.choices.iter().filter(|c| *c != "Paris") {
        assert!(explicit.contains(&choice.as_str()));
    }
}

#[test]
fn test_half_right_then_restart() {
    let (_dir, path) = write_export(EXPORT);
    let mut rng = StdRng::seed_from_u64(3);
    let questions = import_questions(&path, &mut rng).unwrap();
    let mut session = QuizSession::with_rng(questions, rng);

    for i in 0..4 {
        let answer = if i % 2 == 0 {
            session.current_question().unwrap().correct_answer.clone()
        } else {
            "certainly not this".to_string()
        };
        session.submit_answer(&answer).unwrap();
        session.advance().unwrap();
    }

    assert_eq!(session.results().percentage, 50);
    assert!(matches!(session.current_question(), Err(QuizError::SessionComplete)));

    session.restart();
    assert_eq!((session.position(), session.score()), (0, 0));
    assert!(matches!(session.state(), SessionState::AwaitingAnswer { position: 0, .. }));
}

#[test]
fn test_malformed_export_is_rejected() {
    let (_dir, path) = write_export(r#"[{ "term": "no definition here" }]"#);

    let result = import_questions(&path, &mut StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(QuizError::Json { .. })));
}
