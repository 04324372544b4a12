//! Multiple-choice question built from a term/definition record.
//!
//! A term may carry its own answer options on the lines after the question
//! stem. When a `?` is present the stem ends at the first `?`, otherwise the
//! stem is the first line. Terms without options get up to three wrong choices
//! sampled from the options seen in earlier records.
//!
//! A definition listing several lines is a set of accepted answers; one of them
//! is picked at random as the answer for this run.

use super::{DistractorPool, RawRecord};
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of wrong choices sampled for a question without explicit options.
pub const MAX_DISTRACTORS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    /// Builds a question from `record`.
    ///
    /// Explicit options found in the term are added to `pool`; questions without
    /// options draw their distractors from it.
    pub fn build<R: Rng + ?Sized>(
        record: &RawRecord,
        pool: &mut DistractorPool,
        rng: &mut R,
    ) -> Self {
        if record.term.trim().is_empty() || record.definition.trim().is_empty() {
            warn!(
                "Record has a blank term or definition: {:?} / {:?}",
                record.term, record.definition
            );
        }

        let correct_answer = pick_answer(&record.definition, rng);

        if let Some((prompt, options)) = split_term(&record.term) {
            pool.extend(options.iter().map(String::as_str));
            return Self {
                prompt,
                choices: options,
                correct_answer,
            };
        }

        let mut choices = vec![correct_answer.clone()];
        choices.extend(pool.sample_excluding(&correct_answer, MAX_DISTRACTORS, rng));
        choices.shuffle(rng);

        Self {
            prompt: record.term.trim().to_string(),
            choices,
            correct_answer,
        }
    }
}

/// Builds one question per record, in source order, with a fresh pool.
pub fn build_questions<R: Rng + ?Sized>(records: &[RawRecord], rng: &mut R) -> Vec<Question> {
    let mut pool = DistractorPool::new();
    records
        .iter()
        .map(|record| Question::build(record, &mut pool, rng))
        .collect()
}

/// Chooses the answer from a definition, picking one line at random when it
/// lists several.
fn pick_answer<R: Rng + ?Sized>(definition: &str, rng: &mut R) -> String {
    if !definition.contains('\n') {
        return definition.trim().to_string();
    }

    let candidates: Vec<&str> = definition
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match candidates.choose(rng) {
        Some(answer) => {
            debug!("Multiple answers found: {candidates:?}, choosing '{answer}'");
            answer.to_string()
        }
        None => String::new(),
    }
}

/// Splits a multi-line term into its stem and explicit options.
/// Returns None when the term carries no options.
fn split_term(term: &str) -> Option<(String, Vec<String>)> {
    if !term.contains('\n') {
        return None;
    }

    let (prompt, rest) = match term.find('?') {
        Some(idx) => term.split_at(idx + 1),
        None => term.split_once('\n').unwrap_or((term, "")),
    };

    let options: Vec<String> = rest
        .split('\n')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(String::from)
        .collect();

    if options.is_empty() {
        return None;
    }
    Some((prompt.trim().to_string(), options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_single_line_with_empty_pool() {
        let mut pool = DistractorPool::new();
        let record = RawRecord::new("Capital of France?", "Paris");

        let question = Question::build(&record, &mut pool, &mut rng());

        assert_eq!(question.prompt, "Capital of France?");
        assert_eq!(question.choices, vec!["Paris".to_string()]);
        assert_eq!(question.correct_answer, "Paris");
        assert!(pool.is_empty());
    }

    #[test]
    fn test_term_with_question_mark_and_options() {
        let mut pool = DistractorPool::new();
        let record = RawRecord::new(
            "Which planet is largest?\n  Mars\nJupiter \n\nVenus",
            "Jupiter",
        );

        let question = Question::build(&record, &mut pool, &mut rng());

        assert_eq!(question.prompt, "Which planet is largest?");
        assert_eq!(question.choices, vec!["Mars", "Jupiter", "Venus"]);
        assert_eq!(question.correct_answer, "Jupiter");
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_question_mark_splits_inside_first_line() {
        let mut pool = DistractorPool::new();
        let record = RawRecord::new("Pick one? A\nB\nC", "B");

        let question = Question::build(&record, &mut pool, &mut rng());

        assert_eq!(question.prompt, "Pick one?");
        assert_eq!(question.choices, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_term_without_question_mark_uses_first_line() {
        let mut pool = DistractorPool::new();
        let record = RawRecord::new("Select the noble gas\r\nNeon\r\nSodium\r\n", "Neon");

        let question = Question::build(&record, &mut pool, &mut rng());

        assert_eq!(question.prompt, "Select the noble gas");
        assert_eq!(question.choices, vec!["Neon", "Sodium"]);
    }

    #[test]
    fn test_multi_line_term_without_options_samples_pool() {
        let mut pool = DistractorPool::new();
        pool.extend(["Rome", "Madrid"]);
        let record = RawRecord::new("Capital of France?\n   \n", "Paris");

        let question = Question::build(&record, &mut pool, &mut rng());

        assert_eq!(question.prompt, "Capital of France?");
        assert_eq!(question.choices.len(), 3);
        assert!(question.choices.contains(&"Paris".to_string()));
    }

    #[test]
    fn test_single_line_draws_distractors_from_pool() {
        let mut pool = DistractorPool::new();
        pool.extend(["Paris", "Rome", "Madrid", "Berlin", "Lisbon"]);
        let record = RawRecord::new("Capital of France", " Paris ");

        let question = Question::build(&record, &mut pool, &mut rng());

        assert_eq!(question.correct_answer, "Paris");
        assert_eq!(question.choices.len(), 4);
        assert_eq!(
            question.choices.iter().filter(|c| *c == "Paris").count(),
            1
        );
        assert!(question.choices.iter().all(|c| pool.contains(c)));
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_multi_line_definition_picks_one_answer() {
        let mut pool = DistractorPool::new();
        let record = RawRecord::new("Colour of the sky", "blue\n azure \n\n");
        let mut rng = rng();

        for _ in 0..20 {
            let question = Question::build(&record, &mut pool, &mut rng);
            assert!(["blue", "azure"].contains(&question.correct_answer.as_str()));
            assert_eq!(question.choices, vec![question.correct_answer.clone()]);
        }
    }

    #[test]
    fn test_pool_threads_through_source_order() {
        let records = vec![
            RawRecord::new("Largest planet?\nMars\nJupiter\nVenus", "Jupiter"),
            RawRecord::new("Red planet", "Mars"),
            RawRecord::new("Ringed planet", "Saturn"),
        ];

        let questions = build_questions(&records, &mut rng());

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].choices.len(), 3);
        assert!(questions[1].choices.contains(&"Mars".to_string()));
        assert!(questions[1].choices.contains(&"Jupiter".to_string()));
        assert!(questions[1].choices.contains(&"Venus".to_string()));
        assert_eq!(questions[2].choices.len(), 4);
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let records = vec![
            RawRecord::new("Q?\nA\nB\nC\nD\nE", "A"),
            RawRecord::new("Pick", "one\ntwo\nthree"),
        ];

        let first = build_questions(&records, &mut StdRng::seed_from_u64(9));
        let second = build_questions(&records, &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
    }
}
