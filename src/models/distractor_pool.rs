//! Explicit answer options seen so far, reused as wrong choices for later questions.
use rand::Rng;
use rand::seq::SliceRandom;

/// Ordered, duplicate-free collection of answer strings.
///
/// Built up in source order while cards are built, so earlier records feed
/// the distractors of later ones.
#[derive(Debug, Clone, Default)]
pub struct DistractorPool {
    answers: Vec<String>,
}

impl DistractorPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer, trimmed. Blank strings and repeats are skipped.
    pub fn insert(&mut self, answer: &str) {
        let answer = answer.trim();
        if answer.is_empty() || self.contains(answer) {
            return;
        }
        self.answers.push(answer.to_string());
    }

    pub fn extend<'a>(&mut self, answers: impl IntoIterator<Item = &'a str>) {
        for answer in answers {
            self.insert(answer);
        }
    }

    pub fn contains(&self, answer: &str) -> bool {
        self.answers.iter().any(|a| a == answer)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Samples up to `count` distinct answers that differ from `correct`.
    /// Returns fewer when the pool is too small.
    pub fn sample_excluding<R: Rng + ?Sized>(
        &self,
        correct: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let candidates: Vec<&String> = self.answers.iter().filter(|a| *a != correct).collect();
        candidates
            .choose_multiple(rng, count)
            .map(|a| (*a).clone())
            .collect()
    }
}
