//! Quiz session management for multiple-choice practice.
//! Handles answering, scoring and advancing through a shuffled list of questions.

use super::Question;
use crate::error::{QuizError, Result};
use crate::matching;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Result of submitting an answer for the current question.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub correct: bool,
    pub correct_answer: String,
    pub selected: String,
    /// Similarity between the selected and the correct answer.
    pub similarity: f64,
}

/// Where the session stands, as seen by the display surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<'a> {
    AwaitingAnswer {
        position: usize,
        question: &'a Question,
    },
    ShowingFeedback {
        position: usize,
        question: &'a Question,
        outcome: &'a Outcome,
    },
    Complete,
}

/// Returned by [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Next(usize),
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
}

impl QuizResults {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            // halves round to even: 1 of 8 is 12%, 3 of 8 is 38%
            (100.0 * score as f64 / total as f64).round_ties_even() as u32
        };
        Self {
            score,
            total,
            percentage,
        }
    }
}

/// Manages one run through a set of questions.
/// Each question can be scored once; the caller advances after feedback.
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    score: usize,
    feedback: Option<Outcome>,
    rng: StdRng,
}

impl QuizSession {
    /// Creates a session with the questions shuffled.
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_rng(questions, StdRng::from_entropy())
    }

    /// Creates a session whose shuffles are drawn from `rng`.
    pub fn with_rng(mut questions: Vec<Question>, mut rng: StdRng) -> Self {
        questions.shuffle(&mut rng);
        Self {
            questions,
            position: 0,
            score: 0,
            feedback: None,
            rng,
        }
    }

    pub fn state(&self) -> SessionState<'_> {
        match (self.questions.get(self.position), &self.feedback) {
            (None, _) => SessionState::Complete,
            (Some(question), None) => SessionState::AwaitingAnswer {
                position: self.position,
                question,
            },
            (Some(question), Some(outcome)) => SessionState::ShowingFeedback {
                position: self.position,
                question,
                outcome,
            },
        }
    }

    pub fn current_question(&self) -> Result<&Question> {
        self.questions
            .get(self.position)
            .ok_or(QuizError::SessionComplete)
    }

    /// Judges `choice` against the current question's answer.
    ///
    /// Only the first submission per question counts; later calls return the
    /// first outcome unchanged.
    pub fn submit_answer(&mut self, choice: &str) -> Result<Outcome> {
        if let Some(outcome) = &self.feedback {
            debug!("Ignoring '{choice}', question {} already answered", self.position + 1);
            return Ok(outcome.clone());
        }

        let question = self.current_question()?;
        let similarity = matching::similarity(choice, &question.correct_answer);
        let outcome = Outcome {
            correct: similarity > matching::MATCH_THRESHOLD,
            correct_answer: question.correct_answer.clone(),
            selected: choice.to_string(),
            similarity,
        };
        debug!(
            "Question {}: selected '{}', expected '{}' (similarity {:.3})",
            self.position + 1,
            outcome.selected,
            outcome.correct_answer,
            outcome.similarity
        );

        if outcome.correct {
            self.score += 1;
        }
        self.feedback = Some(outcome.clone());
        Ok(outcome)
    }

    /// Moves past an answered question.
    pub fn advance(&mut self) -> Result<Progress> {
        if self.is_complete() {
            return Err(QuizError::SessionComplete);
        }
        if self.feedback.is_none() {
            return Err(QuizError::NotAnswered);
        }

        self.position += 1;
        self.feedback = None;

        if self.is_complete() {
            let results = self.results();
            info!(
                "Quiz complete: {}/{} correct ({}%)",
                results.score, results.total, results.percentage
            );
            Ok(Progress::Complete)
        } else {
            Ok(Progress::Next(self.position))
        }
    }

    /// Starts over with a fresh shuffle and a zeroed score.
    pub fn restart(&mut self) {
        self.questions.shuffle(&mut self.rng);
        self.position = 0;
        self.score = 0;
        self.feedback = None;
        info!("Quiz restarted with {} questions", self.questions.len());
    }

    pub fn results(&self) -> QuizResults {
        QuizResults::new(self.score, self.total())
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    pub fn feedback(&self) -> Option<&Outcome> {
        self.feedback.as_ref()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions scored so far, including the current one once answered.
    pub fn answered_count(&self) -> usize {
        self.position + usize::from(self.feedback.is_some())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
