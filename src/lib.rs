pub mod error;
pub mod import;
pub mod matching;
pub mod models;

pub use error::{QuizError, Result};
pub use models::{Outcome, Progress, Question, QuizResults, QuizSession, RawRecord, SessionState};
