pub mod distractor_pool;
pub mod question;
pub mod quiz_session;
pub mod record;

pub use distractor_pool::DistractorPool;
pub use question::{Question, build_questions};
pub use quiz_session::{Outcome, Progress, QuizResults, QuizSession, SessionState};
pub use record::RawRecord;
