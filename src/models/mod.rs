mod answer;
mod question;
mod quiz;

pub use answer::AnswerRecord;
pub use question::{Question, QuestionId};
pub use quiz::{DEFAULT_PASSING_SCORE, Quiz};
