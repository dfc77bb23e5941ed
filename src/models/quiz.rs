use serde::Deserialize;

use super::Question;

/// Threshold applied when a definition does not name one.
pub const DEFAULT_PASSING_SCORE: u32 = 70;

fn default_passing_score() -> u32 {
    DEFAULT_PASSING_SCORE
}

/// A quiz definition as authored: an ordered, fixed question list plus
/// the pass threshold and optional time limit.
#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<Question>,
    /// Percentage needed to pass, 0 to 100.
    #[serde(default = "default_passing_score")]
    pub passing_score: u32,
    /// Time limit in seconds. `None` means untimed.
    #[serde(default)]
    pub time_limit: Option<u32>,
}

impl Quiz {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}
