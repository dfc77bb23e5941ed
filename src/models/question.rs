use serde::Deserialize;

/// Identifier of a question within a quiz definition.
pub type QuestionId = u64;

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}
