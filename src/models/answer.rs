use std::collections::HashMap;

use super::QuestionId;

/// Answers collected while a quiz is being taken, keyed by question id.
///
/// Recording the same question again overwrites the earlier choice. A
/// question with no entry is unanswered; lookups return `None`, which
/// can never equal a valid option index.
#[derive(Debug, Clone, Default)]
pub struct AnswerRecord {
    selected: HashMap<QuestionId, usize>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the chosen option for a question.
    pub fn record(&mut self, question: QuestionId, option: usize) {
        self.selected.insert(question, option);
    }

    /// The chosen option for a question, if one was recorded.
    pub fn selected(&self, question: QuestionId) -> Option<usize> {
        self.selected.get(&question).copied()
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.selected.contains_key(&question)
    }

    /// Number of questions with a recorded answer.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_one_entry() {
        let mut record = AnswerRecord::new();
        record.record(1, 0);
        record.record(1, 3);

        assert_eq!(record.len(), 1);
        assert_eq!(record.selected(1), Some(3));
    }

    #[test]
    fn test_unrecorded_question_has_no_answer() {
        let record = AnswerRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.selected(42), None);
        assert!(!record.contains(42));
    }
}
