//! Pure scoring of a finished attempt.
//!
//! Scoring takes the question list, the collected answers, and the pass
//! threshold, and produces an immutable result. It holds no state and
//! performs no IO, so the same inputs always score the same way.

use serde::Serialize;

use crate::models::{AnswerRecord, Question, QuestionId};

/// XP awarded per correctly answered question.
pub const XP_PER_CORRECT: u32 = 10;

/// Bonus XP awarded on a perfect score.
pub const PERFECT_SCORE_BONUS: u32 = 50;

/// Outcome of a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    /// The recorded option, `None` when the question was never answered.
    pub selected: Option<usize>,
    pub correct_answer: usize,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// Immutable result of scoring one attempt.
///
/// `breakdown` holds one outcome per question, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    pub correct_count: usize,
    pub total_questions: usize,
    /// Rounded whole percentage, 0 to 100.
    pub percentage: u32,
    pub passed: bool,
    pub xp_earned: u32,
    pub breakdown: Vec<QuestionOutcome>,
}

/// Score a set of answers against the question list.
///
/// Unanswered questions count as incorrect. An empty question list
/// scores 0 percent, which passes only a threshold of 0.
pub fn score(questions: &[Question], answers: &AnswerRecord, passing_score: u32) -> ScoredResult {
    let breakdown: Vec<QuestionOutcome> = questions
        .iter()
        .map(|question| {
            let selected = answers.selected(question.id);
            QuestionOutcome {
                question_id: question.id,
                selected,
                correct_answer: question.correct_answer,
                is_correct: selected == Some(question.correct_answer),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct_count = breakdown.iter().filter(|outcome| outcome.is_correct).count();
    let total_questions = questions.len();
    let percentage = percentage_of(correct_count, total_questions);

    ScoredResult {
        correct_count,
        total_questions,
        percentage,
        passed: percentage >= passing_score,
        xp_earned: xp_for(correct_count, percentage),
        breakdown,
    }
}

fn percentage_of(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

fn xp_for(correct_count: usize, percentage: u32) -> u32 {
    let base = correct_count as u32 * XP_PER_CORRECT;
    if percentage == 100 {
        base + PERFECT_SCORE_BONUS
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: QuestionId, correct_answer: usize) -> Question {
        Question {
            id,
            text: format!("question {}", id),
            options: vec![
                "alpha".to_string(),
                "beta".to_string(),
                "gamma".to_string(),
                "delta".to_string(),
            ],
            correct_answer,
            explanation: None,
        }
    }

    fn three_questions() -> Vec<Question> {
        vec![question(1, 2), question(2, 1), question(3, 0)]
    }

    fn record(entries: &[(QuestionId, usize)]) -> AnswerRecord {
        let mut answers = AnswerRecord::new();
        for (id, option) in entries {
            answers.record(*id, *option);
        }
        answers
    }

    #[test]
    fn test_all_correct_earns_perfect_bonus() {
        let questions = three_questions();
        let answers = record(&[(1, 2), (2, 1), (3, 0)]);

        let result = score(&questions, &answers, 70);
        assert_eq!(result.correct_count, 3);
        assert_eq!(result.total_questions, 3);
        assert_eq!(result.percentage, 100);
        assert_eq!(result.xp_earned, 80);
        assert!(result.passed);
    }

    #[test]
    fn test_partial_score_rounds_percentage() {
        let questions = three_questions();
        let answers = record(&[(1, 2), (2, 0), (3, 0)]);

        let result = score(&questions, &answers, 70);
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.percentage, 67);
        assert_eq!(result.xp_earned, 20);
        assert!(!result.passed);
    }

    #[test]
    fn test_one_of_three_rounds_down() {
        let questions = three_questions();
        let answers = record(&[(1, 2), (2, 0), (3, 1)]);

        let result = score(&questions, &answers, 70);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.percentage, 33);
        assert_eq!(result.xp_earned, 10);
    }

    #[test]
    fn test_unanswered_questions_count_as_incorrect() {
        let questions = three_questions();
        let result = score(&questions, &AnswerRecord::new(), 70);

        assert_eq!(result.correct_count, 0);
        assert_eq!(result.percentage, 0);
        assert_eq!(result.xp_earned, 0);
        assert!(!result.passed);
        assert!(result.breakdown.iter().all(|outcome| outcome.selected.is_none()));
        assert!(result.breakdown.iter().all(|outcome| !outcome.is_correct));
    }

    #[test]
    fn test_empty_question_set_scores_zero() {
        let answers = AnswerRecord::new();

        let result = score(&[], &answers, 70);
        assert_eq!(result.percentage, 0);
        assert_eq!(result.total_questions, 0);
        assert!(result.breakdown.is_empty());
        assert!(!result.passed);

        assert!(score(&[], &answers, 0).passed);
    }

    #[test]
    fn test_pass_threshold_is_inclusive() {
        let questions = three_questions();
        let answers = record(&[(1, 2), (2, 1), (3, 3)]);

        assert_eq!(score(&questions, &answers, 67).percentage, 67);
        assert!(score(&questions, &answers, 67).passed);
        assert!(!score(&questions, &answers, 68).passed);
        assert!(score(&questions, &answers, 0).passed);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let questions = three_questions();
        let answers = record(&[(1, 0), (2, 1), (3, 2)]);

        let first = score(&questions, &answers, 70);
        let second = score(&questions, &answers, 70);
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdown_follows_question_order() {
        let mut questions = three_questions();
        questions[1].explanation = Some("beta is right".to_string());
        let answers = record(&[(2, 1), (3, 2)]);

        let result = score(&questions, &answers, 70);
        let ids: Vec<QuestionId> = result.breakdown.iter().map(|o| o.question_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(result.breakdown[0].selected, None);
        assert!(!result.breakdown[0].is_correct);
        assert_eq!(result.breakdown[1].selected, Some(1));
        assert!(result.breakdown[1].is_correct);
        assert_eq!(result.breakdown[1].explanation.as_deref(), Some("beta is right"));
        assert_eq!(result.breakdown[2].selected, Some(2));
        assert_eq!(result.breakdown[2].correct_answer, 0);
    }
}
