//! Progress handoff for completed attempts.

use std::time::Instant;

use uuid::Uuid;

use crate::scoring::ScoredResult;

/// Summary of one completed attempt.
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    pub id: Uuid,
    pub quiz_id: u64,
    pub quiz_title: String,
    pub correct_count: usize,
    pub total_questions: usize,
    pub percentage: u32,
    pub passed: bool,
    pub xp_earned: u32,
    pub finished_at: Instant,
}

/// Receives each completed attempt, exactly once per session.
pub trait ProgressSink {
    fn record_attempt(&mut self, quiz_id: u64, quiz_title: &str, result: &ScoredResult);
}

/// In-memory progress store: attempt history plus accumulated XP.
#[derive(Debug, Default)]
pub struct ProgressLog {
    attempts: Vec<AttemptRecord>,
    total_xp: u32,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts in completion order.
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    pub fn total_xp(&self) -> u32 {
        self.total_xp
    }
}

impl ProgressSink for ProgressLog {
    fn record_attempt(&mut self, quiz_id: u64, quiz_title: &str, result: &ScoredResult) {
        self.attempts.push(AttemptRecord {
            id: Uuid::new_v4(),
            quiz_id,
            quiz_title: quiz_title.to_string(),
            correct_count: result.correct_count,
            total_questions: result.total_questions,
            percentage: result.percentage,
            passed: result.passed,
            xp_earned: result.xp_earned,
            finished_at: Instant::now(),
        });
        self.total_xp += result.xp_earned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(correct_count: usize, percentage: u32, xp_earned: u32) -> ScoredResult {
        ScoredResult {
            correct_count,
            total_questions: 3,
            percentage,
            passed: percentage >= 70,
            xp_earned,
            breakdown: Vec::new(),
        }
    }

    #[test]
    fn test_attempts_accumulate_in_order() {
        let mut log = ProgressLog::new();
        log.record_attempt(1, "Web Development Basics", &result(3, 100, 80));
        log.record_attempt(1, "Web Development Basics", &result(2, 67, 20));

        let attempts = log.attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].quiz_title, "Web Development Basics");
        assert_eq!(attempts[0].xp_earned, 80);
        assert!(attempts[0].passed);
        assert_eq!(attempts[1].xp_earned, 20);
        assert!(!attempts[1].passed);
        assert!(attempts[0].finished_at <= attempts[1].finished_at);
        assert_eq!(log.total_xp(), 100);
    }

    #[test]
    fn test_each_attempt_gets_its_own_id() {
        let mut log = ProgressLog::new();
        log.record_attempt(1, "sample", &result(3, 100, 80));
        log.record_attempt(1, "sample", &result(3, 100, 80));

        assert_ne!(log.attempts()[0].id, log.attempts()[1].id);
    }
}
