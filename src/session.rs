//! Quiz session state machine.
//!
//! A [`QuizSession`] owns one attempt at a quiz: the answer record, the
//! question pointer, the countdown, and eventually the scored result.
//! It has no UI dependency; the terminal front end and the scenario
//! tests drive it through the same methods.

use crate::models::{AnswerRecord, Question, QuestionId, Quiz};
use crate::scoring::{self, ScoredResult};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Answering questions. Navigation and the countdown are live.
    Taking,
    /// Checking answers before submission. The countdown is paused.
    Reviewing,
    /// Submitted and scored. The session is frozen.
    Completed,
}

/// Error type for session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The quiz definition has no questions.
    EmptyQuiz,
    /// The question id is not part of this quiz.
    UnknownQuestion(QuestionId),
    /// The option index is out of range for the question.
    InvalidOption { question: QuestionId, option: usize },
    /// Submission requires every question to be answered.
    NotAllAnswered { unanswered: usize },
    /// Submission is only allowed from review.
    NotReviewing,
    /// The session was already submitted and scored.
    AlreadyCompleted,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::EmptyQuiz => write!(f, "quiz has no questions"),
            SessionError::UnknownQuestion(id) => {
                write!(f, "question {} is not part of this quiz", id)
            }
            SessionError::InvalidOption { question, option } => {
                write!(f, "option {} is out of range for question {}", option, question)
            }
            SessionError::NotAllAnswered { unanswered } => {
                write!(f, "{} question(s) still need an answer", unanswered)
            }
            SessionError::NotReviewing => write!(f, "submission is only allowed from review"),
            SessionError::AlreadyCompleted => write!(f, "the session was already submitted"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One attempt at a quiz.
pub struct QuizSession {
    quiz: Quiz,
    mode: SessionMode,
    current_index: usize,
    answers: AnswerRecord,
    time_remaining: Option<u32>,
    result: Option<ScoredResult>,
}

impl QuizSession {
    /// Start a new attempt. A quiz without questions is refused.
    pub fn new(quiz: Quiz) -> Result<Self, SessionError> {
        if quiz.questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        let time_remaining = quiz.time_limit.filter(|limit| *limit > 0);

        Ok(Self {
            quiz,
            mode: SessionMode::Taking,
            current_index: 0,
            answers: AnswerRecord::new(),
            time_remaining,
            result: None,
        })
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn questions(&self) -> &[Question] {
        &self.quiz.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current_index]
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.total_questions()
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn all_answered(&self) -> bool {
        self.quiz
            .questions
            .iter()
            .all(|question| self.answers.contains(question.id))
    }

    /// Indices of questions without a recorded answer, in question order.
    pub fn unanswered_indices(&self) -> Vec<usize> {
        self.quiz
            .questions
            .iter()
            .enumerate()
            .filter(|(_, question)| !self.answers.contains(question.id))
            .map(|(index, _)| index)
            .collect()
    }

    /// Seconds left on the countdown, `None` for an untimed quiz.
    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    /// The scored result, present once the session is completed.
    pub fn result(&self) -> Option<&ScoredResult> {
        self.result.as_ref()
    }

    /// Record the chosen option for the current question.
    ///
    /// The pointer does not move; moving on is a separate, explicit step.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        let question = self.current_question().id;
        self.record_answer(question, option)
    }

    /// Record the chosen option for any question of this quiz.
    ///
    /// Overwrites an earlier choice for the same question. An unknown
    /// question id is rejected without touching the record, as is an
    /// option index outside the question's option list. Rejected once
    /// the session is completed.
    pub fn record_answer(
        &mut self,
        question: QuestionId,
        option: usize,
    ) -> Result<(), SessionError> {
        if self.mode == SessionMode::Completed {
            return Err(SessionError::AlreadyCompleted);
        }
        let Some(target) = self.quiz.questions.iter().find(|q| q.id == question) else {
            return Err(SessionError::UnknownQuestion(question));
        };
        if option >= target.options.len() {
            return Err(SessionError::InvalidOption { question, option });
        }

        self.answers.record(question, option);
        Ok(())
    }

    /// Move the pointer forward. No-op on the last question.
    pub fn next_question(&mut self) {
        if self.mode == SessionMode::Taking && !self.is_last_question() {
            self.current_index += 1;
        }
    }

    /// Move the pointer back. No-op on the first question.
    pub fn previous_question(&mut self) {
        if self.mode == SessionMode::Taking {
            self.current_index = self.current_index.saturating_sub(1);
        }
    }

    /// Enter review. Allowed only from the last question with every
    /// question answered; returns whether the transition happened.
    pub fn begin_review(&mut self) -> bool {
        if self.mode == SessionMode::Taking && self.is_last_question() && self.all_answered() {
            self.mode = SessionMode::Reviewing;
            true
        } else {
            false
        }
    }

    /// Leave review and reposition on a question to change its answer.
    pub fn resume_editing(&mut self, index: usize) -> bool {
        if self.mode == SessionMode::Reviewing && index < self.total_questions() {
            self.current_index = index;
            self.mode = SessionMode::Taking;
            true
        } else {
            false
        }
    }

    /// Submit from review, scoring the attempt exactly once.
    ///
    /// Every question must have an answer; this is re-checked here no
    /// matter what the caller enforced. A completed session rejects
    /// further submissions and keeps its original result.
    pub fn submit(&mut self) -> Result<&ScoredResult, SessionError> {
        match self.mode {
            SessionMode::Completed => return Err(SessionError::AlreadyCompleted),
            SessionMode::Taking => return Err(SessionError::NotReviewing),
            SessionMode::Reviewing => {}
        }
        if !self.all_answered() {
            return Err(SessionError::NotAllAnswered {
                unanswered: self.unanswered_indices().len(),
            });
        }

        Ok(self.complete())
    }

    /// Advance the countdown by one second.
    ///
    /// Ticks only while taking a timed quiz; review pauses the clock
    /// and completion stops it, so a stale tick is a no-op. The tick
    /// that reaches zero submits whatever is recorded and returns the
    /// result; unanswered questions score as incorrect.
    pub fn tick(&mut self) -> Option<&ScoredResult> {
        if self.mode != SessionMode::Taking {
            return None;
        }
        let remaining = self.time_remaining?.saturating_sub(1);
        self.time_remaining = Some(remaining);

        if remaining == 0 {
            return Some(self.complete());
        }
        None
    }

    fn complete(&mut self) -> &ScoredResult {
        let result = scoring::score(&self.quiz.questions, &self.answers, self.quiz.passing_score);
        self.mode = SessionMode::Completed;
        self.result.insert(result)
    }
}
