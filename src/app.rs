use crate::models::Quiz;
use crate::progress::{ProgressLog, ProgressSink};
use crate::scoring::ScoredResult;
use crate::session::QuizSession;

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Review,
    Results,
}

pub struct App {
    pub screen: Screen,
    quiz: Quiz,
    session: Option<QuizSession>,
    selected_option: usize,
    review_cursor: usize,
    results_scroll: usize,
    show_breakdown: bool,
    notice: Option<String>,
    progress: Box<dyn ProgressSink>,
}

impl App {
    pub fn new(quiz: Quiz) -> Self {
        Self::with_progress(quiz, Box::new(ProgressLog::new()))
    }

    pub fn with_progress(quiz: Quiz, progress: Box<dyn ProgressSink>) -> Self {
        Self {
            screen: Screen::Welcome,
            quiz,
            session: None,
            selected_option: 0,
            review_cursor: 0,
            results_scroll: 0,
            show_breakdown: false,
            notice: None,
            progress,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn review_cursor(&self) -> usize {
        self.review_cursor
    }

    pub fn results_scroll(&self) -> usize {
        self.results_scroll
    }

    pub fn show_breakdown(&self) -> bool {
        self.show_breakdown
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn result(&self) -> Option<&ScoredResult> {
        self.session.as_ref().and_then(|session| session.result())
    }

    /// Whether the event loop should be feeding seconds to `tick`.
    pub fn countdown_active(&self) -> bool {
        self.screen == Screen::Quiz
            && self
                .session
                .as_ref()
                .is_some_and(|session| session.time_remaining().is_some())
    }

    pub fn start_quiz(&mut self) {
        match QuizSession::new(self.quiz.clone()) {
            Ok(session) => {
                self.session = Some(session);
                self.screen = Screen::Quiz;
                self.selected_option = 0;
                self.review_cursor = 0;
                self.results_scroll = 0;
                self.show_breakdown = false;
                self.notice = None;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn select_next_option(&mut self) {
        let Some(session) = self.session.as_ref() else { return };
        let count = session.current_question().options.len();
        self.selected_option = (self.selected_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let Some(session) = self.session.as_ref() else { return };
        let count = session.current_question().options.len();
        self.selected_option = (self.selected_option + count - 1) % count;
    }

    /// Record the highlighted option for the current question.
    pub fn confirm_selection(&mut self) {
        self.notice = None;
        let Some(session) = self.session.as_mut() else { return };
        if let Err(err) = session.select_answer(self.selected_option) {
            self.notice = Some(err.to_string());
        }
    }

    /// Move forward; on the last question this requests review instead.
    pub fn go_next(&mut self) {
        self.notice = None;
        let Some(session) = self.session.as_mut() else { return };

        if session.is_last_question() {
            if session.begin_review() {
                self.screen = Screen::Review;
                self.review_cursor = 0;
            } else {
                let unanswered = session.unanswered_indices().len();
                self.notice = Some(format!("{} question(s) still need an answer", unanswered));
            }
        } else {
            session.next_question();
            self.sync_selected_option();
        }
    }

    pub fn go_previous(&mut self) {
        self.notice = None;
        let Some(session) = self.session.as_mut() else { return };
        session.previous_question();
        self.sync_selected_option();
    }

    pub fn review_next(&mut self) {
        let Some(session) = self.session.as_ref() else { return };
        let last = session.total_questions() - 1;
        self.review_cursor = (self.review_cursor + 1).min(last);
    }

    pub fn review_previous(&mut self) {
        self.review_cursor = self.review_cursor.saturating_sub(1);
    }

    /// Jump from review back to the question under the cursor.
    pub fn resume_editing(&mut self) {
        self.notice = None;
        let index = self.review_cursor;
        let resumed = match self.session.as_mut() {
            Some(session) => session.resume_editing(index),
            None => false,
        };
        if resumed {
            self.screen = Screen::Quiz;
            self.sync_selected_option();
        }
    }

    /// Leave review for the last question without picking one to edit.
    pub fn keep_editing(&mut self) {
        self.notice = None;
        let Some(session) = self.session.as_mut() else { return };
        let last = session.total_questions() - 1;
        if session.resume_editing(last) {
            self.screen = Screen::Quiz;
            self.sync_selected_option();
        }
    }

    pub fn submit(&mut self) {
        self.notice = None;
        let Some(session) = self.session.as_mut() else { return };
        let outcome = session.submit().map(|_| ());
        match outcome {
            Ok(()) => self.complete_session(),
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    /// Forward one elapsed second to the session countdown.
    pub fn tick(&mut self) {
        let completed = match self.session.as_mut() {
            Some(session) => session.tick().is_some(),
            None => false,
        };
        if completed {
            self.complete_session();
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .result()
            .map_or(0, |result| result.breakdown.len().saturating_sub(1));
        self.results_scroll = (self.results_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    pub fn toggle_breakdown(&mut self) {
        self.show_breakdown = !self.show_breakdown;
        self.results_scroll = 0;
    }

    /// Drop the finished session and return to the welcome screen. The
    /// next start is a brand-new attempt.
    pub fn restart(&mut self) {
        self.session = None;
        self.screen = Screen::Welcome;
        self.selected_option = 0;
        self.review_cursor = 0;
        self.results_scroll = 0;
        self.show_breakdown = false;
        self.notice = None;
    }

    fn sync_selected_option(&mut self) {
        if let Some(session) = self.session.as_ref() {
            let question = session.current_question();
            self.selected_option = session.answers().selected(question.id).unwrap_or(0);
        }
    }

    fn complete_session(&mut self) {
        if let Some(session) = self.session.as_ref() {
            if let Some(result) = session.result() {
                self.progress.record_attempt(self.quiz.id, &self.quiz.title, result);
            }
        }
        self.screen = Screen::Results;
        self.results_scroll = 0;
        self.show_breakdown = false;
        self.notice = None;
    }
}
