//! # learnquest-quiz
//!
//! The quiz-taking subsystem of LearnQuest as a terminal application:
//! a session state machine, a pure scoring engine, and a ratatui front
//! end over them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use learnquest_quiz::{QuizRunner, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load a quiz definition from a JSON file
//!     let runner = QuizRunner::from_json("quizzes/web-basics.json")?;
//!
//!     // Take the quiz in the terminal
//!     runner.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The session controller and scoring engine are plain types with no
//! terminal dependency; hosts that bring their own front end can drive
//! [`QuizSession`] and [`score`] directly and forward completed results
//! to a [`ProgressSink`] of their own.

mod app;
mod data;
mod models;
mod progress;
mod scoring;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen};
pub use data::{LoadError, load_quiz_from_json, parse_quiz};
pub use models::{AnswerRecord, DEFAULT_PASSING_SCORE, Question, QuestionId, Quiz};
pub use progress::{AttemptRecord, ProgressLog, ProgressSink};
pub use scoring::{PERFECT_SCORE_BONUS, QuestionOutcome, ScoredResult, XP_PER_CORRECT, score};
pub use session::{QuizSession, SessionError, SessionMode};

/// How often the event loop wakes to redraw and check the clock.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// The countdown granularity.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading the quiz definition.
    Load(LoadError),
    /// Error from the session state machine.
    Session(SessionError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            QuizError::Session(e) => write!(f, "Session error: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Session(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<SessionError> for QuizError {
    fn from(err: SessionError) -> Self {
        QuizError::Session(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz that can be taken in the terminal.
pub struct QuizRunner {
    app: App,
}

impl QuizRunner {
    /// Create a runner for a quiz definition.
    pub fn new(quiz: Quiz) -> Result<Self, QuizError> {
        Self::with_progress(quiz, Box::new(ProgressLog::new()))
    }

    /// Create a runner that hands completed attempts to the given sink.
    pub fn with_progress(quiz: Quiz, progress: Box<dyn ProgressSink>) -> Result<Self, QuizError> {
        if quiz.questions.is_empty() {
            return Err(QuizError::Session(SessionError::EmptyQuiz));
        }
        Ok(Self {
            app: App::with_progress(quiz, progress),
        })
    }

    /// Load a quiz definition from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON quiz definition.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use learnquest_quiz::QuizRunner;
    ///
    /// let runner = QuizRunner::from_json("quizzes/web-basics.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let quiz = load_quiz_from_json(path)?;
        Self::new(quiz)
    }

    /// Take the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and
    /// return when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key.code) {
                    break;
                }
            }
        }

        if app.countdown_active() {
            // Whole elapsed seconds become countdown ticks; the
            // remainder stays accumulated for the next pass.
            while app.countdown_active() && last_tick.elapsed() >= TICK_INTERVAL {
                app.tick();
                last_tick += TICK_INTERVAL;
            }
        } else {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Review => handle_review_input(app, key),
        Screen::Results => handle_results_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.confirm_selection();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.go_previous();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.go_next();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_review_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.review_previous();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.review_next();
            false
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            app.resume_editing();
            false
        }
        KeyCode::Esc => {
            app.keep_editing();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.submit();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.toggle_breakdown();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
