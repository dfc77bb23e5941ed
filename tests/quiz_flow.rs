//! Scenario tests driving whole attempts through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use learnquest_quiz::{
    App, ProgressLog, ProgressSink, QuizSession, Screen, ScoredResult, SessionError, SessionMode,
    parse_quiz, score,
};

const WEB_BASICS: &str = r#"{
    "id": 1,
    "title": "Web Development Basics",
    "description": "Test your knowledge of web fundamentals",
    "passing_score": 70,
    "time_limit": 300,
    "questions": [
        {
            "id": 1,
            "text": "What is the capital of France?",
            "options": ["London", "Berlin", "Paris", "Madrid"],
            "correct_answer": 2,
            "explanation": "Paris has been the capital of France since 508 AD."
        },
        {
            "id": 2,
            "text": "Which programming language is known as the language of the web?",
            "options": ["Python", "JavaScript", "Java", "C++"],
            "correct_answer": 1
        },
        {
            "id": 3,
            "text": "What does HTTP stand for?",
            "options": [
                "HyperText Transfer Protocol",
                "High Tech Transfer Protocol",
                "HyperText Translation Protocol",
                "High Transfer Text Protocol"
            ],
            "correct_answer": 0
        }
    ]
}"#;

fn start_session() -> QuizSession {
    let quiz = parse_quiz(WEB_BASICS).expect("definition parses");
    QuizSession::new(quiz).expect("session starts")
}

fn take_quiz(session: &mut QuizSession, options: [usize; 3]) {
    for (index, option) in options.into_iter().enumerate() {
        session.select_answer(option).expect("answer records");
        if index + 1 < options.len() {
            session.next_question();
        }
    }
}

#[test]
fn perfect_attempt_passes_with_bonus() {
    let mut session = start_session();
    take_quiz(&mut session, [2, 1, 0]);
    assert!(session.begin_review());

    let result = session.submit().expect("submission succeeds").clone();
    assert_eq!(result.correct_count, 3);
    assert_eq!(result.total_questions, 3);
    assert_eq!(result.percentage, 100);
    assert_eq!(result.xp_earned, 80);
    assert!(result.passed);
    assert_eq!(result.breakdown.len(), 3);
    assert!(result.breakdown.iter().all(|outcome| outcome.is_correct));
}

#[test]
fn two_of_three_fails_the_threshold() {
    let mut session = start_session();
    take_quiz(&mut session, [2, 0, 0]);
    assert!(session.begin_review());

    let result = session.submit().expect("submission succeeds").clone();
    assert_eq!(result.correct_count, 2);
    assert_eq!(result.percentage, 67);
    assert_eq!(result.xp_earned, 20);
    assert!(!result.passed);
}

#[test]
fn changing_an_answer_in_review_counts_the_final_choice() {
    let mut session = start_session();
    take_quiz(&mut session, [2, 0, 0]);
    assert!(session.begin_review());

    assert!(session.resume_editing(1));
    session.select_answer(1).expect("overwrite records");
    session.next_question();
    assert!(session.begin_review());

    let result = session.submit().expect("submission succeeds").clone();
    assert_eq!(result.correct_count, 3);
    assert_eq!(result.xp_earned, 80);
}

#[test]
fn review_is_gated_until_everything_is_answered() {
    let mut session = start_session();
    session.select_answer(2).expect("answer records");
    session.next_question();
    session.next_question();

    assert!(!session.begin_review());
    assert_eq!(session.mode(), SessionMode::Taking);
    assert_eq!(session.unanswered_indices(), vec![1, 2]);

    let err = session.submit().unwrap_err();
    assert_eq!(err, SessionError::NotReviewing);
}

#[test]
fn timeout_scores_the_partial_record() {
    let quiz = parse_quiz(WEB_BASICS).expect("definition parses");
    let mut session = QuizSession::new(quiz).expect("session starts");
    session.select_answer(2).expect("answer records");

    let mut forced = None;
    for _ in 0..300 {
        if let Some(result) = session.tick() {
            forced = Some(result.clone());
            break;
        }
    }

    let result = forced.expect("countdown forces completion");
    assert_eq!(session.mode(), SessionMode::Completed);
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.percentage, 33);
    assert!(!result.passed);
    assert_eq!(result.breakdown.len(), 3);

    assert!(session.tick().is_none());
    assert_eq!(session.submit().unwrap_err(), SessionError::AlreadyCompleted);
}

struct SharedLog(Rc<RefCell<ProgressLog>>);

impl ProgressSink for SharedLog {
    fn record_attempt(&mut self, quiz_id: u64, quiz_title: &str, result: &ScoredResult) {
        self.0.borrow_mut().record_attempt(quiz_id, quiz_title, result);
    }
}

fn drive_answer(app: &mut App, option: usize) {
    while app.selected_option() != option {
        app.select_next_option();
    }
    app.confirm_selection();
}

#[test]
fn two_attempts_accumulate_progress() {
    let quiz = parse_quiz(WEB_BASICS).expect("definition parses");
    let log = Rc::new(RefCell::new(ProgressLog::new()));
    let mut app = App::with_progress(quiz, Box::new(SharedLog(Rc::clone(&log))));

    for (options, expected_xp) in [([2, 1, 0], 80), ([2, 0, 0], 20)] {
        app.start_quiz();
        assert_eq!(app.screen, Screen::Quiz);
        for option in options {
            drive_answer(&mut app, option);
            app.go_next();
        }
        assert_eq!(app.screen, Screen::Review);
        app.submit();
        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.result().expect("result stored").xp_earned, expected_xp);
        app.restart();
    }

    let log = log.borrow();
    assert_eq!(log.attempts().len(), 2);
    assert_eq!(log.total_xp(), 100);
    assert!(log.attempts()[0].passed);
    assert!(!log.attempts()[1].passed);
}

#[test]
fn scoring_matches_between_direct_and_session_use() {
    let quiz = parse_quiz(WEB_BASICS).expect("definition parses");
    let questions = quiz.questions.clone();
    let passing_score = quiz.passing_score;

    let mut session = QuizSession::new(quiz).expect("session starts");
    take_quiz(&mut session, [2, 1, 3]);
    let answers = session.answers().clone();
    assert!(session.begin_review());
    let from_session = session.submit().expect("submission succeeds").clone();

    let direct = score(&questions, &answers, passing_score);
    assert_eq!(direct, from_session);
}
