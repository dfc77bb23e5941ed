use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Question;
use crate::scoring::{PERFECT_SCORE_BONUS, ScoredResult};

const QUESTION_PREVIEW_LENGTH: usize = 55;
const EXPLANATION_PREVIEW_LENGTH: usize = 70;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result() else { return };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], result);
    if app.show_breakdown() {
        render_question_breakdown(frame, chunks[2], app, result);
    } else {
        render_breakdown_hint(frame, chunks[2]);
    }
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &ScoredResult) {
    let grade_color = get_grade_color(result.percentage);
    let verdict = if result.passed {
        Span::styled("PASSED", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("FAILED", Style::default().fg(Color::Red).bold())
    };
    let xp_line = if result.percentage == 100 {
        format!(
            "{} XP earned  ·  includes the {} XP perfect score bonus",
            result.xp_earned, PERFECT_SCORE_BONUS
        )
    } else {
        format!("{} XP earned", result.xp_earned)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                result.correct_count, result.total_questions, result.percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(verdict),
        Line::from(xp_line.fg(Color::Yellow)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App, result: &ScoredResult) {
    let mut lines: Vec<Line> = Vec::new();

    let outcomes = result
        .breakdown
        .iter()
        .zip(app.quiz().questions.iter())
        .enumerate()
        .skip(app.results_scroll());

    for (index, (outcome, question)) in outcomes {
        let (symbol, color) = if outcome.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                super::truncate_text(&question.text, QUESTION_PREVIEW_LENGTH),
                Style::default().fg(Color::Gray),
            ),
        ]));

        let detail = match outcome.selected {
            Some(option) if outcome.is_correct => {
                format!(
                    "your answer: {}. {}",
                    super::option_label(option),
                    option_text(question, option)
                )
            }
            Some(option) => {
                format!(
                    "your answer: {}. {}  ·  correct: {}. {}",
                    super::option_label(option),
                    option_text(question, option),
                    super::option_label(outcome.correct_answer),
                    option_text(question, outcome.correct_answer)
                )
            }
            None => format!(
                "no answer  ·  correct: {}. {}",
                super::option_label(outcome.correct_answer),
                option_text(question, outcome.correct_answer)
            ),
        };
        lines.push(Line::from(Span::styled(
            format!("      {}", detail),
            Style::default().fg(Color::DarkGray),
        )));

        if let Some(explanation) = &outcome.explanation {
            lines.push(Line::from(Span::styled(
                format!(
                    "      {}",
                    super::truncate_text(explanation, EXPLANATION_PREVIEW_LENGTH)
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn option_text(question: &Question, index: usize) -> &str {
    question.options.get(index).map(String::as_str).unwrap_or("?")
}

fn render_breakdown_hint(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("v shows the question breakdown")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  v details  ·  r retake  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
