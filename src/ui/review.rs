use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::QuizSession;

const QUESTION_PREVIEW_LENGTH: usize = 42;
const ANSWER_PREVIEW_LENGTH: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else { return };

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[0], session);
    render_checklist(frame, chunks[1], app, session);
    render_controls(frame, chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let content = vec![
        Line::from(Span::styled(
            "REVIEW YOUR ANSWERS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} of {} answered  ·  submit when ready",
                session.answered_count(),
                session.total_questions()
            )
            .fg(Color::DarkGray),
        ),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_checklist(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
    let lines: Vec<Line> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let is_cursor = index == app.review_cursor();
            let marker = if is_cursor { ">" } else { " " };
            let base = if is_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };

            let answer = match session.answers().selected(question.id) {
                Some(option) => {
                    let text = question.options.get(option).map(String::as_str).unwrap_or("?");
                    Span::styled(
                        format!(
                            "{}. {}",
                            super::option_label(option),
                            super::truncate_text(text, ANSWER_PREVIEW_LENGTH)
                        ),
                        if is_cursor { base } else { Style::default().fg(Color::Green) },
                    )
                }
                None => Span::styled("unanswered", Style::default().fg(Color::Red)),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), base),
                Span::styled(format!("{:2}. ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    super::truncate_text(&question.text, QUESTION_PREVIEW_LENGTH),
                    base,
                ),
                Span::raw("  ·  "),
                answer,
            ])
        })
        .collect();

    let visible = area.height as usize;
    let scroll = (app.review_cursor() + 1).saturating_sub(visible);

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget =
        Paragraph::new("j/k move  ·  enter change answer  ·  s submit  ·  esc keep editing")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
