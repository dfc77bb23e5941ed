use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Quiz;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let quiz = app.quiz();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.title.as_str(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    if let Some(description) = &quiz.description {
        content.push(Line::from(description.as_str().fg(Color::Gray)));
        content.push(Line::from(""));
    }

    content.push(Line::from(format_metadata(quiz).fg(Color::DarkGray)));
    content.push(Line::from(""));

    match app.notice() {
        Some(notice) => content.push(Line::from(notice.to_string().fg(Color::Red))),
        None => content.push(Line::from("")),
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "ENTER",
        Style::default().fg(Color::Green).bold(),
    )));
    content.push(Line::from("to start".fg(Color::DarkGray)));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn format_metadata(quiz: &Quiz) -> String {
    let limit = match quiz.time_limit {
        Some(seconds) => format!("{} limit", super::format_clock(seconds)),
        None => "no time limit".to_string(),
    };
    format!(
        "{} questions  ·  pass at {}%  ·  {}",
        quiz.total_questions(),
        quiz.passing_score,
        limit
    )
}
