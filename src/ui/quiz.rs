use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::session::QuizSession;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else { return };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], session);
    render_question_text(frame, chunks[1], &session.current_question().text);
    render_options(frame, chunks[2], app, session);
    render_notice(frame, chunks[3], app, session);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let halves =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).split(area);

    let progress = format!(
        "Question {} of {}  ·  {} answered",
        session.current_index() + 1,
        session.total_questions(),
        session.answered_count(),
    );
    frame.render_widget(Paragraph::new(progress).fg(Color::DarkGray), halves[0]);

    if let Some(remaining) = session.time_remaining() {
        let style = if remaining < 60 {
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let clock = Paragraph::new(Span::styled(super::format_clock(remaining), style))
            .alignment(Alignment::Right);
        frame.render_widget(clock, halves[1]);
    }
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
    let question = session.current_question();
    let recorded = session.answers().selected(question.id);
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == app.selected_option();
        let is_recorded = recorded == Some(index);

        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else if is_recorded {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor {
            ">"
        } else if is_recorded {
            "*"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", super::option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
    let line = if let Some(notice) = app.notice() {
        Line::from(notice.to_string().fg(Color::Yellow))
    } else if session.is_last_question() && session.all_answered() {
        Line::from("all questions answered  ·  press l to review".fg(Color::Green))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k select  ·  enter record  ·  h/l move  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
