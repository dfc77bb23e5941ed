mod quiz;
mod results;
mod review;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Welcome => welcome::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Review => review::render(frame, area, app),
        Screen::Results => results::render(frame, area, app),
    }
}

/// Letter label for an option index: 0 is A, 1 is B, and so on. The
/// loader caps option lists at 26 entries.
pub(crate) fn option_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Seconds as m:ss.
pub(crate) fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub(crate) fn truncate_text(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
