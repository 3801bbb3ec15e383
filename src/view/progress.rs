//! Progress bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::{FlashcardSession, WordStatus};

pub fn render_progress_bar(frame: &mut Frame, area: Rect, session: &FlashcardSession) {
    let title = format!(" Card {} of {} ", session.current_index() + 1, session.len());

    let count = |status: WordStatus| session.progress().values().filter(|s| **s == status).count();
    let tallies = format!(
        " {} {} | {} {} | {} {} ",
        WordStatus::Difficult,
        count(WordStatus::Difficult),
        WordStatus::Learning,
        count(WordStatus::Learning),
        WordStatus::Known,
        count(WordStatus::Known),
    );

    let ratio = session.completion_ratio().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(tallies).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));

    frame.render_widget(gauge, area);
}
