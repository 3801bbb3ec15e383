//! Flashcard game rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{FlashcardSession, VocabularyItem, WordStatus};
use super::progress::render_progress_bar;

fn status_color(status: WordStatus) -> Color {
    match status {
        WordStatus::Difficult => Color::Red,
        WordStatus::Learning => Color::Yellow,
        WordStatus::Known => Color::Green,
    }
}

pub fn render_flashcards(frame: &mut Frame, area: Rect, session: Option<&FlashcardSession>, loading: bool) {
    let Some(session) = session.filter(|s| !s.is_empty()) else {
        let text = if loading {
            "Loading vocabulary..."
        } else {
            "No vocabulary items found for this theme.\n\nPress Backspace to go back."
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Flashcards "));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(6),    // Card
            Constraint::Length(3), // Marked words
        ])
        .split(area);

    render_progress_bar(frame, chunks[0], session);
    if let Some(item) = session.current() {
        render_card(frame, chunks[1], item, session.is_revealed(), session.progress().get(&item.word));
    }
    render_marked_words(frame, chunks[2], session);
}

fn render_card(frame: &mut Frame, area: Rect, item: &VocabularyItem, revealed: bool, status: Option<&WordStatus>) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.word.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(translated) = &item.translated_word {
        lines.push(Line::from(Span::styled(
            translated.clone(),
            Style::default().fg(Color::Magenta),
        )));
    }
    lines.push(Line::from(""));

    if revealed {
        lines.push(Line::from(item.definition.clone()));
        if let Some(translated) = &item.translated_definition {
            lines.push(Line::from(Span::styled(
                translated.clone(),
                Style::default().fg(Color::Magenta),
            )));
        }
        if let Some(example) = &item.example {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("\"{}\"", example),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        if let Some(translated) = &item.translated_example {
            lines.push(Line::from(Span::styled(
                format!("\"{}\"", translated),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Press Space to reveal the definition",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(2));
    if let Some(status) = status {
        block = block
            .title(format!(" {} ", status.label()))
            .border_style(Style::default().fg(status_color(*status)));
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(card, area);
}

fn render_marked_words(frame: &mut Frame, area: Rect, session: &FlashcardSession) {
    let mut spans = Vec::new();
    for (word, status) in session.marked_words() {
        spans.push(Span::styled(
            format!(" {} ", word),
            Style::default().fg(Color::Black).bg(status_color(status)),
        ));
        spans.push(Span::raw(" "));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "Mark cards with 1, 2 or 3",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let badges = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Your Progress "));
    frame.render_widget(badges, area);
}
