//! Overlay rendering (help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::utils::centered_rect;

const KEYBINDINGS: [(&str, &str); 19] = [
    ("", "── Navigation ──"),
    ("↑ / ↓", "Move selection"),
    ("Enter", "Select"),
    ("Backspace", "Go back one step"),
    ("H", "Back to themes"),
    ("R", "Reload themes"),
    ("", ""),
    ("", "── Flashcards ──"),
    ("Space", "Reveal / hide definition"),
    ("← / →", "Previous / next card"),
    ("1", "Mark difficult"),
    ("2", "Mark still learning"),
    ("3", "Mark known"),
    ("S", "Save progress"),
    ("", ""),
    ("", "── General ──"),
    ("Esc", "Dismiss error"),
    ("?", "Toggle this help"),
    ("Q", "Quit"),
];

pub fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect(frame.area(), 50, KEYBINDINGS.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = KEYBINDINGS
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^46}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (? or Esc to close) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help_text, popup_area);
}
