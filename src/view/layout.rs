//! Layout rendering (header, error banner, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{SelectionState, Stage, UiState};

pub fn render_header(frame: &mut Frame, area: Rect, selection: &SelectionState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Breadcrumb
            Constraint::Length(14), // Loading indicator
        ])
        .split(area);

    let mut crumbs = vec![Span::styled(
        "Picto Lingua",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    let trail = [
        selection.theme().map(|t| t.name.clone()),
        selection.image().map(|i| i.caption(&i.id).to_string()),
        selection.game_mode().map(|m| m.descriptor().name.to_string()),
    ];
    for crumb in trail.into_iter().flatten() {
        crumbs.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        crumbs.push(Span::raw(crumb));
    }

    let header = Paragraph::new(Line::from(crumbs)).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(header, chunks[0]);

    let indicator = if selection.loading() { "Loading..." } else { "" };
    let loading = Paragraph::new(indicator)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, chunks[1]);
}

pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error (Esc to dismiss) ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(banner, area);
}

/// Key hints for the current stage, or the latest status message
pub fn render_footer(frame: &mut Frame, area: Rect, stage: &Stage, ui_state: &UiState) {
    if let Some(status) = &ui_state.status_message {
        let line = Paragraph::new(format!(" {}", status)).style(Style::default().fg(Color::Green));
        frame.render_widget(line, area);
        return;
    }

    let hints = match stage {
        Stage::ChoosingTheme => "↑/↓ move  Enter select  r reload  ? help  q quit",
        Stage::ChoosingImage { .. } => "↑/↓ move  Enter select  Backspace back  h home  ? help  q quit",
        Stage::ChoosingGameMode { .. } => "↑/↓ move  Enter start  Backspace back  h home  ? help  q quit",
        Stage::Playing { .. } => {
            "Space reveal  ←/→ prev/next  1 difficult  2 learning  3 known  s save  Backspace back"
        }
    };
    let line = Paragraph::new(format!(" {}", hints)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, area);
}
