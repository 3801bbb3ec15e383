//! Main content area rendering (theme list, image gallery, game modes)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{Image, SelectionState, Theme, GAME_MODES};
use super::utils::{item_style, render_scrollable_list, truncate_string};

fn placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str, color: Color) {
    let content = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(content, area);
}

pub fn render_theme_list(frame: &mut Frame, area: Rect, selection: &SelectionState, selected: usize) {
    if selection.themes.is_empty() {
        let text = if selection.loading() {
            "Loading themes..."
        } else {
            "No themes available. Press r to reload."
        };
        placeholder(frame, area, " Choose a Theme ", text, Color::DarkGray);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(6) / 3;
    let items: Vec<ListItem> = selection
        .themes
        .iter()
        .enumerate()
        .map(|(i, theme)| theme_item(theme, i == selected, name_width))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Choose a Theme ")
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Green));
    render_scrollable_list(frame, area, items, selected, block);
}

fn theme_item(theme: &Theme, is_selected: bool, name_width: usize) -> ListItem<'static> {
    let marker = if is_selected { "▶ " } else { "  " };
    let mut spans = vec![Span::styled(
        format!("{}{}", marker, truncate_string(&theme.name, name_width.max(8))),
        item_style(is_selected),
    )];
    if let Some(description) = &theme.description {
        spans.push(Span::styled(
            format!("  {}", description),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}

pub fn render_image_gallery(frame: &mut Frame, area: Rect, selection: &SelectionState, selected: usize) {
    let title = match selection.theme() {
        Some(theme) => format!(" {} Images ", theme.name),
        None => " Images ".to_string(),
    };

    if selection.images.is_empty() {
        let text = if selection.loading() {
            "Loading images..."
        } else {
            "No images found. Backspace to pick another theme."
        };
        placeholder(frame, area, &title, text, Color::DarkGray);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let caption_width = (chunks[0].width as usize).saturating_sub(8);
    let items: Vec<ListItem> = selection
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let label = format!("{:>2}. {}", i + 1, image.caption("Untitled photo"));
            ListItem::new(truncate_string(&label, caption_width)).style(item_style(i == selected))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Green));
    render_scrollable_list(frame, chunks[0], items, selected, block);

    if let Some(image) = selection.images.get(selected) {
        render_image_details(frame, chunks[1], image);
    }
}

fn render_image_details(frame: &mut Frame, area: Rect, image: &Image) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            image.caption("Untitled photo").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if image.width > 0 && image.height > 0 {
        lines.push(Line::from(vec![
            Span::styled("Size   ", label),
            Span::raw(format!("{} × {}", image.width, image.height)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("View   ", label),
        Span::styled(image.url.clone(), Style::default().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(image.credit(), Style::default().fg(Color::Yellow))));
    if !image.photographer_url.is_empty() {
        lines.push(Line::from(Span::styled(image.photographer_url.clone(), label)));
    }
    if !image.attribution_string.is_empty() {
        lines.push(Line::from(Span::styled(image.attribution_string.clone(), label)));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Photo ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(details, area);
}

pub fn render_game_modes(frame: &mut Frame, area: Rect, selected: usize) {
    let items: Vec<ListItem> = GAME_MODES
        .iter()
        .enumerate()
        .map(|(i, descriptor)| {
            let is_selected = i == selected;
            let name_style = if descriptor.enabled {
                item_style(is_selected)
            } else if is_selected {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mut header = vec![Span::styled(descriptor.name, name_style)];
            if !descriptor.enabled {
                header.push(Span::styled(
                    "  Coming soon!",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
                ));
            }
            ListItem::new(vec![
                Line::from(header),
                Line::from(Span::styled(
                    format!("  {}", descriptor.description),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Choose a Game ")
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Green));
    render_scrollable_list(frame, area, items, selected, block);
}

/// Any game mode without a renderer of its own
pub fn render_unavailable_mode(frame: &mut Frame, area: Rect, name: &str) {
    placeholder(
        frame,
        area,
        &format!(" {} ", name),
        "Coming soon! Backspace to choose another game.",
        Color::Yellow,
    );
}
