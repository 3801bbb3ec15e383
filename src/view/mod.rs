//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (scrollable lists, truncation, centering)
//! - `layout`: Header, error banner and footer
//! - `content`: Theme list, image gallery and game mode picker
//! - `flashcards`: The flashcard game
//! - `progress`: Deck progress bar
//! - `overlays`: Help popup

mod utils;
mod layout;
mod content;
mod flashcards;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{FlashcardSession, GameMode, SelectionState, Stage, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        selection: &SelectionState,
        flashcards: Option<&FlashcardSession>,
        ui_state: &UiState,
    ) {
        let error_height = if selection.error.is_some() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Header with breadcrumb
                Constraint::Length(error_height), // Error banner
                Constraint::Min(0),               // Stage content
                Constraint::Length(1),            // Key hints / status
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], selection);

        if let Some(error) = &selection.error {
            layout::render_error_banner(frame, chunks[1], error);
        }

        match selection.stage() {
            Stage::ChoosingTheme => {
                content::render_theme_list(frame, chunks[2], selection, ui_state.theme_selected);
            }
            Stage::ChoosingImage { .. } => {
                content::render_image_gallery(frame, chunks[2], selection, ui_state.image_selected);
            }
            Stage::ChoosingGameMode { .. } => {
                content::render_game_modes(frame, chunks[2], ui_state.mode_selected);
            }
            Stage::Playing { mode: GameMode::Flashcards, .. } => {
                flashcards::render_flashcards(frame, chunks[2], flashcards, selection.loading());
            }
            Stage::Playing { mode, .. } => {
                content::render_unavailable_mode(frame, chunks[2], mode.descriptor().name);
            }
        }

        layout::render_footer(frame, chunks[3], selection.stage(), ui_state);

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
