//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{GameMode, Stage, WordStatus};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;
        model.clear_status_message().await;

        // Help popup swallows everything except closing it
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        // Keys that work on every screen
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
                return Ok(());
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.set_should_quit(true).await;
                return Ok(());
            }
            KeyCode::Char('?') => {
                model.toggle_help_popup().await;
                return Ok(());
            }
            KeyCode::Esc => {
                model.dismiss_error().await;
                return Ok(());
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.reset().await;
                return Ok(());
            }
            KeyCode::Backspace => {
                model.go_back().await;
                return Ok(());
            }
            _ => {}
        }

        let stage = model.stage().await;
        match &stage {
            Stage::Playing { mode: GameMode::Flashcards, .. } => self.handle_flashcard_key(key).await,
            Stage::Playing { .. } => {}
            _ => match key.code {
                KeyCode::Up | KeyCode::Char('k') => model.move_selection_up().await,
                KeyCode::Down | KeyCode::Char('j') => model.move_selection_down().await,
                KeyCode::Enter => self.open_selected().await,
                KeyCode::Char('r') | KeyCode::Char('R') if stage == Stage::ChoosingTheme => {
                    self.load_themes().await
                }
                _ => {}
            },
        }
        Ok(())
    }

    async fn open_selected(&self) {
        match self.model.stage().await {
            Stage::ChoosingTheme => self.open_selected_theme().await,
            Stage::ChoosingImage { .. } => self.open_selected_image().await,
            Stage::ChoosingGameMode { .. } => self.open_selected_game_mode().await,
            Stage::Playing { .. } => {}
        }
    }

    async fn handle_flashcard_key(&self, key: KeyEvent) {
        let model = &self.model;
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => model.flashcard_toggle_reveal().await,
            KeyCode::Right | KeyCode::Char('n') => model.flashcard_advance().await,
            KeyCode::Left | KeyCode::Char('p') => model.flashcard_retreat().await,
            KeyCode::Char('1') => model.flashcard_mark(WordStatus::Difficult).await,
            KeyCode::Char('2') => model.flashcard_mark(WordStatus::Learning).await,
            KeyCode::Char('3') => model.flashcard_mark(WordStatus::Known).await,
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.save_progress().await;
                });
            }
            _ => {}
        }
    }
}
