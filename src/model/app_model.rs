//! Main application model with state management

use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::flashcards::FlashcardSession;
use super::selection::{FetchTicket, SelectionState, Stage};
use super::types::{
    GAME_MODES, GameMode, Image, SaveSessionRequest, SessionData, Theme, UiState, VocabularyItem,
    WordStatus,
};

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save session. Please try again.";

/// How long a status message replaces the key hints
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// A backend session and the game it belongs to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSession {
    pub session_id: String,
    pub theme_id: String,
    pub image_id: String,
}

impl ActiveSession {
    fn matches(&self, theme_id: &str, image_id: &str) -> bool {
        self.theme_id == theme_id && self.image_id == image_id
    }
}

/// Backend session bookkeeping
#[derive(Clone, Debug, Default)]
pub struct SessionRecord {
    /// Session that later saves update
    pub active: Option<ActiveSession>,
    /// Session loaded at startup, used to seed a matching game
    pub resumed: Option<SessionData>,
}

/// Main application model containing all state
///
/// Locks are always taken in field order: selection, flashcards, ui_state, session.
pub struct AppModel {
    selection: Arc<Mutex<SelectionState>>,
    flashcards: Arc<Mutex<Option<FlashcardSession>>>,
    pub ui_state: Arc<Mutex<UiState>>,
    session: Arc<Mutex<SessionRecord>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            selection: Arc::new(Mutex::new(SelectionState::new())),
            flashcards: Arc::new(Mutex::new(None)),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            session: Arc::new(Mutex::new(SessionRecord::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Snapshots for rendering
    // ========================================================================

    pub async fn get_selection_state(&self) -> SelectionState {
        self.selection.lock().await.clone()
    }

    pub async fn get_flashcards(&self) -> Option<FlashcardSession> {
        self.flashcards.lock().await.clone()
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_session_record(&self) -> SessionRecord {
        self.session.lock().await.clone()
    }

    pub async fn stage(&self) -> Stage {
        self.selection.lock().await.stage().clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Navigation transitions
    // ========================================================================

    pub async fn load_themes(&self) -> FetchTicket {
        self.selection.lock().await.load_themes()
    }

    pub async fn select_theme(&self, theme: Theme) -> FetchTicket {
        tracing::info!(theme_id = %theme.id, "Theme selected");
        let ticket = self.selection.lock().await.select_theme(theme);
        *self.flashcards.lock().await = None;
        self.ui_state.lock().await.image_selected = 0;
        ticket
    }

    pub async fn select_image(&self, image: Image) -> bool {
        tracing::info!(image_id = %image.id, "Image selected");
        let accepted = self.selection.lock().await.select_image(image);
        if accepted {
            *self.flashcards.lock().await = None;
            self.ui_state.lock().await.mode_selected = 0;
        }
        accepted
    }

    pub async fn select_game_mode(&self, mode: GameMode) -> Option<FetchTicket> {
        let ticket = self.selection.lock().await.select_game_mode(mode);
        if ticket.is_some() {
            tracing::info!(?mode, "Game started");
            *self.flashcards.lock().await = None;
        }
        ticket
    }

    pub async fn go_back(&self) {
        let mut selection = self.selection.lock().await;
        selection.go_back();
        tracing::debug!(stage = selection.stage().name(), "Navigated back");
        if selection.game_mode().is_none() {
            *self.flashcards.lock().await = None;
        }
    }

    pub async fn reset(&self) {
        self.selection.lock().await.reset();
        *self.flashcards.lock().await = None;
        let mut ui = self.ui_state.lock().await;
        ui.image_selected = 0;
        ui.mode_selected = 0;
    }

    // ========================================================================
    // Fetch results
    // ========================================================================

    pub async fn apply_themes<E: Display>(&self, token: u64, result: Result<Vec<Theme>, E>) {
        let mut selection = self.selection.lock().await;
        if selection.apply_themes(token, result) {
            let mut ui = self.ui_state.lock().await;
            ui.theme_selected = ui.theme_selected.min(selection.themes.len().saturating_sub(1));
        }
    }

    pub async fn apply_images<E: Display>(&self, token: u64, result: Result<Vec<Image>, E>) {
        if self.selection.lock().await.apply_images(token, result) {
            self.ui_state.lock().await.image_selected = 0;
        }
    }

    /// Accepted vocabulary starts a new flashcard session
    pub async fn apply_vocabulary<E: Display>(
        &self,
        token: u64,
        result: Result<Vec<VocabularyItem>, E>,
    ) {
        let mut selection = self.selection.lock().await;
        if !selection.apply_vocabulary(token, result) {
            return;
        }
        if selection.game_mode() != Some(GameMode::Flashcards) {
            return;
        }

        let mut session = FlashcardSession::new(selection.vocabulary.clone());
        if let (Some(theme), Some(image)) = (selection.theme(), selection.image()) {
            let record = self.session.lock().await;
            if let Some(saved) = record
                .resumed
                .as_ref()
                .filter(|s| s.theme_id == theme.id && s.image_id == image.id)
            {
                tracing::info!(session_id = %saved.session_id, "Seeding progress from saved session");
                session.seed_progress(saved);
            }
        }
        tracing::debug!(cards = session.len(), "Flashcard session started");
        *self.flashcards.lock().await = Some(session);
    }

    pub async fn dismiss_error(&self) {
        self.selection.lock().await.dismiss_error();
    }

    pub async fn set_error(&self, message: &str) {
        self.selection.lock().await.error = Some(message.to_string());
    }

    pub async fn set_status_message(&self, message: String) {
        let mut ui = self.ui_state.lock().await;
        ui.status_message = Some(message);
        ui.status_timestamp = Some(Instant::now());
    }

    pub async fn clear_status_message(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.status_message = None;
        ui.status_timestamp = None;
    }

    /// Drop a status message shown for at least `ttl`
    pub async fn expire_status_message(&self, ttl: Duration) {
        let mut ui = self.ui_state.lock().await;
        if ui.status_timestamp.is_some_and(|t| t.elapsed() >= ttl) {
            ui.status_message = None;
            ui.status_timestamp = None;
        }
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn toggle_help_popup(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.show_help_popup = !ui.show_help_popup;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    // ========================================================================
    // Cursor movement
    // ========================================================================

    pub async fn move_selection_up(&self) {
        let stage = self.stage().await;
        let mut ui = self.ui_state.lock().await;
        let cursor = match stage {
            Stage::ChoosingTheme => &mut ui.theme_selected,
            Stage::ChoosingImage { .. } => &mut ui.image_selected,
            Stage::ChoosingGameMode { .. } => &mut ui.mode_selected,
            Stage::Playing { .. } => return,
        };
        *cursor = cursor.saturating_sub(1);
    }

    pub async fn move_selection_down(&self) {
        let selection = self.selection.lock().await;
        let len = match selection.stage() {
            Stage::ChoosingTheme => selection.themes.len(),
            Stage::ChoosingImage { .. } => selection.images.len(),
            Stage::ChoosingGameMode { .. } => GAME_MODES.len(),
            Stage::Playing { .. } => return,
        };
        let mut ui = self.ui_state.lock().await;
        let cursor = match selection.stage() {
            Stage::ChoosingTheme => &mut ui.theme_selected,
            Stage::ChoosingImage { .. } => &mut ui.image_selected,
            _ => &mut ui.mode_selected,
        };
        if *cursor < len.saturating_sub(1) {
            *cursor += 1;
        }
    }

    pub async fn get_selected_theme(&self) -> Option<Theme> {
        let selection = self.selection.lock().await;
        let index = self.ui_state.lock().await.theme_selected;
        selection.themes.get(index).cloned()
    }

    pub async fn get_selected_image(&self) -> Option<Image> {
        let selection = self.selection.lock().await;
        let index = self.ui_state.lock().await.image_selected;
        selection.images.get(index).cloned()
    }

    pub async fn get_selected_game_mode(&self) -> Option<GameMode> {
        let index = self.ui_state.lock().await.mode_selected;
        GAME_MODES.get(index).map(|d| d.mode)
    }

    // ========================================================================
    // Flashcards
    // ========================================================================

    async fn with_flashcards(&self, op: impl FnOnce(&mut FlashcardSession)) {
        if let Some(session) = self.flashcards.lock().await.as_mut() {
            op(session);
        }
    }

    pub async fn flashcard_advance(&self) {
        self.with_flashcards(FlashcardSession::advance).await;
    }

    pub async fn flashcard_retreat(&self) {
        self.with_flashcards(FlashcardSession::retreat).await;
    }

    pub async fn flashcard_toggle_reveal(&self) {
        self.with_flashcards(FlashcardSession::toggle_reveal).await;
    }

    pub async fn flashcard_mark(&self, status: WordStatus) {
        self.with_flashcards(|session| session.mark_current(status)).await;
    }

    // ========================================================================
    // Backend sessions
    // ========================================================================

    pub async fn set_resumed_session(&self, session: SessionData) {
        let mut record = self.session.lock().await;
        record.active = Some(ActiveSession {
            session_id: session.session_id.clone(),
            theme_id: session.theme_id.clone(),
            image_id: session.image_id.clone(),
        });
        record.resumed = Some(session);
    }

    pub async fn set_active_session(&self, session: ActiveSession) {
        self.session.lock().await.active = Some(session);
    }

    /// Progress of the running game, ready to post. `None` outside a game.
    pub async fn build_save_request(&self) -> Option<SaveSessionRequest> {
        let selection = self.selection.lock().await;
        let (theme, image) = (selection.theme()?, selection.image()?);
        let flashcards = self.flashcards.lock().await;
        let progress = flashcards.as_ref()?.progress_items();
        let session_id = self
            .session
            .lock()
            .await
            .active
            .as_ref()
            .filter(|active| active.matches(&theme.id, &image.id))
            .map(|active| active.session_id.clone());
        Some(SaveSessionRequest {
            theme_id: theme.id.clone(),
            image_id: image.id.clone(),
            progress,
            session_id,
        })
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
