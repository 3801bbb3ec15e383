//! Navigation state machine: theme → image → game mode → playing
//!
//! The chosen entities live inside [`Stage`], so an image can only exist
//! alongside a theme and a game mode only alongside both. Transitions that need
//! data return a [`FetchTicket`]; the caller runs the fetch and hands the
//! result back through one of the `apply_*` methods together with the ticket.
//! Only the most recently issued ticket of each kind is accepted.

use std::fmt::Display;

use super::types::{GameMode, Image, Theme, VocabularyItem};

/// Number of vocabulary items requested when a game starts
pub const DEFAULT_VOCABULARY_COUNT: u32 = 10;

/// Which fetch a ticket or failure belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Themes,
    Images,
    Vocabulary,
}

impl FetchKind {
    /// Fixed message shown to the user when this fetch fails
    pub fn error_message(self) -> &'static str {
        match self {
            FetchKind::Themes => "Failed to load themes. Please try again.",
            FetchKind::Images => "Failed to load images. Please try again.",
            FetchKind::Vocabulary => "Failed to load vocabulary. Please try again.",
        }
    }
}

/// A fetch the state machine wants performed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchTicket {
    Themes { token: u64 },
    Images { token: u64, theme_id: String },
    Vocabulary { token: u64, theme_id: String, count: u32 },
}

impl FetchTicket {
    pub fn kind(&self) -> FetchKind {
        match self {
            FetchTicket::Themes { .. } => FetchKind::Themes,
            FetchTicket::Images { .. } => FetchKind::Images,
            FetchTicket::Vocabulary { .. } => FetchKind::Vocabulary,
        }
    }

    pub fn token(&self) -> u64 {
        match self {
            FetchTicket::Themes { token }
            | FetchTicket::Images { token, .. }
            | FetchTicket::Vocabulary { token, .. } => *token,
        }
    }
}

/// Current navigation stage with the selections made so far
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    ChoosingTheme,
    ChoosingImage {
        theme: Theme,
    },
    ChoosingGameMode {
        theme: Theme,
        image: Image,
    },
    Playing {
        theme: Theme,
        image: Image,
        mode: GameMode,
    },
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::ChoosingTheme => "choosing-theme",
            Stage::ChoosingImage { .. } => "choosing-image",
            Stage::ChoosingGameMode { .. } => "choosing-game-mode",
            Stage::Playing { .. } => "playing",
        }
    }
}

/// Latest outstanding request per fetch kind. `None` means nothing is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tokens {
    issued: u64,
    themes: Option<u64>,
    images: Option<u64>,
    vocabulary: Option<u64>,
}

impl Tokens {
    fn slot(&mut self, kind: FetchKind) -> &mut Option<u64> {
        match kind {
            FetchKind::Themes => &mut self.themes,
            FetchKind::Images => &mut self.images,
            FetchKind::Vocabulary => &mut self.vocabulary,
        }
    }

    fn issue(&mut self, kind: FetchKind) -> u64 {
        self.issued += 1;
        let token = self.issued;
        *self.slot(kind) = Some(token);
        token
    }

    /// Consume the token if it is the latest for its kind
    fn settle(&mut self, kind: FetchKind, token: u64) -> bool {
        let slot = self.slot(kind);
        if *slot == Some(token) {
            *slot = None;
            true
        } else {
            false
        }
    }

    fn abandon(&mut self, kind: FetchKind) {
        *self.slot(kind) = None;
    }

    fn any_pending(&self) -> bool {
        self.themes.is_some() || self.images.is_some() || self.vocabulary.is_some()
    }
}

/// Selection state: stage, fetched sequences, loading and error
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    stage: Stage,
    pub themes: Vec<Theme>,
    pub images: Vec<Image>,
    pub vocabulary: Vec<VocabularyItem>,
    pub error: Option<String>,
    tokens: Tokens,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// True while any accepted fetch is still in flight
    pub fn loading(&self) -> bool {
        self.tokens.any_pending()
    }

    pub fn theme(&self) -> Option<&Theme> {
        match &self.stage {
            Stage::ChoosingTheme => None,
            Stage::ChoosingImage { theme }
            | Stage::ChoosingGameMode { theme, .. }
            | Stage::Playing { theme, .. } => Some(theme),
        }
    }

    pub fn image(&self) -> Option<&Image> {
        match &self.stage {
            Stage::ChoosingGameMode { image, .. } | Stage::Playing { image, .. } => Some(image),
            _ => None,
        }
    }

    pub fn game_mode(&self) -> Option<GameMode> {
        match &self.stage {
            Stage::Playing { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// Request the theme list
    pub fn load_themes(&mut self) -> FetchTicket {
        FetchTicket::Themes {
            token: self.tokens.issue(FetchKind::Themes),
        }
    }

    /// Choose a theme from any stage and request its images
    pub fn select_theme(&mut self, theme: Theme) -> FetchTicket {
        let theme_id = theme.id.clone();
        self.stage = Stage::ChoosingImage { theme };
        self.tokens.abandon(FetchKind::Vocabulary);
        self.images.clear();
        FetchTicket::Images {
            token: self.tokens.issue(FetchKind::Images),
            theme_id,
        }
    }

    /// Choose an image; ignored unless a theme is selected
    pub fn select_image(&mut self, image: Image) -> bool {
        let Some(theme) = self.theme().cloned() else {
            tracing::debug!(image_id = %image.id, "Ignoring image selection without a theme");
            return false;
        };
        self.stage = Stage::ChoosingGameMode { theme, image };
        self.tokens.abandon(FetchKind::Vocabulary);
        true
    }

    /// Start a game; ignored for disabled modes or without theme and image
    pub fn select_game_mode(&mut self, mode: GameMode) -> Option<FetchTicket> {
        if !mode.is_enabled() {
            tracing::debug!(?mode, "Ignoring disabled game mode");
            return None;
        }
        let (theme, image) = match &self.stage {
            Stage::ChoosingGameMode { theme, image } | Stage::Playing { theme, image, .. } => {
                (theme.clone(), image.clone())
            }
            _ => {
                tracing::debug!(?mode, stage = self.stage.name(), "Ignoring game mode selection");
                return None;
            }
        };
        let theme_id = theme.id.clone();
        self.stage = Stage::Playing { theme, image, mode };
        self.vocabulary.clear();
        Some(FetchTicket::Vocabulary {
            token: self.tokens.issue(FetchKind::Vocabulary),
            theme_id,
            count: DEFAULT_VOCABULARY_COUNT,
        })
    }

    /// Back to theme selection. Fetched lists and the error are left alone;
    /// in-flight image and vocabulary requests are abandoned.
    pub fn reset(&mut self) {
        self.stage = Stage::ChoosingTheme;
        self.tokens.abandon(FetchKind::Images);
        self.tokens.abandon(FetchKind::Vocabulary);
    }

    /// Step back one stage
    pub fn go_back(&mut self) {
        self.stage = match std::mem::take(&mut self.stage) {
            Stage::ChoosingTheme => Stage::ChoosingTheme,
            Stage::ChoosingImage { .. } => {
                self.tokens.abandon(FetchKind::Images);
                Stage::ChoosingTheme
            }
            Stage::ChoosingGameMode { theme, .. } => Stage::ChoosingImage { theme },
            Stage::Playing { theme, image, .. } => {
                self.tokens.abandon(FetchKind::Vocabulary);
                Stage::ChoosingGameMode { theme, image }
            }
        };
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn apply_themes<E: Display>(&mut self, token: u64, result: Result<Vec<Theme>, E>) -> bool {
        self.apply(FetchKind::Themes, token, result, |state, themes| state.themes = themes)
    }

    pub fn apply_images<E: Display>(&mut self, token: u64, result: Result<Vec<Image>, E>) -> bool {
        self.apply(FetchKind::Images, token, result, |state, images| state.images = images)
    }

    pub fn apply_vocabulary<E: Display>(
        &mut self,
        token: u64,
        result: Result<Vec<VocabularyItem>, E>,
    ) -> bool {
        self.apply(FetchKind::Vocabulary, token, result, |state, items| {
            state.vocabulary = items
        })
    }

    /// Returns false when the response was stale and dropped
    fn apply<T, E: Display>(
        &mut self,
        kind: FetchKind,
        token: u64,
        result: Result<T, E>,
        store: impl FnOnce(&mut Self, T),
    ) -> bool {
        if !self.tokens.settle(kind, token) {
            tracing::debug!(?kind, token, "Discarding stale response");
            return false;
        }
        match result {
            Ok(data) => store(self, data),
            Err(e) => {
                tracing::warn!(?kind, error = %e, "Fetch failed");
                self.error = Some(kind.error_message().to_string());
            }
        }
        true
    }
}
