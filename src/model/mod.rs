//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Backend entities, game mode table and UI state
//! - `selection`: Theme → image → game mode navigation state machine
//! - `flashcards`: Flashcard session progress
//! - `api_client`: Backend HTTP client
//! - `app_model`: Main application model with state management methods

mod types;
mod selection;
mod flashcards;
mod api_client;
mod app_model;

pub use types::{
    format_timestamp, GameMode, GameModeDescriptor, Image, ProgressItem, SaveSessionRequest,
    SaveSessionResponse, SessionData, Theme, UiState, VocabularyItem, WordStatus, GAME_MODES,
};

pub use selection::{FetchKind, FetchTicket, SelectionState, Stage, DEFAULT_VOCABULARY_COUNT};

pub use flashcards::FlashcardSession;

pub use api_client::{ApiClient, ApiError, ApiResult, VocabularyApi};

pub use app_model::{ActiveSession, AppModel, SessionRecord, SAVE_FAILED_MESSAGE, STATUS_MESSAGE_TTL};
