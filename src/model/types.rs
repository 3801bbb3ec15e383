//! Core type definitions for the application

use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// A learning theme offered by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A themed photo with its attribution data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub photographer: String,
    #[serde(default)]
    pub photographer_url: String,
    #[serde(default, rename = "unsplash_url")]
    pub source_url: String,
    #[serde(default)]
    pub attribution_string: String,
}

impl Image {
    /// Caption used wherever the image itself cannot be shown
    pub fn caption<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.description.is_empty() {
            fallback
        } else {
            &self.description
        }
    }

    pub fn credit(&self) -> String {
        if self.photographer.is_empty() {
            "Photo on Unsplash".to_string()
        } else {
            format!("Photo by {} on Unsplash", self.photographer)
        }
    }
}

/// A vocabulary word with its definition and optional translation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, rename = "dutch_word", skip_serializing_if = "Option::is_none")]
    pub translated_word: Option<String>,
    #[serde(default, rename = "dutch_definition", skip_serializing_if = "Option::is_none")]
    pub translated_definition: Option<String>,
    #[serde(default, rename = "dutch_example", skip_serializing_if = "Option::is_none")]
    pub translated_example: Option<String>,
}

impl VocabularyItem {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            example: None,
            translated_word: None,
            translated_definition: None,
            translated_example: None,
        }
    }
}

/// Identifier of a game mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    Flashcards,
    Matching,
    Quiz,
}

impl GameMode {
    pub fn descriptor(self) -> &'static GameModeDescriptor {
        GAME_MODES
            .iter()
            .find(|d| d.mode == self)
            .unwrap_or(&GAME_MODES[0])
    }

    pub fn is_enabled(self) -> bool {
        self.descriptor().enabled
    }
}

/// Static description of a game mode as offered in the mode picker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameModeDescriptor {
    pub mode: GameMode,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// Every game mode, in display order. Adding a mode is a change to this table.
pub const GAME_MODES: [GameModeDescriptor; 3] = [
    GameModeDescriptor {
        mode: GameMode::Flashcards,
        id: "flashcards",
        name: "Flashcards",
        description: "Learn vocabulary with interactive flashcards",
        enabled: true,
    },
    GameModeDescriptor {
        mode: GameMode::Matching,
        id: "matching",
        name: "Matching Game",
        description: "Match words with their meanings",
        enabled: false,
    },
    GameModeDescriptor {
        mode: GameMode::Quiz,
        id: "quiz",
        name: "Quiz",
        description: "Test your knowledge with a multiple-choice quiz",
        enabled: false,
    },
];

/// Learner-assigned status of a word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    Difficult,
    Learning,
    Known,
}

impl WordStatus {
    pub fn label(self) -> &'static str {
        match self {
            WordStatus::Difficult => "Difficult",
            WordStatus::Learning => "Still Learning",
            WordStatus::Known => "I Know This",
        }
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WordStatus::Difficult => "difficult",
            WordStatus::Learning => "learning",
            WordStatus::Known => "known",
        };
        f.write_str(s)
    }
}

/// Progress on one word as stored by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub word: String,
    pub status: WordStatus,
    #[serde(default, rename = "time_taken_ms", skip_serializing_if = "Option::is_none")]
    pub time_taken_ms: Option<u64>,
    #[serde(default)]
    pub seen_count: u32,
    #[serde(default)]
    pub known_count: u32,
}

/// A learning session as stored by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub theme_id: String,
    pub image_id: String,
    #[serde(default)]
    pub progress: HashMap<String, ProgressItem>,
    pub session_id: String,
    #[serde(default)]
    pub started_at: String,
    #[serde(default)]
    pub last_updated: String,
}

/// Body of `POST /session`. Without a session id the backend creates a new session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SaveSessionRequest {
    pub theme_id: String,
    pub image_id: String,
    pub progress: HashMap<String, ProgressItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Response of `POST /session`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SaveSessionResponse {
    pub session_id: String,
    #[serde(default)]
    pub status: String,
}

/// UI-only state: cursors and popups. Navigation state lives in `SelectionState`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme_selected: usize,
    pub image_selected: usize,
    pub mode_selected: usize,
    pub show_help_popup: bool,
    pub status_message: Option<String>,
    pub status_timestamp: Option<Instant>,
}

/// Format a backend RFC 3339 timestamp for display, passing through anything unparseable
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_flashcards_is_enabled() {
        let enabled: Vec<_> = GAME_MODES.iter().filter(|d| d.enabled).map(|d| d.mode).collect();
        assert_eq!(enabled, vec![GameMode::Flashcards]);
        assert!(!GameMode::Matching.is_enabled());
        assert!(!GameMode::Quiz.is_enabled());
    }

    #[test]
    fn test_vocabulary_item_reads_translation_fields() {
        let json = r#"{
            "word": "dog",
            "definition": "a domesticated canine",
            "dutch_word": "hond",
            "dutch_definition": "een gedomesticeerde hond"
        }"#;
        let item: VocabularyItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.word, "dog");
        assert_eq!(item.example, None);
        assert_eq!(item.translated_word.as_deref(), Some("hond"));
        assert_eq!(item.translated_example, None);
    }

    #[test]
    fn test_image_tolerates_missing_optional_fields() {
        let json = r#"{"id": "img-1", "url": "https://images.example/1.jpg"}"#;
        let image: Image = serde_json::from_str(json).unwrap();
        assert_eq!(image.caption("Animals"), "Animals");
        assert_eq!(image.credit(), "Photo on Unsplash");
    }

    #[test]
    fn test_word_status_wire_format() {
        assert_eq!(serde_json::to_string(&WordStatus::Known).unwrap(), "\"known\"");
        let status: WordStatus = serde_json::from_str("\"difficult\"").unwrap();
        assert_eq!(status, WordStatus::Difficult);
        assert_eq!(WordStatus::Learning.to_string(), "learning");
    }

    #[test]
    fn test_save_request_omits_missing_session_id() {
        let request = SaveSessionRequest {
            theme_id: "animals".to_string(),
            image_id: "img-1".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("session_id").is_none());
        assert_eq!(value["theme_id"], "animals");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-03-01T10:15:00Z"), "2025-03-01 10:15");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
