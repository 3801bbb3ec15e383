//! Flashcard session: deck position, reveal flag and per-word progress

use std::collections::HashMap;

use super::types::{ProgressItem, SessionData, VocabularyItem, WordStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    seen: u32,
    known: u32,
}

/// State of one pass through a vocabulary deck
#[derive(Clone, Debug, Default)]
pub struct FlashcardSession {
    deck: Vec<VocabularyItem>,
    current_index: usize,
    revealed: bool,
    progress: HashMap<String, WordStatus>,
    tallies: HashMap<String, Tally>,
}

impl FlashcardSession {
    pub fn new(deck: Vec<VocabularyItem>) -> Self {
        Self {
            deck,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> Option<&VocabularyItem> {
        self.deck.get(self.current_index)
    }

    pub fn progress(&self) -> &HashMap<String, WordStatus> {
        &self.progress
    }

    /// Share of the deck before the current card (0.0 on the first card)
    pub fn completion_ratio(&self) -> f64 {
        if self.deck.is_empty() {
            0.0
        } else {
            self.current_index as f64 / self.deck.len() as f64
        }
    }

    /// Next card, wrapping to the first after the last
    pub fn advance(&mut self) {
        self.revealed = false;
        if self.current_index + 1 < self.deck.len() {
            self.current_index += 1;
        } else {
            self.current_index = 0;
        }
    }

    pub fn retreat(&mut self) {
        self.revealed = false;
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Record a status for the current word and move on
    pub fn mark_current(&mut self, status: WordStatus) {
        let Some(word) = self.current().map(|item| item.word.clone()) else {
            return;
        };
        let tally = self.tallies.entry(word.clone()).or_default();
        tally.seen += 1;
        if status == WordStatus::Known {
            tally.known += 1;
        }
        self.progress.insert(word, status);
        self.advance();
    }

    /// Statuses in deck order, for display
    pub fn marked_words(&self) -> Vec<(&str, WordStatus)> {
        self.deck
            .iter()
            .filter_map(|item| {
                self.progress
                    .get(&item.word)
                    .map(|status| (item.word.as_str(), *status))
            })
            .collect()
    }

    /// Carry statuses and counts over from a previously saved session
    pub fn seed_progress(&mut self, saved: &SessionData) {
        for (word, item) in &saved.progress {
            self.progress.insert(word.clone(), item.status);
            self.tallies.insert(
                word.clone(),
                Tally {
                    seen: item.seen_count,
                    known: item.known_count,
                },
            );
        }
    }

    /// Progress in the backend's wire shape
    pub fn progress_items(&self) -> HashMap<String, ProgressItem> {
        self.progress
            .iter()
            .map(|(word, status)| {
                let tally = self.tallies.get(word).copied().unwrap_or_default();
                let item = ProgressItem {
                    word: word.clone(),
                    status: *status,
                    time_taken_ms: None,
                    seen_count: tally.seen,
                    known_count: tally.known,
                };
                (word.clone(), item)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Vec<VocabularyItem> {
        vec![
            VocabularyItem::new("dog", "a domesticated canine"),
            VocabularyItem::new("cat", "a small feline"),
        ]
    }

    #[test]
    fn test_reveal_then_advance_hides_definition() {
        let mut session = FlashcardSession::new(deck());
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_revealed());

        session.toggle_reveal();
        assert!(session.is_revealed());

        session.advance();
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_advance_wraps_after_full_pass() {
        for len in 1..=5 {
            let items = (0..len)
                .map(|i| VocabularyItem::new(format!("word{}", i), "definition"))
                .collect();
            let mut session = FlashcardSession::new(items);
            for _ in 0..len {
                session.advance();
            }
            assert_eq!(session.current_index(), 0, "deck of {}", len);
        }
    }

    #[test]
    fn test_retreat_at_start_is_noop() {
        let mut session = FlashcardSession::new(deck());
        session.retreat();
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_revealed());

        session.advance();
        session.toggle_reveal();
        session.retreat();
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_mark_records_status_and_advances() {
        let mut session = FlashcardSession::new(deck());
        session.advance();
        session.mark_current(WordStatus::Known);

        assert_eq!(session.progress().len(), 1);
        assert_eq!(session.progress().get("cat"), Some(&WordStatus::Known));
        // "cat" was the last card
        assert_eq!(session.current_index(), 0);

        session.mark_current(WordStatus::Difficult);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_later_mark_overwrites_earlier() {
        let mut session = FlashcardSession::new(vec![VocabularyItem::new("cat", "a small feline")]);
        session.mark_current(WordStatus::Difficult);
        session.mark_current(WordStatus::Known);

        assert_eq!(session.progress().len(), 1);
        assert_eq!(session.progress()["cat"], WordStatus::Known);

        let items = session.progress_items();
        assert_eq!(items["cat"].seen_count, 2);
        assert_eq!(items["cat"].known_count, 1);
    }

    #[test]
    fn test_empty_deck_operations_do_nothing() {
        let mut session = FlashcardSession::new(Vec::new());
        session.advance();
        session.retreat();
        session.mark_current(WordStatus::Known);

        assert!(session.is_empty());
        assert_eq!(session.current_index(), 0);
        assert!(session.current().is_none());
        assert!(session.progress().is_empty());
        assert_eq!(session.completion_ratio(), 0.0);
    }

    #[test]
    fn test_completion_ratio_counts_cards_before_current() {
        let items = (0..4).map(|i| VocabularyItem::new(format!("w{}", i), "d")).collect();
        let mut session = FlashcardSession::new(items);
        assert_eq!(session.completion_ratio(), 0.0);
        session.advance();
        assert_eq!(session.completion_ratio(), 0.25);
        session.advance();
        session.advance();
        assert_eq!(session.completion_ratio(), 0.75);
    }

    #[test]
    fn test_seed_progress_from_saved_session() {
        let mut saved_progress = HashMap::new();
        saved_progress.insert(
            "dog".to_string(),
            ProgressItem {
                word: "dog".to_string(),
                status: WordStatus::Learning,
                time_taken_ms: None,
                seen_count: 3,
                known_count: 1,
            },
        );
        let saved = SessionData {
            theme_id: "animals".to_string(),
            image_id: "img-1".to_string(),
            progress: saved_progress,
            session_id: "abc".to_string(),
            started_at: String::new(),
            last_updated: String::new(),
        };

        let mut session = FlashcardSession::new(deck());
        session.seed_progress(&saved);
        session.mark_current(WordStatus::Known);

        let items = session.progress_items();
        assert_eq!(items["dog"].status, WordStatus::Known);
        assert_eq!(items["dog"].seen_count, 4);
        assert_eq!(items["dog"].known_count, 2);
        assert_eq!(session.marked_words(), vec![("dog", WordStatus::Known)]);
    }
}
