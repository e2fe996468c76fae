//! Card and configuration fixtures.

use chrono::{DateTime, Utc};
use drill_core::{Flashcard, FlashcardBack, FlashcardFront, FlashcardSource, StudySessionConfig};

/// A minimal card with the given id.
pub fn card(id: &str) -> Flashcard {
    Flashcard {
        id: id.to_string(),
        source: FlashcardSource::Method,
        front: FlashcardFront {
            badge: "Fixture".to_string(),
            prompt: format!("What is {id}?"),
            code: None,
            detail: None,
        },
        back: FlashcardBack {
            answer: id.to_uppercase(),
            explanation: None,
            metadata: None,
        },
    }
}

/// Cards A through E.
pub fn five_cards() -> Vec<Flashcard> {
    ["A", "B", "C", "D", "E"].iter().map(|id| card(id)).collect()
}

pub fn config(deck_size: usize, prioritize_weak: bool, shuffle: bool) -> StudySessionConfig {
    StudySessionConfig {
        deck_size,
        prioritize_weak,
        shuffle,
        ..Default::default()
    }
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + seconds, 0).unwrap()
}

pub fn ids(cards: &[Flashcard]) -> Vec<&str> {
    cards.iter().map(|c| c.id.as_str()).collect()
}
