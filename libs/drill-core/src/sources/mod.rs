//! Flashcard source adapters.
//!
//! Each source turns a static content table into flashcards. Filtering is
//! deterministic: the same criteria always yield the same cards in the same
//! order. Shuffling is the deck builder's job.

mod complexity;
mod methods;
mod patterns;

use crate::types::{Difficulty, Flashcard, FlashcardSource, StudySessionConfig};
use std::collections::HashSet;

/// Filter applied while materializing cards.
#[derive(Debug, Clone, Copy)]
pub struct SourceCriteria<'a> {
    /// Empty means every source.
    pub sources: &'a [FlashcardSource],
    pub language: &'a str,
    /// Empty means no category restriction.
    pub categories: &'a [String],
    /// Empty means no difficulty restriction.
    pub difficulties: &'a [Difficulty],
    pub interview_only: bool,
}

impl<'a> SourceCriteria<'a> {
    fn admits(&self, category: &str, difficulty: Difficulty, interview: bool) -> bool {
        (self.categories.is_empty() || self.categories.iter().any(|c| c == category))
            && (self.difficulties.is_empty() || self.difficulties.contains(&difficulty))
            && (!self.interview_only || interview)
    }
}

impl<'a> From<&'a StudySessionConfig> for SourceCriteria<'a> {
    fn from(config: &'a StudySessionConfig) -> Self {
        Self {
            sources: &config.sources,
            language: &config.language,
            categories: &config.categories,
            difficulties: &config.difficulties,
            interview_only: config.interview_only,
        }
    }
}

/// Collect every card matching `criteria`, deduplicated by id.
pub fn get_all_flashcards(criteria: &SourceCriteria<'_>) -> Vec<Flashcard> {
    let sources: &[FlashcardSource] = if criteria.sources.is_empty() {
        &FlashcardSource::ALL
    } else {
        criteria.sources
    };

    let mut seen = HashSet::new();
    let mut cards = Vec::new();
    for source in sources {
        let batch = match source {
            FlashcardSource::Method => methods::flashcards(criteria),
            FlashcardSource::TimeComplexity => complexity::time_flashcards(criteria),
            FlashcardSource::SpaceComplexity => complexity::space_flashcards(criteria),
            FlashcardSource::Pattern => patterns::flashcards(criteria),
        };
        cards.extend(batch.into_iter().filter(|card| seen.insert(card.id.clone())));
    }
    cards
}

/// Languages with method-drill content.
pub fn supported_languages() -> &'static [&'static str] {
    methods::LANGUAGES
}

/// Resolve a language name or alias (`js`, `py`) to its canonical name.
pub fn canonical_language(language: &str) -> Option<&'static str> {
    methods::canonical(language)
}
