//! Core types for the flashcard study engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SessionError;

/// Origin of a flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashcardSource {
    Method,
    TimeComplexity,
    SpaceComplexity,
    Pattern,
}

impl FlashcardSource {
    /// Every source, in the order decks are assembled.
    pub const ALL: [FlashcardSource; 4] = [
        Self::Method,
        Self::TimeComplexity,
        Self::SpaceComplexity,
        Self::Pattern,
    ];

    /// Get the source tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::TimeComplexity => "time-complexity",
            Self::SpaceComplexity => "space-complexity",
            Self::Pattern => "pattern",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "method" => Some(Self::Method),
            "time-complexity" => Some(Self::TimeComplexity),
            "space-complexity" => Some(Self::SpaceComplexity),
            "pattern" => Some(Self::Pattern),
            _ => None,
        }
    }
}

/// Difficulty tag carried by static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Prompt side of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardFront {
    pub badge: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Answer side of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardBack {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Immutable study unit materialized from static content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub source: FlashcardSource,
    pub front: FlashcardFront,
    pub back: FlashcardBack,
}

/// Learner's confidence in a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceRating {
    Missed,
    Shaky,
    KnewIt,
}

impl ConfidenceRating {
    /// Convert to 3-point numeric value (1-3).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Missed => 1,
            Self::Shaky => 2,
            Self::KnewIt => 3,
        }
    }

    /// Create from 3-point numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Missed),
            2 => Some(Self::Shaky),
            3 => Some(Self::KnewIt),
            _ => None,
        }
    }

    /// Missed and shaky cards count as weak.
    pub fn is_weak(self) -> bool {
        !matches!(self, Self::KnewIt)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missed => "missed",
            Self::Shaky => "shaky",
            Self::KnewIt => "knew-it",
        }
    }
}

impl TryFrom<u8> for ConfidenceRating {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(SessionError::InvalidRating(value))
    }
}

/// Persisted rating for one card. Last rating wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub rating: ConfidenceRating,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Per-session count of ratings by bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingTally {
    pub missed: usize,
    pub shaky: usize,
    #[serde(rename = "knew-it")]
    pub knew_it: usize,
}

impl RatingTally {
    pub fn increment(&mut self, rating: ConfidenceRating) {
        match rating {
            ConfidenceRating::Missed => self.missed += 1,
            ConfidenceRating::Shaky => self.shaky += 1,
            ConfidenceRating::KnewIt => self.knew_it += 1,
        }
    }

    pub fn decrement(&mut self, rating: ConfidenceRating) {
        match rating {
            ConfidenceRating::Missed => self.missed = self.missed.saturating_sub(1),
            ConfidenceRating::Shaky => self.shaky = self.shaky.saturating_sub(1),
            ConfidenceRating::KnewIt => self.knew_it = self.knew_it.saturating_sub(1),
        }
    }

    pub fn total(&self) -> usize {
        self.missed + self.shaky + self.knew_it
    }
}

/// Input contract for a study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySessionConfig {
    /// Empty means every source.
    pub sources: Vec<FlashcardSource>,
    /// Only consulted by the method-drill source.
    pub language: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub difficulties: Vec<Difficulty>,
    #[serde(default)]
    pub interview_only: bool,
    pub prioritize_weak: bool,
    pub shuffle: bool,
    pub deck_size: usize,
}

impl Default for StudySessionConfig {
    fn default() -> Self {
        Self {
            sources: FlashcardSource::ALL.to_vec(),
            language: "javascript".to_string(),
            categories: Vec::new(),
            difficulties: Vec::new(),
            interview_only: false,
            prioritize_weak: false,
            shuffle: true,
            deck_size: 20,
        }
    }
}

/// Summary emitted when the last card of a deck is rated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub total_cards: usize,
    pub tally: RatingTally,
    /// In deck order.
    pub weak_cards: Vec<Flashcard>,
    pub elapsed_seconds: u64,
}

impl SessionResult {
    pub fn weak_card_ids(&self) -> Vec<&str> {
        self.weak_cards.iter().map(|c| c.id.as_str()).collect()
    }

    /// Share of cards rated knew-it, 0-100.
    pub fn knew_it_percent(&self) -> f64 {
        if self.total_cards == 0 {
            return 0.0;
        }
        self.tally.knew_it as f64 / self.total_cards as f64 * 100.0
    }
}

/// Study session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Setup,
    Studying,
    Summary,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Studying => "studying",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
