//! Flashcard study engine for the coding-drills app.
//!
//! Provides:
//! - Flashcard source adapters over built-in method, complexity and pattern content
//! - Storage adapter abstraction with an in-memory implementation
//! - Progress store for per-card confidence ratings and session history
//! - Deck construction with weak-card prioritization
//! - Study session state machine and session summaries

pub mod deck;
pub mod error;
pub mod progress;
pub mod session;
pub mod sources;
pub mod storage;
pub mod types;

pub use deck::{build_deck, pool_breakdown, PoolBreakdown, Tier};
pub use error::{Result, SessionError, StorageError};
pub use progress::{ProgressStore, RatingMap, RatingStore, SessionRecord};
pub use session::{RateOutcome, SessionProgress, StudySession};
pub use sources::{canonical_language, get_all_flashcards, supported_languages, SourceCriteria};
pub use storage::{MemoryStorage, StorageAdapter};
pub use types::{
    ConfidenceRating, Difficulty, Flashcard, FlashcardBack, FlashcardFront, FlashcardSource,
    RatingRecord, RatingTally, SessionPhase, SessionResult, StudySessionConfig,
};
