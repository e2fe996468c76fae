//! Persisted study progress: per-card ratings and completed-session history.
//!
//! The store reads through to its [`StorageAdapter`] on every call, so the
//! weak-card set always reflects the latest write. When the adapter fails,
//! the store logs once and continues against an in-memory copy for the rest
//! of its lifetime; callers never see a storage error.

use crate::error::StorageError;
use crate::storage::{MemoryStorage, StorageAdapter};
use crate::types::{ConfidenceRating, RatingRecord, RatingTally, SessionResult};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

/// Storage key holding the serialized rating map.
pub const RATINGS_KEY: &str = "coding-drills:flashcard-ratings";

/// Storage key holding the serialized session history.
pub const SESSIONS_KEY: &str = "coding-drills:flashcard-sessions";

/// Number of completed sessions kept in history.
pub const MAX_SESSION_HISTORY: usize = 20;

/// Card id to most recent rating.
pub type RatingMap = BTreeMap<String, RatingRecord>;

/// Read/write access to per-card ratings.
pub trait RatingStore {
    fn get_rating(&self, card_id: &str) -> Option<RatingRecord>;

    /// Overwrite the rating for a card.
    fn set_rating(&mut self, card_id: &str, rating: ConfidenceRating, now: DateTime<Utc>);

    fn get_all_ratings(&self) -> RatingMap;

    /// Ids whose most recent rating is missed or shaky.
    fn get_weak_card_ids(&self) -> HashSet<String> {
        self.get_all_ratings()
            .into_iter()
            .filter(|(_, record)| record.rating.is_weak())
            .map(|(id, _)| id)
            .collect()
    }
}

/// One completed study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub completed_at: DateTime<Utc>,
    pub total_cards: usize,
    pub tally: RatingTally,
    pub weak_card_ids: Vec<String>,
    pub elapsed_seconds: u64,
}

/// Progress store over a pluggable storage adapter.
///
/// Reads go through `&self`, so the adapter and fallback sit in `RefCell`s
/// to let a failed read switch the store to memory.
pub struct ProgressStore {
    adapter: RefCell<Option<Box<dyn StorageAdapter>>>,
    fallback: RefCell<MemoryStorage>,
}

impl ProgressStore {
    /// Create a store persisting through `adapter`.
    pub fn new<A: StorageAdapter + 'static>(adapter: A) -> Self {
        Self {
            adapter: RefCell::new(Some(Box::new(adapter))),
            fallback: RefCell::new(MemoryStorage::new()),
        }
    }

    /// Create a store that never persists (for testing, or when no adapter exists).
    pub fn in_memory() -> Self {
        Self {
            adapter: RefCell::new(None),
            fallback: RefCell::new(MemoryStorage::new()),
        }
    }

    /// Whether writes still reach the underlying adapter.
    pub fn is_persistent(&self) -> bool {
        self.adapter.borrow().is_some()
    }

    /// Append a completed session, keeping the most recent [`MAX_SESSION_HISTORY`].
    pub fn record_session(&mut self, result: &SessionResult, now: DateTime<Utc>) {
        let mut history = self.load::<Vec<SessionRecord>>(SESSIONS_KEY).unwrap_or_default();
        history.push(SessionRecord {
            completed_at: now,
            total_cards: result.total_cards,
            tally: result.tally,
            weak_card_ids: result.weak_cards.iter().map(|c| c.id.clone()).collect(),
            elapsed_seconds: result.elapsed_seconds,
        });
        if history.len() > MAX_SESSION_HISTORY {
            let excess = history.len() - MAX_SESSION_HISTORY;
            history.drain(..excess);
        }
        self.save(SESSIONS_KEY, &history);
    }

    /// Completed sessions, oldest first.
    pub fn session_history(&self) -> Vec<SessionRecord> {
        self.load(SESSIONS_KEY).unwrap_or_default()
    }

    /// Forget all ratings and session history.
    pub fn reset(&mut self) {
        for key in [RATINGS_KEY, SESSIONS_KEY] {
            self.remove(key);
        }
        tracing::debug!("progress reset");
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let outcome = self.adapter.borrow().as_ref().map(|adapter| adapter.get(key));
        let raw = match outcome {
            Some(Ok(raw)) => raw,
            Some(Err(err)) => {
                self.degrade(&err);
                self.read_fallback(key)
            }
            None => self.read_fallback(key),
        }?;
        decode(key, &raw)
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, key, "failed to serialize progress");
                return;
            }
        };

        let outcome = self.adapter.get_mut().as_mut().map(|adapter| adapter.set(key, &raw));
        match outcome {
            Some(Ok(())) => return,
            Some(Err(err)) => self.degrade(&err),
            None => {}
        }
        // MemoryStorage never fails.
        let _ = self.fallback.get_mut().set(key, &raw);
    }

    fn remove(&mut self, key: &str) {
        let outcome = self.adapter.get_mut().as_mut().map(|adapter| adapter.remove(key));
        match outcome {
            Some(Ok(())) => return,
            Some(Err(err)) => self.degrade(&err),
            None => {}
        }
        let _ = self.fallback.get_mut().remove(key);
    }

    fn read_fallback(&self, key: &str) -> Option<String> {
        self.fallback.borrow().get(key).ok().flatten()
    }

    /// Switch to the in-memory fallback, copying whatever the adapter still returns.
    fn degrade(&self, err: &StorageError) {
        let Some(adapter) = self.adapter.borrow_mut().take() else {
            return;
        };
        tracing::warn!(
            adapter = adapter.name(),
            error = %err,
            "storage unavailable, progress will not persist past this run"
        );
        let mut fallback = self.fallback.borrow_mut();
        for key in [RATINGS_KEY, SESSIONS_KEY] {
            if let Ok(Some(raw)) = adapter.get(key) {
                let _ = fallback.set(key, &raw);
            }
        }
    }
}

impl RatingStore for ProgressStore {
    fn get_rating(&self, card_id: &str) -> Option<RatingRecord> {
        self.get_all_ratings().remove(card_id)
    }

    fn set_rating(&mut self, card_id: &str, rating: ConfidenceRating, now: DateTime<Utc>) {
        let mut ratings = self.load::<RatingMap>(RATINGS_KEY).unwrap_or_default();
        ratings.insert(
            card_id.to_string(),
            RatingRecord {
                rating,
                timestamp: Some(now),
            },
        );
        self.save(RATINGS_KEY, &ratings);
    }

    fn get_all_ratings(&self) -> RatingMap {
        self.load(RATINGS_KEY).unwrap_or_default()
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, key, "ignoring corrupt progress data");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Flashcard, FlashcardBack, FlashcardFront, FlashcardSource};
    use pretty_assertions::assert_eq;

    struct BrokenStorage;

    impl StorageAdapter for BrokenStorage {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn card(id: &str) -> Flashcard {
        Flashcard {
            id: id.to_string(),
            source: FlashcardSource::Pattern,
            front: FlashcardFront {
                badge: "Pattern".into(),
                prompt: id.into(),
                code: None,
                detail: None,
            },
            back: FlashcardBack {
                answer: id.into(),
                explanation: None,
                metadata: None,
            },
        }
    }

    #[test]
    fn absent_key_means_no_ratings() {
        let store = ProgressStore::new(MemoryStorage::new());
        assert!(store.get_all_ratings().is_empty());
        assert!(store.get_rating("a").is_none());
        assert!(store.is_persistent());
    }

    #[test]
    fn rerating_overwrites() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        store.set_rating("a", ConfidenceRating::Missed, at(10));
        store.set_rating("a", ConfidenceRating::KnewIt, at(20));

        let all = store.get_all_ratings();
        assert_eq!(all.len(), 1);
        assert_eq!(
            all["a"],
            RatingRecord {
                rating: ConfidenceRating::KnewIt,
                timestamp: Some(at(20)),
            }
        );
    }

    #[test]
    fn weak_ids_follow_latest_rating() {
        let mut store = ProgressStore::in_memory();
        store.set_rating("a", ConfidenceRating::Missed, at(1));
        store.set_rating("b", ConfidenceRating::Shaky, at(1));
        store.set_rating("c", ConfidenceRating::KnewIt, at(1));
        assert_eq!(
            store.get_weak_card_ids(),
            HashSet::from(["a".to_string(), "b".to_string()])
        );

        store.set_rating("a", ConfidenceRating::KnewIt, at(2));
        assert_eq!(store.get_weak_card_ids(), HashSet::from(["b".to_string()]));
    }

    #[test]
    fn corrupt_data_reads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(RATINGS_KEY, "{not json").unwrap();
        let mut store = ProgressStore::new(storage);
        assert!(store.get_all_ratings().is_empty());

        store.set_rating("a", ConfidenceRating::Shaky, at(1));
        assert_eq!(store.get_all_ratings().len(), 1);
    }

    #[test]
    fn broken_adapter_degrades_to_memory() {
        let mut store = ProgressStore::new(BrokenStorage);
        assert!(store.get_all_ratings().is_empty());

        store.set_rating("a", ConfidenceRating::Missed, at(1));
        assert!(!store.is_persistent());
        assert_eq!(
            store.get_rating("a").map(|r| r.rating),
            Some(ConfidenceRating::Missed)
        );
    }

    #[test]
    fn failed_read_switches_to_memory() {
        let store = ProgressStore::new(BrokenStorage);
        for _ in 0..3 {
            assert!(store.get_weak_card_ids().is_empty());
        }
        assert!(!store.is_persistent());
        assert!(store.session_history().is_empty());
    }

    #[test]
    fn history_is_capped() {
        let mut store = ProgressStore::in_memory();
        let result = SessionResult {
            total_cards: 1,
            tally: RatingTally {
                missed: 1,
                ..Default::default()
            },
            weak_cards: vec![card("a")],
            elapsed_seconds: 3,
        };
        for i in 0..(MAX_SESSION_HISTORY + 5) {
            store.record_session(&result, at(i as i64));
        }

        let history = store.session_history();
        assert_eq!(history.len(), MAX_SESSION_HISTORY);
        assert_eq!(history[0].completed_at, at(5));
        assert_eq!(history.last().unwrap().weak_card_ids, vec!["a".to_string()]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        store.set_rating("a", ConfidenceRating::Missed, at(1));
        store.record_session(
            &SessionResult {
                total_cards: 0,
                tally: RatingTally::default(),
                weak_cards: vec![],
                elapsed_seconds: 0,
            },
            at(2),
        );

        store.reset();
        assert!(store.get_all_ratings().is_empty());
        assert!(store.session_history().is_empty());
    }
}
