//! Study session engine.
//!
//! A session moves `setup -> studying -> summary`. From `studying` it can be
//! abandoned back to `setup`; from `summary` it can restart with the same
//! configuration or return to `setup`. The session owns only session-local
//! state; persisted ratings are reached through the [`RatingStore`] passed to
//! each operation that needs them.

use crate::deck::build_deck;
use crate::error::{Result, SessionError};
use crate::progress::RatingStore;
use crate::types::{
    ConfidenceRating, Flashcard, RatingTally, SessionPhase, SessionResult, StudySessionConfig,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

/// What a rating action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateOutcome {
    /// Rating applied; another card is up.
    Advanced,
    /// Rating applied to the last card; the session is in summary.
    Completed(SessionResult),
    /// The card id was not the current card (a duplicate or stale event).
    /// Nothing was written.
    Ignored,
}

/// Snapshot of where the learner is in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    /// 1-based position of the current card, 0 when nothing is on screen.
    pub position: usize,
    pub total: usize,
    pub rated: usize,
    pub revealed: bool,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    phase: SessionPhase,
    config: Option<StudySessionConfig>,
    pool: Vec<Flashcard>,
    deck: Vec<Flashcard>,
    index: usize,
    revealed: bool,
    tally: RatingTally,
    session_ratings: HashMap<String, ConfidenceRating>,
    started_at: Option<DateTime<Utc>>,
    result: Option<SessionResult>,
}

impl Default for StudySession {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Setup,
            config: None,
            pool: Vec::new(),
            deck: Vec::new(),
            index: 0,
            revealed: false,
            tally: RatingTally::default(),
            session_ratings: HashMap::new(),
            started_at: None,
            result: None,
        }
    }
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Configuration of the current or most recent session.
    pub fn config(&self) -> Option<&StudySessionConfig> {
        self.config.as_ref()
    }

    pub fn deck(&self) -> &[Flashcard] {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Card on screen, if studying and the deck is not exhausted.
    pub fn current_card(&self) -> Option<&Flashcard> {
        match self.phase {
            SessionPhase::Studying => self.deck.get(self.index),
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn tally(&self) -> RatingTally {
        self.tally
    }

    /// Result of the last completed session, while in summary.
    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: if self.current_card().is_some() {
                self.index + 1
            } else {
                0
            },
            total: self.deck.len(),
            rated: self.session_ratings.len(),
            revealed: self.revealed,
        }
    }

    /// Build a deck from `pool` and begin studying.
    ///
    /// An empty deck is not an error: the session enters `studying` with no
    /// current card, and the caller is expected to offer [`abandon`](Self::abandon).
    pub fn start<S, R>(
        &mut self,
        pool: Vec<Flashcard>,
        config: StudySessionConfig,
        store: &S,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<&[Flashcard]>
    where
        S: RatingStore + ?Sized,
        R: Rng + ?Sized,
    {
        self.expect_phase("start", SessionPhase::Setup)?;
        self.pool = pool;
        self.config = Some(config);
        self.begin(store, rng, now);
        Ok(&self.deck)
    }

    /// Summary -> studying with the previous pool and configuration.
    ///
    /// Tiering is recomputed against the ratings as they are now.
    pub fn restart<S, R>(
        &mut self,
        store: &S,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<&[Flashcard]>
    where
        S: RatingStore + ?Sized,
        R: Rng + ?Sized,
    {
        self.expect_phase("restart", SessionPhase::Summary)?;
        self.begin(store, rng, now);
        Ok(&self.deck)
    }

    /// Summary -> setup.
    pub fn reconfigure(&mut self) -> Result<()> {
        self.expect_phase("reconfigure", SessionPhase::Summary)?;
        self.clear();
        Ok(())
    }

    /// Studying -> setup. Ratings already written stay written.
    pub fn abandon(&mut self) -> Result<()> {
        self.expect_phase("abandon", SessionPhase::Studying)?;
        tracing::debug!(
            rated = self.session_ratings.len(),
            total = self.deck.len(),
            "session abandoned"
        );
        self.clear();
        Ok(())
    }

    /// Show the back of the current card.
    pub fn reveal(&mut self) -> Result<()> {
        self.expect_phase("reveal", SessionPhase::Studying)?;
        self.current_or_err()?;
        self.revealed = true;
        Ok(())
    }

    /// Step back one card. Returns false when already at the first card.
    pub fn previous(&mut self) -> Result<bool> {
        self.expect_phase("previous", SessionPhase::Studying)?;
        if self.index == 0 {
            return Ok(false);
        }
        self.index -= 1;
        self.revealed = false;
        Ok(true)
    }

    /// Rate the current card, persist the rating and advance.
    ///
    /// `card_id` must name the card on screen; anything else is treated as a
    /// repeated event for a card that was already rated and is dropped. A
    /// card revisited with [`previous`](Self::previous) and rated again moves
    /// its tally entry to the new bucket, so the tally always sums to the
    /// number of distinct cards rated.
    pub fn rate<S>(
        &mut self,
        card_id: &str,
        rating: ConfidenceRating,
        store: &mut S,
        now: DateTime<Utc>,
    ) -> Result<RateOutcome>
    where
        S: RatingStore + ?Sized,
    {
        self.expect_phase("rate", SessionPhase::Studying)?;
        let current_id = self.current_or_err()?.id.clone();
        if current_id != card_id {
            tracing::debug!(
                card_id,
                current = %current_id,
                "dropping rating for a card not on screen"
            );
            return Ok(RateOutcome::Ignored);
        }

        if let Some(prior) = self.session_ratings.insert(current_id.clone(), rating) {
            self.tally.decrement(prior);
        }
        self.tally.increment(rating);
        store.set_rating(&current_id, rating, now);

        self.index += 1;
        self.revealed = false;

        if self.index < self.deck.len() {
            return Ok(RateOutcome::Advanced);
        }

        let result = self.summarize(&*store, now);
        tracing::debug!(
            total = result.total_cards,
            weak = result.weak_cards.len(),
            elapsed_seconds = result.elapsed_seconds,
            "session completed"
        );
        self.phase = SessionPhase::Summary;
        self.result = Some(result.clone());
        Ok(RateOutcome::Completed(result))
    }

    fn begin<S, R>(&mut self, store: &S, rng: &mut R, now: DateTime<Utc>)
    where
        S: RatingStore + ?Sized,
        R: Rng + ?Sized,
    {
        let ratings = store.get_all_ratings();
        let config = self.config.clone().unwrap_or_default();
        self.deck = build_deck(&self.pool, &config, &ratings, rng);
        self.index = 0;
        self.revealed = false;
        self.tally = RatingTally::default();
        self.session_ratings.clear();
        self.started_at = Some(now);
        self.result = None;
        self.phase = SessionPhase::Studying;
        tracing::debug!(pool = self.pool.len(), deck = self.deck.len(), "session started");
    }

    /// Weak cards come from this session's own ratings; the store is only
    /// consulted for a card the session never rated.
    fn summarize<S>(&self, store: &S, now: DateTime<Utc>) -> SessionResult
    where
        S: RatingStore + ?Sized,
    {
        let weak_cards = self
            .deck
            .iter()
            .filter(|card| match self.session_ratings.get(&card.id) {
                Some(rating) => rating.is_weak(),
                None => store
                    .get_rating(&card.id)
                    .is_some_and(|record| record.rating.is_weak()),
            })
            .cloned()
            .collect();

        let elapsed_seconds = self
            .started_at
            .map(|start| (now - start).num_seconds().max(0) as u64)
            .unwrap_or(0);

        SessionResult {
            total_cards: self.deck.len(),
            tally: self.tally,
            weak_cards,
            elapsed_seconds,
        }
    }

    fn clear(&mut self) {
        self.pool.clear();
        self.deck.clear();
        self.index = 0;
        self.revealed = false;
        self.tally = RatingTally::default();
        self.session_ratings.clear();
        self.started_at = None;
        self.result = None;
        self.phase = SessionPhase::Setup;
    }

    fn expect_phase(&self, operation: &'static str, expected: SessionPhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn current_or_err(&self) -> Result<&Flashcard> {
        self.deck.get(self.index).ok_or(SessionError::NoCurrentCard {
            index: self.index,
            len: self.deck.len(),
        })
    }
}
