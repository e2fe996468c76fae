//! Deck construction: weak-card tiering, shuffling and truncation.

use crate::progress::RatingMap;
use crate::types::{Flashcard, StudySessionConfig};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Priority tier of a card at deck-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Most recent rating is missed or shaky.
    Weak,
    /// Never rated.
    Unseen,
    /// Most recent rating is knew-it.
    Known,
}

/// Classify a card against a ratings snapshot.
pub fn tier_of(card_id: &str, ratings: &RatingMap) -> Tier {
    match ratings.get(card_id) {
        Some(record) if record.rating.is_weak() => Tier::Weak,
        Some(_) => Tier::Known,
        None => Tier::Unseen,
    }
}

/// Count of pool cards per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolBreakdown {
    pub weak: usize,
    pub unseen: usize,
    pub known: usize,
}

impl PoolBreakdown {
    pub fn total(&self) -> usize {
        self.weak + self.unseen + self.known
    }
}

/// Tally a pool by tier, for setup screens.
pub fn pool_breakdown(pool: &[Flashcard], ratings: &RatingMap) -> PoolBreakdown {
    pool.iter().fold(PoolBreakdown::default(), |mut acc, card| {
        match tier_of(&card.id, ratings) {
            Tier::Weak => acc.weak += 1,
            Tier::Unseen => acc.unseen += 1,
            Tier::Known => acc.known += 1,
        }
        acc
    })
}

/// Build an ordered deck of at most `config.deck_size` cards.
///
/// With `prioritize_weak`, cards are grouped weak, unseen, known, keeping
/// pool order inside each group; shuffling then permutes within a group and
/// never across groups. Without it the whole pool is shuffled (or kept in
/// pool order). An empty pool produces an empty deck.
pub fn build_deck<R: Rng + ?Sized>(
    pool: &[Flashcard],
    config: &StudySessionConfig,
    ratings: &RatingMap,
    rng: &mut R,
) -> Vec<Flashcard> {
    let mut deck = if config.prioritize_weak {
        let mut weak = Vec::new();
        let mut unseen = Vec::new();
        let mut known = Vec::new();
        for card in pool {
            match tier_of(&card.id, ratings) {
                Tier::Weak => weak.push(card.clone()),
                Tier::Unseen => unseen.push(card.clone()),
                Tier::Known => known.push(card.clone()),
            }
        }

        tracing::debug!(
            weak = weak.len(),
            unseen = unseen.len(),
            known = known.len(),
            "partitioned card pool"
        );

        let mut tiers = [weak, unseen, known];
        if config.shuffle {
            for tier in tiers.iter_mut() {
                tier.shuffle(rng);
            }
        }
        tiers.into_iter().flatten().collect()
    } else {
        let mut cards = pool.to_vec();
        if config.shuffle {
            cards.shuffle(rng);
        }
        cards
    };

    deck.truncate(config.deck_size);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ConfidenceRating, FlashcardBack, FlashcardFront, FlashcardSource, RatingRecord,
    };
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn card(id: &str) -> Flashcard {
        Flashcard {
            id: id.to_string(),
            source: FlashcardSource::Method,
            front: FlashcardFront {
                badge: "test".into(),
                prompt: format!("prompt {id}"),
                code: None,
                detail: None,
            },
            back: FlashcardBack {
                answer: format!("answer {id}"),
                explanation: None,
                metadata: None,
            },
        }
    }

    fn pool(ids: &[&str]) -> Vec<Flashcard> {
        ids.iter().map(|id| card(id)).collect()
    }

    fn ratings(entries: &[(&str, ConfidenceRating)]) -> RatingMap {
        entries
            .iter()
            .map(|(id, rating)| {
                (
                    id.to_string(),
                    RatingRecord {
                        rating: *rating,
                        timestamp: None,
                    },
                )
            })
            .collect()
    }

    fn config(deck_size: usize, prioritize_weak: bool, shuffle: bool) -> StudySessionConfig {
        StudySessionConfig {
            prioritize_weak,
            shuffle,
            deck_size,
            ..Default::default()
        }
    }

    fn ids(deck: &[Flashcard]) -> Vec<&str> {
        deck.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn unshuffled_deck_keeps_pool_order() {
        let pool = pool(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(7);
        let first = build_deck(&pool, &config(10, false, false), &RatingMap::new(), &mut rng);
        let second = build_deck(&pool, &config(10, false, false), &RatingMap::new(), &mut rng);
        assert_eq!(ids(&first), vec!["a", "b", "c", "d"]);
        assert_eq!(first, second);
    }

    #[test]
    fn deck_size_truncates() {
        let pool = pool(&["a", "b", "c", "d", "e"]);
        let mut rng = StdRng::seed_from_u64(1);
        for size in 0..8 {
            let deck = build_deck(&pool, &config(size, false, true), &RatingMap::new(), &mut rng);
            assert_eq!(deck.len(), size.min(pool.len()));
        }
    }

    #[test]
    fn empty_pool_gives_empty_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        for (weak, shuffle) in [(false, false), (true, false), (false, true), (true, true)] {
            let deck = build_deck(&[], &config(5, weak, shuffle), &RatingMap::new(), &mut rng);
            assert!(deck.is_empty());
        }
    }

    #[test]
    fn tiers_are_weak_then_unseen_then_known() {
        let pool = pool(&["a", "b", "c", "d", "e", "f"]);
        let history = ratings(&[
            ("a", ConfidenceRating::KnewIt),
            ("c", ConfidenceRating::Shaky),
            ("e", ConfidenceRating::Missed),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let deck = build_deck(&pool, &config(6, true, false), &history, &mut rng);
        assert_eq!(ids(&deck), vec!["c", "e", "b", "d", "f", "a"]);
    }

    #[test]
    fn shuffle_never_crosses_tiers() {
        let pool = pool(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let history = ratings(&[
            ("b", ConfidenceRating::Missed),
            ("d", ConfidenceRating::Shaky),
            ("f", ConfidenceRating::Missed),
            ("g", ConfidenceRating::KnewIt),
            ("h", ConfidenceRating::KnewIt),
        ]);
        let weak: HashSet<&str> = ["b", "d", "f"].into_iter().collect();
        let unseen: HashSet<&str> = ["a", "c", "e"].into_iter().collect();
        let known: HashSet<&str> = ["g", "h"].into_iter().collect();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let deck = build_deck(&pool, &config(8, true, true), &history, &mut rng);
            let order = ids(&deck);
            assert!(order[..3].iter().all(|id| weak.contains(id)), "seed {seed}: {order:?}");
            assert!(order[3..6].iter().all(|id| unseen.contains(id)), "seed {seed}: {order:?}");
            assert!(order[6..].iter().all(|id| known.contains(id)), "seed {seed}: {order:?}");

            let small = build_deck(&pool, &config(2, true, true), &history, &mut rng);
            assert!(ids(&small).iter().all(|id| weak.contains(id)));
        }
    }

    #[test]
    fn shuffle_preserves_membership() {
        let pool = pool(&["a", "b", "c", "d", "e"]);
        let mut rng = StdRng::seed_from_u64(11);
        let deck = build_deck(&pool, &config(5, false, true), &RatingMap::new(), &mut rng);
        let mut sorted = ids(&deck);
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn breakdown_counts_tiers() {
        let pool = pool(&["a", "b", "c", "d"]);
        let history = ratings(&[
            ("a", ConfidenceRating::Missed),
            ("b", ConfidenceRating::KnewIt),
            ("z", ConfidenceRating::Missed),
        ]);
        let breakdown = pool_breakdown(&pool, &history);
        assert_eq!(
            breakdown,
            PoolBreakdown {
                weak: 1,
                unseen: 2,
                known: 1,
            }
        );
        assert_eq!(breakdown.total(), 4);
    }
}
