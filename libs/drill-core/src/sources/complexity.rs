//! Operation complexity facts. One table feeds both the time and space sources.

use super::SourceCriteria;
use crate::types::{Difficulty, Flashcard, FlashcardBack, FlashcardFront, FlashcardSource};

struct ComplexityFact {
    id: &'static str,
    category: &'static str,
    structure: &'static str,
    operation: &'static str,
    difficulty: Difficulty,
    interview: bool,
    time: &'static str,
    space: &'static str,
    note: &'static str,
}

const FACTS: &[ComplexityFact] = &[
    ComplexityFact {
        id: "array-index",
        category: "array",
        structure: "dynamic array",
        operation: "access by index",
        difficulty: Difficulty::Easy,
        interview: true,
        time: "O(1)",
        space: "O(1)",
        note: "Elements are contiguous, so the address is computed directly.",
    },
    ComplexityFact {
        id: "array-push",
        category: "array",
        structure: "dynamic array",
        operation: "append to the end",
        difficulty: Difficulty::Easy,
        interview: true,
        time: "O(1) amortized",
        space: "O(1) amortized",
        note: "Occasional O(n) regrowth is spread across many cheap pushes.",
    },
    ComplexityFact {
        id: "array-insert-front",
        category: "array",
        structure: "dynamic array",
        operation: "insert at the front",
        difficulty: Difficulty::Easy,
        interview: false,
        time: "O(n)",
        space: "O(1)",
        note: "Every existing element shifts one slot right.",
    },
    ComplexityFact {
        id: "hash-map-lookup",
        category: "hash-map",
        structure: "hash map",
        operation: "lookup by key",
        difficulty: Difficulty::Easy,
        interview: true,
        time: "O(1) average, O(n) worst",
        space: "O(1)",
        note: "Worst case happens when every key collides into one bucket.",
    },
    ComplexityFact {
        id: "linked-list-insert-head",
        category: "linked-list",
        structure: "singly linked list",
        operation: "insert at the head",
        difficulty: Difficulty::Easy,
        interview: false,
        time: "O(1)",
        space: "O(1)",
        note: "Only the head pointer changes.",
    },
    ComplexityFact {
        id: "linked-list-search",
        category: "linked-list",
        structure: "singly linked list",
        operation: "search for a value",
        difficulty: Difficulty::Easy,
        interview: true,
        time: "O(n)",
        space: "O(1)",
        note: "No random access; nodes are walked one by one.",
    },
    ComplexityFact {
        id: "bst-search-balanced",
        category: "tree",
        structure: "balanced binary search tree",
        operation: "search",
        difficulty: Difficulty::Medium,
        interview: true,
        time: "O(log n)",
        space: "O(1) iterative, O(log n) recursive",
        note: "Each comparison discards half of the remaining tree.",
    },
    ComplexityFact {
        id: "heap-pop",
        category: "heap",
        structure: "binary heap",
        operation: "remove the minimum",
        difficulty: Difficulty::Medium,
        interview: true,
        time: "O(log n)",
        space: "O(1)",
        note: "The last leaf moves to the root and sifts down.",
    },
    ComplexityFact {
        id: "heapify",
        category: "heap",
        structure: "binary heap",
        operation: "build from n unsorted items",
        difficulty: Difficulty::Hard,
        interview: false,
        time: "O(n)",
        space: "O(1) in place",
        note: "Most nodes sit near the leaves and sift down only a little.",
    },
    ComplexityFact {
        id: "merge-sort",
        category: "sorting",
        structure: "array",
        operation: "merge sort",
        difficulty: Difficulty::Medium,
        interview: true,
        time: "O(n log n)",
        space: "O(n)",
        note: "Merging needs an auxiliary buffer.",
    },
    ComplexityFact {
        id: "quick-sort",
        category: "sorting",
        structure: "array",
        operation: "quicksort",
        difficulty: Difficulty::Hard,
        interview: true,
        time: "O(n log n) average, O(n^2) worst",
        space: "O(log n) stack",
        note: "Bad pivots degrade it to quadratic; randomize the pivot.",
    },
    ComplexityFact {
        id: "bfs",
        category: "graph",
        structure: "graph (adjacency list)",
        operation: "breadth-first search",
        difficulty: Difficulty::Medium,
        interview: true,
        time: "O(V + E)",
        space: "O(V)",
        note: "Every vertex is queued once and every edge examined once.",
    },
    ComplexityFact {
        id: "dijkstra",
        category: "graph",
        structure: "graph with a binary heap",
        operation: "Dijkstra's shortest paths",
        difficulty: Difficulty::Hard,
        interview: false,
        time: "O((V + E) log V)",
        space: "O(V)",
        note: "Each edge relaxation may push onto the heap.",
    },
];

pub(super) fn time_flashcards(criteria: &SourceCriteria<'_>) -> Vec<Flashcard> {
    facts(criteria)
        .into_iter()
        .map(|fact| Flashcard {
            id: format!("time:{}", fact.id),
            source: FlashcardSource::TimeComplexity,
            front: FlashcardFront {
                badge: "Time complexity".to_string(),
                prompt: format!(
                    "What is the time complexity of {} on a {}?",
                    fact.operation, fact.structure
                ),
                code: None,
                detail: Some(format!("Category: {}", fact.category)),
            },
            back: FlashcardBack {
                answer: fact.time.to_string(),
                explanation: Some(fact.note.to_string()),
                metadata: Some(format!("Space: {}", fact.space)),
            },
        })
        .collect()
}

pub(super) fn space_flashcards(criteria: &SourceCriteria<'_>) -> Vec<Flashcard> {
    facts(criteria)
        .into_iter()
        .map(|fact| Flashcard {
            id: format!("space:{}", fact.id),
            source: FlashcardSource::SpaceComplexity,
            front: FlashcardFront {
                badge: "Space complexity".to_string(),
                prompt: format!(
                    "How much extra space does {} need on a {}?",
                    fact.operation, fact.structure
                ),
                code: None,
                detail: Some(format!("Category: {}", fact.category)),
            },
            back: FlashcardBack {
                answer: fact.space.to_string(),
                explanation: Some(fact.note.to_string()),
                metadata: Some(format!("Time: {}", fact.time)),
            },
        })
        .collect()
}

fn facts(criteria: &SourceCriteria<'_>) -> Vec<&'static ComplexityFact> {
    FACTS
        .iter()
        .filter(|fact| criteria.admits(fact.category, fact.difficulty, fact.interview))
        .collect()
}
