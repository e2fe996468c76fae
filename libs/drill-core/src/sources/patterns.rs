//! Algorithm pattern recognition cards.

use super::SourceCriteria;
use crate::types::{Difficulty, Flashcard, FlashcardBack, FlashcardFront, FlashcardSource};

struct PatternFact {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    difficulty: Difficulty,
    interview: bool,
    signal: &'static str,
    example: &'static str,
    explanation: &'static str,
    complexity: &'static str,
}

const PATTERNS: &[PatternFact] = &[
    PatternFact {
        id: "two-pointers",
        name: "Two pointers",
        category: "arrays",
        difficulty: Difficulty::Easy,
        interview: true,
        signal: "a sorted array where you need a pair meeting a target",
        example: "Two Sum II, container with most water",
        explanation: "Start at both ends and move the pointer whose side cannot improve the answer.",
        complexity: "O(n) time, O(1) space",
    },
    PatternFact {
        id: "sliding-window",
        name: "Sliding window",
        category: "strings",
        difficulty: Difficulty::Medium,
        interview: true,
        signal: "the longest or shortest contiguous run satisfying a constraint",
        example: "Longest substring without repeating characters",
        explanation: "Grow the right edge, shrink the left edge while the window is invalid.",
        complexity: "O(n) time",
    },
    PatternFact {
        id: "fast-slow-pointers",
        name: "Fast and slow pointers",
        category: "linked-lists",
        difficulty: Difficulty::Medium,
        interview: true,
        signal: "detecting a cycle or finding the middle of a linked list",
        example: "Linked list cycle, happy number",
        explanation: "One pointer moves twice as fast; they meet inside any cycle.",
        complexity: "O(n) time, O(1) space",
    },
    PatternFact {
        id: "binary-search-answer",
        name: "Binary search on the answer",
        category: "search",
        difficulty: Difficulty::Hard,
        interview: true,
        signal: "minimizing a maximum when feasibility is monotonic in the answer",
        example: "Koko eating bananas, split array largest sum",
        explanation: "Binary search the answer space and test feasibility at each midpoint.",
        complexity: "O(n log range) time",
    },
    PatternFact {
        id: "bfs-levels",
        name: "Breadth-first search",
        category: "graphs",
        difficulty: Difficulty::Medium,
        interview: true,
        signal: "the fewest steps between states in an unweighted graph",
        example: "Word ladder, rotting oranges",
        explanation: "Explore level by level from a queue; the first arrival is the shortest path.",
        complexity: "O(V + E) time",
    },
    PatternFact {
        id: "topological-sort",
        name: "Topological sort",
        category: "graphs",
        difficulty: Difficulty::Hard,
        interview: false,
        signal: "ordering tasks that have prerequisites",
        example: "Course schedule",
        explanation: "Repeatedly remove nodes with in-degree zero; leftovers mean a cycle.",
        complexity: "O(V + E) time",
    },
    PatternFact {
        id: "monotonic-stack",
        name: "Monotonic stack",
        category: "arrays",
        difficulty: Difficulty::Hard,
        interview: true,
        signal: "the next greater or smaller element for every position",
        example: "Daily temperatures, largest rectangle in histogram",
        explanation: "Keep a stack in sorted order and resolve elements as they are popped.",
        complexity: "O(n) time, O(n) space",
    },
    PatternFact {
        id: "merge-intervals",
        name: "Merge intervals",
        category: "intervals",
        difficulty: Difficulty::Medium,
        interview: true,
        signal: "overlapping ranges that must be combined or counted",
        example: "Merge intervals, meeting rooms",
        explanation: "Sort by start, then extend or close the current interval.",
        complexity: "O(n log n) time",
    },
    PatternFact {
        id: "backtracking",
        name: "Backtracking",
        category: "recursion",
        difficulty: Difficulty::Medium,
        interview: false,
        signal: "enumerating every subset, permutation or placement",
        example: "Subsets, N-Queens",
        explanation: "Choose, recurse, un-choose; prune branches that cannot succeed.",
        complexity: "Exponential in the worst case",
    },
    PatternFact {
        id: "dynamic-programming",
        name: "Dynamic programming",
        category: "dp",
        difficulty: Difficulty::Hard,
        interview: true,
        signal: "overlapping subproblems with an optimal substructure",
        example: "Coin change, longest common subsequence",
        explanation: "Define the state, write the recurrence, fill a table in dependency order.",
        complexity: "O(states x transitions) time",
    },
];

pub(super) fn flashcards(criteria: &SourceCriteria<'_>) -> Vec<Flashcard> {
    PATTERNS
        .iter()
        .filter(|p| criteria.admits(p.category, p.difficulty, p.interview))
        .map(|p| Flashcard {
            id: format!("pattern:{}", p.id),
            source: FlashcardSource::Pattern,
            front: FlashcardFront {
                badge: "Pattern".to_string(),
                prompt: format!("Which technique fits {}?", p.signal),
                code: None,
                detail: Some(format!("Seen in: {}", p.example)),
            },
            back: FlashcardBack {
                answer: p.name.to_string(),
                explanation: Some(p.explanation.to_string()),
                metadata: Some(p.complexity.to_string()),
            },
        })
        .collect()
}
