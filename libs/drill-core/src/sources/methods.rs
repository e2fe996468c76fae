//! Built-in method drills, one table per language.

use super::SourceCriteria;
use crate::types::{Difficulty, Flashcard, FlashcardBack, FlashcardFront, FlashcardSource};

pub(super) const LANGUAGES: &[&str] = &["javascript", "python"];

struct MethodDrill {
    name: &'static str,
    category: &'static str,
    difficulty: Difficulty,
    interview: bool,
    description: &'static str,
    example: &'static str,
    signature: &'static str,
    returns: &'static str,
    complexity: &'static str,
}

const JAVASCRIPT: &[MethodDrill] = &[
    MethodDrill {
        name: "map",
        category: "array",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Build a new array by transforming every element.",
        example: "[1, 2, 3].___(n => n * 2) // [2, 4, 6]",
        signature: "arr.map(callback(element, index, array))",
        returns: "A new array of the same length; the original is untouched.",
        complexity: "O(n) time, O(n) space",
    },
    MethodDrill {
        name: "filter",
        category: "array",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Keep only the elements that pass a predicate.",
        example: "[1, 2, 3, 4].___(n => n % 2 === 0) // [2, 4]",
        signature: "arr.filter(predicate(element, index, array))",
        returns: "A new, possibly shorter array.",
        complexity: "O(n) time, O(n) space",
    },
    MethodDrill {
        name: "reduce",
        category: "array",
        difficulty: Difficulty::Medium,
        interview: true,
        description: "Fold an array into a single accumulated value.",
        example: "[1, 2, 3].___((acc, n) => acc + n, 0) // 6",
        signature: "arr.reduce(reducer(acc, element, index, array), initialValue)",
        returns: "The final accumulator. Throws on an empty array with no initial value.",
        complexity: "O(n) time",
    },
    MethodDrill {
        name: "splice",
        category: "array",
        difficulty: Difficulty::Hard,
        interview: false,
        description: "Remove and/or insert elements in place at an index.",
        example: "const a = [1, 2, 3]; a.___(1, 1, 9) // a is [1, 9, 3]",
        signature: "arr.splice(start, deleteCount, ...items)",
        returns: "An array of the removed elements; mutates the original.",
        complexity: "O(n) time",
    },
    MethodDrill {
        name: "findIndex",
        category: "array",
        difficulty: Difficulty::Medium,
        interview: false,
        description: "Locate the position of the first element matching a predicate.",
        example: "[5, 12, 8].___(n => n > 10) // 1",
        signature: "arr.findIndex(predicate(element, index, array))",
        returns: "The index, or -1 when nothing matches.",
        complexity: "O(n) time",
    },
    MethodDrill {
        name: "slice",
        category: "string",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Extract a section of a string without modifying it.",
        example: "'drills'.___(1, 4) // 'ril'",
        signature: "str.slice(beginIndex, endIndex)",
        returns: "A new string; negative indexes count from the end.",
        complexity: "O(k) time for k extracted characters",
    },
    MethodDrill {
        name: "padStart",
        category: "string",
        difficulty: Difficulty::Medium,
        interview: false,
        description: "Left-pad a string to a target length.",
        example: "'7'.___(3, '0') // '007'",
        signature: "str.padStart(targetLength, padString)",
        returns: "A new padded string, unchanged if already long enough.",
        complexity: "O(n) time",
    },
    MethodDrill {
        name: "has",
        category: "map",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Check whether a Map contains a key.",
        example: "new Map([['a', 1]]).___('a') // true",
        signature: "map.has(key)",
        returns: "A boolean; keys compare with SameValueZero.",
        complexity: "O(1) average time",
    },
    MethodDrill {
        name: "entries",
        category: "object",
        difficulty: Difficulty::Medium,
        interview: true,
        description: "Turn an object's own enumerable properties into key/value pairs.",
        example: "Object.___({ a: 1 }) // [['a', 1]]",
        signature: "Object.entries(obj)",
        returns: "An array of [key, value] arrays in property order.",
        complexity: "O(n) time, O(n) space",
    },
    MethodDrill {
        name: "allSettled",
        category: "promise",
        difficulty: Difficulty::Hard,
        interview: false,
        description: "Wait for every promise regardless of rejection.",
        example: "await Promise.___([p1, p2])",
        signature: "Promise.allSettled(iterable)",
        returns: "A promise of {status, value | reason} objects, one per input.",
        complexity: "O(n) bookkeeping",
    },
];

const PYTHON: &[MethodDrill] = &[
    MethodDrill {
        name: "append",
        category: "list",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Add one element to the end of a list.",
        example: "xs = [1, 2]; xs.___(3)  # [1, 2, 3]",
        signature: "list.append(x)",
        returns: "None; mutates the list.",
        complexity: "O(1) amortized time",
    },
    MethodDrill {
        name: "pop",
        category: "list",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Remove and return an element, the last one by default.",
        example: "[1, 2, 3].___()  # 3",
        signature: "list.pop([i])",
        returns: "The removed element; IndexError on an empty list.",
        complexity: "O(1) from the end, O(n) from elsewhere",
    },
    MethodDrill {
        name: "sort",
        category: "list",
        difficulty: Difficulty::Medium,
        interview: true,
        description: "Sort a list in place with an optional key function.",
        example: "words.___(key=len, reverse=True)",
        signature: "list.sort(*, key=None, reverse=False)",
        returns: "None; the sort is stable.",
        complexity: "O(n log n) time",
    },
    MethodDrill {
        name: "get",
        category: "dict",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Look up a key without raising when it is missing.",
        example: "{'a': 1}.___('b', 0)  # 0",
        signature: "dict.get(key, default=None)",
        returns: "The value or the default.",
        complexity: "O(1) average time",
    },
    MethodDrill {
        name: "setdefault",
        category: "dict",
        difficulty: Difficulty::Medium,
        interview: false,
        description: "Insert a key with a default only if it is absent.",
        example: "groups.___(k, []).append(v)",
        signature: "dict.setdefault(key, default=None)",
        returns: "The existing or newly inserted value.",
        complexity: "O(1) average time",
    },
    MethodDrill {
        name: "join",
        category: "string",
        difficulty: Difficulty::Easy,
        interview: true,
        description: "Concatenate an iterable of strings with a separator.",
        example: "', '.___(['a', 'b'])  # 'a, b'",
        signature: "str.join(iterable)",
        returns: "A new string; TypeError on non-string items.",
        complexity: "O(n) time in total length",
    },
    MethodDrill {
        name: "heappush",
        category: "heapq",
        difficulty: Difficulty::Hard,
        interview: true,
        description: "Push onto a list kept as a binary min-heap.",
        example: "heapq.___(heap, (priority, item))",
        signature: "heapq.heappush(heap, item)",
        returns: "None; the heap invariant is preserved.",
        complexity: "O(log n) time",
    },
    MethodDrill {
        name: "appendleft",
        category: "deque",
        difficulty: Difficulty::Medium,
        interview: true,
        description: "Add an element to the front of a deque.",
        example: "dq = deque([2]); dq.___(1)  # deque([1, 2])",
        signature: "collections.deque.appendleft(x)",
        returns: "None; mutates the deque.",
        complexity: "O(1) time",
    },
];

/// Canonical name for a language or one of its short aliases.
pub(super) fn canonical(language: &str) -> Option<&'static str> {
    match language.trim().to_ascii_lowercase().as_str() {
        "javascript" | "js" => Some("javascript"),
        "python" | "py" => Some("python"),
        _ => None,
    }
}

pub(super) fn flashcards(criteria: &SourceCriteria<'_>) -> Vec<Flashcard> {
    let Some(language) = canonical(criteria.language) else {
        return Vec::new();
    };
    let (label, table) = match language {
        "python" => ("Python", PYTHON),
        _ => ("JavaScript", JAVASCRIPT),
    };
    table
        .iter()
        .filter(|drill| criteria.admits(drill.category, drill.difficulty, drill.interview))
        .map(|drill| Flashcard {
            id: format!("method:{language}:{}", drill.name),
            source: FlashcardSource::Method,
            front: FlashcardFront {
                badge: format!("{label} · {}", drill.category),
                prompt: drill.description.to_string(),
                code: Some(drill.example.to_string()),
                detail: Some(format!("Difficulty: {}", drill.difficulty.as_str())),
            },
            back: FlashcardBack {
                answer: drill.signature.to_string(),
                explanation: Some(drill.returns.to_string()),
                metadata: Some(drill.complexity.to_string()),
            },
        })
        .collect()
}
