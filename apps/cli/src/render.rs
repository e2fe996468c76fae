//! Plain-text rendering of study screens.

use drill_core::progress::SessionRecord;
use drill_core::{Flashcard, PoolBreakdown, SessionProgress, SessionResult};
use std::fmt::Write;

pub fn card_front(card: &Flashcard, progress: &SessionProgress) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n[{}/{}] {}",
        progress.position, progress.total, card.front.badge
    );
    let _ = writeln!(out, "{}", card.front.prompt);
    if let Some(code) = &card.front.code {
        let _ = writeln!(out, "    {code}");
    }
    if let Some(detail) = &card.front.detail {
        let _ = writeln!(out, "({detail})");
    }
    out
}

pub fn card_back(card: &Flashcard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=> {}", card.back.answer);
    if let Some(explanation) = &card.back.explanation {
        let _ = writeln!(out, "   {explanation}");
    }
    if let Some(metadata) = &card.back.metadata {
        let _ = writeln!(out, "   [{metadata}]");
    }
    out
}

pub fn summary(result: &SessionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nSession complete: {} cards in {}",
        result.total_cards,
        duration(result.elapsed_seconds)
    );
    let _ = writeln!(
        out,
        "missed {}  shaky {}  knew it {}  ({:.0}% known)",
        result.tally.missed,
        result.tally.shaky,
        result.tally.knew_it,
        result.knew_it_percent()
    );
    if result.weak_cards.is_empty() {
        let _ = writeln!(out, "No weak cards this time.");
    } else {
        let _ = writeln!(out, "Cards to review:");
        for card in &result.weak_cards {
            let _ = writeln!(out, "  - {} ({})", card.front.prompt, card.back.answer);
        }
    }
    out
}

pub fn breakdown(pool: &PoolBreakdown) -> String {
    format!(
        "{} cards: {} weak, {} unseen, {} known\n",
        pool.total(),
        pool.weak,
        pool.unseen,
        pool.known
    )
}

pub fn history(records: &[SessionRecord]) -> String {
    if records.is_empty() {
        return "No completed sessions yet.\n".to_string();
    }
    let mut out = String::from("Recent sessions:\n");
    for record in records.iter().rev() {
        let _ = writeln!(
            out,
            "  {}  {:>3} cards  missed {} / shaky {} / knew it {}  {}",
            record.completed_at.format("%Y-%m-%d %H:%M"),
            record.total_cards,
            record.tally.missed,
            record.tally.shaky,
            record.tally.knew_it,
            duration(record.elapsed_seconds)
        );
    }
    out
}

fn duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else {
        format!("{}m {:02}s", seconds / 60, seconds % 60)
    }
}
