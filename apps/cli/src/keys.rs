//! Keyboard mapping for the study screens.
//!
//! Input is read a line at a time, so a key is whatever the learner typed
//! before pressing enter. An empty line is the enter key itself.

use drill_core::ConfidenceRating;

/// Action requested while a card is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyAction {
    Reveal,
    Rate(ConfidenceRating),
    Previous,
    Abandon,
}

impl StudyAction {
    pub fn from_key(key: &str) -> Option<Self> {
        // A lone space must survive trimming.
        if key == " " {
            return Some(Self::Reveal);
        }
        match key.trim() {
            "" | "space" | "enter" => Some(Self::Reveal),
            "1" => Some(Self::Rate(ConfidenceRating::Missed)),
            "2" => Some(Self::Rate(ConfidenceRating::Shaky)),
            "3" => Some(Self::Rate(ConfidenceRating::KnewIt)),
            "left" | "h" | "<" | "\u{1b}[D" => Some(Self::Previous),
            "esc" | "escape" | "q" | "\u{1b}" => Some(Self::Abandon),
            _ => None,
        }
    }
}

/// Action requested on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryAction {
    Restart,
    Reconfigure,
}

impl SummaryAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "r" | "restart" | "" => Some(Self::Restart),
            "s" | "setup" | "q" | "esc" | "escape" | "\u{1b}" => Some(Self::Reconfigure),
            _ => None,
        }
    }
}

pub const STUDY_HELP: &str =
    "[enter] reveal  [1] missed  [2] shaky  [3] knew it  [h] previous  [q] quit";

pub const SUMMARY_HELP: &str = "[r] study again  [s] back to setup";
