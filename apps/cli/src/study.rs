//! Interactive study loop over line-based input.

use crate::keys::{StudyAction, SummaryAction, STUDY_HELP, SUMMARY_HELP};
use crate::render;
use anyhow::Result;
use chrono::Utc;
use drill_core::{
    Flashcard, ProgressStore, RateOutcome, SessionPhase, SessionResult, StudySession,
    StudySessionConfig,
};
use rand::Rng;
use std::io::{BufRead, Write};

/// Run one study session until the learner returns to setup or input ends.
///
/// Returns the result of the last completed round, if any. Each completed
/// round is appended to the store's session history.
pub fn run_study<I, O, R>(
    input: &mut I,
    output: &mut O,
    store: &mut ProgressStore,
    pool: Vec<Flashcard>,
    config: StudySessionConfig,
    rng: &mut R,
) -> Result<Option<SessionResult>>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut session = StudySession::new();
    session.start(pool, config, &*store, rng, Utc::now())?;

    let mut last_result = None;
    let mut line = String::new();

    loop {
        match session.phase() {
            SessionPhase::Setup => return Ok(last_result),
            SessionPhase::Studying => {
                match session.current_card() {
                    Some(card) => {
                        write!(output, "{}", render::card_front(card, &session.progress()))?;
                        if session.is_revealed() {
                            write!(output, "{}", render::card_back(card))?;
                        }
                        writeln!(output, "{STUDY_HELP}")?;
                    }
                    None => writeln!(output, "No cards match these filters. [q] back to setup")?,
                }
                output.flush()?;

                let Some(key) = read_key(input, &mut line)? else {
                    session.abandon()?;
                    continue;
                };

                match StudyAction::from_key(key) {
                    Some(StudyAction::Reveal) => {
                        if session.current_card().is_some() {
                            session.reveal()?;
                        }
                    }
                    Some(StudyAction::Rate(rating)) => {
                        let Some(card_id) = session.current_card().map(|c| c.id.clone()) else {
                            writeln!(output, "Nothing to rate.")?;
                            continue;
                        };
                        match session.rate(&card_id, rating, store, Utc::now())? {
                            RateOutcome::Completed(result) => {
                                store.record_session(&result, Utc::now());
                                last_result = Some(result);
                            }
                            RateOutcome::Advanced | RateOutcome::Ignored => {}
                        }
                    }
                    Some(StudyAction::Previous) => {
                        if !session.previous()? {
                            writeln!(output, "Already at the first card.")?;
                        }
                    }
                    Some(StudyAction::Abandon) => session.abandon()?,
                    None => writeln!(output, "Unknown key {key:?}")?,
                }
            }
            SessionPhase::Summary => {
                if let Some(result) = session.result() {
                    write!(output, "{}", render::summary(result))?;
                }
                writeln!(output, "{SUMMARY_HELP}")?;
                output.flush()?;

                let Some(key) = read_key(input, &mut line)? else {
                    session.reconfigure()?;
                    continue;
                };

                match SummaryAction::from_key(key) {
                    Some(SummaryAction::Restart) => {
                        session.restart(&*store, rng, Utc::now())?;
                    }
                    Some(SummaryAction::Reconfigure) => session.reconfigure()?,
                    None => writeln!(output, "Unknown key {key:?}")?,
                }
            }
        }
    }
}

/// Read one key press. `None` at end of input.
fn read_key<'a, I: BufRead>(
    input: &mut I,
    line: &'a mut String,
) -> std::io::Result<Option<&'a str>> {
    line.clear();
    if input.read_line(line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n'])))
}
