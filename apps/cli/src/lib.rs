pub mod config;
pub mod db;
pub mod keys;
pub mod render;
pub mod study;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use drill_core::{
    canonical_language, get_all_flashcards, pool_breakdown, supported_languages, Difficulty,
    Flashcard, FlashcardSource, PoolBreakdown, ProgressStore, RatingStore, SessionRecord,
    SourceCriteria, StudySessionConfig,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::SqliteStorage;

/// Flashcard drills for coding interview prep.
#[derive(Debug, Parser)]
#[command(name = "drills", version, about)]
pub struct Cli {
    /// Progress database path (overrides DRILLS_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Study a deck of flashcards
    Study(DeckArgs),
    /// Show the weak/unseen/known breakdown and recent sessions
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear all ratings and session history
    Reset {
        /// Skip the safety check
        #[arg(long)]
        yes: bool,
    },
}

/// Which cards make up the pool.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Card sources: method, time-complexity, space-complexity, pattern
    #[arg(long = "source", value_delimiter = ',')]
    pub sources: Vec<String>,

    /// Language for method drills: javascript (js) or python (py)
    #[arg(long, default_value = "javascript", value_parser = parse_language)]
    pub language: String,

    /// Restrict to these categories
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Restrict to these difficulties: easy, medium, hard
    #[arg(long = "difficulty", value_delimiter = ',', value_parser = parse_difficulty)]
    pub difficulties: Vec<Difficulty>,

    /// Only cards tagged as common in interviews
    #[arg(long)]
    pub interview_only: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DeckArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Put weak cards first, then unseen, then known
    #[arg(long)]
    pub prioritize_weak: bool,

    /// Keep pool order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Maximum number of cards in the deck
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub deck_size: u32,
}

impl FilterArgs {
    /// Known source tags. Unknown tags are skipped with a warning.
    fn parsed_sources(&self) -> Vec<FlashcardSource> {
        self.sources
            .iter()
            .filter_map(|tag| {
                let source = FlashcardSource::from_str(tag.trim());
                if source.is_none() {
                    tracing::warn!("Ignoring unknown source {:?}", tag);
                }
                source
            })
            .collect()
    }

    fn session_config(&self) -> StudySessionConfig {
        StudySessionConfig {
            sources: self.parsed_sources(),
            language: self.language.clone(),
            categories: self.categories.clone(),
            difficulties: self.difficulties.clone(),
            interview_only: self.interview_only,
            ..Default::default()
        }
    }
}

impl DeckArgs {
    pub fn session_config(&self) -> StudySessionConfig {
        StudySessionConfig {
            prioritize_weak: self.prioritize_weak,
            shuffle: !self.no_shuffle,
            deck_size: self.deck_size as usize,
            ..self.filter.session_config()
        }
    }
}

fn parse_language(s: &str) -> Result<String, String> {
    canonical_language(s).map(str::to_string).ok_or_else(|| {
        format!(
            "unsupported language {s:?} (expected one of: {})",
            supported_languages().join(", ")
        )
    })
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(&s.trim().to_lowercase())
        .ok_or_else(|| format!("unknown difficulty {s:?} (expected easy, medium or hard)"))
}

/// Cards matching the filter.
///
/// An empty source list in the config means every source, so when the user
/// named sources and none of them were recognized the pool is empty instead.
pub fn card_pool(filter: &FilterArgs, config: &StudySessionConfig) -> Vec<Flashcard> {
    if !filter.sources.is_empty() && config.sources.is_empty() {
        return Vec::new();
    }
    get_all_flashcards(&SourceCriteria::from(config))
}

/// Open the SQLite-backed store, or fall back to memory for this run.
pub fn open_store(path: &Path) -> ProgressStore {
    match SqliteStorage::open(path) {
        Ok(storage) => {
            tracing::debug!("Opened progress database at {}", path.display());
            ProgressStore::new(storage)
        }
        Err(e) => {
            tracing::warn!(
                "Could not open {}: {}. Progress will not be saved.",
                path.display(),
                e
            );
            ProgressStore::in_memory()
        }
    }
}

#[derive(Debug, Serialize)]
struct StatsReport {
    breakdown: PoolBreakdown,
    sessions: Vec<SessionRecord>,
}

fn write_stats<W: Write>(
    output: &mut W,
    store: &ProgressStore,
    pool: &[Flashcard],
    json: bool,
) -> anyhow::Result<()> {
    let report = StatsReport {
        breakdown: pool_breakdown(pool, &store.get_all_ratings()),
        sessions: store.session_history(),
    };

    if json {
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    } else {
        write!(output, "{}", render::breakdown(&report.breakdown))?;
        writeln!(output)?;
        write!(output, "{}", render::history(&report.sessions))?;
    }
    Ok(())
}

pub fn run() -> anyhow::Result<()> {
    config::load_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let db_path = config::database_path(cli.db.as_deref());
    let mut store = open_store(&db_path);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.command {
        Command::Study(args) => {
            let config = args.session_config();
            let pool = card_pool(&args.filter, &config);
            let mut rng = rand::rng();
            study::run_study(&mut input, &mut output, &mut store, pool, config, &mut rng)?;
        }
        Command::Stats { filter, json } => {
            let config = filter.session_config();
            let pool = card_pool(&filter, &config);
            write_stats(&mut output, &store, &pool, json)?;
        }
        Command::Reset { yes } => {
            if !yes {
                bail!("refusing to clear progress without --yes");
            }
            store.reset();
            writeln!(output, "Progress cleared.")?;
        }
    }

    Ok(())
}
