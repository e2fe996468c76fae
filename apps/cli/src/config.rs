//! Runtime configuration from the environment.

use std::path::{Path, PathBuf};

/// Environment variable overriding the progress database location.
pub const DB_PATH_ENV: &str = "DRILLS_DB_PATH";

/// Default log filter when RUST_LOG is unset. Logs go to stderr.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Directory name under the platform data directory.
const APP_DIR: &str = "coding-drills";

const DB_FILE: &str = "progress.db";

/// Load `.env` if present. Missing files are fine.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Database path with priority: `--db` flag > DRILLS_DB_PATH > platform data dir.
pub fn database_path(flag: Option<&Path>) -> PathBuf {
    resolve_database_path(
        flag,
        std::env::var(DB_PATH_ENV).ok(),
        dirs::data_local_dir(),
    )
}

fn resolve_database_path(
    flag: Option<&Path>,
    env_value: Option<String>,
    data_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = flag {
        tracing::debug!("Using database from --db: {}", path.display());
        return path.to_path_buf();
    }

    if let Some(path) = env_value.filter(|p| !p.trim().is_empty()) {
        tracing::debug!("Using database from {} env: {}", DB_PATH_ENV, path);
        return PathBuf::from(path);
    }

    // Use app data directory, fallback to current dir
    data_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins() {
        let path = resolve_database_path(
            Some(Path::new("/tmp/flag.db")),
            Some("/tmp/env.db".into()),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(path, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn env_beats_data_dir() {
        let path = resolve_database_path(
            None,
            Some("/tmp/env.db".into()),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn blank_env_is_ignored() {
        let path = resolve_database_path(None, Some("  ".into()), Some(PathBuf::from("/data")));
        assert_eq!(path, PathBuf::from("/data/coding-drills/progress.db"));
    }

    #[test]
    fn falls_back_to_current_dir() {
        let path = resolve_database_path(None, None, None);
        assert_eq!(path, PathBuf::from("./coding-drills/progress.db"));
    }
}
