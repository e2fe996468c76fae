//! Local SQLite persistence for study progress.

pub mod error;
pub mod kv;
pub mod schema;

pub use error::DbError;
pub use kv::SqliteStorage;
