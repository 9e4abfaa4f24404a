pub mod admin;
pub mod auth;
pub mod chat;
pub mod config;
pub mod friends;
pub mod guides;
pub mod todos;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use campus_db::Database;

/// The application service layer. Owns no state of its own: every call
/// delegates to the storage handle it was constructed with, and no method
/// writes to storage except through `campus_db`.
pub struct App {
    db: Database,
}

impl App {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
/// Parse as naive UTC when the RFC 3339 form does not apply.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt timestamp '{}': {}", raw, e);
            DateTime::default()
        })
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    App::new(Database::open_in_memory().unwrap())
}
