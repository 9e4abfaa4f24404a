use std::path::PathBuf;

/// Runtime configuration, read from the environment. `.env` loading is the
/// binary's job (dotenvy), before this is called.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub admin_user: String,
    /// Only needed when bootstrapping; absent in normal operation.
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let db_path = std::env::var("CAMPUS_DB_PATH")
            .unwrap_or_else(|_| "campus.db".into())
            .into();
        let admin_user = std::env::var("CAMPUS_ADMIN_USER").unwrap_or_else(|_| "admin".into());
        let admin_password = std::env::var("CAMPUS_ADMIN_PASSWORD").ok();

        Config {
            db_path,
            admin_user,
            admin_password,
        }
    }
}
