//! Database Config

use clap::Args;

/// Application database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// Postgres connection string. When absent the server runs on
    /// process-local storage, which is only suitable for development.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
