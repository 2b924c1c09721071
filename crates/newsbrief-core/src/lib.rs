//! Shared configuration for the newsbrief workspace.

mod app_config;
mod companies;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use companies::{load_watchlist, load_watchlist_or_default, CompanyEntry, Watchlist};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read watchlist file {path}: {source}")]
    WatchlistIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse watchlist file: {0}")]
    WatchlistParse(#[from] serde_yaml::Error),

    #[error("watchlist validation failed: {0}")]
    Validation(String),
}
