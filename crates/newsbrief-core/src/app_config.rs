use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub feed_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub topic_limit: usize,
    pub tts_base_url: String,
    pub tts_lang: String,
    pub watchlist_path: PathBuf,
    /// When set, feeds are read from `<dir>/<company>.xml` instead of the network.
    pub fixtures_dir: Option<PathBuf>,
}
