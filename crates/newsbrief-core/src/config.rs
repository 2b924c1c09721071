use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config
/// pointed at the public Google News feed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("NEWSBRIEF_ENV", "development"))?;
    let bind_addr = parse_addr("NEWSBRIEF_BIND_ADDR", "127.0.0.1:8000")?;
    let log_level = or_default("NEWSBRIEF_LOG_LEVEL", "info");

    let feed_base_url = or_default("NEWSBRIEF_FEED_BASE_URL", "https://news.google.com");
    let request_timeout_secs = parse_u64("NEWSBRIEF_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("NEWSBRIEF_USER_AGENT", "newsbrief/0.1 (news-sentiment)");

    let topic_limit = parse_usize("NEWSBRIEF_TOPIC_LIMIT", "5")?;
    if topic_limit == 0 {
        return Err(invalid(
            "NEWSBRIEF_TOPIC_LIMIT",
            "must be at least 1".to_string(),
        ));
    }

    let tts_base_url = or_default("NEWSBRIEF_TTS_BASE_URL", "https://translate.google.com");
    let tts_lang = or_default("NEWSBRIEF_TTS_LANG", "hi");
    if tts_lang.trim().is_empty() {
        return Err(invalid("NEWSBRIEF_TTS_LANG", "must be non-empty".to_string()));
    }

    let watchlist_path = PathBuf::from(or_default(
        "NEWSBRIEF_WATCHLIST_PATH",
        "./config/companies.yaml",
    ));
    let fixtures_dir = lookup("NEWSBRIEF_FIXTURES_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        feed_base_url,
        request_timeout_secs,
        user_agent,
        topic_limit,
        tts_base_url,
        tts_lang,
        watchlist_path,
        fixtures_dir,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSBRIEF_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
