use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One company on the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub name: String,
    /// Short label shown next to the name in terminal output.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Companies offered by default when a caller does not name any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    pub companies: Vec<CompanyEntry>,
}

impl Watchlist {
    /// Company names in file order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.companies.iter().map(|c| c.name.clone()).collect()
    }

    /// Icon for a company, matched case-insensitively.
    #[must_use]
    pub fn icon_for(&self, name: &str) -> Option<&str> {
        self.companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .and_then(|c| c.icon.as_deref())
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        let entry = |name: &str, icon: &str| CompanyEntry {
            name: name.to_string(),
            icon: Some(icon.to_string()),
        };
        Self {
            companies: vec![
                entry("Apple", "🍏"),
                entry("Microsoft", "💻"),
                entry("Google", "🔍"),
                entry("Amazon", "🛒"),
                entry("Tesla", "🚗"),
            ],
        }
    }
}

/// Load and validate a watchlist from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watchlist(path: &Path) -> Result<Watchlist, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchlistIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let watchlist: Watchlist = serde_yaml::from_str(&content)?;
    validate_watchlist(&watchlist)?;

    Ok(watchlist)
}

/// Like [`load_watchlist`], but a missing file yields [`Watchlist::default`].
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, parsed, or validated.
pub fn load_watchlist_or_default(path: &Path) -> Result<Watchlist, ConfigError> {
    if !path.exists() {
        return Ok(Watchlist::default());
    }
    load_watchlist(path)
}

fn validate_watchlist(watchlist: &Watchlist) -> Result<(), ConfigError> {
    if watchlist.companies.is_empty() {
        return Err(ConfigError::Validation(
            "watchlist must name at least one company".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for company in &watchlist.companies {
        let name = company.name.trim();
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "company name must be non-empty".to_string(),
            ));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate company name: '{}'",
                company.name
            )));
        }
    }

    Ok(())
}
