//! Static feed documents keyed by company name.

use std::collections::HashMap;
use std::path::Path;

use crate::error::FetchError;

/// Serves pre-recorded RSS documents instead of calling the network.
///
/// Lookups are case-insensitive. A company with no document yields
/// [`FetchError::UnknownQuery`].
#[derive(Debug, Clone, Default)]
pub struct FixtureFeed {
    documents: HashMap<String, String>,
}

impl FixtureFeed {
    /// Build from `(company, document)` pairs.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            documents: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// Load every `*.xml` file in `dir`, keyed by file stem.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory or one of its files cannot be read.
    pub fn from_dir(dir: &Path) -> std::io::Result<Self> {
        let mut documents = HashMap::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("xml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let body = std::fs::read_to_string(&path)?;
            documents.insert(stem.to_lowercase(), body);
        }
        tracing::debug!(dir = %dir.display(), count = documents.len(), "loaded feed fixtures");
        Ok(Self { documents })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`FetchError::UnknownQuery`] when no document exists for `query`.
    pub fn fetch(&self, query: &str) -> Result<String, FetchError> {
        self.documents
            .get(&query.to_lowercase())
            .cloned()
            .ok_or_else(|| FetchError::UnknownQuery(query.to_string()))
    }
}
