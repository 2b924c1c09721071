use std::path::PathBuf;

use thiserror::Error;

/// Reasons the feed for a company could not be turned into a document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("feed endpoint returned an empty body")]
    EmptyBody,

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The static dataset has no entry for this company.
    #[error("no feed data for '{0}'")]
    UnknownQuery(String),

    #[error("failed to read feed fixtures from {path}: {source}")]
    Fixtures {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the speech rendering client.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("no text provided for speech")]
    EmptyInput,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
}
