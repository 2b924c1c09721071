//! Google News RSS search client.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};

use crate::error::FetchError;

pub const DEFAULT_BASE_URL: &str = "https://news.google.com";
pub const DEFAULT_USER_AGENT: &str = "newsbrief/0.1 (news-sentiment)";

/// Fetches the raw RSS search feed for a company name.
///
/// Use [`GoogleNewsClient::new`] for the live service or
/// [`GoogleNewsClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GoogleNewsClient {
    client: Client,
    base_url: String,
}

impl GoogleNewsClient {
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, DEFAULT_USER_AGENT)
    }

    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search URL for `query`, restricted to US English results.
    ///
    /// The query is percent-encoded, so names with spaces or `&` stay intact.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!(
            "{}/rss/search?q={encoded}&hl=en-US&gl=US&ceid=US:en",
            self.base_url
        )
    }

    /// Fetch the feed document for `query`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure or timeout.
    /// - [`FetchError::Status`] for any status other than 200.
    /// - [`FetchError::EmptyBody`] when the body is blank.
    pub async fn fetch(&self, query: &str) -> Result<String, FetchError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "fetching news feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GoogleNewsClient {
        GoogleNewsClient::with_base_url(base, 5, DEFAULT_USER_AGENT).expect("build client")
    }

    #[test]
    fn search_url_encodes_query() {
        let url = client("https://news.google.com").search_url("AT&T Inc");
        assert_eq!(
            url,
            "https://news.google.com/rss/search?q=AT%26T%20Inc&hl=en-US&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let url = client("http://127.0.0.1:9000/").search_url("Apple");
        assert!(url.starts_with("http://127.0.0.1:9000/rss/search?q=Apple&"));
    }
}
