//! Where feed documents come from.

mod fixtures;
mod google_news;

pub use fixtures::FixtureFeed;
pub use google_news::{GoogleNewsClient, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use crate::error::FetchError;

/// A provider of raw RSS documents for a company name.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// Live Google News search.
    GoogleNews(GoogleNewsClient),
    /// Pre-recorded documents, for offline runs and tests.
    Fixtures(FixtureFeed),
}

impl FeedSource {
    /// # Errors
    ///
    /// Returns a [`FetchError`] when no usable document could be obtained.
    pub async fn fetch(&self, query: &str) -> Result<String, FetchError> {
        match self {
            FeedSource::GoogleNews(client) => client.fetch(query).await,
            FeedSource::Fixtures(feed) => feed.fetch(query),
        }
    }
}

impl From<GoogleNewsClient> for FeedSource {
    fn from(client: GoogleNewsClient) -> Self {
        FeedSource::GoogleNews(client)
    }
}

impl From<FixtureFeed> for FeedSource {
    fn from(feed: FixtureFeed) -> Self {
        FeedSource::Fixtures(feed)
    }
}
