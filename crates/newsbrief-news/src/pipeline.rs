//! Company name in, enriched report out.

use std::collections::BTreeMap;

use newsbrief_core::AppConfig;

use crate::error::FetchError;
use crate::normalize::normalize_summary;
use crate::parser::parse_feed;
use crate::scorer::SentimentScorer;
use crate::sources::{FeedSource, FixtureFeed, GoogleNewsClient};
use crate::topics::extract_topics;
use crate::types::{Article, CompanyReport};

/// Default number of topics per report.
pub const DEFAULT_TOPIC_LIMIT: usize = 5;

/// Fetch, parse, normalize, score and summarize news for companies.
///
/// Holds no per-request state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct NewsPipeline {
    source: FeedSource,
    scorer: SentimentScorer,
    topic_limit: usize,
}

impl NewsPipeline {
    #[must_use]
    pub fn new(source: impl Into<FeedSource>) -> Self {
        Self {
            source: source.into(),
            scorer: SentimentScorer::new(),
            topic_limit: DEFAULT_TOPIC_LIMIT,
        }
    }

    /// Pipeline wired from configuration.
    ///
    /// A configured fixtures directory replaces the live Google News feed.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Fixtures`] if the fixtures directory cannot be read.
    /// - [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let source: FeedSource = match &config.fixtures_dir {
            Some(dir) => {
                let feed = FixtureFeed::from_dir(dir).map_err(|source| FetchError::Fixtures {
                    path: dir.clone(),
                    source,
                })?;
                tracing::info!(dir = %dir.display(), companies = feed.len(), "serving feeds from fixtures");
                feed.into()
            }
            None => GoogleNewsClient::with_base_url(
                &config.feed_base_url,
                config.request_timeout_secs,
                &config.user_agent,
            )?
            .into(),
        };
        Ok(Self::new(source).with_topic_limit(config.topic_limit))
    }

    #[must_use]
    pub fn with_topic_limit(mut self, limit: usize) -> Self {
        self.topic_limit = limit;
        self
    }

    #[must_use]
    pub fn topic_limit(&self) -> usize {
        self.topic_limit
    }

    /// Build the report for one company.
    ///
    /// Never fails: a fetch or parse failure yields the single placeholder
    /// article, and a company missing from a static dataset yields an empty
    /// report.
    pub async fn run(&self, company: &str) -> CompanyReport {
        match self.source.fetch(company).await {
            Ok(body) => self.enrich(company, &body),
            Err(FetchError::UnknownQuery(_)) => {
                tracing::debug!(company, "no feed data for company");
                CompanyReport::empty(company)
            }
            Err(e) => {
                tracing::warn!(company, error = %e, "news fetch failed");
                CompanyReport::fetch_failed(company)
            }
        }
    }

    /// Run each company independently, in order, keyed by name.
    pub async fn run_batch<I, S>(&self, companies: I) -> BTreeMap<String, CompanyReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reports = BTreeMap::new();
        for company in companies {
            let company = company.as_ref();
            if reports.contains_key(company) {
                continue;
            }
            let report = self.run(company).await;
            reports.insert(company.to_string(), report);
        }
        reports
    }

    /// Turn a fetched feed document into a report.
    ///
    /// A malformed document is treated like a failed fetch.
    #[must_use]
    pub fn enrich(&self, company: &str, feed_xml: &str) -> CompanyReport {
        let items = match parse_feed(feed_xml) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(company, error = %e, "news feed could not be parsed");
                return CompanyReport::fetch_failed(company);
            }
        };

        let articles: Vec<Article> = items
            .into_iter()
            .map(|item| {
                let summary = normalize_summary(&item.title, &item.description);
                let sentiment = self.scorer.classify(&summary);
                Article {
                    title: item.title,
                    summary,
                    sentiment,
                }
            })
            .collect();

        let topics = extract_topics(
            articles.iter().map(|a| a.summary.as_str()),
            self.topic_limit,
        );

        tracing::info!(
            company,
            articles = articles.len(),
            topics = topics.len(),
            "news report built"
        );

        CompanyReport {
            company: company.to_string(),
            articles,
            topics,
            fetch_failed: false,
        }
    }
}
