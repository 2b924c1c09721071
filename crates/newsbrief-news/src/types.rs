use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary used when an item's description carries nothing beyond its title.
pub const NO_SUMMARY: &str = "No summary available.";

pub(crate) const FETCH_ERROR_TITLE: &str = "Error";
pub(crate) const FETCH_ERROR_SUMMARY: &str = "Failed to fetch news";

/// Five-step sentiment scale, ordered from most positive to most negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentCategory {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentCategory {
    pub const ALL: [SentimentCategory; 5] = [
        SentimentCategory::VeryPositive,
        SentimentCategory::Positive,
        SentimentCategory::Neutral,
        SentimentCategory::Negative,
        SentimentCategory::VeryNegative,
    ];

    /// Map a combined polarity in `[-1.0, 1.0]` to a category.
    ///
    /// Positive thresholds are checked before negative ones and every bound is
    /// inclusive, so `0.5` is `VeryPositive` and `-0.1` is `Negative`.
    #[must_use]
    pub fn from_score(s: f64) -> Self {
        if s >= 0.5 {
            SentimentCategory::VeryPositive
        } else if s >= 0.1 {
            SentimentCategory::Positive
        } else if s <= -0.5 {
            SentimentCategory::VeryNegative
        } else if s <= -0.1 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentCategory::VeryPositive => "Very Positive",
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::VeryNegative => "Very Negative",
        }
    }

    /// A zeroed count for every category.
    #[must_use]
    pub fn empty_tally() -> BTreeMap<SentimentCategory, usize> {
        Self::ALL.iter().map(|c| (*c, 0)).collect()
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One feed item as read from the document, before any cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    /// Description text with markup still present.
    pub description: String,
}

/// An enriched news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Article {
    pub title: String,
    /// Never empty; [`NO_SUMMARY`] stands in when the feed gave nothing usable.
    pub summary: String,
    pub sentiment: SentimentCategory,
}

/// Pipeline output for a single company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyReport {
    pub company: String,
    pub articles: Vec<Article>,
    pub topics: Vec<String>,
    /// Set when `articles` holds only the fetch-failure placeholder.
    #[serde(skip)]
    pub fetch_failed: bool,
}

impl CompanyReport {
    /// Report for a company with no backing data.
    #[must_use]
    pub fn empty(company: &str) -> Self {
        Self {
            company: company.to_string(),
            articles: Vec::new(),
            topics: Vec::new(),
            fetch_failed: false,
        }
    }

    /// Report carrying the single placeholder article used when the feed
    /// could not be fetched.
    #[must_use]
    pub fn fetch_failed(company: &str) -> Self {
        Self {
            company: company.to_string(),
            articles: vec![Article {
                title: FETCH_ERROR_TITLE.to_string(),
                summary: FETCH_ERROR_SUMMARY.to_string(),
                sentiment: SentimentCategory::Neutral,
            }],
            topics: Vec::new(),
            fetch_failed: true,
        }
    }

    /// Article count per category, all five categories present.
    ///
    /// The fetch-failure placeholder is not counted.
    #[must_use]
    pub fn distribution(&self) -> BTreeMap<SentimentCategory, usize> {
        let mut tally = SentimentCategory::empty_tally();
        if self.fetch_failed {
            return tally;
        }
        for article in &self.articles {
            *tally.entry(article.sentiment).or_insert(0) += 1;
        }
        tally
    }
}

/// Per-company category counts across one or more reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentComparison {
    #[serde(rename = "Sentiment_Comparison")]
    pub counts: BTreeMap<String, BTreeMap<SentimentCategory, usize>>,
}
