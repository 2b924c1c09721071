//! News ingestion and enrichment for newsbrief.
//!
//! Fetches a company's Google News RSS feed, turns each item into an
//! [`Article`] with a cleaned summary and a five-step sentiment label, and
//! extracts the batch's leading topics. Also hosts the speech client used to
//! read summaries aloud.

pub mod compare;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod scorer;
pub mod sources;
pub mod speech;
pub mod topics;
pub mod types;

pub use compare::compare_sentiment;
pub use error::{FetchError, SpeechError};
pub use normalize::normalize_summary;
pub use parser::parse_feed;
pub use pipeline::NewsPipeline;
pub use scorer::{SentimentScorer, SentimentScores};
pub use sources::{FeedSource, FixtureFeed, GoogleNewsClient};
pub use speech::SpeechClient;
pub use topics::extract_topics;
pub use types::{Article, CompanyReport, RawItem, SentimentCategory, SentimentComparison};
