//! Keyword extraction over article summaries (RAKE).
//!
//! Each summary is cut into candidate phrases at punctuation and stopwords.
//! Words are scored by degree over frequency and a phrase scores the sum of
//! its words, so longer, content-heavy phrases rank first.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::types::NO_SUMMARY;

/// Keywords taken from each summary before the batch is merged.
pub const KEYWORDS_PER_SUMMARY: usize = 3;
/// Candidate phrases longer than this are discarded.
pub const MAX_PHRASE_WORDS: usize = 3;

static FRAGMENT_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.,;:!?()\[\]{}"“”|/]+|\s[-–—]+\s"#).expect("valid fragment regex")
});

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "new", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "said", "same", "says", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Top keywords across a batch of summaries.
///
/// Each summary contributes up to [`KEYWORDS_PER_SUMMARY`] phrases in score
/// order. The merged list keeps first-seen order, drops repeats, and is cut
/// to `limit`. The "no summary" placeholder is skipped.
#[must_use]
pub fn extract_topics<'a, I>(summaries: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut topics = Vec::new();

    for summary in summaries {
        if summary == NO_SUMMARY {
            continue;
        }
        for keyword in extract_keywords(summary, KEYWORDS_PER_SUMMARY) {
            if topics.len() == limit {
                return topics;
            }
            if seen.insert(keyword.clone()) {
                topics.push(keyword);
            }
        }
    }

    topics.truncate(limit);
    topics
}

/// Ranked key phrases of a single text, best first, at most `max`.
///
/// Ties keep the order the phrases first appear in.
#[must_use]
pub fn extract_keywords(text: &str, max: usize) -> Vec<String> {
    let phrases = candidate_phrases(text);
    if phrases.is_empty() || max == 0 {
        return Vec::new();
    }

    let mut frequency: HashMap<&str, f64> = HashMap::new();
    let mut degree: HashMap<&str, f64> = HashMap::new();
    for phrase in &phrases {
        #[allow(clippy::cast_precision_loss)]
        let co_occurring = (phrase.len() - 1) as f64;
        for word in phrase {
            *frequency.entry(word.as_str()).or_insert(0.0) += 1.0;
            *degree.entry(word.as_str()).or_insert(0.0) += co_occurring;
        }
    }
    let word_score = |w: &str| {
        let freq = frequency.get(w).copied().unwrap_or(1.0);
        (degree.get(w).copied().unwrap_or(0.0) + freq) / freq
    };

    let mut unique: Vec<(String, f64)> = Vec::new();
    for phrase in &phrases {
        let joined = phrase.join(" ");
        if unique.iter().any(|(p, _)| *p == joined) {
            continue;
        }
        let score: f64 = phrase.iter().map(|w| word_score(w)).sum();
        unique.push((joined, score));
    }

    unique.sort_by(|a, b| b.1.total_cmp(&a.1));
    unique.into_iter().take(max).map(|(p, _)| p).collect()
}

/// Lowercased runs of content words, split at punctuation and stopwords.
fn candidate_phrases(text: &str) -> Vec<Vec<String>> {
    let mut phrases = Vec::new();
    for fragment in FRAGMENT_BOUNDARY.split(text) {
        let mut current: Vec<String> = Vec::new();
        for raw in fragment.split_whitespace() {
            let word = raw
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            let is_delimiter = word.is_empty()
                || STOPWORDS.contains(&word.as_str())
                || !word.chars().any(char::is_alphabetic);
            if is_delimiter {
                push_phrase(&mut phrases, &mut current);
            } else {
                current.push(word);
            }
        }
        push_phrase(&mut phrases, &mut current);
    }
    phrases
}

fn push_phrase(phrases: &mut Vec<Vec<String>>, current: &mut Vec<String>) {
    if !current.is_empty() && current.len() <= MAX_PHRASE_WORDS {
        phrases.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_yields_no_topics() {
        assert!(extract_topics(Vec::<&str>::new(), 5).is_empty());
    }

    #[test]
    fn multi_word_phrases_rank_first() {
        let keywords = extract_keywords("Record iPhone sales for Apple", 3);
        assert_eq!(keywords, vec!["record iphone sales", "apple"]);
    }

    #[test]
    fn stopwords_and_numbers_split_phrases() {
        let phrases = candidate_phrases("Sales of the cars rose 12 percent in 2024");
        let joined: Vec<String> = phrases.iter().map(|p| p.join(" ")).collect();
        assert_eq!(joined, vec!["sales", "cars rose", "percent"]);
    }

    #[test]
    fn long_runs_are_discarded() {
        let phrases = candidate_phrases("quarterly cloud revenue growth accelerated");
        assert!(phrases.is_empty());
    }

    #[test]
    fn topics_are_deduplicated_in_first_seen_order() {
        let summaries = ["Tesla recall widens", "Tesla recall widens", "Battery supply deal"];
        let topics = extract_topics(summaries, 5);
        assert_eq!(topics, vec!["tesla recall widens", "battery supply deal"]);
    }

    #[test]
    fn topics_are_truncated_to_limit() {
        let summaries = [
            "Cloud revenue, chip demand, data centers",
            "Search ads; antitrust ruling; browser deal",
        ];
        let topics = extract_topics(summaries, 5);
        assert_eq!(topics.len(), 5);
        let unique: HashSet<_> = topics.iter().collect();
        assert_eq!(unique.len(), topics.len());
    }

    #[test]
    fn placeholder_summary_is_ignored() {
        assert!(extract_topics([NO_SUMMARY], 5).is_empty());
    }

    #[test]
    fn zero_limit_yields_nothing() {
        assert!(extract_topics(["Battery supply deal"], 0).is_empty());
    }
}
