//! Cross-company sentiment tallies.

use std::collections::BTreeMap;

use crate::types::{CompanyReport, SentimentComparison};

/// Count articles per sentiment category for each report.
///
/// Every company gets all five categories, zero counts included. A report
/// holding only the fetch-failure placeholder counts as all zeros.
#[must_use]
pub fn compare_sentiment<'a, I>(reports: I) -> SentimentComparison
where
    I: IntoIterator<Item = &'a CompanyReport>,
{
    let counts: BTreeMap<_, _> = reports
        .into_iter()
        .map(|report| (report.company.clone(), report.distribution()))
        .collect();
    SentimentComparison { counts }
}
