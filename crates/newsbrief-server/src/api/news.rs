use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use newsbrief_core::Watchlist;
use newsbrief_news::{compare_sentiment, CompanyReport, SentimentComparison};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct BatchRequest {
    #[serde(default)]
    pub companies: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompareQuery {
    /// Comma-separated company names.
    pub companies: Option<String>,
}

/// Trimmed, non-blank names, or the watchlist when none remain.
fn resolve_companies<I, S>(requested: I, watchlist: &Watchlist) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = requested
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if names.is_empty() {
        watchlist.names()
    } else {
        names
    }
}

pub(super) async fn company_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(company): Path<String>,
) -> Result<Json<CompanyReport>, ApiError> {
    let company = company.trim();
    if company.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "company name must be non-empty",
        ));
    }
    Ok(Json(state.pipeline.run(company).await))
}

pub(super) async fn batch_news(
    State(state): State<AppState>,
    Json(body): Json<BatchRequest>,
) -> Json<BTreeMap<String, CompanyReport>> {
    let companies = resolve_companies(&body.companies, &state.watchlist);
    tracing::debug!(count = companies.len(), "running news batch");
    Json(state.pipeline.run_batch(&companies).await)
}

pub(super) async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Json<SentimentComparison> {
    let requested = query.companies.unwrap_or_default();
    let companies = resolve_companies(requested.split(','), &state.watchlist);
    let reports = state.pipeline.run_batch(&companies).await;
    Json(compare_sentiment(reports.values()))
}
