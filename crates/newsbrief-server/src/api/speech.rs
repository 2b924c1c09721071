use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use newsbrief_news::SpeechError;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) const NO_TEXT_MESSAGE: &str = "No text provided for speech";

#[derive(Debug, Deserialize)]
pub(super) struct SpeechRequest {
    #[serde(default)]
    pub text: String,
}

pub(super) async fn text_to_speech(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SpeechRequest>,
) -> Result<impl IntoResponse, ApiError> {
    match state.speech.synthesize(&body.text).await {
        Ok(audio) => Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio)),
        Err(SpeechError::EmptyInput) => Err(ApiError::new(req_id.0, "bad_request", NO_TEXT_MESSAGE)),
        Err(e) => {
            tracing::warn!(error = %e, "speech rendering failed");
            Err(ApiError::new(
                req_id.0,
                "bad_gateway",
                "speech service unavailable",
            ))
        }
    }
}
