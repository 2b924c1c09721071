use axum::body::{to_bytes, Body};
use axum::http::Request;
use std::path::PathBuf;

use newsbrief_core::{CompanyEntry, Environment, Watchlist};
use newsbrief_news::sources::DEFAULT_USER_AGENT;
use newsbrief_news::{FixtureFeed, NewsPipeline, SpeechClient};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const APPLE_FEED: &str = include_str!("../../../../fixtures/apple.xml");
const TESLA_FEED: &str = include_str!("../../../../fixtures/tesla.xml");

/// Nothing listens here; only the speech tests override it.
const UNUSED_SPEECH_URL: &str = "http://127.0.0.1:9";

fn test_state(speech_base: &str) -> AppState {
    let feed = FixtureFeed::from_entries([("Apple", APPLE_FEED), ("Tesla", TESLA_FEED)]);
    let speech = SpeechClient::with_base_url(speech_base, 5, DEFAULT_USER_AGENT)
        .expect("speech client");
    let watchlist = Watchlist {
        companies: ["Apple", "Tesla"]
            .into_iter()
            .map(|name| CompanyEntry {
                name: name.to_string(),
                icon: None,
            })
            .collect(),
    };
    AppState::new(NewsPipeline::new(feed), speech, watchlist)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn json_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[test]
fn api_error_codes_map_to_statuses() {
    let cases = [
        ("validation_error", StatusCode::BAD_REQUEST),
        ("bad_request", StatusCode::BAD_REQUEST),
        ("not_found", StatusCode::NOT_FOUND),
        ("bad_gateway", StatusCode::BAD_GATEWAY),
        ("anything_else", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, expected) in cases {
        let response = ApiError::new("req-1", code, "message").into_response();
        assert_eq!(response.status(), expected, "code {code}");
    }
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let (status, json) = send(build_app(test_state(UNUSED_SPEECH_URL)), get_request("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], WELCOME_MESSAGE);
}

#[tokio::test]
async fn health_reports_ok_with_request_id() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .header(REQUEST_ID_HEADER, "health-check-1")
        .body(Body::empty())
        .expect("request");
    let response = build_app(test_state(UNUSED_SPEECH_URL))
        .oneshot(request)
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("health-check-1")
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["meta"]["request_id"], "health-check-1");
}

#[tokio::test]
async fn company_news_returns_report() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        get_request("/news/Apple"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Company"], "Apple");
    let articles = json["Articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[2]["Summary"], "No summary available.");
    assert!(articles[0]["Sentiment"].is_string());
    assert!(json["Topics"].as_array().is_some_and(|t| t.len() <= 5));
}

#[tokio::test]
async fn state_from_config_serves_fixture_feeds() {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures");
    let config = AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
        log_level: "info".to_string(),
        feed_base_url: UNUSED_SPEECH_URL.to_string(),
        request_timeout_secs: 5,
        user_agent: DEFAULT_USER_AGENT.to_string(),
        topic_limit: 1,
        tts_base_url: UNUSED_SPEECH_URL.to_string(),
        tts_lang: "en".to_string(),
        watchlist_path: fixtures.join("no-watchlist.yaml"),
        fixtures_dir: Some(fixtures),
    };
    let state = AppState::from_config(&config).expect("state");
    assert_eq!(state.speech.lang(), "en");
    assert_eq!(state.pipeline.topic_limit(), 1);

    let (status, json) = send(build_app(state), get_request("/news/tesla")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Articles"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn unknown_company_returns_empty_report() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        get_request("/news/Nokia"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Company"], "Nokia");
    assert_eq!(json["Articles"], serde_json::json!([]));
    assert_eq!(json["Topics"], serde_json::json!([]));
}

#[tokio::test]
async fn blank_company_is_rejected() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        get_request("/news/%20%20"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn batch_runs_requested_companies() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        json_request(
            "/news/batch",
            &serde_json::json!({ "companies": ["Apple", "Unknown"] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Apple"]["Articles"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["Unknown"]["Articles"], serde_json::json!([]));
    assert_eq!(json["Unknown"]["Topics"], serde_json::json!([]));
}

#[tokio::test]
async fn empty_batch_uses_watchlist() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        json_request("/news/batch", &serde_json::json!({ "companies": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&String> = json.as_object().expect("object").keys().collect();
    assert_eq!(keys, vec!["Apple", "Tesla"]);
}

#[tokio::test]
async fn compare_tallies_requested_companies() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        get_request("/compare?companies=Tesla"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let tesla = &json["Sentiment_Comparison"]["Tesla"];
    assert_eq!(tesla.as_object().map(serde_json::Map::len), Some(5));
    assert_eq!(tesla["Neutral"], 1);
    assert!(json["Sentiment_Comparison"].get("Apple").is_none());
}

#[tokio::test]
async fn compare_without_query_uses_watchlist() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        get_request("/compare"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let comparison = json["Sentiment_Comparison"].as_object().expect("object");
    assert_eq!(comparison.len(), 2);
    assert!(comparison.contains_key("Apple"));
    assert!(comparison.contains_key("Tesla"));
}

#[tokio::test]
async fn tts_rejects_empty_text() {
    let (status, json) = send(
        build_app(test_state(UNUSED_SPEECH_URL)),
        json_request("/tts", &serde_json::json!({ "text": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
    assert_eq!(json["error"]["message"], "No text provided for speech");
}

#[tokio::test]
async fn tts_returns_audio() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xFB]))
        .mount(&server)
        .await;

    let response = build_app(test_state(&server.uri()))
        .oneshot(json_request(
            "/tts",
            &serde_json::json!({ "text": "Apple shares rose" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("audio/mpeg")
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    assert_eq!(&body[..], &[0xFF, 0xFB]);
}

#[tokio::test]
async fn tts_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, json) = send(
        build_app(test_state(&server.uri())),
        json_request("/tts", &serde_json::json!({ "text": "hello" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "bad_gateway");
}
