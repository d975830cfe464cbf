//! In-process stand-ins for the metadata provider, the weather archive and
//! the webhook receiver.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";

pub type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to get local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock server failed");
    });
    format!("http://{addr}")
}

/// URL of a local port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);
    format!("http://{addr}")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status_code": 7, "status_message": "Invalid API key"})),
    )
        .into_response()
}

/// Genres {28: Action, 878: Science Fiction}; titles "Inception", "Nameless"
/// and "boom" (503) are known, everything else has no results.
pub fn mock_tmdb() -> Router {
    Router::new()
        .route(
            "/genre/movie/list",
            get(|headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return unauthorized();
                }
                Json(json!({"genres": [
                    {"id": 28, "name": "Action"},
                    {"id": 878, "name": "Science Fiction"}
                ]}))
                .into_response()
            }),
        )
        .route(
            "/search/movie",
            get(
                |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                    if !authorized(&headers) {
                        return unauthorized();
                    }
                    if params.get("language").map(String::as_str) != Some("en-US")
                        || params.get("page").map(String::as_str) != Some("1")
                    {
                        return StatusCode::BAD_REQUEST.into_response();
                    }
                    let results = match params.get("query").map(String::as_str) {
                        Some("Inception") => json!([
                            {"title": "Inception", "release_date": "2010-07-16", "genre_ids": [28, 878]},
                            {"title": "Inception: The Cobol Job", "release_date": "2010-12-07", "genre_ids": [28]}
                        ]),
                        Some("Nameless") => json!([
                            {"title": "Nameless", "release_date": "", "genre_ids": [18, 28, 999]}
                        ]),
                        Some("Crowded") => json!([
                            {"title": "Crowded", "release_date": "2010-07-16", "genre_ids": [878]},
                            {"name": "Not A Movie", "genre_ids": null},
                            {"title": 42}
                        ]),
                        Some("Undated") => json!([
                            {"title": "Undated", "genre_ids": []}
                        ]),
                        Some("boom") => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
                        _ => json!([]),
                    };
                    Json(json!({"page": 1, "results": results})).into_response()
                },
            ),
        )
}

/// Archive with readings (16.2 / 26.9) for 2010-07-16 only; any other day
/// comes back with empty series.
pub fn mock_weather() -> Router {
    Router::new().route(
        "/",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let day = params.get("start_date").cloned().unwrap_or_default();
            let (min, max) = if day == "2010-07-16" {
                (json!([16.2]), json!([26.9]))
            } else {
                (json!([]), json!([]))
            };
            Json(json!({
                "latitude": 6.25,
                "longitude": -75.6,
                "daily": {
                    "time": [day],
                    "apparent_temperature_min": min,
                    "apparent_temperature_max": max
                }
            }))
        }),
    )
}

/// Webhook receiver on `/hook` answering `status` and recording bodies.
pub fn mock_webhook(status: StatusCode) -> (Router, Received) {
    let received: Received = Arc::default();
    let sink = received.clone();
    let router = Router::new().route(
        "/hook",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                status
            }
        }),
    );
    (router, received)
}
