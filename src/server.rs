//! HTTP server implementation using Axum.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::error::LookupError;
use crate::state::AppState;

/// The only message a client ever sees for a failed search.
const SEARCH_FAILED: &str = "Failed to perform search";

/// Build the router: `POST /api/search` and `GET /health`.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/search", post(handle_search))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve in the background.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(state: AppState, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {actual_addr}");

    let app = router(Arc::new(state));
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("server error: {e}");
        }
    });

    Ok(actual_addr)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn handle_search(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    // Reading and scanning the file is blocking work.
    let result = tokio::task::spawn_blocking(move || state.search(&body))
        .await
        .unwrap_or_else(|e| Err(LookupError::Internal(e.to_string())));

    match result {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            error!("Search error: {:#}", anyhow::Error::new(e));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": SEARCH_FAILED})),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use std::io::Write;
    use tower::ServiceExt;

    fn write_sample() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "FIRMS Code,FIRMS Name,Facility Type,Address,City,State,Zip,Country,FIRMS Status"
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(file, "C556,Acme,Warehouse,1 Main St,Fresno,CA,93650,US,ACTIVE").unwrap();
        writeln!(file, "X001,Bay Inc,CFS,9 Pier Rd,Albany,ny,12207,US,DEACTIVATED").unwrap();
        file
    }

    async fn post_search(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/search")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn search_returns_matching_records() {
        let file = write_sample();
        let app = router(Arc::new(AppState::new(file.path())));

        let (status, json) = post_search(
            app,
            r#"{"mode":"specific","caseSensitive":false,"state":"ca","firmName":""}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["FIRMS Code"], "C556");
        assert_eq!(rows[0]["FIRMS Status"], "ACTIVE");
    }

    #[tokio::test]
    async fn no_matches_is_an_empty_array() {
        let file = write_sample();
        let app = router(Arc::new(AppState::new(file.path())));

        let (status, json) =
            post_search(app, r#"{"mode":"general","caseSensitive":true,"searchTerm":"zzz"}"#)
                .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn missing_mode_is_a_server_error() {
        let file = write_sample();
        let app = router(Arc::new(AppState::new(file.path())));

        let (status, json) = post_search(app, r#"{"searchTerm":"ca"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], SEARCH_FAILED);
    }

    #[tokio::test]
    async fn unreadable_source_is_a_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(Arc::new(AppState::new(dir.path().join("missing.csv"))));

        let (status, json) =
            post_search(app, r#"{"mode":"general","searchTerm":""}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"error": SEARCH_FAILED}));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(Arc::new(AppState::new("unused.csv")));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn server_starts_on_auto_assigned_port() {
        let addr = start_server(AppState::new("unused.csv"), "127.0.0.1", 0)
            .await
            .unwrap();
        assert!(addr.port() > 0);
    }
}
