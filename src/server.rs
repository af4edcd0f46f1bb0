//! Preview server for the built bundle: static files with SPA fallback and a health probe.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Duration, Instant},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    config::ServerConfig,
    telemetry::{self, log_event, now_unix_millis, LogLevel},
};

const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    bundle_present: bool,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    telemetry::set_min_level(config.log_level);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let state = AppState {
        config: Arc::new(config),
    };
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}", state.config.port),
            "dist_dir": state.config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    let static_service = ServeDir::new(&state.config.dist_dir)
        .not_found_service(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn healthz(State(state): State<AppState>) -> Response {
    let payload = HealthPayload {
        ok: true,
        bundle_present: state.config.index_file().is_file(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (StatusCode::OK, headers, Json(payload)).into_response()
}

async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        LogLevel::Info,
        "request_served",
        request_fields(&request_id, &method, &path, response.status(), started.elapsed()),
    );

    response
}

fn request_fields(
    request_id: &str,
    method: &str,
    path: &str,
    status: StatusCode,
    elapsed: Duration,
) -> serde_json::Value {
    serde_json::json!({
        "request_id": request_id,
        "method": method,
        "path": path,
        "status": status.as_u16(),
        "elapsed_ms": elapsed.as_millis() as u64,
    })
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_state(dist_dir: &str) -> AppState {
        AppState {
            config: Arc::new(ServerConfig {
                port: 8080,
                dist_dir: PathBuf::from(dist_dir),
                log_level: LogLevel::Info,
            }),
        }
    }

    #[test]
    fn incoming_request_id_is_reused() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));

        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn missing_request_id_is_generated_and_unique() {
        let headers = HeaderMap::new();
        let first = resolve_request_id(&headers);
        let second = resolve_request_id(&headers);

        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }

    #[test]
    fn blank_request_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        assert!(resolve_request_id(&headers).starts_with("req-"));
    }

    #[tokio::test]
    async fn healthz_reports_ok_without_a_bundle() {
        let response = healthz(State(test_state("/nonexistent-portfolio-dist"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
    }

    #[test]
    fn request_fields_use_snake_case_keys() {
        let fields = request_fields(
            "req-1",
            "GET",
            "/about",
            StatusCode::NOT_FOUND,
            Duration::from_millis(12),
        );

        assert_eq!(fields["request_id"], "req-1");
        assert_eq!(fields["status"], 404);
        assert_eq!(fields["elapsed_ms"], 12);
        assert!(fields.get("requestId").is_none());
    }

    #[test]
    fn router_builds_for_any_dist_dir() {
        let _router = router(test_state("/nonexistent-portfolio-dist"));
    }
}
