//! Weighmark HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page with sliders and chart panes
//!
//! ## Scoring
//! - `POST /api/v1/scores` - Stateless recompute (scores + chart specs)
//! - `GET /api/v1/ratings` - The rating table
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Live dashboard session
//!
//! # Example
//!
//! ```rust,ignore
//! use weighmark::api::{serve, ApiConfig, AppState};
//! use weighmark::ratings::RatingStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Arc::new(RatingStore::fixture()), config.clone())?;
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::websocket::websocket_handler;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/scores", post(routes::scores::compute))
        .route("/ratings", get(routes::ratings::list_ratings));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server and run until a shutdown signal arrives
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Weighmark dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Weighmark shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratings::RatingStore;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(RatingStore::fixture()), ApiConfig::default()).unwrap();
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn score_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/scores")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["platforms"], 4);
        assert_eq!(json["tasks"], 10);
        assert_eq!(json["active_sessions"], 0);
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("sliders-container"));
        assert!(page.contains("Generating local data importance:"));
    }

    #[tokio::test]
    async fn test_ratings() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/ratings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["tasks"].as_array().unwrap().len(), 10);
        assert_eq!(json["platforms"][0]["name"], "ChatGPT");
        assert_eq!(json["platforms"][2]["color"], "#FFA500");
    }

    #[tokio::test]
    async fn test_scores_all_ones() {
        let app = create_test_app();

        let response = app
            .oneshot(score_request(r#"{"importance": [1,1,1,1,1,1,1,1,1,1]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["scores"][0]["platform"], "Claude");
        assert_eq!(json["scores"][0]["score"], 100.0);
        assert_eq!(json["scores"][3]["platform"], "Perplexity");
        assert_eq!(json["bar"]["kind"], "bar");
        assert_eq!(json["radar"]["series"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_scores_task_zero_emphasis() {
        let app = create_test_app();

        let response = app
            .oneshot(score_request(r#"{"importance": [5,1,1,1,1,1,1,1,1,1]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["scores"][0]["platform"], "Perplexity");
        assert_eq!(json["importance"][0], 5);
    }

    #[tokio::test]
    async fn test_scores_wrong_length() {
        let app = create_test_app();

        let response = app
            .oneshot(score_request(r#"{"importance": [1,2,3]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "INVALID_IMPORTANCE");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_scores_out_of_range() {
        let app = create_test_app();

        let response = app
            .oneshot(score_request(r#"{"importance": [1,1,1,1,1,1,1,1,1,6]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "INVALID_IMPORTANCE");
    }

    #[tokio::test]
    async fn test_scores_invalid_json() {
        let app = create_test_app();

        let response = app.oneshot(score_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_scores_value_beyond_u8() {
        let app = create_test_app();

        let response = app
            .oneshot(score_request(r#"{"importance": [1,1,1,1,1,1,1,1,1,300]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_scores_negative_value() {
        let app = create_test_app();

        let response = app
            .oneshot(score_request(r#"{"importance": [-1,1,1,1,1,1,1,1,1,1]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_scores_missing_field() {
        let app = create_test_app();

        let response = app.oneshot(score_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("importance"));
    }
}
