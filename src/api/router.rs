use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::pages;
use super::state::AppState;
use super::v1;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Prometheus endpoint to mount next to the application routes
pub struct MetricsEndpoint {
    pub metrics: PrometheusMetrics,
    pub path: String,
}

/// Create the full router with application state
pub fn create_router(state: AppState, metrics: Option<MetricsEndpoint>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .merge(pages::create_pages_router())
        .with_state(state);

    if let Some(endpoint) = metrics {
        router = router
            .merge(create_metrics_router(endpoint.metrics, &endpoint.path))
            .layer(middleware::from_fn(metrics_middleware));
    }

    router
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::api::state::testing::state_with_label;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
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
    async fn test_health() {
        let app = create_router(state_with_label(Some(0)), None);
        let (status, json) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_reports_missing_models() {
        let app = create_router(state_with_label(None), None);
        let (status, json) = get_json(app, "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"].as_array().unwrap().len(), 3);
        assert_eq!(json["checks"][1]["name"], "heart_disease_model");
    }

    #[tokio::test]
    async fn test_ready_with_models_present() {
        let app = create_router(state_with_label(Some(0)), None);
        let (_, json) = get_json(app, "/ready").await;

        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_diseases() {
        let app = create_router(state_with_label(Some(0)), None);
        let (status, json) = get_json(app, "/v1/diseases").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["model_id"], "diabetes_model");
    }

    #[tokio::test]
    async fn test_predict_json() {
        let app = create_router(state_with_label(Some(1)), None);
        let (status, json) = post_json(
            app,
            "/v1/predict/diabetes",
            r#"{"inputs": [2, 150, 80, 30, 100, 28.5, 0.5, 35]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["label"], 1);
        assert_eq!(json["at_risk"], true);
        assert_eq!(json["result"], "The person is at risk of diabetes");
        assert_eq!(
            json["recommendations"][0],
            "Monitor blood glucose levels regularly"
        );
    }

    #[tokio::test]
    async fn test_predict_json_validation_error() {
        let app = create_router(state_with_label(Some(1)), None);
        let (status, json) = post_json(
            app,
            "/v1/predict/diabetes",
            r#"{"inputs": [2, 1500, 80, 30, 100, 28.5, 0.5, 35]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Values should be between 0 and 1000"));
    }

    #[tokio::test]
    async fn test_predict_json_unknown_disease() {
        let app = create_router(state_with_label(Some(1)), None);
        let (status, json) = post_json(app, "/v1/predict/kidney", r#"{"inputs": []}"#).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_predict_json_model_unavailable() {
        let app = create_router(state_with_label(None), None);
        let (status, json) = post_json(
            app,
            "/v1/predict/diabetes",
            r#"{"inputs": [2, 150, 80, 30, 100, 28.5, 0.5, 35]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"]["code"], "prediction_failed");
        assert_eq!(
            json["error"]["message"],
            "Prediction error: diabetes_model: Model file not found: saved_models/diabetes_model.json"
        );
    }

    #[tokio::test]
    async fn test_security_headers_applied() {
        let app = create_router(state_with_label(Some(0)), None);
        let response = app
            .oneshot(Request::builder().uri("/diabetes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(response.headers().contains_key("x-request-id"));
    }
}
