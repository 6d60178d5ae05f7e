pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/ai/providers", get(handlers::handle_list_providers))
        .route(
            "/api/v1/resume/generate",
            post(handlers::handle_generate_resume),
        )
        .route(
            "/api/v1/profile/optimize",
            post(handlers::handle_optimize_profile),
        )
        .route(
            "/api/v1/networking/suggestions",
            post(handlers::handle_networking_suggestions),
        )
        .route(
            "/api/v1/networking/message",
            post(handlers::handle_connection_message),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ProviderCredentials;
    use crate::generation::gateway::Gateway;
    use crate::llm_client::registry::ProviderRegistry;
    use crate::llm_client::template::TemplateInvoker;
    use crate::llm_client::Invoker;

    fn app() -> Router {
        let registry = ProviderRegistry::from_credentials(&ProviderCredentials::default()).unwrap();
        let gateway = Gateway::new(registry, false, |_| {
            Ok(Arc::new(TemplateInvoker) as Arc<dyn Invoker>)
        })
        .unwrap();
        build_router(AppState {
            gateway: Arc::new(gateway),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_active_provider() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["activeProvider"], "template");
    }

    #[tokio::test]
    async fn test_providers_listing_never_exposes_keys() {
        let request = Request::builder()
            .uri("/api/v1/ai/providers")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"], "template");
        assert_eq!(body["failover"], false);
        assert_eq!(body["providers"].as_array().unwrap().len(), 1);
        assert!(body["providers"][0].get("apiKey").is_none());
        assert_eq!(body["tasks"][0], "resume");
        assert_eq!(body["tasks"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_resume_generate_returns_fallback_shape() {
        let (status, body) = send(post_json(
            "/api/v1/resume/generate",
            json!({"fullName": "Asha Rao", "targetRole": "Software Developer", "country": "IN"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"], "resume");
        assert_eq!(body["source"]["kind"], "fallback");
        assert_eq!(body["result"]["contact"]["name"], "Asha Rao");
        assert!(body["result"]["contact"]["phone"]
            .as_str()
            .unwrap()
            .starts_with("+91"));
    }

    #[tokio::test]
    async fn test_resume_generate_requires_full_name() {
        let (status, body) = send(post_json(
            "/api/v1/resume/generate",
            json!({"targetRole": "Software Developer"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "fullName is required");
    }

    #[tokio::test]
    async fn test_unknown_country_is_rejected() {
        let (status, body) = send(post_json(
            "/api/v1/profile/optimize",
            json!({"targetRole": "Data Analyst", "country": "ZZ"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/networking/suggestions")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_networking_suggestions_requires_target_role() {
        let (status, body) = send(post_json("/api/v1/networking/suggestions", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "targetRole is required");
    }

    #[tokio::test]
    async fn test_networking_suggestions_with_minimal_profile() {
        let (status, body) = send(post_json(
            "/api/v1/networking/suggestions",
            json!({"targetRole": "Backend Engineer"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["result"]["targetCompanies"].is_array());
        assert!(body["result"]["connectionMessages"].is_array());
    }

    #[tokio::test]
    async fn test_connection_message_requires_target_name() {
        let (status, _) = send(post_json(
            "/api/v1/networking/message",
            json!({"userProfile": {"fullName": "Asha Rao"}, "targetProfile": {"company": "Razorpay"}}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(post_json(
            "/api/v1/networking/message",
            json!({
                "userProfile": {"fullName": "Asha Rao", "country": "IN"},
                "targetProfile": {"name": "Meera", "company": "Razorpay"},
                "context": "alumni"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"], "connection_message");
        let text = body["result"]["messages"][0]["text"].as_str().unwrap();
        assert!(text.contains("Meera"));
    }
}
