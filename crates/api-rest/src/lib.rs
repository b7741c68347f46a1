//! # API REST
//!
//! HTTP surface for MedGuide.
//!
//! Handles:
//! - The HTML form page (`web` module) rendered with askama
//! - JSON endpoints with axum (`api` module)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request tracing)
//!
//! Uses `api-shared` for wire types and `medguide-core` for all assessment logic.

#![warn(rust_2018_idioms)]

pub mod api;
pub mod web;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::HealthService;
use medguide_core::GuidanceService;

/// Application state shared across handlers
///
/// Holds the guidance service (which owns the active response producer) and the health
/// service. Both are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub service: GuidanceService,
    pub health: HealthService,
}

impl AppState {
    pub fn new(service: GuidanceService) -> Self {
        let health = HealthService::new(service.mode().as_str());
        Self { service, health }
    }
}

/// Build the full router: form page, JSON API and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::form_page).post(web::submit_form))
        .route("/health", get(api::health))
        .route("/api/guidance", post(api::guidance))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use medguide_core::{
        GuideError, GuideResult, MockProducer, PatientInput, ProducerMode, ResponseProducer,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FailingProducer;

    #[async_trait]
    impl ResponseProducer for FailingProducer {
        fn mode(&self) -> ProducerMode {
            ProducerMode::Live
        }

        async fn produce(&self, _input: &PatientInput) -> GuideResult<String> {
            Err(GuideError::CompletionStatus {
                status: 401,
                body: "missing api key".into(),
            })
        }
    }

    fn mock_app() -> Router {
        router(AppState::new(GuidanceService::new(Arc::new(MockProducer::new()))))
    }

    fn failing_app() -> Router {
        router(AppState::new(GuidanceService::new(Arc::new(FailingProducer))))
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/guidance")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::http::Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn form_page_renders_inputs() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = mock_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(r#"name="age""#));
        assert!(html.contains(r#"value="30""#));
        assert!(html.contains(r#"name="gender""#));
        assert!(html.contains(r#"name="symptoms""#));
        assert!(html.contains("NOT medical advice"));
        assert!(html.contains("Demo Mode"));
        assert!(!html.contains("outcome-"));
    }

    #[tokio::test]
    async fn empty_symptoms_show_validation_error() {
        let response = mock_app()
            .oneshot(form_request("age=30&gender=male&symptoms="))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("outcome-invalid"));
        assert!(html.contains("Please describe your symptoms."));
        assert!(!html.contains("outcome-guidance"));
    }

    #[tokio::test]
    async fn emergency_shows_banner_not_guidance() {
        let response = mock_app()
            .oneshot(form_request("age=40&gender=female&symptoms=crushing+chest+pain"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("outcome-emergency"));
        assert!(html.contains("Someone is unconscious"));
        assert!(!html.contains("outcome-guidance"));
    }

    #[tokio::test]
    async fn guidance_is_rendered_as_html() {
        let response = mock_app()
            .oneshot(form_request("age=30&gender=other&symptoms=severe+headache"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("outcome-guidance"));
        assert!(html.contains("<strong>Possible Causes:</strong>"));
        assert!(html.contains("<strong>When to See a Doctor:</strong>"));
        assert!(html.contains("Always consult a healthcare professional"));
        assert!(html.contains("severe headache</textarea>"));
        assert!(html.contains(r#"<option value="other" selected>"#));
    }

    #[tokio::test]
    async fn submitted_symptoms_are_escaped() {
        let response = mock_app()
            .oneshot(form_request("age=30&symptoms=%3Cb%3Ecough%3C%2Fb%3E"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!html.contains("<b>cough</b>"));
        assert!(html.contains("&lt;b&gt;cough"));
    }

    #[tokio::test]
    async fn producer_failure_shows_error_without_guidance() {
        let response = failing_app()
            .oneshot(form_request("age=30&gender=male&symptoms=sore+throat"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("outcome-error"));
        assert!(html.contains("Error: completion service returned 401"));
        assert!(!html.contains("outcome-guidance"));
        assert!(!html.contains("Demo Mode"));
    }

    #[tokio::test]
    async fn api_guidance_response_shape() {
        let response = mock_app()
            .oneshot(json_request(serde_json::json!({
                "age": 30,
                "gender": "female",
                "symptoms": "fever and cough"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["outcome"], "guidance");
        assert_eq!(json["mode"], "mock");
        assert!(json["guidance"]
            .as_str()
            .unwrap()
            .contains("Common viral infection"));
        assert!(json["emergency_conditions"].as_array().unwrap().is_empty());
        assert!(json["assessment_id"].as_str().unwrap().len() >= 32);
        assert!(json["assessed_at"].is_string());
        assert!(json["disclaimer"].as_str().unwrap().contains("educational"));
    }

    #[tokio::test]
    async fn api_accepts_mixed_case_gender() {
        let response = mock_app()
            .oneshot(json_request(serde_json::json!({
                "gender": "Female",
                "symptoms": "back pain"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["outcome"], "guidance");
    }

    #[tokio::test]
    async fn whitespace_symptoms_render_guidance() {
        let response = mock_app()
            .oneshot(form_request("age=30&gender=male&symptoms=+++"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("outcome-guidance"));
        assert!(!html.contains("outcome-invalid"));
    }

    #[tokio::test]
    async fn api_emergency_lists_conditions() {
        let response = mock_app()
            .oneshot(json_request(serde_json::json!({
                "symptoms": "Suicidal thoughts"
            })))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["outcome"], "emergency");
        assert!(json["guidance"].is_null());
        assert_eq!(json["emergency_conditions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn api_empty_symptoms_is_invalid() {
        let response = mock_app()
            .oneshot(json_request(serde_json::json!({ "age": 200, "symptoms": "" })))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["outcome"], "invalid");
        assert_eq!(json["message"], "Please describe your symptoms.");
    }

    #[tokio::test]
    async fn api_failure_is_reported_as_error_outcome() {
        let response = failing_app()
            .oneshot(json_request(serde_json::json!({ "symptoms": "rash" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["outcome"], "error");
        assert!(json["message"].as_str().unwrap().starts_with("Error: "));
        assert!(json["guidance"].is_null());
        assert_eq!(json["mode"], "live");
    }

    #[tokio::test]
    async fn health_reports_mode() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = mock_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["ok"], true);
        assert_eq!(json["mode"], "mock");
    }

    #[tokio::test]
    async fn openapi_document_lists_paths() {
        let req = Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap();
        let response = mock_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert!(json["paths"]["/api/guidance"].is_object());
        assert!(json["paths"]["/health"].is_object());
    }
}
