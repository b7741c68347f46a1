//! JSON endpoints.

use axum::{extract::State, response::Json};
use tracing::Instrument;
use utoipa::OpenApi;

use api_shared::{GuidanceReq, GuidanceRes, HealthRes};
use medguide_core::constants::DISCLAIMER;
use medguide_core::{Outcome, ProducerMode, Submission};

use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(health, guidance),
    components(schemas(HealthRes, GuidanceReq, GuidanceRes))
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status and the active producer mode.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(state.health.check_health())
}

#[utoipa::path(
    post,
    path = "/api/guidance",
    request_body = GuidanceReq,
    responses(
        (status = 200, description = "Assessment outcome (invalid, emergency, guidance or error)", body = GuidanceRes),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Body does not match GuidanceReq")
    )
)]
/// Assess a symptom submission
///
/// Runs the same validate, screen and produce flow as the HTML form. Every outcome,
/// including producer failure, is reported with status 200 and an `outcome` tag.
#[axum::debug_handler]
pub async fn guidance(
    State(state): State<AppState>,
    Json(req): Json<GuidanceReq>,
) -> Json<GuidanceRes> {
    let assessment_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("assessment", id = %assessment_id);

    let submission = Submission::new(req.age, req.gender, req.symptoms);
    let outcome = state.service.assess(submission).instrument(span.clone()).await;
    span.in_scope(|| tracing::info!(outcome = outcome.kind(), "api submission assessed"));

    Json(guidance_res(
        assessment_id.to_string(),
        chrono::Utc::now().to_rfc3339(),
        &outcome,
        state.service.mode(),
    ))
}

/// Flatten an [`Outcome`] into the wire shape.
pub(crate) fn guidance_res(
    assessment_id: String,
    assessed_at: String,
    outcome: &Outcome,
    mode: ProducerMode,
) -> GuidanceRes {
    let (message, guidance, emergency_conditions) = match outcome {
        Outcome::Invalid(msg) => (msg.clone(), None, Vec::new()),
        Outcome::Emergency(notice) => (
            notice.headline.to_string(),
            None,
            notice.conditions.iter().map(|c| c.to_string()).collect(),
        ),
        Outcome::Guidance(g) => (
            "Educational Medical Guidance".to_string(),
            Some(g.text.clone()),
            Vec::new(),
        ),
        Outcome::Failed(msg) => (format!("Error: {msg}"), None, Vec::new()),
    };

    GuidanceRes {
        assessment_id,
        assessed_at,
        outcome: outcome.kind().to_string(),
        message,
        guidance,
        emergency_conditions,
        disclaimer: DISCLAIMER.to_string(),
        mode: mode.to_string(),
    }
}
