use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::gateway::Generation;
use crate::generation::region::RegionProfile;
use crate::generation::task::{
    non_blank, ConnectionTarget, GenerationRequest, ProfileInput, TaskKind,
};
use crate::llm_client::registry::ProviderDescriptor;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionMessageRequest {
    #[serde(default)]
    pub user_profile: ProfileInput,
    pub target_profile: Option<ConnectionTarget>,
    pub context: Option<String>,
}

#[derive(Serialize)]
pub struct ProvidersResponse {
    pub active: String,
    pub failover: bool,
    pub providers: Vec<ProviderDescriptor>,
    pub tasks: Vec<TaskKind>,
}

/// POST /api/v1/resume/generate
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<Generation>, AppError> {
    let profile = body(payload)?;
    require(&profile.full_name, "fullName")?;
    require(&profile.target_role, "targetRole")?;
    validate_country(&profile)?;

    let request = GenerationRequest::new(TaskKind::Resume, profile);
    Ok(Json(state.gateway.generate(&request).await))
}

/// POST /api/v1/profile/optimize
pub async fn handle_optimize_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<Generation>, AppError> {
    let profile = body(payload)?;
    require(&profile.target_role, "targetRole")?;
    validate_country(&profile)?;

    let request = GenerationRequest::new(TaskKind::ProfileOptimization, profile);
    Ok(Json(state.gateway.generate(&request).await))
}

/// POST /api/v1/networking/suggestions
pub async fn handle_networking_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<Generation>, AppError> {
    let profile = body(payload)?;
    require(&profile.target_role, "targetRole")?;
    validate_country(&profile)?;

    let request = GenerationRequest::new(TaskKind::NetworkingSuggestions, profile);
    Ok(Json(state.gateway.generate(&request).await))
}

/// POST /api/v1/networking/message
pub async fn handle_connection_message(
    State(state): State<AppState>,
    payload: Result<Json<ConnectionMessageRequest>, JsonRejection>,
) -> Result<Json<Generation>, AppError> {
    let req = body(payload)?;
    let target = req
        .target_profile
        .filter(|t| !t.name.trim().is_empty())
        .ok_or_else(|| AppError::Validation("targetProfile.name is required".to_string()))?;
    validate_country(&req.user_profile)?;

    let request = GenerationRequest::connection_message(req.user_profile, target, req.context);
    Ok(Json(state.gateway.generate(&request).await))
}

/// GET /api/v1/ai/providers
pub async fn handle_list_providers(State(state): State<AppState>) -> Json<ProvidersResponse> {
    let registry = state.gateway.registry();
    info!("Listing {} registered AI providers", registry.descriptors().len());
    Json(ProvidersResponse {
        active: registry.active().name.clone(),
        failover: state.gateway.failover(),
        providers: registry.descriptors().to_vec(),
        tasks: TaskKind::ALL.to_vec(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(inner)| inner)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

fn require(value: &Option<String>, field: &str) -> Result<(), AppError> {
    non_blank(value)
        .map(|_| ())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

fn validate_country(profile: &ProfileInput) -> Result<(), AppError> {
    match non_blank(&profile.country) {
        Some(code) if RegionProfile::lookup(code).is_none() => Err(AppError::Validation(
            format!("Unsupported country code: {code}"),
        )),
        _ => Ok(()),
    }
}
