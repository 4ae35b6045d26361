//! Onboarding API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{
    AddOnOutcome, BusinessDetails, DiscountState, LanguageChoice, PaymentState,
    PendingLanguageChoice, SelectionEntry, SurveyAnswers, ToggleOutcome, Totals,
};
use uuid::Uuid;

use crate::api::{ApiResponse, AppResult, validated};
use crate::billing::AdvanceContext;
use crate::core::ServerState;

/// Response to session creation
#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub catalog_version: u32,
}

/// Full client-facing view of one session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub catalog_version: u32,
    pub business: Option<BusinessDetails>,
    pub survey: Option<SurveyAnswers>,
    pub entries: Vec<SelectionEntry>,
    pub pending_language: Option<PendingLanguageChoice>,
    pub discount: DiscountState,
    pub payment: PaymentState,
}

/// POST /api/onboarding - open a session on the current catalog
pub async fn create(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<SessionCreated>>> {
    let session_id = state.create_session();
    let catalog_version = state.sessions.read(session_id, |s| s.catalog_version())?;
    Ok(Json(ApiResponse::success(SessionCreated {
        session_id,
        catalog_version,
    })))
}

/// GET /api/onboarding/{id} - session snapshot
pub async fn get_session(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<SessionSnapshot>>> {
    let snapshot = state.sessions.read(id, |s| SessionSnapshot {
        session_id: s.id,
        created_at: s.created_at,
        catalog_version: s.catalog_version(),
        business: s.business.clone(),
        survey: s.survey.clone(),
        entries: s.engine.entries().to_vec(),
        pending_language: s.engine.pending_language().cloned(),
        discount: s.engine.discount_state(),
        payment: s.payment.clone(),
    })?;
    Ok(Json(ApiResponse::success(snapshot)))
}

/// PUT /api/onboarding/{id}/business - submit business details
pub async fn submit_business(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BusinessDetails>,
) -> AppResult<Json<ApiResponse<()>>> {
    let details = validated(payload)?;
    state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        s.business = Some(details.clone());
        Ok(())
    })?;
    state.profiles.save(id, &details).await?;
    Ok(Json(ApiResponse::ok()))
}

/// PUT /api/onboarding/{id}/survey - submit survey answers
pub async fn submit_survey(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SurveyAnswers>,
) -> AppResult<Json<ApiResponse<()>>> {
    let survey = validated(payload)?;
    state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        s.survey = Some(survey);
        Ok(())
    })?;
    Ok(Json(ApiResponse::ok()))
}

// =============================================================================
// Selection operations
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ToggleOptionRequest {
    pub section_id: String,
    pub option_id: String,
    pub quantity: Option<i64>,
    pub language: Option<LanguageChoice>,
}

/// POST /api/onboarding/{id}/selection/toggle - toggle a catalog option
pub async fn toggle_option(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ToggleOptionRequest>,
) -> AppResult<Json<ApiResponse<ToggleOutcome>>> {
    let outcome = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        Ok(s.engine.toggle_option(
            &payload.section_id,
            &payload.option_id,
            payload.quantity,
            payload.language,
        )?)
    })?;
    Ok(Json(ApiResponse::success(outcome)))
}

#[derive(Debug, Deserialize)]
pub struct ResolveLanguageRequest {
    pub add_second_language: bool,
}

/// POST /api/onboarding/{id}/selection/language - resolve the pending choice
pub async fn resolve_language(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResolveLanguageRequest>,
) -> AppResult<Json<ApiResponse<ToggleOutcome>>> {
    let outcome = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        Ok(s.engine.resolve_language_choice(payload.add_second_language)?)
    })?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// DELETE /api/onboarding/{id}/selection/language - abandon the pending choice
pub async fn cancel_language(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.sessions.update(id, |s| {
        s.engine.cancel_language_choice();
        Ok(())
    })?;
    Ok(Json(ApiResponse::ok()))
}

#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub section_id: String,
    pub option_id: String,
    pub quantity: i64,
}

/// PUT /api/onboarding/{id}/selection/quantity - set or preview a quantity
///
/// Returns the clamped value actually stored.
pub async fn set_quantity(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetQuantityRequest>,
) -> AppResult<Json<ApiResponse<i64>>> {
    let clamped = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        Ok(s.engine
            .set_quantity(&payload.section_id, &payload.option_id, payload.quantity)?)
    })?;
    Ok(Json(ApiResponse::success(clamped)))
}

#[derive(Debug, Deserialize)]
pub struct TogglePlanRequest {
    pub plan_id: String,
}

/// POST /api/onboarding/{id}/selection/plan - toggle a fixed plan
pub async fn toggle_plan(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TogglePlanRequest>,
) -> AppResult<Json<ApiResponse<ToggleOutcome>>> {
    let outcome = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        Ok(s.engine.select_fixed_plan(&payload.plan_id)?)
    })?;
    Ok(Json(ApiResponse::success(outcome)))
}

#[derive(Debug, Deserialize)]
pub struct SetPlanViewsRequest {
    pub plan_id: String,
    pub views: i64,
}

/// PUT /api/onboarding/{id}/selection/plan/views - set or preview plan views
pub async fn set_plan_views(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetPlanViewsRequest>,
) -> AppResult<Json<ApiResponse<i64>>> {
    let clamped = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        Ok(s.engine.set_plan_views(&payload.plan_id, payload.views)?)
    })?;
    Ok(Json(ApiResponse::success(clamped)))
}

#[derive(Debug, Deserialize)]
pub struct ToggleAddOnRequest {
    pub plan_id: String,
    pub add_on_id: String,
}

/// POST /api/onboarding/{id}/selection/add-on - toggle a plan add-on
pub async fn toggle_add_on(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ToggleAddOnRequest>,
) -> AppResult<Json<ApiResponse<AddOnOutcome>>> {
    let outcome = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        Ok(s.engine.toggle_add_on(&payload.plan_id, &payload.add_on_id)?)
    })?;
    Ok(Json(ApiResponse::success(outcome)))
}

#[derive(Debug, Deserialize)]
pub struct RedeemRequest {
    pub code: String,
}

/// POST /api/onboarding/{id}/selection/redeem - unlock the discount entry
pub async fn apply_redeem(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RedeemRequest>,
) -> AppResult<Json<ApiResponse<DiscountState>>> {
    let discount = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        s.engine.apply_redeem_code(&payload.code)?;
        Ok(s.engine.discount_state())
    })?;
    Ok(Json(ApiResponse::success(discount)))
}

#[derive(Debug, Deserialize)]
pub struct SetDiscountRequest {
    pub percent: f64,
}

/// PUT /api/onboarding/{id}/selection/discount - set the discount percent
pub async fn set_discount(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetDiscountRequest>,
) -> AppResult<Json<ApiResponse<DiscountState>>> {
    let discount = state.sessions.update(id, |s| {
        s.ensure_mutable()?;
        s.engine.set_discount_percent(payload.percent)?;
        Ok(s.engine.discount_state())
    })?;
    Ok(Json(ApiResponse::success(discount)))
}

#[derive(Debug, Deserialize)]
pub struct TotalsQuery {
    /// `summary` (default) or `billing`
    pub context: Option<AdvanceContext>,
}

/// GET /api/onboarding/{id}/totals - totals at the context's advance rate
pub async fn totals(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TotalsQuery>,
) -> AppResult<Json<ApiResponse<Totals>>> {
    let context = query.context.unwrap_or(AdvanceContext::Summary);
    let rate = context.advance_percent(state.config.advance_percent);
    let totals = state.sessions.read(id, |s| s.engine.totals(rate))?;
    Ok(Json(ApiResponse::success(totals)))
}
