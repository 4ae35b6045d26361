//! Payment API handlers

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use shared::error::ErrorCode;
use shared::models::{GatewayOrder, PaymentState};
use uuid::Uuid;

use crate::api::{ApiResponse, AppError, AppResult};
use crate::core::ServerState;
use crate::{billing, notify, payment};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub session_id: Uuid,
}

/// POST /api/payment/order - create a gateway order for the advance
///
/// Rejects up front when the cart is empty or business details are
/// missing; a gateway failure is surfaced as-is, never retried.
pub async fn create_order(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<GatewayOrder>>> {
    let (business, currency, totals) = state.sessions.read(payload.session_id, |s| {
        s.ensure_mutable()?;
        let business = s
            .business
            .clone()
            .ok_or_else(|| AppError::new(ErrorCode::ProfileIncomplete))?;
        if s.engine.is_empty() {
            return Err(AppError::new(ErrorCode::SelectionEmpty));
        }
        let totals = s.engine.totals(state.config.advance_percent);
        Ok((business, s.engine.catalog().currency.clone(), totals))
    })??;

    let receipt = payment::receipt_id();
    let notes = json!({
        "session_id": payload.session_id,
        "business_name": business.business_name,
        "email": business.email,
    });
    let order = state
        .gateway
        .create_order(
            billing::to_minor_units(totals.advance_amount),
            &currency,
            &receipt,
            notes,
        )
        .await?;

    state.sessions.update(payload.session_id, |s| {
        s.payment = PaymentState::OrderCreated {
            order_id: order.order_id.clone(),
            advance_amount: totals.advance_amount,
            created_at: Utc::now().timestamp_millis(),
        };
        Ok(())
    })?;

    Ok(Json(ApiResponse::success(order)))
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub session_id: Uuid,
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// POST /api/payment/verify - verify the checkout callback
///
/// A mismatched signature is an authoritative rejection: no paid state,
/// no email. On success the session becomes read-only history and the
/// confirmation emails go out best-effort.
pub async fn verify(
    State(state): State<ServerState>,
    Json(payload): Json<VerifyRequest>,
) -> AppResult<Json<ApiResponse<PaymentState>>> {
    let awaited_order = state.sessions.read(payload.session_id, |s| match &s.payment {
        PaymentState::OrderCreated { order_id, .. } => Ok(order_id.clone()),
        PaymentState::Paid { .. } => Err(AppError::new(ErrorCode::SessionAlreadyPaid)),
        PaymentState::Pending => {
            Err(AppError::invalid_request("No gateway order awaiting payment"))
        }
    })??;

    if awaited_order != payload.order_id {
        return Err(AppError::with_message(
            ErrorCode::VerificationFailed,
            "Order id does not match this session",
        ));
    }

    state
        .gateway
        .verify_signature(&payload.order_id, &payload.payment_id, &payload.signature)?;

    let (paid, business, entries, totals) = state.sessions.update(payload.session_id, |s| {
        let business = s
            .business
            .clone()
            .ok_or_else(|| AppError::new(ErrorCode::ProfileIncomplete))?;
        let paid = PaymentState::Paid {
            order_id: payload.order_id.clone(),
            payment_id: payload.payment_id.clone(),
            verified_at: Utc::now().timestamp_millis(),
        };
        s.payment = paid.clone();
        let totals = s.engine.totals(state.config.advance_percent);
        Ok((paid, business, s.engine.entries().to_vec(), totals))
    })?;

    tracing::info!(
        session_id = %payload.session_id,
        payment_id = %payload.payment_id,
        amount = totals.advance_amount,
        "Payment verified"
    );

    notify::dispatch_payment_emails(
        state.mailer.as_ref(),
        &state.config.admin_emails,
        &business,
        &entries,
        &totals,
        &payload.payment_id,
    )
    .await;

    Ok(Json(ApiResponse::success(paid)))
}
