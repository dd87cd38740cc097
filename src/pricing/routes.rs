//! HTTP handlers for the pricing API.
//!
//! Handlers validate the request DTO, call the engine with the shared
//! tariff, and map the result into response DTOs.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::error::Result;
use crate::AppState;

use super::breakdown::{compute_breakdown, validate};
use super::calculators::{travel_cost as mode_travel_cost, travel_days};
use super::refund::compute_refund;
use super::requests::{BreakdownRequest, QuoteRequest, RefundRequest, TravelCostRequest};
use super::responses::{BreakdownResponse, QuoteResponse, RefundResponse, TravelCostResponse};
use super::services::quote_booking;
use super::tariffs::TariffConstants;

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/travel-cost", post(travel_cost))
        .route("/breakdown", post(breakdown))
        .route("/quote", post(quote))
        .route("/refund", post(refund))
        .route("/tariffs", get(tariffs))
}

async fn travel_cost(
    State(state): State<AppState>,
    Json(req): Json<TravelCostRequest>,
) -> Result<Json<TravelCostResponse>> {
    req.validate()?;

    let cost = mode_travel_cost(&state.tariffs, req.mode, req.distance_km)?;
    let days = travel_days(&state.tariffs, req.distance_km)?;
    tracing::debug!("Travel cost {:?} {} km = {}", req.mode, req.distance_km, cost);

    Ok(Json(TravelCostResponse {
        mode: req.mode,
        distance_km: req.distance_km,
        travel_cost: cost.into(),
        travel_days: days,
    }))
}

async fn breakdown(
    State(state): State<AppState>,
    Json(req): Json<BreakdownRequest>,
) -> Result<Json<BreakdownResponse>> {
    let input = req.into_input()?;

    let breakdown = compute_breakdown(&state.tariffs, &input);
    validate(&breakdown)?;

    Ok(Json(breakdown.into()))
}

async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let input = req.into_input()?;
    let quote = quote_booking(&state.tariffs, &input)?;
    Ok(Json(quote.into()))
}

async fn refund(
    State(state): State<AppState>,
    Json(req): Json<RefundRequest>,
) -> Result<Json<RefundResponse>> {
    req.validate()?;

    let cancellation_date = req.cancellation_date.unwrap_or_else(Utc::now);
    let refund = compute_refund(&state.tariffs, req.grand_total, req.event_date, cancellation_date);
    tracing::info!(
        "Refund computed: total={} days={} percent={} refundable={}",
        refund.grand_total,
        refund.days_until_event,
        refund.refund_percent,
        refund.refundable_amount
    );

    Ok(Json(refund.into()))
}

async fn tariffs(State(state): State<AppState>) -> Json<TariffConstants> {
    Json(state.tariffs.as_ref().clone())
}
