//! Request DTOs for pricing API endpoints.
//!
//! Range checks live here, ahead of the engine. The calculators trust their
//! inputs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;

use super::breakdown::BreakdownInput;
use super::calculators::TravelMode;
use super::services::{BookingQuoteInput, TravelSelection};

pub const MIN_DAKSHINA: i64 = 500;
pub const MAX_DAKSHINA: i64 = 200_000;
/// Ceiling for any other rupee amount in a request (10 crore)
pub const MAX_AMOUNT: i64 = 100_000_000;
/// Ceiling for a one-way travel distance
pub const MAX_DISTANCE_KM: u32 = 40_000;

/// Request to calculate travel cost for one mode
#[derive(Debug, Deserialize)]
pub struct TravelCostRequest {
    pub mode: TravelMode,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_km: Decimal,
}

/// Request to compute a breakdown from already-priced components
#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    pub dakshina_amount: i64,
    #[serde(default)]
    pub samagri_cost: i64,
    #[serde(default)]
    pub travel_cost: i64,
    #[serde(default)]
    pub food_allowance_amount: i64,
    #[serde(default)]
    pub accommodation_cost: i64,
}

/// Request to quote a whole booking
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub dakshina_amount: i64,
    #[serde(default)]
    pub samagri_cost: i64,
    #[serde(default)]
    pub travel: Option<TravelSelection>,
    #[serde(default)]
    pub include_food_allowance: bool,
    #[serde(default)]
    pub accommodation_cost: i64,
}

/// Request to calculate a cancellation refund
#[derive(Debug, Deserialize)]
pub struct RefundRequest {
    pub grand_total: i64,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub cancellation_date: Option<DateTime<Utc>>,
}

fn check_dakshina(amount: i64) -> Result<(), AppError> {
    if !(MIN_DAKSHINA..=MAX_DAKSHINA).contains(&amount) {
        return Err(AppError::BadRequest(format!(
            "dakshina_amount must be between {} and {}, got {}",
            MIN_DAKSHINA, MAX_DAKSHINA, amount
        )));
    }
    Ok(())
}

fn check_amount(field: &str, amount: i64) -> Result<(), AppError> {
    if !(0..=MAX_AMOUNT).contains(&amount) {
        return Err(AppError::BadRequest(format!(
            "{} must be between 0 and {}, got {}",
            field, MAX_AMOUNT, amount
        )));
    }
    Ok(())
}

fn check_distance(distance_km: Decimal) -> Result<(), AppError> {
    if distance_km.is_sign_negative() && !distance_km.is_zero() {
        return Err(AppError::BadRequest("distance_km must not be negative".to_string()));
    }
    if distance_km > Decimal::from(MAX_DISTANCE_KM) {
        return Err(AppError::BadRequest(format!(
            "distance_km must be at most {}, got {}",
            MAX_DISTANCE_KM, distance_km
        )));
    }
    Ok(())
}

impl TravelCostRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_distance(self.distance_km)
    }
}

impl BreakdownRequest {
    pub fn into_input(self) -> Result<BreakdownInput, AppError> {
        check_dakshina(self.dakshina_amount)?;
        check_amount("samagri_cost", self.samagri_cost)?;
        check_amount("travel_cost", self.travel_cost)?;
        check_amount("food_allowance_amount", self.food_allowance_amount)?;
        check_amount("accommodation_cost", self.accommodation_cost)?;

        Ok(BreakdownInput {
            dakshina_amount: self.dakshina_amount,
            samagri_cost: self.samagri_cost,
            travel_cost: self.travel_cost,
            food_allowance_amount: self.food_allowance_amount,
            accommodation_cost: self.accommodation_cost,
        })
    }
}

impl QuoteRequest {
    pub fn into_input(self) -> Result<BookingQuoteInput, AppError> {
        check_dakshina(self.dakshina_amount)?;
        check_amount("samagri_cost", self.samagri_cost)?;
        check_amount("accommodation_cost", self.accommodation_cost)?;
        if let Some(travel) = &self.travel {
            check_distance(travel.distance_km)?;
        }

        Ok(BookingQuoteInput {
            dakshina_amount: self.dakshina_amount,
            samagri_cost: self.samagri_cost,
            travel: self.travel,
            include_food_allowance: self.include_food_allowance,
            accommodation_cost: self.accommodation_cost,
        })
    }
}

impl RefundRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_amount("grand_total", self.grand_total)
    }
}
