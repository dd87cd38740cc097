//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::breakdown::PriceBreakdown;
use super::calculators::TravelMode;
use super::format::format_currency;
use super::refund::RefundCalculation;
use super::services::BookingQuote;

pub const CURRENCY: &str = "INR";

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    pub amount: i64,
    pub currency: String,
    pub formatted: String,
}

impl From<i64> for MoneyResponse {
    fn from(amount: i64) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
            formatted: format_currency(amount, true),
        }
    }
}

/// Response for travel cost calculation
#[derive(Debug, Serialize)]
pub struct TravelCostResponse {
    pub mode: TravelMode,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_km: Decimal,
    pub travel_cost: MoneyResponse,
    pub travel_days: i64,
}

/// Response for a price breakdown
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub dakshina_amount: MoneyResponse,
    pub samagri_cost: MoneyResponse,
    pub travel_cost: MoneyResponse,
    pub food_allowance_amount: MoneyResponse,
    pub accommodation_cost: MoneyResponse,
    pub platform_fee: MoneyResponse,
    pub platform_fee_gst: MoneyResponse,
    pub travel_service_fee: MoneyResponse,
    pub travel_service_fee_gst: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub grand_total: MoneyResponse,
    pub pandit_payout: MoneyResponse,
}

impl From<PriceBreakdown> for BreakdownResponse {
    fn from(b: PriceBreakdown) -> Self {
        Self {
            dakshina_amount: b.dakshina_amount.into(),
            samagri_cost: b.samagri_cost.into(),
            travel_cost: b.travel_cost.into(),
            food_allowance_amount: b.food_allowance_amount.into(),
            accommodation_cost: b.accommodation_cost.into(),
            platform_fee: b.platform_fee.into(),
            platform_fee_gst: b.platform_fee_gst.into(),
            travel_service_fee: b.travel_service_fee.into(),
            travel_service_fee_gst: b.travel_service_fee_gst.into(),
            subtotal: b.subtotal.into(),
            grand_total: b.grand_total.into(),
            pandit_payout: b.pandit_payout.into(),
        }
    }
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub breakdown: BreakdownResponse,
    pub travel_mode: Option<TravelMode>,
    pub travel_days: i64,
    pub food_allowance_days: i64,
}

impl From<BookingQuote> for QuoteResponse {
    fn from(q: BookingQuote) -> Self {
        Self {
            breakdown: q.breakdown.into(),
            travel_mode: q.travel_mode,
            travel_days: q.travel_days,
            food_allowance_days: q.food_allowance_days,
        }
    }
}

/// Response for a cancellation refund
#[derive(Debug, Serialize)]
pub struct RefundResponse {
    pub grand_total: MoneyResponse,
    pub days_until_event: i64,
    pub refund_percent: u32,
    pub policy_label: String,
    pub refundable_amount: MoneyResponse,
    pub platform_fee_retained: MoneyResponse,
    pub event_passed: bool,
}

impl From<RefundCalculation> for RefundResponse {
    fn from(r: RefundCalculation) -> Self {
        Self {
            grand_total: r.grand_total.into(),
            days_until_event: r.days_until_event,
            refund_percent: r.refund_percent,
            policy_label: r.policy_label,
            refundable_amount: r.refundable_amount.into(),
            platform_fee_retained: r.platform_fee_retained.into(),
            event_passed: r.event_passed,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
