//! Cancellation refunds.
//!
//! The refund percent depends only on how many days remain before the event,
//! looked up in the tariff's cancellation ladder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::calculators::percent_of;
use super::tariffs::TariffConstants;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Outcome of cancelling a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundCalculation {
    pub grand_total: i64,
    pub days_until_event: i64,
    pub refund_percent: u32,
    pub policy_label: String,
    pub refundable_amount: i64,
    pub platform_fee_retained: i64,
    /// Cancellation happened after the event start. Display only.
    pub event_passed: bool,
}

/// Whole days until the event, rounded up. Zero or negative once the event
/// is less than a day away or already past.
pub fn days_until_event(event_date: DateTime<Utc>, cancellation_date: DateTime<Utc>) -> i64 {
    let millis = (event_date - cancellation_date).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Apply the cancellation ladder to a booking total.
pub fn compute_refund(
    tariffs: &TariffConstants,
    grand_total: i64,
    event_date: DateTime<Utc>,
    cancellation_date: DateTime<Utc>,
) -> RefundCalculation {
    let days = days_until_event(event_date, cancellation_date);

    // A ladder without a catch-all falls through to its last tier
    let ladder = &tariffs.cancellation_ladder;
    let (refund_percent, policy_label) = ladder
        .iter()
        .find(|tier| tier.matches(days))
        .or_else(|| ladder.last())
        .map(|tier| (tier.refund_percent, tier.label.clone()))
        .unwrap_or_default();

    let refundable_amount = percent_of(grand_total, refund_percent);

    RefundCalculation {
        grand_total,
        days_until_event: days,
        refund_percent,
        policy_label,
        refundable_amount,
        platform_fee_retained: grand_total - refundable_amount,
        event_passed: cancellation_date > event_date,
    }
}

/// Refund for a cancellation happening right now.
pub fn compute_refund_now(
    tariffs: &TariffConstants,
    grand_total: i64,
    event_date: DateTime<Utc>,
) -> RefundCalculation {
    compute_refund(tariffs, grand_total, event_date, Utc::now())
}
