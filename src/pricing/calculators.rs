//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no global state. Every rate is
//! read from the `TariffConstants` passed in by the caller.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tariffs::{FareBand, TariffConstants};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Cab travel is only available below {max_km} km (requested {distance_km} km)")]
    CabOutOfRange { distance_km: Decimal, max_km: u32 },

    #[error("Price breakdown field '{field}' is negative")]
    NegativeField { field: &'static str },

    #[error("Grand total mismatch: expected {expected}, got {actual}")]
    GrandTotalMismatch { expected: i64, actual: i64 },

    #[error("Invalid tariff configuration: {0}")]
    InvalidTariff(String),

    #[error("Arithmetic overflow computing {what}")]
    Overflow { what: &'static str },
}

/// How the pandit travels to the ceremony
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    SelfDrive,
    Train,
    Flight,
    Cab,
}

/// Round to specified decimal places, halves away from zero.
///
/// Every derived fee is rounded on its own before it is summed, so totals
/// are exact sums of already-rounded parts.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use pandit_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(137.7), 0), dec!(138));
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to a whole currency amount.
///
/// Saturates at the `i64` range rather than wrapping.
pub fn to_amount(amount: Decimal) -> i64 {
    round_money(amount, 0).to_i64().unwrap_or(if amount.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// `percent`% of `amount`, rounded to a whole currency amount.
pub fn percent_of(amount: i64, percent: u32) -> i64 {
    to_amount(Decimal::from(amount) * Decimal::from(percent) / Decimal::ONE_HUNDRED)
}

/// Round-trip self-drive cost.
pub fn self_drive_cost(tariffs: &TariffConstants, distance_km: Decimal) -> i64 {
    to_amount(distance_km * Decimal::TWO * tariffs.self_drive_rate_per_km)
}

/// Train fare for the matching band plus the destination cab surcharge.
pub fn train_cost(tariffs: &TariffConstants, distance_km: Decimal) -> i64 {
    band_fare(&tariffs.train_fare_bands, distance_km) + tariffs.local_cab_at_destination.train
}

/// Flight fare for the matching band plus the destination cab surcharge.
pub fn flight_cost(tariffs: &TariffConstants, distance_km: Decimal) -> i64 {
    band_fare(&tariffs.flight_fare_bands, distance_km) + tariffs.local_cab_at_destination.flight
}

/// Round-trip local cab cost. Only short hops qualify.
pub fn cab_cost(tariffs: &TariffConstants, distance_km: Decimal) -> Result<i64, PricingError> {
    if distance_km >= Decimal::from(tariffs.cab_max_distance_km) {
        return Err(PricingError::CabOutOfRange {
            distance_km,
            max_km: tariffs.cab_max_distance_km,
        });
    }

    Ok(to_amount(distance_km * Decimal::TWO * tariffs.local_cab_rate_per_km))
}

/// Travel cost for any mode.
pub fn travel_cost(
    tariffs: &TariffConstants,
    mode: TravelMode,
    distance_km: Decimal,
) -> Result<i64, PricingError> {
    match mode {
        TravelMode::SelfDrive => Ok(self_drive_cost(tariffs, distance_km)),
        TravelMode::Train => Ok(train_cost(tariffs, distance_km)),
        TravelMode::Flight => Ok(flight_cost(tariffs, distance_km)),
        TravelMode::Cab => cab_cost(tariffs, distance_km),
    }
}

/// Round-trip travel days, used to count food-allowance days.
pub fn travel_days(tariffs: &TariffConstants, distance_km: Decimal) -> Result<i64, PricingError> {
    if distance_km.is_zero() {
        return Ok(0);
    }

    (distance_km / Decimal::from(tariffs.max_drive_km_per_day))
        .ceil()
        .to_i64()
        .and_then(|one_way| one_way.checked_mul(2))
        .ok_or(PricingError::Overflow {
            what: "travel_days",
        })
}

/// Food allowance for the given number of days.
pub fn food_allowance(tariffs: &TariffConstants, days: i64) -> Result<i64, PricingError> {
    days.checked_mul(tariffs.food_allowance_per_day)
        .ok_or(PricingError::Overflow {
            what: "food_allowance",
        })
}

/// First band whose ceiling covers the distance; falls back to the last band.
fn band_fare(bands: &[FareBand], distance_km: Decimal) -> i64 {
    bands
        .iter()
        .find(|band| band.max_distance_km.covers(distance_km))
        .or_else(|| bands.last())
        .map(|band| band.fare)
        .unwrap_or(0)
}
