//! Tariff tables for the pricing engine.
//!
//! A `TariffConstants` value is built once at startup and handed to every
//! calculator by reference. Nothing in the engine reads a rate from anywhere
//! else.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculators::PricingError;

/// Upper edge of a fare band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandCeiling {
    /// Band covers distances up to and including this many km.
    Km(u32),
    /// Catch-all band for any distance.
    Unbounded,
}

impl BandCeiling {
    /// A distance exactly on the ceiling belongs to this band.
    pub fn covers(&self, distance_km: Decimal) -> bool {
        match self {
            BandCeiling::Km(max) => distance_km <= Decimal::from(*max),
            BandCeiling::Unbounded => true,
        }
    }
}

/// One row of a banded fare table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBand {
    pub max_distance_km: BandCeiling,
    pub fare: i64,
}

impl FareBand {
    pub const fn up_to(km: u32, fare: i64) -> Self {
        Self {
            max_distance_km: BandCeiling::Km(km),
            fare,
        }
    }

    pub const fn beyond(fare: i64) -> Self {
        Self {
            max_distance_km: BandCeiling::Unbounded,
            fare,
        }
    }
}

/// Flat local-cab surcharge added at the destination station/airport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationCab {
    pub train: i64,
    pub flight: i64,
}

/// One tier of the cancellation-refund ladder.
///
/// `min_days` is an inclusive lower bound on days until the event. `None`
/// marks the catch-all tier, which must be last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationTier {
    pub min_days: Option<i64>,
    pub refund_percent: u32,
    pub label: String,
}

impl CancellationTier {
    pub fn from_days(min_days: i64, refund_percent: u32, label: &str) -> Self {
        Self {
            min_days: Some(min_days),
            refund_percent,
            label: label.to_string(),
        }
    }

    pub fn catch_all(refund_percent: u32, label: &str) -> Self {
        Self {
            min_days: None,
            refund_percent,
            label: label.to_string(),
        }
    }

    pub fn matches(&self, days_until_event: i64) -> bool {
        self.min_days.map_or(true, |min| days_until_event >= min)
    }
}

/// Complete tariff configuration for one deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffConstants {
    pub platform_fee_percent: u32,
    pub travel_service_fee_percent: u32,
    pub gst_percent: u32,
    pub food_allowance_per_day: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub self_drive_rate_per_km: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub local_cab_rate_per_km: Decimal,
    /// Cab mode is refused at or beyond this distance
    pub cab_max_distance_km: u32,
    pub max_drive_km_per_day: u32,
    pub train_fare_bands: Vec<FareBand>,
    pub flight_fare_bands: Vec<FareBand>,
    pub local_cab_at_destination: DestinationCab,
    /// Ordered most-lenient first
    pub cancellation_ladder: Vec<CancellationTier>,
}

impl TariffConstants {
    /// Production tariff.
    pub fn standard() -> Self {
        Self {
            platform_fee_percent: 15,
            travel_service_fee_percent: 5,
            gst_percent: 18,
            food_allowance_per_day: 500,
            self_drive_rate_per_km: Decimal::from(12),
            local_cab_rate_per_km: Decimal::from(15),
            cab_max_distance_km: 300,
            max_drive_km_per_day: 400,
            train_fare_bands: vec![
                FareBand::up_to(200, 700),
                FareBand::up_to(500, 1200),
                FareBand::up_to(1000, 2000),
                FareBand::beyond(3000),
            ],
            flight_fare_bands: vec![
                FareBand::up_to(500, 4000),
                FareBand::up_to(1000, 5500),
                FareBand::up_to(2000, 7000),
                FareBand::beyond(9000),
            ],
            local_cab_at_destination: DestinationCab {
                train: 500,
                flight: 800,
            },
            cancellation_ladder: vec![
                CancellationTier::from_days(8, 90, "More than 7 days before"),
                CancellationTier::from_days(3, 50, "3-7 days before"),
                CancellationTier::from_days(1, 20, "Less than 3 days before"),
                CancellationTier::catch_all(0, "Same day or after the event"),
            ],
        }
    }

    /// Check the structural invariants the calculators rely on.
    pub fn validate(&self) -> Result<(), PricingError> {
        for (name, percent) in [
            ("platform_fee_percent", self.platform_fee_percent),
            ("travel_service_fee_percent", self.travel_service_fee_percent),
            ("gst_percent", self.gst_percent),
        ] {
            if percent > 100 {
                return Err(PricingError::InvalidTariff(format!(
                    "{} must be at most 100, got {}",
                    name, percent
                )));
            }
        }

        if self.food_allowance_per_day < 0 {
            return Err(PricingError::InvalidTariff(
                "food_allowance_per_day must not be negative".to_string(),
            ));
        }
        if self.self_drive_rate_per_km.is_sign_negative()
            || self.local_cab_rate_per_km.is_sign_negative()
        {
            return Err(PricingError::InvalidTariff(
                "per-km rates must not be negative".to_string(),
            ));
        }
        if self.local_cab_at_destination.train < 0 || self.local_cab_at_destination.flight < 0 {
            return Err(PricingError::InvalidTariff(
                "destination cab surcharges must not be negative".to_string(),
            ));
        }
        if self.max_drive_km_per_day == 0 {
            return Err(PricingError::InvalidTariff(
                "max_drive_km_per_day must be positive".to_string(),
            ));
        }

        validate_bands("train_fare_bands", &self.train_fare_bands)?;
        validate_bands("flight_fare_bands", &self.flight_fare_bands)?;
        validate_ladder(&self.cancellation_ladder)
    }
}

impl Default for TariffConstants {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_bands(name: &str, bands: &[FareBand]) -> Result<(), PricingError> {
    let Some((last, finite)) = bands.split_last() else {
        return Err(PricingError::InvalidTariff(format!("{} is empty", name)));
    };

    if last.max_distance_km != BandCeiling::Unbounded {
        return Err(PricingError::InvalidTariff(format!(
            "{} must end with an unbounded band",
            name
        )));
    }

    let mut previous: Option<u32> = None;
    for band in finite {
        let BandCeiling::Km(km) = band.max_distance_km else {
            return Err(PricingError::InvalidTariff(format!(
                "{} has an unbounded band before the last position",
                name
            )));
        };
        if previous.is_some_and(|p| km <= p) {
            return Err(PricingError::InvalidTariff(format!(
                "{} ceilings must be strictly ascending",
                name
            )));
        }
        previous = Some(km);
    }

    if bands.iter().any(|b| b.fare < 0) {
        return Err(PricingError::InvalidTariff(format!(
            "{} has a negative fare",
            name
        )));
    }

    Ok(())
}

fn validate_ladder(ladder: &[CancellationTier]) -> Result<(), PricingError> {
    let Some((last, graded)) = ladder.split_last() else {
        return Err(PricingError::InvalidTariff(
            "cancellation_ladder is empty".to_string(),
        ));
    };

    if last.min_days.is_some() {
        return Err(PricingError::InvalidTariff(
            "cancellation_ladder must end with a catch-all tier".to_string(),
        ));
    }

    let mut previous: Option<i64> = None;
    for tier in graded {
        let Some(min) = tier.min_days else {
            return Err(PricingError::InvalidTariff(
                "cancellation_ladder has a catch-all tier before the last position".to_string(),
            ));
        };
        if previous.is_some_and(|p| min >= p) {
            return Err(PricingError::InvalidTariff(
                "cancellation_ladder thresholds must be strictly descending".to_string(),
            ));
        }
        previous = Some(min);
    }

    if let Some(tier) = ladder.iter().find(|t| t.refund_percent > 100) {
        return Err(PricingError::InvalidTariff(format!(
            "refund percent {} for '{}' exceeds 100",
            tier.refund_percent, tier.label
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_tariff_is_valid() {
        assert_eq!(TariffConstants::standard().validate(), Ok(()));
        assert_eq!(TariffConstants::default(), TariffConstants::standard());
    }

    #[test]
    fn test_band_ceiling_is_inclusive() {
        let ceiling = BandCeiling::Km(200);
        assert!(ceiling.covers(dec!(199.9)));
        assert!(ceiling.covers(dec!(200)));
        assert!(!ceiling.covers(dec!(200.01)));
        assert!(BandCeiling::Unbounded.covers(dec!(100000)));
    }

    #[test]
    fn test_tier_matching() {
        let tier = CancellationTier::from_days(3, 50, "3-7 days before");
        assert!(tier.matches(3));
        assert!(tier.matches(7));
        assert!(!tier.matches(2));
        assert!(CancellationTier::catch_all(0, "late").matches(-5));
    }

    #[test]
    fn test_rejects_band_table_without_unbounded_tail() {
        let mut tariffs = TariffConstants::standard();
        tariffs.train_fare_bands.pop();
        assert!(matches!(
            tariffs.validate(),
            Err(PricingError::InvalidTariff(msg)) if msg.contains("unbounded")
        ));
    }

    #[test]
    fn test_rejects_unsorted_bands() {
        let mut tariffs = TariffConstants::standard();
        tariffs.flight_fare_bands = vec![
            FareBand::up_to(1000, 5500),
            FareBand::up_to(500, 4000),
            FareBand::beyond(9000),
        ];
        assert!(tariffs.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_bands() {
        let mut tariffs = TariffConstants::standard();
        tariffs.train_fare_bands.clear();
        assert!(tariffs.validate().is_err());
    }

    #[test]
    fn test_rejects_ladder_out_of_order() {
        let mut tariffs = TariffConstants::standard();
        tariffs.cancellation_ladder.swap(0, 1);
        assert!(tariffs.validate().is_err());
    }

    #[test]
    fn test_rejects_ladder_without_catch_all() {
        let mut tariffs = TariffConstants::standard();
        tariffs.cancellation_ladder.pop();
        assert!(tariffs.validate().is_err());
    }

    #[test]
    fn test_rejects_percent_over_hundred() {
        let mut tariffs = TariffConstants::standard();
        tariffs.gst_percent = 118;
        assert!(tariffs.validate().is_err());

        let mut tariffs = TariffConstants::standard();
        tariffs.cancellation_ladder[0].refund_percent = 110;
        assert!(tariffs.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_drive_limit() {
        let mut tariffs = TariffConstants::standard();
        tariffs.max_drive_km_per_day = 0;
        assert!(tariffs.validate().is_err());
    }

    #[test]
    fn test_tariff_serializes_ceilings_explicitly() {
        let json = serde_json::to_value(TariffConstants::standard()).unwrap();
        assert_eq!(json["train_fare_bands"][0]["max_distance_km"]["km"], 200);
        assert_eq!(json["train_fare_bands"][3]["max_distance_km"], "unbounded");
        assert_eq!(json["self_drive_rate_per_km"], "12");
    }
}
