//! Runtime configuration loaded from the environment.
//!
//! `.env` is read by the binary through `dotenvy` before `Settings::from_env`
//! runs. Tariff variables are optional overrides on top of the standard
//! tariff; fare bands and the cancellation ladder are not overridable here.

use std::net::SocketAddr;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::pricing::{PricingError, TariffConstants};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    Tariff(#[from] PricingError),
}

/// Service settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub tariffs: TariffConstants,
}

impl Settings {
    /// Read settings from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(
            &lookup,
            "PRICING_BIND_ADDR",
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        )?;

        let base = TariffConstants::standard();
        let tariffs = TariffConstants {
            platform_fee_percent: parse_or(
                &lookup,
                "PLATFORM_FEE_PERCENT",
                base.platform_fee_percent,
            )?,
            travel_service_fee_percent: parse_or(
                &lookup,
                "TRAVEL_SERVICE_FEE_PERCENT",
                base.travel_service_fee_percent,
            )?,
            gst_percent: parse_or(&lookup, "GST_PERCENT", base.gst_percent)?,
            food_allowance_per_day: parse_or(
                &lookup,
                "FOOD_ALLOWANCE_PER_DAY",
                base.food_allowance_per_day,
            )?,
            self_drive_rate_per_km: parse_or::<Decimal, _>(
                &lookup,
                "SELF_DRIVE_RATE_PER_KM",
                base.self_drive_rate_per_km,
            )?,
            local_cab_rate_per_km: parse_or::<Decimal, _>(
                &lookup,
                "LOCAL_CAB_RATE_PER_KM",
                base.local_cab_rate_per_km,
            )?,
            cab_max_distance_km: parse_or(
                &lookup,
                "CAB_MAX_DISTANCE_KM",
                base.cab_max_distance_km,
            )?,
            max_drive_km_per_day: parse_or(
                &lookup,
                "MAX_DRIVE_KM_PER_DAY",
                base.max_drive_km_per_day,
            )?,
            ..base
        };

        tariffs.validate()?;

        Ok(Self { bind_addr, tariffs })
    }
}

/// Parse `key` if present, otherwise fall back to `default`.
fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(settings.tariffs, TariffConstants::standard());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("PRICING_BIND_ADDR", "127.0.0.1:9000"),
            ("PLATFORM_FEE_PERCENT", "12"),
            ("GST_PERCENT", " 5 "),
            ("SELF_DRIVE_RATE_PER_KM", "10.5"),
            ("MAX_DRIVE_KM_PER_DAY", "350"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr.port(), 9000);
        assert_eq!(settings.tariffs.platform_fee_percent, 12);
        assert_eq!(settings.tariffs.gst_percent, 5);
        assert_eq!(settings.tariffs.self_drive_rate_per_km, dec!(10.5));
        assert_eq!(settings.tariffs.max_drive_km_per_day, 350);
        assert_eq!(settings.tariffs.travel_service_fee_percent, 5);
    }

    #[test]
    fn test_unparseable_value() {
        let err = Settings::from_lookup(lookup(&[("GST_PERCENT", "eighteen")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "GST_PERCENT", .. }));
    }

    #[test]
    fn test_override_failing_tariff_validation() {
        let err = Settings::from_lookup(lookup(&[("MAX_DRIVE_KM_PER_DAY", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Tariff(PricingError::InvalidTariff(_))));
    }
}
