//! Booking-level pricing services.
//!
//! Composes the calculators in the order a booking request needs them:
//! travel cost, then food allowance, then the invoice breakdown, then the
//! consistency check.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::breakdown::{compute_breakdown, validate, BreakdownInput, PriceBreakdown};
use super::calculators::{food_allowance, travel_cost, travel_days, PricingError, TravelMode};
use super::tariffs::TariffConstants;

/// Chosen travel arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSelection {
    pub mode: TravelMode,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_km: Decimal,
}

/// Everything needed to price one booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingQuoteInput {
    pub dakshina_amount: i64,
    pub samagri_cost: i64,
    pub travel: Option<TravelSelection>,
    pub include_food_allowance: bool,
    pub accommodation_cost: i64,
}

/// Result of pricing a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    pub breakdown: PriceBreakdown,
    pub travel_mode: Option<TravelMode>,
    pub travel_days: i64,
    pub food_allowance_days: i64,
}

/// Price a booking end to end.
///
/// Fails with `CabOutOfRange` for cab travel over the cab ceiling, or with a
/// validator error if the composed breakdown is inconsistent.
pub fn quote_booking(
    tariffs: &TariffConstants,
    input: &BookingQuoteInput,
) -> Result<BookingQuote, PricingError> {
    let (travel_amount, days) = match input.travel {
        Some(selection) => (
            travel_cost(tariffs, selection.mode, selection.distance_km)?,
            travel_days(tariffs, selection.distance_km)?,
        ),
        None => (0, 0),
    };

    let food_allowance_days = if input.include_food_allowance { days } else { 0 };

    let food_allowance_amount = food_allowance(tariffs, food_allowance_days)?;

    let breakdown = compute_breakdown(
        tariffs,
        &BreakdownInput {
            dakshina_amount: input.dakshina_amount,
            samagri_cost: input.samagri_cost,
            travel_cost: travel_amount,
            food_allowance_amount,
            accommodation_cost: input.accommodation_cost,
        },
    );

    if let Err(e) = validate(&breakdown) {
        warn!("Rejected inconsistent breakdown {:?}: {}", breakdown, e);
        return Err(e);
    }

    debug!(
        "Quoted booking: dakshina={} travel={} grand_total={} payout={}",
        breakdown.dakshina_amount, breakdown.travel_cost, breakdown.grand_total, breakdown.pandit_payout
    );

    Ok(BookingQuote {
        breakdown,
        travel_mode: input.travel.map(|t| t.mode),
        travel_days: days,
        food_allowance_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_train_booking_with_food() {
        let input = BookingQuoteInput {
            dakshina_amount: 5100,
            samagri_cost: 2500,
            travel: Some(TravelSelection {
                mode: TravelMode::Train,
                distance_km: dec!(180),
            }),
            include_food_allowance: true,
            accommodation_cost: 0,
        };

        let quote = quote_booking(&TariffConstants::standard(), &input).unwrap();

        assert_eq!(quote.travel_mode, Some(TravelMode::Train));
        assert_eq!(quote.travel_days, 2);
        assert_eq!(quote.food_allowance_days, 2);
        assert_eq!(quote.breakdown.travel_cost, 1200);
        assert_eq!(quote.breakdown.food_allowance_amount, 1000);
        assert_eq!(quote.breakdown.grand_total, 10774);
        assert_eq!(quote.breakdown.pandit_payout, 7300);
    }

    #[test]
    fn test_quote_without_travel() {
        let input = BookingQuoteInput {
            dakshina_amount: 1100,
            include_food_allowance: true,
            ..BookingQuoteInput::default()
        };

        let quote = quote_booking(&TariffConstants::standard(), &input).unwrap();

        assert_eq!(quote.travel_mode, None);
        assert_eq!(quote.travel_days, 0);
        assert_eq!(quote.breakdown.food_allowance_amount, 0);
        assert_eq!(quote.breakdown.travel_service_fee, 0);
    }

    #[test]
    fn test_quote_food_allowance_opt_out() {
        let input = BookingQuoteInput {
            dakshina_amount: 1100,
            travel: Some(TravelSelection {
                mode: TravelMode::SelfDrive,
                distance_km: dec!(450),
            }),
            include_food_allowance: false,
            ..BookingQuoteInput::default()
        };

        let quote = quote_booking(&TariffConstants::standard(), &input).unwrap();

        assert_eq!(quote.travel_days, 4);
        assert_eq!(quote.food_allowance_days, 0);
        assert_eq!(quote.breakdown.travel_cost, 10800);
        assert_eq!(quote.breakdown.travel_service_fee, 540);
        assert_eq!(quote.breakdown.travel_service_fee_gst, 97); // 97.2
    }

    #[test]
    fn test_quote_cab_out_of_range() {
        let input = BookingQuoteInput {
            dakshina_amount: 1100,
            travel: Some(TravelSelection {
                mode: TravelMode::Cab,
                distance_km: dec!(300),
            }),
            ..BookingQuoteInput::default()
        };

        assert!(matches!(
            quote_booking(&TariffConstants::standard(), &input),
            Err(PricingError::CabOutOfRange { max_km: 300, .. })
        ));
    }

    #[test]
    fn test_quote_rejects_negative_input() {
        let input = BookingQuoteInput {
            dakshina_amount: 1100,
            samagri_cost: -50,
            ..BookingQuoteInput::default()
        };

        assert_eq!(
            quote_booking(&TariffConstants::standard(), &input),
            Err(PricingError::NegativeField {
                field: "samagri_cost"
            })
        );
    }
}
