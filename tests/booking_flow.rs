use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pandit_pricing::pricing::{
    compute_breakdown, compute_refund, format_currency, quote_booking, train_cost, validate,
    BookingQuoteInput, BreakdownInput, TariffConstants, TravelMode, TravelSelection,
};

#[test]
fn test_booking_then_cancellation() {
    let tariffs = TariffConstants::standard();

    let travel = train_cost(&tariffs, dec!(180));
    assert_eq!(travel, 1200);

    let breakdown = compute_breakdown(
        &tariffs,
        &BreakdownInput {
            dakshina_amount: 5100,
            samagri_cost: 2500,
            travel_cost: travel,
            food_allowance_amount: 1000,
            accommodation_cost: 0,
        },
    );

    assert_eq!(breakdown.platform_fee, 765);
    assert_eq!(breakdown.platform_fee_gst, 138);
    assert_eq!(breakdown.travel_service_fee, 60);
    assert_eq!(breakdown.travel_service_fee_gst, 11);
    assert_eq!(breakdown.subtotal, 9800);
    assert_eq!(breakdown.grand_total, 10774);
    assert_eq!(breakdown.pandit_payout, 7300);
    assert!(validate(&breakdown).is_ok());
    assert_eq!(format_currency(breakdown.grand_total, true), "₹10,774");

    let event = Utc.with_ymd_and_hms(2026, 12, 1, 5, 0, 0).unwrap();
    let refund = compute_refund(&tariffs, breakdown.grand_total, event, event - Duration::days(4));
    assert_eq!(refund.refund_percent, 50);
    assert_eq!(refund.refundable_amount, 5387);
    assert_eq!(refund.platform_fee_retained, 5387);
}

#[test]
fn test_quote_matches_manual_composition() {
    let tariffs = TariffConstants::standard();

    let quote = quote_booking(
        &tariffs,
        &BookingQuoteInput {
            dakshina_amount: 5100,
            samagri_cost: 2500,
            travel: Some(TravelSelection {
                mode: TravelMode::Train,
                distance_km: dec!(180),
            }),
            include_food_allowance: true,
            accommodation_cost: 0,
        },
    )
    .unwrap();

    let manual = compute_breakdown(
        &tariffs,
        &BreakdownInput {
            dakshina_amount: 5100,
            samagri_cost: 2500,
            travel_cost: 1200,
            food_allowance_amount: 1000,
            accommodation_cost: 0,
        },
    );

    assert_eq!(quote.breakdown, manual);
}

#[test]
fn test_every_mode_quotes_consistently() {
    let tariffs = TariffConstants::standard();

    for mode in [TravelMode::SelfDrive, TravelMode::Train, TravelMode::Flight, TravelMode::Cab] {
        for km in [0i64, 45, 200, 299, 500, 1000, 2400] {
            let input = BookingQuoteInput {
                dakshina_amount: 2100,
                samagri_cost: 1500,
                travel: Some(TravelSelection {
                    mode,
                    distance_km: Decimal::from(km),
                }),
                include_food_allowance: true,
                accommodation_cost: 800,
            };

            match quote_booking(&tariffs, &input) {
                Ok(quote) => {
                    assert!(validate(&quote.breakdown).is_ok());
                    assert!(quote.breakdown.pandit_payout <= quote.breakdown.grand_total);
                }
                Err(_) => assert!(mode == TravelMode::Cab && km >= 300),
            }
        }
    }
}
