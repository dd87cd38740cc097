//! Pricing engine module for pandit bookings.
//!
//! Travel cost, invoice breakdown and cancellation refund calculations.
//! Everything outside `routes`, `requests` and `responses` is pure and takes
//! its rates from an explicit `TariffConstants`.

pub mod breakdown;
pub mod calculators;
pub mod format;
pub mod refund;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tariffs;

// Re-export commonly used items
pub use breakdown::{compute_breakdown, validate, BreakdownInput, PriceBreakdown};
pub use calculators::{
    cab_cost, flight_cost, food_allowance, round_money, self_drive_cost, train_cost, travel_cost,
    travel_days, PricingError, TravelMode,
};
pub use format::format_currency;
pub use refund::{compute_refund, compute_refund_now, days_until_event, RefundCalculation};
pub use routes::router;
pub use services::{quote_booking, BookingQuote, BookingQuoteInput, TravelSelection};
pub use tariffs::{BandCeiling, CancellationTier, DestinationCab, FareBand, TariffConstants};
