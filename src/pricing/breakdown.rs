//! Customer invoice breakdown and its consistency check.

use serde::{Deserialize, Serialize};

use super::calculators::{percent_of, PricingError};
use super::tariffs::TariffConstants;

/// Largest difference between `grand_total` and the sum of its parts that
/// `validate` accepts.
pub const GRAND_TOTAL_TOLERANCE: i64 = 1;

/// Full pricing of one booking. All amounts are whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub dakshina_amount: i64,
    pub samagri_cost: i64,
    pub travel_cost: i64,
    pub food_allowance_amount: i64,
    pub accommodation_cost: i64,

    pub platform_fee: i64,
    pub platform_fee_gst: i64,
    pub travel_service_fee: i64,
    pub travel_service_fee_gst: i64,

    pub subtotal: i64,
    pub grand_total: i64,
    /// Remitted to the pandit. Excludes samagri, fees and GST.
    pub pandit_payout: i64,
}

/// Raw amounts going into a breakdown. Everything but dakshina defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownInput {
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

impl BreakdownInput {
    pub fn dakshina(amount: i64) -> Self {
        Self {
            dakshina_amount: amount,
            ..Self::default()
        }
    }
}

/// Compose the customer-facing invoice.
///
/// Each fee and each GST component is rounded on its own; the totals are
/// plain sums of those rounded parts. Inputs are trusted to be non-negative.
pub fn compute_breakdown(tariffs: &TariffConstants, input: &BreakdownInput) -> PriceBreakdown {
    let platform_fee = percent_of(input.dakshina_amount, tariffs.platform_fee_percent);
    let platform_fee_gst = percent_of(platform_fee, tariffs.gst_percent);

    let travel_service_fee = if input.travel_cost == 0 {
        0
    } else {
        percent_of(input.travel_cost, tariffs.travel_service_fee_percent)
    };
    let travel_service_fee_gst = percent_of(travel_service_fee, tariffs.gst_percent);

    let subtotal = input.dakshina_amount
        + input.samagri_cost
        + input.travel_cost
        + input.food_allowance_amount
        + input.accommodation_cost;

    let grand_total =
        subtotal + platform_fee + platform_fee_gst + travel_service_fee + travel_service_fee_gst;

    let pandit_payout = input.dakshina_amount
        + input.travel_cost
        + input.food_allowance_amount
        + input.accommodation_cost;

    PriceBreakdown {
        dakshina_amount: input.dakshina_amount,
        samagri_cost: input.samagri_cost,
        travel_cost: input.travel_cost,
        food_allowance_amount: input.food_allowance_amount,
        accommodation_cost: input.accommodation_cost,
        platform_fee,
        platform_fee_gst,
        travel_service_fee,
        travel_service_fee_gst,
        subtotal,
        grand_total,
        pandit_payout,
    }
}

impl PriceBreakdown {
    /// Every field with its name, in declaration order.
    pub fn fields(&self) -> [(&'static str, i64); 12] {
        [
            ("dakshina_amount", self.dakshina_amount),
            ("samagri_cost", self.samagri_cost),
            ("travel_cost", self.travel_cost),
            ("food_allowance_amount", self.food_allowance_amount),
            ("accommodation_cost", self.accommodation_cost),
            ("platform_fee", self.platform_fee),
            ("platform_fee_gst", self.platform_fee_gst),
            ("travel_service_fee", self.travel_service_fee),
            ("travel_service_fee_gst", self.travel_service_fee_gst),
            ("subtotal", self.subtotal),
            ("grand_total", self.grand_total),
            ("pandit_payout", self.pandit_payout),
        ]
    }

    /// Grand total recomputed from the input amounts and fee components.
    pub fn expected_grand_total(&self) -> i64 {
        self.dakshina_amount
            + self.samagri_cost
            + self.travel_cost
            + self.food_allowance_amount
            + self.accommodation_cost
            + self.platform_fee
            + self.platform_fee_gst
            + self.travel_service_fee
            + self.travel_service_fee_gst
    }
}

/// Reject a breakdown with a negative field or an inconsistent grand total.
///
/// Never corrects anything.
pub fn validate(breakdown: &PriceBreakdown) -> Result<(), PricingError> {
    if let Some((field, _)) = breakdown.fields().into_iter().find(|(_, value)| *value < 0) {
        return Err(PricingError::NegativeField { field });
    }

    let expected = breakdown.expected_grand_total();
    if (breakdown.grand_total - expected).abs() > GRAND_TOTAL_TOLERANCE {
        return Err(PricingError::GrandTotalMismatch {
            expected,
            actual: breakdown.grand_total,
        });
    }

    Ok(())
}
