use rust_decimal::Decimal;

use crate::adjustment::Adjustment;

/// Intermediate values of a calculation, kept for audit only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationBreakdown {
    /// Freight value before any modifier.
    pub base_rate: Decimal,

    /// Fixed loading and unloading allowance of the rate entry.
    pub load_unload_coefficient: Decimal,

    /// Per-kilometer coefficient of the rate entry.
    pub distance_coefficient: Decimal,

    /// Toll per kilometer for the vehicle's axle count.
    pub toll_rate_per_km: Decimal,

    pub adjustments: Vec<Adjustment>,
}

/// Output of a freight calculation. Monetary values are unrounded; rounding
/// to cents happens when the result is presented.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub freight_value: Decimal,
    pub toll_value: Decimal,
    pub total_value: Decimal,
    pub distance_km: f64,
    pub route_description: String,
    pub breakdown: CalculationBreakdown,
}
