pub mod calculation;
pub mod rate_table;

use rust_decimal::{Decimal, RoundingStrategy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of every non-2xx response. The message is shown to the user as is.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename = "ErrorResponse")]
pub struct JsonErrorResponse {
    pub error: String,
}

/// Rounds a monetary value to cents, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(dec!(10.005)), dec!(10.01));
        assert_eq!(round_money(dec!(10.0049)), dec!(10.00));
        assert_eq!(round_money(dec!(6818.6688)), dec!(6818.67));
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
    }
}
