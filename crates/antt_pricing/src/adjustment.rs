use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coefficients of the optional freight modifiers, published together with
/// the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AdjustmentCoefficients {
    /// Uplift for tractor + trailer compositions, e.g. `0.10` for +10%.
    pub composition_uplift: Decimal,

    /// Reduction for qualifying high-performance suspensions, in `[0, 1)`.
    pub high_performance_reduction: Decimal,

    /// Share of the freight value paid for the empty return leg.
    pub empty_return_fraction: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub composition: bool,
    pub high_performance: bool,
    pub empty_return: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Composition,
    HighPerformance,
    EmptyReturn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentEffect {
    Multiplier(Decimal),
    Delta(Decimal),
}

/// One applied modifier, kept for the calculation breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub kind: AdjustmentKind,
    pub effect: AdjustmentEffect,
}

impl AdjustmentKind {
    /// Order in which modifiers are applied.
    pub const ORDER: [AdjustmentKind; 3] = [
        AdjustmentKind::Composition,
        AdjustmentKind::HighPerformance,
        AdjustmentKind::EmptyReturn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentKind::Composition => "Composição veicular",
            AdjustmentKind::HighPerformance => "Alto desempenho",
            AdjustmentKind::EmptyReturn => "Retorno vazio",
        }
    }

    pub fn is_enabled(&self, modifiers: &Modifiers) -> bool {
        match self {
            AdjustmentKind::Composition => modifiers.composition,
            AdjustmentKind::HighPerformance => modifiers.high_performance,
            AdjustmentKind::EmptyReturn => modifiers.empty_return,
        }
    }

    /// Applies the modifier to `value`, returning the adjusted value and the
    /// effect to record. `None` when the result does not fit a `Decimal`.
    pub fn apply(
        &self,
        value: Decimal,
        coefficients: &AdjustmentCoefficients,
    ) -> Option<(Decimal, AdjustmentEffect)> {
        match self {
            AdjustmentKind::Composition => {
                let multiplier = Decimal::ONE.checked_add(coefficients.composition_uplift)?;
                Some((
                    value.checked_mul(multiplier)?,
                    AdjustmentEffect::Multiplier(multiplier),
                ))
            }
            AdjustmentKind::HighPerformance => {
                let multiplier = Decimal::ONE.checked_sub(coefficients.high_performance_reduction)?;
                Some((
                    value.checked_mul(multiplier)?,
                    AdjustmentEffect::Multiplier(multiplier),
                ))
            }
            AdjustmentKind::EmptyReturn => {
                let delta = value.checked_mul(coefficients.empty_return_fraction)?;
                Some((value.checked_add(delta)?, AdjustmentEffect::Delta(delta)))
            }
        }
    }
}

/// Runs every enabled modifier over `value` in [`AdjustmentKind::ORDER`].
/// `None` on overflow.
pub fn apply_adjustments(
    value: Decimal,
    modifiers: &Modifiers,
    coefficients: &AdjustmentCoefficients,
) -> Option<(Decimal, Vec<Adjustment>)> {
    AdjustmentKind::ORDER
        .iter()
        .filter(|kind| kind.is_enabled(modifiers))
        .try_fold((value, Vec::new()), |(value, mut adjustments), kind| {
            let (adjusted, effect) = kind.apply(value, coefficients)?;
            adjustments.push(Adjustment {
                kind: *kind,
                effect,
            });
            Some((adjusted, adjustments))
        })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn coefficients() -> AdjustmentCoefficients {
        AdjustmentCoefficients {
            composition_uplift: dec!(0.10),
            high_performance_reduction: dec!(0.07),
            empty_return_fraction: dec!(0.92),
        }
    }

    #[test]
    fn test_no_modifiers() {
        let (value, adjustments) =
            apply_adjustments(dec!(1000), &Modifiers::default(), &coefficients()).unwrap();

        assert_eq!(value, dec!(1000));
        assert!(adjustments.is_empty());
    }

    #[test]
    fn test_composition_only() {
        let modifiers = Modifiers {
            composition: true,
            ..Modifiers::default()
        };
        let (value, adjustments) = apply_adjustments(dec!(1000), &modifiers, &coefficients()).unwrap();

        assert_eq!(value, dec!(1100));
        assert_eq!(
            adjustments,
            vec![Adjustment {
                kind: AdjustmentKind::Composition,
                effect: AdjustmentEffect::Multiplier(dec!(1.10)),
            }]
        );
    }

    #[test]
    fn test_high_performance_only() {
        let modifiers = Modifiers {
            high_performance: true,
            ..Modifiers::default()
        };
        let (value, adjustments) = apply_adjustments(dec!(1000), &modifiers, &coefficients()).unwrap();

        assert_eq!(value, dec!(930));
        assert_eq!(
            adjustments,
            vec![Adjustment {
                kind: AdjustmentKind::HighPerformance,
                effect: AdjustmentEffect::Multiplier(dec!(0.93)),
            }]
        );
    }

    #[test]
    fn test_composition_and_high_performance() {
        let modifiers = Modifiers {
            composition: true,
            high_performance: true,
            empty_return: false,
        };
        let (value, adjustments) = apply_adjustments(dec!(1000), &modifiers, &coefficients()).unwrap();

        assert_eq!(value, dec!(1023));
        assert_eq!(
            adjustments
                .iter()
                .map(|adjustment| adjustment.kind)
                .collect::<Vec<_>>(),
            vec![AdjustmentKind::Composition, AdjustmentKind::HighPerformance]
        );
    }

    #[test]
    fn test_empty_return_is_delta_on_adjusted_value() {
        let modifiers = Modifiers {
            composition: true,
            high_performance: false,
            empty_return: true,
        };
        let (value, adjustments) = apply_adjustments(dec!(1000), &modifiers, &coefficients()).unwrap();

        // 1000 * 1.10 = 1100, then + 1100 * 0.92
        assert_eq!(value, dec!(2112));
        assert_eq!(
            adjustments[1],
            Adjustment {
                kind: AdjustmentKind::EmptyReturn,
                effect: AdjustmentEffect::Delta(dec!(1012)),
            }
        );
    }

    #[test]
    fn test_overflow_is_none() {
        let modifiers = Modifiers {
            composition: true,
            high_performance: false,
            empty_return: true,
        };

        assert_eq!(apply_adjustments(Decimal::MAX, &modifiers, &coefficients()), None);
        assert_eq!(
            AdjustmentKind::EmptyReturn.apply(Decimal::MAX, &coefficients()),
            None
        );
    }
}
