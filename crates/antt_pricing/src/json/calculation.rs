use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    adjustment::{Adjustment, AdjustmentEffect, AdjustmentKind, Modifiers},
    calculation_request::CalculationRequest,
    calculation_result::CalculationResult,
    cargo_type::{CargoType, UnknownCargoType},
    error::PricingError,
    json::round_money,
};

/// Axle count as sent by clients, either `"5"` or `5`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum JsonAxles {
    Text(String),
    Number(u64),
}

/// Every field is optional here so a missing or malformed value surfaces as
/// an `InvalidInput` error naming the field.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename = "CalculationRequest", rename_all = "camelCase")]
pub struct JsonCalculationRequest {
    /// One of the ANTT cargo categories, e.g. `carga_geral`.
    pub cargo_type: Option<String>,

    /// One of the legal axle classes: 2, 3, 4, 5, 6, 7 or 9.
    pub axles: Option<JsonAxles>,

    /// `"<city>-<UF>"`, e.g. `Campinas-SP`.
    pub origin_city: Option<String>,

    pub destination_city: Option<String>,

    pub is_composition: Option<bool>,
    pub is_high_performance: Option<bool>,
    pub empty_return: Option<bool>,
}

fn required(value: Option<String>, field: &str) -> Result<String, PricingError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(PricingError::invalid_input(format!("{field} is required"))),
    }
}

fn parse_axles(axles: Option<JsonAxles>) -> Result<u8, PricingError> {
    match axles {
        None => Err(PricingError::invalid_input("axles is required")),
        Some(JsonAxles::Text(text)) => text.trim().parse::<u8>().map_err(|_| {
            PricingError::invalid_input(format!("axles must be an integer, got '{text}'"))
        }),
        Some(JsonAxles::Number(number)) => u8::try_from(number).map_err(|_| {
            PricingError::invalid_input(format!("axles must be between 2 and 9, got {number}"))
        }),
    }
}

impl TryFrom<JsonCalculationRequest> for CalculationRequest {
    type Error = PricingError;

    fn try_from(value: JsonCalculationRequest) -> Result<Self, Self::Error> {
        let cargo_type: CargoType = required(value.cargo_type, "cargoType")?
            .parse()
            .map_err(|error: UnknownCargoType| PricingError::invalid_input(error.to_string()))?;

        let request = CalculationRequest {
            cargo_type,
            axles: parse_axles(value.axles)?,
            origin_city: required(value.origin_city, "originCity")?,
            destination_city: required(value.destination_city, "destinationCity")?,
            modifiers: Modifiers {
                composition: value.is_composition.unwrap_or(false),
                high_performance: value.is_high_performance.unwrap_or(false),
                empty_return: value.empty_return.unwrap_or(false),
            },
        };

        request.validate()?;

        Ok(request)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Adjustment", rename_all = "camelCase")]
pub struct JsonAdjustment {
    pub name: String,
    pub kind: AdjustmentKind,

    /// Multiplier for composition and high performance, amount added for the
    /// empty return.
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub value: Decimal,
}

impl From<&Adjustment> for JsonAdjustment {
    fn from(value: &Adjustment) -> Self {
        JsonAdjustment {
            name: value.kind.label().to_owned(),
            kind: value.kind,
            value: match value.effect {
                AdjustmentEffect::Multiplier(multiplier) => multiplier,
                AdjustmentEffect::Delta(delta) => round_money(delta),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "CalculationBreakdown", rename_all = "camelCase")]
pub struct JsonCalculationBreakdown {
    /// Freight value before modifiers.
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub base_rate: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub load_unload_coefficient: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub distance_coefficient: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub toll_rate_per_km: Decimal,

    pub adjustments: Vec<JsonAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "CalculationResult", rename_all = "camelCase")]
pub struct JsonCalculationResult {
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub freight_value: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub toll_value: Decimal,

    /// Sum of the rounded freight and toll values.
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub total_value: Decimal,

    /// Route distance in kilometers.
    pub distance: f64,

    pub route: String,

    pub calculation: JsonCalculationBreakdown,
}

impl From<&CalculationResult> for JsonCalculationResult {
    fn from(value: &CalculationResult) -> Self {
        let freight_value = round_money(value.freight_value);
        let toll_value = round_money(value.toll_value);

        JsonCalculationResult {
            freight_value,
            toll_value,
            total_value: freight_value + toll_value,
            distance: value.distance_km,
            route: value.route_description.clone(),
            calculation: JsonCalculationBreakdown {
                base_rate: round_money(value.breakdown.base_rate),
                load_unload_coefficient: value.breakdown.load_unload_coefficient,
                distance_coefficient: value.breakdown.distance_coefficient,
                toll_rate_per_km: value.breakdown.toll_rate_per_km,
                adjustments: value
                    .breakdown
                    .adjustments
                    .iter()
                    .map(JsonAdjustment::from)
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculation_result::CalculationBreakdown;

    fn parse(json: &str) -> Result<CalculationRequest, PricingError> {
        let body: JsonCalculationRequest = serde_json::from_str(json).unwrap();
        CalculationRequest::try_from(body)
    }

    #[test]
    fn test_parse_request() {
        let request = parse(
            r#"{
                "cargoType": "carga_geral",
                "axles": "5",
                "originCity": "Campinas-SP",
                "destinationCity": "Curitiba-PR",
                "isComposition": true,
                "isHighPerformance": false,
                "emptyReturn": true
            }"#,
        )
        .unwrap();

        assert_eq!(request.cargo_type, CargoType::GeneralCargo);
        assert_eq!(request.axles, 5);
        assert_eq!(request.origin_city, "Campinas-SP");
        assert_eq!(request.destination_city, "Curitiba-PR");
        assert_eq!(
            request.modifiers,
            Modifiers {
                composition: true,
                high_performance: false,
                empty_return: true,
            }
        );
    }

    #[test]
    fn test_numeric_axles_and_default_flags() {
        let request = parse(
            r#"{"cargoType": "neogranel", "axles": 9, "originCity": "A-SP", "destinationCity": "B-SP"}"#,
        )
        .unwrap();

        assert_eq!(request.axles, 9);
        assert_eq!(request.modifiers, Modifiers::default());
    }

    #[test]
    fn test_missing_cargo_type() {
        let error = parse(r#"{"axles": "5", "originCity": "A-SP", "destinationCity": "B-SP"}"#)
            .unwrap_err();

        assert!(
            matches!(error, PricingError::InvalidInput(message) if message == "cargoType is required")
        );
    }

    #[test]
    fn test_unknown_cargo_type() {
        let error = parse(
            r#"{"cargoType": "mudanca", "axles": "5", "originCity": "A-SP", "destinationCity": "B-SP"}"#,
        )
        .unwrap_err();

        assert!(matches!(error, PricingError::InvalidInput(message) if message.contains("mudanca")));
    }

    #[test]
    fn test_malformed_axles() {
        for axles in [r#""cinco""#, r#""""#, "300", r#""1""#] {
            let json = format!(
                r#"{{"cargoType": "carga_geral", "axles": {axles}, "originCity": "A-SP", "destinationCity": "B-SP"}}"#
            );
            assert!(matches!(parse(&json), Err(PricingError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_eight_axles_is_accepted_by_shape_validation() {
        let request = parse(
            r#"{"cargoType": "carga_geral", "axles": "8", "originCity": "A-SP", "destinationCity": "B-SP"}"#,
        )
        .unwrap();

        assert_eq!(request.axles, 8);
    }

    #[test]
    fn test_missing_destination() {
        let error = parse(r#"{"cargoType": "carga_geral", "axles": "5", "originCity": "A-SP"}"#)
            .unwrap_err();

        assert!(
            matches!(error, PricingError::InvalidInput(message) if message == "destinationCity is required")
        );
    }

    #[test]
    fn test_result_is_rounded_at_presentation() {
        let result = CalculationResult {
            freight_value: dec!(6818.6688),
            toll_value: dec!(116.254),
            total_value: dec!(6934.9228),
            distance_km: 500.0,
            route_description: String::from("Campinas-SP → Curitiba-PR"),
            breakdown: CalculationBreakdown {
                base_rate: dec!(3551.39),
                load_unload_coefficient: dec!(577.34),
                distance_coefficient: dec!(5.9481),
                toll_rate_per_km: dec!(0.2325),
                adjustments: vec![Adjustment {
                    kind: AdjustmentKind::EmptyReturn,
                    effect: AdjustmentEffect::Delta(dec!(3267.2788)),
                }],
            },
        };

        let json = JsonCalculationResult::from(&result);

        assert_eq!(json.freight_value, dec!(6818.67));
        assert_eq!(json.toll_value, dec!(116.25));
        assert_eq!(json.total_value, dec!(6934.92));
        assert_eq!(json.calculation.adjustments[0].value, dec!(3267.28));

        let value = serde_json::to_value(&json).unwrap();
        assert!((value["freightValue"].as_f64().unwrap() - 6818.67).abs() < 1e-9);
        assert_eq!(value["distance"].as_f64(), Some(500.0));
        assert_eq!(value["route"], "Campinas-SP → Curitiba-PR");
        assert!(
            (value["calculation"]["distanceCoefficient"].as_f64().unwrap() - 5.9481).abs() < 1e-12
        );
        assert_eq!(value["calculation"]["adjustments"][0]["name"], "Retorno vazio");
        assert_eq!(value["calculation"]["adjustments"][0]["kind"], "empty_return");
    }
}
