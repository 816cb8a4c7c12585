use jiff::civil::Date;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    cargo_type::CargoType,
    rate_table::{RateEntry, RateTable},
};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RateEntry", rename_all = "camelCase")]
pub struct JsonRateEntry {
    pub cargo_type: CargoType,
    pub cargo_label: String,
    pub axles: u8,

    /// BRL per kilometer.
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub base_coefficient: Decimal,

    /// BRL per trip.
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub load_unload_allowance: Decimal,
}

impl From<&RateEntry> for JsonRateEntry {
    fn from(value: &RateEntry) -> Self {
        JsonRateEntry {
            cargo_type: value.cargo_type,
            cargo_label: value.cargo_type.label().to_owned(),
            axles: value.axles.count(),
            base_coefficient: value.base_coefficient,
            load_unload_allowance: value.load_unload_allowance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "AdjustmentCoefficients", rename_all = "camelCase")]
pub struct JsonAdjustmentCoefficients {
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub composition_uplift: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub high_performance_reduction: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub empty_return_fraction: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RateTable", rename_all = "camelCase")]
pub struct JsonRateTable {
    pub resolution: String,
    pub effective_from: Date,

    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub toll_per_axle_km: Decimal,

    pub adjustments: JsonAdjustmentCoefficients,
    pub entries: Vec<JsonRateEntry>,
}

impl JsonRateTable {
    /// Snapshot of `table`, optionally restricted to one cargo type.
    pub fn from_table(table: &RateTable, cargo_type: Option<CargoType>) -> Self {
        let adjustments = table.adjustments();

        JsonRateTable {
            resolution: table.resolution().to_owned(),
            effective_from: table.effective_from(),
            toll_per_axle_km: table.toll_per_axle_km(),
            adjustments: JsonAdjustmentCoefficients {
                composition_uplift: adjustments.composition_uplift,
                high_performance_reduction: adjustments.high_performance_reduction,
                empty_return_fraction: adjustments.empty_return_fraction,
            },
            entries: table
                .entries()
                .filter(|entry| cargo_type.is_none_or(|cargo_type| entry.cargo_type == cargo_type))
                .map(JsonRateEntry::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table() {
        let table = RateTable::official().unwrap();
        let json = JsonRateTable::from_table(&table, None);

        assert_eq!(json.entries.len(), table.len());
        assert_eq!(json.effective_from, table.effective_from());
    }

    #[test]
    fn test_filtered_table() {
        let table = RateTable::official().unwrap();
        let json = JsonRateTable::from_table(&table, Some(CargoType::Containerized));

        assert_eq!(
            json.entries
                .iter()
                .map(|entry| entry.axles)
                .collect::<Vec<_>>(),
            vec![4, 5, 6, 7, 9]
        );
        assert!(
            json.entries
                .iter()
                .all(|entry| entry.cargo_label == "Conteinerizada")
        );
    }
}
