use std::{collections::BTreeMap, path::Path};

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{
    adjustment::AdjustmentCoefficients, axle_class::AxleClass, cargo_type::CargoType,
    error::PricingError,
};

const OFFICIAL_TABLE: &str = include_str!("../data/tabela_a.json");

/// One row of the regulatory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateEntry {
    pub cargo_type: CargoType,
    pub axles: AxleClass,

    /// Displacement cost, in BRL per kilometer.
    pub base_coefficient: Decimal,

    /// Fixed loading and unloading cost, in BRL.
    pub load_unload_allowance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RateKey {
    pub cargo_type: CargoType,
    pub axles: AxleClass,
}

#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("Could not read rate table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed rate table: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Duplicate rate for {cargo_type} with {axles} axles")]
    DuplicateEntry {
        cargo_type: CargoType,
        axles: AxleClass,
    },

    #[error("Invalid rate for {cargo_type} with {axles} axles: {reason}")]
    InvalidEntry {
        cargo_type: CargoType,
        axles: AxleClass,
        reason: &'static str,
    },

    #[error("Invalid coefficient {name}: {reason}")]
    InvalidCoefficient {
        name: &'static str,
        reason: &'static str,
    },

    #[error("Rate table has no entries")]
    Empty,
}

#[derive(Deserialize)]
struct RateTableFile {
    resolution: String,
    effective_from: Date,
    toll_per_axle_km: Decimal,
    adjustments: AdjustmentCoefficients,
    entries: Vec<RateEntry>,
}

/// Immutable ANTT minimum freight table. Built once through [`RateTable::from_json`],
/// which rejects any table that could price a trip incorrectly.
#[derive(Debug, Clone)]
pub struct RateTable {
    resolution: String,
    effective_from: Date,
    toll_per_axle_km: Decimal,
    adjustments: AdjustmentCoefficients,
    entries: BTreeMap<RateKey, RateEntry>,
}

impl RateTable {
    /// The table shipped with the crate.
    pub fn official() -> Result<Self, RateTableError> {
        Self::from_json(OFFICIAL_TABLE)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RateTableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, RateTableError> {
        let file: RateTableFile = serde_json::from_str(json)?;

        validate_coefficients(file.toll_per_axle_km, &file.adjustments)?;

        if file.entries.is_empty() {
            return Err(RateTableError::Empty);
        }

        let mut entries = BTreeMap::new();
        for entry in file.entries {
            validate_entry(&entry)?;

            let key = RateKey {
                cargo_type: entry.cargo_type,
                axles: entry.axles,
            };

            if entries.insert(key, entry).is_some() {
                return Err(RateTableError::DuplicateEntry {
                    cargo_type: entry.cargo_type,
                    axles: entry.axles,
                });
            }
        }

        info!(
            resolution = %file.resolution,
            effective_from = %file.effective_from,
            entries = entries.len(),
            "Loaded ANTT rate table"
        );

        Ok(RateTable {
            resolution: file.resolution,
            effective_from: file.effective_from,
            toll_per_axle_km: file.toll_per_axle_km,
            adjustments: file.adjustments,
            entries,
        })
    }

    /// Looks up the rate for a raw axle count. Counts outside the legal
    /// classes and pairs the regulator did not define both fail with
    /// [`PricingError::RateNotFound`].
    pub fn lookup(&self, cargo_type: CargoType, axles: u8) -> Result<&RateEntry, PricingError> {
        AxleClass::try_from(axles)
            .ok()
            .and_then(|axle_class| self.get(cargo_type, axle_class))
            .ok_or(PricingError::RateNotFound { cargo_type, axles })
    }

    pub fn get(&self, cargo_type: CargoType, axles: AxleClass) -> Option<&RateEntry> {
        self.entries.get(&RateKey { cargo_type, axles })
    }

    pub fn entries(&self) -> impl Iterator<Item = &RateEntry> {
        self.entries.values()
    }

    pub fn entries_for(&self, cargo_type: CargoType) -> impl Iterator<Item = &RateEntry> {
        self.entries
            .values()
            .filter(move |entry| entry.cargo_type == cargo_type)
    }

    pub fn axle_classes(&self, cargo_type: CargoType) -> Vec<AxleClass> {
        self.entries_for(cargo_type).map(|entry| entry.axles).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn effective_from(&self) -> Date {
        self.effective_from
    }

    pub fn toll_per_axle_km(&self) -> Decimal {
        self.toll_per_axle_km
    }

    pub fn adjustments(&self) -> &AdjustmentCoefficients {
        &self.adjustments
    }
}

fn validate_entry(entry: &RateEntry) -> Result<(), RateTableError> {
    let invalid = |reason| RateTableError::InvalidEntry {
        cargo_type: entry.cargo_type,
        axles: entry.axles,
        reason,
    };

    if entry.base_coefficient <= Decimal::ZERO {
        return Err(invalid("base coefficient must be positive"));
    }

    if entry.load_unload_allowance < Decimal::ZERO {
        return Err(invalid("load/unload allowance must not be negative"));
    }

    Ok(())
}

fn validate_coefficients(
    toll_per_axle_km: Decimal,
    adjustments: &AdjustmentCoefficients,
) -> Result<(), RateTableError> {
    let invalid = |name, reason| RateTableError::InvalidCoefficient { name, reason };

    if toll_per_axle_km < Decimal::ZERO {
        return Err(invalid("toll_per_axle_km", "must not be negative"));
    }

    if adjustments.composition_uplift < Decimal::ZERO {
        return Err(invalid("composition_uplift", "must not be negative"));
    }

    if adjustments.high_performance_reduction < Decimal::ZERO
        || adjustments.high_performance_reduction >= Decimal::ONE
    {
        return Err(invalid(
            "high_performance_reduction",
            "must be in the range [0, 1)",
        ));
    }

    if adjustments.empty_return_fraction < Decimal::ZERO {
        return Err(invalid("empty_return_fraction", "must not be negative"));
    }

    Ok(())
}
