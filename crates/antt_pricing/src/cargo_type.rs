use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cargo categories of the ANTT minimum freight table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema,
)]
pub enum CargoType {
    #[serde(rename = "granel_solido")]
    SolidBulk,
    #[serde(rename = "granel_liquido")]
    LiquidBulk,
    #[serde(rename = "frigorificada")]
    Refrigerated,
    #[serde(rename = "conteinerizada")]
    Containerized,
    #[serde(rename = "carga_geral")]
    GeneralCargo,
    #[serde(rename = "neogranel")]
    NeoBulk,
    #[serde(rename = "perigosa_granel_solido")]
    DangerousSolidBulk,
    #[serde(rename = "perigosa_granel_liquido")]
    DangerousLiquidBulk,
    #[serde(rename = "perigosa_frigorificada")]
    DangerousRefrigerated,
    #[serde(rename = "perigosa_conteinerizada")]
    DangerousContainerized,
    #[serde(rename = "perigosa_carga_geral")]
    DangerousGeneralCargo,
    #[serde(rename = "granel_pressurizada")]
    PressurizedBulk,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown cargo type '{0}'")]
pub struct UnknownCargoType(pub String);

impl CargoType {
    pub const ALL: [CargoType; 12] = [
        CargoType::SolidBulk,
        CargoType::LiquidBulk,
        CargoType::Refrigerated,
        CargoType::Containerized,
        CargoType::GeneralCargo,
        CargoType::NeoBulk,
        CargoType::DangerousSolidBulk,
        CargoType::DangerousLiquidBulk,
        CargoType::DangerousRefrigerated,
        CargoType::DangerousContainerized,
        CargoType::DangerousGeneralCargo,
        CargoType::PressurizedBulk,
    ];

    /// Wire identifier, identical to the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            CargoType::SolidBulk => "granel_solido",
            CargoType::LiquidBulk => "granel_liquido",
            CargoType::Refrigerated => "frigorificada",
            CargoType::Containerized => "conteinerizada",
            CargoType::GeneralCargo => "carga_geral",
            CargoType::NeoBulk => "neogranel",
            CargoType::DangerousSolidBulk => "perigosa_granel_solido",
            CargoType::DangerousLiquidBulk => "perigosa_granel_liquido",
            CargoType::DangerousRefrigerated => "perigosa_frigorificada",
            CargoType::DangerousContainerized => "perigosa_conteinerizada",
            CargoType::DangerousGeneralCargo => "perigosa_carga_geral",
            CargoType::PressurizedBulk => "granel_pressurizada",
        }
    }

    /// Label as printed in the regulator's table.
    pub fn label(&self) -> &'static str {
        match self {
            CargoType::SolidBulk => "Granel sólido",
            CargoType::LiquidBulk => "Granel líquido",
            CargoType::Refrigerated => "Frigorificada ou Aquecida",
            CargoType::Containerized => "Conteinerizada",
            CargoType::GeneralCargo => "Carga Geral",
            CargoType::NeoBulk => "Neogranel",
            CargoType::DangerousSolidBulk => "Perigosa (granel sólido)",
            CargoType::DangerousLiquidBulk => "Perigosa (granel líquido)",
            CargoType::DangerousRefrigerated => "Perigosa (frigorificada ou aquecida)",
            CargoType::DangerousContainerized => "Perigosa (conteinerizada)",
            CargoType::DangerousGeneralCargo => "Perigosa (carga geral)",
            CargoType::PressurizedBulk => "Carga Granel Pressurizada",
        }
    }

    pub fn is_dangerous(&self) -> bool {
        matches!(
            self,
            CargoType::DangerousSolidBulk
                | CargoType::DangerousLiquidBulk
                | CargoType::DangerousRefrigerated
                | CargoType::DangerousContainerized
                | CargoType::DangerousGeneralCargo
        )
    }
}

impl Display for CargoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CargoType {
    type Err = UnknownCargoType;

    /// Accepts the wire key or the printed label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        CargoType::ALL
            .into_iter()
            .find(|cargo_type| {
                cargo_type.key().eq_ignore_ascii_case(trimmed)
                    || cargo_type.label().to_lowercase() == trimmed.to_lowercase()
            })
            .ok_or_else(|| UnknownCargoType(s.to_owned()))
    }
}
