use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::graphhopper_api::GraphHopperProfile;

pub const DEFAULT_DETOUR_FACTOR: f64 = 1.25;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema)]
pub enum RouteProvider {
    /// https://docs.graphhopper.com/openapi/routing
    GraphHopperApi { gh_profile: GraphHopperProfile },

    /// Great-circle distance stretched by a fixed detour factor. Needs no
    /// network access.
    AsTheCrowFlies { detour_factor: f64 },
}

impl Default for RouteProvider {
    fn default() -> Self {
        RouteProvider::AsTheCrowFlies {
            detour_factor: DEFAULT_DETOUR_FACTOR,
        }
    }
}

impl std::hash::Hash for RouteProvider {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            RouteProvider::GraphHopperApi { gh_profile } => {
                state.write_u8(0);
                gh_profile.hash(state);
            }
            RouteProvider::AsTheCrowFlies { detour_factor } => {
                state.write_u8(1);
                state.write_u64(detour_factor.to_bits());
            }
        }
    }
}

/// Provider name as configured, `graphhopper` or `crow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteProviderKind {
    GraphHopper,
    #[default]
    Crow,
}

impl FromStr for RouteProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graphhopper" => Ok(RouteProviderKind::GraphHopper),
            "crow" => Ok(RouteProviderKind::Crow),
            other => Err(format!(
                "unknown route provider '{other}', expected 'graphhopper' or 'crow'"
            )),
        }
    }
}

impl Display for RouteProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteProviderKind::GraphHopper => write!(f, "graphhopper"),
            RouteProviderKind::Crow => write!(f, "crow"),
        }
    }
}

impl RouteProvider {
    pub fn from_kind(
        kind: RouteProviderKind,
        gh_profile: GraphHopperProfile,
        detour_factor: f64,
    ) -> Self {
        match kind {
            RouteProviderKind::GraphHopper => RouteProvider::GraphHopperApi { gh_profile },
            RouteProviderKind::Crow => RouteProvider::AsTheCrowFlies { detour_factor },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            "GraphHopper".parse::<RouteProviderKind>(),
            Ok(RouteProviderKind::GraphHopper)
        );
        assert_eq!(" crow ".parse::<RouteProviderKind>(), Ok(RouteProviderKind::Crow));
        assert!("osrm".parse::<RouteProviderKind>().is_err());
    }

    #[test]
    fn test_from_kind() {
        assert!(matches!(
            RouteProvider::from_kind(RouteProviderKind::GraphHopper, GraphHopperProfile::Car, 1.3),
            RouteProvider::GraphHopperApi {
                gh_profile: GraphHopperProfile::Car
            }
        ));
        assert!(matches!(
            RouteProvider::from_kind(RouteProviderKind::Crow, GraphHopperProfile::Car, 1.3),
            RouteProvider::AsTheCrowFlies { detour_factor } if detour_factor == 1.3
        ));
    }
}
