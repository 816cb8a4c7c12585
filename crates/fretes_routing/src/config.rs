use std::{path::PathBuf, sync::Arc};

use tracing::info;

use crate::{
    cache::{FileCache, TieredCache},
    city_catalog::CityCatalog,
    graphhopper_api::GraphHopperProfile,
    route_client::RouteClient,
    route_provider::{DEFAULT_DETOUR_FACTOR, RouteProvider, RouteProviderKind},
};

pub const ROUTE_PROVIDER_ENV_VAR: &str = "FRETES_ROUTE_PROVIDER";
pub const GRAPHHOPPER_API_KEY_ENV_VAR: &str = "GRAPHHOPPER_API_KEY";
pub const GH_PROFILE_ENV_VAR: &str = "FRETES_GH_PROFILE";
pub const DETOUR_FACTOR_ENV_VAR: &str = "FRETES_DETOUR_FACTOR";
pub const CACHE_FOLDER_ENV_VAR: &str = "FRETES_CACHE_FOLDER";

/// Everything needed to build a [`RouteClient`].
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub provider: RouteProviderKind,
    pub graphhopper_api_key: Option<String>,
    pub gh_profile: GraphHopperProfile,
    pub detour_factor: f64,
    pub cache_folder: Option<PathBuf>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            provider: RouteProviderKind::default(),
            graphhopper_api_key: None,
            gh_profile: GraphHopperProfile::Truck,
            detour_factor: DEFAULT_DETOUR_FACTOR,
            cache_folder: None,
        }
    }
}

impl RoutingConfig {
    /// Reads the routing variables through `lookup`. Unset variables keep
    /// their default, malformed ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RoutingConfig::default();

        let provider = match lookup(ROUTE_PROVIDER_ENV_VAR) {
            Some(value) => value
                .parse()
                .map_err(|error: String| anyhow::anyhow!("{ROUTE_PROVIDER_ENV_VAR}: {error}"))?,
            None => defaults.provider,
        };

        let gh_profile = match lookup(GH_PROFILE_ENV_VAR) {
            Some(value) => value
                .parse()
                .map_err(|error: String| anyhow::anyhow!("{GH_PROFILE_ENV_VAR}: {error}"))?,
            None => defaults.gh_profile,
        };

        let detour_factor = match lookup(DETOUR_FACTOR_ENV_VAR) {
            Some(value) => value.trim().parse::<f64>().map_err(|error| {
                anyhow::anyhow!("{DETOUR_FACTOR_ENV_VAR}: {error}")
            })?,
            None => defaults.detour_factor,
        };

        Ok(RoutingConfig {
            provider,
            graphhopper_api_key: lookup(GRAPHHOPPER_API_KEY_ENV_VAR)
                .filter(|key| !key.trim().is_empty()),
            gh_profile,
            detour_factor,
            cache_folder: lookup(CACHE_FOLDER_ENV_VAR).map(PathBuf::from),
        })
    }

    pub fn route_provider(&self) -> RouteProvider {
        RouteProvider::from_kind(self.provider, self.gh_profile, self.detour_factor)
    }

    pub fn build_client(
        &self,
        catalog: Arc<CityCatalog>,
    ) -> Result<RouteClient<TieredCache>, anyhow::Error> {
        let file_cache = match &self.cache_folder {
            Some(folder) => Some(FileCache::new(folder)?),
            None => None,
        };

        let provider = self.route_provider();
        info!(
            provider = %self.provider,
            file_cache = file_cache.is_some(),
            "Using route provider {:?}",
            provider
        );

        RouteClient::new(
            catalog,
            provider,
            TieredCache::new(file_cache),
            self.graphhopper_api_key.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RoutingConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.provider, RouteProviderKind::Crow);
        assert_eq!(config.gh_profile, GraphHopperProfile::Truck);
        assert_eq!(config.detour_factor, DEFAULT_DETOUR_FACTOR);
        assert!(config.graphhopper_api_key.is_none());
        assert!(config.cache_folder.is_none());
    }

    #[test]
    fn test_graphhopper() {
        let config = RoutingConfig::from_lookup(lookup(&[
            (ROUTE_PROVIDER_ENV_VAR, "graphhopper"),
            (GRAPHHOPPER_API_KEY_ENV_VAR, "secret"),
            (GH_PROFILE_ENV_VAR, "small_truck"),
        ]))
        .unwrap();

        assert!(matches!(
            config.route_provider(),
            RouteProvider::GraphHopperApi {
                gh_profile: GraphHopperProfile::SmallTruck
            }
        ));
        assert_eq!(config.graphhopper_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_malformed_values() {
        assert!(RoutingConfig::from_lookup(lookup(&[(ROUTE_PROVIDER_ENV_VAR, "osrm")])).is_err());
        assert!(RoutingConfig::from_lookup(lookup(&[(DETOUR_FACTOR_ENV_VAR, "a lot")])).is_err());
        assert!(RoutingConfig::from_lookup(lookup(&[(GH_PROFILE_ENV_VAR, "bike")])).is_err());
    }

    #[test]
    fn test_build_client_without_api_key_fails() {
        let config = RoutingConfig {
            provider: RouteProviderKind::GraphHopper,
            ..Default::default()
        };

        let catalog = Arc::new(CityCatalog::embedded().unwrap());

        assert!(config.build_client(catalog).is_err());
    }
}
