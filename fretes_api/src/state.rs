use std::sync::Arc;

use antt_pricing::{calculator::FreightCalculator, rate_table::RateTable};
use fretes_routing::{cache::TieredCache, city_catalog::CityCatalog, route_client::RouteClient};
use tracing::info;

use crate::config::ApiConfig;

pub type Calculator = FreightCalculator<RouteClient<TieredCache>>;

pub struct AppState {
    pub calculator: Calculator,
    pub catalog: Arc<CityCatalog>,
}

impl AppState {
    pub fn from_config(config: &ApiConfig) -> Result<Self, anyhow::Error> {
        let table = match &config.rate_table {
            Some(path) => {
                info!("Loading rate table from {}", path.display());
                RateTable::from_path(path)?
            }
            None => RateTable::official()?,
        };

        let catalog = Arc::new(CityCatalog::embedded()?);
        let route_client = config.routing.build_client(catalog.clone())?;

        Ok(AppState {
            calculator: FreightCalculator::new(Arc::new(table), route_client),
            catalog,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> Arc<AppState> {
    let config = ApiConfig::from_lookup(|_| None).unwrap();
    Arc::new(AppState::from_config(&config).unwrap())
}
