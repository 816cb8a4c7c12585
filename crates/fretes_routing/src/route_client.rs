use std::sync::Arc;

use antt_pricing::distance::{DistanceResolver, ResolvedRoute, RouteError};
use tracing::{debug, instrument, warn};

use crate::{
    as_the_crow_flies::as_the_crow_flies_km,
    cache::RouteCache,
    city::CityId,
    city_catalog::{City, CityCatalog},
    graphhopper_api::{GraphHopperError, GraphHopperRouteClient, GraphHopperRouteClientParams},
    route_provider::RouteProvider,
};

/// Resolves `"<city>-<UF>"` pairs to road distances through the configured
/// provider. Never retries: a provider failure is reported to the caller.
pub struct RouteClient<C> {
    catalog: Arc<CityCatalog>,
    provider: RouteProvider,
    graphhopper_client: Option<GraphHopperRouteClient>,
    cache: C,
}

impl<C> RouteClient<C>
where
    C: RouteCache,
{
    pub fn new(
        catalog: Arc<CityCatalog>,
        provider: RouteProvider,
        cache: C,
        graphhopper_api_key: Option<String>,
    ) -> Result<Self, anyhow::Error> {
        let graphhopper_client = match (provider, graphhopper_api_key) {
            (RouteProvider::GraphHopperApi { .. }, Some(api_key)) => Some(
                GraphHopperRouteClient::new(GraphHopperRouteClientParams::new(api_key))?,
            ),
            (RouteProvider::GraphHopperApi { .. }, None) => {
                return Err(anyhow::anyhow!(
                    "GraphHopper route provider requires an API key"
                ));
            }
            (RouteProvider::AsTheCrowFlies { detour_factor }, _) => {
                if !detour_factor.is_finite() || detour_factor < 1.0 {
                    return Err(anyhow::anyhow!(
                        "Detour factor must be at least 1.0, got {detour_factor}"
                    ));
                }
                None
            }
        };

        Ok(Self {
            catalog,
            provider,
            graphhopper_client,
            cache,
        })
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    pub fn provider(&self) -> &RouteProvider {
        &self.provider
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    fn find_city(&self, id: &str) -> Result<&City, RouteError> {
        let city_id: CityId = id.parse()?;

        self.catalog
            .find(&city_id)
            .ok_or_else(|| RouteError::UnknownCity(city_id.to_string()))
    }

    async fn fetch_distance_km(&self, from: &City, to: &City) -> Result<f64, RouteError> {
        match (self.provider, &self.graphhopper_client) {
            (RouteProvider::AsTheCrowFlies { detour_factor }, _) => {
                Ok(as_the_crow_flies_km(from, to, detour_factor))
            }
            (RouteProvider::GraphHopperApi { gh_profile }, Some(client)) => client
                .fetch_distance_km(from, to, gh_profile)
                .await
                .map_err(|error| match error {
                    GraphHopperError::NoPath => RouteError::NoRoute {
                        origin: from.id(),
                        destination: to.id(),
                    },
                    error => RouteError::Provider(error.into()),
                }),
            (RouteProvider::GraphHopperApi { .. }, None) => Err(RouteError::Provider(
                anyhow::anyhow!("GraphHopper client is not configured"),
            )),
        }
    }
}

impl<C> DistanceResolver for RouteClient<C>
where
    C: RouteCache,
{
    #[instrument(skip(self), level = "debug")]
    async fn resolve_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<ResolvedRoute, RouteError> {
        let from = self.find_city(origin)?;
        let to = self.find_city(destination)?;

        let description = format!("{} → {}", from.id(), to.id());

        if std::ptr::eq(from, to) {
            return Ok(ResolvedRoute {
                distance_km: 0.0,
                description,
            });
        }

        match self.cache.get_cached(&self.provider, from, to) {
            Ok(Some(distance_km)) => {
                debug!("Route cache hit for {description}");
                return Ok(ResolvedRoute {
                    distance_km,
                    description,
                });
            }
            Ok(None) => {}
            Err(error) => warn!("Could not read route cache: {error}"),
        }

        let distance_km = self.fetch_distance_km(from, to).await?;

        if let Err(error) = self.cache.cache(&self.provider, from, to, distance_km) {
            warn!("Could not write route cache: {error}");
        }

        Ok(ResolvedRoute {
            distance_km,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::{MemoryCache, NoCache},
        graphhopper_api::GraphHopperProfile,
    };

    fn client() -> RouteClient<MemoryCache> {
        RouteClient::new(
            Arc::new(CityCatalog::embedded().unwrap()),
            RouteProvider::AsTheCrowFlies { detour_factor: 1.25 },
            MemoryCache::default(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_distance() {
        let client = client();

        let route = client
            .resolve_distance("Campinas-SP", "curitiba-pr")
            .await
            .unwrap();

        assert!((route.distance_km - 358.76 * 1.25).abs() < 1.0, "got {}", route.distance_km);
        assert_eq!(route.description, "Campinas-SP → Curitiba-PR");
        assert_eq!(client.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_second_resolution_hits_cache() {
        let client = client();

        let first = client
            .resolve_distance("Campinas-SP", "Curitiba-PR")
            .await
            .unwrap();
        let second = client
            .resolve_distance("Campinas-SP", "Curitiba-PR")
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(client.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_same_city_is_zero_distance() {
        let client = client();

        let route = client
            .resolve_distance("São Paulo-SP", "sao paulo-SP")
            .await
            .unwrap();

        assert_eq!(route.distance_km, 0.0);
        assert_eq!(route.description, "São Paulo-SP → São Paulo-SP");
        assert!(client.cache().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_city() {
        let client = client();

        let result = client
            .resolve_distance("Campinas-SP", "Atlantis-RJ")
            .await;

        assert!(matches!(result, Err(RouteError::UnknownCity(city)) if city == "Atlantis-RJ"));
    }

    #[tokio::test]
    async fn test_invalid_city() {
        let client = client();

        let result = client.resolve_distance("Campinas", "Curitiba-PR").await;

        assert!(matches!(result, Err(RouteError::InvalidCity(_))));
    }

    #[test]
    fn test_graphhopper_requires_api_key() {
        let result = RouteClient::new(
            Arc::new(CityCatalog::embedded().unwrap()),
            RouteProvider::GraphHopperApi {
                gh_profile: GraphHopperProfile::Truck,
            },
            NoCache,
            None,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_graphhopper_client_is_built_with_api_key() {
        let client = RouteClient::new(
            Arc::new(CityCatalog::embedded().unwrap()),
            RouteProvider::GraphHopperApi {
                gh_profile: GraphHopperProfile::Truck,
            },
            NoCache,
            Some(String::from("key")),
        )
        .unwrap();

        assert!(client.graphhopper_client.is_some());
    }

    #[test]
    fn test_detour_factor_below_one_is_rejected() {
        let result = RouteClient::new(
            Arc::new(CityCatalog::embedded().unwrap()),
            RouteProvider::AsTheCrowFlies { detour_factor: 0.5 },
            NoCache,
            None,
        );

        assert!(result.is_err());
    }
}
