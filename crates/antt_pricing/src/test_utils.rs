use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::distance::{DistanceResolver, ResolvedRoute, RouteError};

/// Resolver answering every route with the same distance.
#[derive(Clone)]
pub struct StubResolver {
    distance_km: f64,
    pub calls: Arc<AtomicUsize>,
}

impl StubResolver {
    pub fn fixed(distance_km: f64) -> Self {
        StubResolver {
            distance_km,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl DistanceResolver for StubResolver {
    async fn resolve_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<ResolvedRoute, RouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(ResolvedRoute {
            distance_km: self.distance_km,
            description: format!("{origin} → {destination}"),
        })
    }
}

pub struct FailingResolver;

impl DistanceResolver for FailingResolver {
    async fn resolve_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<ResolvedRoute, RouteError> {
        Err(RouteError::NoRoute {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
        })
    }
}

/// Wraps `entries` into a complete rate table document.
pub fn table_json(entries: &str) -> String {
    format!(
        r#"{{
            "resolution": "test",
            "effective_from": "2024-01-01",
            "toll_per_axle_km": "0.05",
            "adjustments": {{
                "composition_uplift": "0.10",
                "high_performance_reduction": "0.07",
                "empty_return_fraction": "0.92"
            }},
            "entries": {entries}
        }}"#
    )
}
