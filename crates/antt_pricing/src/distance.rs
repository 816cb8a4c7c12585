use std::future::Future;

use thiserror::Error;

/// Road distance between two cities, as reported by a resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub distance_km: f64,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("'{0}' is not a valid city identifier, expected '<city>-<UF>'")]
    InvalidCity(String),

    #[error("unknown city '{0}'")]
    UnknownCity(String),

    #[error("no route found between {origin} and {destination}")]
    NoRoute { origin: String, destination: String },

    #[error("route provider returned an invalid distance: {0}")]
    InvalidDistance(f64),

    #[error("route provider failed: {0}")]
    Provider(#[source] anyhow::Error),
}

/// Resolves the road distance between two `"<city>-<UF>"` identifiers.
///
/// A failure must never be reported as a zero distance: zero is a valid
/// answer for identical origin and destination.
pub trait DistanceResolver: Send + Sync {
    fn resolve_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<ResolvedRoute, RouteError>> + Send;
}

impl<R: DistanceResolver> DistanceResolver for std::sync::Arc<R> {
    fn resolve_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<ResolvedRoute, RouteError>> + Send {
        (**self).resolve_distance(origin, destination)
    }
}
