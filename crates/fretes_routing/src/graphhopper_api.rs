use std::{fmt::Display, str::FromStr, time::Duration};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub type GHPoint = [f64; 2];

#[derive(Debug, Deserialize, Serialize, JsonSchema, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GraphHopperProfile {
    Car,
    SmallTruck,
    Truck,
}

impl Display for GraphHopperProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GraphHopperProfile::Car => "car",
                GraphHopperProfile::SmallTruck => "small_truck",
                GraphHopperProfile::Truck => "truck",
            }
        )
    }
}

impl FromStr for GraphHopperProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(GraphHopperProfile::Car),
            "small_truck" => Ok(GraphHopperProfile::SmallTruck),
            "truck" => Ok(GraphHopperProfile::Truck),
            other => Err(format!("unknown GraphHopper profile '{other}'")),
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphHopperError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("No path found")]
    NoPath,

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteRequestBody {
    /// `[lon, lat]` pairs, origin first
    pub points: Vec<GHPoint>,

    /// Routing profile (e.g., "car", "truck")
    pub profile: String,

    /// Only the summary is needed, not the geometry
    pub calc_points: bool,

    pub instructions: bool,
}

#[derive(Debug, Deserialize)]
struct RoutePath {
    /// Distance in meters
    distance: f64,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    paths: Vec<RoutePath>,
}

pub struct GraphHopperRouteClientParams {
    pub api_key: String,
    /// Whole-request timeout, connection included.
    pub timeout: Duration,
}

impl GraphHopperRouteClientParams {
    pub fn new(api_key: String) -> Self {
        GraphHopperRouteClientParams {
            api_key,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const GRAPHHOPPER_ROUTE_API_URL: &str = "https://graphhopper.com/api/1/route";

pub struct GraphHopperRouteClient {
    params: GraphHopperRouteClientParams,
    client: reqwest::Client,
}

impl GraphHopperRouteClient {
    pub fn new(params: GraphHopperRouteClientParams) -> Result<Self, GraphHopperError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;

        Ok(Self { params, client })
    }

    pub fn timeout(&self) -> Duration {
        self.params.timeout
    }

    /// Road distance in kilometers between two points.
    pub async fn fetch_distance_km<P>(
        &self,
        from: P,
        to: P,
        profile: GraphHopperProfile,
    ) -> Result<f64, GraphHopperError>
    where
        P: Into<geo_types::Point>,
    {
        let body = route_request_body(from.into(), to.into(), profile);

        let response = self
            .client
            .post(GRAPHHOPPER_ROUTE_API_URL)
            .query(&[("key", &self.params.api_key)])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(api_error(status, message));
        }

        let text = response.text().await?;
        let distance_km = parse_route_response(&text)?;

        debug!("GraphHopperApi: resolved route of {distance_km:.1} km");

        Ok(distance_km)
    }
}

fn route_request_body(
    from: geo_types::Point,
    to: geo_types::Point,
    profile: GraphHopperProfile,
) -> RouteRequestBody {
    RouteRequestBody {
        points: vec![[from.x(), from.y()], [to.x(), to.y()]],
        profile: profile.to_string(),
        calc_points: false,
        instructions: false,
    }
}

/// GraphHopper answers 400 when the points cannot be connected.
fn api_error(status: u16, message: String) -> GraphHopperError {
    const NO_PATH_MESSAGES: [&str; 2] = [
        "Connection between locations not found",
        "Cannot find point",
    ];

    if status == 400 && NO_PATH_MESSAGES.iter().any(|needle| message.contains(needle)) {
        return GraphHopperError::NoPath;
    }

    GraphHopperError::Api { status, message }
}

fn parse_route_response(text: &str) -> Result<f64, GraphHopperError> {
    let response: RouteResponse = serde_json::from_str(text)?;

    response
        .paths
        .first()
        .map(|path| path.distance / 1000.0)
        .ok_or(GraphHopperError::NoPath)
}
