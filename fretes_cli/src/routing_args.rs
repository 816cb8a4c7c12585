use std::path::PathBuf;

use clap::Args;
use fretes_routing::{
    config::RoutingConfig, graphhopper_api::GraphHopperProfile,
    route_provider::RouteProviderKind,
};

#[derive(Args)]
pub struct RoutingArgs {
    /// Distance provider, `graphhopper` or `crow`
    #[arg(long, env = "FRETES_ROUTE_PROVIDER", default_value_t = RouteProviderKind::Crow)]
    provider: RouteProviderKind,

    #[arg(long, env = "GRAPHHOPPER_API_KEY", hide_env_values = true)]
    graphhopper_api_key: Option<String>,

    #[arg(long, env = "FRETES_GH_PROFILE", default_value_t = GraphHopperProfile::Truck)]
    gh_profile: GraphHopperProfile,

    /// Applied to great-circle distances with the `crow` provider
    #[arg(long, env = "FRETES_DETOUR_FACTOR", default_value_t = 1.25)]
    detour_factor: f64,

    /// Folder where resolved routes are kept between runs
    #[arg(long, env = "FRETES_CACHE_FOLDER")]
    cache_folder: Option<PathBuf>,
}

impl From<RoutingArgs> for RoutingConfig {
    fn from(args: RoutingArgs) -> Self {
        RoutingConfig {
            provider: args.provider,
            graphhopper_api_key: args.graphhopper_api_key,
            gh_profile: args.gh_profile,
            detour_factor: args.detour_factor,
            cache_folder: args.cache_folder,
        }
    }
}
