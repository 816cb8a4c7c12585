use std::sync::Arc;

use aide::axum::{
    ApiRouter,
    routing::{get_with, post_with},
};

use crate::{
    antt::{
        calculate::calculate_handler,
        rates::{cargo_rates_handler, rates_handler},
    },
    state::AppState,
};

pub fn antt_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route(
            "/calculate",
            post_with(calculate_handler, |op| {
                op.description("Minimum road freight for a trip under the ANTT table.")
            }),
        )
        .api_route(
            "/rates",
            get_with(rates_handler, |op| {
                op.description("The rate table currently used for calculations.")
            }),
        )
        .api_route(
            "/rates/{cargo_type}",
            get_with(cargo_rates_handler, |op| {
                op.description("Rates of a single cargo type.")
            }),
        )
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
