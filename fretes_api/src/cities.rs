use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use fretes_routing::city_catalog::City;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    pagination::{PaginatedResponse, Pagination},
    state::AppState,
};

#[derive(Deserialize, JsonSchema)]
pub struct CitiesQuery {
    /// Two-letter federative unit, e.g. `SP`.
    uf: Option<String>,

    /// Part of the city name. Case and accents are ignored.
    q: Option<String>,
}

pub async fn cities_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CitiesQuery>,
    Query(pagination): Query<Pagination>,
) -> Json<PaginatedResponse<City>> {
    let cities = state
        .catalog
        .search(query.uf.as_deref(), query.q.as_deref());

    Json(pagination.paginate(cities.into_iter().cloned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[tokio::test]
    async fn test_cities_by_uf() {
        let Json(response) = cities_handler(
            State(test_state()),
            Query(CitiesQuery {
                uf: Some(String::from("PR")),
                q: None,
            }),
            Query(Pagination::default()),
        )
        .await;

        assert_eq!(response.total, 6);
        assert_eq!(response.data[0].id(), "Cascavel-PR");
    }

    #[tokio::test]
    async fn test_cities_paginated() {
        let Json(response) = cities_handler(
            State(test_state()),
            Query(CitiesQuery { uf: None, q: None }),
            Query(Pagination {
                page: 2,
                per_page: 50,
            }),
        )
        .await;

        assert_eq!(response.total, 59);
        assert_eq!(response.total_pages, 2);
        assert_eq!(response.data.len(), 9);
    }
}
