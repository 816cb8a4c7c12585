use std::sync::Arc;

use antt_pricing::{cargo_type::CargoType, json::rate_table::JsonRateTable};
use axum::{
    Json,
    extract::{Path, State},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, JsonSchema)]
pub struct CargoTypePath {
    /// Cargo key such as `carga_geral`, or its Portuguese label.
    cargo_type: String,
}

pub async fn rates_handler(State(state): State<Arc<AppState>>) -> Json<JsonRateTable> {
    Json(JsonRateTable::from_table(state.calculator.table(), None))
}

pub async fn cargo_rates_handler(
    Path(path): Path<CargoTypePath>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<JsonRateTable>, ApiError> {
    let cargo_type: CargoType = path
        .cargo_type
        .parse()
        .map_err(|error: antt_pricing::cargo_type::UnknownCargoType| {
            ApiError::NotFound(error.to_string())
        })?;

    Ok(Json(JsonRateTable::from_table(
        state.calculator.table(),
        Some(cargo_type),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[tokio::test]
    async fn test_rates() {
        let state = test_state();
        let Json(table) = rates_handler(State(state.clone())).await;

        assert_eq!(table.entries.len(), state.calculator.table().len());
    }

    #[tokio::test]
    async fn test_cargo_rates() {
        let Json(table) = cargo_rates_handler(
            Path(CargoTypePath {
                cargo_type: String::from("granel_pressurizada"),
            }),
            State(test_state()),
        )
        .await
        .unwrap();

        assert!(
            table
                .entries
                .iter()
                .all(|entry| entry.cargo_type == CargoType::PressurizedBulk)
        );
        assert_eq!(
            table.entries.iter().map(|entry| entry.axles).collect::<Vec<_>>(),
            vec![5, 6, 7, 9]
        );
    }

    #[tokio::test]
    async fn test_unknown_cargo_type() {
        let result = cargo_rates_handler(
            Path(CargoTypePath {
                cargo_type: String::from("mudanca"),
            }),
            State(test_state()),
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
