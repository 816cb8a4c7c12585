use std::sync::Arc;

use antt_pricing::{
    calculation_request::CalculationRequest,
    json::calculation::{JsonCalculationRequest, JsonCalculationResult},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{error::ApiError, state::AppState};

pub async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<JsonCalculationRequest>, JsonRejection>,
) -> Result<Json<JsonCalculationResult>, ApiError> {
    let Json(body) = body?;
    let request = CalculationRequest::try_from(body)?;

    let result = state.calculator.calculate(&request).await?;

    Ok(Json(JsonCalculationResult::from(&result)))
}
