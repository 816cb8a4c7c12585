use aide::{
    OperationOutput,
    generate::GenContext,
    openapi::{Operation, Response as OpenApiResponse},
};
use antt_pricing::{distance::RouteError, error::PricingError, json::JsonErrorResponse};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    UnprocessableEntity(String),
    BadGateway(String),
    InternalServerError(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
    }
}

impl From<PricingError> for ApiError {
    fn from(error: PricingError) -> Self {
        match &error {
            PricingError::InvalidInput(_) => ApiError::BadRequest(error.to_string()),
            PricingError::RateNotFound { .. } => ApiError::UnprocessableEntity(error.to_string()),
            PricingError::RouteNotResolved(
                RouteError::InvalidCity(_) | RouteError::UnknownCity(_) | RouteError::NoRoute { .. },
            ) => ApiError::UnprocessableEntity(error.to_string()),
            PricingError::RouteNotResolved(
                RouteError::Provider(_) | RouteError::InvalidDistance(_),
            ) => {
                error!("Route provider failure: {error:?}");
                ApiError::BadGateway(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::UnprocessableEntity(message)
            | ApiError::BadGateway(message)
            | ApiError::InternalServerError(message) => message,
        };

        (status, Json(JsonErrorResponse { error: message })).into_response()
    }
}

impl OperationOutput for ApiError {
    type Inner = JsonErrorResponse;

    fn operation_response(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Option<OpenApiResponse> {
        Json::<JsonErrorResponse>::operation_response(ctx, operation)
    }
}
