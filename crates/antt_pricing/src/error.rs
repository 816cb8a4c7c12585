use thiserror::Error;

use crate::{cargo_type::CargoType, distance::RouteError};

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot calculate for this combination: no ANTT rate for {cargo_type} with {axles} axles")]
    RateNotFound { cargo_type: CargoType, axles: u8 },

    #[error("Could not determine route: {0}")]
    RouteNotResolved(#[from] RouteError),
}

impl PricingError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PricingError::InvalidInput(message.into())
    }
}
