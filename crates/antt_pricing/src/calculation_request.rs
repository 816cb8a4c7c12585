use crate::{adjustment::Modifiers, cargo_type::CargoType, error::PricingError};

/// Input of a single freight calculation. Built per request and discarded
/// once the result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    pub cargo_type: CargoType,
    pub axles: u8,
    pub origin_city: String,
    pub destination_city: String,
    pub modifiers: Modifiers,
}

/// Smallest and largest axle count a request may carry. Counts in between
/// without a legal class (8) are rejected by the rate lookup instead.
pub const MIN_AXLES: u8 = 2;
pub const MAX_AXLES: u8 = 9;

impl CalculationRequest {
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(MIN_AXLES..=MAX_AXLES).contains(&self.axles) {
            return Err(PricingError::invalid_input(format!(
                "axles must be between {MIN_AXLES} and {MAX_AXLES}, got {}",
                self.axles
            )));
        }

        if self.origin_city.trim().is_empty() {
            return Err(PricingError::invalid_input("originCity is required"));
        }

        if self.destination_city.trim().is_empty() {
            return Err(PricingError::invalid_input("destinationCity is required"));
        }

        Ok(())
    }
}
