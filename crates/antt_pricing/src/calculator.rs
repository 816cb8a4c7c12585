use std::sync::Arc;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use tracing::{info, instrument};

use crate::{
    adjustment::{Modifiers, apply_adjustments},
    calculation_request::CalculationRequest,
    calculation_result::{CalculationBreakdown, CalculationResult},
    distance::{DistanceResolver, ResolvedRoute, RouteError},
    error::PricingError,
    rate_table::{RateEntry, RateTable},
};

/// ANTT minimum freight calculator.
///
/// Stateless apart from the shared, read-only rate table: any number of
/// calculations may run concurrently on the same instance.
pub struct FreightCalculator<R> {
    table: Arc<RateTable>,
    resolver: R,
}

impl<R> FreightCalculator<R>
where
    R: DistanceResolver,
{
    pub fn new(table: Arc<RateTable>, resolver: R) -> Self {
        Self { table, resolver }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Validates the request, looks up its rate, resolves the route and
    /// prices the trip. The rate lookup happens before the route is resolved
    /// so an undefined combination never reaches the route provider.
    #[instrument(
        skip_all,
        level = "debug",
        fields(cargo_type = request.cargo_type.key(), axles = request.axles)
    )]
    pub async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, PricingError> {
        request.validate()?;

        let rate = self.table.lookup(request.cargo_type, request.axles)?;

        let route = self
            .resolver
            .resolve_distance(&request.origin_city, &request.destination_city)
            .await?;

        let result = price_trip(&self.table, rate, route, &request.modifiers)?;

        info!(
            cargo_type = request.cargo_type.key(),
            axles = request.axles,
            distance_km = result.distance_km,
            freight_value = %result.freight_value,
            toll_value = %result.toll_value,
            adjustments = result.breakdown.adjustments.len(),
            "Calculated ANTT minimum freight"
        );

        Ok(result)
    }
}

/// Prices a trip over an already resolved route.
///
/// `freight = allowance + coefficient * distance`, then every enabled
/// modifier in order. The toll is `toll_per_axle_km * axles * distance`.
/// A distance too large to price is reported as an invalid distance.
pub fn price_trip(
    table: &RateTable,
    rate: &RateEntry,
    route: ResolvedRoute,
    modifiers: &Modifiers,
) -> Result<CalculationResult, PricingError> {
    let distance = distance_to_decimal(route.distance_km)?;
    let distance_km = route.distance_km;
    let out_of_range = || RouteError::InvalidDistance(distance_km);

    let base_rate = rate
        .base_coefficient
        .checked_mul(distance)
        .and_then(|displacement| rate.load_unload_allowance.checked_add(displacement))
        .ok_or_else(out_of_range)?;
    let (freight_value, adjustments) =
        apply_adjustments(base_rate, modifiers, table.adjustments()).ok_or_else(out_of_range)?;

    let toll_rate_per_km = table
        .toll_per_axle_km()
        .checked_mul(Decimal::from(rate.axles.count()))
        .ok_or_else(out_of_range)?;
    let toll_value = toll_rate_per_km
        .checked_mul(distance)
        .ok_or_else(out_of_range)?;
    let total_value = freight_value
        .checked_add(toll_value)
        .ok_or_else(out_of_range)?;

    Ok(CalculationResult {
        freight_value,
        toll_value,
        total_value,
        distance_km: route.distance_km,
        route_description: route.description,
        breakdown: CalculationBreakdown {
            base_rate,
            load_unload_coefficient: rate.load_unload_allowance,
            distance_coefficient: rate.base_coefficient,
            toll_rate_per_km,
            adjustments,
        },
    })
}

fn distance_to_decimal(distance_km: f64) -> Result<Decimal, RouteError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(RouteError::InvalidDistance(distance_km));
    }

    Decimal::from_f64(distance_km).ok_or(RouteError::InvalidDistance(distance_km))
}
