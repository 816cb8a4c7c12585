const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters.
pub fn haversine_distance<P>(from: P, to: P) -> f64
where
    P: Into<geo_types::Point>,
{
    let (from, to): (geo_types::Point, geo_types::Point) = (from.into(), to.into());

    let half_chord = haversine(to.y().to_radians() - from.y().to_radians())
        + from.y().to_radians().cos()
            * to.y().to_radians().cos()
            * haversine(to.x().to_radians() - from.x().to_radians());

    2.0 * EARTH_RADIUS_METERS * half_chord.sqrt().min(1.0).asin()
}

fn haversine(angle: f64) -> f64 {
    (angle / 2.0).sin().powi(2)
}

/// Road distance estimate in kilometers: the great-circle distance stretched
/// by `detour_factor` to account for the road network.
pub fn as_the_crow_flies_km<P>(from: P, to: P, detour_factor: f64) -> f64
where
    P: Into<geo_types::Point>,
{
    haversine_distance(from, to) / 1000.0 * detour_factor
}
