//! Great-circle distance on a spherical Earth.

/// Mean Earth radius used for distance computations, in metres.
pub const EARTH_RADIUS_M: f64 = 6_376_500.0;

/// A geocoded point, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance between two points, in metres.
#[must_use]
pub fn great_circle_m(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push h marginally outside [0, 1]
    let h = h.clamp(0.0, 1.0);

    EARTH_RADIUS_M * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Haversine distance between two points, in kilometres.
#[must_use]
pub fn great_circle_km(from: Coordinates, to: Coordinates) -> f64 {
    great_circle_m(from, to) / 1000.0
}
