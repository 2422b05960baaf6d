//! Distance provider seam.
//!
//! The scorers consume a numeric distance and do no geodesy themselves.
//! The default provider is great-circle haversine; tests substitute fixed
//! distances.

use crate::types::GeoPoint;

/// Mean Earth radius in kilometers (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Provider of pairwise distances between evidence locations.
pub trait DistanceProvider: Send + Sync {
    /// Distance in kilometers between two points.
    fn distance_km(&self, a: GeoPoint, b: GeoPoint) -> f64;
}

/// Great-circle distance via the haversine formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineDistance;

impl DistanceProvider for HaversineDistance {
    fn distance_km(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        let lat_a = a.lat.to_radians();
        let lat_b = b.lat.to_radians();
        let dlat = (b.lat - a.lat).to_radians();
        let dlon = (b.lon - a.lon).to_radians();

        let h = (dlat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }
}
