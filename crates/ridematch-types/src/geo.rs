//! Geographic primitives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate (degrees latitude / longitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Origin coordinate used for freshly registered users.
    #[must_use]
    pub const fn zero() -> Self {
        Self { lat: 0.0, lng: 0.0 }
    }

    /// Both components finite and within WGS-84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6},{:.6})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        assert!(GeoPoint::new(48.8566, 2.3522).is_valid());
        assert!(GeoPoint::zero().is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn serde_field_names() {
        let p = GeoPoint::new(1.5, -2.5);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["lat"], 1.5);
        assert_eq!(json["lng"], -2.5);
    }
}
