//! Geographic coordinate type and the distance heuristic used for incident
//! assignment.
//!
//! `GeoPoint` uses `f64` latitude/longitude because both the road-map file and
//! the crime payload carry double-precision decimal coordinates, and edge
//! costs derived from them feed straight into f64 path arithmetic.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Coordinate-wise mean of two points.  A road segment's representative
    /// position for nearest-edge queries is the midpoint of its endpoints.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) * 0.5,
            lon: (self.lon + other.lon) * 0.5,
        }
    }

    /// Euclidean distance in raw coordinate-degree space.
    ///
    /// Not a metric distance — degrees of longitude shrink with latitude —
    /// but monotone enough for ranking candidates within one city, which is
    /// all the incident-assignment scan needs.
    pub fn degree_distance(self, other: GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
