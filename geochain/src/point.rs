use crate::GeoError;
use geo::geometry::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A validated latitude/longitude pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLon")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Returns a new point, or an error if either value is not finite
    /// or falls outside `[-90, 90]` / `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(GeoError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Builds a point from solver output, folding longitude back into
    /// `[-180, 180]` and clamping latitude to the poles.
    pub(crate) fn wrapped(latitude: f64, longitude: f64) -> Self {
        let longitude = if (-180.0..=180.0).contains(&longitude) {
            longitude
        } else {
            (longitude + 180.0).rem_euclid(360.0) - 180.0
        };
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude,
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude, point.latitude)
    }
}

impl TryFrom<Point<f64>> for GeoPoint {
    type Error = GeoError;

    fn try_from(Point(Coord { x, y }): Point<f64>) -> Result<Self, GeoError> {
        Self::new(y, x)
    }
}

/// Unvalidated wire form.
#[derive(Deserialize)]
struct LatLon {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<LatLon> for GeoPoint {
    type Error = GeoError;

    fn try_from(LatLon {
        latitude,
        longitude,
    }: LatLon) -> Result<Self, GeoError> {
        Self::new(latitude, longitude)
    }
}
