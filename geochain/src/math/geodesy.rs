//! Ellipsoidal earth primitives.
//!
//! The geodesic solutions come from the [geo] crate's geographiclib
//! port; this module pins down their behavior on degenerate input and
//! the planar displacement convention used for interpolation.
//!
//! [geo]: https://docs.rs/geo/latest/geo/algorithm/geodesic_bearing/trait.GeodesicBearing.html

use crate::GeoPoint;
use geo::{
    algorithm::{GeodesicBearing, GeodesicDestination},
    geometry::{Coord, Point},
};

/// Geodesic operations over an earth model.
///
/// Angles are degrees clockwise from true north, distances are meters.
pub trait Geodesy {
    /// Initial bearing of the geodesic from `from` to `to`, in
    /// `[0, 360)`. Coincident points yield `0`.
    fn bearing(&self, from: GeoPoint, to: GeoPoint) -> f64;

    /// Planar `(east, north)` offset approximating the geodesic from
    /// `from` to `to`.
    fn displacement(&self, from: GeoPoint, to: GeoPoint) -> (f64, f64);

    /// Point reached by applying a planar `(east, north)` offset to
    /// `origin`. Inverse of [`Geodesy::displacement`].
    fn destination(&self, origin: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint;
}

/// The WGS84 reference ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wgs84;

impl Geodesy for Wgs84 {
    fn bearing(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        if from == to {
            return 0.0;
        }
        let azimuth = Point::from(from).geodesic_bearing(Point::from(to));
        normalize_bearing(azimuth)
    }

    fn displacement(&self, from: GeoPoint, to: GeoPoint) -> (f64, f64) {
        if from == to {
            return (0.0, 0.0);
        }
        let (azimuth, distance) = Point::from(from).geodesic_bearing_distance(Point::from(to));
        let (sin, cos) = azimuth.to_radians().sin_cos();
        (distance * sin, distance * cos)
    }

    fn destination(&self, origin: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint {
        let distance = east_m.hypot(north_m);
        if distance == 0.0 {
            return origin;
        }
        let azimuth = east_m.atan2(north_m).to_degrees();
        let Point(Coord { x, y }) = Point::from(origin).geodesic_destination(azimuth, distance);
        GeoPoint::wrapped(y, x)
    }
}

/// WGS84 [`Geodesy::bearing`].
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    Wgs84.bearing(from, to)
}

/// WGS84 [`Geodesy::displacement`].
pub fn displacement(from: GeoPoint, to: GeoPoint) -> (f64, f64) {
    Wgs84.displacement(from, to)
}

/// WGS84 [`Geodesy::destination`].
pub fn destination(origin: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint {
    Wgs84.destination(origin, east_m, north_m)
}

/// Maps a solver azimuth in `(-180, 180]` onto `[0, 360)`.
fn normalize_bearing(azimuth: f64) -> f64 {
    let bearing = if azimuth < 0.0 { azimuth + 360.0 } else { azimuth };
    // -ε + 360 can round up to exactly 360.
    if bearing >= 360.0 {
        bearing - 360.0
    } else {
        bearing
    }
}
