use crate::GeoPoint;
use geo::{
    algorithm::BoundingRect,
    geometry::{MultiPoint, Point},
};
use serde::Serialize;

/// Bounding box and mean center of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,

    /// Arithmetic mean of latitudes and longitudes.
    pub center: GeoPoint,

    /// Number of positions summarized.
    pub count: usize,
}

impl Extent {
    /// Returns `None` if `positions` is empty.
    pub fn of<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let points: MultiPoint<f64> = positions.into_iter().map(|p| Point::from(*p)).collect();
        let rect = points.bounding_rect()?;
        let count = points.0.len();
        let (sum_lat, sum_lon) = points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), point| (lat + point.y(), lon + point.x()));
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        Some(Self {
            west: rect.min().x,
            south: rect.min().y,
            east: rect.max().x,
            north: rect.max().y,
            center: GeoPoint::wrapped(sum_lat / n, sum_lon / n),
            count,
        })
    }
}
