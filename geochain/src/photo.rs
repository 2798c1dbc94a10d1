use crate::{
    interpolate::{locate_with, Located},
    math::{Geodesy, Wgs84},
    GeoError, GeoPoint, TrackStore,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque photo identifier assigned by the publishing side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What the metadata extractor knows about a photo.
///
/// A missing `position` means the photo has no GPS tag and must be
/// positioned from a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoMetadata {
    pub id: PhotoId,

    /// Capture time.
    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub position: Option<GeoPoint>,

    /// Altitude in meters.
    #[serde(default)]
    pub altitude: Option<f64>,
}

/// A fully positioned photo, ready to be chained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPosition {
    pub id: PhotoId,
    pub position: GeoPoint,

    /// Altitude in meters.
    pub altitude: f64,

    pub timestamp: DateTime<Utc>,

    /// Degrees clockwise from true north. Set by [`crate::link`].
    pub heading: f64,

    /// Neighbours in the chain. Set by [`crate::link`].
    pub connections: Vec<PhotoId>,
}

impl PhotoPosition {
    pub fn new(id: PhotoId, position: GeoPoint, altitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            position,
            altitude,
            timestamp,
            heading: 0.0,
            connections: Vec::new(),
        }
    }
}

/// Positions a photo, preferring its own coordinates and falling back
/// to the WGS84 track position at its capture time.
pub fn resolve(meta: &PhotoMetadata, store: &TrackStore) -> Result<PhotoPosition, GeoError> {
    resolve_with(&Wgs84, meta, store)
}

/// [`resolve`] over an arbitrary earth model.
pub fn resolve_with<G>(
    geodesy: &G,
    meta: &PhotoMetadata,
    store: &TrackStore,
) -> Result<PhotoPosition, GeoError>
where
    G: Geodesy + ?Sized,
{
    let (position, altitude) = match meta.position {
        Some(position) => (position, meta.altitude.unwrap_or(0.0)),
        None => {
            let Located {
                position,
                elevation,
            } = locate_with(geodesy, store, meta.timestamp)?;
            (position, elevation)
        }
    };
    Ok(PhotoPosition::new(
        meta.id.clone(),
        position,
        altitude,
        meta.timestamp,
    ))
}
