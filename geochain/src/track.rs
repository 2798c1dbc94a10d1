use crate::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped GPS fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub position: GeoPoint,

    /// Elevation above sea level (meters), if recorded.
    pub elevation: Option<f64>,

    pub timestamp: DateTime<Utc>,
}

impl TrackPoint {
    pub fn new(position: GeoPoint, elevation: Option<f64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            position,
            elevation,
            timestamp,
        }
    }
}

/// Points recorded by one GPS logging session.
///
/// Points are expected, but not required, to be in non-decreasing
/// time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: Option<String>,
    pub points: Vec<TrackPoint>,
}

impl Track {
    pub fn new(points: Vec<TrackPoint>) -> Self {
        Self { name: None, points }
    }

    pub fn named(name: Option<String>, points: Vec<TrackPoint>) -> Self {
        Self { name, points }
    }
}

impl FromIterator<TrackPoint> for Track {
    fn from_iter<I: IntoIterator<Item = TrackPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One or more tracks, read as a single sequence of points.
///
/// Tracks are kept in the order they were supplied. No time sorting
/// happens across tracks, so overlapping tracks are scanned in
/// concatenation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackStore {
    tracks: Vec<Track>,
}

impl TrackStore {
    pub fn build<I>(tracks: I) -> Self
    where
        I: IntoIterator<Item = Track>,
    {
        Self {
            tracks: tracks.into_iter().collect(),
        }
    }

    /// Returns all points, track by track.
    ///
    /// The returned iterator can be cloned to replay the sequence.
    pub fn points(&self) -> impl Iterator<Item = &TrackPoint> + Clone + '_ {
        self.tracks.iter().flat_map(|track| track.points.iter())
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total number of points across all tracks.
    pub fn len(&self) -> usize {
        self.tracks.iter().map(|track| track.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the timestamps of the first and last points in scan
    /// order.
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points().next()?;
        let last = self.points().last()?;
        Some((first.timestamp, last.timestamp))
    }
}

impl FromIterator<Track> for TrackStore {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self::build(iter)
    }
}
