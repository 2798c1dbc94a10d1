use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// No pair of track points brackets the requested time.
    #[error("timestamp {0} not found in track")]
    NotFound(DateTime<Utc>),

    #[error("invalid coordinate lat: {latitude}, lon: {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}
