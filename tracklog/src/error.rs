use geochain::GeoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracklogError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("invalid track point time, {0}")]
    Time(#[from] chrono::ParseError),

    #[error("{0}")]
    Geo(#[from] GeoError),
}
