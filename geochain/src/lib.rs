//! # Photo positioning and chaining
//!
//! `geochain` positions photos on the WGS84 ellipsoid and links them
//! into a navigable sequence:
//!
//! - [`locate`] recovers a position from GPS tracks at a point in time;
//! - [`resolve`] positions a photo from its own metadata or a track;
//! - [`link`] connects an ordered list of photos and sets headings.

mod chain;
mod error;
mod extent;
mod interpolate;
mod math;
mod photo;
mod point;
mod track;

pub use {
    crate::{
        chain::{link, link_with, plan, plan_with, ChainPosition, Link},
        error::GeoError,
        extent::Extent,
        interpolate::{locate, locate_with, Located},
        math::{bearing, destination, displacement, Geodesy, Wgs84},
        photo::{resolve, resolve_with, PhotoId, PhotoMetadata, PhotoPosition},
        point::GeoPoint,
        track::{Track, TrackPoint, TrackStore},
    },
    chrono, geo,
};
