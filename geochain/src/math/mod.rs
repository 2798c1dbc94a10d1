mod geodesy;
mod lerp;

pub use geodesy::{bearing, destination, displacement, Geodesy, Wgs84};
pub(crate) use lerp::{lerp, time_fraction};
