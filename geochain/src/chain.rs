//! Sequential linking of positioned photos.
//!
//! Given photos in presentation order, each one is connected to its
//! neighbours and pointed along the chain:
//!
//! ```text
//! first  -> next                 heading: first -> next
//! middle -> previous, next       heading: middle -> next
//! last   -> previous             heading: previous -> last
//! ```

use crate::{
    math::{Geodesy, Wgs84},
    PhotoId, PhotoPosition,
};
use log::debug;

/// Where an item sits in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainPosition {
    /// The only item; it has no neighbours.
    Single,
    First,
    Middle,
    Last,
}

impl ChainPosition {
    /// Returns the position of `index` in a chain of `len` items.
    ///
    /// `index` must be less than `len`.
    pub fn of(index: usize, len: usize) -> Self {
        if len <= 1 {
            Self::Single
        } else if index == 0 {
            Self::First
        } else if index + 1 >= len {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

/// Heading and connections computed for one chain item.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub heading: f64,
    pub connections: Vec<PhotoId>,
}

/// Computes WGS84 links for `items` without touching them.
///
/// Returns one [`Link`] per item, or nothing when there are fewer than
/// two items.
pub fn plan(items: &[PhotoPosition]) -> Vec<Link> {
    plan_with(&Wgs84, items)
}

/// [`plan`] over an arbitrary earth model.
pub fn plan_with<G>(geodesy: &G, items: &[PhotoPosition]) -> Vec<Link>
where
    G: Geodesy + ?Sized,
{
    let len = items.len();
    if len <= 1 {
        return Vec::new();
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| match ChainPosition::of(idx, len) {
            ChainPosition::Single => Link {
                heading: item.heading,
                connections: item.connections.clone(),
            },
            ChainPosition::First => {
                let next = &items[idx + 1];
                Link {
                    heading: geodesy.bearing(item.position, next.position),
                    connections: vec![next.id.clone()],
                }
            }
            ChainPosition::Middle => {
                let previous = &items[idx - 1];
                let next = &items[idx + 1];
                Link {
                    heading: geodesy.bearing(item.position, next.position),
                    connections: vec![previous.id.clone(), next.id.clone()],
                }
            }
            ChainPosition::Last => {
                // No next item; keep facing the way we arrived.
                let previous = &items[idx - 1];
                Link {
                    heading: geodesy.bearing(previous.position, item.position),
                    connections: vec![previous.id.clone()],
                }
            }
        })
        .collect()
}

/// Sets `heading` and `connections` on every item using WGS84
/// bearings. Chains of fewer than two items are left untouched.
pub fn link(items: &mut [PhotoPosition]) {
    link_with(&Wgs84, items);
}

/// [`link`] over an arbitrary earth model.
pub fn link_with<G>(geodesy: &G, items: &mut [PhotoPosition])
where
    G: Geodesy + ?Sized,
{
    let links = plan_with(geodesy, items);
    for (item, Link { heading, connections }) in items.iter_mut().zip(links) {
        debug!(
            "{}: connect to {:?}, heading {heading}",
            item.id,
            connections.iter().map(PhotoId::as_str).collect::<Vec<_>>()
        );
        item.heading = heading;
        item.connections = connections;
    }
}
