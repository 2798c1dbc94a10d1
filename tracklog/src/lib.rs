//! GPX track logs.
//!
//! Reads GPX documents into [`geochain::Track`]s and merges several GPX
//! documents into one.
//!
//! # References
//!
//! 1. [GPX 1.1 Schema](https://www.topografix.com/GPX/1/1/)

mod error;

pub use crate::error::TracklogError;
use chrono::{DateTime, Utc};
use geochain::{GeoPoint, Track, TrackPoint};
use gpx::{Gpx, GpxVersion};
use log::{debug, warn};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

/// Parses a GPX document, returning one [`Track`] per GPX track.
///
/// Points of all segments of a GPX track are concatenated in document
/// order. Points without a time are skipped.
pub fn read<R: Read>(reader: R) -> Result<Vec<Track>, TracklogError> {
    let gpx = gpx::read(reader)?;
    gpx.tracks.iter().map(convert_track).collect()
}

/// Reads the GPX file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Track>, TracklogError> {
    let path = path.as_ref();
    let tracks = read(BufReader::new(File::open(path)?))?;
    debug!(
        "loaded {path:?}; tracks: {}, points: {}",
        tracks.len(),
        tracks.iter().map(|track| track.points.len()).sum::<usize>()
    );
    Ok(tracks)
}

/// Reads every file in `paths`, keeping tracks in argument order.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Track>, TracklogError> {
    let mut tracks = Vec::new();
    for path in paths {
        tracks.extend(load(path)?);
    }
    Ok(tracks)
}

/// Writes a single GPX 1.1 document containing the tracks of every
/// input, in input order. Returns the number of tracks written.
pub fn merge<I, R, W>(inputs: I, writer: W) -> Result<usize, TracklogError>
where
    I: IntoIterator<Item = R>,
    R: Read,
    W: Write,
{
    let mut merged = Gpx {
        version: GpxVersion::Gpx11,
        ..Gpx::default()
    };
    for input in inputs {
        merged.tracks.extend(gpx::read(input)?.tracks);
    }
    gpx::write(&merged, writer)?;
    Ok(merged.tracks.len())
}

/// [`merge`] the GPX files in `paths` into a new file at `out`.
pub fn merge_files<P, Q>(paths: &[P], out: Q) -> Result<usize, TracklogError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    // Open all inputs first so a bad input never leaves a partial output.
    let inputs = paths
        .iter()
        .map(|path| File::open(path).map(BufReader::new))
        .collect::<Result<Vec<_>, _>>()?;
    let mut buf = Vec::new();
    let n_tracks = merge(inputs, &mut buf)?;
    let mut wtr = BufWriter::new(File::create(out)?);
    wtr.write_all(&buf)?;
    wtr.flush()?;
    Ok(n_tracks)
}

fn convert_track(track: &gpx::Track) -> Result<Track, TracklogError> {
    let mut untimed = 0_usize;
    let mut points = Vec::new();
    for waypoint in track.segments.iter().flat_map(|segment| segment.points.iter()) {
        let Some(time) = &waypoint.time else {
            untimed += 1;
            continue;
        };
        let point = waypoint.point();
        points.push(TrackPoint::new(
            GeoPoint::new(point.y(), point.x())?,
            waypoint.elevation,
            timestamp(time)?,
        ));
    }
    if untimed > 0 {
        warn!(
            "track {:?}: skipped {untimed} points without time",
            track.name.as_deref().unwrap_or_default()
        );
    }
    Ok(Track::named(track.name.clone(), points))
}

fn timestamp(time: &gpx::Time) -> Result<DateTime<Utc>, TracklogError> {
    let rfc3339 = time.format()?;
    Ok(DateTime::parse_from_rfc3339(&rfc3339)?.with_timezone(&Utc))
}
