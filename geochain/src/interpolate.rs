use crate::{
    math::{lerp, time_fraction, Geodesy, Wgs84},
    GeoError, GeoPoint, TrackPoint, TrackStore,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A position recovered from a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Located {
    pub position: GeoPoint,

    /// Elevation in meters; `0` unless both bracketing points carry
    /// one.
    pub elevation: f64,
}

/// Returns the WGS84 position at `target`, interpolated between the
/// pair of consecutive track points whose times bracket it.
pub fn locate(store: &TrackStore, target: DateTime<Utc>) -> Result<Located, GeoError> {
    locate_with(&Wgs84, store, target)
}

/// [`locate`] over an arbitrary earth model.
///
/// Scans the store once, in concatenation order, stopping at the first
/// window `[previous, point]` (inclusive) that contains `target`. The
/// first point acts as its own predecessor, so a target equal to its
/// timestamp resolves to it exactly and anything earlier is
/// [`GeoError::NotFound`].
pub fn locate_with<G>(geodesy: &G, store: &TrackStore, target: DateTime<Utc>) -> Result<Located, GeoError>
where
    G: Geodesy + ?Sized,
{
    let mut previous: Option<&TrackPoint> = None;
    for point in store.points() {
        let start = previous.unwrap_or(point);
        if start.timestamp <= target && target <= point.timestamp {
            return Ok(interpolate(geodesy, start, point, target));
        }
        previous = Some(point);
    }
    Err(GeoError::NotFound(target))
}

fn interpolate<G>(geodesy: &G, start: &TrackPoint, end: &TrackPoint, target: DateTime<Utc>) -> Located
where
    G: Geodesy + ?Sized,
{
    if start.timestamp == end.timestamp {
        return Located {
            position: start.position,
            elevation: start.elevation.unwrap_or(0.0),
        };
    }

    let fraction = time_fraction(start.timestamp, end.timestamp, target);
    let (east_m, north_m) = geodesy.displacement(start.position, end.position);
    let position = geodesy.destination(start.position, east_m * fraction, north_m * fraction);
    let elevation = match (start.elevation, end.elevation) {
        (Some(from), Some(to)) => lerp(from, to, fraction),
        _ => 0.0,
    };

    Located {
        position,
        elevation,
    }
}

#[cfg(test)]
mod tests {
    use super::{locate, locate_with, Located};
    use crate::{
        math::{destination, displacement, Geodesy},
        GeoError, GeoPoint, Track, TrackPoint, TrackStore,
    };
    use approx::assert_abs_diff_eq;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 10, 22, 8, 10, 0).unwrap()
    }

    fn t1() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 10, 22, 8, 20, 0).unwrap()
    }

    fn p(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    fn two_point_store(ele0: Option<f64>, ele1: Option<f64>) -> TrackStore {
        TrackStore::build([Track::new(vec![
            TrackPoint::new(p(51.0, -3.0), ele0, t0()),
            TrackPoint::new(p(52.0, -2.0), ele1, t1()),
        ])])
    }

    /// Earth model on a flat plane measured in degrees, so results can
    /// be checked by hand.
    struct Flat;

    impl Geodesy for Flat {
        fn bearing(&self, _from: GeoPoint, _to: GeoPoint) -> f64 {
            0.0
        }

        fn displacement(&self, from: GeoPoint, to: GeoPoint) -> (f64, f64) {
            (
                to.longitude() - from.longitude(),
                to.latitude() - from.latitude(),
            )
        }

        fn destination(&self, origin: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint {
            GeoPoint::new(origin.latitude() + north_m, origin.longitude() + east_m).unwrap()
        }
    }

    #[test]
    fn test_exact_first_point() {
        let store = two_point_store(Some(139.05), Some(150.0));
        let Located {
            position,
            elevation,
        } = locate(&store, t0()).unwrap();
        assert_eq!(position, p(51.0, -3.0));
        assert_eq!(elevation, 139.05);
    }

    #[test]
    fn test_midpoint() {
        let store = two_point_store(Some(100.0), Some(200.0));
        let target = t0() + (t1() - t0()) / 2;
        let located = locate(&store, target).unwrap();

        let (east, north) = displacement(p(51.0, -3.0), p(52.0, -2.0));
        let expected = destination(p(51.0, -3.0), east * 0.5, north * 0.5);
        assert_abs_diff_eq!(located.position.latitude(), expected.latitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(located.position.longitude(), expected.longitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(located.elevation, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_last_point() {
        let store = two_point_store(None, None);
        let located = locate(&store, t1()).unwrap();
        assert_abs_diff_eq!(located.position.latitude(), 52.0, epsilon = 1e-9);
        assert_abs_diff_eq!(located.position.longitude(), -2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_range() {
        let store = two_point_store(None, None);
        let before = t0() - Duration::seconds(1);
        let after = t1() + Duration::seconds(1);
        assert_eq!(locate(&store, before), Err(GeoError::NotFound(before)));
        assert_eq!(locate(&store, after), Err(GeoError::NotFound(after)));
    }

    #[test]
    fn test_empty_store() {
        let store = TrackStore::default();
        assert_eq!(locate(&store, t0()), Err(GeoError::NotFound(t0())));
    }

    #[test]
    fn test_missing_elevation_is_zero() {
        let target = t0() + Duration::minutes(5);
        let store = two_point_store(Some(120.0), None);
        assert_eq!(locate(&store, target).unwrap().elevation, 0.0);
        let store = two_point_store(None, Some(120.0));
        assert_eq!(locate(&store, target).unwrap().elevation, 0.0);
    }

    #[test]
    fn test_duplicate_timestamps() {
        let store = TrackStore::build([Track::new(vec![
            TrackPoint::new(p(10.0, 10.0), None, t0()),
            TrackPoint::new(p(11.0, 11.0), Some(5.0), t1()),
            TrackPoint::new(p(12.0, 12.0), Some(9.0), t1()),
        ])]);
        // The earliest bracketing window wins.
        let located = locate_with(&Flat, &store, t1()).unwrap();
        assert_abs_diff_eq!(located.position.latitude(), 11.0, epsilon = 1e-12);
        assert_eq!(located.elevation, 0.0);

        // Only the zero-length window brackets t0 here.
        let store = TrackStore::build([Track::new(vec![
            TrackPoint::new(p(10.0, 10.0), None, t1()),
            TrackPoint::new(p(11.0, 11.0), Some(5.0), t0()),
            TrackPoint::new(p(12.0, 12.0), Some(9.0), t0()),
        ])]);
        let located = locate_with(&Flat, &store, t0()).unwrap();
        assert_eq!(located.position, p(11.0, 11.0));
        assert_eq!(located.elevation, 5.0);
    }

    #[test]
    fn test_flat_interpolation() {
        let store = TrackStore::build([Track::new(vec![
            TrackPoint::new(p(10.0, 20.0), Some(0.0), t0()),
            TrackPoint::new(p(20.0, 40.0), Some(10.0), t1()),
        ])]);
        let located = locate_with(&Flat, &store, t0() + Duration::minutes(3)).unwrap();
        assert_abs_diff_eq!(located.position.latitude(), 13.0, epsilon = 1e-12);
        assert_abs_diff_eq!(located.position.longitude(), 26.0, epsilon = 1e-12);
        assert_abs_diff_eq!(located.elevation, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_window_spans_tracks() {
        let first = Track::new(vec![TrackPoint::new(p(10.0, 0.0), Some(0.0), t0())]);
        let second = Track::new(vec![TrackPoint::new(p(20.0, 0.0), Some(100.0), t1())]);
        let store = TrackStore::build([first, second]);
        let located = locate_with(&Flat, &store, t0() + Duration::minutes(5)).unwrap();
        assert_abs_diff_eq!(located.position.latitude(), 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(located.elevation, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_window_never_matches() {
        // Tracks supplied newest first: the only window between them runs
        // backwards in time.
        let later = Track::new(vec![TrackPoint::new(p(20.0, 0.0), None, t1())]);
        let earlier = Track::new(vec![TrackPoint::new(p(10.0, 0.0), None, t0())]);
        let store = TrackStore::build([later, earlier]);
        let target = t0() + Duration::minutes(5);
        assert_eq!(locate_with(&Flat, &store, target), Err(GeoError::NotFound(target)));
        // The first point is its own window.
        assert!(locate_with(&Flat, &store, t1()).is_ok());
    }

    #[test]
    fn test_concurrent_locate() {
        let store = two_point_store(Some(0.0), Some(600.0));
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|n| {
                    let store = &store;
                    s.spawn(move || locate(store, t0() + Duration::minutes(n)).unwrap())
                })
                .collect();
            for (n, handle) in handles.into_iter().enumerate() {
                let located = handle.join().unwrap();
                #[allow(clippy::cast_precision_loss)]
                let expected = 60.0 * n as f64;
                assert_abs_diff_eq!(located.elevation, expected, epsilon = 1e-9);
            }
        });
    }
}
