use chrono::{DateTime, Duration, Utc};
use num_traits::Float;

/// Returns the value `fraction` of the way from `start` to `end`.
pub fn lerp<T>(start: T, end: T, fraction: T) -> T
where
    T: Float,
{
    start + (end - start) * fraction
}

/// Returns where `target` falls between `start` and `end`, as a
/// fraction of the elapsed seconds.
///
/// `start` and `end` must differ.
pub fn time_fraction(start: DateTime<Utc>, end: DateTime<Utc>, target: DateTime<Utc>) -> f64 {
    seconds(target - start) / seconds(end - start)
}

fn seconds(delta: Duration) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let whole = delta.num_seconds() as f64;
    whole + f64::from(delta.subsec_nanos()) * 1e-9
}
