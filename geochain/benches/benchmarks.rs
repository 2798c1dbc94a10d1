use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geochain::{link, locate, GeoPoint, PhotoId, PhotoPosition, Track, TrackPoint, TrackStore};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 10, 22, 8, 0, 0).unwrap()
}

/// A track heading north-east from Mt Washington, one fix per second.
fn synthetic_track(len: u32) -> Track {
    (0..len)
        .map(|n| {
            let step = f64::from(n) * 1e-5;
            TrackPoint::new(
                GeoPoint::new(44.270_5 + step, -71.303_25 + step).unwrap(),
                Some(1_900.0 + step),
                t0() + Duration::seconds(i64::from(n)),
            )
        })
        .collect()
}

fn track_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Track Locate");

    for len in [1_000, 10_000, 100_000] {
        let store = TrackStore::build([synthetic_track(len)]);
        // Worst case: target in the final window.
        let target = t0() + Duration::milliseconds(i64::from(len - 1) * 1_000 - 500);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(store, target), |b, (s, t)| {
            b.iter(|| locate(s, *t).unwrap())
        });
    }
}

fn chain_link(c: &mut Criterion) {
    let photos: Vec<PhotoPosition> = synthetic_track(1_000)
        .points
        .into_iter()
        .enumerate()
        .map(|(n, point)| {
            PhotoPosition::new(
                PhotoId::new(format!("{n}.jpg")),
                point.position,
                0.0,
                point.timestamp,
            )
        })
        .collect();

    c.bench_function("Chain Link 1000", |b| {
        b.iter_batched(
            || photos.clone(),
            |mut photos| link(&mut photos),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, track_locate, chain_link);
criterion_main!(benches);
