use criterion::{Criterion, criterion_group, criterion_main};
use std::{hint::black_box, time::Duration};
use transit_lens::{
    model::{Departure, Mode, NearbyStop, Route, RouteKey, Stop},
    shared::{Coordinate, DETAIL_RADIUS, Delay, Distance, HELSINKI_CENTER, Time},
    stats::{
        StopFilter, bucketize_hourly_by_route, compute_delay_stats, compute_mode_stats,
        filter_by_distance, nearby_stops, normalize_stops,
    },
};

fn synthetic_stops(count: usize) -> Vec<NearbyStop> {
    (0..count)
        .map(|i| {
            // Every third stop shares a position with the one before it
            let slot = i - i / 3;
            let coordinate = Coordinate::new(
                HELSINKI_CENTER.latitude + slot as f64 * 1e-5,
                HELSINKI_CENTER.longitude,
            );
            let routes: Vec<Route> = (0..i % 7)
                .map(|r| Route {
                    id: format!("HSL:{i}:{r}").into(),
                    short_name: format!("{r}").into(),
                    long_name: None,
                    mode: Mode::ALL[(i + r) % Mode::ALL.len()],
                })
                .collect();
            NearbyStop {
                stop: Stop {
                    id: format!("HSL:{i}").into(),
                    name: format!("Stop {i}").into(),
                    normalized_name: format!("stop {i}").into(),
                    coordinate,
                    routes: routes.into(),
                    ..Default::default()
                },
                distance: Distance::from_meters((i * 7 % 5000) as f64),
            }
        })
        .collect()
}

fn synthetic_departures(count: usize) -> Vec<Departure> {
    (0..count)
        .map(|i| {
            let scheduled = Time::from_seconds(((i * 97) % 100_000) as u32);
            let delay = Delay::from_seconds((i % 400) as i32 - 100);
            Departure {
                scheduled_arrival: scheduled,
                realtime_arrival: scheduled,
                delay,
                realtime: i % 4 != 0,
                service_day: 0,
                route: Some(RouteKey::new(
                    Mode::ALL[i % Mode::ALL.len()],
                    format!("{}", i % 40),
                )),
            }
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let stops = synthetic_stops(5_000);
    let departures = synthetic_departures(20_000);
    let filter = StopFilter::new().with_query("stop 1");

    let mut group = c.benchmark_group("Stats");
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Normalize and filter", |b| {
        b.iter(|| {
            let unique = normalize_stops(black_box(&stops));
            black_box(filter_by_distance(&unique, DETAIL_RADIUS))
        })
    });

    group.bench_function("Mode stats", |b| {
        b.iter(|| black_box(compute_mode_stats(stops.iter().map(|stop| &stop.stop))))
    });

    group.bench_function("Nearby listing", |b| {
        b.iter(|| black_box(nearby_stops(black_box(&stops), &filter)))
    });

    group.bench_function("Route heatmap", |b| {
        b.iter(|| black_box(bucketize_hourly_by_route(black_box(&departures))))
    });

    group.bench_function("Delay stats", |b| {
        b.iter(|| black_box(compute_delay_stats(black_box(&departures))))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
