use transit_lens::{
    model::Departure,
    shared::{Delay, Time},
    stats::compute_delay_stats,
};

fn departure(delay: i32, realtime: bool) -> Departure {
    Departure {
        scheduled_arrival: Time::from_seconds(36_000),
        realtime_arrival: Time::from_seconds((36_000 + delay) as u32),
        delay: Delay::from_seconds(delay),
        realtime,
        service_day: 0,
        route: None,
    }
}

#[test]
fn no_realtime_is_none_test() {
    assert!(compute_delay_stats(&[]).is_none());
    let scheduled_only = vec![departure(120, false), departure(0, false)];
    assert!(compute_delay_stats(&scheduled_only).is_none());
}

#[test]
fn only_realtime_counts_test() {
    let departures = vec![
        departure(60, true),
        departure(-60, true),
        departure(600, false),
        departure(240, true),
    ];
    let stats = compute_delay_stats(&departures).unwrap();
    assert_eq!(stats.sample_count, 3);
    assert_eq!(stats.average, 80.0);
    assert_eq!(stats.max, Delay::from_seconds(240));
    assert_eq!(stats.on_time_count, 2);
    assert!((stats.on_time_ratio - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn on_time_boundary_test() {
    let departures = vec![
        departure(60, true),
        departure(61, true),
        departure(-60, true),
        departure(-61, true),
    ];
    let stats = compute_delay_stats(&departures).unwrap();
    assert_eq!(stats.on_time_count, 2);
    assert_eq!(stats.on_time_percent(), 50);
}

#[test]
fn all_early_test() {
    let departures = vec![departure(-30, true), departure(-90, true)];
    let stats = compute_delay_stats(&departures).unwrap();
    assert_eq!(stats.max, Delay::from_seconds(-30));
    assert_eq!(stats.average, -60.0);
    assert_eq!(stats.average_minutes(), -1);
}
