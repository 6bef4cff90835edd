use transit_lens::{
    model::{Departure, Mode, RouteKey},
    shared::{Delay, Time},
    stats::{
        HourlyHistogram, PeakHours, RouteHeatmap, bucketize_hourly, bucketize_hourly_by_route,
    },
};

fn departure(scheduled: u32, route: Option<(Mode, &str)>) -> Departure {
    Departure {
        scheduled_arrival: Time::from_seconds(scheduled),
        realtime_arrival: Time::from_seconds(scheduled),
        delay: Delay::from_seconds(0),
        realtime: false,
        service_day: 0,
        route: route.map(|(mode, name)| RouteKey::new(mode, name)),
    }
}

#[test]
fn bucket_sum_test() {
    let departures: Vec<_> = (0..200u32)
        .map(|i| departure(i * 997, Some((Mode::Bus, "55"))))
        .collect();
    let histogram = bucketize_hourly(&departures);
    assert_eq!(histogram.buckets().iter().sum::<u32>() as usize, departures.len());
}

#[test]
fn midnight_folding_test() {
    let histogram = bucketize_hourly(&[departure(90_000, Some((Mode::Bus, "55")))]);
    assert_eq!(histogram.count(1), 1);
    assert_eq!(histogram.folded(), 1);
    assert_eq!(Time::from_seconds(90_000).hour_of_day(), 1);
    assert_eq!(Time::from_seconds(90_000).service_hour(), 25);
}

#[test]
fn missing_route_is_skipped_test() {
    let departures = vec![
        departure(3_600, Some((Mode::Tram, "4"))),
        departure(3_600, None),
        departure(7_200, None),
    ];
    let histogram = bucketize_hourly(&departures);
    assert_eq!(histogram.buckets().iter().sum::<u32>(), 1);
    assert_eq!(histogram.count(2), 0);
    assert!(bucketize_hourly_by_route(&departures).len() == 1);
}

#[test]
fn grouped_order_test() {
    let departures = vec![
        departure(0, Some((Mode::Tram, "9"))),
        departure(0, Some((Mode::Tram, "10"))),
        departure(0, Some((Mode::Bus, "550"))),
        departure(0, Some((Mode::Bus, "23N"))),
        departure(0, Some((Mode::Bus, "23n"))),
        departure(0, Some((Mode::Ferry, "19"))),
        departure(0, Some((Mode::Bus, "550"))),
    ];
    let names: Vec<_> = bucketize_hourly_by_route(&departures)
        .keys()
        .map(|key| format!("{}-{}", key.mode, key.short_name))
        .collect();
    assert_eq!(
        names,
        vec!["BUS-23n", "BUS-23N", "BUS-550", "FERRY-19", "TRAM-10", "TRAM-9"]
    );
}

#[test]
fn grouped_counts_test() {
    let departures = vec![
        departure(8 * 3_600, Some((Mode::Bus, "55"))),
        departure(8 * 3_600 + 900, Some((Mode::Bus, "55"))),
        departure(9 * 3_600, Some((Mode::Bus, "55"))),
        departure(8 * 3_600, Some((Mode::Tram, "4"))),
    ];
    let routes = bucketize_hourly_by_route(&departures);
    let bus = &routes[&RouteKey::new(Mode::Bus, "55")];
    assert_eq!(bus.count(8), 2);
    assert_eq!(bus.count(9), 1);
    let tram = &routes[&RouteKey::new(Mode::Tram, "4")];
    assert_eq!(tram.buckets().iter().sum::<u32>(), 1);

    let heatmap = RouteHeatmap::new(routes);
    assert_eq!(heatmap.max_value, 2);
    assert_eq!(heatmap.ratio(1), 0.5);
}

#[test]
fn peak_hour_test() {
    let mut buckets = [0u32; 24];
    buckets[7] = 12;
    buckets[16] = 12;
    buckets[12] = 3;
    let peak = PeakHours::new(HourlyHistogram::from_buckets(buckets));
    assert_eq!(peak.max_value, 12);
    assert_eq!(peak.peak_hour, Some(7));
    assert_eq!(peak.ratio(12), 0.25);
}

#[test]
fn empty_histogram_test() {
    let peak = PeakHours::from_departures(&[]);
    assert_eq!(peak.max_value, 0);
    assert_eq!(peak.peak_hour, None);
    assert_eq!(peak.ratio(8), 0.0);

    let heatmap = RouteHeatmap::from_departures(&[]);
    assert!(heatmap.rows.is_empty());
    assert_eq!(heatmap.max_value, 0);
    assert_eq!(heatmap.ratio(0), 0.0);
}
