use transit_lens::{
    model::{Mode, Route, Stop},
    stats::compute_mode_stats,
};

fn stop(modes: &[Mode]) -> Stop {
    let routes: Vec<Route> = modes
        .iter()
        .enumerate()
        .map(|(i, mode)| Route {
            id: format!("HSL:{i}").into(),
            short_name: i.to_string().into(),
            long_name: None,
            mode: *mode,
        })
        .collect();
    Stop {
        routes: routes.into(),
        ..Default::default()
    }
}

#[test]
fn empty_is_empty_test() {
    assert!(compute_mode_stats(&Vec::<Stop>::new()).is_empty());
}

#[test]
fn counts_dominant_routes_only_test() {
    let stops = vec![
        stop(&[Mode::Bus, Mode::Bus, Mode::Tram]),
        stop(&[Mode::Bus]),
        stop(&[Mode::Tram, Mode::Tram]),
        stop(&[Mode::Rail]),
    ];
    let stats = compute_mode_stats(&stops);

    let bus = stats[&Mode::Bus];
    assert_eq!(bus.stop_count, 2);
    assert_eq!(bus.route_count, 3);
    assert_eq!(bus.share_of_stops, 0.5);
    assert_eq!(bus.routes_per_stop, 1.5);

    let tram = stats[&Mode::Tram];
    assert_eq!(tram.stop_count, 1);
    assert_eq!(tram.route_count, 2);
    assert_eq!(tram.share_of_stops, 0.25);

    assert!(!stats.contains_key(&Mode::Ferry));
}

#[test]
fn shares_sum_to_one_test() {
    let stops = vec![
        stop(&[Mode::Bus]),
        stop(&[Mode::Tram]),
        stop(&[Mode::Rail]),
        stop(&[Mode::Subway, Mode::Bus]),
        stop(&[Mode::Ferry]),
        stop(&[]),
        stop(&[Mode::Tram, Mode::Tram, Mode::Bus]),
    ];
    let total: f64 = compute_mode_stats(&stops)
        .values()
        .map(|entry| entry.share_of_stops)
        .sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn routeless_stop_counts_as_bus_test() {
    let stats = compute_mode_stats(&[stop(&[])]);
    let bus = stats[&Mode::Bus];
    assert_eq!(bus.stop_count, 1);
    assert_eq!(bus.route_count, 0);
    assert_eq!(bus.routes_per_stop, 0.0);
}
