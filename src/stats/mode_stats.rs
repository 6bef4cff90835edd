use std::collections::BTreeMap;

use crate::model::{Mode, Stop};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModeStats {
    /// Stops whose dominant mode is this mode.
    pub stop_count: usize,
    /// Routes of this mode at those stops. Routes of other modes are not counted.
    pub route_count: usize,
    pub share_of_stops: f64,
    pub routes_per_stop: f64,
}

/// Groups stops by dominant mode. Empty input gives an empty map.
pub fn compute_mode_stats<'a, I>(stops: I) -> BTreeMap<Mode, ModeStats>
where
    I: IntoIterator<Item = &'a Stop>,
{
    let mut stats: BTreeMap<Mode, ModeStats> = BTreeMap::new();
    let mut total_stops: usize = 0;
    for stop in stops {
        let mode = stop.dominant_mode();
        let entry = stats.entry(mode).or_default();
        entry.stop_count += 1;
        entry.route_count += stop.routes.iter().filter(|route| route.mode == mode).count();
        total_stops += 1;
    }

    // Every entry has at least one stop, so neither division is by zero
    for entry in stats.values_mut() {
        entry.share_of_stops = entry.stop_count as f64 / total_stops as f64;
        entry.routes_per_stop = entry.route_count as f64 / entry.stop_count as f64;
    }
    stats
}
