use std::{collections::BTreeMap, time::Instant};

use tracing::debug;

use crate::{
    model::{Departure, RouteKey},
    shared::{HOURS_PER_DAY, Time},
};

/// Arrival counts for each display hour of a service day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyHistogram {
    buckets: [u32; HOURS_PER_DAY],
    folded: u32,
}

impl HourlyHistogram {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_buckets(buckets: [u32; HOURS_PER_DAY]) -> Self {
        Self { buckets, folded: 0 }
    }

    /// Counts one arrival in its display hour.
    /// Arrivals past midnight land on the early hours of the same day.
    pub fn record(&mut self, time: Time) {
        self.buckets[time.hour_of_day()] += 1;
        if time.is_next_day() {
            self.folded += 1;
        }
    }

    pub fn buckets(&self) -> &[u32; HOURS_PER_DAY] {
        &self.buckets
    }

    pub fn count(&self, hour: usize) -> u32 {
        self.buckets.get(hour).copied().unwrap_or(0)
    }

    /// How many of the recorded arrivals were scheduled past midnight and
    /// folded into the early hours.
    pub fn folded(&self) -> u32 {
        self.folded
    }

    pub fn max_value(&self) -> u32 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Earliest hour with the most arrivals, None when nothing was recorded.
    pub fn peak_hour(&self) -> Option<usize> {
        let max = self.max_value();
        if max == 0 {
            return None;
        }
        self.buckets.iter().position(|count| *count == max)
    }
}

/// `count / max_value`, 0 when the histogram is empty.
pub fn ratio(count: u32, max_value: u32) -> f64 {
    if max_value == 0 {
        0.0
    } else {
        count as f64 / max_value as f64
    }
}

/// Distribution of arrivals over the day.
/// Departures without a route are left out.
pub fn bucketize_hourly(departures: &[Departure]) -> HourlyHistogram {
    let mut histogram = HourlyHistogram::new();
    departures
        .iter()
        .filter(|departure| departure.route.is_some())
        .for_each(|departure| histogram.record(departure.scheduled_arrival));
    histogram
}

/// One histogram per route label, sorted by mode and then name.
/// Departures without a route are left out.
pub fn bucketize_hourly_by_route(departures: &[Departure]) -> BTreeMap<RouteKey, HourlyHistogram> {
    let now = Instant::now();
    let mut routes: BTreeMap<RouteKey, HourlyHistogram> = BTreeMap::new();
    for departure in departures {
        let Some(route) = &departure.route else {
            continue;
        };
        routes
            .entry(route.clone())
            .or_default()
            .record(departure.scheduled_arrival);
    }
    debug!(
        "Bucketized {} departures into {} routes in {:?}",
        departures.len(),
        routes.len(),
        now.elapsed()
    );
    routes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakHours {
    pub histogram: HourlyHistogram,
    pub max_value: u32,
    pub peak_hour: Option<usize>,
}

impl PeakHours {
    pub fn new(histogram: HourlyHistogram) -> Self {
        Self {
            max_value: histogram.max_value(),
            peak_hour: histogram.peak_hour(),
            histogram,
        }
    }

    pub fn from_departures(departures: &[Departure]) -> Self {
        Self::new(bucketize_hourly(departures))
    }

    /// Bar height for `hour` relative to the busiest hour.
    pub fn ratio(&self, hour: usize) -> f64 {
        ratio(self.histogram.count(hour), self.max_value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteHeatmap {
    pub rows: BTreeMap<RouteKey, HourlyHistogram>,
    /// Largest bucket across every route.
    pub max_value: u32,
}

impl RouteHeatmap {
    pub fn new(rows: BTreeMap<RouteKey, HourlyHistogram>) -> Self {
        let max_value = rows
            .values()
            .map(HourlyHistogram::max_value)
            .max()
            .unwrap_or(0);
        Self { rows, max_value }
    }

    pub fn from_departures(departures: &[Departure]) -> Self {
        Self::new(bucketize_hourly_by_route(departures))
    }

    /// Cell intensity relative to the busiest cell of the whole heatmap.
    pub fn ratio(&self, count: u32) -> f64 {
        ratio(count, self.max_value)
    }
}
