use crate::{
    model::Departure,
    shared::{Delay, Duration, time::round_half_up},
};

/// Arrivals this close to the schedule count as on time.
pub const ON_TIME_TOLERANCE: Duration = Duration::from_minutes(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayStats {
    /// Mean delay in seconds.
    pub average: f64,
    pub max: Delay,
    pub on_time_count: usize,
    pub on_time_ratio: f64,
    pub sample_count: usize,
}

impl DelayStats {
    pub fn average_minutes(&self) -> i64 {
        round_half_up(self.average / 60.0)
    }

    pub fn max_minutes(&self) -> i64 {
        self.max.as_rounded_minutes()
    }

    pub fn on_time_percent(&self) -> i64 {
        round_half_up(self.on_time_ratio * 100.0)
    }
}

/// Delay statistics over the departures that carry realtime data.
/// None when no departure does, so there is nothing to average.
pub fn compute_delay_stats(departures: &[Departure]) -> Option<DelayStats> {
    let delays: Vec<Delay> = departures
        .iter()
        .filter(|departure| departure.realtime)
        .map(|departure| departure.delay)
        .collect();

    let max = delays.iter().copied().max()?;
    let sample_count = delays.len();
    let total: i64 = delays.iter().map(|delay| delay.as_seconds() as i64).sum();
    let on_time_count = delays
        .iter()
        .filter(|delay| delay.is_within(ON_TIME_TOLERANCE))
        .count();

    Some(DelayStats {
        average: total as f64 / sample_count as f64,
        max,
        on_time_count,
        on_time_ratio: on_time_count as f64 / sample_count as f64,
        sample_count,
    })
}
