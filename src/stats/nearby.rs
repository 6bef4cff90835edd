use std::collections::BTreeSet;

use crate::{
    model::{Mode, NearbyStop, Stop},
    shared::name_contains,
};

pub const STOPS_PER_PAGE: usize = 10;

/// Search box and mode toggles of the stop list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopFilter {
    pub query: String,
    pub modes: BTreeSet<Mode>,
}

impl Default for StopFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            modes: Mode::ALL.into_iter().collect(),
        }
    }
}

impl StopFilter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.modes = modes.into_iter().collect();
        self
    }

    /// Selects `mode` if it was off, deselects it otherwise.
    pub fn toggle(&mut self, mode: Mode) {
        if !self.modes.remove(&mode) {
            self.modes.insert(mode);
        }
    }

    /// Name contains the query and at least one route has a selected mode.
    /// A stop without routes never matches.
    pub fn matches(&self, stop: &Stop) -> bool {
        name_contains(stop, &self.query)
            && stop
                .routes
                .iter()
                .any(|route| self.modes.contains(&route.mode))
    }
}

/// Stops matching `filter`, closest first. Equal distances keep input order.
pub fn nearby_stops(stops: &[NearbyStop], filter: &StopFilter) -> Vec<NearbyStop> {
    let mut matches: Vec<NearbyStop> = stops
        .iter()
        .filter(|stop| filter.matches(&stop.stop))
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.distance.as_meters().total_cmp(&b.distance.as_meters()));
    matches
}

/// The `page`th block of `STOPS_PER_PAGE` stops. Empty past the end.
pub fn page(stops: &[NearbyStop], page: usize) -> &[NearbyStop] {
    let start = page.saturating_mul(STOPS_PER_PAGE).min(stops.len());
    let end = start.saturating_add(STOPS_PER_PAGE).min(stops.len());
    &stops[start..end]
}

pub fn has_more(total: usize, page: usize) -> bool {
    page.saturating_add(1).saturating_mul(STOPS_PER_PAGE) < total
}
