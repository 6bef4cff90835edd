use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use transit_lens::{model::Mode, stats::ModeStats};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeStatsDto {
    pub mode: Mode,
    pub color: String,
    pub stop_count: usize,
    pub route_count: usize,
    pub share_of_stops: f64,
    pub routes_per_stop: f64,
}

impl ModeStatsDto {
    pub fn from(mode: Mode, stats: &ModeStats) -> Self {
        Self {
            mode,
            color: mode.color().to_string(),
            stop_count: stats.stop_count,
            route_count: stats.route_count,
            share_of_stops: stats.share_of_stops,
            routes_per_stop: stats.routes_per_stop,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeSummaryDto {
    pub total_stops: usize,
    pub modes: Vec<ModeStatsDto>,
}

impl ModeSummaryDto {
    pub fn from(stats: &BTreeMap<Mode, ModeStats>) -> Self {
        Self {
            total_stops: stats.values().map(|entry| entry.stop_count).sum(),
            modes: stats
                .iter()
                .map(|(mode, entry)| ModeStatsDto::from(*mode, entry))
                .collect(),
        }
    }
}
