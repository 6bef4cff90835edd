use serde::{Deserialize, Serialize};
use transit_lens::{
    model::Mode,
    shared::HOURS_PER_DAY,
    stats::{DelayStats, PeakHours, RouteHeatmap},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayStatsDto {
    pub average_seconds: f64,
    pub max_seconds: i32,
    pub average_minutes: i64,
    pub max_minutes: i64,
    pub on_time_count: usize,
    pub on_time_percent: i64,
    pub sample_count: usize,
}

impl DelayStatsDto {
    pub fn from(stats: &DelayStats) -> Self {
        Self {
            average_seconds: stats.average,
            max_seconds: stats.max.as_seconds(),
            average_minutes: stats.average_minutes(),
            max_minutes: stats.max_minutes(),
            on_time_count: stats.on_time_count,
            on_time_percent: stats.on_time_percent(),
            sample_count: stats.sample_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourDto {
    pub hour: usize,
    pub count: u32,
    pub ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakHoursDto {
    pub hours: Vec<HourDto>,
    pub max_value: u32,
    pub peak_hour: Option<usize>,
    pub past_midnight: u32,
}

impl PeakHoursDto {
    pub fn from(peak: &PeakHours) -> Self {
        let hours = (0..HOURS_PER_DAY)
            .map(|hour| HourDto {
                hour,
                count: peak.histogram.count(hour),
                ratio: peak.ratio(hour),
            })
            .collect();
        Self {
            hours,
            max_value: peak.max_value,
            peak_hour: peak.peak_hour,
            past_midnight: peak.histogram.folded(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapRowDto {
    pub mode: Mode,
    pub route_name: String,
    pub color: String,
    pub hourly_frequency: Vec<u32>,
    pub intensity: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapDto {
    pub rows: Vec<HeatmapRowDto>,
    pub max_value: u32,
}

impl HeatmapDto {
    pub fn from(heatmap: &RouteHeatmap) -> Self {
        let rows = heatmap
            .rows
            .iter()
            .map(|(key, histogram)| HeatmapRowDto {
                mode: key.mode,
                route_name: key.short_name.to_string(),
                color: key.mode.color().to_string(),
                hourly_frequency: histogram.buckets().to_vec(),
                intensity: histogram
                    .buckets()
                    .iter()
                    .map(|count| heatmap.ratio(*count))
                    .collect(),
            })
            .collect();
        Self {
            rows,
            max_value: heatmap.max_value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDto {
    pub stop_id: String,
    pub service_day: i64,
    /// Null when no departure had realtime data.
    pub delays: Option<DelayStatsDto>,
    pub peak_hours: PeakHoursDto,
    pub heatmap: HeatmapDto,
}
