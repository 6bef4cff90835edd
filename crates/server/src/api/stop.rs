use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::error;
use transit_lens::{
    shared::service_day_start,
    stats::{self, PeakHours, RouteHeatmap},
};

use crate::{
    dto::{AnalysisDto, DelayStatsDto, HeatmapDto, PeakHoursDto},
    state::AppState,
};

/// Delay statistics, peak hours and route heatmap for today's service day.
pub async fn analysis(
    Path(stop_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let now = Utc::now().with_timezone(&state.client.config().time_zone);
    let service_day = service_day_start(&now).ok_or_else(|| {
        error!("Failed to resolve midnight for {now}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let departures = state
        .client
        .departures(&stop_id, service_day)
        .await
        .map_err(|err| {
            error!("Failed to fetch departures for {stop_id}: {err}");
            err.status()
        })?;

    let result = AnalysisDto {
        delays: stats::compute_delay_stats(&departures)
            .as_ref()
            .map(DelayStatsDto::from),
        peak_hours: PeakHoursDto::from(&PeakHours::from_departures(&departures)),
        heatmap: HeatmapDto::from(&RouteHeatmap::from_departures(&departures)),
        stop_id,
        service_day,
    };
    Ok(Json(result).into_response())
}
