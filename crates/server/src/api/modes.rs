use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use transit_lens::stats;

use crate::{api::params, dto::ModeSummaryDto, state::AppState};

/// Stop types around a point. An area without stops gives an empty list.
pub async fn modes(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let coordinate = params::coordinate(&params)?;
    let radius = state.client.config().detail_radius;
    let edges = state
        .client
        .stops_by_radius(&coordinate, radius)
        .await
        .map_err(|err| {
            error!("Failed to fetch stops for mode stats: {err}");
            err.status()
        })?;

    let stops = stats::normalize_stops(&edges);
    let summary = stats::compute_mode_stats(stops.iter().map(|stop| &stop.stop));
    Ok(Json(ModeSummaryDto::from(&summary)).into_response())
}
