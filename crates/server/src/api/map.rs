use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use transit_lens::stats;

use crate::{
    api::params,
    dto::{MapDto, MarkerDto},
    state::AppState,
};

/// Map markers within the display radius, plus which of them fall inside the
/// detail radius.
pub async fn map(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let coordinate = params::coordinate(&params)?;
    let config = state.client.config();
    let edges = state
        .client
        .stops_by_radius(&coordinate, config.display_radius)
        .await
        .map_err(|err| {
            error!("Failed to fetch map stops: {err}");
            err.status()
        })?;

    let stops = stats::normalize_stops(&edges);
    let nearby = stats::filter_by_distance(&stops, config.detail_radius)
        .into_iter()
        .map(|stop| stop.stop.id.to_string())
        .collect();
    let result = MapDto {
        selected: coordinate,
        detail_radius_m: config.detail_radius.as_meters(),
        stops: stops.iter().map(MarkerDto::from).collect(),
        nearby,
    };
    Ok(Json(result).into_response())
}
