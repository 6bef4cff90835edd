use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use transit_lens::stats::{self, StopFilter};

use crate::{
    api::params,
    dto::{StopDto, StopPageDto},
    state::AppState,
};

/// Stop list around a point: `?lat&lon[&q][&modes][&page]`.
pub async fn near(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let coordinate = params::coordinate(&params)?;
    let page = params::page(&params)?;
    let filter = StopFilter::new()
        .with_query(params.get("q").cloned().unwrap_or_default())
        .with_modes(params::modes(&params)?);

    let config = state.client.config();
    let edges = state
        .client
        .stops_by_radius(&coordinate, config.detail_radius)
        .await
        .map_err(|err| {
            error!("Failed to fetch nearby stops: {err}");
            err.status()
        })?;

    let stops = stats::normalize_stops(&edges);
    let stops = stats::filter_by_distance(&stops, config.detail_radius);
    let matches = stats::nearby_stops(&stops, &filter);
    let result = StopPageDto {
        stops: stats::page(&matches, page).iter().map(StopDto::from).collect(),
        page,
        total: matches.len(),
        has_more: stats::has_more(matches.len(), page),
    };
    Ok(Json(result).into_response())
}
