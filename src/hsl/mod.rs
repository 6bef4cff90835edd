//! Shapes of the HSL Digitransit GraphQL API and helpers to turn its
//! responses into model types. Nothing here performs I/O.

use thiserror::Error;
use tracing::{debug, warn};

mod config;
pub mod models;
pub mod queries;
pub use config::*;
use models::*;

use crate::{
    model::{Departure, NearbyStop},
    shared::{Coordinate, Distance},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("GraphQL error: {0}")]
    Graphql(String),
    #[error("Response is missing data")]
    MissingData,
    #[error("Stop id does not match any entry: {0}")]
    InvalidStopId(String),
}

impl<T> GraphqlResponse<T> {
    /// Unwraps the envelope. Any reported error fails the whole response.
    pub fn into_data(self) -> Result<T, self::Error> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|err| err.message).collect();
            return Err(Error::Graphql(messages.join("; ")));
        }
        self.data.ok_or(Error::MissingData)
    }
}

pub fn nearby_stops_request(
    coordinate: &Coordinate,
    radius: Distance,
) -> GraphqlRequest<NearbyStopsVariables> {
    GraphqlRequest {
        query: queries::NEARBY_STOPS,
        variables: NearbyStopsVariables {
            lat: coordinate.latitude,
            lon: coordinate.longitude,
            radius: radius.as_meters().max(0.0).round() as u32,
        },
    }
}

pub fn stop_times_request(
    stop_id: &str,
    service_day_start: i64,
    config: &Config,
) -> GraphqlRequest<StopTimesVariables> {
    GraphqlRequest {
        query: queries::STOP_TIMES,
        variables: StopTimesVariables {
            stop_id: stop_id.to_string(),
            start_time: service_day_start,
            time_range: config.time_range.as_seconds(),
            number_of_departures: config.number_of_departures,
        },
    }
}

impl StopsByRadiusData {
    /// Edges in API order. A missing connection is treated as no stops.
    pub fn into_edges(self) -> Vec<NearbyStop> {
        let edges: Vec<NearbyStop> = self
            .stops_by_radius
            .unwrap_or_default()
            .edges
            .into_iter()
            .map(NearbyStop::from)
            .collect();
        debug!("Received {} stop edges", edges.len());
        edges
    }
}

impl StopTimesData {
    /// Departures for the requested stop, skipping rows with unusable times.
    pub fn into_departures(self, stop_id: &str) -> Result<Vec<Departure>, self::Error> {
        let stop = self
            .stop
            .ok_or_else(|| Error::InvalidStopId(stop_id.to_string()))?;
        let total = stop.stoptimes_without_patterns.len();
        let departures: Vec<Departure> = stop
            .stoptimes_without_patterns
            .into_iter()
            .filter_map(|stop_time| match Departure::try_from(stop_time) {
                Ok(departure) => Some(departure),
                Err(err) => {
                    warn!("Skipping departure at {stop_id}: {err}");
                    None
                }
            })
            .collect();
        debug!(
            "Received {} departures for {stop_id} ({} skipped)",
            departures.len(),
            total - departures.len()
        );
        Ok(departures)
    }
}
