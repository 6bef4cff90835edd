use std::sync::Arc;

use tracing::warn;

use crate::{
    hsl::models::{HslStop, HslStopEdge},
    model::{Mode, Route},
    shared::{Coordinate, Distance, Identifiable},
    stats,
};

#[derive(Debug, Default, Clone)]
pub struct Stop {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub code: Option<Arc<str>>,
    pub desc: Option<Arc<str>>,
    pub coordinate: Coordinate,
    pub routes: Box<[Route]>,
}

impl Stop {
    /// Most common mode among the routes, `Mode::FALLBACK` for a stop without routes.
    pub fn dominant_mode(&self) -> Mode {
        stats::dominant_mode(&self.routes, Mode::FALLBACK)
    }
}

impl Identifiable for Stop {
    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl From<HslStop> for Stop {
    fn from(value: HslStop) -> Self {
        let stop_id = value.gtfs_id;
        let routes: Box<[Route]> = value
            .routes
            .unwrap_or_default()
            .into_iter()
            .filter_map(|route| match Route::try_from(route) {
                Ok(route) => Some(route),
                Err(err) => {
                    warn!("Dropping route at stop {stop_id}: {err}");
                    None
                }
            })
            .collect();

        Self {
            id: stop_id.as_str().into(),
            name: value.name.clone().into(),
            normalized_name: value.name.to_lowercase().into(),
            code: value.code.map(Into::into),
            desc: value.desc.map(Into::into),
            coordinate: Coordinate::new(value.lat, value.lon),
            routes,
        }
    }
}

/// A stop together with its distance from the query origin.
/// Only valid for the query that produced it.
#[derive(Debug, Default, Clone)]
pub struct NearbyStop {
    pub stop: Stop,
    pub distance: Distance,
}

impl From<HslStopEdge> for NearbyStop {
    fn from(value: HslStopEdge) -> Self {
        Self {
            distance: Distance::from_meters(value.node.distance),
            stop: value.node.stop.into(),
        }
    }
}
