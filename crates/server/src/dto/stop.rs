use serde::{Deserialize, Serialize};
use transit_lens::{
    model::{Mode, NearbyStop, Route},
    shared::Coordinate,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    pub id: String,
    pub short_name: String,
    pub long_name: Option<String>,
    pub mode: Mode,
    pub color: String,
}

impl RouteDto {
    pub fn from(route: &Route) -> Self {
        Self {
            id: route.id.to_string(),
            short_name: route.short_name.to_string(),
            long_name: route.long_name.as_deref().map(str::to_string),
            mode: route.mode,
            color: route.mode.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub coordinate: Coordinate,
    pub distance_m: i64,
    pub mode: Mode,
    pub routes: Vec<RouteDto>,
}

impl StopDto {
    pub fn from(nearby: &NearbyStop) -> Self {
        let stop = &nearby.stop;
        Self {
            id: stop.id.to_string(),
            name: stop.name.to_string(),
            code: stop.code.as_deref().map(str::to_string),
            coordinate: stop.coordinate,
            distance_m: nearby.distance.rounded_meters(),
            mode: stop.dominant_mode(),
            routes: stop.routes.iter().map(RouteDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopPageDto {
    pub stops: Vec<StopDto>,
    pub page: usize,
    pub total: usize,
    pub has_more: bool,
}

/// Marker on the map view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerDto {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub mode: Mode,
    pub color: String,
    pub distance_m: i64,
}

impl MarkerDto {
    pub fn from(nearby: &NearbyStop) -> Self {
        let mode = nearby.stop.dominant_mode();
        Self {
            id: nearby.stop.id.to_string(),
            name: nearby.stop.name.to_string(),
            coordinate: nearby.stop.coordinate,
            mode,
            color: mode.color().to_string(),
            distance_m: nearby.distance.rounded_meters(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDto {
    pub selected: Coordinate,
    pub detail_radius_m: f64,
    /// Every stop within the display radius.
    pub stops: Vec<MarkerDto>,
    /// Ids of the stops inside the detail radius.
    pub nearby: Vec<String>,
}
