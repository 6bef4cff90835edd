use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HslRoute {
    pub gtfs_id: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub mode: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HslStop {
    pub gtfs_id: String,
    pub name: String,
    pub code: Option<String>,
    pub desc: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub routes: Option<Vec<HslRoute>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HslStopNode {
    pub stop: HslStop,
    pub distance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HslStopEdge {
    pub node: HslStopNode,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HslStopConnection {
    #[serde(default)]
    pub edges: Vec<HslStopEdge>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StopsByRadiusData {
    pub stops_by_radius: Option<HslStopConnection>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HslPattern {
    pub route: Option<HslRoute>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HslTrip {
    pub pattern: Option<HslPattern>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HslStopTime {
    pub scheduled_arrival: i64,
    pub realtime_arrival: i64,
    pub arrival_delay: i32,
    pub realtime: bool,
    pub service_day: i64,
    pub trip: Option<HslTrip>,
}

impl HslStopTime {
    pub fn route(&self) -> Option<&HslRoute> {
        self.trip.as_ref()?.pattern.as_ref()?.route.as_ref()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HslStopWithTimes {
    #[serde(default)]
    pub stoptimes_without_patterns: Vec<HslStopTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopTimesData {
    pub stop: Option<HslStopWithTimes>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphqlError {
    pub message: String,
}

/// Standard GraphQL envelope. Either side may be present.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Serialize, Debug, Clone)]
pub struct GraphqlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct NearbyStopsVariables {
    pub lat: f64,
    pub lon: f64,
    pub radius: u32,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StopTimesVariables {
    pub stop_id: String,
    pub start_time: i64,
    pub time_range: u32,
    pub number_of_departures: u32,
}
