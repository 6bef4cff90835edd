use crate::{model::NearbyStop, shared::Distance};

/// Stops no further than `threshold`, in input order. The boundary is inclusive.
pub fn filter_by_distance(stops: &[NearbyStop], threshold: Distance) -> Vec<NearbyStop> {
    stops
        .iter()
        .filter(|stop| stop.distance <= threshold)
        .cloned()
        .collect()
}
