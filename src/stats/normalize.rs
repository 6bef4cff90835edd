use std::{collections::HashSet, time::Instant};

use tracing::debug;

use crate::{model::NearbyStop, shared::Coordinate};

/// Exact position of a stop, compared bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey(u64, u64);

impl From<&Coordinate> for PositionKey {
    fn from(value: &Coordinate) -> Self {
        // Adding 0.0 turns -0.0 into 0.0 so both land on the same key
        Self(
            (value.latitude + 0.0).to_bits(),
            (value.longitude + 0.0).to_bits(),
        )
    }
}

/// Collapses edges that share a position into one record.
///
/// The API returns one edge per platform and direction, and several of them can
/// sit on the same point. The first edge seen for a position wins and keeps its
/// distance and route list. Output follows first-seen order. Stops without
/// routes are kept with an empty list.
pub fn normalize_stops(edges: &[NearbyStop]) -> Vec<NearbyStop> {
    let now = Instant::now();
    let mut seen: HashSet<PositionKey> = HashSet::with_capacity(edges.len());
    let unique: Vec<NearbyStop> = edges
        .iter()
        .filter(|edge| seen.insert(PositionKey::from(&edge.stop.coordinate)))
        .cloned()
        .collect();
    debug!(
        "Normalized {} edges into {} stops in {:?}",
        edges.len(),
        unique.len(),
        now.elapsed()
    );
    unique
}
