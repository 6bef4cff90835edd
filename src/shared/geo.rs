use std::{cmp, fmt::Display};

use serde::{Deserialize, Serialize};

/// Radius used for the map view around a selected point.
pub const DISPLAY_RADIUS: Distance = Distance::from_meters(5_000.0);
/// Radius used for the stop list, mode statistics and the detail circle.
pub const DETAIL_RADIUS: Distance = Distance::from_meters(500.0);

pub const HELSINKI_CENTER: Coordinate = Coordinate::new(60.1699, 24.9384);
pub const HELSINKI_BOUNDS: Bounds = Bounds {
    south: 60.1,
    north: 60.3,
    west: 24.8,
    east: 25.1,
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    /// Whole meters, rounded the way the stop cards show them.
    pub fn rounded_meters(&self) -> i64 {
        (self.0 + 0.5).floor() as i64
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Axis aligned latitude/longitude box. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Bounds {
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.latitude >= self.south
            && coordinate.latitude <= self.north
            && coordinate.longitude >= self.west
            && coordinate.longitude <= self.east
    }
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_meters(500.0);
    assert!(dist_a > dist_b)
}

#[test]
fn rounded_meters_test() {
    assert_eq!(Distance::from_meters(120.4).rounded_meters(), 120);
    assert_eq!(Distance::from_meters(120.5).rounded_meters(), 121);
}
