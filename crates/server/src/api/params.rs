use std::collections::HashMap;

use axum::http::StatusCode;
use tracing::error;
use transit_lens::{
    model::Mode,
    shared::{Coordinate, HELSINKI_BOUNDS},
};

/// Reads `lat` and `lon`. Points outside the HSL area are rejected.
pub(crate) fn coordinate(params: &HashMap<String, String>) -> Result<Coordinate, StatusCode> {
    let latitude: f64 = number(params, "lat")?;
    let longitude: f64 = number(params, "lon")?;
    let coordinate = Coordinate::new(latitude, longitude);
    if !HELSINKI_BOUNDS.contains(&coordinate) {
        error!("Coordinate {coordinate} is outside the service area");
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(coordinate)
}

/// Comma separated list such as `BUS,TRAM`. Missing means every mode.
pub(crate) fn modes(params: &HashMap<String, String>) -> Result<Vec<Mode>, StatusCode> {
    match params.get("modes") {
        Some(value) if !value.is_empty() => value
            .split(',')
            .map(|mode| {
                mode.trim().to_uppercase().parse::<Mode>().map_err(|err| {
                    error!("Failed to parse mode: {err}");
                    StatusCode::BAD_REQUEST
                })
            })
            .collect(),
        Some(_) => Ok(Vec::new()),
        None => Ok(Mode::ALL.to_vec()),
    }
}

pub(crate) fn page(params: &HashMap<String, String>) -> Result<usize, StatusCode> {
    match params.get("page") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(0),
    }
}

fn number(params: &HashMap<String, String>, key: &str) -> Result<f64, StatusCode> {
    let value: f64 = params
        .get(key)
        .ok_or(StatusCode::BAD_REQUEST)?
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

#[cfg(test)]
fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn coordinate_test() {
    let params = query(&[("lat", "60.1699"), ("lon", "24.9384")]);
    assert_eq!(coordinate(&params), Ok(Coordinate::new(60.1699, 24.9384)));
}

#[test]
fn coordinate_out_of_bounds_test() {
    let tampere = query(&[("lat", "61.4978"), ("lon", "23.7610")]);
    assert_eq!(coordinate(&tampere), Err(StatusCode::BAD_REQUEST));
    let missing = query(&[("lat", "60.1699")]);
    assert_eq!(coordinate(&missing), Err(StatusCode::BAD_REQUEST));
    let not_finite = query(&[("lat", "NaN"), ("lon", "24.9384")]);
    assert_eq!(coordinate(&not_finite), Err(StatusCode::BAD_REQUEST));
}

#[test]
fn modes_test() {
    assert_eq!(modes(&query(&[])), Ok(Mode::ALL.to_vec()));
    assert_eq!(modes(&query(&[("modes", "")])), Ok(Vec::new()));
    assert_eq!(
        modes(&query(&[("modes", "bus, Tram")])),
        Ok(vec![Mode::Bus, Mode::Tram])
    );
    assert_eq!(
        modes(&query(&[("modes", "BUS,AIRPLANE")])),
        Err(StatusCode::BAD_REQUEST)
    );
}

#[test]
fn page_test() {
    assert_eq!(page(&query(&[])), Ok(0));
    assert_eq!(page(&query(&[("page", "3")])), Ok(3));
    assert_eq!(page(&query(&[("page", "-1")])), Err(StatusCode::BAD_REQUEST));
}
