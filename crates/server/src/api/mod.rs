mod map;
mod modes;
mod near;
mod params;
mod stop;

pub use map::*;
pub use modes::*;
pub use near::*;
pub use stop::*;

use axum::{http::StatusCode, response::IntoResponse};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
