use axum::http::StatusCode;
use thiserror::Error;
use transit_lens::hsl;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to HSL failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("HSL returned status {0}")]
    UpstreamStatus(StatusCode),
    #[error(transparent)]
    Hsl(#[from] hsl::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Hsl(hsl::Error::InvalidStopId(_)) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::UpstreamStatus(_) | ApiError::Hsl(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}
