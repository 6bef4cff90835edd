use thiserror::Error;

mod departure;
mod mode;
mod route;
mod stop;
pub use departure::*;
pub use mode::*;
pub use route::*;
pub use stop::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    UnknownMode(#[from] UnknownMode),
    #[error("Route has no mode")]
    MissingMode,
    #[error("Route has no id")]
    MissingId,
    #[error("Arrival time out of range: {0}")]
    InvalidTime(i64),
}
