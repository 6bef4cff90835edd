//! Derived statistics over nearby stops and a stop's departures.
//!
//! Every function here is pure and synchronous. Results depend only on the
//! input, so callers are free to memoize them.

mod classify;
mod delay;
mod distance;
mod hourly;
mod mode_stats;
mod nearby;
mod normalize;

pub use classify::*;
pub use delay::*;
pub use distance::*;
pub use hourly::*;
pub use mode_stats::*;
pub use nearby::*;
pub use normalize::*;
