pub mod hsl;
pub mod model;
pub mod shared;
pub mod stats;

pub mod prelude {
    pub use crate::hsl::{self, Config};
    pub use crate::model::*;
    pub use crate::shared::*;
    pub use crate::stats::*;
}
