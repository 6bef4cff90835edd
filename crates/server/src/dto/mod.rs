mod analysis;
mod modes;
mod stop;

pub use analysis::*;
pub use modes::*;
pub use stop::*;
