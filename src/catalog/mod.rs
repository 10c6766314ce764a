//! Weighted purchase scenarios and the built-in Black Friday mix.

mod black_friday;
pub mod weighted;
pub mod error;

pub use weighted::*;
pub use error::*;
