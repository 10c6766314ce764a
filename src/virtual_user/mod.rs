//! One simulated shopper: think, buy, repeat.

pub mod pacing;
pub mod user;

pub use pacing::*;
pub use user::*;
