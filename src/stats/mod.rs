//! Dispatch outcome tallies, kept by a single actor.

pub mod client;
pub mod error;
pub mod messages;
pub mod service;
pub mod types;

pub use client::*;
pub use error::*;
pub use messages::*;
pub use service::*;
pub use types::*;
