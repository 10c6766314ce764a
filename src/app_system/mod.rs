//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod swarm;
pub mod telemetry;

pub use error::*;
pub use load_test::*;
pub use swarm::*;
pub use telemetry::*;
