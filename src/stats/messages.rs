use tokio::sync::oneshot;
use super::error::StatsError;
use super::types::{CategoryStats, DispatchOutcome, StatsSnapshot};

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages accepted by [`StatsService`](super::StatsService).
#[derive(Debug)]
pub enum StatsRequest {
    /// Fire-and-forget; no reply.
    Record {
        outcome: DispatchOutcome,
    },
    Snapshot {
        respond_to: ServiceResponse<StatsSnapshot, StatsError>,
    },
    CategoryStats {
        categoria: i32,
        respond_to: ServiceResponse<Option<CategoryStats>, StatsError>,
    },
    Shutdown,
}
