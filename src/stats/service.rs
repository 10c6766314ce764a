use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use super::client::StatsClient;
use super::error::StatsError;
use super::messages::{ServiceResponse, StatsRequest};
use super::types::{CategoryStats, DispatchOutcome, StatsSnapshot};

/// Owns the dispatch tallies. Transports report into it, the system reads a
/// snapshot out of it at shutdown.
pub struct StatsService {
    receiver: mpsc::Receiver<StatsRequest>,
    snapshot: StatsSnapshot,
}

impl StatsService {
    pub fn new(buffer_size: usize) -> (Self, StatsClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            snapshot: StatsSnapshot::default(),
        };
        (service, StatsClient::new(sender))
    }

    /// Runs until a `Shutdown` message arrives or every client is dropped.
    #[instrument(name = "stats_service", skip(self))]
    pub async fn run(mut self) {
        info!("StatsService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StatsRequest::Record { outcome } => {
                    self.handle_record(outcome);
                }
                StatsRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                StatsRequest::CategoryStats { categoria, respond_to } => {
                    self.handle_category_stats(categoria, respond_to);
                }
                StatsRequest::Shutdown => {
                    info!("StatsService shutting down");
                    break;
                }
            }
        }

        info!(dispatched = self.snapshot.dispatched(), "StatsService stopped");
    }

    fn handle_record(&mut self, outcome: DispatchOutcome) {
        if !outcome.is_success() {
            warn!(categoria = outcome.categoria, status = ?outcome.status, "Recorded failed dispatch");
        }
        self.snapshot
            .per_category
            .entry(outcome.categoria)
            .or_default()
            .record(&outcome);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_snapshot(&self, respond_to: ServiceResponse<StatsSnapshot, StatsError>) {
        debug!("Processing snapshot request");
        let _ = respond_to.send(Ok(self.snapshot.clone()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_category_stats(
        &self,
        categoria: i32,
        respond_to: ServiceResponse<Option<CategoryStats>, StatsError>,
    ) {
        debug!("Processing category_stats request");
        let stats = self.snapshot.per_category.get(&categoria).cloned();
        let _ = respond_to.send(Ok(stats));
    }
}
