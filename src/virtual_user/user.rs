use std::sync::Arc;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tracing::{debug, instrument, trace};
use crate::catalog::ScenarioCatalog;
use crate::domain::PurchaseRequest;
use crate::transport::Transport;
use super::pacing::Pacing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserState {
    /// Waiting out a pause before the next purchase.
    Thinking,
    /// Building and dispatching one purchase.
    Purchasing,
}

/// A simulated shopper. Shares only the read-only catalog and the transport
/// handle with other users; its random source is its own.
pub struct VirtualUser<T: Transport> {
    id: u64,
    catalog: Arc<ScenarioCatalog>,
    transport: Arc<T>,
    pacing: Pacing,
    rng: StdRng,
    state: UserState,
    purchases: u64,
}

impl<T: Transport> VirtualUser<T> {
    pub fn new(
        id: u64,
        catalog: Arc<ScenarioCatalog>,
        transport: Arc<T>,
        pacing: Pacing,
        rng: StdRng,
    ) -> Self {
        Self {
            id,
            catalog,
            transport,
            pacing,
            rng,
            state: UserState::Thinking,
            purchases: 0,
        }
    }

    /// Picks a weighted scenario and builds a fresh request from it.
    pub fn next_purchase(&mut self) -> PurchaseRequest {
        let scenario = self.catalog.select(&mut self.rng);
        scenario.synthesize(&mut self.rng)
    }

    /// Loops think -> purchase until `shutdown` flips to `true` or its sender
    /// is dropped. Either state can be interrupted. Returns the number of
    /// completed dispatches.
    #[instrument(name = "virtual_user", skip_all, fields(user_id = self.id))]
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> u64 {
        debug!("Virtual user started");

        loop {
            self.state = UserState::Thinking;
            let pause = self.pacing.next_pause(&mut self.rng);
            trace!(state = ?self.state, pause_ms = pause.as_millis() as u64, "Thinking");
            tokio::select! {
                _ = tokio::time::sleep(pause) => {}
                _ = stopped(&mut shutdown) => break,
            }

            self.state = UserState::Purchasing;
            let request = self.next_purchase();
            trace!(
                state = ?self.state,
                categoria = request.categoria,
                producto_id = %request.producto_id,
                "Purchasing"
            );
            let dispatched = tokio::select! {
                _ = self.transport.dispatch(request) => true,
                _ = stopped(&mut shutdown) => false,
            };
            if !dispatched {
                break;
            }
            self.purchases += 1;
        }

        debug!(purchases = self.purchases, "Virtual user stopped");
        self.purchases
    }
}

async fn stopped(shutdown: &mut watch::Receiver<bool>) {
    // A dropped sender also ends the run.
    let _ = shutdown.wait_for(|&stop| stop).await;
}
