use std::sync::Arc;
use std::time::Duration;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};
use crate::catalog::ScenarioCatalog;
use crate::transport::Transport;
use crate::virtual_user::{Pacing, VirtualUser};

/// The population of running virtual users.
///
/// Users share the catalog read-only and the transport handle; each gets its
/// own random source, seeded from `seed + user_id` when a seed is set. One
/// `watch` channel stops them all.
pub struct Swarm<T: Transport> {
    catalog: Arc<ScenarioCatalog>,
    transport: Arc<T>,
    pacing: Pacing,
    seed: Option<u64>,
    shutdown: watch::Sender<bool>,
    handles: Vec<JoinHandle<u64>>,
}

impl<T: Transport> Swarm<T> {
    pub fn new(
        catalog: Arc<ScenarioCatalog>,
        transport: Arc<T>,
        pacing: Pacing,
        seed: Option<u64>,
    ) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            catalog,
            transport,
            pacing,
            seed,
            shutdown,
            handles: Vec::new(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.handles.len()
    }

    /// Starts one more user and returns its id (1-based).
    pub fn spawn_user(&mut self) -> u64 {
        let id = self.handles.len() as u64 + 1;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id)),
            None => StdRng::from_entropy(),
        };

        let user = VirtualUser::new(
            id,
            Arc::clone(&self.catalog),
            Arc::clone(&self.transport),
            self.pacing,
            rng,
        );
        self.handles.push(tokio::spawn(user.run(self.shutdown.subscribe())));
        debug!(user_id = id, "Spawned virtual user");
        id
    }

    /// Spawns users one `spawn_interval` apart until `users` are running.
    /// The first user starts immediately.
    #[instrument(skip(self))]
    pub async fn ramp_up(&mut self, users: usize, spawn_interval: Duration) {
        let mut ticker = tokio::time::interval(spawn_interval);

        while self.user_count() < users {
            ticker.tick().await;
            self.spawn_user();
        }

        info!(users = self.user_count(), "Ramp-up complete");
    }

    /// Stops every user, wherever it is in its loop, and waits for them.
    /// Returns the total number of completed dispatches.
    #[instrument(skip(self), fields(users = self.handles.len()))]
    pub async fn shutdown(self) -> u64 {
        info!("Stopping virtual users");
        self.shutdown.send_replace(true);

        let mut purchases = 0;
        for handle in self.handles {
            match handle.await {
                Ok(count) => purchases += count,
                Err(e) => error!(error = ?e, "Virtual user task failed"),
            }
        }

        info!(purchases, "All virtual users stopped");
        purchases
    }
}
