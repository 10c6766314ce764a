use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use super::error::StatsError;
use super::messages::StatsRequest;
use super::types::{CategoryStats, DispatchOutcome, StatsSnapshot};

/// Generate request/response client methods with the oneshot boilerplate and tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            #[allow(dead_code)]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Cloneable handle to the [`StatsService`](super::StatsService).
#[derive(Clone, Debug)]
pub struct StatsClient {
    sender: mpsc::Sender<StatsRequest>,
}

impl StatsClient {
    pub fn new(sender: mpsc::Sender<StatsRequest>) -> Self {
        Self { sender }
    }

    /// Reports one outcome without waiting for it to be processed.
    pub async fn record(&self, outcome: DispatchOutcome) -> Result<(), StatsError> {
        self.sender
            .send(StatsRequest::Record { outcome })
            .await
            .map_err(|_| StatsError::ActorCommunicationError("Actor closed".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), StatsError> {
        debug!("Sending shutdown request");
        self.sender
            .send(StatsRequest::Shutdown)
            .await
            .map_err(|_| StatsError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(StatsClient => fn snapshot() -> StatsSnapshot as StatsRequest::Snapshot, Error = StatsError);
client_method!(StatsClient => fn category_stats(categoria: i32) -> Option<CategoryStats> as StatsRequest::CategoryStats, Error = StatsError);
