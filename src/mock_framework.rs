//! # Mock Framework
//!
//! Transports for testing virtual users and the swarm without a network.
//!
//! Use [`create_mock_transport`] to get a transport and a receiver, then
//! [`expect_purchase`] to assert on what the users dispatched.

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::{mpsc, Notify};
use crate::domain::PurchaseRequest;
use crate::transport::Transport;

/// Forwards every dispatched request into a channel the test owns.
pub struct MockTransport {
    sender: mpsc::UnboundedSender<PurchaseRequest>,
}

#[async_trait]
impl Transport for MockTransport {
    async fn dispatch(&self, request: PurchaseRequest) {
        // Tests may stop listening before the users stop.
        let _ = self.sender.send(request);
    }
}

/// Creates a mock transport and the receiver its dispatches arrive on.
pub fn create_mock_transport() -> (Arc<MockTransport>, mpsc::UnboundedReceiver<PurchaseRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Arc::new(MockTransport { sender }), receiver)
}

/// Waits for the next dispatched request.
pub async fn expect_purchase(
    receiver: &mut mpsc::UnboundedReceiver<PurchaseRequest>,
) -> Option<PurchaseRequest> {
    receiver.recv().await
}

/// Drains whatever has been dispatched so far without waiting.
pub fn drain_purchases(receiver: &mut mpsc::UnboundedReceiver<PurchaseRequest>) -> Vec<PurchaseRequest> {
    let mut purchases = Vec::new();
    while let Ok(request) = receiver.try_recv() {
        purchases.push(request);
    }
    purchases
}

/// A transport whose dispatch never completes, like a server that accepts
/// the connection and never answers.
#[derive(Default)]
pub struct HangingTransport {
    started: Notify,
}

impl HangingTransport {
    pub async fn wait_for_dispatch(&self) {
        self.started.notified().await;
    }
}

#[async_trait]
impl Transport for HangingTransport {
    async fn dispatch(&self, _request: PurchaseRequest) {
        self.started.notify_one();
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport() {
        let (transport, mut receiver) = create_mock_transport();
        let request = PurchaseRequest {
            categoria: 3,
            producto_id: "Sofa".to_string(),
            precio: 899.5,
            cantidad_vendida: 1,
        };

        transport.dispatch(request.clone()).await;

        assert_eq!(expect_purchase(&mut receiver).await, Some(request));
        assert!(drain_purchases(&mut receiver).is_empty());
    }
}
