//! The dispatch seam between virtual users and the network.

pub mod error;
pub mod http;

pub use error::*;
pub use http::*;

use async_trait::async_trait;
use crate::domain::PurchaseRequest;

/// Sends one purchase to the ingestion endpoint.
///
/// Dispatch returns nothing: failures are the transport's business to record,
/// the caller never retries or inspects them.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn dispatch(&self, request: PurchaseRequest);
}
