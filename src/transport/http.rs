use std::time::{Duration, Instant};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument, warn};
use crate::domain::{PurchaseRequest, PURCHASE_PATH};
use crate::stats::{DispatchOutcome, StatsClient};
use super::error::TransportError;
use super::Transport;

/// Posts purchases as JSON over a pooled `reqwest` client and reports every
/// outcome to the stats service.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: Url,
    stats: StatsClient,
}

impl HttpTransport {
    pub fn new(
        host: &str,
        request_timeout: Option<Duration>,
        stats: StatsClient,
    ) -> Result<Self, TransportError> {
        let url = purchase_url(host)?;

        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        debug!(url = %url, timeout = ?request_timeout, "Created HttpTransport");
        Ok(Self { client, url, stats })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Appends the purchase path to `host`, the way a base URL and a request path
/// are concatenated by the harness.
pub fn purchase_url(host: &str) -> Result<Url, TransportError> {
    let raw = format!("{}{}", host.trim_end_matches('/'), PURCHASE_PATH);
    let url = Url::parse(&raw).map_err(|e| TransportError::InvalidUrl {
        url: host.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TransportError::InvalidUrl {
            url: host.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(categoria = request.categoria, producto_id = %request.producto_id))]
    async fn dispatch(&self, request: PurchaseRequest) {
        let categoria = request.categoria;
        let start = Instant::now();

        let status = match self.client.post(self.url.clone()).json(&request).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    debug!(status = status.as_u16(), "Purchase accepted");
                } else {
                    warn!(status = status.as_u16(), "Purchase rejected");
                }
                Some(status.as_u16())
            }
            Err(e) => {
                warn!(error = %e, timeout = e.is_timeout(), "Purchase dispatch failed");
                e.status().map(|s| s.as_u16())
            }
        };

        let outcome = DispatchOutcome {
            categoria,
            status,
            latency: start.elapsed(),
        };
        if let Err(e) = self.stats.record(outcome).await {
            debug!(error = %e, "Outcome not recorded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use crate::stats::StatsService;

    type Seen = Arc<Mutex<Vec<Value>>>;

    async fn record_purchase(State(seen): State<Seen>, Json(body): Json<Value>) -> StatusCode {
        seen.lock().unwrap().push(body);
        StatusCode::OK
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn sample_request() -> PurchaseRequest {
        PurchaseRequest {
            categoria: 4,
            producto_id: "Labial-Matte".to_string(),
            precio: 187.42,
            cantidad_vendida: 3,
        }
    }

    #[test]
    fn purchase_url_joins_host_and_path() {
        assert_eq!(purchase_url("http://localhost:3000").unwrap().as_str(), "http://localhost:3000/purchase");
        assert_eq!(purchase_url("http://localhost:3000/").unwrap().as_str(), "http://localhost:3000/purchase");
        assert_eq!(purchase_url("https://shop.test/api").unwrap().as_str(), "https://shop.test/api/purchase");
    }

    #[test]
    fn purchase_url_rejects_garbage() {
        assert!(matches!(purchase_url("not a url"), Err(TransportError::InvalidUrl { .. })));
        assert!(matches!(purchase_url("ftp://shop.test"), Err(TransportError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn dispatch_posts_json_and_records_success() {
        let seen: Seen = Arc::default();
        let app = Router::new()
            .route("/purchase", post(record_purchase))
            .with_state(seen.clone());
        let host = serve(app).await;

        let (stats_service, stats) = StatsService::new(8);
        tokio::spawn(stats_service.run());
        let transport = HttpTransport::new(&host, Some(Duration::from_secs(5)), stats.clone()).unwrap();

        transport.dispatch(sample_request()).await;

        let bodies = seen.lock().unwrap().clone();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0], serde_json::to_value(sample_request()).unwrap());

        let snapshot = stats.snapshot().await.unwrap();
        assert_eq!(snapshot.dispatched(), 1);
        assert_eq!(snapshot.succeeded(), 1);
        assert_eq!(snapshot.per_category[&4].dispatched, 1);
    }

    #[tokio::test]
    async fn non_2xx_response_is_recorded_as_failure() {
        let app = Router::new().route("/purchase", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
        let host = serve(app).await;

        let (stats_service, stats) = StatsService::new(8);
        tokio::spawn(stats_service.run());
        let transport = HttpTransport::new(&host, None, stats.clone()).unwrap();

        transport.dispatch(sample_request()).await;

        let beauty = stats.category_stats(4).await.unwrap().unwrap();
        assert_eq!(beauty.failed, 1);
        assert_eq!(beauty.succeeded, 0);
    }

    #[tokio::test]
    async fn connection_errors_are_recorded_without_status() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let host = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let (stats_service, stats) = StatsService::new(8);
        tokio::spawn(stats_service.run());
        let transport = HttpTransport::new(&host, Some(Duration::from_secs(2)), stats.clone()).unwrap();

        transport.dispatch(sample_request()).await;

        let snapshot = stats.snapshot().await.unwrap();
        assert_eq!(snapshot.failed(), 1);
    }
}
