//! HTTP implementation of the orders gateway

use super::gateway::{CallOutcome, OrdersGateway};
use super::models::DeliveryAlert;
use crate::config::{ApiUrlsConfig, HttpConfig};
use crate::domain::{Order, OrdersApiError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Orders gateway backed by a single shared `reqwest::Client`
///
/// # Example
///
/// ```no_run
/// use delivery_alerts::adapters::orders::{HttpOrdersGateway, OrdersGateway};
/// use delivery_alerts::config::{ApiUrlsConfig, HttpConfig};
///
/// # async fn example() -> delivery_alerts::domain::Result<()> {
/// let urls = ApiUrlsConfig::new(
///     "https://orders-api.com/orders",
///     "https://alert-api.com/alerts",
///     "https://update-api.com/update",
/// );
/// let gateway = HttpOrdersGateway::new(urls, &HttpConfig::default())?;
/// let orders = gateway.fetch_orders().await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpOrdersGateway {
    client: Client,
    urls: ApiUrlsConfig,
}

impl HttpOrdersGateway {
    /// Create a gateway for the given endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(urls: ApiUrlsConfig, http: &HttpConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(http.timeout_seconds))
            .connect_timeout(Duration::from_secs(http.connect_timeout_seconds))
            .build()
            .map_err(|e| OrdersApiError::ClientBuild(e.to_string()))?;

        Ok(Self { client, urls })
    }

    /// POST `body` as JSON and map the status to an outcome
    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<CallOutcome> {
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| OrdersApiError::from_transport(url, &e))?;

        Ok(CallOutcome::from_status(resp.status().as_u16()))
    }
}

#[async_trait]
impl OrdersGateway for HttpOrdersGateway {
    async fn fetch_orders(&self) -> Result<Vec<Value>> {
        let url = self.urls.orders_api.as_str();
        tracing::debug!(url = %url, "Fetching orders");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| OrdersApiError::from_transport(url, &e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                "Failed to fetch orders from API"
            );
            return Ok(Vec::new());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| OrdersApiError::from_transport(url, &e))?;

        let orders: Vec<Value> =
            serde_json::from_str(&body).map_err(|e| OrdersApiError::InvalidResponse {
                endpoint: url.to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(order_count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    async fn send_alert(&self, alert: &DeliveryAlert) -> Result<CallOutcome> {
        let outcome = self
            .post_json(&self.urls.alert_api, &alert.payload())
            .await?;

        match outcome {
            CallOutcome::Accepted => tracing::info!(
                order_id = %alert.order_id,
                description = %alert.description,
                "Alert sent for delivered item"
            ),
            CallOutcome::Rejected { status } => tracing::warn!(
                order_id = %alert.order_id,
                description = %alert.description,
                status,
                "Failed to send alert for delivered item"
            ),
        }

        Ok(outcome)
    }

    async fn update_order(&self, order: &Order) -> Result<CallOutcome> {
        let outcome = self.post_json(&self.urls.update_api, order).await?;

        match outcome {
            CallOutcome::Accepted => tracing::info!(
                order_id = %order.order_id,
                "Updated order sent for processing"
            ),
            CallOutcome::Rejected { status } => tracing::warn!(
                order_id = %order.order_id,
                status,
                "Failed to send updated order for processing"
            ),
        }

        Ok(outcome)
    }
}
