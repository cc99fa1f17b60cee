//! Order-intake client
//!
//! One request, one response: `POST` the order JSON, read `message` back.

use crate::error::{OrderError, OrderResult};
use crate::order::form::{OrderReceipt, OrderRequest};
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can take an order
#[async_trait]
pub trait OrderClient: Send + Sync {
    /// Submit one order and return the service's receipt
    async fn submit(&self, order: &OrderRequest) -> OrderResult<OrderReceipt>;

    /// Where orders go, for logging
    fn endpoint(&self) -> &str;
}

/// Order client speaking JSON over HTTP
pub struct HttpOrderClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpOrderClient {
    /// Create a client for the given endpoint. `None` waits forever.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    async fn send(&self, order: &OrderRequest) -> OrderResult<OrderReceipt> {
        let response = self.http.post(&self.endpoint).json(order).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrderError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .ok_or_else(|| OrderError::invalid_response("response has no 'message' field"))?;

        Ok(OrderReceipt {
            message: message.to_string(),
        })
    }
}

#[async_trait]
impl OrderClient for HttpOrderClient {
    async fn submit(&self, order: &OrderRequest) -> OrderResult<OrderReceipt> {
        tracing::info!(
            "Submitting order for '{}' (size {}, {} toppings) to {}",
            order.full_name,
            order.size,
            order.toppings.len(),
            self.endpoint
        );

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(order))
                .await
                .unwrap_or(Err(OrderError::Timeout(limit))),
            None => self.send(order).await,
        };

        match &result {
            Ok(receipt) => tracing::info!("Order accepted: {}", receipt.message),
            Err(e) => tracing::warn!("Order submission failed: {}", e),
        }

        result
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
