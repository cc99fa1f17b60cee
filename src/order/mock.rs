//! Scripted order client for tests and offline demos

use crate::error::{OrderError, OrderResult};
use crate::order::client::OrderClient;
use crate::order::form::{OrderReceipt, OrderRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Order client that records every request and answers from a script
#[derive(Clone)]
pub struct MockOrderClient {
    responses: Arc<Mutex<VecDeque<OrderResult<OrderReceipt>>>>,
    requests: Arc<Mutex<Vec<OrderRequest>>>,
    latency: Duration,
}

impl MockOrderClient {
    /// A client with an empty script. Unscripted calls fail with a network error.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            latency: Duration::ZERO,
        }
    }

    fn scripted(response: OrderResult<OrderReceipt>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from([response]))),
            ..Self::new()
        }
    }

    /// Accept the next order with this message
    pub fn accepting(message: &str) -> Self {
        Self::scripted(Ok(OrderReceipt {
            message: message.to_string(),
        }))
    }

    /// Fail the next call with the given error
    pub fn failing(error: OrderError) -> Self {
        Self::scripted(Err(error))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Queue another answer
    pub async fn push_response(&self, response: OrderResult<OrderReceipt>) {
        self.responses.lock().await.push_back(response);
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockOrderClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderClient for MockOrderClient {
    async fn submit(&self, order: &OrderRequest) -> OrderResult<OrderReceipt> {
        self.requests.lock().await.push(order.clone());

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(OrderError::network("no scripted response")))
    }

    fn endpoint(&self) -> &str {
        "mock://orders"
    }
}
