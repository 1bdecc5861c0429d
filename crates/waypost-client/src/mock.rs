//! Scripted connection for tests.
//!
//! `MockConnection` records every request it receives and answers from a
//! queue of scripted responses, so resource clients can be exercised
//! without a backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::request::{ApiRequest, Connection, Payload};

/// A [`Connection`] that answers from a scripted response queue.
#[derive(Default)]
pub struct MockConnection {
    responses: Mutex<VecDeque<Result<Payload>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockConnection {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock scripted with the given successful payloads.
    pub fn with_responses(payloads: Vec<Payload>) -> Self {
        let mock = Self::new();
        for payload in payloads {
            mock.push_ok(payload);
        }
        mock
    }

    /// Queues a successful response.
    pub fn push_ok(&self, payload: Payload) {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .push_back(Ok(payload));
    }

    /// Queues a failure.
    pub fn push_err(&self, error: Error) {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .push_back(Err(error));
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn request(&self, request: ApiRequest) -> Result<Payload> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(request);
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(Error::api(0, "mock connection ran out of scripted responses")))
    }
}
