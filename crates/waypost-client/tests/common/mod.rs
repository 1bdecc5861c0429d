//! Common test utilities for the waypost-client integration tests.

use std::sync::Arc;

use serde_json::json;
use waypost_client::mock::MockConnection;
use waypost_client::Payload;

/// Test harness bundling a scripted connection.
pub struct TestHarness {
    /// Scripted connection shared by every client under test.
    pub conn: Arc<MockConnection>,
}

impl TestHarness {
    /// Creates a harness with an empty script.
    pub fn new() -> Self {
        Self {
            conn: Arc::new(MockConnection::new()),
        }
    }

    /// Creates a harness scripted with the given successful payloads.
    pub fn with_responses(payloads: Vec<Payload>) -> Self {
        Self {
            conn: Arc::new(MockConnection::with_responses(payloads)),
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A consignment payload as the backend sends it.
pub fn consignment_json(id: &str, status: &str) -> Payload {
    json!({
        "id": id,
        "number": format!("CN-{id}"),
        "bookingDate": "2026-07-02",
        "origin": "Karachi",
        "destination": "Lahore",
        "consignor": "Meridian Textiles",
        "consignee": "Noor Traders",
        "status": status,
        "files": []
    })
}

/// A charge payload as the backend sends it.
pub fn charge_json(id: &str, amount: f64) -> Payload {
    json!({
        "id": id,
        "receiptNo": format!("CHG-{id}"),
        "chargeDate": "2026-07-14",
        "party": "Meridian Textiles",
        "detail": "Loading charges",
        "amount": amount,
        "files": []
    })
}

/// A one-record page envelope.
pub fn page_json(item: Payload, total: u64) -> Payload {
    json!({"items": [item], "totalCount": total})
}
