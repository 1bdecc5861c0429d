//! Payment resource.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use waypost_core::{Page, PageQuery};

use crate::error::Result;
use crate::request::Connection;
use crate::resource::{ResourceClient, ResourceSpec, UpdateStyle};

pub(crate) const SPEC: ResourceSpec = ResourceSpec {
    path: "Payment",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

/// A payment receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Backend-assigned identifier.
    pub id: String,

    /// Receipt number.
    pub receipt_no: String,

    /// Payment date.
    pub payment_date: NaiveDate,

    /// Paying or paid party.
    pub party: String,

    /// Payment amount.
    pub amount: f64,

    /// Settlement mode (`"Cash"`, `"Cheque"`, `"Transfer"`), when recorded.
    #[serde(default)]
    pub mode: Option<String>,
}

/// Fields accepted when creating or updating a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    /// Receipt number.
    pub receipt_no: String,

    /// Payment date.
    pub payment_date: NaiveDate,

    /// Paying or paid party.
    pub party: String,

    /// Payment amount.
    pub amount: f64,

    /// Settlement mode.
    #[serde(default)]
    pub mode: Option<String>,
}

/// Client for the `/Payment` resource.
pub struct Payments<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> Payments<C> {
    /// Creates the payment client over a shared connection.
    pub fn new(conn: Arc<C>) -> Self {
        Self {
            inner: ResourceClient::new(conn, SPEC),
        }
    }

    /// Creates a payment.
    pub async fn create(&self, draft: &PaymentDraft) -> Result<Payment> {
        self.inner.create(draft).await
    }

    /// Lists a page of payments. `ReceiptNo` narrows to one receipt.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<Payment>> {
        self.inner.list(page).await
    }

    /// Fetches one payment.
    pub async fn get(&self, id: &str) -> Result<Payment> {
        self.inner.get(id).await
    }

    /// Updates a payment.
    pub async fn update(&self, id: &str, draft: &PaymentDraft) -> Result<Payment> {
        self.inner.update(id, draft).await
    }

    /// Deletes a payment.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }
}
