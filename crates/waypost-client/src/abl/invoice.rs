//! Invoice resource.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use waypost_core::{Page, PageQuery};

use crate::error::Result;
use crate::request::Connection;
use crate::resource::{ResourceClient, ResourceSpec, UpdateStyle};

pub(crate) const SPEC: ResourceSpec = ResourceSpec {
    path: "Invoice",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

/// A customer invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Backend-assigned identifier.
    pub id: String,

    /// Invoice number.
    pub invoice_no: String,

    /// Invoice date.
    pub invoice_date: NaiveDate,

    /// Billed customer.
    pub customer: String,

    /// Invoice amount.
    pub amount: f64,
}

/// Fields accepted when creating or updating an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    /// Invoice number.
    pub invoice_no: String,

    /// Invoice date.
    pub invoice_date: NaiveDate,

    /// Billed customer.
    pub customer: String,

    /// Invoice amount.
    pub amount: f64,
}

/// Client for the `/Invoice` resource.
pub struct Invoices<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> Invoices<C> {
    /// Creates the invoice client over a shared connection.
    pub fn new(conn: Arc<C>) -> Self {
        Self {
            inner: ResourceClient::new(conn, SPEC),
        }
    }

    /// Creates an invoice.
    pub async fn create(&self, draft: &InvoiceDraft) -> Result<Invoice> {
        self.inner.create(draft).await
    }

    /// Lists a page of invoices.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<Invoice>> {
        self.inner.list(page).await
    }

    /// Fetches one invoice.
    pub async fn get(&self, id: &str) -> Result<Invoice> {
        self.inner.get(id).await
    }

    /// Updates an invoice.
    pub async fn update(&self, id: &str, draft: &InvoiceDraft) -> Result<Invoice> {
        self.inner.update(id, draft).await
    }

    /// Deletes an invoice.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_wiring() {
        assert_eq!(SPEC.path, "Invoice");
        assert_eq!(SPEC.update_style, UpdateStyle::ByPath);
    }
}
