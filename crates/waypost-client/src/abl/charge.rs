//! Charge resource.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use waypost_core::{Page, PageQuery};

use crate::error::Result;
use crate::request::Connection;
use crate::resource::{FileRef, ResourceClient, ResourceSpec, UpdateStyle};

pub(crate) const SPEC: ResourceSpec = ResourceSpec {
    path: "Charge",
    update_style: UpdateStyle::InBody,
    status_verb: None,
};

/// A charge receipt (loading, unloading, detention, and the like).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    /// Backend-assigned identifier.
    pub id: String,

    /// Receipt number.
    pub receipt_no: String,

    /// Charge date.
    pub charge_date: NaiveDate,

    /// Party billed.
    pub party: String,

    /// What the charge covers.
    pub detail: String,

    /// Charge amount.
    pub amount: f64,

    /// Supporting documents.
    #[serde(default)]
    pub files: Vec<FileRef>,
}

/// Fields accepted when creating or updating a charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeDraft {
    /// Receipt number.
    pub receipt_no: String,

    /// Charge date.
    pub charge_date: NaiveDate,

    /// Party billed.
    pub party: String,

    /// What the charge covers.
    pub detail: String,

    /// Charge amount.
    pub amount: f64,
}

/// Client for the `/Charge` resource.
pub struct Charges<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> Charges<C> {
    /// Creates the charge client over a shared connection.
    pub fn new(conn: Arc<C>) -> Self {
        Self {
            inner: ResourceClient::new(conn, SPEC),
        }
    }

    /// Creates a charge.
    pub async fn create(&self, draft: &ChargeDraft) -> Result<Charge> {
        self.inner.create(draft).await
    }

    /// Lists a page of charges. `ReceiptNo` narrows to one receipt.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<Charge>> {
        self.inner.list(page).await
    }

    /// Fetches one charge.
    pub async fn get(&self, id: &str) -> Result<Charge> {
        self.inner.get(id).await
    }

    /// Updates a charge.
    pub async fn update(&self, id: &str, draft: &ChargeDraft) -> Result<Charge> {
        self.inner.update(id, draft).await
    }

    /// Deletes a charge.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }

    /// Replaces the attachment list, with the read-modify-write fallback.
    pub async fn update_files(&self, id: &str, files: &[FileRef]) -> Result<()> {
        self.inner.update_files(id, files).await
    }
}
