//! Consignment resource.
//!
//! Consignments carry the two contract quirks worth preserving: updates
//! PUT to the bare collection path with the id in the body, the status
//! endpoint takes PUT, and the attachment list goes through the narrow
//! `/Files/{id}` route with the read-modify-write fallback.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use waypost_core::{DocumentStatus, Page, PageQuery};

use crate::error::Result;
use crate::request::Connection;
use crate::resource::{FileRef, ResourceClient, ResourceSpec, StatusVerb, UpdateStyle};

pub(crate) const SPEC: ResourceSpec = ResourceSpec {
    path: "Consignment",
    update_style: UpdateStyle::InBody,
    status_verb: Some(StatusVerb::Put),
};

/// A freight consignment note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consignment {
    /// Backend-assigned identifier.
    pub id: String,

    /// Consignment note number.
    pub number: String,

    /// Booking date.
    pub booking_date: NaiveDate,

    /// Origin station.
    pub origin: String,

    /// Destination station.
    pub destination: String,

    /// Sending party.
    pub consignor: String,

    /// Receiving party.
    pub consignee: String,

    /// Vehicle registration, once assigned.
    #[serde(default)]
    pub vehicle_no: Option<String>,

    /// Processing status.
    pub status: DocumentStatus,

    /// Attached documents (builty scans, proof of delivery).
    #[serde(default)]
    pub files: Vec<FileRef>,
}

/// Fields accepted when creating or updating a consignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsignmentDraft {
    /// Consignment note number.
    pub number: String,

    /// Booking date.
    pub booking_date: NaiveDate,

    /// Origin station.
    pub origin: String,

    /// Destination station.
    pub destination: String,

    /// Sending party.
    pub consignor: String,

    /// Receiving party.
    pub consignee: String,

    /// Vehicle registration.
    #[serde(default)]
    pub vehicle_no: Option<String>,
}

/// Client for the `/Consignment` resource.
pub struct Consignments<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> Consignments<C> {
    /// Creates the consignment client over a shared connection.
    pub fn new(conn: Arc<C>) -> Self {
        Self {
            inner: ResourceClient::new(conn, SPEC),
        }
    }

    /// Creates a consignment.
    pub async fn create(&self, draft: &ConsignmentDraft) -> Result<Consignment> {
        self.inner.create(draft).await
    }

    /// Lists a page of consignments. Supported filters include
    /// `SearchQuery`, `RefId`, and `Status`.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<Consignment>> {
        self.inner.list(page).await
    }

    /// Fetches one consignment.
    pub async fn get(&self, id: &str) -> Result<Consignment> {
        self.inner.get(id).await
    }

    /// Updates a consignment.
    pub async fn update(&self, id: &str, draft: &ConsignmentDraft) -> Result<Consignment> {
        self.inner.update(id, draft).await
    }

    /// Deletes a consignment.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }

    /// Moves a consignment between `Pending` and `Completed`.
    pub async fn set_status(&self, id: &str, status: DocumentStatus) -> Result<()> {
        self.inner.set_status(id, status).await
    }

    /// Replaces the attachment list, with the read-modify-write fallback.
    pub async fn update_files(&self, id: &str, files: &[FileRef]) -> Result<()> {
        self.inner.update_files(id, files).await
    }
}
