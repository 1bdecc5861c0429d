//! Booking order resource.
//!
//! Same shape as consignments but its status endpoint takes POST, not PUT.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use waypost_core::{DocumentStatus, Page, PageQuery};

use crate::error::Result;
use crate::request::Connection;
use crate::resource::{ResourceClient, ResourceSpec, StatusVerb, UpdateStyle};

pub(crate) const SPEC: ResourceSpec = ResourceSpec {
    path: "BookingOrder",
    update_style: UpdateStyle::InBody,
    status_verb: Some(StatusVerb::Post),
};

/// A booking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOrder {
    /// Backend-assigned identifier.
    pub id: String,

    /// Order number.
    pub order_no: String,

    /// Order date.
    pub order_date: NaiveDate,

    /// Booking customer.
    pub customer: String,

    /// Origin station.
    pub origin: String,

    /// Destination station.
    pub destination: String,

    /// Processing status.
    pub status: DocumentStatus,
}

/// Fields accepted when creating or updating a booking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOrderDraft {
    /// Order number.
    pub order_no: String,

    /// Order date.
    pub order_date: NaiveDate,

    /// Booking customer.
    pub customer: String,

    /// Origin station.
    pub origin: String,

    /// Destination station.
    pub destination: String,
}

/// Client for the `/BookingOrder` resource.
pub struct BookingOrders<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> BookingOrders<C> {
    /// Creates the booking-order client over a shared connection.
    pub fn new(conn: Arc<C>) -> Self {
        Self {
            inner: ResourceClient::new(conn, SPEC),
        }
    }

    /// Creates a booking order.
    pub async fn create(&self, draft: &BookingOrderDraft) -> Result<BookingOrder> {
        self.inner.create(draft).await
    }

    /// Lists a page of booking orders. `Status` narrows by state.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<BookingOrder>> {
        self.inner.list(page).await
    }

    /// Fetches one booking order.
    pub async fn get(&self, id: &str) -> Result<BookingOrder> {
        self.inner.get(id).await
    }

    /// Updates a booking order.
    pub async fn update(&self, id: &str, draft: &BookingOrderDraft) -> Result<BookingOrder> {
        self.inner.update(id, draft).await
    }

    /// Deletes a booking order.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }

    /// Moves a booking order between `Pending` and `Completed`.
    pub async fn set_status(&self, id: &str, status: DocumentStatus) -> Result<()> {
        self.inner.set_status(id, status).await
    }
}
