//! Branch resource.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use waypost_core::{Page, PageQuery};

use crate::error::Result;
use crate::request::Connection;
use crate::resource::{ResourceClient, ResourceSpec, UpdateStyle};

pub(crate) const SPEC: ResourceSpec = ResourceSpec {
    path: "Branch",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

/// A branch office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Backend-assigned identifier.
    pub id: String,

    /// Short branch code (`"KHI-01"`).
    pub code: String,

    /// Display name.
    pub name: String,

    /// Street address, when recorded.
    #[serde(default)]
    pub address: Option<String>,

    /// Contact phone, when recorded.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Fields accepted when creating or updating a branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDraft {
    /// Short branch code.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Street address.
    #[serde(default)]
    pub address: Option<String>,

    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Client for the `/Branch` resource.
pub struct Branches<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> Branches<C> {
    /// Creates the branch client over a shared connection.
    pub fn new(conn: Arc<C>) -> Self {
        Self {
            inner: ResourceClient::new(conn, SPEC),
        }
    }

    /// Creates a branch.
    pub async fn create(&self, draft: &BranchDraft) -> Result<Branch> {
        self.inner.create(draft).await
    }

    /// Lists a page of branches.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<Branch>> {
        self.inner.list(page).await
    }

    /// Fetches one branch.
    pub async fn get(&self, id: &str) -> Result<Branch> {
        self.inner.get(id).await
    }

    /// Updates a branch.
    pub async fn update(&self, id: &str, draft: &BranchDraft) -> Result<Branch> {
        self.inner.update(id, draft).await
    }

    /// Deletes a branch.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }
}
