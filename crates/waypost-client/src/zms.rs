//! ZMS — chart-of-accounts style ledger resources.
//!
//! Accounts, capital accounts, contracts, delivery terms, and inspection
//! notes all share one record shape (a tree node with a code, a
//! description, and a parent link) and one client. [`HierarchyClient`]
//! adds `hierarchy()`, which fetches the nested payload and runs the
//! [`waypost_ledger`] normalization; the resulting tree is rebuilt on
//! every call and never cached.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use waypost_core::{Page, PageQuery};
use waypost_ledger::{normalize, AccountNode, RawAccount};

use crate::error::Result;
use crate::request::{ApiRequest, Connection};
use crate::resource::{ResourceClient, ResourceSpec, UpdateStyle};

const ACCOUNTS: ResourceSpec = ResourceSpec {
    path: "Account",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

const CAPITAL_ACCOUNTS: ResourceSpec = ResourceSpec {
    path: "CapitalAccount",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

const CONTRACTS: ResourceSpec = ResourceSpec {
    path: "Contract",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

const DELIVERY_TERMS: ResourceSpec = ResourceSpec {
    path: "DeliveryTerm",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

const INSPECTION_NOTES: ResourceSpec = ResourceSpec {
    path: "InspectionNote",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

/// Fields accepted when creating or updating a ledger node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDraft {
    /// Human-facing code.
    #[serde(default)]
    pub listid: Option<String>,

    /// Display text.
    #[serde(default)]
    pub description: Option<String>,

    /// Owning node, when not a root.
    #[serde(default)]
    pub parent_account_id: Option<String>,
}

/// Client for one chart-of-accounts style resource.
pub struct HierarchyClient<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> HierarchyClient<C> {
    fn new(conn: Arc<C>, spec: ResourceSpec) -> Self {
        Self {
            inner: ResourceClient::new(conn, spec),
        }
    }

    /// Client for the `/Account` resource.
    pub fn accounts(conn: Arc<C>) -> Self {
        Self::new(conn, ACCOUNTS)
    }

    /// Client for the `/CapitalAccount` resource.
    pub fn capital_accounts(conn: Arc<C>) -> Self {
        Self::new(conn, CAPITAL_ACCOUNTS)
    }

    /// Client for the `/Contract` resource.
    pub fn contracts(conn: Arc<C>) -> Self {
        Self::new(conn, CONTRACTS)
    }

    /// Client for the `/DeliveryTerm` resource.
    pub fn delivery_terms(conn: Arc<C>) -> Self {
        Self::new(conn, DELIVERY_TERMS)
    }

    /// Client for the `/InspectionNote` resource.
    pub fn inspection_notes(conn: Arc<C>) -> Self {
        Self::new(conn, INSPECTION_NOTES)
    }

    /// The resource path this client targets.
    pub fn path(&self) -> &'static str {
        self.inner.spec().path
    }

    /// Creates a ledger node.
    pub async fn create(&self, draft: &LedgerDraft) -> Result<RawAccount> {
        self.inner.create(draft).await
    }

    /// Lists a page of ledger nodes.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<RawAccount>> {
        self.inner.list(page).await
    }

    /// Fetches one ledger node.
    pub async fn get(&self, id: &str) -> Result<RawAccount> {
        self.inner.get(id).await
    }

    /// Updates a ledger node.
    pub async fn update(&self, id: &str, draft: &LedgerDraft) -> Result<RawAccount> {
        self.inner.update(id, draft).await
    }

    /// Deletes a ledger node.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }

    /// Fetches the full nested payload and normalizes it.
    ///
    /// One GET of the collection path, no pagination; the transform runs
    /// over the already-fetched payload and the fresh tree is returned to
    /// the caller to use and discard.
    pub async fn hierarchy(&self) -> Result<Vec<AccountNode>> {
        let payload = self
            .inner
            .connection()
            .request(ApiRequest::get(self.inner.spec().path))
            .await?;
        let raw: Vec<RawAccount> =
            serde_json::from_value(payload).map_err(waypost_core::Error::from)?;
        Ok(normalize(raw))
    }
}
