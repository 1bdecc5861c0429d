//! Account tree node shapes.

use serde::{Deserialize, Serialize};

/// One node of an account tree as the backend sends it.
///
/// `children` may be absent (it defaults to empty), and `parentAccountId`
/// redundantly points at the owning node. `parentId` is accepted as an
/// alias so a payload that already went through [`normalize`](crate::normalize)
/// parses back losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAccount {
    /// Opaque identifier assigned by the backing store.
    pub id: String,

    /// Human-facing secondary code, when present.
    #[serde(default, alias = "listId")]
    pub listid: Option<String>,

    /// Display text, when present.
    #[serde(default)]
    pub description: Option<String>,

    /// Reference to the owning node; absent for roots.
    #[serde(
        default,
        rename = "parentAccountId",
        alias = "parentId"
    )]
    pub parent_account_id: Option<String>,

    /// Pre-nested descendants, in server order.
    #[serde(default)]
    pub children: Vec<RawAccount>,
}

impl RawAccount {
    /// Creates a leaf node with only an id, the minimum the contract requires.
    pub fn with_id<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            listid: None,
            description: None,
            parent_account_id: None,
            children: Vec::new(),
        }
    }
}

/// One node of a normalized account tree.
///
/// Serialized as `{id, listid, description, parentId, children}`;
/// `children` is always present, empty for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNode {
    /// Opaque identifier assigned by the backing store.
    pub id: String,

    /// Human-facing secondary code, when present.
    #[serde(default)]
    pub listid: Option<String>,

    /// Display text, when present.
    #[serde(default)]
    pub description: Option<String>,

    /// Reference to the owning node; `None` for roots.
    #[serde(default, rename = "parentId")]
    pub parent_id: Option<String>,

    /// Direct descendants, in server order.
    #[serde(default)]
    pub children: Vec<AccountNode>,
}
