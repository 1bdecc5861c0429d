//! # waypost-ledger
//!
//! Account hierarchy handling for chart-of-accounts style resources
//! (accounts, capital accounts, contracts, delivery terms, inspection
//! notes).
//!
//! The backend returns account trees as a sequence of raw nodes, each
//! optionally carrying its own pre-nested `children` plus a redundant
//! `parentAccountId` link. This crate provides:
//! - [`RawAccount`] / [`AccountNode`] — the server shape and the normalized
//!   shape consumed by hierarchy-aware callers
//! - [`normalize`] — the pure, order-preserving reshaping over pre-nested
//!   payloads
//! - [`link`] — O(n) reconstruction from the `parentAccountId` links, for
//!   backends that return flat lists
//!
//! A normalized tree lives only for one fetch-and-render cycle; nothing here
//! caches or persists.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod node;
mod proptests;
mod transform;

pub use node::{AccountNode, RawAccount};
pub use transform::{link, normalize};
