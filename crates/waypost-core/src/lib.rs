//! # waypost-core
//!
//! Shared foundation for the Waypost client platform.
//!
//! This crate provides the types used across all Waypost crates:
//! - Pagination primitives (`PageQuery`, `Page`)
//! - The two-state document status used by freight paperwork
//! - The base error taxonomy and `Result` alias
//! - TOML-backed configuration with environment overrides
//!
//! It has no internal Waypost dependencies (dependency level 0).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod types;

// Re-export key types at crate root for convenience
pub use config::{ConfigManager, WaypostConfig};
pub use error::{Error, Result};
pub use types::{DocumentStatus, Page, PageQuery};
