//! # waypost-client
//!
//! Typed REST clients for the Waypost backend.
//!
//! This crate provides the client stack the original back-office pages sit
//! on:
//! - [`HttpConnection`] — the fetch wrapper: joins paths onto the base URL,
//!   injects the bearer token from the [`Session`](waypost_session::Session),
//!   and applies the response policy (401 revokes the session globally;
//!   other failures surface the server's message)
//! - [`ResourceClient`] — generic create / list / get / update / delete over
//!   one resource path, with per-resource update and status-verb wiring
//! - `abl` — freight entities: branches, employees, consignments, booking
//!   orders, charges, invoices, payments
//! - `zms` — chart-of-accounts style ledger resources with the hierarchy
//!   transform applied on fetch
//! - [`MediaClient`] — multipart upload against the POST-only media proxy
//!
//! Every resource client is generic over [`Connection`], so tests run the
//! full stack against a scripted [`MockConnection`](mock::MockConnection).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod abl;
pub mod error;
pub mod http;
pub mod media;
pub mod mock;
pub mod request;
pub mod resource;
pub mod zms;

pub use error::{Error, Result};
pub use http::HttpConnection;
pub use media::MediaClient;
pub use request::{ApiRequest, Connection, Method, Payload};
pub use resource::{FileRef, ResourceClient, ResourceSpec, StatusVerb, UpdateStyle};
