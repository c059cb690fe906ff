//! fedimint-clientd API client
//!
//! [`FedimintClient`] owns the connection settings and the default
//! federation/gateway scope. Domain methods live in one module per API group
//! and all dispatch through the [`Endpoint`] table.
//!
//! # Architecture
//!
//! - Uses the crate's [`HttpClient`](crate::http::HttpClient) (no direct reqwest)
//! - Bearer authentication on every request
//! - Timeout on every call; no retries
//! - Structured tracing only

mod admin;
pub mod client;
pub mod endpoints;
mod lightning;
mod mint;
mod onchain;

pub use client::{FedimintClient, FedimintClientBuilder};
pub use endpoints::{Endpoint, Scope};
