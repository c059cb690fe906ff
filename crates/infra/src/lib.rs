//! # fmcd Infrastructure
//!
//! Everything impure in the fedimint-clientd client.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport
//! - [`FedimintClient`] and its route table
//! - Configuration loading from env and files
//! - Tracing setup and error conversions
//!
//! ## Architecture
//! - Wire types and errors come from `fmcd-domain`
//! - Contains all I/O

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

// Re-export commonly used items
pub use api::{Endpoint, FedimintClient, FedimintClientBuilder, Scope};
pub use http::{HttpClient, HttpClientBuilder};
pub use logging::{init_tracing, log_call_outcome};
