//! # fmcd Domain
//!
//! Wire types and models for talking to a fedimint-clientd service.
//!
//! This crate contains:
//! - Client configuration and per-call scope overrides
//! - The request envelope used for federation/gateway injection
//! - The error taxonomy and Result definition
//! - Request/response records for the admin, mint, lightning and onchain
//!   groups
//!
//! ## Architecture
//! - No dependencies on other fmcd crates
//! - No I/O; everything impure lives in `fmcd-infra`

pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use envelope::RequestEnvelope;
pub use errors::*;
pub use types::*;
