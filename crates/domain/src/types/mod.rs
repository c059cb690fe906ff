//! Request and response records, one module per API group.
//!
//! Field names are camelCase on the wire unless the server uses snake_case
//! for a record (notes and gateways). Optional request fields are omitted
//! rather than sent as `null`.

pub mod admin;
pub mod common;
pub mod lightning;
pub mod mint;
pub mod onchain;

pub use admin::*;
pub use common::*;
pub use lightning::*;
pub use mint::*;
pub use onchain::*;
