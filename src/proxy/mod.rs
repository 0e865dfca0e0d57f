//! Proxy module
//!
//! Handles query sanitization and request forwarding to the HERE APIs.

pub mod here;
pub mod query;

pub use here::{HereClient, ProxiedResponse};
pub use query::API_KEY_PARAM;
