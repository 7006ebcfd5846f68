//! Data models
//!
//! Shared between the client library and the front ends (via API).
//! Wire field names are camelCase; identifiers are opaque strings.

pub mod dining_table;
pub mod menu;
pub mod order;
pub mod user;

// Re-exports
pub use dining_table::*;
pub use menu::*;
pub use order::*;
pub use user::*;
