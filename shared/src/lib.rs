//! Shared types for the waiter front end
//!
//! Wire models used by the client library and the terminal front end:
//! menu and table payloads, order requests, order status records and
//! authentication DTOs.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
