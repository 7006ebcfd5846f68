//! Waiter Client - order entry for restaurant staff
//!
//! Provides the HTTP API of the ordering backend, the credential store that
//! carries the staff bearer token, the order composer that builds table
//! orders from the menu, and the order status board.

pub mod api;
pub mod composer;
pub mod config;
pub mod credential;
pub mod error;
pub mod http;
pub mod status;

pub use api::{MenuProvider, OrderService, StatusProvider, TableProvider, WaiterApi};
pub use composer::{ComposerError, MenuItem, MenuOption, OrderComposer, ValidationError};
pub use config::ClientConfig;
pub use credential::{Credential, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use status::{OrderSummary, StatusBoard, StatusError};

// Re-export shared types for convenience
pub use shared::Decimal;
pub use shared::models::{DiningTable, Entity, Food, FoodOption, OrderStatus, User, UserRole};
