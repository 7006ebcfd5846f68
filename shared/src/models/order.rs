//! Order Model
//!
//! Order-creation payload sent by the composer, and the order records
//! returned by the status endpoint.

use serde::{Deserialize, Serialize};

use crate::util::null_as_default;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Prepared,
    Served,
    Paid,
    Cancelled,
    /// Status value this client does not know about
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Prepared => "PREPARED",
            OrderStatus::Served => "SERVED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order creation
// =============================================================================

/// Create order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub dining_table_id: String,
    pub waiter_id: String,
    pub entity_id: String,
    pub items: Vec<OrderItemInput>,
    pub remark: String,
}

/// Selected food line in a create order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub food_id: String,
    pub quantity: u32,
    pub options: Vec<OrderOptionInput>,
}

/// Selected option of a food line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOptionInput {
    pub option_id: String,
    pub quantity: u32,
}

// =============================================================================
// Order status records
// =============================================================================

/// Order as returned by the status endpoint (relations embedded, all optional)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub dining_table: Option<TableRef>,
    #[serde(default)]
    pub waiter: Option<WaiterRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItemRecord>,
}

/// Embedded dining table reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRef {
    #[serde(default)]
    pub number: Option<i32>,
}

/// Embedded waiter reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaiterRef {
    #[serde(default)]
    pub username: Option<String>,
}

/// Embedded food or option reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Order line record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: String,
    #[serde(default)]
    pub food: Option<NamedRef>,
    pub quantity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<OrderItemOptionRecord>,
}

/// Order line option record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemOptionRecord {
    pub id: String,
    #[serde(default)]
    pub option: Option<NamedRef>,
    pub quantity: u32,
}
