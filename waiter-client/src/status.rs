//! Order status board
//!
//! Active orders of an entity as shown to staff, grouped by table.

use shared::models::{OrderItemOptionRecord, OrderItemRecord, OrderRecord, OrderStatus};
use thiserror::Error;

use crate::ClientError;
use crate::api::StatusProvider;

const NO_VALUE: &str = "-";
const UNKNOWN_FOOD: &str = "Unknown";
const UNKNOWN_OPTION: &str = "Option Name Not Found";

/// Status board error type
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Failed to load orders")]
    Load(#[source] ClientError),
}

/// Order as displayed on the status board
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: String,
    pub status: OrderStatus,
    pub remark: Option<String>,
    /// Table number, `-` when the order has no table
    pub table_number: String,
    /// Waiter username, `-` when unknown
    pub waiter_name: String,
    pub items: Vec<OrderLineSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineSummary {
    pub id: String,
    pub food_name: String,
    pub quantity: u32,
    pub options: Vec<OrderOptionSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderOptionSummary {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

impl From<OrderRecord> for OrderSummary {
    fn from(raw: OrderRecord) -> Self {
        Self {
            id: raw.id,
            status: raw.status,
            remark: raw.remark.filter(|r| !r.is_empty()),
            table_number: raw
                .dining_table
                .and_then(|t| t.number)
                .map(|n| n.to_string())
                .unwrap_or_else(|| NO_VALUE.to_string()),
            waiter_name: raw
                .waiter
                .and_then(|w| w.username)
                .unwrap_or_else(|| NO_VALUE.to_string()),
            items: raw.items.into_iter().map(OrderLineSummary::from).collect(),
        }
    }
}

impl From<OrderItemRecord> for OrderLineSummary {
    fn from(raw: OrderItemRecord) -> Self {
        Self {
            id: raw.id,
            food_name: raw
                .food
                .and_then(|f| f.name)
                .unwrap_or_else(|| UNKNOWN_FOOD.to_string()),
            quantity: raw.quantity,
            options: raw.options.into_iter().map(OrderOptionSummary::from).collect(),
        }
    }
}

impl From<OrderItemOptionRecord> for OrderOptionSummary {
    fn from(raw: OrderItemOptionRecord) -> Self {
        Self {
            id: raw.id,
            name: raw
                .option
                .and_then(|o| o.name)
                .unwrap_or_else(|| UNKNOWN_OPTION.to_string()),
            quantity: raw.quantity,
        }
    }
}

/// Orders of one entity, with a single expandable entry
pub struct StatusBoard<P> {
    provider: P,
    entity_id: Option<String>,
    orders: Vec<OrderSummary>,
    expanded: Option<String>,
}

impl<P: StatusProvider> StatusBoard<P> {
    pub fn new(provider: P, entity_id: Option<String>) -> Self {
        Self {
            provider,
            entity_id,
            orders: Vec::new(),
            expanded: None,
        }
    }

    /// Switch entity; orders are dropped until the next refresh
    pub fn set_entity(&mut self, entity_id: Option<String>) {
        if self.entity_id != entity_id {
            self.entity_id = entity_id;
            self.orders.clear();
            self.expanded = None;
        }
    }

    /// Fetch the entity's orders
    ///
    /// Without an entity no request is made. A 304 keeps the current list;
    /// any other failure empties it.
    pub async fn refresh(&mut self) -> Result<(), StatusError> {
        let Some(entity_id) = self.entity_id.as_deref() else {
            return Ok(());
        };

        match self.provider.fetch_order_status(entity_id).await {
            Ok(records) => {
                self.orders = records.into_iter().map(OrderSummary::from).collect();
                tracing::info!(entity_id = %entity_id, orders = self.orders.len(), "Orders loaded");
                Ok(())
            }
            Err(ClientError::NotModified) => {
                tracing::debug!(entity_id = %entity_id, "Orders not modified");
                Ok(())
            }
            Err(e) => {
                tracing::error!(entity_id = %entity_id, error = %e, "Failed to fetch orders");
                self.orders.clear();
                Err(StatusError::Load(e))
            }
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }

    /// Orders grouped by table number, tables in order of first appearance
    pub fn grouped_by_table(&self) -> Vec<(&str, Vec<&OrderSummary>)> {
        let mut groups: Vec<(&str, Vec<&OrderSummary>)> = Vec::new();
        for order in &self.orders {
            match groups.iter_mut().find(|(table, _)| *table == order.table_number) {
                Some((_, orders)) => orders.push(order),
                None => groups.push((order.table_number.as_str(), vec![order])),
            }
        }
        groups
    }

    /// Expand an order, or collapse it if it is already expanded
    pub fn toggle_expanded(&mut self, order_id: &str) {
        if self.expanded.as_deref() == Some(order_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(order_id.to_string());
        }
    }

    pub fn is_expanded(&self, order_id: &str) -> bool {
        self.expanded.as_deref() == Some(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_fallbacks() {
        let raw: OrderRecord = serde_json::from_value(serde_json::json!({
            "id": "o1",
            "status": "PENDING",
            "remark": "",
            "items": [
                {"id": "i1", "quantity": 2, "options": [{"id": "p1", "quantity": 1}]},
                {"id": "i2", "food": {"name": "Soto"}, "quantity": 1}
            ]
        }))
        .unwrap();

        let summary = OrderSummary::from(raw);
        assert_eq!(summary.table_number, "-");
        assert_eq!(summary.waiter_name, "-");
        assert!(summary.remark.is_none());
        assert_eq!(summary.items[0].food_name, "Unknown");
        assert_eq!(summary.items[0].options[0].name, "Option Name Not Found");
        assert_eq!(summary.items[1].food_name, "Soto");
        assert!(summary.items[1].options.is_empty());
    }

    #[test]
    fn test_summary_relations() {
        let raw: OrderRecord = serde_json::from_value(serde_json::json!({
            "id": "o2",
            "status": "SERVED",
            "remark": "no ice",
            "diningTable": {"number": 7},
            "waiter": {"username": "sari"},
            "items": []
        }))
        .unwrap();

        let summary = OrderSummary::from(raw);
        assert_eq!(summary.status, OrderStatus::Served);
        assert_eq!(summary.table_number, "7");
        assert_eq!(summary.waiter_name, "sari");
        assert_eq!(summary.remark.as_deref(), Some("no ice"));
    }
}
