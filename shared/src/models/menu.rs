//! Menu Model
//!
//! Shapes returned by the menu endpoint. Selection state is not part of
//! the wire format; clients attach it locally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::{default_true, null_as_default};

/// Food item as served by the menu provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,
    /// Unit price in currency unit
    pub price: Decimal,
    /// Always present; `null` or a missing field both mean "no options"
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<FoodOption>,
}

/// Option attached to a food item (extra topping, size, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodOption {
    pub id: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub available: bool,
    /// Extra unit price added per option quantity
    #[serde(default)]
    pub extra_price: Decimal,
}
