//! Menu catalog with local selection state
//!
//! Wraps the provider's [`Food`] list with per-item and per-option
//! `selected`/`quantity` fields. Prices are summed with `rust_decimal`.

use rust_decimal::Decimal;
use shared::models::{Food, FoodOption, OrderItemInput, OrderOptionInput};

/// Smallest quantity an item or option can hold
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity an item or option can hold
pub const MAX_QUANTITY: u32 = 999;

/// Apply a signed delta to a quantity, clamped to [`MIN_QUANTITY`]..=[`MAX_QUANTITY`]
pub fn apply_delta(quantity: u32, delta: i32) -> u32 {
    let next = i64::from(quantity) + i64::from(delta);
    next.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)) as u32
}

/// Menu option with selection state
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub id: String,
    pub name: String,
    pub available: bool,
    pub extra_price: Decimal,
    /// Only meaningful while the parent item is selected
    pub selected: bool,
    pub quantity: u32,
}

impl From<FoodOption> for MenuOption {
    fn from(option: FoodOption) -> Self {
        Self {
            id: option.id,
            name: option.name,
            available: option.available,
            extra_price: option.extra_price,
            selected: false,
            quantity: MIN_QUANTITY,
        }
    }
}

impl MenuOption {
    /// extra_price × quantity when selected, zero otherwise
    pub fn subtotal(&self) -> Decimal {
        if self.selected {
            self.extra_price.saturating_mul(Decimal::from(self.quantity))
        } else {
            Decimal::ZERO
        }
    }

    fn reset(&mut self) {
        self.selected = false;
        self.quantity = MIN_QUANTITY;
    }
}

/// Menu item with selection state
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub selected: bool,
    pub quantity: u32,
    pub options: Vec<MenuOption>,
}

impl From<Food> for MenuItem {
    fn from(food: Food) -> Self {
        Self {
            id: food.id,
            name: food.name,
            price: food.price,
            selected: false,
            quantity: MIN_QUANTITY,
            options: food.options.into_iter().map(MenuOption::from).collect(),
        }
    }
}

impl MenuItem {
    /// Line total including selected options; zero when not selected
    pub fn subtotal(&self) -> Decimal {
        if !self.selected {
            return Decimal::ZERO;
        }
        let base = self.price.saturating_mul(Decimal::from(self.quantity));
        self.options
            .iter()
            .map(MenuOption::subtotal)
            .fold(base, Decimal::saturating_add)
    }

    pub fn option_mut(&mut self, option_id: &str) -> Option<&mut MenuOption> {
        self.options.iter_mut().find(|o| o.id == option_id)
    }

    /// Order line for this item, `None` when not selected
    pub fn to_order_input(&self) -> Option<OrderItemInput> {
        if !self.selected {
            return None;
        }
        Some(OrderItemInput {
            food_id: self.id.clone(),
            quantity: self.quantity,
            options: self
                .options
                .iter()
                .filter(|o| o.selected)
                .map(|o| OrderOptionInput {
                    option_id: o.id.clone(),
                    quantity: o.quantity,
                })
                .collect(),
        })
    }

    fn reset(&mut self) {
        self.selected = false;
        self.quantity = MIN_QUANTITY;
        self.options.iter_mut().for_each(MenuOption::reset);
    }
}

/// Ordered menu of one entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from provider data, every selection at its default
    pub fn from_foods(foods: Vec<Food>) -> Self {
        Self {
            items: foods.into_iter().map(MenuItem::from).collect(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut MenuItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    pub fn has_selection(&self) -> bool {
        self.items.iter().any(|i| i.selected)
    }

    /// Sum of all selected lines
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(MenuItem::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Order lines for every selected item, in menu order
    pub fn order_lines(&self) -> Vec<OrderItemInput> {
        self.items.iter().filter_map(MenuItem::to_order_input).collect()
    }

    /// Return every item and option to `selected=false, quantity=1`
    pub fn reset_selection(&mut self) {
        self.items.iter_mut().for_each(MenuItem::reset);
    }
}
