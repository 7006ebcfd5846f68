//! Order composer - builds a table order from the menu
//!
//! Holds the entity's menu and tables, the chosen table, the remark and the
//! per-item/per-option selection. All mutations go through named operations;
//! option mutations require the parent item to be selected.
//!
//! Loads and submission take `&mut self` across the request, so a composer
//! never has two requests of its own in flight and a late response cannot
//! overwrite data for a newer entity.

mod catalog;
mod error;
mod notice;

pub use catalog::{MAX_QUANTITY, MIN_QUANTITY, MenuCatalog, MenuItem, MenuOption, apply_delta};
pub use error::{ComposerError, LoadTarget, ValidationError};
pub use notice::{SUCCESS_NOTICE_DURATION, SUCCESS_NOTICE_TEXT, SuccessNotice};

use rust_decimal::Decimal;
use shared::models::{CreateOrderRequest, DiningTable, User};

use crate::api::{MenuProvider, OrderService, TableProvider};

/// Order composer
pub struct OrderComposer<B> {
    backend: B,
    identity: Option<User>,
    catalog: MenuCatalog,
    tables: Vec<DiningTable>,
    selected_table: Option<String>,
    remark: String,
    notice: SuccessNotice,
}

impl<B> OrderComposer<B>
where
    B: MenuProvider + TableProvider + OrderService,
{
    /// Create an empty composer; call [`set_identity`](Self::set_identity) to load data
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            identity: None,
            catalog: MenuCatalog::default(),
            tables: Vec::new(),
            selected_table: None,
            remark: String::new(),
            notice: SuccessNotice::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    fn entity_id(&self) -> Option<&str> {
        self.identity.as_ref().and_then(|u| u.entity_id.as_deref())
    }

    // ========== Loading ==========

    /// Switch the signed-in user
    ///
    /// Menu and tables are refetched only when the entity changes. Both loads
    /// run even if the first fails; the first error is returned.
    pub async fn set_identity(&mut self, user: Option<User>) -> Result<(), ComposerError> {
        let previous = self.entity_id().map(str::to_owned);
        self.identity = user;
        let entity_id = self.entity_id().map(str::to_owned);

        if previous == entity_id {
            return Ok(());
        }

        tracing::debug!(from = ?previous, to = ?entity_id, "Entity changed");
        // Table ids belong to the previous entity
        self.selected_table = None;
        let menu = self.load_catalog(entity_id.as_deref()).await;
        let tables = self.load_tables(entity_id.as_deref()).await;
        menu.and(tables)
    }

    /// Replace the catalog with the entity's menu
    ///
    /// `None` clears the catalog without a request. On failure the catalog
    /// is left as it was.
    pub async fn load_catalog(&mut self, entity_id: Option<&str>) -> Result<(), ComposerError> {
        let Some(entity_id) = entity_id else {
            tracing::debug!("No entity yet, clearing menu");
            self.catalog = MenuCatalog::default();
            return Ok(());
        };

        match self.backend.fetch_menu(entity_id).await {
            Ok(foods) => {
                self.catalog = MenuCatalog::from_foods(foods);
                tracing::info!(entity_id = %entity_id, items = self.catalog.len(), "Menu loaded");
                Ok(())
            }
            Err(e) => {
                tracing::error!(entity_id = %entity_id, error = %e, "Failed to fetch menu");
                Err(ComposerError::Load {
                    target: LoadTarget::Menu,
                    source: e,
                })
            }
        }
    }

    /// Replace the table list with the entity's tables
    ///
    /// Same trigger and error policy as [`load_catalog`](Self::load_catalog).
    pub async fn load_tables(&mut self, entity_id: Option<&str>) -> Result<(), ComposerError> {
        let Some(entity_id) = entity_id else {
            self.tables.clear();
            return Ok(());
        };

        match self.backend.fetch_tables(entity_id).await {
            Ok(tables) => {
                tracing::info!(entity_id = %entity_id, tables = tables.len(), "Tables loaded");
                self.tables = tables;
                Ok(())
            }
            Err(e) => {
                tracing::error!(entity_id = %entity_id, error = %e, "Failed to fetch tables");
                Err(ComposerError::Load {
                    target: LoadTarget::Tables,
                    source: e,
                })
            }
        }
    }

    // ========== Selection ==========

    /// Flip an item's selection; unknown ids are ignored
    pub fn toggle_item_selection(&mut self, item_id: &str) {
        if let Some(item) = self.catalog.item_mut(item_id) {
            item.selected = !item.selected;
        }
    }

    /// Add `delta` to an item's quantity, kept within 1..=[`MAX_QUANTITY`]
    ///
    /// Works whether or not the item is selected.
    pub fn change_item_quantity(&mut self, item_id: &str, delta: i32) {
        if let Some(item) = self.catalog.item_mut(item_id) {
            item.quantity = apply_delta(item.quantity, delta);
        }
    }

    /// Flip an option's selection; no-op unless the parent item is selected
    pub fn toggle_option_selection(&mut self, item_id: &str, option_id: &str) {
        if let Some(option) = self.selected_option_mut(item_id, option_id) {
            option.selected = !option.selected;
        }
    }

    /// Add `delta` to an option's quantity; no-op unless the parent item is selected
    pub fn change_option_quantity(&mut self, item_id: &str, option_id: &str, delta: i32) {
        if let Some(option) = self.selected_option_mut(item_id, option_id) {
            option.quantity = apply_delta(option.quantity, delta);
        }
    }

    fn selected_option_mut(&mut self, item_id: &str, option_id: &str) -> Option<&mut MenuOption> {
        let item = self.catalog.item_mut(item_id)?;
        if !item.selected {
            tracing::debug!(item_id, option_id, "Ignoring option change on unselected item");
            return None;
        }
        item.option_mut(option_id)
    }

    /// Choose the table; an empty id means no table
    pub fn set_selected_table(&mut self, table_id: impl Into<String>) {
        let table_id = table_id.into();
        self.selected_table = (!table_id.is_empty()).then_some(table_id);
    }

    pub fn set_remark(&mut self, remark: impl Into<String>) {
        self.remark = remark.into();
    }

    // ========== Reads ==========

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn selected_table(&self) -> Option<&str> {
        self.selected_table.as_deref()
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    /// Total of the current selection, recomputed on every call
    pub fn total(&self) -> Decimal {
        self.catalog.total()
    }

    pub fn notice(&self) -> &SuccessNotice {
        &self.notice
    }

    // ========== Submission ==========

    /// Check the preconditions and build the order payload
    ///
    /// Checks run in order: table chosen, at least one item selected, user
    /// signed into an entity.
    pub fn build_request(&self) -> Result<CreateOrderRequest, ValidationError> {
        let table_id = self.selected_table.as_ref().ok_or(ValidationError::NoTable)?;

        if !self.catalog.has_selection() {
            return Err(ValidationError::NoItems);
        }

        let user = self.identity.as_ref().ok_or(ValidationError::NotSignedIn)?;
        let entity_id = user.entity_id.as_ref().ok_or(ValidationError::NotSignedIn)?;

        Ok(CreateOrderRequest {
            dining_table_id: table_id.clone(),
            waiter_id: user.id.clone(),
            entity_id: entity_id.clone(),
            items: self.catalog.order_lines(),
            remark: self.remark.clone(),
        })
    }

    /// Submit the current selection as an order
    ///
    /// On success the notice is shown and the selection, remark and table
    /// are reset locally (no refetch). On any failure state is unchanged.
    pub async fn submit_order(&mut self) -> Result<(), ComposerError> {
        let request = self.build_request().inspect_err(|e| {
            tracing::warn!(reason = %e, "Order not submitted");
        })?;

        if let Err(e) = self.backend.submit_order(&request).await {
            tracing::error!(table_id = %request.dining_table_id, error = %e, "Failed to submit order");
            return Err(ComposerError::Submission(e));
        }

        tracing::info!(
            table_id = %request.dining_table_id,
            entity_id = %request.entity_id,
            items = request.items.len(),
            "Order submitted"
        );

        self.notice.show();
        self.catalog.reset_selection();
        self.remark.clear();
        self.selected_table = None;
        Ok(())
    }
}
