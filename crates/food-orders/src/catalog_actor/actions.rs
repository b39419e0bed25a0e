//! Custom actions for the Catalog actor.
//!
//! Every action addresses one food point's [`Catalog`](super::Catalog) and runs as a single
//! actor step, so a check and the decrement that follows it can never interleave with another
//! order for the same food point.

use crate::model::{Item, ItemDraft, ItemId, OrderLine};

/// A quantity of one item, as requested by an order or returned by a compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockRequest {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl StockRequest {
    pub fn new(item_id: ItemId, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Looks up one item without touching stock.
    FindItem(ItemId),
    /// Reports whether the item exists and has at least the requested quantity.
    CanDecrement(StockRequest),
    /// Decrements one item if enough stock remains.
    ///
    /// # Errors
    /// `InsufficientStock` when the stock is lower than requested. Nothing is changed then.
    Decrement(StockRequest),
    /// Validates every line and then decrements all of them, or none.
    ///
    /// Lines naming the same item are merged before validation.
    Reserve(Vec<StockRequest>),
    /// Gives back stock taken by an earlier `Reserve`.
    Restock(Vec<StockRequest>),
    /// Inserts an item or replaces the mutable fields of the item with the same name.
    Upsert(ItemDraft),
}

/// Results from CatalogActions - variants match 1:1 with CatalogAction
#[derive(Debug, Clone)]
pub enum CatalogActionResult {
    FindItem(Option<Item>),
    CanDecrement(bool),
    /// Stock left after the decrement.
    Decrement(u32),
    /// One priced snapshot per distinct item, in request order.
    Reserve(Vec<OrderLine>),
    Restock(()),
    Upsert(Item),
}
