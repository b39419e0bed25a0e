//! Menu items stocked at a food point.
//!
//! Items are not actors themselves. Each food point's items live inside its
//! [`Catalog`](crate::catalog_actor::Catalog) entity, so one catalog message can check and
//! decrement several items at once.

use crate::model::FoodPoint;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Stable identifier for an item, unique across all food points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Hands out [`ItemId`]s. Cloned into every catalog so ids never collide between food points.
#[derive(Debug, Clone)]
pub struct ItemIdSequence(Arc<AtomicU64>);

impl ItemIdSequence {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU64::new(1)))
    }

    pub fn next_id(&self) -> ItemId {
        ItemId(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for ItemIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub food_point: FoodPoint,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<String>,
    /// Units in stock.
    pub quantity: u32,
    /// Unit price in the smallest currency unit.
    pub price: u64,
}

/// Menu-update payload from the cook-facing path.
///
/// `id` is accepted for compatibility with clients that echo it back; matching is always by
/// `(food_point, name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub food_point: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<String>,
    pub quantity: u32,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
}

/// Mutable fields of an item, as written by an upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub pic_url: Option<String>,
    pub quantity: u32,
    pub price: u64,
}

impl From<MenuItemUpdate> for ItemDraft {
    fn from(update: MenuItemUpdate) -> Self {
        Self {
            name: update.name,
            pic_url: update.pic_url,
            quantity: update.quantity,
            price: update.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_update_deserializes_without_optional_fields() {
        let json = r#"{"foodPoint":"APU","name":"Dosa","quantity":4,"price":3500}"#;
        let update: MenuItemUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.food_point, "APU");
        assert_eq!(update.pic_url, None);
        assert_eq!(update.id, None);
    }

    #[test]
    fn test_negative_price_is_rejected_at_the_boundary() {
        let json = r#"{"foodPoint":"APU","name":"Dosa","quantity":4,"price":-1}"#;
        assert!(serde_json::from_str::<MenuItemUpdate>(json).is_err());
    }

    #[test]
    fn test_sequence_shared_between_clones() {
        let seq = ItemIdSequence::new();
        let other = seq.clone();
        assert_eq!(seq.next_id(), ItemId(1));
        assert_eq!(other.next_id(), ItemId(2));
    }
}
