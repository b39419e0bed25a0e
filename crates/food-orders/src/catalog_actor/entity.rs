//! Entity trait implementation for a food point's catalog.
//!
//! A [`Catalog`] holds every item sold at one food point. Stock checks, decrements and
//! menu upserts are all [`CatalogAction`]s handled here.

use super::actions::{CatalogAction, CatalogActionResult, StockRequest};
use super::error::CatalogError;
use crate::model::{FoodPoint, Item, ItemDraft, ItemId, ItemIdSequence, OrderLine};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

/// The items stocked at one food point.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub food_point: FoodPoint,
    pub items: Vec<Item>,
}

/// Payload for opening a catalog. The food point doubles as the catalog's id.
#[derive(Debug, Clone)]
pub struct CatalogCreate {
    pub food_point: FoodPoint,
}

impl Catalog {
    fn position(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    fn find(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    fn can_decrement(&self, request: StockRequest) -> bool {
        self.find(request.item_id)
            .is_some_and(|item| item.quantity >= request.quantity)
    }

    /// Merges lines naming the same item, keeping first-seen order.
    fn merge(requests: Vec<StockRequest>) -> Result<Vec<StockRequest>, CatalogError> {
        let mut merged: Vec<StockRequest> = Vec::with_capacity(requests.len());
        for request in requests {
            match merged.iter().position(|m| m.item_id == request.item_id) {
                Some(idx) => {
                    merged[idx].quantity = merged[idx]
                        .quantity
                        .checked_add(request.quantity)
                        .ok_or(CatalogError::QuantityOverflow(request.item_id))?;
                }
                None => merged.push(request),
            }
        }
        Ok(merged)
    }

    fn check(&self, request: StockRequest) -> Result<usize, CatalogError> {
        let idx = self
            .position(request.item_id)
            .ok_or(CatalogError::ItemNotFound(request.item_id))?;
        let available = self.items[idx].quantity;
        if available < request.quantity {
            return Err(CatalogError::InsufficientStock {
                item: request.item_id,
                requested: request.quantity,
                available,
            });
        }
        Ok(idx)
    }

    fn reserve(&mut self, requests: Vec<StockRequest>) -> Result<Vec<OrderLine>, CatalogError> {
        let merged = Self::merge(requests)?;

        // Validate everything first; the decrement loop below cannot fail.
        let positions = merged
            .iter()
            .map(|request| self.check(*request))
            .collect::<Result<Vec<_>, _>>()?;

        let lines: Vec<OrderLine> = merged
            .iter()
            .zip(&positions)
            .map(|(request, &idx)| {
                let item = &self.items[idx];
                OrderLine {
                    item_id: item.id,
                    name: item.name.clone(),
                    quantity: request.quantity,
                    unit_price: item.price,
                }
            })
            .collect();
        if OrderLine::total(&lines).is_none() {
            return Err(CatalogError::TotalOverflow);
        }

        for (line, idx) in lines.iter().zip(positions) {
            self.items[idx].quantity -= line.quantity;
        }
        Ok(lines)
    }

    fn restock(&mut self, requests: Vec<StockRequest>) -> Result<(), CatalogError> {
        let positions = requests
            .iter()
            .map(|request| {
                self.position(request.item_id)
                    .ok_or(CatalogError::ItemNotFound(request.item_id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (request, idx) in requests.into_iter().zip(positions) {
            let item = &mut self.items[idx];
            item.quantity = item.quantity.saturating_add(request.quantity);
        }
        Ok(())
    }

    fn upsert(&mut self, draft: ItemDraft, ids: &ItemIdSequence) -> Item {
        if let Some(idx) = self.items.iter().position(|item| item.name == draft.name) {
            let item = &mut self.items[idx];
            item.pic_url = draft.pic_url;
            item.quantity = draft.quantity;
            item.price = draft.price;
            debug!(item = %item.id, "Replaced menu item");
            return item.clone();
        }

        let item = Item {
            id: ids.next_id(),
            food_point: self.food_point,
            name: draft.name,
            pic_url: draft.pic_url,
            quantity: draft.quantity,
            price: draft.price,
        };
        debug!(item = %item.id, "Inserted menu item");
        self.items.push(item.clone());
        item
    }
}

#[async_trait]
impl ActorEntity for Catalog {
    type Id = FoodPoint;
    type Create = CatalogCreate;
    type Update = ();
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = ItemIdSequence;
    type Error = CatalogError;

    fn assign_id(params: &CatalogCreate, _seq: u32) -> FoodPoint {
        params.food_point
    }

    /// Opens an empty catalog.
    fn from_create_params(id: FoodPoint, _params: CatalogCreate) -> Result<Self, CatalogError> {
        Ok(Self {
            food_point: id,
            items: Vec::new(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &ItemIdSequence) -> Result<(), CatalogError> {
        Ok(())
    }

    /// Handles stock and menu actions.
    ///
    /// # Actions
    /// - `FindItem`: returns a copy of the item, if present
    /// - `CanDecrement`: true iff the item exists with enough stock
    /// - `Decrement`: conditional decrement of one item
    /// - `Reserve`: all-or-nothing decrement of several items, returning priced snapshots
    /// - `Restock`: adds quantities back
    /// - `Upsert`: menu update keyed by item name
    async fn handle_action(
        &mut self,
        action: CatalogAction,
        ids: &ItemIdSequence,
    ) -> Result<CatalogActionResult, CatalogError> {
        match action {
            CatalogAction::FindItem(item_id) => {
                Ok(CatalogActionResult::FindItem(self.find(item_id).cloned()))
            }
            CatalogAction::CanDecrement(request) => {
                Ok(CatalogActionResult::CanDecrement(self.can_decrement(request)))
            }
            CatalogAction::Decrement(request) => {
                let idx = self.check(request)?;
                let item = &mut self.items[idx];
                item.quantity -= request.quantity;
                Ok(CatalogActionResult::Decrement(item.quantity))
            }
            CatalogAction::Reserve(requests) => {
                self.reserve(requests).map(CatalogActionResult::Reserve)
            }
            CatalogAction::Restock(requests) => {
                self.restock(requests).map(CatalogActionResult::Restock)
            }
            CatalogAction::Upsert(draft) => Ok(CatalogActionResult::Upsert(self.upsert(draft, ids))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: u32, price: u64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            pic_url: None,
            quantity,
            price,
        }
    }

    async fn apu_with(items: &[(&str, u32, u64)]) -> (Catalog, ItemIdSequence) {
        let ids = ItemIdSequence::new();
        let mut catalog = Catalog::from_create_params(
            FoodPoint::Apu,
            CatalogCreate {
                food_point: FoodPoint::Apu,
            },
        )
        .unwrap();
        for (name, quantity, price) in items {
            catalog
                .handle_action(CatalogAction::Upsert(draft(name, *quantity, *price)), &ids)
                .await
                .unwrap();
        }
        (catalog, ids)
    }

    #[tokio::test]
    async fn test_upsert_keeps_id_for_same_name() {
        let (mut catalog, ids) = apu_with(&[("Dosa", 4, 3500)]).await;
        let first_id = catalog.items[0].id;

        let result = catalog
            .handle_action(CatalogAction::Upsert(draft("Dosa", 9, 4000)), &ids)
            .await
            .unwrap();

        let CatalogActionResult::Upsert(item) = result else {
            panic!("Expected Upsert result");
        };
        assert_eq!(item.id, first_id);
        assert_eq!(item.quantity, 9);
        assert_eq!(item.price, 4000);
        assert_eq!(catalog.items.len(), 1);
    }

    #[tokio::test]
    async fn test_reserve_is_all_or_nothing() {
        let (mut catalog, ids) = apu_with(&[("Dosa", 4, 3500), ("Chai", 1, 1000)]).await;
        let dosa = catalog.items[0].id;
        let chai = catalog.items[1].id;

        let err = catalog
            .handle_action(
                CatalogAction::Reserve(vec![StockRequest::new(dosa, 2), StockRequest::new(chai, 2)]),
                &ids,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::InsufficientStock {
                item: chai,
                requested: 2,
                available: 1
            }
        );
        assert_eq!(catalog.items[0].quantity, 4);
        assert_eq!(catalog.items[1].quantity, 1);
    }

    #[tokio::test]
    async fn test_reserve_merges_duplicate_lines() {
        let (mut catalog, ids) = apu_with(&[("Dosa", 4, 3500)]).await;
        let dosa = catalog.items[0].id;

        let err = catalog
            .handle_action(
                CatalogAction::Reserve(vec![StockRequest::new(dosa, 3), StockRequest::new(dosa, 2)]),
                &ids,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InsufficientStock { requested: 5, .. }));

        let result = catalog
            .handle_action(
                CatalogAction::Reserve(vec![StockRequest::new(dosa, 1), StockRequest::new(dosa, 2)]),
                &ids,
            )
            .await
            .unwrap();
        let CatalogActionResult::Reserve(lines) = result else {
            panic!("Expected Reserve result");
        };
        assert_eq!(
            lines,
            vec![OrderLine {
                item_id: dosa,
                name: "Dosa".to_string(),
                quantity: 3,
                unit_price: 3500,
            }]
        );
        assert_eq!(catalog.items[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_reserve_refuses_overflowing_duplicates() {
        let (mut catalog, ids) = apu_with(&[("Dosa", u32::MAX, 1)]).await;
        let dosa = catalog.items[0].id;

        let err = catalog
            .handle_action(
                CatalogAction::Reserve(vec![
                    StockRequest::new(dosa, u32::MAX),
                    StockRequest::new(dosa, 1),
                ]),
                &ids,
            )
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::QuantityOverflow(dosa));
        assert_eq!(catalog.items[0].quantity, u32::MAX);
    }

    #[tokio::test]
    async fn test_reserve_refuses_overflowing_total() {
        let (mut catalog, ids) = apu_with(&[("Gold", 10, u64::MAX / 2), ("Chai", 5, 1000)]).await;
        let gold = catalog.items[0].id;
        let chai = catalog.items[1].id;

        let err = catalog
            .handle_action(
                CatalogAction::Reserve(vec![StockRequest::new(chai, 1), StockRequest::new(gold, 3)]),
                &ids,
            )
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::TotalOverflow);
        assert_eq!(catalog.items[0].quantity, 10);
        assert_eq!(catalog.items[1].quantity, 5);

        let result = catalog
            .handle_action(CatalogAction::Reserve(vec![StockRequest::new(gold, 2)]), &ids)
            .await
            .unwrap();
        let CatalogActionResult::Reserve(lines) = result else {
            panic!("Expected Reserve result");
        };
        assert_eq!(OrderLine::total(&lines), Some(u64::MAX - 1));
    }

    #[tokio::test]
    async fn test_reserve_unknown_item() {
        let (mut catalog, ids) = apu_with(&[("Dosa", 4, 3500)]).await;

        let err = catalog
            .handle_action(CatalogAction::Reserve(vec![StockRequest::new(ItemId(99), 1)]), &ids)
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::ItemNotFound(ItemId(99)));
    }

    #[tokio::test]
    async fn test_decrement_refuses_to_underflow() {
        let (mut catalog, ids) = apu_with(&[("Vada", 2, 1500)]).await;
        let vada = catalog.items[0].id;

        let can = catalog
            .handle_action(CatalogAction::CanDecrement(StockRequest::new(vada, 3)), &ids)
            .await
            .unwrap();
        assert!(matches!(can, CatalogActionResult::CanDecrement(false)));

        assert!(catalog
            .handle_action(CatalogAction::Decrement(StockRequest::new(vada, 3)), &ids)
            .await
            .is_err());

        let left = catalog
            .handle_action(CatalogAction::Decrement(StockRequest::new(vada, 2)), &ids)
            .await
            .unwrap();
        assert!(matches!(left, CatalogActionResult::Decrement(0)));
    }

    #[tokio::test]
    async fn test_restock_returns_quantity() {
        let (mut catalog, ids) = apu_with(&[("Vada", 2, 1500)]).await;
        let vada = catalog.items[0].id;

        catalog
            .handle_action(CatalogAction::Restock(vec![StockRequest::new(vada, 3)]), &ids)
            .await
            .unwrap();
        assert_eq!(catalog.items[0].quantity, 5);
    }
}
