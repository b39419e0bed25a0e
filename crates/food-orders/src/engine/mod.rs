//! # Order Engine
//!
//! Orchestrates the inventory store, the order store and the notification hub.
//!
//! ## Order lifecycle
//!
//! ```text
//! place_order ──► PREPARING ──advance_to_prepared──► PREPARED ──advance_to_picked_up──► PICKED_UP
//! ```
//!
//! `PICKED_UP` is terminal and there is no cancellation. Each advance is a single
//! compare-and-set in the order actor, so concurrent advances from the same status cannot
//! both succeed.
//!
//! ## Placement
//!
//! Stock for every line is reserved in one catalog actor step before the order exists. If
//! the order store then fails, the reservation is given back before the error is returned.
//! Events are handed to the hub without waiting for delivery.
//!
//! ## Event order
//!
//! Every order-store write and the broadcast announcing it happen under one shared lock, so
//! the hub sees `ORDER_PLACED`, `ORDER_PREPARED` and `ORDER_PICKED_UP` for an order in the
//! same order the store applied them. Catalog reservation runs outside the lock.

pub mod error;

pub use error::*;

use crate::catalog_actor::StockRequest;
use crate::clients::{CatalogClient, OrderClient};
use crate::model::{
    Event, FoodPoint, Identity, IncompleteOrder, IncompleteOrders, Item, Menu, MenuItemUpdate,
    NewOrder, Order, OrderCreate, OrderId, OrderStatus, PlacedOrder, PlacedOrders,
};
use crate::notifications::NotifierClient;
use actor_framework::ActorClient;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Entry point for every domain operation. Cheap to clone; clones share the same actors.
#[derive(Clone)]
pub struct OrderEngine {
    catalogs: CatalogClient,
    orders: OrderClient,
    notifier: NotifierClient,
    publish: Arc<Mutex<()>>,
}

impl OrderEngine {
    pub fn new(catalogs: CatalogClient, orders: OrderClient, notifier: NotifierClient) -> Self {
        Self {
            catalogs,
            orders,
            notifier,
            publish: Arc::new(Mutex::new(())),
        }
    }

    /// Places an order for the caller and returns its id.
    ///
    /// # Errors
    /// - `UnknownFoodPoint` if `order.food_point` is not a known food point
    /// - `InvalidOrder` if there are no lines, a line asks for zero units, or the quantities or
    ///   total are too large to count
    /// - `InsufficientStock` naming the first line that cannot be served
    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        identity: &Identity,
        order: NewOrder,
    ) -> Result<OrderId, EngineError> {
        let food_point: FoodPoint = order.food_point.parse()?;

        if order.items.is_empty() {
            return Err(EngineError::InvalidOrder("order has no items".to_string()));
        }
        if let Some(line) = order.items.iter().find(|line| line.quantity == 0) {
            return Err(EngineError::InvalidOrder(format!(
                "zero quantity for {}",
                line.id
            )));
        }

        let requests: Vec<StockRequest> = order
            .items
            .iter()
            .map(|line| StockRequest::new(line.id, line.quantity))
            .collect();

        let lines = self.catalogs.reserve(food_point, requests).await.map_err(|e| {
            warn!(%food_point, error = %e, "Reservation refused");
            EngineError::from(e)
        })?;

        let create = OrderCreate {
            user_id: identity.user_id.clone(),
            food_point,
            items: lines.clone(),
        };
        let published = self.publish.lock().await;
        let order_id = match self.orders.create_order(create).await {
            Ok(id) => id,
            Err(e) => {
                drop(published);
                warn!(%food_point, error = %e, "Order store failed, returning stock");
                let taken = lines
                    .iter()
                    .map(|line| StockRequest::new(line.item_id, line.quantity))
                    .collect();
                if let Err(restock_err) = self.catalogs.restock(food_point, taken).await {
                    error!(%food_point, error = %restock_err, "Restock after failed order failed");
                }
                return Err(e.into());
            }
        };

        info!(order = %order_id, user = %identity.user_id, %food_point, "Order placed");
        self.notifier.broadcast(Event::OrderPlaced {
            user_id: identity.user_id.clone(),
            order_id,
            food_point,
            items: lines,
        });
        drop(published);
        Ok(order_id)
    }

    /// `PREPARING → PREPARED`, then emits `ORDER_PREPARED`.
    #[instrument(skip(self))]
    pub async fn advance_to_prepared(&self, order_id: OrderId) -> Result<(), EngineError> {
        let _published = self.publish.lock().await;
        self.orders
            .transition(order_id, OrderStatus::Preparing, OrderStatus::Prepared)
            .await?;
        self.notifier.broadcast(Event::OrderPrepared { order_id });
        Ok(())
    }

    /// `PREPARED → PICKED_UP`, then emits `ORDER_PICKED_UP`.
    #[instrument(skip(self))]
    pub async fn advance_to_picked_up(&self, order_id: OrderId) -> Result<(), EngineError> {
        let _published = self.publish.lock().await;
        self.orders
            .transition(order_id, OrderStatus::Prepared, OrderStatus::PickedUp)
            .await?;
        self.notifier.broadcast(Event::OrderPickedUp { order_id });
        Ok(())
    }

    /// Total over the order's frozen lines.
    pub fn compute_order_price(order: &Order) -> u64 {
        order.price()
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, EngineError> {
        self.orders
            .get(order_id)
            .await?
            .ok_or_else(|| EngineError::NotFound(order_id.to_string()))
    }

    /// Inserts or replaces a menu item and emits `MENU_UPDATE` with the stored item.
    #[instrument(skip(self))]
    pub async fn update_menu(&self, update: MenuItemUpdate) -> Result<Item, EngineError> {
        let food_point: FoodPoint = update.food_point.parse()?;
        let item = self.catalogs.upsert_item(food_point, update.into()).await?;
        info!(item = %item.id, %food_point, "Menu updated");
        self.notifier.broadcast(Event::MenuUpdate(item.clone()));
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn read_menu(&self) -> Result<Menu, EngineError> {
        Ok(Menu {
            items: self.catalogs.list_all().await?,
        })
    }

    /// The caller's orders, oldest first, priced from their snapshots.
    #[instrument(skip(self))]
    pub async fn read_orders(&self, identity: &Identity) -> Result<PlacedOrders, EngineError> {
        let orders = self.orders.list_by_user(&identity.user_id).await?;
        Ok(PlacedOrders {
            orders: orders.iter().map(PlacedOrder::from).collect(),
        })
    }

    /// Orders at `food_point` that are still `PREPARING` or `PREPARED`.
    #[instrument(skip(self))]
    pub async fn read_incomplete_orders(
        &self,
        food_point: &str,
    ) -> Result<IncompleteOrders, EngineError> {
        let food_point: FoodPoint = food_point.parse()?;
        let orders = self
            .orders
            .list_by_food_point(food_point, &OrderStatus::INCOMPLETE)
            .await?;
        Ok(IncompleteOrders {
            orders: orders.iter().map(IncompleteOrder::from).collect(),
        })
    }
}
