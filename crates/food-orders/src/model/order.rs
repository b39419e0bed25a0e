use crate::model::{FoodPoint, ItemId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Preparation lifecycle: `PREPARING → PREPARED → PICKED_UP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Preparing,
    Prepared,
    PickedUp,
}

impl OrderStatus {
    /// Statuses of orders still waiting at the counter.
    pub const INCOMPLETE: [OrderStatus; 2] = [OrderStatus::Preparing, OrderStatus::Prepared];

    /// The only status this one may advance to. `None` for the terminal status.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Preparing => Some(OrderStatus::Prepared),
            OrderStatus::Prepared => Some(OrderStatus::PickedUp),
            OrderStatus::PickedUp => None,
        }
    }

    pub fn is_complete(self) -> bool {
        self == OrderStatus::PickedUp
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Prepared => "PREPARED",
            OrderStatus::PickedUp => "PICKED_UP",
        })
    }
}

/// One line of an order. `name` and `unit_price` are copied from the catalog when the order
/// is placed and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

impl OrderLine {
    /// `quantity * unit_price`, or `None` if it does not fit in a `u64`.
    pub fn subtotal(&self) -> Option<u64> {
        u64::from(self.quantity).checked_mul(self.unit_price)
    }

    /// Sum of the lines' subtotals, or `None` on overflow.
    pub fn total(lines: &[OrderLine]) -> Option<u64> {
        lines
            .iter()
            .try_fold(0u64, |acc, line| acc.checked_add(line.subtotal()?))
    }
}

/// A placed order with frozen, priced lines.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status actions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub food_point: FoodPoint,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
}

impl Order {
    /// Total over the frozen lines. Catalog price changes never reach this number.
    ///
    /// The catalog refuses reservations whose total would overflow, so stored orders always
    /// fit; anything else saturates at `u64::MAX`.
    pub fn price(&self) -> u64 {
        OrderLine::total(&self.items).unwrap_or(u64::MAX)
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub food_point: FoodPoint,
    pub items: Vec<OrderLine>,
}

/// A student's order request.
///
/// `food_point` stays a raw string here; it is checked against [`FoodPoint`] by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub food_point: String,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub id: ItemId,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: u32, unit_price: u64) -> OrderLine {
        OrderLine {
            item_id: ItemId(1),
            name: "Idli".to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_price_sums_quantity_times_unit_price() {
        let order = Order {
            id: OrderId(1),
            user_id: UserId::from("u1"),
            food_point: FoodPoint::Apu,
            status: OrderStatus::Preparing,
            items: vec![line(2, 1500), line(3, 1000)],
        };
        assert_eq!(order.price(), 6000);
    }

    #[test]
    fn test_total_reports_overflow() {
        assert_eq!(line(3, u64::MAX / 2).subtotal(), None);
        assert_eq!(OrderLine::total(&[line(1, u64::MAX), line(1, 1)]), None);
        assert_eq!(OrderLine::total(&[line(1, u64::MAX - 1), line(1, 1)]), Some(u64::MAX));

        let order = Order {
            id: OrderId(1),
            user_id: UserId::from("u1"),
            food_point: FoodPoint::Apu,
            status: OrderStatus::Preparing,
            items: vec![line(3, u64::MAX / 2)],
        };
        assert_eq!(order.price(), u64::MAX);
    }

    #[test]
    fn test_status_chain_ends_at_picked_up() {
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Prepared));
        assert_eq!(OrderStatus::Prepared.next(), Some(OrderStatus::PickedUp));
        assert_eq!(OrderStatus::PickedUp.next(), None);
        assert!(OrderStatus::PickedUp.is_complete());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PickedUp).unwrap(),
            "\"PICKED_UP\""
        );
        assert_eq!(OrderStatus::Prepared.to_string(), "PREPARED");
    }
}
