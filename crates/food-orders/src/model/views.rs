//! Read-side shapes returned by the engine. Prices are always taken from the frozen order
//! lines, never from the live catalog.

use crate::model::{FoodPoint, Item, Order, OrderId, OrderStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Menu {
    pub items: Vec<Item>,
}

/// A student's order history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrders {
    pub orders: Vec<PlacedOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub token: OrderId,
    pub status: OrderStatus,
    pub food_point: FoodPoint,
    pub items: Vec<PricedLine>,
    pub price: u64,
}

/// `price` is the unit price captured when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedLine {
    pub quantity: u32,
    pub price: u64,
    pub name: String,
}

impl From<&Order> for PlacedOrder {
    fn from(order: &Order) -> Self {
        Self {
            token: order.id,
            status: order.status,
            food_point: order.food_point,
            items: order
                .items
                .iter()
                .map(|line| PricedLine {
                    quantity: line.quantity,
                    price: line.unit_price,
                    name: line.name.clone(),
                })
                .collect(),
            price: order.price(),
        }
    }
}

/// Orders still open at one food point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncompleteOrders {
    pub orders: Vec<IncompleteOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncompleteOrder {
    pub token: OrderId,
    pub status: OrderStatus,
    pub price: u64,
    pub items: Vec<CountedLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountedLine {
    pub quantity: u32,
    pub name: String,
}

impl From<&Order> for IncompleteOrder {
    fn from(order: &Order) -> Self {
        Self {
            token: order.id,
            status: order.status,
            price: order.price(),
            items: order
                .items
                .iter()
                .map(|line| CountedLine {
                    quantity: line.quantity,
                    name: line.name.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, OrderLine, UserId};
    use serde_json::json;

    fn sample_order() -> Order {
        Order {
            id: OrderId(4),
            user_id: UserId::from("s1"),
            food_point: FoodPoint::EngineeringBlock,
            status: OrderStatus::Prepared,
            items: vec![
                OrderLine {
                    item_id: ItemId(1),
                    name: "Samosa".to_string(),
                    quantity: 2,
                    unit_price: 1200,
                },
                OrderLine {
                    item_id: ItemId(2),
                    name: "Chai".to_string(),
                    quantity: 1,
                    unit_price: 1000,
                },
            ],
        }
    }

    #[test]
    fn test_placed_order_view() {
        let view = PlacedOrder::from(&sample_order());
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "token": 4,
                "status": "PREPARED",
                "foodPoint": "Engineering Block",
                "items": [
                    {"quantity": 2, "price": 1200, "name": "Samosa"},
                    {"quantity": 1, "price": 1000, "name": "Chai"}
                ],
                "price": 3400
            })
        );
    }

    #[test]
    fn test_incomplete_order_view_omits_unit_prices() {
        let view = IncompleteOrder::from(&sample_order());
        assert_eq!(view.price, 3400);
        assert_eq!(
            serde_json::to_value(&view.items).unwrap(),
            json!([
                {"quantity": 2, "name": "Samosa"},
                {"quantity": 1, "name": "Chai"}
            ])
        );
    }
}
