use crate::model::{FoodPoint, Item, OrderId, OrderLine, UserId};
use serde::Serialize;

/// Change notification pushed to every connected listener.
///
/// Serialized with a `type` tag; `MenuUpdate` inlines the item's own fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    MenuUpdate(Item),
    #[serde(rename_all = "camelCase")]
    OrderPlaced {
        user_id: UserId,
        order_id: OrderId,
        food_point: FoodPoint,
        items: Vec<OrderLine>,
    },
    #[serde(rename_all = "camelCase")]
    OrderPrepared { order_id: OrderId },
    #[serde(rename_all = "camelCase")]
    OrderPickedUp { order_id: OrderId },
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::MenuUpdate(_) => "MENU_UPDATE",
            Event::OrderPlaced { .. } => "ORDER_PLACED",
            Event::OrderPrepared { .. } => "ORDER_PREPARED",
            Event::OrderPickedUp { .. } => "ORDER_PICKED_UP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;
    use serde_json::json;

    #[test]
    fn test_menu_update_flattens_item() {
        let event = Event::MenuUpdate(Item {
            id: ItemId(7),
            food_point: FoodPoint::Apu,
            name: "Vada".to_string(),
            pic_url: None,
            quantity: 12,
            price: 1500,
        });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "MENU_UPDATE",
                "id": 7,
                "foodPoint": "APU",
                "name": "Vada",
                "quantity": 12,
                "price": 1500
            })
        );
    }

    #[test]
    fn test_order_placed_payload() {
        let event = Event::OrderPlaced {
            user_id: UserId::from("u1"),
            order_id: OrderId(3),
            food_point: FoodPoint::LunchFoodBus,
            items: vec![OrderLine {
                item_id: ItemId(2),
                name: "Thali".to_string(),
                quantity: 1,
                unit_price: 9000,
            }],
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "ORDER_PLACED",
                "userId": "u1",
                "orderId": 3,
                "foodPoint": "Lunch Food Bus",
                "items": [{"itemId": 2, "name": "Thali", "quantity": 1, "unitPrice": 9000}]
            })
        );
    }

    #[test]
    fn test_status_events() {
        let prepared = serde_json::to_value(Event::OrderPrepared {
            order_id: OrderId(1),
        })
        .unwrap();
        assert_eq!(prepared, json!({"type": "ORDER_PREPARED", "orderId": 1}));

        let picked = Event::OrderPickedUp {
            order_id: OrderId(1),
        };
        assert_eq!(picked.kind(), "ORDER_PICKED_UP");
        assert_eq!(
            serde_json::to_value(picked).unwrap(),
            json!({"type": "ORDER_PICKED_UP", "orderId": 1})
        );
    }
}
