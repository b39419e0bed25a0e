//! Entity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn assign_id(_params: &OrderCreate, seq: u32) -> OrderId {
        OrderId(seq)
    }

    /// Creates a new Order in `PREPARING` with the given frozen lines.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            user_id: params.user_id,
            food_point: params.food_point,
            status: OrderStatus::Preparing,
            items: params.items,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Transition { from, to } => {
                if self.status != from {
                    return Err(OrderError::InvalidTransition {
                        current: self.status,
                        requested: to,
                    });
                }
                self.status = to;
                Ok(OrderActionResult::Transition(to))
            }
            OrderAction::SetStatus(status) => {
                self.status = status;
                Ok(OrderActionResult::SetStatus(()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodPoint, UserId};

    fn new_order() -> Order {
        Order::from_create_params(
            OrderId(1),
            OrderCreate {
                user_id: UserId::from("s1"),
                food_point: FoodPoint::Apu,
                items: vec![],
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_order_starts_preparing() {
        assert_eq!(new_order().status, OrderStatus::Preparing);
    }

    #[tokio::test]
    async fn test_transition_compares_before_setting() {
        let mut order = new_order();

        let err = order
            .handle_action(
                OrderAction::Transition {
                    from: OrderStatus::Prepared,
                    to: OrderStatus::PickedUp,
                },
                &(),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidTransition {
                current: OrderStatus::Preparing,
                requested: OrderStatus::PickedUp,
            }
        );
        assert_eq!(order.status, OrderStatus::Preparing);

        order
            .handle_action(
                OrderAction::Transition {
                    from: OrderStatus::Preparing,
                    to: OrderStatus::Prepared,
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Prepared);
    }

    #[tokio::test]
    async fn test_set_status_is_unconditional() {
        let mut order = new_order();
        order
            .handle_action(OrderAction::SetStatus(OrderStatus::PickedUp), &())
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::PickedUp);
    }
}
