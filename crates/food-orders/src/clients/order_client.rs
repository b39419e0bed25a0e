//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and exposes the order store operations.
use crate::model::{FoodPoint, Order, OrderCreate, OrderId, OrderStatus, UserId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a new order in `PREPARING`.
    #[instrument(skip(self, params), fields(user = %params.user_id, food_point = %params.food_point))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(lines = params.items.len(), "Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn exists(&self, id: OrderId) -> Result<bool, OrderError> {
        Ok(self.get(id).await?.is_some())
    }

    #[instrument(skip(self))]
    pub async fn get_status(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.get(id)
            .await?
            .map(|order| order.status)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Overwrites the status without checking the current one.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::SetStatus(()) => Ok(()),
            other => Err(OrderError::ActorCommunicationError(format!(
                "SetStatus answered with {other:?}"
            ))),
        }
    }

    /// Compare-and-set: moves `id` from `from` to `to`, or fails with `InvalidTransition`.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::Transition { from, to })
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Transition(status) => {
                info!(order = %id, %status, "Order advanced");
                Ok(status)
            }
            other => Err(OrderError::ActorCommunicationError(format!(
                "Transition answered with {other:?}"
            ))),
        }
    }

    /// A user's orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|order| &order.user_id == user_id)
            .collect())
    }

    /// Orders at one food point whose status is in `statuses`, oldest first.
    #[instrument(skip(self))]
    pub async fn list_by_food_point(
        &self,
        food_point: FoodPoint,
        statuses: &[OrderStatus],
    ) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.food_point == food_point && statuses.contains(&order.status))
            .collect())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn order(id: u32, user: &str, food_point: FoodPoint, status: OrderStatus) -> Order {
        Order {
            id: OrderId(id),
            user_id: UserId::from(user),
            food_point,
            status,
            items: vec![],
        }
    }

    #[tokio::test]
    async fn test_transition_sends_compare_and_set() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .transition(OrderId(7), OrderStatus::Preparing, OrderStatus::Prepared)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(7));
        assert!(matches!(
            action,
            OrderAction::Transition {
                from: OrderStatus::Preparing,
                to: OrderStatus::Prepared
            }
        ));
        responder
            .send(Ok(OrderActionResult::Transition(OrderStatus::Prepared)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(OrderStatus::Prepared));
    }

    #[tokio::test]
    async fn test_invalid_transition_is_recovered() {
        let mut mock = MockClient::<Order>::new();
        let refused = OrderError::InvalidTransition {
            current: OrderStatus::Preparing,
            requested: OrderStatus::PickedUp,
        };
        mock.expect_action(OrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(refused.clone())));

        let client = OrderClient::new(mock.client());
        let result = client
            .transition(OrderId(1), OrderStatus::Prepared, OrderStatus::PickedUp)
            .await;

        assert_eq!(result, Err(refused));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_status_of_missing_order() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(3)).return_ok(None);
        mock.expect_get(OrderId(3)).return_ok(None);

        let client = OrderClient::new(mock.client());
        assert_eq!(
            client.get_status(OrderId(3)).await,
            Err(OrderError::NotFound("order_3".to_string()))
        );
        assert_eq!(client.exists(OrderId(3)).await, Ok(false));
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_by_food_point_filters_status() {
        let mut mock = MockClient::<Order>::new();
        let all = vec![
            order(1, "a", FoodPoint::Apu, OrderStatus::Preparing),
            order(2, "b", FoodPoint::Apu, OrderStatus::PickedUp),
            order(3, "a", FoodPoint::LunchFoodBus, OrderStatus::Prepared),
            order(4, "c", FoodPoint::Apu, OrderStatus::Prepared),
        ];
        mock.expect_list().return_ok(all.clone());
        mock.expect_list().return_ok(all);

        let client = OrderClient::new(mock.client());

        let open = client
            .list_by_food_point(FoodPoint::Apu, &OrderStatus::INCOMPLETE)
            .await
            .unwrap();
        let ids: Vec<_> = open.iter().map(|o| o.id).collect();
        assert_eq!(ids, [OrderId(1), OrderId(4)]);

        let mine = client.list_by_user(&UserId::from("a")).await.unwrap();
        let ids: Vec<_> = mine.iter().map(|o| o.id).collect();
        assert_eq!(ids, [OrderId(1), OrderId(3)]);
        mock.verify();
    }
}
