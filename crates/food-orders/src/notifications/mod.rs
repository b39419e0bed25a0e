//! # Notification Hub
//!
//! Pushes [`Event`](crate::model::Event)s to every connected listener as JSON strings.
//!
//! The hub is an actor like the resource actors, but it manages listeners instead of
//! entities, so it has its own message type rather than an
//! [`ActorEntity`](actor_framework::ActorEntity) impl.
//!
//! Delivery is best-effort:
//!
//! - [`NotifierClient::broadcast`] is a plain function. It `try_send`s into the hub inbox and
//!   returns, so order placement never waits on listeners.
//! - The hub serializes each event once and `try_send`s the string to each listener.
//!   A full listener misses the event. A closed listener is removed.
//!
//! ```rust
//! use food_orders::model::{Event, OrderId};
//! use food_orders::notifications;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (hub, notifier) = notifications::new(32, 8);
//!     tokio::spawn(hub.run());
//!
//!     let mut subscription = notifier.subscribe().await.unwrap();
//!     notifier.broadcast(Event::OrderPickedUp { order_id: OrderId(1) });
//!
//!     let payload = subscription.recv().await.unwrap();
//!     assert_eq!(payload, r#"{"type":"ORDER_PICKED_UP","orderId":1}"#);
//! }
//! ```

pub mod hub;

pub use hub::*;

/// Creates the hub and its client.
pub fn new(buffer_size: usize, listener_buffer: usize) -> (NotificationHub, NotifierClient) {
    NotificationHub::new(buffer_size, listener_buffer)
}
