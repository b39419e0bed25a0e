//! # Order Actor
//!
//! The order store. Each placed [`Order`] is an entity with a sequential
//! [`OrderId`](crate::model::OrderId), created in `PREPARING`.
//!
//! Status changes go through [`OrderAction::Transition`], a compare-and-set that runs inside
//! one actor step. Of two concurrent advances from the same status, only the first can match.
//!
//! The actor has no dependencies (`Context = ()`). Orders are priced snapshots; nothing here
//! reads the catalog.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
