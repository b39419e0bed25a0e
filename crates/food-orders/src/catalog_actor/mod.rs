//! # Catalog Actor
//!
//! The inventory store. One [`Catalog`] entity per [`FoodPoint`](crate::model::FoodPoint),
//! all managed by a single [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Catalog`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`actions`] - [`CatalogAction`] and [`CatalogActionResult`] for stock and menu changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use food_orders::catalog_actor;
//! use food_orders::model::{FoodPoint, ItemDraft, ItemIdSequence};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(32);
//!
//!     // Item ids are drawn from a sequence shared by every catalog
//!     tokio::spawn(actor.run(ItemIdSequence::new()));
//!
//!     client.open_catalog(FoodPoint::Apu).await?;
//!     let item = client
//!         .upsert_item(
//!             FoodPoint::Apu,
//!             ItemDraft { name: "Dosa".into(), pic_url: None, quantity: 10, price: 3500 },
//!         )
//!         .await?;
//!
//!     assert!(client.can_decrement(FoodPoint::Apu, item.id, 10).await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Atomicity
//!
//! `Reserve` validates every requested line and decrements them inside one actor step. Two
//! orders racing for the last units are processed one after the other, so stock never goes
//! negative and a rejected order leaves no trace.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::CatalogClient;
use actor_framework::ResourceActor;

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Catalog>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatalogClient::new(generic_client))
}
