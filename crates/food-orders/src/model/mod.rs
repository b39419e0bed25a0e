//! Plain data types. [`Order`] and [`Catalog`](crate::catalog_actor::Catalog) implement
//! [`ActorEntity`](actor_framework::ActorEntity); everything else is carried inside them or
//! returned from the engine.

pub mod event;
pub mod food_point;
pub mod identity;
pub mod item;
pub mod order;
pub mod views;

pub use event::*;
pub use food_point::*;
pub use identity::*;
pub use item::*;
pub use order::*;
pub use views::*;
