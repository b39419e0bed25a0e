//! # System Lifecycle & Orchestration
//!
//! Starts, wires and shuts down the actors behind the [`OrderEngine`](crate::engine::OrderEngine).
//!
//! ## The FoodSystem Pattern
//!
//! ```rust,ignore
//! impl FoodSystem {
//!     pub async fn start(config: &SystemConfig) -> Result<Self, String> {
//!         // 1. Create actors (no dependencies yet)
//!         let (catalog_actor, catalogs) = catalog_actor::new(config.actor_buffer);
//!         let (order_actor, orders) = order_actor::new(config.actor_buffer);
//!         let (hub, notifier) = notifications::new(config.hub_buffer, config.listener_buffer);
//!
//!         // 2. Start actors with their context injected
//!         let catalog_handle = tokio::spawn(catalog_actor.run(ItemIdSequence::new()));
//!         let order_handle = tokio::spawn(order_actor.run(()));
//!         let hub_handle = tokio::spawn(hub.run());
//!
//!         // 3. Open one catalog per food point
//!         for food_point in FoodPoint::ALL {
//!             catalogs.open_catalog(food_point).await?;
//!         }
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Dependency Injection via Context
//!
//! Dependencies are passed to `run(context)` rather than `new()`:
//!
//! ```rust,ignore
//! // Catalogs share one item id sequence so ids are unique across food points
//! impl ActorEntity for Catalog {
//!     type Context = ItemIdSequence;
//! }
//!
//! // Orders carry their own snapshots and need nothing
//! impl ActorEntity for Order {
//!     type Context = ();
//! }
//! ```
//!
//! No actor holds a client of another actor. Coordination between the stores happens in the
//! engine, so the dependency graph is a star and shutdown by channel closure always completes.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors drain** - queued requests are still answered
//! 4. **Await completion** - wait for all actor tasks to finish
//!
//! The notification hub follows the same rule. When it stops, every listener's queue closes
//! and `Subscription::recv` returns `None`.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`](actor_framework::tracing::setup_tracing) installs a compact subscriber
//! filtered by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run -p food-orders   # lifecycle and mutations
//! RUST_LOG=debug cargo run -p food-orders  # every request with its payload
//! ```

pub mod food_system;

pub use food_system::*;
