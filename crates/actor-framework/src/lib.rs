//! # Actor Framework
//!
//! Foundational building blocks for type-safe, concurrent actor systems. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**: each resource
//! type gets one actor owning all entities of that type, addressed through a uniform
//! CRUD + Action + List API.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! An entity declares what it needs through `ActorEntity::Context`, and whoever spawns the
//! actor passes it in:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug)] struct Shelf { id: u32, labels: Vec<u64> }
//! #[derive(Debug)] struct ShelfCreate;
//! #[derive(Debug)] struct ShelfUpdate;
//! #[derive(Debug)] enum ShelfAction { Label }
//! #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ShelfUpdate;
//!     type Action = ShelfAction;
//!     type ActionResult = u64;
//!     // Label numbers come from a counter shared with other actors.
//!     type Context = Arc<AtomicU64>;
//!     type Error = ShelfError;
//!
//!     fn assign_id(_: &ShelfCreate, seq: u32) -> u32 { seq }
//!     fn from_create_params(id: u32, _: ShelfCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, labels: Vec::new() })
//!     }
//!     async fn on_update(&mut self, _: ShelfUpdate, _: &Arc<AtomicU64>) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: ShelfAction, ctx: &Arc<AtomicU64>) -> Result<u64, Self::Error> {
//!         let label = ctx.fetch_add(1, Ordering::SeqCst);
//!         self.labels.push(label);
//!         Ok(label)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run(Arc::new(AtomicU64::new(100))));
//!
//!     let id = client.create(ShelfCreate).await.unwrap();
//!     assert_eq!(client.perform_action(id, ShelfAction::Label).await.unwrap(), 100);
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient` and the raw-receiver helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
