//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client recovers its actor's own error type from
//! [`FrameworkError::EntityError`](actor_framework::FrameworkError::EntityError), so callers
//! match on `CatalogError` / `OrderError` directly.

pub mod catalog_client;
pub mod order_client;

pub use catalog_client::*;
pub use order_client::*;
