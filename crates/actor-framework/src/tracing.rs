//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for every actor
//! in the process.
//!
//! The subscriber uses a compact format that hides the crate/module prefix (`with_target(false)`);
//! the actor loop records `entity_type` as a field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Entity Operations**: Create, Get, Update, Delete, List and custom Actions
//! - **Errors**: `warn!` events carrying the entity ID and the failure reason
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per mutation
//! RUST_LOG=debug cargo run     # request payloads and reads
//! RUST_LOG=actor_framework=debug,food_orders=info cargo run
//! ```
//!
//! With `RUST_LOG=info`, placing an order reads:
//!
//! ```text
//! INFO Actor started entity_type="Catalog"
//! INFO Action ok entity_type="Catalog" id=APU
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
