//! Error types for the Catalog actor.

use crate::model::ItemId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No catalog is open for the requested food point.
    #[error("Catalog not found: {0}")]
    NotFound(String),

    /// The item does not exist at this food point.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        requested: u32,
        available: u32,
    },

    /// Duplicate lines for the item add up to more than a `u32` can count.
    #[error("Quantity overflow for {0}")]
    QuantityOverflow(ItemId),

    /// The reservation's price total does not fit in a `u64`.
    #[error("Order total overflows")]
    TotalOverflow,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
