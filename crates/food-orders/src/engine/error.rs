//! Error taxonomy surfaced by the [`OrderEngine`](super::OrderEngine).

use crate::catalog_actor::CatalogError;
use crate::model::{ItemId, OrderStatus, UnknownFoodPoint};
use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors returned to callers of the engine.
///
/// All but `Infrastructure` are recoverable domain outcomes. A failed call never leaves
/// inventory or orders changed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    UnknownFoodPoint(#[from] UnknownFoodPoint),

    /// The request itself is malformed: no lines, a zero quantity, or quantities or a total
    /// too large to count.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// A line exceeds the stock of its item, or names an item this food point does not sell.
    #[error("Insufficient stock for {item}")]
    InsufficientStock { item: ItemId },

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: order is {current}, cannot move to {requested}")]
    InvalidTransition {
        current: OrderStatus,
        requested: OrderStatus,
    },

    /// An actor is unreachable or misbehaved. Not retried here.
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),
}

impl From<CatalogError> for EngineError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::InsufficientStock { item, .. } | CatalogError::ItemNotFound(item) => {
                EngineError::InsufficientStock { item }
            }
            CatalogError::QuantityOverflow(item) => {
                EngineError::InvalidOrder(format!("quantity for {item} is too large"))
            }
            CatalogError::TotalOverflow => {
                EngineError::InvalidOrder("order total is too large".to_string())
            }
            CatalogError::NotFound(food_point) => {
                EngineError::Infrastructure(format!("No catalog open for {food_point}"))
            }
            CatalogError::ActorCommunicationError(msg) => EngineError::Infrastructure(msg),
        }
    }
}

impl From<OrderError> for EngineError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => EngineError::NotFound(id),
            OrderError::InvalidTransition { current, requested } => {
                EngineError::InvalidTransition { current, requested }
            }
            OrderError::ActorCommunicationError(msg) => EngineError::Infrastructure(msg),
        }
    }
}
