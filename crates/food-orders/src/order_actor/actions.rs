//! Status changes for the Order actor.

use crate::model::OrderStatus;

#[derive(Debug, Clone, Copy)]
pub enum OrderAction {
    /// Moves the order to `to` only if it is currently in `from`.
    ///
    /// # Errors
    /// `InvalidTransition` when the current status differs from `from`.
    Transition { from: OrderStatus, to: OrderStatus },
    /// Writes the status without checking the current one.
    SetStatus(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, Copy)]
pub enum OrderActionResult {
    /// The status now stored.
    Transition(OrderStatus),
    SetStatus(()),
}
