//! Order request and command variants
//!
//! Order kinds are a closed tagged variant rather than a trait hierarchy,
//! so dispatch in the engine stays exhaustive.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// A submit-family order as it arrives from the wire
///
/// Market, IOC and FOK orders never rest in the book; Limit and Iceberg
/// orders rest when residual quantity remains after immediate matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderRequest {
    /// Match up to the limit price, rest the residual
    Limit {
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    },
    /// Match at any resting price, discard the residual
    Market {
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
    },
    /// Immediate-or-cancel: match up to the limit price, discard the residual
    ImmediateOrCancel {
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    },
    /// Fill-or-kill: full match or no-op, decided before any mutation
    FillOrKill {
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    },
    /// Iceberg: rests a visible clip of at most `display_size`
    Iceberg {
        side: Side,
        order_id: OrderId,
        total_quantity: Quantity,
        price: Price,
        display_size: Quantity,
    },
}

impl OrderRequest {
    /// The client identifier carried by this request
    pub fn order_id(&self) -> &OrderId {
        match self {
            OrderRequest::Limit { order_id, .. }
            | OrderRequest::Market { order_id, .. }
            | OrderRequest::ImmediateOrCancel { order_id, .. }
            | OrderRequest::FillOrKill { order_id, .. }
            | OrderRequest::Iceberg { order_id, .. } => order_id,
        }
    }

    /// The side of this request
    pub fn side(&self) -> Side {
        match self {
            OrderRequest::Limit { side, .. }
            | OrderRequest::Market { side, .. }
            | OrderRequest::ImmediateOrCancel { side, .. }
            | OrderRequest::FillOrKill { side, .. }
            | OrderRequest::Iceberg { side, .. } => *side,
        }
    }
}

/// One command from the sequential input stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Submit an order for matching
    Submit(OrderRequest),
    /// Remove a resting order; unknown identifiers are a silent no-op
    Cancel { order_id: OrderId },
    /// Amend a resting order; unknown identifiers are a silent no-op
    Replace {
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    },
    /// Produce the final book report and terminate
    End,
}
