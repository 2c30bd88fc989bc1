//! Fill events and per-command execution results

use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::numeric::{Notional, Price, Quantity};

/// One match event between an incoming order and a resting order
///
/// Fills always execute at the resting (maker) order's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub maker_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

/// Everything one submit-family command executed
///
/// `trade_cost` is reset at the start of each submit command and equals
/// the sum of `fill.quantity * fill.price` over this command's fills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub trade_cost: Notional,
    pub fills: Vec<Fill>,
}

impl Execution {
    /// An execution with no fills (trade cost zero)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total quantity filled by this command
    pub fn filled_quantity(&self) -> Quantity {
        self.fills
            .iter()
            .fold(Quantity::zero(), |sum, fill| sum + fill.quantity)
    }
}
