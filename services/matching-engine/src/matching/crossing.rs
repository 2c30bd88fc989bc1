//! Crossing detection logic
//!
//! Determines when an incoming order's price permits a trade against a
//! resting order's price.

use types::numeric::Price;
use types::order::Side;

/// Check if a bid and ask can match at given prices
///
/// For a buy order to match with a sell order, the buy price must be
/// greater than or equal to the sell price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming limit price crosses a resting order's price
///
/// Book ordering guarantees that once the best resting order fails this
/// test, no deeper order on that side can pass it either.
pub fn crosses(taker_side: Side, taker_limit: Price, resting_price: Price) -> bool {
    match taker_side {
        Side::BUY => taker_limit >= resting_price,
        Side::SELL => taker_limit <= resting_price,
    }
}
