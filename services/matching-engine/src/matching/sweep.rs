//! The generic matching loop
//!
//! Every submit-family kind runs this one sweep against the opposite side
//! of the book; the kinds differ only in whether a limit price gates each
//! fill and whether the sweep stops after the first fill event.

use tracing::trace;
use types::numeric::{Price, Quantity};
use types::order::Side;

use crate::book::OrderBook;
use crate::events::{Execution, Fill};

use super::crossing;

/// How a particular order kind parameterizes the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPolicy {
    /// Limit price gating each fill; None matches at any resting price
    limit: Option<Price>,
    /// Stop after the first fill event (iceberg one-shot rule)
    one_shot: bool,
}

impl SweepPolicy {
    /// Limit-family sweep: fills gated by a crossing test
    pub fn priced(limit: Price) -> Self {
        Self {
            limit: Some(limit),
            one_shot: false,
        }
    }

    /// Market sweep: no crossing test, fills at any resting price
    pub fn unpriced() -> Self {
        Self {
            limit: None,
            one_shot: false,
        }
    }

    /// Iceberg sweep: crossing test, at most one fill event
    pub fn first_fill_only(limit: Price) -> Self {
        Self {
            limit: Some(limit),
            one_shot: true,
        }
    }
}

/// Match an incoming order against the opposite side of the book
///
/// Walks the opposite side in priority order, filling at each resting
/// order's price. Stops when the incoming quantity is exhausted, the side
/// empties, the limit price stops crossing, or (one-shot) after the first
/// fill. `quantity` is left holding the incoming order's residual.
pub fn sweep(
    book: &mut OrderBook,
    taker_side: Side,
    quantity: &mut Quantity,
    policy: SweepPolicy,
) -> Execution {
    let maker_side = taker_side.opposite();
    let mut execution = Execution::empty();

    while !quantity.is_zero() {
        let Some(best) = book.peek_best(maker_side) else {
            break;
        };
        if let Some(limit) = policy.limit {
            if !crossing::crosses(taker_side, limit, best.price) {
                break;
            }
        }

        let fill = (*quantity).min(best.quantity);
        let price = best.price;
        let maker_order_id = best.order_id.clone();

        book.fill_best(maker_side, fill);
        *quantity -= fill;
        execution.trade_cost += fill * price;
        trace!(maker = %maker_order_id, price = %price, qty = %fill, "fill");
        execution.fills.push(Fill {
            maker_order_id,
            price,
            quantity: fill,
        });

        if policy.one_shot {
            break;
        }
    }

    execution
}
