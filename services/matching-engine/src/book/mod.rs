//! Order book infrastructure module
//!
//! Contains price levels, the bid and ask books, and the [`OrderBook`]
//! facade that keeps both sides consistent with the identifier index.

pub mod ask_book;
pub mod bid_book;
pub mod price_level;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
pub use price_level::{IcebergReserve, PriceLevel, RestingOrder};

use std::collections::HashMap;
use tracing::trace;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Both sides of the book plus a direct identifier index
///
/// The index maps each resting identifier to the side and price level that
/// holds it, so cancel/replace and intra-match removals are direct lookups
/// instead of linear scans. Every mutation updates the priority structure
/// and the index together; under the sequential command model no observer
/// can see one without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
    index: HashMap<OrderId, (Side, Price)>,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            index: HashMap::new(),
        }
    }

    /// Add a resting order to the side matching its `side` field
    ///
    /// The caller has already assigned the order's sequence number.
    /// Identifiers are assumed unique among resting orders; if a client
    /// reuses one anyway, the index tracks the latest and the core stays
    /// deterministic rather than rejecting.
    pub fn insert(&mut self, order: RestingOrder) {
        debug_assert!(
            !order.quantity.is_zero(),
            "zero-quantity orders never rest"
        );
        trace!(id = %order.order_id, side = ?order.side, price = %order.price, qty = %order.quantity, "resting order");
        self.index
            .insert(order.order_id.clone(), (order.side, order.price));
        match order.side {
            Side::BUY => self.bids.insert(order),
            Side::SELL => self.asks.insert(order),
        }
    }

    /// The highest-priority resting order on `side`, without removal
    pub fn peek_best(&self, side: Side) -> Option<&RestingOrder> {
        match side {
            Side::BUY => self.bids.best_level(),
            Side::SELL => self.asks.best_level(),
        }
        .and_then(|(_, level)| level.front())
    }

    /// Fill the best order on `side` by `fill` units
    ///
    /// A fully consumed order is removed from both the level and the index;
    /// a partially filled one keeps its priority slot. The emptied price
    /// level, if any, is pruned.
    pub fn fill_best(&mut self, side: Side, fill: Quantity) {
        let Some((price, level)) = (match side {
            Side::BUY => self.bids.best_level_mut(),
            Side::SELL => self.asks.best_level_mut(),
        }) else {
            debug_assert!(false, "fill_best on an empty side");
            return;
        };
        let consumed = level.fill_front(fill);
        let now_empty = level.is_empty();
        if let Some(order) = consumed {
            self.index.remove(&order.order_id);
        }
        if now_empty {
            match side {
                Side::BUY => self.bids.remove_level(price),
                Side::SELL => self.asks.remove_level(price),
            }
        }
    }

    /// Remove and return the resting order with this identifier
    ///
    /// Searches whichever side the index says holds it; `None` when the
    /// identifier is not resting.
    pub fn remove_by_id(&mut self, order_id: &OrderId) -> Option<RestingOrder> {
        let (side, price) = self.index.remove(order_id)?;
        let removed = match side {
            Side::BUY => self.bids.remove(order_id, price),
            Side::SELL => self.asks.remove(order_id, price),
        };
        debug_assert!(removed.is_some(), "index pointed at a missing order");
        removed
    }

    /// Look up a resting order by identifier
    pub fn get(&self, order_id: &OrderId) -> Option<&RestingOrder> {
        let (side, price) = self.index.get(order_id)?;
        match side {
            Side::BUY => self.bids.level_at(*price),
            Side::SELL => self.asks.level_at(*price),
        }
        .and_then(|level| level.get(order_id))
    }

    /// Reduce a resting order's visible quantity in place
    ///
    /// Keeps the order's priority slot; used by quantity-reduction-only
    /// replace. Returns false when the identifier is not resting.
    pub fn reduce_quantity(&mut self, order_id: &OrderId, quantity: Quantity) -> bool {
        debug_assert!(!quantity.is_zero(), "reduce to zero is a removal");
        let Some((side, price)) = self.index.get(order_id) else {
            return false;
        };
        match side {
            Side::BUY => self
                .bids
                .level_at_mut(*price)
                .is_some_and(|level| level.reduce_quantity(order_id, quantity)),
            Side::SELL => self
                .asks
                .level_at_mut(*price)
                .is_some_and(|level| level.reduce_quantity(order_id, quantity)),
        }
    }

    /// Total visible quantity on `side` that crosses `limit`
    ///
    /// The fill-or-kill admission sum; read-only.
    pub fn satisfied_quantity(&self, side: Side, limit: Price) -> Quantity {
        match side {
            Side::BUY => self.bids.satisfied_quantity(limit),
            Side::SELL => self.asks.satisfied_quantity(limit),
        }
    }

    /// Drain one side in full priority order, clearing its index entries
    pub fn drain_side(&mut self, side: Side) -> Vec<RestingOrder> {
        let orders = match side {
            Side::BUY => self.bids.drain(),
            Side::SELL => self.asks.drain(),
        };
        for order in &orders {
            self.index.remove(&order.order_id);
        }
        orders
    }

    /// Best price and total visible quantity on `side`
    pub fn best(&self, side: Side) -> Option<(Price, Quantity)> {
        match side {
            Side::BUY => self.bids.best(),
            Side::SELL => self.asks.best(),
        }
    }

    /// Check whether `side` has no resting orders
    pub fn side_is_empty(&self, side: Side) -> bool {
        match side {
            Side::BUY => self.bids.is_empty(),
            Side::SELL => self.asks.is_empty(),
        }
    }

    /// Number of orders resting across both sides
    pub fn resting_count(&self) -> usize {
        self.index.len()
    }
}
