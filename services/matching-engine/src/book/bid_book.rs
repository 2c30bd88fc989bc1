//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order; at each price level,
//! orders queue FIFO by sequence.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};

use super::price_level::{PriceLevel, RestingOrder};

/// Bid (buy) side of the order book
///
/// The highest price is the best bid. At each price level, orders are
/// maintained in FIFO order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidBook {
    /// Price levels; BTreeMap iterates ascending, so best is `next_back`
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a resting order at its price level
    pub fn insert(&mut self, order: RestingOrder) {
        let level = self.levels.entry(order.price).or_insert_with(PriceLevel::new);
        level.insert(order);
    }

    /// Remove an order by identifier from the given price level
    ///
    /// Empty price levels are pruned so the best-level scan stays clean.
    pub fn remove(&mut self, order_id: &OrderId, price: Price) -> Option<RestingOrder> {
        let level = self.levels.get_mut(&price)?;
        let removed = level.remove(order_id)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(removed)
    }

    /// The best (highest-priced) level
    pub fn best_level(&self) -> Option<(Price, &PriceLevel)> {
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level))
    }

    /// Mutable access to the best level
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next_back()
            .map(|(price, level)| (*price, level))
    }

    /// Drop a price level outright (used after its last order fills)
    pub(crate) fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }

    /// The level at an exact price, if populated
    pub fn level_at(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    /// Mutable access to the level at an exact price
    pub(crate) fn level_at_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Best bid price and total visible quantity at that price
    pub fn best(&self) -> Option<(Price, Quantity)> {
        self.best_level()
            .map(|(price, level)| (price, level.total_quantity()))
    }

    /// Total visible quantity of bids priced at or above `limit`
    ///
    /// This is the fill-or-kill admission sum for an incoming sell:
    /// only bids whose price satisfies the crossing condition count.
    pub fn satisfied_quantity(&self, limit: Price) -> Quantity {
        self.levels
            .range(limit..)
            .fold(Quantity::zero(), |sum, (_, level)| {
                sum + level.total_quantity()
            })
    }

    /// Drain all bids in priority order (price descending, FIFO per level)
    pub fn drain(&mut self) -> Vec<RestingOrder> {
        let mut orders = Vec::new();
        for (_, mut level) in std::mem::take(&mut self.levels).into_iter().rev() {
            orders.extend(level.drain());
        }
        orders
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of populated price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::Side;

    fn bid(id: &str, qty: u64, price: u64, seq: u64) -> RestingOrder {
        RestingOrder::limit(
            Side::BUY,
            OrderId::new(id),
            Quantity::from_u64(qty),
            Price::from_u64(price),
            seq,
        )
    }

    #[test]
    fn test_best_is_highest_price() {
        let mut book = BidBook::new();
        book.insert(bid("A", 1, 100, 1));
        book.insert(bid("B", 2, 102, 2));
        book.insert(bid("C", 3, 99, 3));

        let (price, qty) = book.best().unwrap();
        assert_eq!(price, Price::from_u64(102));
        assert_eq!(qty, Quantity::from_u64(2));
        assert_eq!(book.level_count(), 3);
    }

    #[test]
    fn test_same_price_queues_fifo() {
        let mut book = BidBook::new();
        book.insert(bid("A", 1, 100, 1));
        book.insert(bid("B", 2, 100, 2));

        let (_, level) = book.best_level().unwrap();
        assert_eq!(level.front().unwrap().order_id.as_str(), "A");
        assert_eq!(level.total_quantity(), Quantity::from_u64(3));
    }

    #[test]
    fn test_remove_prunes_empty_level() {
        let mut book = BidBook::new();
        book.insert(bid("A", 1, 100, 1));

        let removed = book.remove(&OrderId::new("A"), Price::from_u64(100));
        assert!(removed.is_some());
        assert!(book.is_empty());
        assert!(book
            .remove(&OrderId::new("A"), Price::from_u64(100))
            .is_none());
    }

    #[test]
    fn test_satisfied_quantity_counts_crossing_bids() {
        let mut book = BidBook::new();
        book.insert(bid("A", 5, 100, 1));
        book.insert(bid("B", 7, 101, 2));
        book.insert(bid("C", 9, 99, 3));

        // A sell limited at 100 can hit the bids at 100 and 101 only.
        assert_eq!(
            book.satisfied_quantity(Price::from_u64(100)),
            Quantity::from_u64(12)
        );
        assert_eq!(
            book.satisfied_quantity(Price::from_u64(102)),
            Quantity::zero()
        );
        assert_eq!(
            book.satisfied_quantity(Price::from_u64(1)),
            Quantity::from_u64(21)
        );
    }

    #[test]
    fn test_drain_is_priority_ordered() {
        let mut book = BidBook::new();
        book.insert(bid("A", 1, 100, 1));
        book.insert(bid("B", 2, 102, 2));
        book.insert(bid("C", 3, 100, 3));

        let ids: Vec<String> = book
            .drain()
            .into_iter()
            .map(|order| order.order_id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert!(book.is_empty());
    }
}
