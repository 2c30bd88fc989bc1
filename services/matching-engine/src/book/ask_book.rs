//! Ask (sell-side) order book
//!
//! Maintains sell orders sorted by price ascending (best ask first).
//! Uses BTreeMap for deterministic iteration order; at each price level,
//! orders queue FIFO by sequence.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};

use super::price_level::{PriceLevel, RestingOrder};

/// Ask (sell) side of the order book
///
/// The lowest price is the best ask. At each price level, orders are
/// maintained in FIFO order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AskBook {
    /// Price levels; BTreeMap iterates ascending, so best is `next`
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
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

    /// The best (lowest-priced) level
    pub fn best_level(&self) -> Option<(Price, &PriceLevel)> {
        self.levels.iter().next().map(|(price, level)| (*price, level))
    }

    /// Mutable access to the best level
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next()
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

    /// Best ask price and total visible quantity at that price
    pub fn best(&self) -> Option<(Price, Quantity)> {
        self.best_level()
            .map(|(price, level)| (price, level.total_quantity()))
    }

    /// Total visible quantity of asks priced at or below `limit`
    ///
    /// This is the fill-or-kill admission sum for an incoming buy:
    /// only asks whose price satisfies the crossing condition count.
    pub fn satisfied_quantity(&self, limit: Price) -> Quantity {
        self.levels
            .range(..=limit)
            .fold(Quantity::zero(), |sum, (_, level)| {
                sum + level.total_quantity()
            })
    }

    /// Drain all asks in priority order (price ascending, FIFO per level)
    pub fn drain(&mut self) -> Vec<RestingOrder> {
        let mut orders = Vec::new();
        for (_, mut level) in std::mem::take(&mut self.levels) {
            orders.extend(level.drain());
        }
        orders
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of populated price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
