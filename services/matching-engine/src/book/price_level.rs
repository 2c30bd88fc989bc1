//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point.
//! Orders are maintained in FIFO (First-In-First-Out) order to enforce
//! time priority: later sequence numbers queue behind earlier ones.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Hidden remainder of an iceberg order
///
/// `total_quantity` counts the visible clip plus the undisplayed reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcebergReserve {
    pub total_quantity: Quantity,
    pub display_size: Quantity,
}

/// An order currently resting in the book
///
/// Only limit-family orders rest. `sequence` is assigned exactly once by
/// the engine's counter and never reused; within a price level it decides
/// time priority. An iceberg clip rests with
/// `quantity == min(reserve.total_quantity, reserve.display_size)`; both
/// shrink together while it is passively filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestingOrder {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub sequence: u64,
    pub reserve: Option<IcebergReserve>,
}

impl RestingOrder {
    /// A plain limit order (also the shape IOC/FOK would take, but those
    /// kinds never rest)
    pub fn limit(
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
        sequence: u64,
    ) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
            sequence,
            reserve: None,
        }
    }

    /// The visible clip of an iceberg order
    pub fn iceberg_clip(
        side: Side,
        order_id: OrderId,
        price: Price,
        sequence: u64,
        total_quantity: Quantity,
        display_size: Quantity,
    ) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity: total_quantity.min(display_size),
            sequence,
            reserve: Some(IcebergReserve {
                total_quantity,
                display_size,
            }),
        }
    }
}

impl fmt::Display for RestingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reserve {
            Some(reserve) => write!(
                f,
                "{}({})@{}#{}",
                self.quantity, reserve.total_quantity, self.price, self.order_id
            ),
            None => write!(f, "{}@{}#{}", self.quantity, self.price, self.order_id),
        }
    }
}

/// A price level containing orders at a specific price
///
/// Maintains strict FIFO ordering for time-priority matching. Sequence
/// numbers are monotone along the queue because every insertion carries a
/// sequence newer than everything already resting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<RestingOrder>,
    /// Total visible quantity available at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Insert an order at the back of the queue (time priority)
    pub fn insert(&mut self, order: RestingOrder) {
        debug_assert!(
            self.orders
                .back()
                .map_or(true, |last| last.sequence < order.sequence),
            "sequence must be monotone within a level"
        );
        self.total_quantity += order.quantity;
        self.orders.push_back(order);
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&RestingOrder> {
        self.orders.front()
    }

    /// Look up an order in this level by identifier
    pub fn get(&self, order_id: &OrderId) -> Option<&RestingOrder> {
        self.orders.iter().find(|order| &order.order_id == order_id)
    }

    /// Remove an order from the queue by identifier
    ///
    /// Returns the removed order, or None if it is not at this level.
    pub fn remove(&mut self, order_id: &OrderId) -> Option<RestingOrder> {
        let position = self
            .orders
            .iter()
            .position(|order| &order.order_id == order_id)?;
        let order = self.orders.remove(position)?;
        self.total_quantity -= order.quantity;
        Some(order)
    }

    /// Fill the front order by `fill` units
    ///
    /// The front order keeps its queue slot when partially filled; an
    /// iceberg clip's remaining total shrinks by the same amount so it
    /// keeps counting visible plus hidden. Returns the order when the fill
    /// consumes it entirely, so the caller can drop its identifier from
    /// the index; zero-quantity orders never stay. A consumed clip takes
    /// its hidden remainder with it, since only an incoming iceberg re-clips.
    pub fn fill_front(&mut self, fill: Quantity) -> Option<RestingOrder> {
        let front = self.orders.front_mut()?;
        debug_assert!(fill <= front.quantity, "fill exceeds resting quantity");
        front.quantity -= fill;
        if let Some(reserve) = front.reserve.as_mut() {
            reserve.total_quantity -= fill;
        }
        self.total_quantity -= fill;
        if front.quantity.is_zero() {
            self.orders.pop_front()
        } else {
            None
        }
    }

    /// Reduce an order's visible quantity in place, keeping its queue slot
    ///
    /// Used by quantity-reduction-only replace. Any iceberg reserve is
    /// collapsed so the clip invariant cannot be violated. Returns false if
    /// the identifier is not at this level.
    pub fn reduce_quantity(&mut self, order_id: &OrderId, quantity: Quantity) -> bool {
        let Some(order) = self
            .orders
            .iter_mut()
            .find(|order| &order.order_id == order_id)
        else {
            return false;
        };
        debug_assert!(quantity <= order.quantity, "in-place amend must reduce");
        self.total_quantity -= order.quantity - quantity;
        order.quantity = quantity;
        order.reserve = None;
        true
    }

    /// Drain the level front-to-back, preserving FIFO order
    pub fn drain(&mut self) -> impl Iterator<Item = RestingOrder> + '_ {
        self.total_quantity = Quantity::zero();
        self.orders.drain(..)
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total visible quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resting(id: &str, qty: u64, seq: u64) -> RestingOrder {
        RestingOrder::limit(
            Side::BUY,
            OrderId::new(id),
            Quantity::from_u64(qty),
            Price::from_u64(100),
            seq,
        )
    }

    #[test]
    fn test_insert_keeps_fifo_order() {
        let mut level = PriceLevel::new();
        level.insert(resting("A", 1, 1));
        level.insert(resting("B", 2, 2));
        level.insert(resting("C", 3, 3));

        assert_eq!(level.order_count(), 3);
        assert_eq!(level.total_quantity(), Quantity::from_u64(6));
        assert_eq!(level.front().unwrap().order_id.as_str(), "A");
    }

    #[test]
    fn test_fill_front_partial_keeps_slot() {
        let mut level = PriceLevel::new();
        level.insert(resting("A", 10, 1));
        level.insert(resting("B", 5, 2));

        let consumed = level.fill_front(Quantity::from_u64(4));
        assert!(consumed.is_none());
        assert_eq!(level.front().unwrap().order_id.as_str(), "A");
        assert_eq!(level.front().unwrap().quantity, Quantity::from_u64(6));
        assert_eq!(level.total_quantity(), Quantity::from_u64(11));
    }

    #[test]
    fn test_fill_front_exact_removes_order() {
        let mut level = PriceLevel::new();
        level.insert(resting("A", 10, 1));
        level.insert(resting("B", 5, 2));

        let consumed = level.fill_front(Quantity::from_u64(10)).unwrap();
        assert_eq!(consumed.order_id.as_str(), "A");
        assert_eq!(level.front().unwrap().order_id.as_str(), "B");
        assert_eq!(level.total_quantity(), Quantity::from_u64(5));
    }

    #[test]
    fn test_remove_by_id() {
        let mut level = PriceLevel::new();
        level.insert(resting("A", 1, 1));
        level.insert(resting("B", 2, 2));

        let removed = level.remove(&OrderId::new("A")).unwrap();
        assert_eq!(removed.quantity, Quantity::from_u64(1));
        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_quantity(), Quantity::from_u64(2));
        assert!(level.remove(&OrderId::new("A")).is_none());
    }

    #[test]
    fn test_reduce_quantity_keeps_position() {
        let mut level = PriceLevel::new();
        level.insert(resting("A", 10, 1));
        level.insert(resting("B", 5, 2));

        assert!(level.reduce_quantity(&OrderId::new("B"), Quantity::from_u64(3)));
        assert_eq!(level.front().unwrap().order_id.as_str(), "A");
        assert_eq!(level.get(&OrderId::new("B")).unwrap().quantity, Quantity::from_u64(3));
        assert_eq!(level.total_quantity(), Quantity::from_u64(13));
        assert!(!level.reduce_quantity(&OrderId::new("Z"), Quantity::from_u64(1)));
    }

    #[test]
    fn test_reduce_quantity_collapses_reserve() {
        let mut level = PriceLevel::new();
        level.insert(RestingOrder::iceberg_clip(
            Side::BUY,
            OrderId::new("I1"),
            Price::from_u64(100),
            1,
            Quantity::from_u64(50),
            Quantity::from_u64(10),
        ));

        assert!(level.reduce_quantity(&OrderId::new("I1"), Quantity::from_u64(4)));
        let order = level.get(&OrderId::new("I1")).unwrap();
        assert_eq!(order.quantity, Quantity::from_u64(4));
        assert!(order.reserve.is_none());
    }

    #[test]
    fn test_drain_preserves_fifo() {
        let mut level = PriceLevel::new();
        level.insert(resting("A", 1, 1));
        level.insert(resting("B", 2, 2));

        let ids: Vec<String> = level
            .drain()
            .map(|order| order.order_id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert!(level.is_empty());
        assert_eq!(level.total_quantity(), Quantity::zero());
    }

    #[test]
    fn test_display_rendering() {
        let order = resting("B1", 10, 1);
        assert_eq!(order.to_string(), "10@100#B1");

        let clip = RestingOrder::iceberg_clip(
            Side::SELL,
            OrderId::new("I1"),
            Price::from_u64(99),
            2,
            Quantity::from_u64(20),
            Quantity::from_u64(4),
        );
        assert_eq!(clip.to_string(), "4(20)@99#I1");
    }
}
