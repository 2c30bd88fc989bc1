//! Final book report
//!
//! Rendering the report drains the book: both sides are emptied in full
//! priority order and the engine is left with no resting orders. This is
//! the terminal operation of a session, so nothing needs the book after.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::order::Side;

use crate::book::{OrderBook, RestingOrder};

/// The drained contents of the book, bid side then ask side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReport {
    pub bids: Vec<RestingOrder>,
    pub asks: Vec<RestingOrder>,
}

impl BookReport {
    /// Drain `book` into a report; the book is empty afterwards
    pub fn drain_from(book: &mut OrderBook) -> Self {
        Self {
            bids: book.drain_side(Side::BUY),
            asks: book.drain_side(Side::SELL),
        }
    }
}

impl fmt::Display for BookReport {
    /// Renders `B: ` then each bid as `quantity@price#id` (icebergs as
    /// `quantity(totalQuantity)@price#id`), a newline, then `S: ` and each
    /// ask likewise, every order followed by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B: ")?;
        for order in &self.bids {
            write!(f, "{} ", order)?;
        }
        write!(f, "\nS: ")?;
        for order in &self.asks {
            write!(f, "{} ", order)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::numeric::{Price, Quantity};

    fn order(id: &str, side: Side, qty: u64, price: u64, seq: u64) -> RestingOrder {
        RestingOrder::limit(
            side,
            OrderId::new(id),
            Quantity::from_u64(qty),
            Price::from_u64(price),
            seq,
        )
    }

    #[test]
    fn test_report_drains_book() {
        let mut book = OrderBook::new();
        book.insert(order("B1", Side::BUY, 10, 100, 1));
        book.insert(order("S1", Side::SELL, 4, 105, 2));

        let report = BookReport::drain_from(&mut book);
        assert_eq!(report.bids.len(), 1);
        assert_eq!(report.asks.len(), 1);
        assert_eq!(book.resting_count(), 0);
        assert!(book.side_is_empty(Side::BUY));
        assert!(book.side_is_empty(Side::SELL));
    }

    #[test]
    fn test_report_rendering() {
        let mut book = OrderBook::new();
        book.insert(order("B1", Side::BUY, 10, 100, 1));
        book.insert(order("B2", Side::BUY, 5, 102, 2));
        book.insert(order("S1", Side::SELL, 4, 105, 3));

        let report = BookReport::drain_from(&mut book);
        assert_eq!(report.to_string(), "B: 5@102#B2 10@100#B1 \nS: 4@105#S1 ");
    }

    #[test]
    fn test_empty_report_rendering() {
        let mut book = OrderBook::new();
        let report = BookReport::drain_from(&mut book);
        assert_eq!(report.to_string(), "B: \nS: ");
    }

    #[test]
    fn test_iceberg_rendering_in_report() {
        let mut book = OrderBook::new();
        book.insert(RestingOrder::iceberg_clip(
            Side::SELL,
            OrderId::new("I1"),
            Price::from_u64(101),
            1,
            Quantity::from_u64(50),
            Quantity::from_u64(10),
        ));

        let report = BookReport::drain_from(&mut book);
        assert_eq!(report.to_string(), "B: \nS: 10(50)@101#I1 ");
    }
}
