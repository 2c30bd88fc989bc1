//! Matching engine core
//!
//! Owns the order book and the sequence counter, dispatches each command
//! on its variant, and applies the per-kind admission and matching
//! semantics. Strictly sequential: one command mutates the book at a time
//! and runs to completion, which is what makes replay deterministic.

use tracing::debug;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Command, OrderRequest, Side};

use crate::book::{OrderBook, RestingOrder};
use crate::events::Execution;
use crate::matching::sweep::{sweep, SweepPolicy};
use crate::report::BookReport;

/// Result of executing one command
///
/// The three submit/cancel/replace output shapes are distinct on purpose:
/// cancel produces no output at all, replace an empty-but-present output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Submit family: the command's trade cost (zero when nothing filled)
    Executed(Execution),
    /// Cancel: no output
    Silent,
    /// Replace: present-but-empty output
    Replaced,
    /// End: the drained book report
    Report(BookReport),
}

/// Single-instrument matching engine
///
/// The sequence counter starts at zero on construction and is never
/// reset while the engine lives; process restart is the only reset.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    book: OrderBook,
    sequence_counter: u64,
}

impl MatchingEngine {
    /// Create a new engine with an empty book
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
            sequence_counter: 0,
        }
    }

    /// Next sequence number (monotonically increasing, never reused)
    fn next_sequence(&mut self) -> u64 {
        self.sequence_counter += 1;
        self.sequence_counter
    }

    /// Execute one command against the book
    ///
    /// This is the single entry point of the sequential command stream.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Submit(request) => Outcome::Executed(self.submit(request)),
            Command::Cancel { order_id } => {
                self.cancel(&order_id);
                Outcome::Silent
            }
            Command::Replace {
                order_id,
                quantity,
                price,
            } => {
                self.replace(&order_id, quantity, price);
                Outcome::Replaced
            }
            Command::End => Outcome::Report(BookReport::drain_from(&mut self.book)),
        }
    }

    /// Match a submit-family order, dispatching on its kind
    pub fn submit(&mut self, request: OrderRequest) -> Execution {
        let sequence = self.next_sequence();
        debug!(id = %request.order_id(), side = ?request.side(), sequence, "submit");
        match request {
            OrderRequest::Limit {
                side,
                order_id,
                quantity,
                price,
            } => self.submit_limit(side, order_id, quantity, price, sequence),
            OrderRequest::Market {
                side,
                order_id,
                quantity,
            } => self.submit_market(side, order_id, quantity),
            OrderRequest::ImmediateOrCancel {
                side,
                order_id,
                quantity,
                price,
            } => self.submit_ioc(side, order_id, quantity, price),
            OrderRequest::FillOrKill {
                side,
                order_id,
                quantity,
                price,
            } => self.submit_fok(side, order_id, quantity, price),
            OrderRequest::Iceberg {
                side,
                order_id,
                total_quantity,
                price,
                display_size,
            } => self.submit_iceberg(side, order_id, total_quantity, price, display_size, sequence),
        }
    }

    /// Limit: match up to the limit price, rest the residual
    ///
    /// The residual keeps the sequence assigned at admission, so it queues
    /// behind nothing that arrived later.
    fn submit_limit(
        &mut self,
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
        sequence: u64,
    ) -> Execution {
        let mut remaining = quantity;
        let execution = sweep(&mut self.book, side, &mut remaining, SweepPolicy::priced(price));
        if !remaining.is_zero() {
            self.book
                .insert(RestingOrder::limit(side, order_id, remaining, price, sequence));
        }
        execution
    }

    /// Market: match at any resting price; the residual is discarded
    ///
    /// An unfilled remainder after the opposite side is exhausted simply
    /// ends the order; no resting liquidity means the remainder is lost.
    fn submit_market(&mut self, side: Side, order_id: OrderId, quantity: Quantity) -> Execution {
        let mut remaining = quantity;
        let execution = sweep(&mut self.book, side, &mut remaining, SweepPolicy::unpriced());
        if !remaining.is_zero() {
            debug!(id = %order_id, residual = %remaining, "market residual discarded");
        }
        execution
    }

    /// IOC: match up to the limit price; the residual is discarded
    fn submit_ioc(
        &mut self,
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Execution {
        let mut remaining = quantity;
        let execution = sweep(&mut self.book, side, &mut remaining, SweepPolicy::priced(price));
        if !remaining.is_zero() {
            debug!(id = %order_id, residual = %remaining, "IOC residual discarded");
        }
        execution
    }

    /// FOK: admission-checked all-or-nothing match
    ///
    /// The pre-check and the sweep are atomic with respect to the command
    /// stream; once the check passes, the sweep is guaranteed to consume
    /// the full quantity, so nothing ever rests.
    fn submit_fok(
        &mut self,
        side: Side,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Execution {
        let available = self.book.satisfied_quantity(side.opposite(), price);
        if available < quantity {
            debug!(id = %order_id, %available, requested = %quantity, "FOK killed");
            return Execution::empty();
        }
        let mut remaining = quantity;
        let execution = sweep(&mut self.book, side, &mut remaining, SweepPolicy::priced(price));
        debug_assert!(remaining.is_zero(), "admission check guarantees full fill");
        execution
    }

    /// Iceberg: one fill event per submission, then re-clip
    ///
    /// After the single fill the hidden total shrinks by the filled
    /// amount and a fresh clip of `min(total, display_size)` rests with a
    /// new sequence number, losing time priority. With no fill the clip
    /// rests like a limit residual, keeping its admission sequence.
    fn submit_iceberg(
        &mut self,
        side: Side,
        order_id: OrderId,
        total_quantity: Quantity,
        price: Price,
        display_size: Quantity,
        sequence: u64,
    ) -> Execution {
        let mut clip = total_quantity.min(display_size);
        if clip.is_zero() {
            return Execution::empty();
        }

        let before = clip;
        let execution = sweep(
            &mut self.book,
            side,
            &mut clip,
            SweepPolicy::first_fill_only(price),
        );
        let filled = before - clip;
        let total = total_quantity - filled;

        if !total.is_zero() {
            let sequence = if filled.is_zero() {
                sequence
            } else {
                self.next_sequence()
            };
            self.book.insert(RestingOrder::iceberg_clip(
                side,
                order_id,
                price,
                sequence,
                total,
                display_size,
            ));
        }
        execution
    }

    /// Cancel: remove by identifier; unknown identifiers are a no-op
    fn cancel(&mut self, order_id: &OrderId) {
        match self.book.remove_by_id(order_id) {
            Some(order) => debug!(id = %order_id, qty = %order.quantity, "cancelled"),
            None => debug!(id = %order_id, "cancel of unknown id ignored"),
        }
    }

    /// Replace: amend in place when possible, otherwise re-queue
    ///
    /// Reducing quantity at an unchanged price keeps the priority slot.
    /// A price change or a quantity increase removes the old order and
    /// inserts a plain limit order with a new sequence number, sending it
    /// to the back of whatever price level it lands on. Replacing down to
    /// zero quantity removes the order outright.
    fn replace(&mut self, order_id: &OrderId, quantity: Quantity, price: Price) {
        let Some(current) = self.book.get(order_id) else {
            debug!(id = %order_id, "replace of unknown id ignored");
            return;
        };

        if current.price == price && quantity <= current.quantity {
            if quantity.is_zero() {
                self.book.remove_by_id(order_id);
            } else {
                self.book.reduce_quantity(order_id, quantity);
            }
            debug!(id = %order_id, qty = %quantity, "replaced in place");
            return;
        }

        let Some(old) = self.book.remove_by_id(order_id) else {
            return;
        };
        if !quantity.is_zero() {
            let sequence = self.next_sequence();
            self.book.insert(RestingOrder::limit(
                old.side,
                old.order_id,
                quantity,
                price,
                sequence,
            ));
        }
        debug!(id = %order_id, qty = %quantity, price = %price, "replaced with new priority");
    }

    /// Read access to the book (diagnostics and tests)
    pub fn book(&self) -> &OrderBook {
        &self.book
    }
}
