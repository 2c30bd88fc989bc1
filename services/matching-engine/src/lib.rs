//! Order-Matching Core
//!
//! Single-instrument matching engine implementing price-time priority over
//! a live book of resting orders, with Limit, Market, IOC, FOK and Iceberg
//! submit semantics plus Cancel and Replace.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced (price, then sequence)
//! - Deterministic matching (same command sequence → same outputs)
//! - Zero-quantity orders never rest
//! - Conservation of quantity on every fill

pub mod book;
pub mod engine;
pub mod events;
pub mod matching;
pub mod report;

pub use engine::{MatchingEngine, Outcome};
