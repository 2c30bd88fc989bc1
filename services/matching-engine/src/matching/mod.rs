//! Matching logic module
//!
//! Implements the price-time priority matching sweep shared by every
//! submit-family order kind.

pub mod crossing;
pub mod sweep;

pub use crossing::can_match;
pub use sweep::{sweep, SweepPolicy};
