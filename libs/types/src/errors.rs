//! Error taxonomy for the command boundary
//!
//! The matching core itself treats all data-driven conditions (unknown
//! identifiers, insufficient liquidity) as defined no-op or partial-fill
//! behavior; only the wire boundary can fail, and it fails here.

use thiserror::Error;

/// Failure to turn an input line into a [`Command`](crate::order::Command)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command word: {0}")]
    UnknownCommand(String),

    #[error("unknown order type: {0}")]
    UnknownOrderType(String),

    #[error("unknown side: {0}")]
    UnknownSide(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid integer for {field}: {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("empty input line")]
    EmptyLine,
}
