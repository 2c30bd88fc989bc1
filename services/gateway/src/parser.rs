//! Wire protocol parser
//!
//! One command per line, fields space-separated:
//!
//! ```text
//! SUB LO  <B|S> <id> <qty> <price>
//! SUB MO  <B|S> <id> <qty>
//! SUB IOC <B|S> <id> <qty> <price>
//! SUB FOK <B|S> <id> <qty> <price>
//! SUB ICE <B|S> <id> <totalQty> <price> <displaySize>
//! CXL <id>
//! CRP <id> <qty> <price>
//! END
//! ```
//!
//! The core assumes well-formed commands; everything malformed stops here.

use types::errors::ParseError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Command, OrderRequest, Side};

// Command words of the wire protocol.
const SUBMIT: &str = "SUB";
const CANCEL: &str = "CXL";
const REPLACE: &str = "CRP";
const END: &str = "END";
const LIMIT: &str = "LO";
const MARKET: &str = "MO";
const IOC: &str = "IOC";
const FOK: &str = "FOK";
const ICEBERG: &str = "ICE";
const BUY: &str = "B";
const SELL: &str = "S";

/// Parse one input line into a [`Command`]
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut fields = line.split_whitespace();
    let command_word = fields.next().ok_or(ParseError::EmptyLine)?;

    match command_word {
        SUBMIT => parse_submit(&mut fields).map(Command::Submit),
        CANCEL => Ok(Command::Cancel {
            order_id: order_id(&mut fields)?,
        }),
        REPLACE => Ok(Command::Replace {
            order_id: order_id(&mut fields)?,
            quantity: quantity(&mut fields, "quantity")?,
            price: price(&mut fields)?,
        }),
        END => Ok(Command::End),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_submit<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
) -> Result<OrderRequest, ParseError> {
    let order_type = fields.next().ok_or(ParseError::MissingField("order type"))?;
    let side = side(fields)?;
    let order_id = order_id(fields)?;

    match order_type {
        LIMIT => Ok(OrderRequest::Limit {
            side,
            order_id,
            quantity: quantity(fields, "quantity")?,
            price: price(fields)?,
        }),
        MARKET => Ok(OrderRequest::Market {
            side,
            order_id,
            quantity: quantity(fields, "quantity")?,
        }),
        IOC => Ok(OrderRequest::ImmediateOrCancel {
            side,
            order_id,
            quantity: quantity(fields, "quantity")?,
            price: price(fields)?,
        }),
        FOK => Ok(OrderRequest::FillOrKill {
            side,
            order_id,
            quantity: quantity(fields, "quantity")?,
            price: price(fields)?,
        }),
        ICEBERG => Ok(OrderRequest::Iceberg {
            side,
            order_id,
            total_quantity: quantity(fields, "total quantity")?,
            price: price(fields)?,
            display_size: quantity(fields, "display size")?,
        }),
        other => Err(ParseError::UnknownOrderType(other.to_string())),
    }
}

fn side<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<Side, ParseError> {
    match fields.next().ok_or(ParseError::MissingField("side"))? {
        BUY => Ok(Side::BUY),
        SELL => Ok(Side::SELL),
        other => Err(ParseError::UnknownSide(other.to_string())),
    }
}

fn order_id<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<OrderId, ParseError> {
    fields
        .next()
        .map(OrderId::new)
        .ok_or(ParseError::MissingField("order id"))
}

fn integer<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<u64, ParseError> {
    let raw = fields.next().ok_or(ParseError::MissingField(field))?;
    raw.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: raw.to_string(),
    })
}

fn quantity<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<Quantity, ParseError> {
    integer(fields, field).map(Quantity::from_u64)
}

fn price<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<Price, ParseError> {
    integer(fields, "price").map(Price::from_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        let command = parse("SUB LO B B1 10 100").unwrap();
        assert_eq!(
            command,
            Command::Submit(OrderRequest::Limit {
                side: Side::BUY,
                order_id: OrderId::new("B1"),
                quantity: Quantity::from_u64(10),
                price: Price::from_u64(100),
            })
        );
    }

    #[test]
    fn test_parse_market() {
        let command = parse("SUB MO S M1 7").unwrap();
        assert_eq!(
            command,
            Command::Submit(OrderRequest::Market {
                side: Side::SELL,
                order_id: OrderId::new("M1"),
                quantity: Quantity::from_u64(7),
            })
        );
    }

    #[test]
    fn test_parse_ioc_and_fok() {
        assert_eq!(
            parse("SUB IOC B X1 20 103").unwrap(),
            Command::Submit(OrderRequest::ImmediateOrCancel {
                side: Side::BUY,
                order_id: OrderId::new("X1"),
                quantity: Quantity::from_u64(20),
                price: Price::from_u64(103),
            })
        );
        assert_eq!(
            parse("SUB FOK S F1 4 100").unwrap(),
            Command::Submit(OrderRequest::FillOrKill {
                side: Side::SELL,
                order_id: OrderId::new("F1"),
                quantity: Quantity::from_u64(4),
                price: Price::from_u64(100),
            })
        );
    }

    #[test]
    fn test_parse_iceberg() {
        let command = parse("SUB ICE S I1 50 102 10").unwrap();
        assert_eq!(
            command,
            Command::Submit(OrderRequest::Iceberg {
                side: Side::SELL,
                order_id: OrderId::new("I1"),
                total_quantity: Quantity::from_u64(50),
                price: Price::from_u64(102),
                display_size: Quantity::from_u64(10),
            })
        );
    }

    #[test]
    fn test_parse_cancel_replace_end() {
        assert_eq!(
            parse("CXL B1").unwrap(),
            Command::Cancel {
                order_id: OrderId::new("B1")
            }
        );
        assert_eq!(
            parse("CRP B1 5 101").unwrap(),
            Command::Replace {
                order_id: OrderId::new("B1"),
                quantity: Quantity::from_u64(5),
                price: Price::from_u64(101),
            }
        );
        assert_eq!(parse("END").unwrap(), Command::End);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(parse("  CXL   B1  ").unwrap(), parse("CXL B1").unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert_eq!(parse(""), Err(ParseError::EmptyLine));
        assert_eq!(
            parse("NOPE B1"),
            Err(ParseError::UnknownCommand("NOPE".to_string()))
        );
        assert_eq!(
            parse("SUB GTC B B1 10 100"),
            Err(ParseError::UnknownOrderType("GTC".to_string()))
        );
        assert_eq!(
            parse("SUB LO X B1 10 100"),
            Err(ParseError::UnknownSide("X".to_string()))
        );
        assert_eq!(
            parse("SUB LO B B1 10"),
            Err(ParseError::MissingField("price"))
        );
        assert_eq!(
            parse("SUB LO B B1 ten 100"),
            Err(ParseError::InvalidInteger {
                field: "quantity",
                value: "ten".to_string()
            })
        );
    }
}
