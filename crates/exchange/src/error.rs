//! Error types for exchange operations.

use std::fmt;
use types::{OrderId, Price};

/// Result type for exchange operations.
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Errors that can occur when mutating the exchange book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// The price is outside the tracked `[min_price, max_price]` range.
    PriceOutOfRange(Price),
    /// Invalid order: zero quantity.
    ZeroQuantity,
    /// The requested order was not found.
    OrderNotFound(OrderId),
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeError::PriceOutOfRange(p) => {
                write!(f, "price {} is outside the tracked range", p)
            }
            ExchangeError::ZeroQuantity => write!(f, "order quantity cannot be zero"),
            ExchangeError::OrderNotFound(id) => write!(f, "order not found: {}", id),
        }
    }
}

impl std::error::Error for ExchangeError {}
