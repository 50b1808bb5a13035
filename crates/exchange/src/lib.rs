//! Exchange: simulated order book state for the heatmap visualization.
//!
//! This crate provides the input side of the pipeline:
//! - A contiguous array of price points over an integer tick range
//! - Resting orders in insertion (FIFO) order per price point
//! - A buy/sell boundary derived from the price alone
//! - Error handling for book mutations

mod book;
mod error;

pub use book::{Exchange, PricePoint};
pub use error::{ExchangeError, Result};
