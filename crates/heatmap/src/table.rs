//! Snapshot builder: converts exchange price points to an order book table.
//!
//! The table is a dense, windowed grid of signed order sizes: one row per
//! tick in the price window, one column per order slot. Buy-side sizes are
//! positive, sell-side sizes negative, empty slots zero.

use exchange::Exchange;
use serde::{Deserialize, Serialize};
use types::Price;

/// Parameters for building a snapshot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotParams {
    /// Number of price points to show.
    pub n_prices: usize,
    /// Number of order slots to show per price.
    pub n_orders: usize,
    /// Center the price window on this tick.
    pub mid_price: Price,
}

impl Default for SnapshotParams {
    fn default() -> Self {
        Self {
            n_prices: 50,
            n_orders: 40,
            mid_price: Price(5032),
        }
    }
}

impl SnapshotParams {
    /// Create params with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price window width.
    pub fn n_prices(mut self, n: usize) -> Self {
        self.n_prices = n;
        self
    }

    /// Set the number of order slots.
    pub fn n_orders(mut self, n: usize) -> Self {
        self.n_orders = n;
        self
    }

    /// Set the window center tick.
    pub fn mid_price(mut self, price: Price) -> Self {
        self.mid_price = price;
        self
    }
}

/// Windowed table of signed order sizes, rows sorted by descending price.
///
/// Row labels are display prices (tick / 100); cell values are signed
/// quantities: positive for buy-side orders, negative for sell-side, zero
/// for empty slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTable {
    /// Display price per row, descending.
    prices: Vec<f64>,
    /// Signed order sizes, row-major, same order as `prices`.
    rows: Vec<Vec<i64>>,
    /// Number of order slots per row.
    n_orders: usize,
}

impl BookTable {
    /// Build a snapshot table from the exchange's resting orders.
    ///
    /// The inclusive window is `[mid_price - n_prices/2, mid_price +
    /// n_prices/2]` (integer division). For each price point in the window,
    /// the first `n_orders` orders fill the row's slots in insertion order,
    /// signed positive for buy-side ticks and negative for sell-side; excess
    /// orders are silently dropped, never aggregated. A price point with no
    /// orders leaves its row all zero.
    ///
    /// # Panics
    ///
    /// Panics if the window extends outside the exchange's tracked price
    /// range. Bounds are a caller precondition, not validated here.
    pub fn from_exchange(ex: &Exchange, params: &SnapshotParams) -> Self {
        let half = (params.n_prices / 2) as i64;
        let lo_tick = params.mid_price.raw() - half;
        let hi_tick = params.mid_price.raw() + half;

        let min_ind = (lo_tick - ex.min_price().raw()) as usize;
        let max_ind = (hi_tick - ex.min_price().raw()) as usize;

        let n_rows = (hi_tick - lo_tick + 1) as usize;
        let mut rows = vec![vec![0i64; params.n_orders]; n_rows];

        for ppoint in &ex.price_points()[min_ind..=max_ind] {
            if ppoint.is_empty() {
                continue;
            }
            let orders_num = params.n_orders.min(ppoint.order_count());
            let sign: i64 = if ex.is_buy_side(ppoint.price()) { 1 } else { -1 };
            let row = &mut rows[(ppoint.price().raw() - lo_tick) as usize];
            for (slot, order) in ppoint.iter().take(orders_num).enumerate() {
                row[slot] = sign * order.quantity.raw() as i64;
            }
        }

        let mut prices: Vec<f64> = (lo_tick..=hi_tick).map(|t| Price(t).to_float()).collect();
        prices.reverse();
        rows.reverse();

        Self {
            prices,
            rows,
            n_orders: params.n_orders,
        }
    }

    /// Number of price rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of order slots per row.
    pub fn n_cols(&self) -> usize {
        self.n_orders
    }

    /// Display price of the given row (descending from row 0).
    pub fn price_at(&self, row: usize) -> f64 {
        self.prices[row]
    }

    /// Signed order size at the given row and slot.
    pub fn value(&self, row: usize, col: usize) -> i64 {
        self.rows[row][col]
    }

    /// Signed order sizes of one price row.
    pub fn row(&self, row: usize) -> &[i64] {
        &self.rows[row]
    }

    /// Largest absolute order size in the table (zero if the table is all
    /// empty slots).
    pub fn max_abs(&self) -> i64 {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|v| v.abs())
            .max()
            .unwrap_or(0)
    }

    /// Number of populated (non-zero) cells.
    pub fn populated_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|v| **v != 0)
            .count()
    }

    /// Iterate over `(display_price, row)` pairs, highest price first.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[i64])> {
        self.prices
            .iter()
            .copied()
            .zip(self.rows.iter().map(|r| r.as_slice()))
    }
}
