//! Central configuration for the order book viz demo.
//!
//! All demo parameters are defined here for easy tuning.

use types::Price;

/// Master configuration for the demo binary.
#[derive(Debug, Clone)]
pub struct VizConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Simulated Book Shape
    // ─────────────────────────────────────────────────────────────────────────
    /// Lowest tracked tick price.
    pub min_price: Price,
    /// Highest tracked tick price.
    pub max_price: Price,
    /// Index offset marking the top of the buy side (inclusive).
    pub buy_max_ind: i64,

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshot Window
    // ─────────────────────────────────────────────────────────────────────────
    /// Number of price points to show.
    pub n_prices: usize,
    /// Number of order slots to show per price.
    pub n_orders: usize,
    /// Center the window on this tick.
    pub mid_price: Price,

    // ─────────────────────────────────────────────────────────────────────────
    // Panel Layout
    // ─────────────────────────────────────────────────────────────────────────
    /// Number of snapshots to render side by side.
    pub panels: usize,
    /// Grid columns.
    pub sx: usize,
    /// Grid rows.
    pub sy: usize,
    /// Scale factor on the per-slot cell width.
    pub figscale: f64,
    /// Annotate populated cells with their absolute size.
    pub annot: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Book Seeding
    // ─────────────────────────────────────────────────────────────────────────
    /// Probability that a price level holds any orders at all.
    pub fill_probability: f64,
    /// Maximum orders seeded at one price level.
    pub max_orders_per_level: usize,
    /// Minimum seeded order size.
    pub min_quantity: u64,
    /// Maximum seeded order size.
    pub max_quantity: u64,
    /// Base rng seed; panel `n` uses `seed + n`.
    pub seed: u64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            // Simulated Book Shape
            min_price: Price(4900),
            max_price: Price(5160),
            buy_max_ind: 132, // buy side tops out at tick 5032

            // Snapshot Window
            n_prices: 50,
            n_orders: 40,
            mid_price: Price(5032),

            // Panel Layout
            panels: 2,
            sx: 2,
            sy: 1,
            figscale: 1.0,
            annot: false,

            // Book Seeding
            fill_probability: 0.6,
            max_orders_per_level: 8,
            min_quantity: 1,
            max_quantity: 99,
            seed: 42,
        }
    }
}

impl VizConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters for fluent configuration
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the price window width.
    pub fn n_prices(mut self, n: usize) -> Self {
        self.n_prices = n;
        self
    }

    /// Set the number of order slots per price.
    pub fn n_orders(mut self, n: usize) -> Self {
        self.n_orders = n;
        self
    }

    /// Set the window center tick.
    pub fn mid_price(mut self, tick: i64) -> Self {
        self.mid_price = Price(tick);
        self
    }

    /// Set the number of side-by-side snapshots.
    pub fn panels(mut self, panels: usize) -> Self {
        self.panels = panels.max(1);
        self
    }

    /// Set the panel grid dimensions.
    pub fn grid(mut self, sx: usize, sy: usize) -> Self {
        self.sx = sx.max(1);
        self.sy = sy.max(1);
        self
    }

    /// Set the cell width scale factor.
    pub fn figscale(mut self, figscale: f64) -> Self {
        self.figscale = figscale;
        self
    }

    /// Toggle per-cell annotations.
    pub fn annot(mut self, annot: bool) -> Self {
        self.annot = annot;
        self
    }

    /// Set the level fill probability.
    pub fn fill_probability(mut self, p: f64) -> Self {
        self.fill_probability = p;
        self
    }

    /// Set the base rng seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Computed Properties
    // ─────────────────────────────────────────────────────────────────────────

    /// Lowest tick of the snapshot window.
    pub fn window_lo(&self) -> Price {
        Price(self.mid_price.raw() - (self.n_prices / 2) as i64)
    }

    /// Highest tick of the snapshot window.
    pub fn window_hi(&self) -> Price {
        Price(self.mid_price.raw() + (self.n_prices / 2) as i64)
    }

    /// Whether the snapshot window stays inside the tracked price range.
    ///
    /// The snapshot builder treats an out-of-range window as a caller bug,
    /// so the demo checks this up front.
    pub fn window_in_range(&self) -> bool {
        self.window_lo() >= self.min_price && self.window_hi() <= self.max_price
    }

    /// Grid capacity in tables.
    pub fn grid_capacity(&self) -> usize {
        self.sx * self.sy
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preset Configurations
// ─────────────────────────────────────────────────────────────────────────────

impl VizConfig {
    /// Quick single-book view with annotations.
    pub fn demo() -> Self {
        Self::default().panels(1).grid(1, 1).annot(true)
    }

    /// Busy book: every level filled, deeper queues.
    pub fn dense() -> Self {
        let mut config = Self::default().fill_probability(1.0);
        config.max_orders_per_level = 30;
        config
    }

    /// Thin book: mostly empty levels.
    pub fn sparse() -> Self {
        Self::default().fill_probability(0.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_consistency() {
        let config = VizConfig::default();

        // The default window must sit inside the default tracked range.
        assert!(config.window_in_range());
        // The buy boundary matches the default window center.
        assert_eq!(config.min_price.raw() + config.buy_max_ind, 5032);
        // The default panel count fits the default grid.
        assert!(config.panels <= config.grid_capacity());
        assert!(config.min_quantity >= 1, "zero-size orders are rejected");
        assert!(config.min_quantity <= config.max_quantity);
    }

    #[test]
    fn test_builder_pattern() {
        let config = VizConfig::new()
            .n_prices(20)
            .n_orders(8)
            .mid_price(5000)
            .panels(4)
            .grid(2, 2);

        assert_eq!(config.n_prices, 20);
        assert_eq!(config.n_orders, 8);
        assert_eq!(config.mid_price, Price(5000));
        assert_eq!(config.panels, 4);
        assert_eq!(config.grid_capacity(), 4);
    }

    #[test]
    fn test_window_bounds() {
        let config = VizConfig::new().n_prices(50).mid_price(5032);

        assert_eq!(config.window_lo(), Price(5007));
        assert_eq!(config.window_hi(), Price(5057));
        assert!(config.window_in_range());

        let out = VizConfig::new().mid_price(4905);
        assert!(!out.window_in_range());
    }

    #[test]
    fn test_preset_configs_differ_from_default() {
        let default = VizConfig::default();
        let demo = VizConfig::demo();
        let dense = VizConfig::dense();
        let sparse = VizConfig::sparse();

        assert_ne!(demo.panels, default.panels);
        assert_ne!(dense.fill_probability, default.fill_probability);
        assert_ne!(sparse.fill_probability, default.fill_probability);
    }
}
