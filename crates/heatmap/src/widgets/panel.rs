//! Panel widget - several snapshot tables side by side for comparison.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::options::RenderOptions;
use crate::table::BookTable;
use crate::widgets::heatmap::BookHeatmap;

/// Grid of order book heatmaps with one shared color scale.
///
/// Tables fill the grid row-major: table `n` lands at grid cell
/// `(n / sx, n % sx)`. Trailing grid cells stay empty. All heatmaps share
/// one color scale (the global size maximum) and shared axes: price labels
/// only in the leftmost column, slot labels only in the bottom row.
pub struct BookPanel<'a> {
    /// The snapshot tables to render, in grid fill order.
    tables: &'a [BookTable],
    /// Grid columns.
    sx: usize,
    /// Grid rows.
    sy: usize,
    /// Scale factor on the per-slot cell width.
    figscale: f64,
    /// Per-table titles; when provided, must cover every table.
    titles: Option<&'a [String]>,
    /// Rendering options.
    options: RenderOptions,
}

impl<'a> BookPanel<'a> {
    /// Create a 1x1 panel for the given tables.
    pub fn new(tables: &'a [BookTable]) -> Self {
        Self {
            tables,
            sx: 1,
            sy: 1,
            figscale: 1.0,
            titles: None,
            options: RenderOptions::default(),
        }
    }

    /// Set the grid dimensions (`sx` columns by `sy` rows).
    pub fn grid(mut self, sx: usize, sy: usize) -> Self {
        self.sx = sx.max(1);
        self.sy = sy.max(1);
        self
    }

    /// Scale the per-slot cell width.
    pub fn figscale(mut self, figscale: f64) -> Self {
        self.figscale = figscale;
        self
    }

    /// Set per-table titles. Must hold at least one entry per table.
    pub fn titles(mut self, titles: &'a [String]) -> Self {
        self.titles = Some(titles);
        self
    }

    /// Set the rendering options.
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// The color scale shared by every heatmap in the panel.
    fn shared_max_abs(&self) -> i64 {
        self.tables.iter().map(BookTable::max_abs).max().unwrap_or(0)
    }

    /// Cell width after applying `figscale`.
    fn scaled_cell_width(&self) -> u16 {
        let scaled = (self.options.cell_width.max(1) as f64 * self.figscale).round();
        (scaled as u16).max(1)
    }
}

impl Widget for BookPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_abs = self.shared_max_abs();
        let options = self.options.cell_width(self.scaled_cell_width());

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, self.sy as u32); self.sy])
            .split(area);

        let cells: Vec<Rect> = row_areas
            .iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, self.sx as u32); self.sx])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        for (n, table) in self.tables.iter().enumerate() {
            let row = n / self.sx;
            let col = n % self.sx;

            let mut heatmap = BookHeatmap::new(table)
                .options(options)
                .max_abs(max_abs)
                .price_labels(col == 0)
                .slot_labels(row == self.sy - 1);
            if let Some(titles) = self.titles {
                heatmap = heatmap.title(&titles[n]);
            }

            heatmap.render(cells[row * self.sx + col], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SnapshotParams;
    use exchange::Exchange;
    use types::{Price, Quantity};

    fn table_with_order(qty: u64) -> BookTable {
        let mut ex = Exchange::new(Price(0), Price(4), 2);
        ex.place_order(Price(1), Quantity(qty)).unwrap();

        let params = SnapshotParams::new()
            .n_prices(4)
            .n_orders(2)
            .mid_price(Price(2));
        BookTable::from_exchange(&ex, &params)
    }

    #[test]
    fn test_single_table_panel() {
        let tables = vec![table_with_order(5)];
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        BookPanel::new(&tables).render(area, &mut buf);
    }

    #[test]
    fn test_row_major_fill_leaves_trailing_cell_empty() {
        let tables = vec![table_with_order(5), table_with_order(6), table_with_order(7)];
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        BookPanel::new(&tables).grid(2, 2).render(area, &mut buf);

        // Quadrants (0,0), (0,1), (1,0) got heatmaps: each draws a border.
        assert_ne!(buf[(0, 0)].symbol(), " ");
        assert_ne!(buf[(30, 0)].symbol(), " ");
        assert_ne!(buf[(0, 10)].symbol(), " ");

        // Quadrant (1,1) stays untouched.
        for x in 30..60 {
            for y in 10..20 {
                assert_eq!(buf[(x, y)].symbol(), " ");
                assert_eq!(buf[(x, y)].bg, ratatui::style::Color::Reset);
            }
        }
    }

    #[test]
    fn test_titles_rendered_per_table() {
        let tables = vec![table_with_order(5), table_with_order(6)];
        let titles = vec!["before".to_string(), "after".to_string()];
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        BookPanel::new(&tables)
            .grid(2, 1)
            .titles(&titles)
            .render(area, &mut buf);

        let top_row: String = (0..60).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(top_row.contains("before"));
        assert!(top_row.contains("after"));
    }

    #[test]
    fn test_shared_color_scale_dims_smaller_table() {
        // Same size order in both tables, but the second table holds a much
        // larger one; with a shared scale the common order renders at a
        // weaker intensity than it would alone.
        let small = table_with_order(5);
        let mut ex = Exchange::new(Price(0), Price(4), 2);
        ex.place_order(Price(1), Quantity(5)).unwrap();
        ex.place_order(Price(3), Quantity(50)).unwrap();
        let big = BookTable::from_exchange(
            &ex,
            &SnapshotParams::new().n_prices(4).n_orders(2).mid_price(Price(2)),
        );

        let solo_area = Rect::new(0, 0, 20, 10);
        let mut solo_buf = Buffer::empty(solo_area);
        BookHeatmap::new(&small)
            .price_labels(false)
            .slot_labels(false)
            .options(RenderOptions::new().cell_width(1))
            .render(solo_area, &mut solo_buf);
        let solo_bg = solo_buf[(1, 4)].bg;

        let tables = vec![small, big];
        let panel_area = Rect::new(0, 0, 40, 10);
        let mut panel_buf = Buffer::empty(panel_area);
        BookPanel::new(&tables)
            .grid(2, 1)
            .options(RenderOptions::new().cell_width(1))
            .render(panel_area, &mut panel_buf);

        // Leftmost column shows price labels (8 wide), so the first slot of
        // the left heatmap sits just past the gutter.
        let shared_bg = panel_buf[(9, 4)].bg;
        assert_ne!(solo_bg, shared_bg);
    }

    #[test]
    fn test_figscale_widens_cells() {
        let tables = vec![table_with_order(5)];
        let area = Rect::new(0, 0, 40, 10);

        let mut buf = Buffer::empty(area);
        BookPanel::new(&tables)
            .figscale(2.0)
            .options(RenderOptions::new().cell_width(1))
            .render(area, &mut buf);

        // With the doubled cell width both columns of the first slot are
        // painted; the buy order at tick 1 sits on row y = 4.
        assert_ne!(buf[(9, 4)].bg, ratatui::style::Color::Reset);
        assert_ne!(buf[(10, 4)].bg, ratatui::style::Color::Reset);
    }
}
