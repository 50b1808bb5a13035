//! Order book heatmap widget - one snapshot table as colored cells.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::color::diverging_color;
use crate::options::RenderOptions;
use crate::table::BookTable;

/// Character width of the price label gutter.
const PRICE_LABEL_WIDTH: u16 = 8;

/// Label every n-th order slot on the bottom axis.
const SLOT_LABEL_STEP: usize = 5;

/// Heatmap widget for a single order book snapshot table.
///
/// Each row is a price level (highest first), each column an order slot.
/// Populated cells are painted with the diverging color scale; empty slots
/// (value zero) are masked - left as blank background, never painted with
/// the scale's neutral color.
pub struct BookHeatmap<'a> {
    /// The snapshot table to render.
    table: &'a BookTable,
    /// Optional panel title.
    title: Option<&'a str>,
    /// Rendering options.
    options: RenderOptions,
    /// Shared color scale saturation point; table max when `None`.
    max_abs: Option<i64>,
    /// Draw the price label gutter.
    price_labels: bool,
    /// Draw the slot axis labels along the bottom.
    slot_labels: bool,
}

impl<'a> BookHeatmap<'a> {
    /// Create a heatmap for the given table.
    pub fn new(table: &'a BookTable) -> Self {
        Self {
            table,
            title: None,
            options: RenderOptions::default(),
            max_abs: None,
            price_labels: true,
            slot_labels: true,
        }
    }

    /// Set the title.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the rendering options.
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Saturate the color scale at the given size instead of the table's
    /// own maximum (for a scale shared across several heatmaps).
    pub fn max_abs(mut self, max_abs: i64) -> Self {
        self.max_abs = Some(max_abs);
        self
    }

    /// Toggle the price label gutter.
    pub fn price_labels(mut self, show: bool) -> Self {
        self.price_labels = show;
        self
    }

    /// Toggle the slot axis labels.
    pub fn slot_labels(mut self, show: bool) -> Self {
        self.slot_labels = show;
        self
    }
}

impl Widget for BookHeatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        if let Some(title) = self.title {
            block = block.title(title);
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.table.n_rows() == 0 {
            let text = Paragraph::new("No data");
            text.render(inner, buf);
            return;
        }

        let label_w = if self.price_labels {
            PRICE_LABEL_WIDTH.min(inner.width)
        } else {
            0
        };
        let grid_x = inner.x + label_w;
        let grid_w = inner.width - label_w;
        let grid_h = if self.slot_labels {
            inner.height.saturating_sub(1)
        } else {
            inner.height
        };
        let cell_w = self.options.cell_width.max(1);
        let max_abs = self.max_abs.unwrap_or_else(|| self.table.max_abs());

        for (i, (price, row)) in self.table.iter().enumerate() {
            if i as u16 >= grid_h {
                break;
            }
            let y = inner.y + i as u16;

            if label_w > 0 {
                let label = format!("{:>7.2}", price);
                buf.set_stringn(
                    inner.x,
                    y,
                    &label,
                    label_w as usize,
                    Style::default().fg(Color::Gray),
                );
            }

            for (slot, &value) in row.iter().enumerate() {
                let x = grid_x + slot as u16 * cell_w;
                if x + cell_w > grid_x + grid_w {
                    break;
                }
                if value == 0 {
                    // Masked: no order resting in this slot.
                    continue;
                }

                let color = diverging_color(value, max_abs);
                for dx in 0..cell_w {
                    buf[(x + dx, y)].set_bg(color);
                }
                if self.options.annot {
                    let text = value.unsigned_abs().to_string();
                    buf.set_stringn(
                        x,
                        y,
                        &text,
                        cell_w as usize,
                        Style::default().fg(Color::Black),
                    );
                }
            }
        }

        if self.slot_labels && grid_h < inner.height {
            let y = inner.y + grid_h;
            for slot in (0..self.table.n_cols()).step_by(SLOT_LABEL_STEP) {
                let x = grid_x + slot as u16 * cell_w;
                let text = slot.to_string();
                if x + text.len() as u16 > grid_x + grid_w {
                    break;
                }
                buf.set_stringn(
                    x,
                    y,
                    &text,
                    grid_w as usize,
                    Style::default().fg(Color::DarkGray),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SnapshotParams;
    use exchange::Exchange;
    use types::{Price, Quantity};

    fn small_table() -> BookTable {
        // Ticks 0..=4, buy side 0..=2; orders at ticks 1 (buy) and 3 (sell).
        let mut ex = Exchange::new(Price(0), Price(4), 2);
        ex.place_order(Price(1), Quantity(5)).unwrap();
        ex.place_order(Price(3), Quantity(9)).unwrap();

        let params = SnapshotParams::new()
            .n_prices(4)
            .n_orders(2)
            .mid_price(Price(2));
        BookTable::from_exchange(&ex, &params)
    }

    #[test]
    fn test_render_does_not_panic() {
        let table = small_table();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        BookHeatmap::new(&table).title("Book").render(area, &mut buf);
    }

    #[test]
    fn test_zero_cells_are_masked() {
        let table = small_table();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        BookHeatmap::new(&table)
            .price_labels(false)
            .slot_labels(false)
            .options(RenderOptions::new().cell_width(1))
            .render(area, &mut buf);

        // Rows top-down are ticks 4, 3, 2, 1, 0; grid starts inside the border.
        // Tick 4 has no orders: the whole row keeps the default background.
        assert_eq!(buf[(1, 1)].bg, Color::Reset);
        assert_eq!(buf[(2, 1)].bg, Color::Reset);

        // Tick 3 slot 0 holds the sell order: painted.
        assert_ne!(buf[(1, 2)].bg, Color::Reset);
        // Tick 3 slot 1 is empty: masked.
        assert_eq!(buf[(2, 2)].bg, Color::Reset);

        // Tick 1 slot 0 holds the buy order: painted.
        assert_ne!(buf[(1, 4)].bg, Color::Reset);
    }

    #[test]
    fn test_buy_and_sell_cells_use_opposite_hues() {
        let table = small_table();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        BookHeatmap::new(&table)
            .price_labels(false)
            .slot_labels(false)
            .options(RenderOptions::new().cell_width(1))
            .render(area, &mut buf);

        let sell = buf[(1, 2)].bg;
        let buy = buf[(1, 4)].bg;
        match (sell, buy) {
            (Color::Rgb(sr, _, sb), Color::Rgb(br, _, bb)) => {
                assert!(sb > sr, "sell cell shades cool");
                assert!(br > bb, "buy cell shades warm");
            }
            other => panic!("expected rgb cells, got {:?}", other),
        }
    }

    #[test]
    fn test_annotation_shows_absolute_value() {
        let table = small_table();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        BookHeatmap::new(&table)
            .price_labels(false)
            .slot_labels(false)
            .options(RenderOptions::new().cell_width(2).annot(true))
            .render(area, &mut buf);

        // The sell order of size 9 at tick 3 is annotated "9", not "-9".
        assert_eq!(buf[(1, 2)].symbol(), "9");
        // The buy order of size 5 at tick 1.
        assert_eq!(buf[(1, 4)].symbol(), "5");
    }

    #[test]
    fn test_price_labels_are_horizontal_display_prices() {
        let table = small_table();
        let area = Rect::new(0, 0, 24, 10);
        let mut buf = Buffer::empty(area);
        BookHeatmap::new(&table)
            .slot_labels(false)
            .render(area, &mut buf);

        // Top row is the highest display price, written left to right.
        let label: String = (1..8).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(label.trim(), "0.04");
    }

    #[test]
    fn test_degenerate_area_does_not_panic() {
        let table = small_table();
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        BookHeatmap::new(&table).render(area, &mut buf);
    }
}
