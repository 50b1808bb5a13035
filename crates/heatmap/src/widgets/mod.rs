//! Heatmap widgets for displaying snapshot tables.
//!
//! Each widget has a single responsibility:
//! - `BookHeatmap`: Renders one snapshot table as colored cells
//! - `BookPanel`: Lays several tables out in a grid with a shared scale

mod heatmap;
mod panel;

pub use heatmap::BookHeatmap;
pub use panel::BookPanel;
