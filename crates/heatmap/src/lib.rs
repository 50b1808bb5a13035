//! Heatmap: snapshot tables and terminal rendering for order book state.
//!
//! This crate provides the two halves of the visualization pipeline:
//! - Snapshot builder: windowed, signed table of order sizes per price
//! - Panel renderer: one or more tables as a grid of terminal heatmaps
//!
//! Data flows one way: exchange state -> `BookTable` -> `BookPanel` -> the
//! caller's drawing buffer. Both steps are pure; nothing is cached between
//! calls.

mod color;
mod options;
mod table;
mod widgets;

pub use color::diverging_color;
pub use options::RenderOptions;
pub use table::{BookTable, SnapshotParams};
pub use widgets::{BookHeatmap, BookPanel};
