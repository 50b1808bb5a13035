//! Rendering options for heatmap widgets.

use serde::{Deserialize, Serialize};

/// Per-call rendering options.
///
/// Passed by value so one render call can never leak options into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Annotate populated cells with the absolute value of their size.
    ///
    /// The sign is already carried by the hue; labelling the magnitude keeps
    /// the text from conflating the two.
    pub annot: bool,
    /// Width of one order slot in terminal cells.
    pub cell_width: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            annot: false,
            cell_width: 2,
        }
    }
}

impl RenderOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle per-cell annotations.
    pub fn annot(mut self, annot: bool) -> Self {
        self.annot = annot;
        self
    }

    /// Set the width of one order slot in terminal cells.
    pub fn cell_width(mut self, width: u16) -> Self {
        self.cell_width = width.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(!options.annot);
        assert_eq!(options.cell_width, 2);
    }

    #[test]
    fn test_builder_setters() {
        let options = RenderOptions::new().annot(true).cell_width(4);
        assert!(options.annot);
        assert_eq!(options.cell_width, 4);
    }

    #[test]
    fn test_cell_width_floor() {
        let options = RenderOptions::new().cell_width(0);
        assert_eq!(options.cell_width, 1);
    }
}
