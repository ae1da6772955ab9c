//! Display density conversion
//!
//! Terminals have no notion of density-independent units, so the density is
//! derived from the live cell metrics: one row is `cell_height_px` device
//! pixels and is nominally `cell_height_dp` dp tall.

use crossterm::terminal::WindowSize;

/// Fallback cell height in pixels when the terminal does not report its pixel size
pub const FALLBACK_CELL_HEIGHT_PX: f32 = 16.0;

/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT: f32 = 2.0;

/// Density-independent length
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

/// Conversion between dp, pixels and terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    /// Pixels per dp
    scale: f32,
    /// Height of one terminal row in pixels
    cell_height_px: f32,
    /// Width of one terminal column in pixels
    cell_width_px: f32,
}

impl Density {
    /// Build a density from the pixel size of a single cell
    pub fn from_cell_px(cell_width_px: f32, cell_height_px: f32, cell_height_dp: f32) -> Self {
        Self {
            scale: cell_height_px / cell_height_dp,
            cell_height_px,
            cell_width_px,
        }
    }

    /// Build a density from an explicit scale factor
    pub fn from_scale(scale: f32, cell_height_dp: f32) -> Self {
        let cell_height_px = cell_height_dp * scale;
        Self {
            scale,
            cell_height_px,
            cell_width_px: cell_height_px / CELL_ASPECT,
        }
    }

    /// Derive the density from a terminal window size report
    ///
    /// Terminals that do not report pixel dimensions answer with zeros; in that
    /// case a 16px cell is assumed.
    pub fn from_window_size(size: &WindowSize, cell_height_dp: f32) -> Self {
        if size.rows == 0 || size.columns == 0 || size.height == 0 || size.width == 0 {
            return Self::from_cell_px(
                FALLBACK_CELL_HEIGHT_PX / CELL_ASPECT,
                FALLBACK_CELL_HEIGHT_PX,
                cell_height_dp,
            );
        }

        Self::from_cell_px(
            size.width as f32 / size.columns as f32,
            size.height as f32 / size.rows as f32,
            cell_height_dp,
        )
    }

    /// Query the live terminal for its density
    ///
    /// `scale_override` wins over the detected value when set.
    pub fn detect(cell_height_dp: f32, scale_override: Option<f32>) -> Self {
        if let Some(scale) = scale_override {
            return Self::from_scale(scale, cell_height_dp);
        }

        match crossterm::terminal::window_size() {
            Ok(size) => Self::from_window_size(&size, cell_height_dp),
            Err(err) => {
                tracing::warn!(error = %err, "window size unavailable, assuming default density");
                Self::from_window_size(
                    &WindowSize {
                        rows: 0,
                        columns: 0,
                        width: 0,
                        height: 0,
                    },
                    cell_height_dp,
                )
            }
        }
    }

    /// Pixels per dp
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Height of one row in pixels
    pub fn cell_height_px(&self) -> f32 {
        self.cell_height_px
    }

    /// Width of one column in pixels
    pub fn cell_width_px(&self) -> f32 {
        self.cell_width_px
    }

    /// Convert dp to pixels
    pub fn to_px(&self, dp: Dp) -> f32 {
        dp.0 * self.scale
    }

    /// Convert a (fractional) number of rows to pixels
    pub fn rows_to_px(&self, rows: f32) -> f32 {
        rows * self.cell_height_px
    }

    /// Convert pixels to (fractional) rows
    pub fn px_to_rows(&self, px: f32) -> f32 {
        px / self.cell_height_px
    }

    /// Convert dp to whole rows, rounding to the nearest row
    pub fn dp_to_rows(&self, dp: Dp) -> u16 {
        self.px_to_rows(self.to_px(dp)).round().max(0.0) as u16
    }

    /// Convert dp to whole columns, rounding to the nearest column
    pub fn dp_to_columns(&self, dp: Dp) -> u16 {
        (self.to_px(dp) / self.cell_width_px).round().max(0.0) as u16
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::from_scale(1.0, FALLBACK_CELL_HEIGHT_PX)
    }
}
