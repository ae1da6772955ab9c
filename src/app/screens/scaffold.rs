//! Screen scaffold
//!
//! Splits the terminal into a top bar slot, a content slot and a bottom
//! system inset, and hands out the padding the content must respect.

use ratatui::layout::Rect;

/// Space reserved around the content by system chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: u16,
    pub bottom: u16,
    pub left: u16,
    pub right: u16,
}

impl Insets {
    /// Shrink `area` by these insets
    pub fn apply(&self, area: Rect) -> Rect {
        let x = area.x.saturating_add(self.left.min(area.width));
        let y = area.y.saturating_add(self.top.min(area.height));
        let width = area.width.saturating_sub(self.left + self.right);
        let height = area.height.saturating_sub(self.top + self.bottom);
        Rect::new(x, y, width, height)
    }
}

/// Resolved slot areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaffoldLayout {
    pub top_bar: Rect,
    pub content: Rect,
    pub bottom_bar: Rect,
    pub insets: Insets,
}

#[derive(Debug, Clone, Copy)]
pub struct Scaffold {
    top_bar_rows: u16,
    bottom_inset_rows: u16,
}

impl Scaffold {
    pub const TOP_BAR_ROWS: u16 = 3;
    pub const BOTTOM_INSET_ROWS: u16 = 1;

    pub fn new() -> Self {
        Self {
            top_bar_rows: Self::TOP_BAR_ROWS,
            bottom_inset_rows: Self::BOTTOM_INSET_ROWS,
        }
    }

    pub fn layout(&self, area: Rect) -> ScaffoldLayout {
        let top = self.top_bar_rows.min(area.height);
        let bottom = self.bottom_inset_rows.min(area.height - top);
        let insets = Insets {
            top,
            bottom,
            left: 0,
            right: 0,
        };

        ScaffoldLayout {
            top_bar: Rect::new(area.x, area.y, area.width, top),
            content: insets.apply(area),
            bottom_bar: Rect::new(area.x, area.bottom() - bottom, area.width, bottom),
            insets,
        }
    }
}

impl Default for Scaffold {
    fn default() -> Self {
        Self::new()
    }
}
