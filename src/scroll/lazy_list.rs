//! Lazily rendered vertical list state
//!
//! Rows are one terminal line tall, separated by `spacing_rows` blank lines.
//! Only the rows intersecting the viewport are ever materialised.

/// Scroll position and geometry of one list
#[derive(Debug, Clone, PartialEq)]
pub struct LazyListState {
    /// Distance scrolled from the top, in pixels
    offset_px: f32,
    item_count: usize,
    spacing_rows: u16,
    row_px: f32,
    viewport_rows: u16,
}

impl LazyListState {
    pub fn new(item_count: usize, spacing_rows: u16, row_px: f32) -> Self {
        Self {
            offset_px: 0.0,
            item_count,
            spacing_rows,
            row_px,
            viewport_rows: 0,
        }
    }

    pub fn offset_px(&self) -> f32 {
        self.offset_px
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Total height of all items and gaps, in rows
    pub fn content_rows(&self) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        self.item_count + (self.item_count - 1) * self.spacing_rows as usize
    }

    pub fn max_offset_px(&self) -> f32 {
        let overflow = self.content_rows().saturating_sub(self.viewport_rows as usize);
        overflow as f32 * self.row_px
    }

    /// Update the viewport height, keeping the offset in range
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.offset_px = self.offset_px.clamp(0.0, self.max_offset_px());
    }

    /// Move the content by `delta_y` pixels and return how much was consumed.
    ///
    /// Positive deltas move toward the top of the list; the returned value has
    /// the same sign convention.
    pub fn scroll_by(&mut self, delta_y: f32) -> f32 {
        let previous = self.offset_px;
        self.offset_px = (previous - delta_y).clamp(0.0, self.max_offset_px());
        previous - self.offset_px
    }

    /// Delta that would bring the list back to its first item
    pub fn delta_to_start(&self) -> f32 {
        self.offset_px
    }

    /// Delta that would bring the list to its last item
    pub fn delta_to_end(&self) -> f32 {
        -(self.max_offset_px() - self.offset_px)
    }

    pub fn first_visible_row(&self) -> usize {
        (self.offset_px / self.row_px).floor() as usize
    }

    /// Items intersecting the viewport as `(row within viewport, item index)`
    pub fn visible_items(&self) -> Vec<(u16, usize)> {
        let stride = 1 + self.spacing_rows as usize;
        let first_row = self.first_visible_row();

        (0..self.viewport_rows)
            .filter_map(|line| {
                let row = first_row + line as usize;
                if row % stride != 0 {
                    return None;
                }
                let index = row / stride;
                (index < self.item_count).then_some((line, index))
            })
            .collect()
    }
}
