//! Horizontal pager
//!
//! `PagerState` holds the fractional page position the UI renders from.
//! `PageAnimator` drives animated page changes from a background task and
//! hands the frames back to the UI loop over a channel.

pub mod animator;

pub use animator::{PageAnimator, PagerFrame};

/// Fraction of a page a swipe must travel to move to the neighbour
pub const SWIPE_SETTLE_FRACTION: f32 = 0.2;

/// Fractional scroll position across a fixed number of pages
#[derive(Debug, Clone, PartialEq)]
pub struct PagerState {
    page_count: usize,
    position: f32,
}

impl PagerState {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            position: 0.0,
        }
    }

    fn last_page(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32
    }

    /// Fractional position, `0.0..=page_count - 1`
    pub fn position(&self) -> f32 {
        self.position
    }

    /// The page nearest to the current position. Drives the tab indicator.
    pub fn current_page(&self) -> usize {
        (self.position.round().clamp(0.0, self.last_page())) as usize
    }

    pub fn set_position(&mut self, position: f32) {
        self.position = position.clamp(0.0, self.last_page());
    }

    /// Jump straight to `page`
    pub fn snap_to(&mut self, page: usize) {
        self.set_position(page as f32);
    }

    /// Move by a fraction of a page; positive moves toward later pages
    pub fn scroll_by_fraction(&mut self, fraction: f32) {
        self.set_position(self.position + fraction);
    }

    /// Page to settle on after a swipe that started on `start_page`
    pub fn settle_target(&self, start_page: usize) -> usize {
        let travelled = self.position - start_page as f32;
        let target = if travelled > SWIPE_SETTLE_FRACTION {
            start_page + 1
        } else if travelled < -SWIPE_SETTLE_FRACTION {
            start_page.saturating_sub(1)
        } else {
            start_page
        };
        target.min(self.page_count.saturating_sub(1))
    }

    /// Page next to `from` in `direction` (-1 or 1), clamped to the range
    pub fn neighbour(&self, from: usize, direction: i32) -> usize {
        let page = from as i64 + direction as i64;
        page.clamp(0, self.page_count.saturating_sub(1) as i64) as usize
    }
}
