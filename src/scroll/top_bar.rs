//! Pinned top app bar behavior
//!
//! The bar keeps its height but tracks how far the content underneath has
//! scrolled, so it can switch to its "scrolled" colour while content overlaps.

use crate::models::{Offset, ScrollSource};
use crate::scroll::NestedScrollConnection;

/// Above this overlap the bar uses the scrolled container colour
pub const OVERLAP_COLOR_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone, Default)]
pub struct PinnedScrollBehavior {
    /// Accumulated consumed scroll; negative once content has moved under the bar
    content_offset: f32,
}

impl PinnedScrollBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_offset(&self) -> f32 {
        self.content_offset
    }

    /// 1.0 while any content sits under the bar, otherwise 0.0
    pub fn overlapped_fraction(&self) -> f32 {
        if self.content_offset < 0.0 {
            1.0
        } else {
            0.0
        }
    }

    pub fn is_overlapped(&self) -> bool {
        self.overlapped_fraction() > OVERLAP_COLOR_THRESHOLD
    }

    /// Forget the tracked offset, used when the visible list changes
    pub fn reset_to(&mut self, content_offset: f32) {
        self.content_offset = content_offset;
    }
}

impl NestedScrollConnection for PinnedScrollBehavior {
    fn on_post_scroll(
        &mut self,
        consumed: Offset,
        available: Offset,
        _source: ScrollSource,
    ) -> Offset {
        self.content_offset += consumed.y;

        // Nothing moved and the gesture pulls toward the top: content is at its start
        if consumed.y == 0.0 && available.y > 0.0 {
            self.content_offset = 0.0;
        }

        Offset::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_overlapped() {
        let bar = PinnedScrollBehavior::new();
        assert_eq!(bar.overlapped_fraction(), 0.0);
        assert!(!bar.is_overlapped());
    }

    #[test]
    fn test_tracks_consumed_scroll() {
        let mut bar = PinnedScrollBehavior::new();
        bar.on_post_scroll(Offset::vertical(-32.0), Offset::ZERO, ScrollSource::Drag);
        assert_eq!(bar.content_offset(), -32.0);
        assert!(bar.is_overlapped());

        bar.on_post_scroll(Offset::vertical(32.0), Offset::ZERO, ScrollSource::Drag);
        assert_eq!(bar.content_offset(), 0.0);
        assert!(!bar.is_overlapped());
    }

    #[test]
    fn test_overscroll_toward_top_resets() {
        let mut bar = PinnedScrollBehavior::new();
        bar.reset_to(-5.0);
        bar.on_post_scroll(Offset::ZERO, Offset::vertical(10.0), ScrollSource::Wheel);
        assert_eq!(bar.content_offset(), 0.0);
    }

    #[test]
    fn test_never_consumes() {
        let mut bar = PinnedScrollBehavior::new();
        assert_eq!(
            bar.on_pre_scroll(Offset::vertical(50.0), ScrollSource::Drag),
            Offset::ZERO
        );
        assert_eq!(
            bar.on_post_scroll(Offset::vertical(-5.0), Offset::vertical(-5.0), ScrollSource::Drag),
            Offset::ZERO
        );
    }
}
