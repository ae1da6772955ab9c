//! Header visibility coordination
//!
//! Watches the vertical deltas flowing out of the content lists and toggles
//! the header image once a delta is larger than the play distance. It never
//! consumes anything, so the lists and the top bar scroll exactly as they
//! would without it.

use crate::models::{Offset, ScrollSource};
use crate::scroll::NestedScrollConnection;
use crate::util::{Density, Dp};

/// Minimum delta magnitude that flips the header
pub const PLAY_DISTANCE: Dp = Dp(12.0);

/// Whether the header image is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderVisibility {
    #[default]
    Shown,
    Hidden,
}

impl HeaderVisibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, HeaderVisibility::Shown)
    }
}

/// Observe-only nested scroll connection owning the header visibility flag
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    /// `PLAY_DISTANCE` in pixels, fixed for the lifetime of the screen
    play_distance: f32,
    visibility: HeaderVisibility,
}

impl ScrollCoordinator {
    /// Create a coordinator for a new screen. The threshold is converted with
    /// `density` once, here.
    pub fn new(density: &Density) -> Self {
        Self::with_play_distance(density.to_px(PLAY_DISTANCE))
    }

    /// Create a coordinator with an explicit pixel threshold
    pub fn with_play_distance(play_distance: f32) -> Self {
        Self {
            play_distance,
            visibility: HeaderVisibility::Shown,
        }
    }

    pub fn play_distance(&self) -> f32 {
        self.play_distance
    }

    pub fn visibility(&self) -> HeaderVisibility {
        self.visibility
    }

    /// Apply one vertical delta to the visibility state machine
    fn observe(&mut self, delta_y: f32) {
        if delta_y.abs() <= self.play_distance {
            return;
        }

        let next = if delta_y > 0.0 {
            HeaderVisibility::Shown
        } else {
            HeaderVisibility::Hidden
        };

        if next != self.visibility {
            tracing::debug!(from = ?self.visibility, to = ?next, delta_y, "header visibility changed");
            self.visibility = next;
        }
    }
}

impl NestedScrollConnection for ScrollCoordinator {
    fn on_pre_scroll(&mut self, available: Offset, _source: ScrollSource) -> Offset {
        self.observe(available.y);
        Offset::ZERO
    }
}
