//! Visibility transition for the header image
//!
//! Entering expands from zero rows while fading in; exiting shrinks to zero
//! rows while fading out. Flipping the target mid-flight reverses from the
//! current progress.

use crate::util::easing::ease_out_cubic;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTransition {
    visible: bool,
    /// 0.0 fully hidden, 1.0 fully shown
    progress: f32,
    duration: Duration,
}

impl VisibilityTransition {
    /// Start settled in the given state
    pub fn new(visible: bool, duration: Duration) -> Self {
        Self {
            visible,
            progress: if visible { 1.0 } else { 0.0 },
            duration,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn target(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }

    pub fn is_animating(&self) -> bool {
        self.progress != self.target()
    }

    /// Advance by `elapsed`. Returns true when the progress moved.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_animating() {
            return false;
        }

        let step = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        self.progress = if self.visible {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
        true
    }

    /// Rows to allocate out of `full_rows`
    pub fn visible_rows(&self, full_rows: u16) -> u16 {
        (full_rows as f32 * ease_out_cubic(self.progress)).round() as u16
    }

    /// Opacity for the fade, linear in progress
    pub fn alpha(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(300);

    #[test]
    fn test_starts_settled() {
        let shown = VisibilityTransition::new(true, DURATION);
        assert!(!shown.is_animating());
        assert_eq!(shown.visible_rows(10), 10);
        assert_eq!(shown.alpha(), 1.0);

        let hidden = VisibilityTransition::new(false, DURATION);
        assert_eq!(hidden.visible_rows(10), 0);
    }

    #[test]
    fn test_hide_shrinks_and_fades_to_zero() {
        let mut t = VisibilityTransition::new(true, DURATION);
        t.set_visible(false);
        assert!(t.is_animating());

        assert!(t.tick(Duration::from_millis(150)));
        assert!(t.alpha() > 0.0 && t.alpha() < 1.0);
        let mid_rows = t.visible_rows(10);
        assert!(mid_rows > 0 && mid_rows < 10);

        t.tick(Duration::from_millis(200));
        assert_eq!(t.visible_rows(10), 0);
        assert_eq!(t.alpha(), 0.0);
        assert!(!t.is_animating());
        assert!(!t.tick(Duration::from_millis(16)));
    }

    #[test]
    fn test_show_expands_from_zero() {
        let mut t = VisibilityTransition::new(false, DURATION);
        t.set_visible(true);
        t.tick(Duration::from_millis(30));
        assert!(t.visible_rows(10) < 10);
        t.tick(DURATION);
        assert_eq!(t.visible_rows(10), 10);
    }

    #[test]
    fn test_reverse_mid_flight() {
        let mut t = VisibilityTransition::new(true, DURATION);
        t.set_visible(false);
        t.tick(Duration::from_millis(150));
        let halfway = t.progress;

        t.set_visible(true);
        t.tick(Duration::from_millis(30));
        assert!(t.progress > halfway);
    }
}
