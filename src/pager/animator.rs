//! Animated page scrolling
//!
//! Each call to `animate_scroll_to_page` supersedes the previous one: the old
//! task is aborted and its late frames are ignored by generation. Dropping the
//! animator aborts whatever is still running.

use crate::pager::PagerState;
use crate::util::easing::{ease_out_cubic, lerp};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Frames sent from the animation task to the UI loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerFrame {
    /// Intermediate fractional position
    Offset { generation: u64, position: f32 },
    /// Animation finished on `page`
    Settled { generation: u64, page: usize },
}

/// Owner of the (at most one) running page animation
#[derive(Debug)]
pub struct PageAnimator {
    duration: Duration,
    frame_interval: Duration,
    tx: mpsc::UnboundedSender<PagerFrame>,
    rx: mpsc::UnboundedReceiver<PagerFrame>,
    task: Option<JoinHandle<()>>,
    generation: u64,
    target: Option<usize>,
}

impl PageAnimator {
    pub fn new(duration: Duration, frame_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            duration,
            frame_interval,
            tx,
            rx,
            task: None,
            generation: 0,
            target: None,
        }
    }

    /// Page the running animation is heading to
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.target.is_some()
    }

    /// Launch a fire-and-forget animation from `from` to `target`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn animate_scroll_to_page(&mut self, from: f32, target: usize) {
        self.cancel();
        self.generation += 1;
        self.target = Some(target);

        let generation = self.generation;
        let tx = self.tx.clone();
        let duration = self.duration;
        let frame_interval = self.frame_interval;
        let to = target as f32;

        tracing::debug!(from, target, generation, "page animation started");

        self.task = Some(tokio::spawn(async move {
            let start = Instant::now();
            let mut ticker = tokio::time::interval(frame_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let t = if duration.is_zero() {
                    1.0
                } else {
                    (start.elapsed().as_secs_f32() / duration.as_secs_f32()).min(1.0)
                };

                let position = lerp(from, to, ease_out_cubic(t));
                if tx.send(PagerFrame::Offset { generation, position }).is_err() {
                    return;
                }

                if t >= 1.0 {
                    let _ = tx.send(PagerFrame::Settled {
                        generation,
                        page: target,
                    });
                    return;
                }
            }
        }));
    }

    /// Abort the running animation, leaving the pager where it is
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // frames already queued by the aborted task are stale
            self.generation += 1;
        }
        self.target = None;
    }

    /// Drain frames received so far into `pager`. Returns true when the pager moved.
    pub fn apply_pending(&mut self, pager: &mut PagerState) -> bool {
        let mut changed = false;

        while let Ok(frame) = self.rx.try_recv() {
            match frame {
                PagerFrame::Offset {
                    generation,
                    position,
                } if generation == self.generation => {
                    pager.set_position(position);
                    changed = true;
                }
                PagerFrame::Settled { generation, page } if generation == self.generation => {
                    pager.snap_to(page);
                    self.task = None;
                    self.target = None;
                    changed = true;
                    tracing::debug!(page, generation, "page animation settled");
                }
                _ => {}
            }
        }

        changed
    }
}

impl Drop for PageAnimator {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> PageAnimator {
        PageAnimator::new(Duration::from_millis(300), Duration::from_millis(16))
    }

    #[tokio::test(start_paused = true)]
    async fn test_animation_settles_on_target() {
        let mut animator = animator();
        let mut pager = PagerState::new(3);

        animator.animate_scroll_to_page(pager.position(), 2);
        assert!(animator.is_running());
        assert_eq!(animator.target(), Some(2));

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(animator.apply_pending(&mut pager));
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.position(), 2.0);
        assert!(!animator.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_intermediate_frames_move_pager() {
        let mut animator = animator();
        let mut pager = PagerState::new(3);

        animator.animate_scroll_to_page(0.0, 2);
        tokio::time::sleep(Duration::from_millis(100)).await;
        animator.apply_pending(&mut pager);

        assert!(pager.position() > 0.0);
        assert!(pager.position() < 2.0);
        assert!(animator.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_animation_supersedes_previous() {
        let mut animator = animator();
        let mut pager = PagerState::new(3);

        animator.animate_scroll_to_page(0.0, 2);
        tokio::time::sleep(Duration::from_millis(50)).await;
        animator.apply_pending(&mut pager);

        animator.animate_scroll_to_page(pager.position(), 0);
        tokio::time::sleep(Duration::from_millis(400)).await;
        animator.apply_pending(&mut pager);

        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.position(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_frames() {
        let mut animator = animator();
        let mut pager = PagerState::new(3);

        animator.animate_scroll_to_page(0.0, 1);
        animator.cancel();
        tokio::time::sleep(Duration::from_millis(400)).await;

        animator.apply_pending(&mut pager);
        assert!(!animator.is_running());
        // the aborted task never reached the target
        assert!(pager.position() < 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_running_animation() {
        let mut animator = animator();
        // keep the receiving end alive past the animator
        let (_, spare) = mpsc::unbounded_channel();
        let mut rx = std::mem::replace(&mut animator.rx, spare);

        animator.animate_scroll_to_page(0.0, 2);
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(animator);

        // the channel closes once the aborted task lets go of its sender,
        // without the animation ever settling
        let mut frames = Vec::new();
        while let Some(frame) = rx.recv().await {
            frames.push(frame);
        }
        assert!(!frames.is_empty());
        assert!(frames
            .iter()
            .all(|frame| matches!(frame, PagerFrame::Offset { .. })));
    }
}
