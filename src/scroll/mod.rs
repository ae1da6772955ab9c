//! Nested scroll protocol
//!
//! A scroll delta produced inside a scrollable child is first offered to every
//! enclosing connection (outermost first), then consumed by the child, and the
//! child's consumption is reported back up (innermost first).

pub mod coordinator;
pub mod lazy_list;
pub mod top_bar;

pub use coordinator::{HeaderVisibility, ScrollCoordinator, PLAY_DISTANCE};
pub use lazy_list::LazyListState;
pub use top_bar::PinnedScrollBehavior;

use crate::models::{Offset, ScrollSignal, ScrollSource};

/// A participant in nested scrolling that sits between the gesture and the child
pub trait NestedScrollConnection {
    /// Offered the delta before the child scrolls. Returns what it consumed.
    fn on_pre_scroll(&mut self, _available: Offset, _source: ScrollSource) -> Offset {
        Offset::ZERO
    }

    /// Told what the child consumed and what is left. Returns what it consumed.
    fn on_post_scroll(
        &mut self,
        _consumed: Offset,
        _available: Offset,
        _source: ScrollSource,
    ) -> Offset {
        Offset::ZERO
    }
}

/// Run one scroll signal through `connections` (ordered outermost to innermost)
/// and the child's `consume` closure. Returns the total consumed delta.
pub fn dispatch_scroll<F>(
    connections: &mut [&mut dyn NestedScrollConnection],
    signal: ScrollSignal,
    consume: F,
) -> Offset
where
    F: FnOnce(Offset) -> Offset,
{
    let mut pre_consumed = Offset::ZERO;
    for connection in connections.iter_mut() {
        let left = signal.available - pre_consumed;
        pre_consumed += connection.on_pre_scroll(left, signal.source);
    }

    let remaining = signal.available - pre_consumed;
    let child_consumed = consume(remaining);
    let left_over = remaining - child_consumed;

    let mut post_consumed = Offset::ZERO;
    for connection in connections.iter_mut().rev() {
        post_consumed += connection.on_post_scroll(
            child_consumed,
            left_over - post_consumed,
            signal.source,
        );
    }

    pre_consumed + child_consumed + post_consumed
}
