//! Data models module
//!
//! Contains the scroll event types passed through the nested scroll chain
//! and the static tab definitions of the screen.

pub mod scroll;
pub mod tabs;

// Re-export commonly used types
pub use scroll::{Offset, ScrollSignal, ScrollSource};
pub use tabs::{placeholder_items, Tab, ITEMS_PER_TAB, TABS};
