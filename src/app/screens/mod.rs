//! TUI screen components
//!
//! The artist detail screen and the scaffold that frames it.

pub mod detail;
pub mod scaffold;

pub use detail::{DetailScreen, ScreenLayout};
pub use scaffold::{Insets, Scaffold, ScaffoldLayout};
