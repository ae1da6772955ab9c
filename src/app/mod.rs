//! TUI application module
//!
//! Contains the terminal user interface components, the detail screen and
//! input handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod theme;
pub mod transition;
pub mod tui;

pub use app::App;
pub use screens::DetailScreen;
pub use state::{key_to_action, ScreenAction};
pub use transition::VisibilityTransition;
pub use tui::{Tui, TuiEvent};
