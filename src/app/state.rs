//! Keyboard input mapping
//!
//! Translates key events into screen actions. Mouse input needs the rendered
//! layout for hit testing and is handled by the screen itself.

use crate::models::{ScrollSource, TABS};
use crate::util::Dp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the detail screen understands
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Scroll the visible list by a number of rows (positive toward the top)
    ScrollRows { rows: f32, source: ScrollSource },
    /// Scroll the visible list by `NUDGE` (1 toward the top, -1 away)
    Nudge(i32),
    /// Scroll the visible list by whole viewports (positive toward the top)
    ScrollPages(i32),
    /// Jump to the first item
    ScrollToStart,
    /// Jump to the last item
    ScrollToEnd,
    /// Swipe the pager one page (-1 previous, 1 next)
    Swipe(i32),
    /// Select a tab by index
    SelectTab(usize),
    /// Tear the screen down (q, Q, Esc, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Fine scroll step, half the header threshold whatever the row height
pub const NUDGE: Dp = Dp(6.0);

/// Convert keyboard event to screen action
pub fn key_to_action(key: KeyEvent) -> ScreenAction {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ScreenAction::Quit
        }

        // Vertical scrolling
        KeyCode::Up | KeyCode::Char('k') if shift => ScreenAction::Nudge(1),
        KeyCode::Down | KeyCode::Char('j') if shift => ScreenAction::Nudge(-1),
        KeyCode::Up | KeyCode::Char('k') => ScreenAction::ScrollRows {
            rows: 1.0,
            source: ScrollSource::Keyboard,
        },
        KeyCode::Down | KeyCode::Char('j') => ScreenAction::ScrollRows {
            rows: -1.0,
            source: ScrollSource::Keyboard,
        },
        KeyCode::PageUp => ScreenAction::ScrollPages(1),
        KeyCode::PageDown => ScreenAction::ScrollPages(-1),
        KeyCode::Home | KeyCode::Char('g') => ScreenAction::ScrollToStart,
        KeyCode::End | KeyCode::Char('G') => ScreenAction::ScrollToEnd,

        // Paging
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => ScreenAction::Swipe(-1),
        KeyCode::Right | KeyCode::Char('l') => ScreenAction::Swipe(1),
        KeyCode::Tab => {
            if shift {
                ScreenAction::Swipe(-1)
            } else {
                ScreenAction::Swipe(1)
            }
        }

        // Direct tab selection
        KeyCode::Char(c @ '1'..='9') if (c as usize - '1' as usize) < TABS.len() => {
            ScreenAction::SelectTab(c as usize - '1' as usize)
        }

        _ => ScreenAction::None,
    }
}
