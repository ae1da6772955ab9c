//! Main application controller
//!
//! Owns the terminal and the detail screen, and runs the event/render loop.

use crate::{
    app::{
        screens::DetailScreen,
        state::{key_to_action, ScreenAction},
        tui::{Tui, TuiEvent},
    },
    config::ScreenConfig,
    util::Density,
    CollapseBarError, Result,
};
use std::time::Instant;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// The one screen of the application
    screen: DetailScreen,
    /// Application config
    config: ScreenConfig,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: ScreenConfig) -> Result<Self> {
        let density = Density::detect(config.display.cell_height_dp, config.display.density);
        let screen = DetailScreen::new(&config, density)?;

        Ok(Self {
            tui: Tui::new()?,
            screen,
            config,
            should_quit: false,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| CollapseBarError::TuiError(format!("terminal setup failed: {}", e)))
    }

    /// Run the main application loop until the screen is dismissed
    pub async fn run(&mut self) -> Result<()> {
        let mut last_frame = Instant::now();
        let mut dirty = true;

        while !self.should_quit {
            let now = Instant::now();
            dirty |= self.screen.advance(now - last_frame);
            last_frame = now;

            if dirty {
                self.draw()?;
                dirty = false;
            }

            let timeout = if self.screen.is_animating() {
                self.config.animation.frame_interval
            } else {
                self.config.animation.idle_tick
            };

            if let Some(event) = self.tui.next_event(timeout)? {
                self.handle_event(event);
                dirty = true;
            }

            // give the page animation task a chance to run
            tokio::task::yield_now().await;
        }

        tracing::info!("screen dismissed");
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the screen
    fn draw(&mut self) -> Result<()> {
        let screen = &mut self.screen;
        self.tui
            .draw(|f| screen.render(f))
            .map_err(|e| CollapseBarError::TuiError(format!("draw failed: {}", e)))
    }

    fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key) => match key_to_action(key) {
                ScreenAction::Quit => self.should_quit = true,
                action => self.screen.handle_action(action),
            },
            TuiEvent::Mouse(mouse) => self.screen.handle_mouse(mouse),
            TuiEvent::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
        }
    }
}
