//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, readiness status, nav bar and help overlay
//! - `cards` - Category panels with one card per item
//! - `summary` - The "my meals" review screen

mod cards;
mod header;
mod summary;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::view::CategoryView;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use cards::card_marker;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It only reads state; all
/// visual flags come from the freshly built [`CategoryView`]s.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        views: &[CategoryView],
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title + status
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_header(f, state, chunks[0]);

        match state.mode {
            AppMode::Picking => cards::render_categories(f, state, views, chunks[1]),
            AppMode::Summary => summary::render_summary(f, state, chunks[1]),
        }

        header::render_nav_bar(f, state, keybinding_ctx, chunks[2]);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
