//! Application module
//!
//! Contains the interactive session: key handling, the draw/poll loop, and
//! the glue that turns key presses into selection manager calls.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::selection::{SelectionManager, ToggleOutcome};
use crate::ui::UiRenderer;
use crate::view::build_views;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    manager: SelectionManager,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key lookup and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application around a selection manager
    pub fn new(manager: SelectionManager) -> Self {
        let mut app = Self {
            manager,
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        };
        app.refresh_status();
        app
    }

    pub fn manager(&self) -> &SelectionManager {
        &self.manager
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting interactive session");

        loop {
            self.draw(terminal)?;

            if crossterm::event::poll(Duration::from_millis(100))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event)? {
                        break; // Exit requested
                    }
                }
            }
        }

        info!(ready = self.manager.is_ready(), "Interactive session ended");
        Ok(())
    }

    /// Draw one frame from the current manager state
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let views = build_views(&self.manager);
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.state, &views, &self.keybinding_context)
        })?;
        Ok(())
    }

    /// Handle a key event; returns true when the app should exit
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let Some(action) = self
            .keybinding_context
            .action_for(&self.state.mode, &key_event)
        else {
            return Ok(false);
        };
        debug!(?action, mode = ?self.state.mode, "Key action");

        // While help is open only closing it or quitting does anything
        if self.state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return Ok(false);
        }

        self.state.notice = None;
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Help => self.state.help_visible = !self.state.help_visible,
            KeyAction::NavigateUp => self.move_item(-1),
            KeyAction::NavigateDown => self.move_item(1),
            KeyAction::NextCategory => self.move_category(1),
            KeyAction::PrevCategory => self.move_category(-1),
            KeyAction::Toggle => self.toggle_focused()?,
            KeyAction::Review => self.open_summary(),
            KeyAction::Back => {
                self.state.mode = AppMode::Picking;
                self.state.summary = None;
            }
            KeyAction::Clear => {
                self.manager.clear();
                self.state.notice = Some("Cleared all picks".to_string());
            }
        }

        self.refresh_status();
        Ok(false)
    }

    fn category_len(&self) -> usize {
        self.manager.catalog().categories.len()
    }

    fn item_len(&self) -> usize {
        self.manager
            .catalog()
            .categories
            .get(self.state.focus_category)
            .map_or(0, |rule| rule.items.len())
    }

    fn move_item(&mut self, delta: isize) {
        let len = self.item_len();
        if len > 0 {
            self.state.focus_item = wrap_index(self.state.focus_item, delta, len);
        }
    }

    fn move_category(&mut self, delta: isize) {
        let len = self.category_len();
        if len > 0 {
            self.state.focus_category = wrap_index(self.state.focus_category, delta, len);
            self.state.focus_item = self.state.focus_item.min(self.item_len().saturating_sub(1));
        }
    }

    /// Flip the focused card, the way a click on it would
    fn toggle_focused(&mut self) -> Result<()> {
        let Some(rule) = self
            .manager
            .catalog()
            .categories
            .get(self.state.focus_category)
        else {
            return Ok(());
        };
        let Some(item) = rule.items.get(self.state.focus_item) else {
            return Ok(());
        };
        let (category, item) = (rule.key.clone(), item.name.clone());
        let title = rule.display_title().to_string();
        let exclusive = rule.mode().is_exclusive();
        let max_allowed = rule.max_allowed;

        let want_selected = !self.manager.is_selected(&category, &item);
        if want_selected && !exclusive && self.manager.is_at_limit(&category) {
            // Card is disabled; the manager would ignore the add anyway
            self.state.notice = Some(format!(
                "{} is full ({}/{}). Unpick one first.",
                title, max_allowed, max_allowed
            ));
            return Ok(());
        }

        let outcome = self.manager.toggle(&category, &item, want_selected)?;
        if outcome == ToggleOutcome::LimitReached {
            self.state.notice = Some(format!("{} is full", title));
        }
        Ok(())
    }

    fn open_summary(&mut self) {
        if self.manager.is_ready() {
            self.state.summary = Some(self.manager.snapshot());
            self.state.mode = AppMode::Summary;
            info!("Showing meal summary");
        } else {
            let missing: Vec<String> = self
                .manager
                .unsatisfied_categories()
                .iter()
                .map(|rule| rule.display_title().to_string())
                .collect();
            self.state.notice = Some(format!("Still need: {}", missing.join(", ")));
        }
    }

    fn refresh_status(&mut self) {
        self.state.ready = self.manager.is_ready();
        self.state.status_message = self.manager.status_message().to_string();
    }
}

fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    (current as isize + delta).rem_euclid(len as isize) as usize
}
