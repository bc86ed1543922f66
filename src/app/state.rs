//! Application state definitions
//!
//! Contains the UI-side state: which screen is showing, where the cursor is,
//! and the status text. Selection state itself lives in the
//! [`SelectionManager`](crate::selection::SelectionManager).

use crate::selection::{Snapshot, KEEP_PICKING_MESSAGE};

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Index of the focused category panel
    pub focus_category: usize,
    /// Index of the focused card within that panel
    pub focus_item: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether every category quota is met
    pub ready: bool,
    /// Readiness text shown in the header
    pub status_message: String,
    /// One-shot feedback for the last action (e.g. a full category)
    pub notice: Option<String>,
    /// Picks captured when the summary was opened
    pub summary: Option<Snapshot>,
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Browsing categories and toggling cards
    Picking,
    /// Read-only list of the picks
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Picking,
            focus_category: 0,
            focus_item: 0,
            help_visible: false,
            ready: false,
            status_message: KEEP_PICKING_MESSAGE.to_string(),
            notice: None,
            summary: None,
        }
    }
}
