//! mealpicker library
//!
//! Core selection-state machine for a categorized meal form, plus the
//! terminal front end that drives it.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod error;
pub mod headless;
pub mod logging;
pub mod selection;
pub mod theme;
pub mod types;
pub mod ui;
pub mod view;

// Re-export main types for convenience
pub use catalog::{CategoryRule, MealCatalog, MealItem};
pub use error::{MealPickerError, Result};
pub use selection::{CategorySelection, SelectionManager, Snapshot, ToggleOutcome};
pub use types::{QuotaState, SelectionMode};
pub use view::{build_views, CardState, CategoryView};
