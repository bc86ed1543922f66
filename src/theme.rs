//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and styles so panels, cards and the
//! summary screen stay visually consistent.
//!
//! # Usage
//! ```rust
//! use mealpicker::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Popup background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Focused card, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Quota met / ready
    pub const SUCCESS: Color = Color::Green;

    /// Quota not yet met
    pub const WARNING: Color = Color::Yellow;

    /// Caller faults and rejected actions
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused panel border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused panel border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Focus highlight background
    pub const FOCUS_BG: Color = Color::Yellow;

    /// Focus highlight text (for contrast on yellow bg)
    pub const FOCUS_FG: Color = Color::Black;

    /// Picked card text
    pub const PICKED: Color = Color::LightGreen;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Common style combinations
pub struct Styles;

impl Styles {
    /// Bold primary title
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular body text
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted helper text
    pub fn muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn border(active: bool) -> Style {
        if active {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Card text style from its selection state
    pub fn card(selected: bool, disabled: bool, focused: bool) -> Style {
        let base = if focused {
            Style::default()
                .fg(Colors::FOCUS_FG)
                .bg(Colors::FOCUS_BG)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default()
                .fg(Colors::PICKED)
                .add_modifier(Modifier::BOLD)
        } else if disabled {
            Style::default().fg(Colors::FG_MUTED)
        } else {
            Style::default().fg(Colors::FG_SECONDARY)
        };

        if disabled && !focused {
            base.add_modifier(Modifier::DIM)
        } else {
            base
        }
    }

    /// Status line style: green when ready, yellow otherwise
    pub fn status(ready: bool) -> Style {
        let color = if ready {
            Colors::SUCCESS
        } else {
            Colors::WARNING
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
