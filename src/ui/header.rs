//! Header and common widget rendering

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title block with readiness status and the last notice
pub fn render_header(f: &mut Frame, state: &AppState, area: Rect) {
    let title = match state.mode {
        AppMode::Picking => " Pick Your Meals ",
        AppMode::Summary => " My Meals ",
    };

    let mut lines = vec![Line::from(Span::styled(
        state.status_message.clone(),
        Styles::status(state.ready),
    ))];
    match &state.notice {
        Some(notice) => lines.push(Line::from(Span::styled(notice.clone(), Styles::error()))),
        None => lines.push(Line::from("")),
    }

    let header = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(Styles::title())
                .border_style(Styles::border(true)),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode);
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
