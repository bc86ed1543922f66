//! Category panels: one bordered column per category, one line per card.

use crate::app::AppState;
use crate::theme::Styles;
use crate::types::SelectionMode;
use crate::view::{CardState, CategoryView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Checkbox or radio marker for a card
pub fn card_marker(mode: SelectionMode, card: &CardState) -> &'static str {
    match (mode, card.selected, card.disabled) {
        (SelectionMode::Exclusive, true, _) => "(•)",
        (SelectionMode::Exclusive, false, _) => "( )",
        (SelectionMode::Multiple, true, _) => "[x]",
        (SelectionMode::Multiple, false, true) => "[-]",
        (SelectionMode::Multiple, false, false) => "[ ]",
    }
}

pub fn render_categories(f: &mut Frame, state: &AppState, views: &[CategoryView], area: Rect) {
    if views.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    let constraints: Vec<Constraint> = views
        .iter()
        .map(|_| Constraint::Ratio(1, views.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, (view, column)) in views.iter().zip(columns.iter()).enumerate() {
        let focused = index == state.focus_category;
        render_category(f, view, focused, state.focus_item, *column);
    }
}

fn render_category(
    f: &mut Frame,
    view: &CategoryView,
    focused: bool,
    focus_item: usize,
    area: Rect,
) {
    let items: Vec<ListItem> = view
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let style = Styles::card(card.selected, card.disabled, focused && i == focus_item);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", card_marker(view.mode, card)), style),
                Span::styled(format!("{} {}", card.emoji, card.name), style),
            ]))
        })
        .collect();

    let title = Line::from(vec![
        Span::styled(format!(" {} ", view.title), Styles::title()),
        Span::styled(
            format!("{} ", view.counter()),
            Styles::status(view.quota_state.is_satisfied()),
        ),
    ]);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", view.quota_label),
                Styles::muted(),
            )))
            .border_style(Styles::border(focused)),
    );

    // Keep the focused card scrolled into view in short terminals
    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(focus_item));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(selected: bool, disabled: bool) -> CardState {
        CardState {
            name: "Corn".to_string(),
            emoji: "🌽".to_string(),
            selected,
            disabled,
        }
    }

    #[test]
    fn test_markers() {
        assert_eq!(card_marker(SelectionMode::Exclusive, &card(true, false)), "(•)");
        assert_eq!(card_marker(SelectionMode::Multiple, &card(false, true)), "[-]");
        assert_eq!(card_marker(SelectionMode::Multiple, &card(true, false)), "[x]");
        assert_eq!(card_marker(SelectionMode::Multiple, &card(false, false)), "[ ]");
    }
}
