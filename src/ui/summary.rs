//! "My meals" screen: the picks captured when review was opened.

use crate::app::AppState;
use crate::selection::NO_PICKS_PLACEHOLDER;
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render_summary(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(snapshot) = &state.summary else {
        return;
    };
    let lines = snapshot.summary_lines();
    if lines.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = lines
        .iter()
        .map(|_| Constraint::Ratio(1, lines.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((title, items), column) in lines.iter().zip(columns.iter()) {
        let list_items: Vec<ListItem> = items
            .iter()
            .map(|item| {
                let style = if item == NO_PICKS_PLACEHOLDER {
                    Styles::muted()
                } else {
                    Styles::text()
                };
                ListItem::new(Line::from(Span::styled(format!("• {}", item), style)))
            })
            .collect();

        let list = List::new(list_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", title), Styles::title()))
                .border_style(Styles::border(false)),
        );
        f.render_widget(list, *column);
    }
}
