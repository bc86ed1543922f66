//! Visual state derived from the selection manager.
//!
//! Nothing here is cached between frames: views are rebuilt from the manager
//! after every toggle so the screen can never drift from the real selection.

use crate::selection::SelectionManager;
use crate::types::{QuotaState, SelectionMode};

/// Visual state of one item card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub name: String,
    pub emoji: String,
    pub selected: bool,
    /// Greyed out because the category is full and this card is not picked
    pub disabled: bool,
}

/// Visual state of one category panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub key: String,
    pub title: String,
    pub quota_label: String,
    pub mode: SelectionMode,
    pub quota_state: QuotaState,
    pub count: usize,
    pub max_allowed: usize,
    pub cards: Vec<CardState>,
}

impl CategoryView {
    /// Counter shown next to the title, e.g. "2/3"
    pub fn counter(&self) -> String {
        format!("{}/{}", self.count, self.max_allowed)
    }
}

/// Build one view per category, in catalog order
pub fn build_views(manager: &SelectionManager) -> Vec<CategoryView> {
    manager
        .catalog()
        .categories
        .iter()
        .map(|rule| {
            let mode = rule.mode();
            let at_limit = manager.is_at_limit(&rule.key);
            let cards = rule
                .items
                .iter()
                .map(|item| {
                    let selected = manager.is_selected(&rule.key, &item.name);
                    CardState {
                        name: item.name.clone(),
                        emoji: item.emoji.clone(),
                        selected,
                        // Exclusive categories swap instead of blocking
                        disabled: !mode.is_exclusive() && at_limit && !selected,
                    }
                })
                .collect();

            CategoryView {
                key: rule.key.clone(),
                title: rule.display_title().to_string(),
                quota_label: rule.quota_label(),
                mode,
                quota_state: QuotaState::classify(
                    manager.count(&rule.key),
                    rule.min_required,
                    rule.max_allowed,
                ),
                count: manager.count(&rule.key),
                max_allowed: rule.max_allowed,
                cards,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MealCatalog;

    #[test]
    fn test_full_category_disables_unpicked_cards() {
        let mut mgr = SelectionManager::new(MealCatalog::default()).unwrap();
        for veggie in ["Edamame", "Broccoli", "Carrots"] {
            mgr.toggle("veggies", veggie, true).unwrap();
        }

        let views = build_views(&mgr);
        let veggies = views.iter().find(|v| v.key == "veggies").unwrap();
        assert_eq!(veggies.counter(), "3/3");
        assert_eq!(veggies.quota_state, QuotaState::Full);

        for card in &veggies.cards {
            assert_eq!(card.disabled, !card.selected, "card {}", card.name);
        }
    }

    #[test]
    fn test_exclusive_cards_never_disabled() {
        let mut mgr = SelectionManager::new(MealCatalog::default()).unwrap();
        mgr.toggle("favorites", "Pizza", true).unwrap();

        let views = build_views(&mgr);
        let favorites = &views[0];
        assert_eq!(favorites.mode, SelectionMode::Exclusive);
        assert!(favorites.cards.iter().all(|card| !card.disabled));
        assert!(favorites.cards[0].selected);
        assert_eq!(favorites.cards[0].emoji, "🍕");
    }
}
