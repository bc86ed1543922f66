//! Selection manager: per-category picks and quota enforcement.
//!
//! The manager is the single authority over what is selected. Views call
//! [`SelectionManager::toggle`] on every input event and then re-derive their
//! visual state from [`SelectionManager::is_selected`] and
//! [`SelectionManager::is_at_limit`].
//!
//! # Rules
//!
//! - Exclusive categories (`max_allowed == 1`) hold at most one pick; selecting
//!   another item replaces it.
//! - Other categories accept picks while below `max_allowed`; an add at the
//!   limit is ignored and reported as [`ToggleOutcome::LimitReached`].
//! - Removal is never blocked, and toggling to the current state is a no-op.
//! - Names not drawn from the catalog are rejected with an error.
//! - The session is ready when every category satisfies
//!   `min_required <= picks <= max_allowed`.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::catalog::{CategoryRule, MealCatalog};
use crate::error::{MealPickerError, Result};
use crate::types::{QuotaState, SelectionMode};

/// Placeholder shown for a category with nothing picked
pub const NO_PICKS_PLACEHOLDER: &str = "No picks yet";

/// Status text once every quota is met
pub const READY_MESSAGE: &str = "All set! Show my meals.";

/// Status text while any quota is unmet
pub const KEEP_PICKING_MESSAGE: &str = "Keep picking food!";

/// What a toggle call did to the category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was added
    Selected,
    /// The item replaced the previous exclusive choice
    Replaced { previous: String },
    /// The item was removed
    Deselected,
    /// The add was ignored because the category is full
    LimitReached,
    /// The item was already in the requested state
    Unchanged,
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected => write!(f, "Selected"),
            Self::Replaced { previous } => write!(f, "Replaced {}", previous),
            Self::Deselected => write!(f, "Deselected"),
            Self::LimitReached => write!(f, "LimitReached"),
            Self::Unchanged => write!(f, "Unchanged"),
        }
    }
}

impl ToggleOutcome {
    /// Whether the selection state changed
    pub fn changed(&self) -> bool {
        matches!(
            self,
            Self::Selected | Self::Replaced { .. } | Self::Deselected
        )
    }
}

/// Picks for one category inside a [`Snapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub key: String,
    pub title: String,
    pub items: Vec<String>,
}

impl CategorySelection {
    /// Items for a summary list, or the placeholder when nothing is picked
    pub fn display_items(&self) -> Vec<String> {
        if self.items.is_empty() {
            vec![NO_PICKS_PLACEHOLDER.to_string()]
        } else {
            self.items.clone()
        }
    }
}

/// Owned copy of every category's picks, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub categories: Vec<CategorySelection>,
}

impl Snapshot {
    pub fn get(&self, key: &str) -> Option<&CategorySelection> {
        self.categories.iter().find(|selection| selection.key == key)
    }

    /// True when no category has any pick
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|selection| selection.items.is_empty())
    }

    /// `(title, items)` pairs ready for a summary view
    pub fn summary_lines(&self) -> Vec<(String, Vec<String>)> {
        self.categories
            .iter()
            .map(|selection| (selection.title.clone(), selection.display_items()))
            .collect()
    }
}

/// Owns the catalog and the per-category selection state for one session
#[derive(Debug, Clone)]
pub struct SelectionManager {
    catalog: MealCatalog,
    /// Picks per category, parallel to `catalog.categories`, in pick order
    selections: Vec<Vec<String>>,
}

impl SelectionManager {
    /// Create a manager with every category empty
    pub fn new(catalog: MealCatalog) -> Result<Self> {
        catalog.validate()?;
        let selections = vec![Vec::new(); catalog.categories.len()];
        debug!(
            categories = catalog.categories.len(),
            "Selection manager initialized"
        );
        Ok(Self {
            catalog,
            selections,
        })
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    fn index_of(&self, category: &str) -> Option<usize> {
        self.catalog
            .categories
            .iter()
            .position(|rule| rule.key == category)
    }

    fn rule_and_picks(&self, category: &str) -> Option<(&CategoryRule, &[String])> {
        let index = self.index_of(category)?;
        Some((&self.catalog.categories[index], self.selections[index].as_slice()))
    }

    /// Select or deselect `item` in `category`
    ///
    /// Adds beyond the category limit are ignored and reported as
    /// [`ToggleOutcome::LimitReached`]. Unknown categories or items are
    /// rejected without touching state.
    pub fn toggle(
        &mut self,
        category: &str,
        item: &str,
        want_selected: bool,
    ) -> Result<ToggleOutcome> {
        let Some(index) = self.index_of(category) else {
            warn!(category, "Toggle rejected: unknown category");
            return Err(MealPickerError::unknown_category(category));
        };

        let rule = &self.catalog.categories[index];
        if !rule.contains(item) {
            warn!(category, item, "Toggle rejected: item not in catalog");
            return Err(MealPickerError::unknown_item(category, item));
        }

        let picks = &mut self.selections[index];
        let already = picks.iter().position(|pick| pick == item);

        let outcome = match (rule.mode(), want_selected) {
            (SelectionMode::Exclusive, true) => match picks.first() {
                Some(current) if current == item => ToggleOutcome::Unchanged,
                Some(current) => {
                    let previous = current.clone();
                    picks.clear();
                    picks.push(item.to_string());
                    ToggleOutcome::Replaced { previous }
                }
                None => {
                    picks.push(item.to_string());
                    ToggleOutcome::Selected
                }
            },
            (SelectionMode::Exclusive, false) => {
                if already.is_some() {
                    picks.clear();
                    ToggleOutcome::Deselected
                } else {
                    ToggleOutcome::Unchanged
                }
            }
            (SelectionMode::Multiple, true) => {
                if already.is_some() {
                    ToggleOutcome::Unchanged
                } else if picks.len() < rule.max_allowed {
                    picks.push(item.to_string());
                    ToggleOutcome::Selected
                } else {
                    debug!(
                        category,
                        item,
                        limit = rule.max_allowed,
                        "Add ignored: category at limit"
                    );
                    ToggleOutcome::LimitReached
                }
            }
            (SelectionMode::Multiple, false) => match already {
                Some(position) => {
                    picks.remove(position);
                    ToggleOutcome::Deselected
                }
                None => ToggleOutcome::Unchanged,
            },
        };

        debug!(
            category,
            item,
            want_selected,
            %outcome,
            count = picks.len(),
            "Toggle applied"
        );
        Ok(outcome)
    }

    /// Whether the category has reached its limit (false for unknown keys)
    pub fn is_at_limit(&self, category: &str) -> bool {
        self.rule_and_picks(category)
            .is_some_and(|(rule, picks)| picks.len() >= rule.max_allowed)
    }

    /// Whether `item` is currently picked (false for unknown keys)
    pub fn is_selected(&self, category: &str, item: &str) -> bool {
        self.rule_and_picks(category)
            .is_some_and(|(_, picks)| picks.iter().any(|pick| pick == item))
    }

    /// Number of picks in the category (0 for unknown keys)
    pub fn count(&self, category: &str) -> usize {
        self.rule_and_picks(category)
            .map_or(0, |(_, picks)| picks.len())
    }

    /// Current picks for a category, in pick order
    pub fn selected(&self, category: &str) -> Option<&[String]> {
        self.rule_and_picks(category).map(|(_, picks)| picks)
    }

    pub fn quota_state(&self, category: &str) -> Option<QuotaState> {
        self.rule_and_picks(category).map(|(rule, picks)| {
            QuotaState::classify(picks.len(), rule.min_required, rule.max_allowed)
        })
    }

    /// `min_required <= picks <= max_allowed` for one category
    pub fn is_category_satisfied(&self, category: &str) -> bool {
        self.rule_and_picks(category)
            .is_some_and(|(rule, picks)| Self::within_bounds(rule, picks))
    }

    fn within_bounds(rule: &CategoryRule, picks: &[String]) -> bool {
        rule.min_required <= picks.len() && picks.len() <= rule.max_allowed
    }

    /// True iff every category is within its quota bounds
    pub fn is_ready(&self) -> bool {
        self.catalog
            .categories
            .iter()
            .zip(&self.selections)
            .all(|(rule, picks)| Self::within_bounds(rule, picks))
    }

    /// Categories still outside their bounds, in catalog order
    pub fn unsatisfied_categories(&self) -> Vec<&CategoryRule> {
        self.catalog
            .categories
            .iter()
            .zip(&self.selections)
            .filter(|(rule, picks)| !Self::within_bounds(rule, picks))
            .map(|(rule, _)| rule)
            .collect()
    }

    pub fn status_message(&self) -> &'static str {
        if self.is_ready() {
            READY_MESSAGE
        } else {
            KEEP_PICKING_MESSAGE
        }
    }

    /// Copy of all picks; later toggles do not affect it
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            categories: self
                .catalog
                .categories
                .iter()
                .zip(&self.selections)
                .map(|(rule, picks)| CategorySelection {
                    key: rule.key.clone(),
                    title: rule.display_title().to_string(),
                    items: picks.clone(),
                })
                .collect(),
        }
    }

    /// Empty every category
    pub fn clear(&mut self) {
        for picks in &mut self.selections {
            picks.clear();
        }
        debug!("All selections cleared");
    }
}
