//! Meal catalog: categories, their quota rules, and the items on offer.
//!
//! The catalog is static for the lifetime of a session. It can be loaded from
//! and saved to a JSON file; the built-in default mirrors the school-lunch
//! menu the picker ships with.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::MealPickerError;
use crate::types::SelectionMode;

/// A single selectable food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealItem {
    pub name: String,
    /// Shown in place of a picture
    #[serde(default)]
    pub emoji: String,
    /// Picture path; kept for catalog fidelity, terminals show the emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MealItem {
    pub fn new(name: &str, emoji: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            emoji: emoji.to_string(),
            image: Some(image.to_string()),
        }
    }
}

/// Quota rule and item list for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Unique identifier, e.g. `veggies`
    pub key: String,
    /// Display heading; falls back to the key when empty
    #[serde(default)]
    pub title: String,
    #[serde(alias = "min")]
    pub min_required: usize,
    #[serde(alias = "limit")]
    pub max_allowed: usize,
    pub items: Vec<MealItem>,
}

impl CategoryRule {
    pub fn new(key: &str, title: &str, min_required: usize, max_allowed: usize) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            min_required,
            max_allowed,
            items: Vec::new(),
        }
    }

    /// Builder-style item append
    pub fn with_item(mut self, name: &str, emoji: &str, image: &str) -> Self {
        self.items.push(MealItem::new(name, emoji, image));
        self
    }

    pub fn mode(&self) -> SelectionMode {
        SelectionMode::for_limit(self.max_allowed)
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.key
        } else {
            &self.title
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn item(&self, name: &str) -> Option<&MealItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Human-readable quota, e.g. "Pick exactly 3" or "Pick 2 to 3"
    pub fn quota_label(&self) -> String {
        match (self.min_required, self.max_allowed) {
            (1, 1) => "Pick 1".to_string(),
            (0, max) => format!("Pick up to {}", max),
            (min, max) if min == max => format!("Pick exactly {}", min),
            (min, max) => format!("Pick {} to {}", min, max),
        }
    }

    /// Check this rule's bounds and item names
    pub fn validate(&self) -> std::result::Result<(), MealPickerError> {
        if self.key.trim().is_empty() {
            return Err(MealPickerError::catalog("category key must not be empty"));
        }
        if self.max_allowed == 0 {
            return Err(MealPickerError::catalog(format!(
                "category '{}' must allow at least one pick",
                self.key
            )));
        }
        if self.min_required > self.max_allowed {
            return Err(MealPickerError::catalog(format!(
                "category '{}' requires {} picks but allows only {}",
                self.key, self.min_required, self.max_allowed
            )));
        }
        if self.max_allowed > self.items.len() {
            return Err(MealPickerError::catalog(format!(
                "category '{}' allows {} picks but offers only {} items",
                self.key,
                self.max_allowed,
                self.items.len()
            )));
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err(MealPickerError::catalog(format!(
                    "category '{}' has an item with an empty name",
                    self.key
                )));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(MealPickerError::catalog(format!(
                    "category '{}' lists '{}' more than once",
                    self.key, item.name
                )));
            }
        }

        Ok(())
    }
}

/// The full, ordered set of categories offered in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCatalog {
    pub categories: Vec<CategoryRule>,
}

impl Default for MealCatalog {
    fn default() -> Self {
        let favorites = CategoryRule::new("favorites", "Favorites", 1, 1)
            .with_item("Pizza", "🍕", "images/pizza.jpg")
            .with_item("Chicken Nuggets", "🍗", "images/chicken-nuggets.jpg");

        let others = CategoryRule::new("others", "Other Foods", 0, 4)
            .with_item("Sushi", "🍣", "images/sushi.jpg")
            .with_item("Rotisserie chicken", "🍗", "images/rotisserie-chicken.jpg")
            .with_item("Pulled Pork", "🥪", "images/pulled-pork.jpg")
            .with_item("Quesadilla", "🫓", "images/quesadilla.jpg")
            .with_item("Baked Beans", "🫘", "images/baked-beans.jpg")
            .with_item("Ham Biscuit", "🥐", "images/ham-biscuit.jpg")
            .with_item("Turkey", "🦃", "images/turkey.jpg")
            .with_item("Steak", "🥩", "images/steak.jpg")
            .with_item("Chicken tikka masala", "🍛", "images/chicken-tikka-masala.jpg")
            .with_item("Peanut butter and jelly", "🥪", "images/pbj.jpg")
            .with_item("Burger", "🍔", "images/burger.jpg")
            .with_item("Pancake and sausage on stick", "🥞", "images/pancake-sausage.jpg");

        let veggies = CategoryRule::new("veggies", "Veggies", 3, 3)
            .with_item("Edamame", "🫛", "images/edamame.jpg")
            .with_item("Broccoli", "🥦", "images/broccoli.jpg")
            .with_item("Carrots", "🥕", "images/carrots.jpg")
            .with_item("Mixed vegetables", "🥗", "images/mixed-vegetables.jpg")
            .with_item("Corn", "🌽", "images/corn.jpg")
            .with_item("Green beans", "🫘", "images/green-beans.jpg");

        let fruits = CategoryRule::new("fruits", "Fruits", 2, 3)
            .with_item("Apple", "🍎", "images/apple.jpg")
            .with_item("Banana", "🍌", "images/banana.jpg")
            .with_item("Strawberry", "🍓", "images/strawberry.jpg")
            .with_item("Mango", "🥭", "images/mango.jpg")
            .with_item("Blueberries", "🫐", "images/blueberries.jpg")
            .with_item("Grapes", "🍇", "images/grapes.jpg");

        Self {
            categories: vec![favorites, others, veggies, fruits],
        }
    }
}

impl MealCatalog {
    pub fn new(categories: Vec<CategoryRule>) -> Self {
        Self { categories }
    }

    pub fn category(&self, key: &str) -> Option<&CategoryRule> {
        self.categories.iter().find(|rule| rule.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|rule| rule.key.as_str())
    }

    /// Validate every category and key uniqueness
    pub fn validate(&self) -> std::result::Result<(), MealPickerError> {
        if self.categories.is_empty() {
            return Err(MealPickerError::catalog("catalog has no categories"));
        }

        let mut keys = HashSet::new();
        for rule in &self.categories {
            rule.validate()?;
            if !keys.insert(rule.key.as_str()) {
                return Err(MealPickerError::catalog(format!(
                    "duplicate category key '{}'",
                    rule.key
                )));
            }
        }

        Ok(())
    }

    /// Parse a catalog from JSON text (not validated)
    pub fn from_json_str(json: &str) -> std::result::Result<Self, MealPickerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog = Self::from_json_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = MealCatalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.keys().collect::<Vec<_>>(),
            vec!["favorites", "others", "veggies", "fruits"]
        );
    }

    #[test]
    fn test_default_quotas() {
        let catalog = MealCatalog::default();
        let favorites = catalog.category("favorites").unwrap();
        assert_eq!((favorites.min_required, favorites.max_allowed), (1, 1));
        assert!(favorites.mode().is_exclusive());

        let fruits = catalog.category("fruits").unwrap();
        assert_eq!((fruits.min_required, fruits.max_allowed), (2, 3));
        assert!(!fruits.mode().is_exclusive());
    }

    #[test]
    fn test_quota_labels() {
        let catalog = MealCatalog::default();
        let label = |key: &str| catalog.category(key).unwrap().quota_label();
        assert_eq!(label("favorites"), "Pick 1");
        assert_eq!(label("others"), "Pick up to 4");
        assert_eq!(label("veggies"), "Pick exactly 3");
        assert_eq!(label("fruits"), "Pick 2 to 3");
    }

    #[test]
    fn test_min_above_max_rejected() {
        let rule = CategoryRule::new("fruits", "Fruits", 3, 2)
            .with_item("Apple", "🍎", "a.jpg")
            .with_item("Banana", "🍌", "b.jpg");
        let err = rule.validate().unwrap_err();
        assert!(err.to_string().contains("requires 3 picks"));
    }

    #[test]
    fn test_limit_above_item_count_rejected() {
        let rule = CategoryRule::new("veggies", "Veggies", 1, 3).with_item("Corn", "🌽", "c.jpg");
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let rule = CategoryRule::new("empty", "", 0, 0).with_item("Corn", "🌽", "c.jpg");
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let rule = CategoryRule::new("fruits", "Fruits", 1, 2)
            .with_item("Apple", "🍎", "a.jpg")
            .with_item("Apple", "🍏", "b.jpg");
        let err = rule.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let rule = CategoryRule::new("fruits", "Fruits", 1, 1).with_item("Apple", "🍎", "a.jpg");
        let catalog = MealCatalog::new(vec![rule.clone(), rule]);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate category key"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(MealCatalog::new(Vec::new()).validate().is_err());
    }

    #[test]
    fn test_json_aliases() {
        let json = r#"{
            "categories": [
                { "key": "favorites", "min": 1, "limit": 1,
                  "items": [ { "name": "Pizza", "emoji": "🍕" } ] }
            ]
        }"#;
        let catalog = MealCatalog::from_json_str(json).unwrap();
        let rule = catalog.category("favorites").unwrap();
        assert_eq!(rule.max_allowed, 1);
        assert_eq!(rule.display_title(), "favorites");
        assert_eq!(rule.items[0].image, None);
        assert!(catalog.validate().is_ok());
    }
}
