//! Headless front end: apply picks from the command line and report.
//!
//! Goes through exactly the same [`SelectionManager::toggle`] path as the
//! interactive picker, so limit handling and readiness are identical.

use serde::Serialize;
use std::fmt::Write;
use tracing::info;

use crate::catalog::MealCatalog;
use crate::cli::parse_selection;
use crate::error::{MealPickerError, Result};
use crate::selection::{SelectionManager, Snapshot};

/// Result of one requested pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickResult {
    pub category: String,
    pub item: String,
    /// Display form of the toggle outcome
    pub outcome: String,
    pub applied: bool,
}

/// Everything `check` prints
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub ready: bool,
    pub status: String,
    pub picks: Vec<PickResult>,
    /// Titles of categories still outside their quota
    pub unsatisfied: Vec<String>,
    pub summary: Snapshot,
}

/// Apply `category=item` picks in order and build a report
pub fn run_check(manager: &mut SelectionManager, selections: &[String]) -> Result<CheckReport> {
    let mut picks = Vec::with_capacity(selections.len());

    for arg in selections {
        let (category, item) = parse_selection(arg).ok_or_else(|| {
            MealPickerError::general(format!(
                "Invalid selection '{}': expected CATEGORY=ITEM",
                arg
            ))
        })?;
        let outcome = manager.toggle(category, item, true)?;
        picks.push(PickResult {
            category: category.to_string(),
            item: item.to_string(),
            applied: outcome.changed(),
            outcome: outcome.to_string(),
        });
    }

    let report = CheckReport {
        ready: manager.is_ready(),
        status: manager.status_message().to_string(),
        picks,
        unsatisfied: manager
            .unsatisfied_categories()
            .iter()
            .map(|rule| rule.display_title().to_string())
            .collect(),
        summary: manager.snapshot(),
    };
    info!(ready = report.ready, picks = report.picks.len(), "Check complete");
    Ok(report)
}

impl CheckReport {
    /// Plain-text rendering for the terminal
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for pick in self.picks.iter().filter(|pick| !pick.applied) {
            let _ = writeln!(
                out,
                "! {} / {}: {}",
                pick.category, pick.item, pick.outcome
            );
        }
        for (title, items) in self.summary.summary_lines() {
            let _ = writeln!(out, "{}", title);
            for item in items {
                let _ = writeln!(out, "  - {}", item);
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.status);
        if !self.unsatisfied.is_empty() {
            let _ = writeln!(out, "Still need: {}", self.unsatisfied.join(", "));
        }
        out
    }
}

/// Human-readable listing of a catalog
pub fn describe_catalog(catalog: &MealCatalog) -> String {
    let mut out = String::new();
    for rule in &catalog.categories {
        let _ = writeln!(
            out,
            "{} [{}] - {} ({})",
            rule.display_title(),
            rule.key,
            rule.quota_label(),
            rule.mode()
        );
        for item in &rule.items {
            let _ = writeln!(out, "  {} {}", item.emoji, item.name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_check_ready() {
        let mut mgr = SelectionManager::new(MealCatalog::default()).unwrap();
        let report = run_check(
            &mut mgr,
            &picks(&[
                "favorites=Pizza",
                "veggies=Corn",
                "veggies=Carrots",
                "veggies=Broccoli",
                "fruits=Apple",
                "fruits=Mango",
            ]),
        )
        .unwrap();
        assert!(report.ready);
        assert!(report.unsatisfied.is_empty());
        assert!(report.to_text().contains("Other Foods\n  - No picks yet"));
    }

    #[test]
    fn test_check_reports_ignored_pick() {
        let mut mgr = SelectionManager::new(MealCatalog::default()).unwrap();
        let report = run_check(
            &mut mgr,
            &picks(&["fruits=Apple", "fruits=Mango", "fruits=Grapes", "fruits=Banana"]),
        )
        .unwrap();
        assert!(!report.ready);
        let last = report.picks.last().unwrap();
        assert!(!last.applied);
        assert_eq!(last.outcome, "LimitReached");
        assert!(report.to_text().contains("! fruits / Banana: LimitReached"));
        assert_eq!(report.unsatisfied, vec!["Favorites", "Veggies"]);
    }

    #[test]
    fn test_check_rejects_bad_input() {
        let mut mgr = SelectionManager::new(MealCatalog::default()).unwrap();
        assert!(run_check(&mut mgr, &picks(&["Pizza"])).is_err());
        let err = run_check(&mut mgr, &picks(&["favorites=Tacos"])).unwrap_err();
        assert!(err.is_caller_fault());
    }

    #[test]
    fn test_describe_catalog() {
        let text = describe_catalog(&MealCatalog::default());
        assert!(text.contains("Veggies [veggies] - Pick exactly 3 (multiple)"));
        assert!(text.contains("Favorites [favorites] - Pick 1 (exclusive)"));
        assert!(text.contains("  🍕 Pizza"));
    }
}
