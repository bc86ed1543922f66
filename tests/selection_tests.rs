//! Tests for the Selection Manager
//!
//! These tests verify:
//! - Exclusive choice, limit enforcement and idempotent removal
//! - Readiness over a mixed set of quota kinds
//! - Snapshot isolation
//! - Rejection of names outside the catalog

use mealpicker::{
    CategoryRule, MealCatalog, MealPickerError, QuotaState, SelectionManager, ToggleOutcome,
};

fn numbered_rule(key: &str, min: usize, max: usize, prefix: &str, count: usize) -> CategoryRule {
    (0..count).fold(CategoryRule::new(key, key, min, max), |rule, i| {
        rule.with_item(&format!("{}{}", prefix, i), "🍽", "plate.jpg")
    })
}

/// exclusive(1..1), fixedQuota(3..3), range(2..3), optional(0..4)
fn quota_catalog() -> MealCatalog {
    MealCatalog::new(vec![
        numbered_rule("exclusive", 1, 1, "X", 2),
        numbered_rule("fixedQuota", 3, 3, "F", 5),
        numbered_rule("range", 2, 3, "R", 5),
        numbered_rule("optional", 0, 4, "O", 6),
    ])
}

fn scenario_catalog() -> MealCatalog {
    let favorites = CategoryRule::new("favorites", "Favorites", 1, 1)
        .with_item("Pizza", "🍕", "pizza.jpg")
        .with_item("Nuggets", "🍗", "nuggets.jpg");
    let mut veggies = CategoryRule::new("veggies", "Veggies", 3, 3);
    for name in ["A", "B", "C", "D", "E", "F"] {
        veggies = veggies.with_item(name, "🥦", "veg.jpg");
    }
    let fruits = CategoryRule::new("fruits", "Fruits", 2, 3)
        .with_item("Apple", "🍎", "apple.jpg")
        .with_item("Banana", "🍌", "banana.jpg")
        .with_item("Mango", "🥭", "mango.jpg")
        .with_item("Grapes", "🍇", "grapes.jpg");
    let others = CategoryRule::new("others", "Others", 0, 4)
        .with_item("Sushi", "🍣", "sushi.jpg")
        .with_item("Steak", "🥩", "steak.jpg")
        .with_item("Burger", "🍔", "burger.jpg")
        .with_item("Turkey", "🦃", "turkey.jpg")
        .with_item("Quesadilla", "🫓", "quesadilla.jpg");
    MealCatalog::new(vec![favorites, veggies, fruits, others])
}

// =============================================================================
// Exclusive Choice
// =============================================================================

#[test]
fn test_exclusive_select_b_after_a_keeps_only_b() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    mgr.toggle("favorites", "Pizza", true).unwrap();
    mgr.toggle("favorites", "Nuggets", true).unwrap();

    assert!(mgr.is_selected("favorites", "Nuggets"));
    assert!(!mgr.is_selected("favorites", "Pizza"));
    assert_eq!(mgr.count("favorites"), 1);
}

#[test]
fn test_exclusive_deselect_empties_category() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    mgr.toggle("favorites", "Pizza", true).unwrap();
    mgr.toggle("favorites", "Pizza", false).unwrap();
    assert_eq!(mgr.count("favorites"), 0);
    assert_eq!(mgr.quota_state("favorites"), Some(QuotaState::Empty));
}

// =============================================================================
// Limit Enforcement
// =============================================================================

#[test]
fn test_add_beyond_limit_leaves_set_unchanged() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    for name in ["A", "B", "C"] {
        assert_eq!(
            mgr.toggle("veggies", name, true).unwrap(),
            ToggleOutcome::Selected
        );
    }
    let before = mgr.snapshot();

    assert_eq!(
        mgr.toggle("veggies", "D", true).unwrap(),
        ToggleOutcome::LimitReached
    );
    assert_eq!(mgr.snapshot(), before);
    assert!(mgr.is_at_limit("veggies"));
}

#[test]
fn test_removal_at_limit_is_never_blocked() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    for name in ["A", "B", "C"] {
        mgr.toggle("veggies", name, true).unwrap();
    }
    assert_eq!(
        mgr.toggle("veggies", "B", false).unwrap(),
        ToggleOutcome::Deselected
    );
    assert!(!mgr.is_at_limit("veggies"));
    assert_eq!(
        mgr.toggle("veggies", "D", true).unwrap(),
        ToggleOutcome::Selected
    );
    assert_eq!(mgr.selected("veggies").unwrap(), ["A", "C", "D"]);
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_deselect_unselected_item_is_noop() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    mgr.toggle("fruits", "Apple", true).unwrap();
    let before = mgr.snapshot();

    assert_eq!(
        mgr.toggle("fruits", "Mango", false).unwrap(),
        ToggleOutcome::Unchanged
    );
    assert_eq!(mgr.snapshot(), before);
}

#[test]
fn test_select_twice_is_noop() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    mgr.toggle("others", "Sushi", true).unwrap();
    assert_eq!(
        mgr.toggle("others", "Sushi", true).unwrap(),
        ToggleOutcome::Unchanged
    );
    assert_eq!(mgr.count("others"), 1);
}

// =============================================================================
// Readiness
// =============================================================================

#[test]
fn test_readiness_requires_exclusive_choice() {
    let mut mgr = SelectionManager::new(quota_catalog()).unwrap();
    for name in ["F0", "F1", "F2"] {
        mgr.toggle("fixedQuota", name, true).unwrap();
    }
    for name in ["R0", "R1"] {
        mgr.toggle("range", name, true).unwrap();
    }
    assert!(!mgr.is_ready(), "exclusive category is still empty");

    mgr.toggle("exclusive", "X0", true).unwrap();
    assert!(mgr.is_ready());
}

#[test]
fn test_readiness_bounds_per_quota_kind() {
    let mut mgr = SelectionManager::new(quota_catalog()).unwrap();
    mgr.toggle("exclusive", "X1", true).unwrap();
    mgr.toggle("range", "R0", true).unwrap();
    mgr.toggle("range", "R1", true).unwrap();

    // fixed quota needs exactly 3
    mgr.toggle("fixedQuota", "F0", true).unwrap();
    mgr.toggle("fixedQuota", "F1", true).unwrap();
    assert!(!mgr.is_ready());
    mgr.toggle("fixedQuota", "F2", true).unwrap();
    assert!(mgr.is_ready());

    // range accepts 3 as well as 2
    mgr.toggle("range", "R2", true).unwrap();
    assert!(mgr.is_ready());

    // optional accepts anything up to 4
    for name in ["O0", "O1", "O2", "O3"] {
        mgr.toggle("optional", name, true).unwrap();
        assert!(mgr.is_ready());
    }

    // range dropping to 1 breaks readiness
    mgr.toggle("range", "R0", false).unwrap();
    mgr.toggle("range", "R1", false).unwrap();
    assert!(!mgr.is_ready());
    assert!(!mgr.is_category_satisfied("range"));
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

#[test]
fn test_end_to_end_scenario() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();

    mgr.toggle("favorites", "Pizza", true).unwrap();
    for name in ["A", "B", "C"] {
        mgr.toggle("veggies", name, true).unwrap();
    }
    mgr.toggle("fruits", "Apple", true).unwrap();
    mgr.toggle("fruits", "Banana", true).unwrap();
    assert!(mgr.is_ready());

    assert_eq!(
        mgr.toggle("veggies", "D", true).unwrap(),
        ToggleOutcome::LimitReached
    );
    assert_eq!(mgr.selected("veggies").unwrap(), ["A", "B", "C"]);
    assert!(mgr.is_ready());

    mgr.toggle("favorites", "Pizza", false).unwrap();
    assert!(!mgr.is_ready());
}

// =============================================================================
// Snapshot Isolation
// =============================================================================

#[test]
fn test_snapshot_mutation_does_not_leak() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    mgr.toggle("fruits", "Apple", true).unwrap();

    let mut snapshot = mgr.snapshot();
    snapshot.categories[2].items.push("Grapes".to_string());
    snapshot.categories[2].items.retain(|item| item != "Apple");

    assert!(mgr.is_selected("fruits", "Apple"));
    assert!(!mgr.is_selected("fruits", "Grapes"));
    assert_eq!(mgr.snapshot().get("fruits").unwrap().items, vec!["Apple"]);
}

#[test]
fn test_snapshot_not_affected_by_later_toggles() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    mgr.toggle("others", "Steak", true).unwrap();
    let snapshot = mgr.snapshot();

    mgr.toggle("others", "Steak", false).unwrap();
    assert_eq!(snapshot.get("others").unwrap().items, vec!["Steak"]);
    assert!(mgr.snapshot().get("others").unwrap().items.is_empty());
}

// =============================================================================
// Catalog Fidelity
// =============================================================================

#[test]
fn test_unknown_item_is_caller_fault() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    let err = mgr.toggle("fruits", "Kale", true).unwrap_err();
    assert!(matches!(
        err,
        MealPickerError::UnknownItem { ref category, ref item }
            if category == "fruits" && item == "Kale"
    ));
    assert_eq!(mgr.count("fruits"), 0);
}

#[test]
fn test_unknown_category_is_caller_fault() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    let err = mgr.toggle("desserts", "Cake", false).unwrap_err();
    assert!(err.is_caller_fault());
}

#[test]
fn test_item_from_other_category_rejected() {
    let mut mgr = SelectionManager::new(scenario_catalog()).unwrap();
    assert!(mgr.toggle("veggies", "Apple", true).is_err());
}

#[test]
fn test_invalid_catalog_rejected_at_construction() {
    let bad = MealCatalog::new(vec![
        CategoryRule::new("veggies", "Veggies", 3, 3).with_item("Corn", "🌽", "corn.jpg"),
    ]);
    assert!(matches!(
        SelectionManager::new(bad),
        Err(MealPickerError::Catalog(_))
    ));
}
