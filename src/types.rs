//! Type-safe selection types for mealpicker
//!
//! Small enums shared by the catalog, the selection manager and the view layer.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How picks accumulate within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SelectionMode {
    /// At most one pick; choosing another replaces it (radio-style)
    Exclusive,
    /// Independent picks up to the category limit (checkbox-style)
    #[default]
    Multiple,
}

impl SelectionMode {
    /// Derive the mode from a category's upper bound
    pub fn for_limit(max_allowed: usize) -> Self {
        if max_allowed == 1 {
            Self::Exclusive
        } else {
            Self::Multiple
        }
    }

    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::Exclusive)
    }
}

/// Where a category's pick count sits relative to its quota bounds
///
/// ```text
/// Empty -> Partial -> Satisfied -> Full
/// ```
///
/// Not every category visits every state: a category with `min == 0` is
/// satisfied while empty, and one with `min == max` jumps from partial to full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum QuotaState {
    /// Nothing picked and at least one pick required
    Empty,
    /// Some picks, still below the minimum
    Partial,
    /// Within bounds with room for more
    Satisfied,
    /// At the limit; further adds are ignored
    Full,
}

impl QuotaState {
    /// Classify a pick count against `(min, max)` bounds
    pub fn classify(count: usize, min_required: usize, max_allowed: usize) -> Self {
        if count >= max_allowed {
            Self::Full
        } else if count >= min_required {
            Self::Satisfied
        } else if count == 0 {
            Self::Empty
        } else {
            Self::Partial
        }
    }

    /// Whether this state counts towards overall readiness
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied | Self::Full)
    }
}
