//! Functional classification of rooms by their dimensions.
//!
//! Each preset owns a [`RuleSet`]: an ordered table of numeric range rules
//! plus the adjacency constraints checked against it. The first rule whose
//! box contains `(width, height)` wins; otherwise the default category.

use crate::adjacency::AdjacencyConstraint;
use crate::constants::categories;
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range on both axes, mapping to a category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub width_min: f64,
    pub width_max: f64,
    pub height_min: f64,
    pub height_max: f64,
}

impl CategoryRule {
    pub fn new(name: &str, width: (f64, f64), height: (f64, f64)) -> Self {
        Self {
            name: name.to_string(),
            width_min: width.0,
            width_max: width.1,
            height_min: height.0,
            height_max: height.1,
        }
    }

    pub fn contains(&self, width: f64, height: f64) -> bool {
        (self.width_min..=self.width_max).contains(&width)
            && (self.height_min..=self.height_max).contains(&height)
    }
}

/// Classification table and adjacency requirements of one preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub categories: Vec<CategoryRule>,
    pub default_category: String,
    pub constraints: Vec<AdjacencyConstraint>,
}

impl RuleSet {
    pub fn new(categories: Vec<CategoryRule>, constraints: Vec<AdjacencyConstraint>) -> Self {
        Self {
            categories,
            default_category: categories::DEFAULT.to_string(),
            constraints,
        }
    }

    /// First matching rule's name, else the default category.
    pub fn classify(&self, width: f64, height: f64) -> &str {
        classify(&self.categories, &self.default_category, width, height)
    }
}

/// First-match linear scan over `rules`.
pub fn classify<'a>(
    rules: &'a [CategoryRule],
    default: &'a str,
    width: f64,
    height: f64,
) -> &'a str {
    rules
        .iter()
        .find(|r| r.contains(width, height))
        .map(|r| r.name.as_str())
        .unwrap_or(default)
}
