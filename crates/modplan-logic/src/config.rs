//! Search configuration.
//!
//! ```
//! use modplan_logic::config::{validate_config, SearchConfig};
//!
//! let config = SearchConfig::default();
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Knobs for one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Cap on permutation trials per search (`None` = exhaustive).
    pub max_permutations: Option<usize>,
    /// Room-count filter for splitter layouts (`None` = catalog size).
    pub expected_rooms: Option<usize>,
    /// Drop geometrically duplicate layouts.
    pub dedupe: bool,
    /// Apply the preset's adjacency constraints.
    pub require_constraints: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_permutations: Some(40_320),
            expected_rooms: None,
            dedupe: true,
            require_constraints: true,
        }
    }
}

impl SearchConfig {
    /// Exhaustive enumeration, no budget.
    pub fn exhaustive() -> Self {
        Self {
            max_permutations: None,
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A budget of zero trials can never produce a layout.
    ZeroPermutationBudget,
    /// Expecting zero rooms filters out everything.
    ZeroExpectedRooms,
}

/// Validate a search configuration, returning all errors found.
pub fn validate_config(config: &SearchConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if config.max_permutations == Some(0) {
        errors.push(ConfigError::ZeroPermutationBudget);
    }
    if config.expected_rooms == Some(0) {
        errors.push(ConfigError::ZeroExpectedRooms);
    }
    errors
}
