//! End-to-end generation for one preset.
//!
//! search (by strategy) → dedupe → adjacency filter. An empty survivor set
//! is reported as [`LayoutError::Infeasible`] rather than silently
//! returning nothing.

use crate::adjacency::{satisfies_constraints, unmet_constraints};
use crate::classify::RuleSet;
use crate::config::SearchConfig;
use crate::dedup::dedupe;
use crate::error::LayoutError;
use crate::layout::{Footprint, Layout};
use crate::presets::{Catalog, Preset, Strategy};
use crate::search::{exact_fit_search, free_space_search, SearchStats};
use log::{debug, info, warn};

/// Result of one generation pass.
#[derive(Debug, Clone)]
pub struct Generation {
    pub stats: SearchStats,
    /// Geometric duplicates dropped.
    pub duplicates: usize,
    /// Distinct exact-fit layouts before adjacency filtering.
    pub candidates: usize,
    /// Layouts that passed every filter, in search order.
    pub layouts: Vec<Layout>,
}

/// Generate layouts for an arbitrary footprint/catalog/rules combination.
/// Never fails; the survivor list may be empty.
pub fn generate_layouts(
    footprint: Footprint,
    catalog: &Catalog,
    rules: &RuleSet,
    strategy: Strategy,
    config: &SearchConfig,
) -> Generation {
    let outcome = match strategy {
        Strategy::Shelf => exact_fit_search(footprint, &catalog.rooms, &catalog.finals, config),
        Strategy::FreeSpace => free_space_search(footprint, &catalog.rooms, config),
    };
    let mut layouts = outcome.layouts;

    let duplicates = if config.dedupe { dedupe(&mut layouts) } else { 0 };
    let candidates = layouts.len();

    if config.require_constraints {
        layouts.retain(|layout| {
            let ok = satisfies_constraints(layout, rules);
            if !ok {
                let unmet: Vec<String> = unmet_constraints(layout, rules)
                    .iter()
                    .map(|c| format!("{}–{}", c.a, c.b))
                    .collect();
                debug!("dropping {:?}: unmet {}", layout.room_names(), unmet.join(", "));
            }
            ok
        });
    }
    Generation {
        stats: outcome.stats,
        duplicates,
        candidates,
        layouts,
    }
}

/// Generate every surviving layout of `preset`.
pub fn generate(preset: Preset, config: &SearchConfig) -> Result<Generation, LayoutError> {
    let catalog = preset.catalog();
    let rules = preset.rules();
    let generation =
        generate_layouts(preset.footprint(), &catalog, &rules, preset.strategy(), config);

    if generation.layouts.is_empty() {
        warn!(
            "{preset}: {} candidates, none satisfies the adjacency rules",
            generation.candidates
        );
        return Err(LayoutError::Infeasible {
            preset: preset.id().to_string(),
            candidates: generation.candidates,
        });
    }
    info!(
        "{preset}: {} layouts ({} candidates, {} duplicates dropped)",
        generation.layouts.len(),
        generation.candidates,
        generation.duplicates
    );
    Ok(generation)
}
