//! Exhaustive permutation search over a room catalog.
//!
//! Every ordering of the catalog is an independent trial on a fresh packer;
//! a trial either yields a layout that exactly fills the footprint or is
//! dropped. Results keep trial order (finals outer, permutations inner).
//!
//! With the `parallel` feature the trials run on rayon's pool; the indexed
//! collect keeps the same order as the sequential path.

use crate::config::SearchConfig;
use crate::constants::approx_eq;
use crate::free_space;
use crate::layout::{Footprint, Layout};
use crate::permutations::{factorial, Permutations};
use crate::room::Room;
use crate::shelf::ShelfPacker;
use log::{debug, info, trace, warn};

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Permutation trials actually run.
    pub trials: usize,
    /// Trials that produced a kept layout.
    pub accepted: usize,
    /// The permutation budget cut the enumeration short.
    pub truncated: bool,
}

/// Layouts found plus counters.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub layouts: Vec<Layout>,
    pub stats: SearchStats,
}

/// One trial: an optional final room index and a catalog ordering.
type Trial = (Option<usize>, Vec<usize>);

fn build_trials(
    room_count: usize,
    final_count: usize,
    budget: Option<usize>,
) -> (Vec<Trial>, bool) {
    let finals: Vec<Option<usize>> = if final_count == 0 {
        vec![None]
    } else {
        (0..final_count).map(Some).collect()
    };
    let total = factorial(room_count).saturating_mul(finals.len());
    let limit = budget.unwrap_or(usize::MAX);

    let trials: Vec<Trial> = finals
        .into_iter()
        .flat_map(|f| Permutations::new(room_count).map(move |p| (f, p)))
        .take(limit)
        .collect();
    let truncated = trials.len() < total;
    (trials, truncated)
}

#[cfg(feature = "parallel")]
fn run_trials<F>(trials: &[Trial], trial: F) -> Vec<Layout>
where
    F: Fn(&Trial) -> Option<Layout> + Sync,
{
    use rayon::prelude::*;
    let found: Vec<Option<Layout>> = trials.par_iter().map(&trial).collect();
    found.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
fn run_trials<F>(trials: &[Trial], trial: F) -> Vec<Layout>
where
    F: Fn(&Trial) -> Option<Layout>,
{
    trials.iter().filter_map(trial).collect()
}

/// Shelf-pack `rooms` in the order given by `perm`, then the final room as
/// a forced last row. Keeps the layout only if the cursor ends on the far
/// corner and the rooms cover the whole `footprint`.
pub fn try_exact_fit(
    footprint: Footprint,
    rooms: &[Room],
    perm: &[usize],
    final_room: Option<&Room>,
) -> Option<Layout> {
    let mut packer = ShelfPacker::new(footprint);
    for &i in perm {
        if let Err(e) = packer.add_room(&rooms[i]) {
            trace!("trial {perm:?} aborted: {e}");
            return None;
        }
    }
    if !packer.is_valid() {
        return None;
    }
    if let Some(last) = final_room {
        if let Err(e) = packer.add_room_bottom(last) {
            trace!("trial {perm:?} final {} rejected: {e}", last.name());
            return None;
        }
    }
    if !packer.is_exact_fit() {
        return None;
    }
    // the cursor can reach the far corner around a hole
    let layout = packer.into_layout();
    approx_eq(layout.covered_area(), footprint.total_area()).then_some(layout)
}

/// Exact-fit search: every final room × every permutation of `rooms`.
///
/// With no finals, permutations are tried on their own.
pub fn exact_fit_search(
    footprint: Footprint,
    rooms: &[Room],
    finals: &[Room],
    config: &SearchConfig,
) -> SearchOutcome {
    let (trials, truncated) = build_trials(rooms.len(), finals.len(), config.max_permutations);
    if truncated {
        warn!(
            "exact-fit search truncated to {} trials ({} rooms, {} finals)",
            trials.len(),
            rooms.len(),
            finals.len()
        );
    }

    let layouts = run_trials(&trials, |(f, perm)| {
        try_exact_fit(footprint, rooms, perm, f.map(|i| &finals[i]))
    });

    let stats = SearchStats {
        trials: trials.len(),
        accepted: layouts.len(),
        truncated,
    };
    info!(
        "exact-fit search: {} of {} trials fill {:.2}×{:.2}",
        stats.accepted, stats.trials, footprint.width, footprint.height
    );
    SearchOutcome { layouts, stats }
}

/// Splitter-pack `rooms` in `perm` order. Keeps the layout only if every
/// expected room was placed and the rooms cover the whole footprint.
pub fn try_free_space(
    footprint: Footprint,
    rooms: &[Room],
    perm: &[usize],
    expected_rooms: usize,
) -> Option<Layout> {
    let ordered: Vec<&Room> = perm.iter().map(|&i| &rooms[i]).collect();
    let packer = free_space::pack(footprint, &ordered);
    if packer.rooms().len() != expected_rooms {
        trace!("trial {perm:?} skipped {:?}", packer.skipped());
        return None;
    }
    let layout = packer.into_layout();
    approx_eq(layout.covered_area(), footprint.total_area()).then_some(layout)
}

/// Free-space search: every permutation of `rooms` through the splitter,
/// filtered by room count and full coverage.
pub fn free_space_search(
    footprint: Footprint,
    rooms: &[Room],
    config: &SearchConfig,
) -> SearchOutcome {
    let expected = config.expected_rooms.unwrap_or(rooms.len());
    let (trials, truncated) = build_trials(rooms.len(), 0, config.max_permutations);
    if truncated {
        warn!(
            "free-space search truncated to {} of {} permutations",
            trials.len(),
            factorial(rooms.len())
        );
    }

    let layouts = run_trials(&trials, |(_, perm)| try_free_space(footprint, rooms, perm, expected));

    let stats = SearchStats {
        trials: trials.len(),
        accepted: layouts.len(),
        truncated,
    };
    debug!("free-space search expected {expected} rooms per layout");
    info!(
        "free-space search: {} of {} trials tile {:.2}×{:.2}",
        stats.accepted, stats.trials, footprint.width, footprint.height
    );
    SearchOutcome { layouts, stats }
}
