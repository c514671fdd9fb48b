//! Shared-wall detection and functional adjacency rules.
//!
//! Two rooms are adjacent when some edge of one is collinear with some edge
//! of the other (both horizontal at the same y, or both vertical at the
//! same x) and their projections on that axis overlap, end points
//! included.

use crate::classify::RuleSet;
use crate::constants::EPSILON;
use crate::layout::Layout;
use crate::room::{Point, Room};
use serde::{Deserialize, Serialize};

/// Unordered pair of categories that must touch when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjacencyConstraint {
    pub a: String,
    pub b: String,
}

impl AdjacencyConstraint {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    /// True if `(x, y)` is this pair in either order.
    pub fn matches(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

fn is_horizontal(edge: &(Point, Point)) -> bool {
    (edge.0 .1 - edge.1 .1).abs() <= EPSILON
}

fn is_vertical(edge: &(Point, Point)) -> bool {
    (edge.0 .0 - edge.1 .0).abs() <= EPSILON
}

/// Inclusive interval overlap.
fn spans_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    let (a_lo, a_hi) = (a0.min(a1), a0.max(a1));
    let (b_lo, b_hi) = (b0.min(b1), b0.max(b1));
    a_lo <= b_hi + EPSILON && b_lo <= a_hi + EPSILON
}

fn edges_touch(ea: &(Point, Point), eb: &(Point, Point)) -> bool {
    if is_horizontal(ea) && is_horizontal(eb) && (ea.0 .1 - eb.0 .1).abs() <= EPSILON {
        return spans_overlap(ea.0 .0, ea.1 .0, eb.0 .0, eb.1 .0);
    }
    if is_vertical(ea) && is_vertical(eb) && (ea.0 .0 - eb.0 .0).abs() <= EPSILON {
        return spans_overlap(ea.0 .1, ea.1 .1, eb.0 .1, eb.1 .1);
    }
    false
}

/// Whether `a` and `b` share a boundary segment. Symmetric.
pub fn are_adjacent(a: &Room, b: &Room) -> bool {
    a.edges()
        .any(|ea| b.edges().any(|eb| edges_touch(&ea, &eb)))
}

/// Constraints of `rules` that `layout` violates.
///
/// A constraint whose categories are not both present is vacuously met.
pub fn unmet_constraints<'r>(layout: &Layout, rules: &'r RuleSet) -> Vec<&'r AdjacencyConstraint> {
    let labels = layout.labels(rules);
    rules
        .constraints
        .iter()
        .filter(|c| {
            let has_a = labels.iter().any(|&l| l == c.a);
            let has_b = labels.iter().any(|&l| l == c.b);
            if !(has_a && has_b) {
                return false;
            }
            !has_adjacent_pair(layout, &labels, c)
        })
        .collect()
}

fn has_adjacent_pair(layout: &Layout, labels: &[&str], constraint: &AdjacencyConstraint) -> bool {
    let rooms = &layout.rooms;
    (0..rooms.len()).any(|i| {
        ((i + 1)..rooms.len()).any(|j| {
            constraint.matches(labels[i], labels[j]) && are_adjacent(&rooms[i], &rooms[j])
        })
    })
}

/// All constraints of `rules` hold for `layout`.
pub fn satisfies_constraints(layout: &Layout, rules: &RuleSet) -> bool {
    unmet_constraints(layout, rules).is_empty()
}

/// Pairs of room indices that share a wall.
pub fn adjacency_pairs(layout: &Layout) -> Vec<(usize, usize)> {
    let rooms = &layout.rooms;
    let mut pairs = Vec::new();
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            if are_adjacent(&rooms[i], &rooms[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
