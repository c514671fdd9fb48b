//! Geometric deduplication of candidate layouts.
//!
//! Two layouts are duplicates when they cover the same room outlines,
//! whatever the room names or insertion order.

use crate::constants::ROUND_DECIMALS;
use crate::layout::Layout;
use std::collections::HashSet;

/// Hashable, order-independent canonical form of a layout: per room the
/// sorted rounded vertex set, rooms sorted by their lowest corner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutKey(Vec<Vec<(i64, i64)>>);

fn quantize(v: f64) -> i64 {
    (v * 10f64.powi(ROUND_DECIMALS)).round() as i64
}

/// Canonical key of `layout`.
pub fn normalize(layout: &Layout) -> LayoutKey {
    let mut rooms: Vec<Vec<(i64, i64)>> = layout
        .rooms
        .iter()
        .map(|room| {
            let mut pts: Vec<(i64, i64)> = room
                .vertices()
                .iter()
                .map(|&(x, y)| (quantize(x), quantize(y)))
                .collect();
            pts.sort_unstable();
            pts
        })
        .collect();
    // first element of a sorted rectangle is its (min_x, min_y) corner
    rooms.sort();
    LayoutKey(rooms)
}

/// Keep the first layout of every geometric duplicate group, preserving
/// order. Returns how many were dropped.
pub fn dedupe(layouts: &mut Vec<Layout>) -> usize {
    let before = layouts.len();
    let mut seen = HashSet::new();
    layouts.retain(|l| seen.insert(normalize(l)));
    before - layouts.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Footprint;
    use crate::room::Room;

    fn layout(order: &[usize]) -> Layout {
        let rooms = [
            Room::rect("a", 1.0, 1.0),
            Room::rect("b", 2.0, 1.0).translated(1.0, 0.0),
            Room::rect("c", 3.0, 1.0).translated(0.0, 1.0),
        ];
        Layout::new(
            Footprint::new(3.0, 2.0),
            order.iter().map(|&i| rooms[i].clone()).collect(),
        )
    }

    #[test]
    fn reordering_does_not_change_key() {
        assert_eq!(normalize(&layout(&[0, 1, 2])), normalize(&layout(&[2, 0, 1])));
    }

    #[test]
    fn float_noise_is_rounded_away() {
        let a = Layout::new(Footprint::new(1.0, 1.0), vec![Room::rect("x", 1.0, 1.0)]);
        let b = Layout::new(
            Footprint::new(1.0, 1.0),
            vec![Room::rect("y", 1.000_000_1, 0.999_999_9)],
        );
        assert_eq!(normalize(&a), normalize(&b));
    }

    #[test]
    fn different_geometry_differs() {
        let moved = Layout::new(
            Footprint::new(3.0, 2.0),
            vec![
                Room::rect("b", 2.0, 1.0),
                Room::rect("a", 1.0, 1.0).translated(2.0, 0.0),
                Room::rect("c", 3.0, 1.0).translated(0.0, 1.0),
            ],
        );
        assert_ne!(normalize(&layout(&[0, 1, 2])), normalize(&moved));
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let mut all = vec![layout(&[1, 0, 2]), layout(&[0, 1, 2]), layout(&[2, 1, 0])];
        let dropped = dedupe(&mut all);
        assert_eq!(dropped, 2);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rooms[0].name(), "b");
    }
}
