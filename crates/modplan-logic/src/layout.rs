//! Footprints and candidate layouts.

use crate::classify::RuleSet;
use crate::room::{Bounds, Point, Room};
use serde::{Deserialize, Serialize};

/// Rectangular house boundary: `width` is the largo (x), `height` the
/// ancho (y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn total_area(&self) -> f64 {
        self.width * self.height
    }
}

/// One candidate plan: placed rooms inside a footprint, in insertion order.
///
/// Validity and exact fit are derived by the packers and the geometry
/// checks, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub footprint: Footprint,
    pub rooms: Vec<Room>,
}

impl Layout {
    pub fn new(footprint: Footprint, rooms: Vec<Room>) -> Self {
        Self { footprint, rooms }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Sum of placed room areas.
    pub fn covered_area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }

    /// Union bounding box of all rooms, `None` for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        self.rooms.iter().map(Room::bounds).reduce(|a, b| Bounds {
            min_x: a.min_x.min(b.min_x),
            min_y: a.min_y.min(b.min_y),
            max_x: a.max_x.max(b.max_x),
            max_y: a.max_y.max(b.max_y),
        })
    }

    /// Functional category per room, in room order.
    pub fn labels<'r>(&self, rules: &'r RuleSet) -> Vec<&'r str> {
        self.rooms
            .iter()
            .map(|r| rules.classify(r.width(), r.height()))
            .collect()
    }

    /// Label anchors (vertex means) per room.
    pub fn centroids(&self) -> Vec<Point> {
        self.rooms.iter().map(Room::centroid).collect()
    }

    /// Mirror every room about `x = axis_x`. Wide presets are drawn this way,
    /// extending toward negative x from the module seam.
    pub fn reflect(&self, axis_x: f64) -> Layout {
        Layout {
            footprint: self.footprint,
            rooms: self.rooms.iter().map(|r| r.reflected(axis_x)).collect(),
        }
    }

    pub fn room_names(&self) -> Vec<&str> {
        self.rooms.iter().map(Room::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_layout() -> Layout {
        Layout::new(
            Footprint::new(4.88, 2.983),
            vec![
                Room::rect("P1", 3.529, 2.983),
                Room::rect("P2", 1.351, 2.983).translated(3.529, 0.0),
            ],
        )
    }

    #[test]
    fn covered_area_sums_rooms() {
        let layout = two_room_layout();
        assert!((layout.covered_area() - 4.88 * 2.983).abs() < 1e-6);
    }

    #[test]
    fn union_bounds() {
        let b = two_room_layout().bounds().unwrap();
        assert_eq!(b.min_x, 0.0);
        assert!((b.max_x - 4.88).abs() < 1e-9);
        assert_eq!(b.max_y, 2.983);
        assert!(Layout::new(Footprint::new(1.0, 1.0), vec![]).bounds().is_none());
    }

    #[test]
    fn reflect_twice_restores_geometry() {
        let layout = two_room_layout();
        let mirrored = layout.reflect(4.88);
        let b = mirrored.bounds().unwrap();
        assert!((b.min_x - 4.88).abs() < 1e-9);
        assert!((b.max_x - 9.76).abs() < 1e-9);

        let back = mirrored.reflect(4.88);
        for (orig, round) in layout.rooms.iter().zip(&back.rooms) {
            assert_eq!(orig.name(), round.name());
            for (a, b) in orig.vertices().iter().zip(round.vertices()) {
                assert!((a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn footprint_area() {
        assert!((Footprint::new(4.88, 7.32).total_area() - 35.7216).abs() < 1e-9);
    }
}
