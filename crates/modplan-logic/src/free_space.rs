//! Free-space rectangle splitter.
//!
//! The footprint starts as a single free rectangle. A room goes into the
//! first free rectangle large enough for it (first fit, so the result
//! depends on room order), anchored at that rectangle's lower-left corner.
//! Every free rectangle the new room intersects is then replaced by its
//! non-degenerate left/right/below/above residuals; the rest are kept.

use crate::constants::{exceeds, EPSILON};
use crate::layout::{Footprint, Layout};
use crate::room::{Bounds, Room};
use log::trace;

/// An unoccupied axis-aligned region of the footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FreeRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn fits(&self, width: f64, height: f64) -> bool {
        !exceeds(width, self.width) && !exceeds(height, self.height)
    }

    fn intersects(&self, b: &Bounds) -> bool {
        b.max_x - EPSILON > self.x
            && self.right() - EPSILON > b.min_x
            && b.max_y - EPSILON > self.y
            && self.top() - EPSILON > b.min_y
    }

    fn is_degenerate(&self) -> bool {
        self.width <= EPSILON || self.height <= EPSILON
    }

    /// Orthogonal difference against `b`: up to four strips, degenerate
    /// ones dropped.
    fn subtract(&self, b: &Bounds) -> Vec<FreeRect> {
        [
            FreeRect::new(self.x, self.y, b.min_x - self.x, self.height),
            FreeRect::new(b.max_x, self.y, self.right() - b.max_x, self.height),
            FreeRect::new(self.x, self.y, self.width, b.min_y - self.y),
            FreeRect::new(self.x, b.max_y, self.width, self.top() - b.max_y),
        ]
        .into_iter()
        .filter(|r| !r.is_degenerate())
        .collect()
    }
}

/// Try to place `room` into `free`.
///
/// Returns the placed (translated) room and the updated free list, or
/// `None` when no free rectangle can hold it.
pub fn place(room: &Room, free: &[FreeRect]) -> Option<(Room, Vec<FreeRect>)> {
    let (width, height) = (room.width(), room.height());
    let slot = free.iter().find(|r| r.fits(width, height))?;
    let placed = room.translated(slot.x, slot.y);
    let occupied = placed.bounds();

    let mut next = Vec::with_capacity(free.len() + 3);
    for rect in free {
        if rect.intersects(&occupied) {
            next.extend(rect.subtract(&occupied));
        } else {
            next.push(*rect);
        }
    }
    Some((placed, next))
}

/// Splitter state over one footprint.
#[derive(Debug, Clone)]
pub struct FreeSpacePacker {
    footprint: Footprint,
    free: Vec<FreeRect>,
    rooms: Vec<Room>,
    skipped: Vec<String>,
}

impl FreeSpacePacker {
    pub fn new(footprint: Footprint) -> Self {
        Self {
            footprint,
            free: vec![FreeRect::new(0.0, 0.0, footprint.width, footprint.height)],
            rooms: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Insert `room` if any free rectangle holds it. A room that fits
    /// nowhere is skipped and recorded, not an error.
    pub fn insert(&mut self, room: &Room) -> bool {
        match place(room, &self.free) {
            Some((placed, free)) => {
                self.rooms.push(placed);
                self.free = free;
                true
            }
            None => {
                trace!("no free space for {}", room.name());
                self.skipped.push(room.name().to_string());
                false
            }
        }
    }

    pub fn free_rects(&self) -> &[FreeRect] {
        &self.free
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Names of rooms that found no space, in insertion order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn into_layout(self) -> Layout {
        Layout::new(self.footprint, self.rooms)
    }
}

/// Pack `rooms` in order, skipping the ones that do not fit.
pub fn pack(footprint: Footprint, rooms: &[&Room]) -> FreeSpacePacker {
    let mut packer = FreeSpacePacker::new(footprint);
    for room in rooms {
        packer.insert(room);
    }
    packer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_room_goes_to_origin() {
        let free = vec![FreeRect::new(0.0, 0.0, 4.0, 4.0)];
        let (placed, next) = place(&Room::rect("a", 1.0, 2.0), &free).unwrap();
        assert_eq!(placed.bounds().min_x, 0.0);
        assert_eq!(placed.bounds().min_y, 0.0);
        // right strip and above strip
        assert_eq!(
            next,
            vec![
                FreeRect::new(1.0, 0.0, 3.0, 4.0),
                FreeRect::new(0.0, 2.0, 4.0, 2.0),
            ]
        );
    }

    #[test]
    fn first_fit_is_order_sensitive() {
        let free = vec![
            FreeRect::new(5.0, 0.0, 1.0, 1.0),
            FreeRect::new(0.0, 0.0, 3.0, 3.0),
        ];
        let (small, _) = place(&Room::rect("s", 1.0, 1.0), &free).unwrap();
        assert_eq!(small.bounds().min_x, 5.0);
        let (big, _) = place(&Room::rect("b", 2.0, 2.0), &free).unwrap();
        assert_eq!(big.bounds().min_x, 0.0);
    }

    #[test]
    fn non_intersecting_rects_unchanged() {
        let free = vec![
            FreeRect::new(0.0, 0.0, 2.0, 2.0),
            FreeRect::new(3.0, 0.0, 1.0, 1.0),
        ];
        let (_, next) = place(&Room::rect("a", 2.0, 1.0), &free).unwrap();
        assert!(next.contains(&FreeRect::new(3.0, 0.0, 1.0, 1.0)));
        assert!(next.contains(&FreeRect::new(0.0, 1.0, 2.0, 1.0)));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn overlapping_free_rects_are_all_split() {
        // two maximal rects sharing the corner region
        let free = vec![
            FreeRect::new(0.0, 0.0, 4.0, 2.0),
            FreeRect::new(0.0, 0.0, 2.0, 4.0),
        ];
        let (_, next) = place(&Room::rect("a", 1.0, 1.0), &free).unwrap();
        for r in &next {
            let disjoint = r.x >= 1.0 - 1e-9 || r.y >= 1.0 - 1e-9;
            assert!(disjoint, "{r:?} still covers the placed room");
        }
    }

    #[test]
    fn contained_free_rects_are_kept_in_order() {
        let inner = FreeRect::new(0.0, 2.0, 1.0, 1.0);
        let free = vec![FreeRect::new(0.0, 0.0, 3.0, 3.0), inner];
        let (_, next) = place(&Room::rect("a", 1.0, 1.0), &free).unwrap();
        assert_eq!(
            next,
            vec![
                FreeRect::new(1.0, 0.0, 2.0, 3.0),
                FreeRect::new(0.0, 1.0, 3.0, 2.0),
                inner,
            ]
        );
    }

    #[test]
    fn unplaceable_room_is_skipped() {
        let mut packer = FreeSpacePacker::new(Footprint::new(2.0, 2.0));
        assert!(packer.insert(&Room::rect("a", 2.0, 1.5)));
        assert!(!packer.insert(&Room::rect("b", 1.0, 1.0)));
        assert_eq!(packer.skipped(), ["b".to_string()]);
        assert_eq!(packer.rooms().len(), 1);
    }

    #[test]
    fn exact_tiling_consumes_all_free_space() {
        let rooms = [
            Room::rect("a", 2.0, 1.0),
            Room::rect("b", 1.0, 1.0),
            Room::rect("c", 3.0, 2.0),
        ];
        let refs: Vec<&Room> = rooms.iter().collect();
        let packer = pack(Footprint::new(3.0, 3.0), &refs);
        assert!(packer.skipped().is_empty());
        assert!(packer.free_rects().is_empty());
        let layout = packer.into_layout();
        assert!((layout.covered_area() - 9.0).abs() < 1e-9);
    }
}
