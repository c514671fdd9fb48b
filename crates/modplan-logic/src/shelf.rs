//! Row-filling (shelf) packer.
//!
//! Rooms go left to right along the current row; a room that would cross
//! the right edge wraps to a new row on top of the tallest room so far.
//! Every insertion is validated before any state changes, so a rejected
//! room leaves the packer exactly as it was.

use crate::constants::{approx_eq, exceeds, EPSILON};
use crate::error::PackError;
use crate::layout::{Footprint, Layout};
use crate::room::Room;

/// Mutable packing cursor over one footprint.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    footprint: Footprint,
    cursor_x: f64,
    cursor_y: f64,
    row_height: f64,
    used_area: f64,
    rooms: Vec<Room>,
}

/// Where the next room lands and the cursor afterwards.
struct Placement {
    x: f64,
    y: f64,
    next_cursor_x: f64,
    next_row_height: f64,
}

impl ShelfPacker {
    pub fn new(footprint: Footprint) -> Self {
        Self {
            footprint,
            cursor_x: 0.0,
            cursor_y: 0.0,
            row_height: 0.0,
            used_area: 0.0,
            rooms: Vec::new(),
        }
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn cursor(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn used_area(&self) -> f64 {
        self.used_area
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Place `room` on the current row, wrapping when it does not fit the
    /// remaining width.
    pub fn add_room(&mut self, room: &Room) -> Result<(), PackError> {
        let width = room.width();
        let height = room.height();
        self.check_area(room)?;
        self.check_width(room)?;

        let (x, y, row_height) = if exceeds(self.cursor_x + width, self.footprint.width) {
            (0.0, self.cursor_y + self.row_height, 0.0)
        } else {
            (self.cursor_x, self.cursor_y, self.row_height)
        };
        let placement = Placement {
            x,
            y,
            next_cursor_x: x + width,
            next_row_height: row_height.max(height),
        };
        self.commit(room, placement)
    }

    /// Place `room` as a forced new row starting at `x = 0`, whatever the
    /// state of the current row. Used for the always-last final room.
    pub fn add_room_bottom(&mut self, room: &Room) -> Result<(), PackError> {
        self.check_area(room)?;
        self.check_width(room)?;
        let placement = Placement {
            x: 0.0,
            y: self.cursor_y + self.row_height,
            next_cursor_x: room.width(),
            next_row_height: room.height(),
        };
        self.commit(room, placement)
    }

    fn check_area(&self, room: &Room) -> Result<(), PackError> {
        let available = self.footprint.total_area() - self.used_area;
        let needed = room.area();
        if exceeds(needed, available) {
            return Err(PackError::AreaExceeded {
                room: room.name().to_string(),
                needed,
                available,
            });
        }
        Ok(())
    }

    fn check_width(&self, room: &Room) -> Result<(), PackError> {
        if exceeds(room.width(), self.footprint.width) {
            return Err(PackError::WidthExceeded {
                room: room.name().to_string(),
                width: room.width(),
                limit: self.footprint.width,
            });
        }
        Ok(())
    }

    fn commit(&mut self, room: &Room, p: Placement) -> Result<(), PackError> {
        let top = p.y + p.next_row_height;
        if exceeds(top, self.footprint.height) {
            return Err(PackError::HeightExceeded {
                room: room.name().to_string(),
                top,
                limit: self.footprint.height,
            });
        }
        self.rooms.push(room.translated(p.x, p.y));
        self.used_area += room.area();
        self.cursor_x = p.next_cursor_x;
        self.cursor_y = p.y;
        self.row_height = p.next_row_height;
        Ok(())
    }

    /// Used area within the footprint and the cursor inside its bounds.
    pub fn is_valid(&self) -> bool {
        self.used_area <= self.footprint.total_area() + EPSILON
            && !exceeds(self.cursor_y + self.row_height, self.footprint.height)
    }

    /// Cursor sits on the far corner: the last row ends at the right edge
    /// and its top meets the footprint top.
    pub fn is_exact_fit(&self) -> bool {
        approx_eq(self.cursor_x, self.footprint.width)
            && approx_eq(self.cursor_y + self.row_height, self.footprint.height)
    }

    pub fn into_layout(self) -> Layout {
        Layout::new(self.footprint, self.rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v1() -> Footprint {
        Footprint::new(4.88, 7.32)
    }

    #[test]
    fn fills_row_then_wraps() {
        let mut packer = ShelfPacker::new(v1());
        packer.add_room(&Room::rect("P1", 3.529, 2.983)).unwrap();
        packer.add_room(&Room::rect("P2", 1.351, 2.983)).unwrap();
        packer.add_room(&Room::rect("P3", 2.585, 2.856)).unwrap();

        let placed = packer.rooms();
        assert_eq!(placed[1].bounds().min_x, 3.529);
        assert_eq!(placed[1].bounds().min_y, 0.0);
        assert_eq!(placed[2].bounds().min_x, 0.0);
        assert_eq!(placed[2].bounds().min_y, 2.983);
        assert_eq!(packer.row_height(), 2.856);
    }

    #[test]
    fn rejected_insert_leaves_state_untouched() {
        let mut packer = ShelfPacker::new(v1());
        packer.add_room(&Room::rect("P1", 3.529, 2.983)).unwrap();
        packer.add_room(&Room::rect("P3", 2.585, 2.856)).unwrap();
        packer.add_room(&Room::rect("P2", 1.351, 2.983)).unwrap();
        let before = (packer.cursor(), packer.row_height(), packer.used_area());

        let err = packer.add_room(&Room::rect("P4", 2.295, 2.856)).unwrap_err();
        assert!(matches!(err, PackError::HeightExceeded { .. }));
        assert_eq!(packer.rooms().len(), 3);
        assert_eq!((packer.cursor(), packer.row_height(), packer.used_area()), before);
    }

    #[test]
    fn area_budget_rejects() {
        let mut packer = ShelfPacker::new(Footprint::new(2.0, 2.0));
        packer.add_room(&Room::rect("a", 2.0, 1.5)).unwrap();
        let err = packer.add_room(&Room::rect("b", 2.0, 1.0)).unwrap_err();
        assert!(matches!(err, PackError::AreaExceeded { .. }));
    }

    #[test]
    fn too_wide_room_rejects() {
        let mut packer = ShelfPacker::new(Footprint::new(2.0, 5.0));
        let err = packer.add_room(&Room::rect("wide", 3.0, 1.0)).unwrap_err();
        assert!(matches!(err, PackError::WidthExceeded { .. }));
        assert!(packer.rooms().is_empty());
    }

    #[test]
    fn bottom_row_completes_exact_fit() {
        let mut packer = ShelfPacker::new(v1());
        for room in [
            Room::rect("P1", 3.529, 2.983),
            Room::rect("P2", 1.351, 2.983),
            Room::rect("P3", 2.585, 2.856),
            Room::rect("P4", 2.295, 2.856),
        ] {
            packer.add_room(&room).unwrap();
        }
        assert!(packer.is_valid());
        assert!(!packer.is_exact_fit());

        packer.add_room_bottom(&Room::rect("P5", 4.88, 1.481)).unwrap();
        assert!(packer.is_exact_fit());
        let last = packer.rooms().last().unwrap().bounds();
        assert_eq!(last.min_x, 0.0);
        assert!((last.min_y - 5.839).abs() < 1e-9);
    }

    #[test]
    fn bottom_row_forces_new_row_on_partial_row() {
        let mut packer = ShelfPacker::new(Footprint::new(4.0, 4.0));
        packer.add_room(&Room::rect("a", 1.0, 2.0)).unwrap();
        packer.add_room_bottom(&Room::rect("b", 1.0, 1.0)).unwrap();
        let b = packer.rooms()[1].bounds();
        assert_eq!((b.min_x, b.min_y), (0.0, 2.0));
        assert_eq!(packer.cursor(), (1.0, 2.0));
    }

    #[test]
    fn used_area_sums_placed_rooms() {
        let mut packer = ShelfPacker::new(v1());
        let rooms = [Room::rect("P1", 3.529, 2.983), Room::rect("P2", 1.351, 2.983)];
        for r in &rooms {
            packer.add_room(r).unwrap();
        }
        let expected: f64 = rooms.iter().map(Room::area).sum();
        assert!((packer.used_area() - expected).abs() < 1e-9);
        assert!(packer.used_area() <= v1().total_area());
    }
}
