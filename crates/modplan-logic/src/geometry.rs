//! Geometry validation for generated layouts.
//!
//! Pure functions that take rooms/layouts and return validation errors.
//! Used by the harness and tests as an independent check on the packers.

use crate::constants::{approx_eq, EPSILON};
use crate::layout::{Footprint, Layout};
use crate::room::Room;

/// A geometry validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

// ── A. Per-room ─────────────────────────────────────────────────────────

/// Check that no room has zero or negative dimensions.
pub fn check_room_dimensions(rooms: &[Room]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for r in rooms {
        if r.width() <= 0.0 || r.height() <= 0.0 || r.area() <= 0.0 {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "Room {} has non-positive dimensions: {}×{}",
                    r.name(),
                    r.width(),
                    r.height()
                ),
            });
        }
    }
    errors
}

/// Check that room aspect ratios are livable (< 6:1).
pub fn check_room_aspect_ratios(rooms: &[Room]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for r in rooms {
        let (w, h) = (r.width(), r.height());
        if w <= 0.0 || h <= 0.0 {
            continue; // caught by dimension check
        }
        let ratio = w.max(h) / w.min(h);
        if ratio > 6.0 {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Warning,
                message: format!(
                    "Room {} has extreme aspect ratio {:.1}:1 ({}×{})",
                    r.name(),
                    ratio,
                    w,
                    h
                ),
            });
        }
    }
    errors
}

/// Check rooms stay inside the footprint.
pub fn check_rooms_within_footprint(rooms: &[Room], footprint: Footprint) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for r in rooms {
        let b = r.bounds();
        if b.min_x < -EPSILON
            || b.min_y < -EPSILON
            || b.max_x > footprint.width + EPSILON
            || b.max_y > footprint.height + EPSILON
        {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "Room {} extends outside footprint: ({:.3},{:.3})→({:.3},{:.3}) vs {:.2}×{:.2}",
                    r.name(),
                    b.min_x,
                    b.min_y,
                    b.max_x,
                    b.max_y,
                    footprint.width,
                    footprint.height
                ),
            });
        }
    }
    errors
}

// ── B. Pairwise ─────────────────────────────────────────────────────────

/// AABB overlap test; rooms sharing a wall do not count.
pub fn check_room_overlaps(rooms: &[Room]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            let (a, b) = (&rooms[i], &rooms[j]);
            if a.bounds().overlaps(&b.bounds(), EPSILON) {
                errors.push(ValidationError {
                    category: "room_overlap",
                    severity: Severity::Error,
                    message: format!("Rooms {} and {} overlap", a.name(), b.name()),
                });
            }
        }
    }
    errors
}

// ── C. Whole layout ─────────────────────────────────────────────────────

/// Check the rooms cover exactly the footprint area.
pub fn check_coverage(layout: &Layout) -> Vec<ValidationError> {
    let covered = layout.covered_area();
    let total = layout.footprint.total_area();
    if approx_eq(covered, total) {
        return Vec::new();
    }
    vec![ValidationError {
        category: "coverage",
        severity: Severity::Error,
        message: format!("Rooms cover {covered:.4} m² of {total:.4} m²"),
    }]
}

/// Check the layout holds exactly `expected` rooms.
pub fn check_room_count(layout: &Layout, expected: usize) -> Vec<ValidationError> {
    if layout.room_count() == expected {
        return Vec::new();
    }
    vec![ValidationError {
        category: "room_count",
        severity: Severity::Error,
        message: format!("Layout has {} rooms, expected {}", layout.room_count(), expected),
    }]
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all geometry validations and return combined results.
pub fn validate_layout(layout: &Layout, expected_rooms: Option<usize>) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_room_dimensions(&layout.rooms));
    all.extend(check_room_aspect_ratios(&layout.rooms));
    all.extend(check_rooms_within_footprint(&layout.rooms, layout.footprint));
    all.extend(check_room_overlaps(&layout.rooms));
    all.extend(check_coverage(layout));
    if let Some(expected) = expected_rooms {
        all.extend(check_room_count(layout, expected));
    }
    all
}

/// Only the `Severity::Error` entries.
pub fn errors_only(all: Vec<ValidationError>) -> Vec<ValidationError> {
    all.into_iter()
        .filter(|e| e.severity == Severity::Error)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_room(name: &str, x: f64, y: f64, w: f64, h: f64) -> Room {
        Room::rect(name, w, h).translated(x, y)
    }

    #[test]
    fn test_valid_rooms_no_errors() {
        let rooms = vec![
            make_room("a", 0.0, 0.0, 2.0, 2.0),
            make_room("b", 2.0, 0.0, 2.0, 2.0),
        ];
        assert!(check_room_dimensions(&rooms).is_empty());
        assert!(check_room_aspect_ratios(&rooms).is_empty());
    }

    #[test]
    fn test_degenerate_room() {
        let flat = Room::new("flat", vec![(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]).unwrap();
        let errs = check_room_dimensions(&[flat]);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("non-positive"));
    }

    #[test]
    fn test_extreme_aspect_ratio() {
        let rooms = vec![make_room("hall", 0.0, 0.0, 7.0, 1.0)];
        let errs = check_room_aspect_ratios(&rooms);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].severity, Severity::Warning);
    }

    #[test]
    fn test_room_outside_footprint() {
        let rooms = vec![make_room("a", 4.0, 0.0, 2.0, 1.0)];
        let errs = check_rooms_within_footprint(&rooms, Footprint::new(4.88, 7.32));
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn test_overlapping_rooms() {
        let rooms = vec![
            make_room("a", 0.0, 0.0, 2.0, 2.0),
            make_room("b", 1.0, 1.0, 2.0, 2.0),
        ];
        assert_eq!(check_room_overlaps(&rooms).len(), 1);
    }

    #[test]
    fn test_no_overlap_adjacent() {
        let rooms = vec![
            make_room("a", 0.0, 0.0, 3.529, 2.983),
            make_room("b", 3.529, 0.0, 1.351, 2.983),
        ];
        assert!(check_room_overlaps(&rooms).is_empty());
    }

    #[test]
    fn test_partial_coverage() {
        let layout = Layout::new(
            Footprint::new(2.0, 2.0),
            vec![make_room("a", 0.0, 0.0, 2.0, 1.0)],
        );
        let errs = check_coverage(&layout);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].category, "coverage");
    }

    #[test]
    fn test_room_count() {
        let layout = Layout::new(
            Footprint::new(2.0, 2.0),
            vec![make_room("a", 0.0, 0.0, 2.0, 2.0)],
        );
        assert!(check_room_count(&layout, 1).is_empty());
        assert_eq!(check_room_count(&layout, 9).len(), 1);
    }

    #[test]
    fn test_validate_layout_clean() {
        let layout = Layout::new(
            Footprint::new(4.0, 2.0),
            vec![
                make_room("a", 0.0, 0.0, 2.0, 2.0),
                make_room("b", 2.0, 0.0, 2.0, 2.0),
            ],
        );
        let errs = validate_layout(&layout, Some(2));
        assert!(errs.is_empty(), "Expected no errors, got: {:?}", errs);
    }

    #[test]
    fn test_errors_only_drops_warnings() {
        let layout = Layout::new(
            Footprint::new(7.0, 1.0),
            vec![make_room("hall", 0.0, 0.0, 7.0, 1.0)],
        );
        let all = validate_layout(&layout, None);
        assert_eq!(all.len(), 1);
        assert!(errors_only(all).is_empty());
    }
}
