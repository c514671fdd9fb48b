//! Room polygons.
//!
//! A [`Room`] is an immutable named polygon. Catalog rooms are templates
//! anchored at the origin; placing one produces a new translated `Room`,
//! the template itself is never touched.

use crate::constants::round3;
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// A 2D point `(x, y)` in meters.
pub type Point = (f64, f64);

/// Named polygon with derived bounding-box dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomData")]
pub struct Room {
    name: String,
    vertices: Vec<Point>,
}

/// Wire form of a [`Room`]; decoding goes through [`Room::new`].
#[derive(Deserialize)]
struct RoomData {
    name: String,
    vertices: Vec<Point>,
}

impl TryFrom<RoomData> for Room {
    type Error = LayoutError;

    fn try_from(data: RoomData) -> Result<Self, Self::Error> {
        Room::new(data.name, data.vertices)
    }
}

/// Axis-aligned bounding box `(min_x, min_y, max_x, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Positive-area intersection (touching edges do not count).
    pub fn overlaps(&self, other: &Bounds, tolerance: f64) -> bool {
        self.max_x - tolerance > other.min_x
            && other.max_x - tolerance > self.min_x
            && self.max_y - tolerance > other.min_y
            && other.max_y - tolerance > self.min_y
    }
}

impl Room {
    /// Build a room from an explicit vertex cycle.
    ///
    /// Fails fast when fewer than 3 vertices are given.
    pub fn new(name: impl Into<String>, vertices: Vec<Point>) -> Result<Self, LayoutError> {
        let name = name.into();
        if vertices.len() < 3 {
            return Err(LayoutError::MalformedRoom {
                name,
                vertices: vertices.len(),
            });
        }
        Ok(Self { name, vertices })
    }

    /// Axis-aligned `width × height` rectangle anchored at the origin,
    /// counter-clockwise from `(0, 0)`.
    pub fn rect(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            vertices: vec![(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn bounds(&self) -> Bounds {
        let mut b = Bounds {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for &(x, y) in &self.vertices {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        b
    }

    /// Bounding-box width, rounded to 3 decimals. Always derived from the
    /// current vertices.
    pub fn width(&self) -> f64 {
        round3(self.bounds().width())
    }

    /// Bounding-box height, rounded to 3 decimals.
    pub fn height(&self) -> f64 {
        round3(self.bounds().height())
    }

    /// Shoelace area: `0.5 * |Σ (x_i·y_{i+1} − x_{i+1}·y_i)|`.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let (x0, y0) = self.vertices[i];
                let (x1, y1) = self.vertices[(i + 1) % n];
                x0 * y1 - x1 * y0
            })
            .sum();
        0.5 * twice.abs()
    }

    /// Vertex mean; the label anchor used when rendering.
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
        (sx / n, sy / n)
    }

    /// A copy moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Room {
        Room {
            name: self.name.clone(),
            vertices: self.vertices.iter().map(|&(x, y)| (x + dx, y + dy)).collect(),
        }
    }

    /// A copy mirrored about the vertical line `x = axis_x`.
    ///
    /// Vertex order is reversed so the winding direction is preserved;
    /// reflecting twice gives back the original vertex list.
    pub fn reflected(&self, axis_x: f64) -> Room {
        Room {
            name: self.name.clone(),
            vertices: self
                .vertices
                .iter()
                .rev()
                .map(|&(x, y)| (2.0 * axis_x - x, y))
                .collect(),
        }
    }

    /// Edges of the closed vertex cycle as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
