//! Error types for the layout engine.
//!
//! Packing failures are local and recoverable (the search just drops the
//! trial). Only malformed input and an empty result set surface to callers.

use thiserror::Error;

/// Why a shelf insertion was rejected. The packer is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    #[error("room {room} needs {needed:.3} m² but only {available:.3} m² remain")]
    AreaExceeded {
        room: String,
        needed: f64,
        available: f64,
    },
    #[error("room {room} is {width:.3} m wide, footprint is {limit:.3} m")]
    WidthExceeded { room: String, width: f64, limit: f64 },
    #[error("room {room} would reach y={top:.3}, footprint ends at {limit:.3}")]
    HeightExceeded { room: String, top: f64, limit: f64 },
}

/// Engine-level errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("room {name} has {vertices} vertices, a polygon needs at least 3")]
    MalformedRoom { name: String, vertices: usize },
    #[error("unknown preset {0:?} (expected v1..v5)")]
    UnknownPreset(String),
    #[error("preset {preset}: no layout satisfies the adjacency rules ({candidates} candidates tried)")]
    Infeasible { preset: String, candidates: usize },
    #[error("plan record encoding: {0}")]
    Json(#[from] serde_json::Error),
}
