//! Layout enumeration and validation engine for modular house floor plans.
//!
//! This crate contains all plan-generation logic, independent of any UI,
//! spreadsheet or plotting layer. Functions take plain data and return
//! results, so the same engine backs the headless harness and any
//! presentation front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`adjacency`] | Shared-wall detection and category adjacency rules |
//! | [`classify`] | Range-rule functional classification, per-preset `RuleSet` |
//! | [`config`] | Search configuration and validation |
//! | [`constants`] | Module size, tolerances, category names |
//! | [`dedup`] | Canonical layout keys and duplicate removal |
//! | [`error`] | Packing and engine error types |
//! | [`export`] | Plan records in the viewer's exchange format |
//! | [`free_space`] | First-fit free-rectangle splitter |
//! | [`geometry`] | Layout validation (bounds, overlaps, coverage) |
//! | [`layout`] | Footprints and candidate layouts |
//! | [`permutations`] | Lexicographic permutation enumeration |
//! | [`pipeline`] | Search → dedupe → adjacency filter per preset |
//! | [`presets`] | The five footprint presets, catalogs and rule tables |
//! | [`room`] | Immutable room polygons |
//! | [`search`] | Exact-fit and free-space permutation searches |
//! | [`shelf`] | Row-filling shelf packer |
//!
//! ```
//! use modplan_logic::config::SearchConfig;
//! use modplan_logic::pipeline::generate;
//! use modplan_logic::presets::Preset;
//!
//! let generation = generate(Preset::V1, &SearchConfig::default()).unwrap();
//! assert!(!generation.layouts.is_empty());
//! ```

pub mod adjacency;
pub mod classify;
pub mod config;
pub mod constants;
pub mod dedup;
pub mod error;
pub mod export;
pub mod free_space;
pub mod geometry;
pub mod layout;
pub mod permutations;
pub mod pipeline;
pub mod presets;
pub mod room;
pub mod search;
pub mod shelf;
