//! modplan headless harness
//!
//! Runs the layout engine for every preset and validates the output.
//! Entirely in-process: no UI, no spreadsheet, no plotting.
//!
//! Usage:
//!   cargo run -p modplan-simtest
//!   cargo run -p modplan-simtest -- --verbose --preset v1

mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use cli::Cli;
use modplan_logic::adjacency::{adjacency_pairs, satisfies_constraints};
use modplan_logic::config::{validate_config, SearchConfig};
use modplan_logic::dedup::normalize;
use modplan_logic::export::{export_layouts, PlanRecord};
use modplan_logic::geometry::{errors_only, validate_layout};
use modplan_logic::layout::Layout;
use modplan_logic::pipeline::generate;
use modplan_logic::presets::{Preset, Strategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use tracing::info;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn load_config(cli: &Cli) -> anyhow::Result<SearchConfig> {
    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SearchConfig::from_json(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    let errors = validate_config(&config);
    if !errors.is_empty() {
        bail!("invalid search configuration: {errors:?}");
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);

    println!("=== modplan Layout Harness ===\n");

    let mut results = Vec::new();
    let mut records = Vec::new();
    for preset in cli.presets() {
        results.extend(validate_preset(preset, &config, &cli, &mut rng, &mut records));
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || cli.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if let Some(path) = &cli.export {
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!("exported {} plan records to {}", records.len(), path.display());
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── Per-preset validation ───────────────────────────────────────────────

fn expected_room_count(preset: Preset, config: &SearchConfig) -> usize {
    let catalog = preset.catalog();
    match preset.strategy() {
        Strategy::Shelf => catalog.rooms.len() + 1,
        Strategy::FreeSpace => config.expected_rooms.unwrap_or(catalog.rooms.len()),
    }
}

fn validate_preset(
    preset: Preset,
    config: &SearchConfig,
    cli: &Cli,
    rng: &mut StdRng,
    records: &mut Vec<PlanRecord>,
) -> Vec<TestResult> {
    let fp = preset.footprint();
    println!(
        "--- Preset {} ({:.2} × {:.2}, {:?}) ---",
        preset, fp.width, fp.height, preset.strategy()
    );
    let mut results = Vec::new();

    let generation = match generate(preset, config) {
        Ok(g) => g,
        Err(e) => {
            results.push(TestResult {
                name: format!("{preset}_generate"),
                passed: false,
                detail: e.to_string(),
            });
            return results;
        }
    };
    let layouts = &generation.layouts;
    let rules = preset.rules();

    results.push(TestResult {
        name: format!("{preset}_generate"),
        passed: !layouts.is_empty(),
        detail: format!(
            "{} layouts from {} trials ({} candidates, {} duplicates{})",
            layouts.len(),
            generation.stats.trials,
            generation.candidates,
            generation.duplicates,
            if generation.stats.truncated { ", budget hit" } else { "" }
        ),
    });

    // Geometry: bounds, overlaps, coverage, room count
    let expected = expected_room_count(preset, config);
    let bad_geometry: Vec<usize> = layouts
        .iter()
        .enumerate()
        .filter(|(_, l)| !errors_only(validate_layout(l, Some(expected))).is_empty())
        .map(|(i, _)| i)
        .collect();
    results.push(TestResult {
        name: format!("{preset}_geometry"),
        passed: bad_geometry.is_empty(),
        detail: if bad_geometry.is_empty() {
            format!("all layouts tile the footprint with {expected} rooms")
        } else {
            format!("{} layouts invalid (e.g. #{})", bad_geometry.len(), bad_geometry[0])
        },
    });

    // Adjacency rules
    let unmet = layouts
        .iter()
        .filter(|l| !satisfies_constraints(l, &rules))
        .count();
    results.push(TestResult {
        name: format!("{preset}_constraints"),
        passed: unmet == 0,
        detail: format!("{} constraints, {} layouts violate them", rules.constraints.len(), unmet),
    });

    // Distinct geometry
    let keys: HashSet<_> = layouts.iter().map(normalize).collect();
    results.push(TestResult {
        name: format!("{preset}_unique"),
        passed: !config.dedupe || keys.len() == layouts.len(),
        detail: format!("{} distinct of {}", keys.len(), layouts.len()),
    });

    // Mirror round trip for presets drawn reflected
    if let Some(axis) = preset.mirror_axis() {
        let stable = layouts
            .iter()
            .all(|l| normalize(&l.reflect(axis).reflect(axis)) == normalize(l));
        results.push(TestResult {
            name: format!("{preset}_mirror_roundtrip"),
            passed: stable,
            detail: format!("reflect about x={axis:.2} twice restores geometry"),
        });
    }

    // Export round trip
    match export_layouts(preset, layouts) {
        Ok(exported) => {
            let decoded_ok = exported.iter().zip(layouts.iter()).all(|(record, layout)| {
                record
                    .rooms()
                    .map(|rooms| rooms.len() == layout.room_count())
                    .unwrap_or(false)
            });
            results.push(TestResult {
                name: format!("{preset}_export_roundtrip"),
                passed: decoded_ok,
                detail: format!("{} records decode with all rooms", exported.len()),
            });
            records.extend(exported);
        }
        Err(e) => results.push(TestResult {
            name: format!("{preset}_export_roundtrip"),
            passed: false,
            detail: e.to_string(),
        }),
    }

    if let Some(n) = cli.sample {
        let picked: Vec<&Layout> = layouts.choose_multiple(rng, n).collect();
        println!("  {} sampled layouts:", picked.len());
        for layout in picked {
            print_layout(layout, preset, cli.verbose);
        }
    } else if cli.verbose {
        for layout in layouts {
            print_layout(layout, preset, true);
        }
    }

    results
}

fn print_layout(layout: &Layout, preset: Preset, detailed: bool) {
    let rules = preset.rules();
    let labels = layout.labels(&rules);
    let rooms: Vec<String> = layout
        .rooms
        .iter()
        .zip(&labels)
        .map(|(r, label)| format!("{} [{}]", r.name(), label))
        .collect();
    println!("    {}", rooms.join(", "));
    if detailed {
        for (room, (cx, cy)) in layout.rooms.iter().zip(layout.centroids()) {
            let b = room.bounds();
            println!(
                "      {:10} ({:.3},{:.3})→({:.3},{:.3}) label@({:.2},{:.2})",
                room.name(),
                b.min_x,
                b.min_y,
                b.max_x,
                b.max_y,
                cx,
                cy
            );
        }
        let walls: Vec<String> = adjacency_pairs(layout)
            .into_iter()
            .map(|(i, j)| format!("{}|{}", layout.rooms[i].name(), layout.rooms[j].name()))
            .collect();
        println!("      walls: {}", walls.join(" "));
    }
}
