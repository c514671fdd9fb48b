//! The five house presets: footprint, room catalog, rule set and packing
//! strategy per version.
//!
//! | Preset | Footprint (largo × ancho) | Strategy | Rooms |
//! |--------|---------------------------|----------|-------|
//! | `v1` | 2 × 3 modules (4.88 × 7.32) | shelf + final row | 4 + 3 finals |
//! | `v2` | 2 × 4 modules (4.88 × 9.76) | shelf + final row | 4 + 2 finals |
//! | `v3` | 2 × 6 modules (4.88 × 14.64) | free-space splitter | 7 |
//! | `v4` | 3 × 6 modules (7.32 × 14.64) | free-space splitter | 9 |
//! | `v5` | 4 × 6 modules (9.76 × 14.64) | free-space splitter | 9 |

use crate::adjacency::AdjacencyConstraint;
use crate::classify::{CategoryRule, RuleSet};
use crate::constants::categories::*;
use crate::constants::MODULE;
use crate::error::LayoutError;
use crate::layout::Footprint;
use crate::room::Room;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Footprint preset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    V1,
    V2,
    V3,
    V4,
    V5,
}

/// How a preset's catalog is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Row filling over permutations, final room forced as the last row.
    Shelf,
    /// First-fit free-rectangle splitting over permutations.
    FreeSpace,
}

/// Room templates of a preset. `finals` is empty for splitter presets.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub rooms: Vec<Room>,
    pub finals: Vec<Room>,
}

impl Catalog {
    pub fn all_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().chain(&self.finals)
    }
}

impl Preset {
    pub const ALL: [Preset; 5] = [Preset::V1, Preset::V2, Preset::V3, Preset::V4, Preset::V5];

    /// Identifier used in exported records (`"v1"`..`"v5"`).
    pub fn id(self) -> &'static str {
        match self {
            Preset::V1 => "v1",
            Preset::V2 => "v2",
            Preset::V3 => "v3",
            Preset::V4 => "v4",
            Preset::V5 => "v5",
        }
    }

    /// Modules along x (largo) and y (ancho).
    pub fn modules(self) -> (u32, u32) {
        match self {
            Preset::V1 => (2, 3),
            Preset::V2 => (2, 4),
            Preset::V3 => (2, 6),
            Preset::V4 => (3, 6),
            Preset::V5 => (4, 6),
        }
    }

    pub fn footprint(self) -> Footprint {
        let (nx, ny) = self.modules();
        Footprint::new(MODULE * nx as f64, MODULE * ny as f64)
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Preset::V1 | Preset::V2 => Strategy::Shelf,
            Preset::V3 | Preset::V4 | Preset::V5 => Strategy::FreeSpace,
        }
    }

    /// Vertical axis the viewer mirrors wide layouts about, if any.
    pub fn mirror_axis(self) -> Option<f64> {
        match self {
            Preset::V4 => Some(MODULE),
            Preset::V5 => Some(2.0 * MODULE),
            _ => None,
        }
    }

    pub fn catalog(self) -> Catalog {
        match self {
            Preset::V1 => Catalog {
                rooms: vec![
                    Room::rect("P1", 3.529, 2.983),
                    Room::rect("P2", 1.351, 2.983),
                    Room::rect("P3", 2.585, 2.856),
                    Room::rect("P4", 2.295, 2.856),
                ],
                finals: vec![
                    Room::rect("P5", 4.88, 1.481),
                    Room::rect("P8", 4.88, 1.481),
                    Room::rect("P11", 2.44, 1.481),
                ],
            },
            Preset::V2 => Catalog {
                rooms: vec![
                    Room::rect("Q1", 2.9, 3.0),
                    Room::rect("Q2", 1.98, 3.0),
                    Room::rect("Q3", 3.2, 3.2),
                    Room::rect("Q4", 1.68, 3.2),
                ],
                finals: vec![Room::rect("Q5", 4.88, 3.56), Room::rect("Q6", 3.5, 3.56)],
            },
            Preset::V3 => Catalog {
                rooms: vec![
                    Room::rect("Estar", 4.88, 3.66),
                    Room::rect("Cocina", 2.94, 3.0),
                    Room::rect("Baño", 1.94, 3.0),
                    Room::rect("Dor 1", 2.44, 3.5),
                    Room::rect("Dor 2", 2.44, 3.5),
                    Room::rect("Dor 3", 4.88, 2.98),
                    Room::rect("Recibidor", 4.88, 1.5),
                ],
                finals: vec![],
            },
            Preset::V4 => Catalog {
                rooms: vec![
                    Room::rect("Estar", 4.32, 3.66),
                    Room::rect("Cocina", 3.0, 3.66),
                    Room::rect("Dor 1", 4.0, 3.2),
                    Room::rect("Dor 2", 3.32, 3.2),
                    Room::rect("Recibidor", 4.82, 2.0),
                    Room::rect("Baño", 2.5, 2.0),
                    Room::rect("Dor 3", 3.72, 3.0),
                    Room::rect("Dor 4", 3.6, 3.0),
                    Room::rect("Comedor", 7.32, 2.78),
                ],
                finals: vec![],
            },
            Preset::V5 => Catalog {
                rooms: vec![
                    Room::rect("Estar", 5.5, 3.66),
                    Room::rect("Cocina", 4.26, 3.66),
                    Room::rect("Dor 1", 5.0, 3.2),
                    Room::rect("Dor 2", 4.76, 3.2),
                    Room::rect("Recibidor", 6.26, 2.2),
                    Room::rect("Baño", 3.5, 2.2),
                    Room::rect("Dor 3", 5.76, 3.0),
                    Room::rect("Dor 4", 4.0, 3.0),
                    Room::rect("Terraza", 9.76, 2.58),
                ],
                finals: vec![],
            },
        }
    }

    /// Classification table and adjacency requirements of this preset.
    pub fn rules(self) -> RuleSet {
        match self {
            Preset::V1 => RuleSet::new(
                vec![
                    CategoryRule::new(BANO, (0.7, 1.6), (0.7, 3.0)),
                    CategoryRule::new(COCINA_COMEDOR, (2.5, 2.7), (2.5, 3.0)),
                    CategoryRule::new(ESTAR, (3.0, 3.6), (2.5, 3.1)),
                    CategoryRule::new(RECIBIDOR, (4.0, 5.0), (1.0, 1.6)),
                ],
                vec![
                    AdjacencyConstraint::new(COCINA_COMEDOR, ESTAR),
                    AdjacencyConstraint::new(ESTAR, RECIBIDOR),
                    AdjacencyConstraint::new(BANO, DOR),
                ],
            ),
            Preset::V2 => RuleSet::new(
                vec![
                    CategoryRule::new(BANO, (0.7, 2.0), (0.7, 3.1)),
                    CategoryRule::new(COCINA_COMEDOR, (2.8, 3.0), (2.8, 3.1)),
                    CategoryRule::new(ESTAR, (4.5, 5.0), (3.0, 4.0)),
                    CategoryRule::new(RECIBIDOR, (1.5, 1.8), (3.1, 3.3)),
                ],
                vec![
                    AdjacencyConstraint::new(COCINA_COMEDOR, ESTAR),
                    AdjacencyConstraint::new(RECIBIDOR, DOR),
                    AdjacencyConstraint::new(BANO, DOR),
                ],
            ),
            Preset::V3 => RuleSet::new(
                vec![
                    CategoryRule::new(ESTAR, (4.5, 5.0), (3.5, 3.8)),
                    CategoryRule::new(COCINA_COMEDOR, (2.8, 3.0), (2.9, 3.1)),
                    CategoryRule::new(BANO, (0.7, 2.0), (0.7, 3.1)),
                    CategoryRule::new(RECIBIDOR, (4.5, 5.0), (1.0, 1.6)),
                ],
                vec![
                    AdjacencyConstraint::new(COCINA_COMEDOR, ESTAR),
                    AdjacencyConstraint::new(BANO, DOR),
                    AdjacencyConstraint::new(DOR, RECIBIDOR),
                ],
            ),
            Preset::V4 => RuleSet::new(
                vec![
                    CategoryRule::new(ESTAR, (4.0, 4.5), (3.5, 3.8)),
                    CategoryRule::new(COCINA_COMEDOR, (2.9, 3.1), (3.5, 3.8)),
                    CategoryRule::new(COCINA_COMEDOR, (7.0, 7.5), (2.5, 3.0)),
                    CategoryRule::new(BANO, (2.0, 2.6), (1.5, 2.2)),
                    CategoryRule::new(RECIBIDOR, (4.5, 5.0), (1.5, 2.2)),
                ],
                vec![
                    AdjacencyConstraint::new(COCINA_COMEDOR, ESTAR),
                    AdjacencyConstraint::new(BANO, DOR),
                    AdjacencyConstraint::new(RECIBIDOR, DOR),
                ],
            ),
            Preset::V5 => RuleSet::new(
                vec![
                    CategoryRule::new(ESTAR, (5.0, 6.0), (3.5, 3.8)),
                    CategoryRule::new(ESTAR, (9.0, 10.0), (2.0, 3.0)),
                    CategoryRule::new(COCINA_COMEDOR, (4.0, 4.5), (3.5, 3.8)),
                    CategoryRule::new(BANO, (3.0, 3.6), (2.0, 2.4)),
                    CategoryRule::new(RECIBIDOR, (6.0, 6.5), (2.0, 2.4)),
                ],
                vec![
                    AdjacencyConstraint::new(COCINA_COMEDOR, ESTAR),
                    AdjacencyConstraint::new(BANO, DOR),
                    AdjacencyConstraint::new(RECIBIDOR, DOR),
                ],
            ),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LayoutError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprints_are_module_multiples() {
        let fp = Preset::V1.footprint();
        assert!((fp.width - 4.88).abs() < 1e-9);
        assert!((fp.height - 7.32).abs() < 1e-9);
        let fp = Preset::V5.footprint();
        assert!((fp.width - 9.76).abs() < 1e-9);
        assert!((fp.height - 14.64).abs() < 1e-9);
    }

    #[test]
    fn v1_classification() {
        let rules = Preset::V1.rules();
        assert_eq!(rules.classify(3.55, 3.95), DOR);
        assert_eq!(rules.classify(0.8, 1.2), BANO);
        assert_eq!(rules.classify(3.529, 2.983), ESTAR);
        assert_eq!(rules.classify(2.585, 2.856), COCINA_COMEDOR);
        assert_eq!(rules.classify(4.88, 1.481), RECIBIDOR);
    }

    #[test]
    fn catalogs_add_up_to_footprint() {
        for preset in Preset::ALL {
            let catalog = preset.catalog();
            let area: f64 = catalog.rooms.iter().map(Room::area).sum();
            let fp = preset.footprint().total_area();
            match preset.strategy() {
                Strategy::FreeSpace => assert!((area - fp).abs() < 1e-3, "{preset}"),
                Strategy::Shelf => {
                    let best = catalog.finals.iter().any(|f| (area + f.area() - fp).abs() < 1e-3);
                    assert!(best, "{preset}: no final completes the footprint area");
                }
            }
        }
    }

    #[test]
    fn every_room_fits_the_footprint() {
        for preset in Preset::ALL {
            let fp = preset.footprint();
            for room in preset.catalog().all_rooms() {
                assert!(room.width() <= fp.width + 1e-3, "{preset} {}", room.name());
                assert!(room.height() <= fp.height + 1e-3, "{preset} {}", room.name());
            }
        }
    }

    #[test]
    fn rule_tables_only_name_known_categories() {
        for preset in Preset::ALL {
            let rules = preset.rules();
            for rule in &rules.categories {
                assert!(is_known(&rule.name), "{preset}: {}", rule.name);
            }
            for c in &rules.constraints {
                assert!(is_known(&c.a) && is_known(&c.b));
            }
        }
    }

    #[test]
    fn parse_ids() {
        assert_eq!("v3".parse::<Preset>().unwrap(), Preset::V3);
        assert_eq!(" V4 ".parse::<Preset>().unwrap(), Preset::V4);
        assert!(matches!(
            "v9".parse::<Preset>(),
            Err(LayoutError::UnknownPreset(_))
        ));
    }

    #[test]
    fn only_large_presets_use_the_splitter() {
        assert_eq!(Preset::V1.strategy(), Strategy::Shelf);
        assert_eq!(Preset::V2.strategy(), Strategy::Shelf);
        assert!(Preset::V3.catalog().finals.is_empty());
        assert_eq!(Preset::V5.strategy(), Strategy::FreeSpace);
    }
}
