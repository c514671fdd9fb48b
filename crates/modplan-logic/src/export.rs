//! Plan records for the external viewer.
//!
//! One [`PlanRecord`] per layout with columns `Version`, `Plano_ID` and
//! `Datos_Habitaciones`; the last one is a JSON-encoded array of
//! `{Nombre, Tipo_Funcional, Vertices}` objects.

use crate::classify::RuleSet;
use crate::constants::round3;
use crate::error::LayoutError;
use crate::layout::Layout;
use crate::presets::Preset;
use crate::room::Room;
use serde::{Deserialize, Serialize};

fn unnamed() -> String {
    "Sin nombre".to_string()
}

fn unknown_type() -> String {
    "Desconocido".to_string()
}

/// One room inside `Datos_Habitaciones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(rename = "Nombre", default = "unnamed")]
    pub nombre: String,
    #[serde(rename = "Tipo_Funcional", default = "unknown_type")]
    pub tipo_funcional: String,
    #[serde(rename = "Vertices", default)]
    pub vertices: Vec<[f64; 2]>,
}

impl RoomRecord {
    pub fn from_room(room: &Room, category: &str) -> Self {
        Self {
            nombre: room.name().to_string(),
            tipo_funcional: category.to_string(),
            vertices: room
                .vertices()
                .iter()
                .map(|&(x, y)| [round3(x), round3(y)])
                .collect(),
        }
    }

    /// Rebuild the room polygon. Fails for records with fewer than 3
    /// vertices; consumers that only draw can skip those instead.
    pub fn to_room(&self) -> Result<Room, LayoutError> {
        Room::new(
            self.nombre.clone(),
            self.vertices.iter().map(|v| (v[0], v[1])).collect(),
        )
    }

    /// Decode a `Datos_Habitaciones` payload.
    pub fn parse_all(json: &str) -> Result<Vec<RoomRecord>, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One exported layout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Plano_ID")]
    pub plano_id: u32,
    #[serde(rename = "Datos_Habitaciones")]
    pub datos_habitaciones: String,
}

impl PlanRecord {
    pub fn rooms(&self) -> Result<Vec<RoomRecord>, LayoutError> {
        RoomRecord::parse_all(&self.datos_habitaciones)
    }
}

/// Room records of `layout`, labelled with `rules`.
pub fn room_records(layout: &Layout, rules: &RuleSet) -> Vec<RoomRecord> {
    layout
        .rooms
        .iter()
        .zip(layout.labels(rules))
        .map(|(room, label)| RoomRecord::from_room(room, label))
        .collect()
}

/// Encode `layout` as plan `plano_id` of `version`.
pub fn to_record(
    layout: &Layout,
    version: &str,
    plano_id: u32,
    rules: &RuleSet,
) -> Result<PlanRecord, LayoutError> {
    let datos_habitaciones = serde_json::to_string(&room_records(layout, rules))?;
    Ok(PlanRecord {
        version: version.to_string(),
        plano_id,
        datos_habitaciones,
    })
}

/// Records for every layout of a preset, numbered from 1.
pub fn export_layouts(preset: Preset, layouts: &[Layout]) -> Result<Vec<PlanRecord>, LayoutError> {
    let rules = preset.rules();
    layouts
        .iter()
        .zip(1u32..)
        .map(|(layout, id)| to_record(layout, preset.id(), id, &rules))
        .collect()
}
