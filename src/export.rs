// src/export.rs
//! Scene-document export: the assembled world as a single JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::WorldError;
use crate::world::{Container, Environment, Rect, TemplateKind};

/// Serializable mirror of one placed object. The fragment rides along
/// verbatim for the downstream engine; this crate never interprets it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneObject {
    pub template: String,
    pub kind: TemplateKind,
    pub position: (f32, f32),
    pub rotation: f32,
    pub fragment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneArea {
    pub bounds: Rect,
    pub objects: BTreeMap<String, SceneObject>,
}

/// The complete scene description handed to the simulation engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDoc {
    pub name: String,
    pub size: (f32, f32),
    pub areas: BTreeMap<String, SceneArea>,
}

impl SceneDoc {
    /// Snapshot the environment's current aggregate state.
    pub fn from_environment(env: &Environment) -> Self {
        let mut areas = BTreeMap::new();
        for area in env.areas() {
            let objects = area
                .objects()
                .into_iter()
                .map(|(name, obj)| {
                    (
                        name.to_string(),
                        SceneObject {
                            template: obj.template.name.clone(),
                            kind: obj.template.kind,
                            position: (obj.position.x, obj.position.y),
                            rotation: obj.rotation,
                            fragment: obj.template.fragment.0.clone(),
                        },
                    )
                })
                .collect();
            areas.insert(
                area.name().to_string(),
                SceneArea { bounds: area.bounds(), objects },
            );
        }
        let size = env.bounds().size();
        Self { name: env.name().to_string(), size: (size.x, size.y), areas }
    }

    pub fn to_json_string(&self) -> Result<String, WorldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), WorldError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|e| WorldError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        info!("scene written to {}", path.display());
        Ok(())
    }
}
