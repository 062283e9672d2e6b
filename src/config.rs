// src/config.rs
//! World configuration (data form) + RON loader.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::placement::{PlacementDef, RuleDef};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldConfig {
    pub name: String,
    /// Environment extent (width, height) in world units.
    pub size: (f32, f32),
    /// World seed; identical configs reproduce identical worlds.
    #[serde(default)]
    pub seed: u64,
    pub areas: Vec<AreaConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaConfig {
    pub name: String,
    pub size: (f32, f32),
    #[serde(default)]
    pub has_border: bool,
    #[serde(default)]
    pub border: Option<BorderSpec>,
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleDef>,
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BorderSpec {
    pub template: String,
    /// Total object count along the perimeter.
    pub amount: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub template: String,
    pub count: u32,
    /// When set, the actual count is sampled from `count..=count_max`.
    #[serde(default)]
    pub count_max: Option<u32>,
    pub placement: PlacementDef,
}

fn default_rules() -> Vec<RuleDef> {
    vec![
        RuleDef::MinDistance { dist: 1.0, kinds: None },
        RuleDef::Boundary { margin: 0.0 },
    ]
}

impl WorldConfig {
    /// Load and structurally validate a RON world configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| WorldError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: WorldConfig = ron::de::from_str(&text).map_err(|e| WorldError::Ron {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks that need no template registry.
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.size.0 <= 0.0 || self.size.1 <= 0.0 {
            return Err(WorldError::InvalidConfig(format!(
                "world size must be positive, got {}x{}",
                self.size.0, self.size.1
            )));
        }
        for (i, area) in self.areas.iter().enumerate() {
            if area.size.0 <= 0.0 || area.size.1 <= 0.0 {
                return Err(WorldError::InvalidConfig(format!(
                    "area '{}' size must be positive, got {}x{}",
                    area.name, area.size.0, area.size.1
                )));
            }
            if area.has_border && area.border.is_none() {
                return Err(WorldError::InvalidConfig(format!(
                    "area '{}' sets has_border without a border spec",
                    area.name
                )));
            }
            if self.areas[..i].iter().any(|a| a.name == area.name) {
                return Err(WorldError::InvalidConfig(format!(
                    "duplicate area name '{}'",
                    area.name
                )));
            }
            for spec in &area.objects {
                if let Some(hi) = spec.count_max {
                    if hi < spec.count {
                        return Err(WorldError::InvalidConfig(format!(
                            "object '{}' in area '{}': count_max {} below count {}",
                            spec.template, area.name, hi, spec.count
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
