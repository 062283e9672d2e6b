// src/registry.rs
//! Data-driven object templates + RON loader.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::WorldError;
use crate::world::ObjectTemplate;

/// Ordered template set; index order is load order. Name → template lookups
/// hand out shared `Arc`s, so every placement of a type points at the same
/// immutable definition.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: Vec<Arc<ObjectTemplate>>,
    name_to_index: HashMap<String, usize>,
}

impl TemplateRegistry {
    pub fn from_defs(defs: Vec<ObjectTemplate>) -> Result<Self, WorldError> {
        let mut name_to_index = HashMap::with_capacity(defs.len());
        let mut templates = Vec::with_capacity(defs.len());
        for (i, def) in defs.into_iter().enumerate() {
            if name_to_index.insert(def.name.clone(), i).is_some() {
                return Err(WorldError::InvalidConfig(format!(
                    "duplicate template name '{}'",
                    def.name
                )));
            }
            templates.push(Arc::new(def));
        }
        Ok(Self { templates, name_to_index })
    }

    /// Load a RON list of template definitions.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| WorldError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let defs: Vec<ObjectTemplate> = ron::de::from_str(&text).map_err(|e| WorldError::Ron {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let registry = Self::from_defs(defs)?;
        info!("loaded {} templates from {}", registry.len(), path.display());
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Result<&Arc<ObjectTemplate>, WorldError> {
        self.name_to_index
            .get(name)
            .map(|&i| &self.templates[i])
            .ok_or_else(|| WorldError::UnknownTemplate(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ObjectTemplate>> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
