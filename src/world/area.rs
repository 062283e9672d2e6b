// src/world/area.rs
//! Leaf container: a named sub-area with fixed bounds.

use std::collections::BTreeMap;

use tracing::debug;

use super::core::{Container, PlacedObject, Rect};
use crate::error::WorldError;

#[derive(Debug)]
pub struct Area {
    name: String,
    bounds: Rect,
    objects: BTreeMap<String, PlacedObject>,
}

impl Area {
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self { name: name.into(), bounds, objects: BTreeMap::new() }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Container for Area {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn insert(&mut self, object: PlacedObject) -> Result<(), WorldError> {
        if self.objects.contains_key(&object.name) {
            return Err(WorldError::DuplicateName {
                container: self.name.clone(),
                name: object.name,
            });
        }
        debug!(
            "'{}': placed '{}' at ({:.2}, {:.2})",
            self.name, object.name, object.position.x, object.position.y
        );
        self.objects.insert(object.name.clone(), object);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<PlacedObject, WorldError> {
        self.objects.remove(name).ok_or_else(|| WorldError::NotFound {
            container: self.name.clone(),
            name: name.to_string(),
        })
    }

    fn objects(&self) -> BTreeMap<&str, &PlacedObject> {
        self.objects.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}
