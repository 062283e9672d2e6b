// src/world/environment.rs
//! Composite container: the whole world, aggregating its child areas.

use std::collections::BTreeMap;

use glam::Vec2;

use super::area::Area;
use super::core::{Container, PlacedObject, Rect};
use crate::error::WorldError;

/// Owns its child areas for the lifetime of the build. The aggregate object
/// view is the union over children, recomputed on every read.
#[derive(Debug)]
pub struct Environment {
    name: String,
    bounds: Rect,
    areas: Vec<Area>,
}

impl Environment {
    pub fn new(name: impl Into<String>, size: Vec2) -> Self {
        Self {
            name: name.into(),
            bounds: Rect::centered(Vec2::ZERO, size),
            areas: Vec::new(),
        }
    }

    pub fn push_area(&mut self, area: Area) -> Result<(), WorldError> {
        if self.areas.iter().any(|a| a.name() == area.name()) {
            return Err(WorldError::DuplicateName {
                container: self.name.clone(),
                name: area.name().to_string(),
            });
        }
        self.areas.push(area);
        Ok(())
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn area_mut(&mut self, name: &str) -> Option<&mut Area> {
        self.areas.iter_mut().find(|a| a.name() == name)
    }
}

impl Container for Environment {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Delegates to the child area named by the object's `container` field;
    /// the environment never holds objects directly.
    fn insert(&mut self, object: PlacedObject) -> Result<(), WorldError> {
        if self.areas.iter().any(|a| a.contains(&object.name)) {
            return Err(WorldError::DuplicateName {
                container: self.name.clone(),
                name: object.name,
            });
        }
        let target = self
            .areas
            .iter_mut()
            .find(|a| a.name() == object.container)
            .ok_or_else(|| WorldError::NotFound {
                container: self.name.clone(),
                name: object.container.clone(),
            })?;
        target.insert(object)
    }

    fn remove(&mut self, name: &str) -> Result<PlacedObject, WorldError> {
        for area in &mut self.areas {
            if area.contains(name) {
                return area.remove(name);
            }
        }
        Err(WorldError::NotFound {
            container: self.name.clone(),
            name: name.to_string(),
        })
    }

    fn objects(&self) -> BTreeMap<&str, &PlacedObject> {
        self.areas.iter().flat_map(|a| a.objects()).collect()
    }
}
