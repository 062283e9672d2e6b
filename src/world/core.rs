// src/world/core.rs
//! Core types/traits for world assembly. Keep this file dependency-light;
//! it should compile before any placer/container impls.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::WorldError;

// ---------- Extents ----------

/// Axis-aligned world-space rectangle used for environment and area bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn perimeter(&self) -> f32 {
        let s = self.size();
        2.0 * (s.x + s.y)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Shrink by `margin` on every side; collapses to the center point rather
    /// than inverting.
    pub fn shrunk(&self, margin: f32) -> Self {
        let c = self.center();
        let half = (self.size() * 0.5 - Vec2::splat(margin)).max(Vec2::ZERO);
        Self { min: c - half, max: c + half }
    }

    /// Clamp a point into the rectangle.
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.min.x, self.max.x), p.y.clamp(self.min.y, self.max.y))
    }
}

// ---------- Templates ----------

/// Whether a template's scene fragment attaches to a parent body or carries
/// its own free joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    Attachable,
    Free,
}

/// Opaque scene-description fragment. The assembly core never looks inside;
/// it is handed to the exporter verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneFragment(pub String);

/// Immutable description of a placeable object. Loaded once by the template
/// registry and shared via `Arc`; placements never clone it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Type name, e.g. "tree". Also the prefix of generated object names.
    pub name: String,
    pub kind: TemplateKind,
    pub fragment: SceneFragment,
    /// Nominal footprint diameter (world units); used for border capacity.
    #[serde(default = "default_extent")]
    pub extent: f32,
}

fn default_extent() -> f32 {
    1.0
}

// ---------- Placed objects ----------

/// A template bound to a concrete position inside one container.
#[derive(Clone, Debug)]
pub struct PlacedObject {
    pub template: Arc<ObjectTemplate>,
    /// Unique name issued by the `NameRegistry`.
    pub name: String,
    pub position: Vec2,
    /// Yaw in radians.
    pub rotation: f32,
    /// Name of the container this object belongs to.
    pub container: String,
}

impl PlacedObject {
    pub fn new(
        template: Arc<ObjectTemplate>,
        name: String,
        position: Vec2,
        rotation: f32,
        container: &str,
    ) -> Self {
        Self { template, name, position, rotation, container: container.to_string() }
    }
}

// ---------- Container contract ----------

/// Shared contract for `Area` and `Environment`.
///
/// Invariant: every key in the `objects` view equals the contained object's
/// unique name, and names are unique across the whole build.
pub trait Container {
    fn name(&self) -> &str;

    fn bounds(&self) -> Rect;

    /// Insert under the object's unique name. `DuplicateName` if taken.
    fn insert(&mut self, object: PlacedObject) -> Result<(), WorldError>;

    /// Remove by unique name, returning the object. `NotFound` if absent.
    fn remove(&mut self, name: &str) -> Result<PlacedObject, WorldError>;

    /// Current objects keyed by unique name. Composite containers recompute
    /// this view on every call; it is never cached.
    fn objects(&self) -> BTreeMap<&str, &PlacedObject>;
}
