// src/placement/rules.rs
//! Geometric acceptance rules consulted by the `Validator`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world::{PlacedObject, Rect};

/// Data form of a rule, as written in the world config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RuleDef {
    MinDistance {
        dist: f32,
        /// Restrict the check to these template types; `None` checks all.
        #[serde(default)]
        kinds: Option<Vec<String>>,
    },
    Boundary {
        #[serde(default)]
        margin: f32,
    },
}

/// Pure predicate over a candidate position and the existing placements.
/// Deterministic and side-effect-free.
pub trait Rule {
    /// Short label used when reporting the first failing rule.
    fn name(&self) -> &'static str;

    fn evaluate(&self, candidate: Vec2, existing: &[&PlacedObject]) -> bool;
}

/// Rejects candidates closer than `dist` to any existing placement,
/// optionally restricted to the listed template types. An empty container
/// accepts unconditionally.
pub struct MinDistanceRule {
    dist: f32,
    kinds: Option<Vec<String>>,
}

impl MinDistanceRule {
    pub fn new(dist: f32) -> Self {
        Self { dist, kinds: None }
    }

    pub fn for_kinds(dist: f32, kinds: Vec<String>) -> Self {
        Self { dist, kinds: Some(kinds) }
    }

    #[inline]
    fn applies_to(&self, other: &PlacedObject) -> bool {
        match &self.kinds {
            None => true,
            Some(kinds) => kinds.iter().any(|k| k == &other.template.name),
        }
    }
}

impl Rule for MinDistanceRule {
    fn name(&self) -> &'static str {
        "min_distance"
    }

    fn evaluate(&self, candidate: Vec2, existing: &[&PlacedObject]) -> bool {
        existing
            .iter()
            .filter(|o| self.applies_to(o))
            .all(|o| o.position.distance(candidate) >= self.dist)
    }
}

/// Rejects candidates outside the container bounds or within `margin` of its
/// edge.
pub struct BoundaryRule {
    inner: Rect,
}

impl BoundaryRule {
    pub fn new(bounds: Rect, margin: f32) -> Self {
        Self { inner: bounds.shrunk(margin) }
    }
}

impl Rule for BoundaryRule {
    fn name(&self) -> &'static str {
        "boundary"
    }

    fn evaluate(&self, candidate: Vec2, _existing: &[&PlacedObject]) -> bool {
        self.inner.contains(candidate)
    }
}

/// Build the boxed rule list for one area.
pub fn make_rules(defs: &[RuleDef], bounds: Rect) -> Vec<Box<dyn Rule>> {
    defs.iter()
        .map(|def| -> Box<dyn Rule> {
            match def {
                RuleDef::MinDistance { dist, kinds: None } => Box::new(MinDistanceRule::new(*dist)),
                RuleDef::MinDistance { dist, kinds: Some(kinds) } => {
                    Box::new(MinDistanceRule::for_kinds(*dist, kinds.clone()))
                }
                RuleDef::Boundary { margin } => Box::new(BoundaryRule::new(bounds, *margin)),
            }
        })
        .collect()
}
