// src/placement/border.rs
//! Deterministic perimeter placement: evenly spaced slots, no retries.

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use glam::Vec2;
use tracing::debug;

use super::{PlacementCtx, Placer};
use crate::error::WorldError;
use crate::world::{Container, ObjectTemplate, PlacedObject, Rect};

/// Places `count` instances evenly spaced along the container perimeter.
/// Purely geometric: either enough slots exist or the operation fails
/// immediately with `InsufficientSpace`. Validation is skipped; borders sit
/// on the boundary by construction.
pub struct BorderPlacer {
    has_border: bool,
}

impl BorderPlacer {
    pub fn new(has_border: bool) -> Self {
        Self { has_border }
    }
}

impl Placer for BorderPlacer {
    fn add(
        &mut self,
        site: &mut dyn Container,
        template: &Arc<ObjectTemplate>,
        count: u32,
        ctx: &mut PlacementCtx<'_>,
    ) -> Result<(), WorldError> {
        if !self.has_border || count == 0 {
            return Ok(());
        }

        let bounds = site.bounds();
        let perimeter = bounds.perimeter();
        let capacity = (perimeter / template.extent.max(f32::EPSILON)).floor() as u32;
        if count > capacity {
            return Err(WorldError::InsufficientSpace {
                container: site.name().to_string(),
                template: template.name.clone(),
                requested: count,
                capacity,
            });
        }

        let step = perimeter / count as f32;
        for i in 0..count {
            let (position, rotation) = perimeter_point(bounds, i as f32 * step);
            let name = ctx.names.allocate(&template.name);
            site.insert(PlacedObject::new(
                Arc::clone(template),
                name,
                position,
                rotation,
                site.name(),
            ))?;
        }
        debug!("'{}': bordered with {} x '{}'", site.name(), count, template.name);
        Ok(())
    }
}

/// Point on the rectangle outline at arc length `t` from the min corner,
/// walking bottom, right, top, left edges; returns the position and the yaw
/// aligned with the edge direction.
fn perimeter_point(bounds: Rect, t: f32) -> (Vec2, f32) {
    let s = bounds.size();
    let t = t.rem_euclid(bounds.perimeter().max(f32::EPSILON));
    if t < s.x {
        return (Vec2::new(bounds.min.x + t, bounds.min.y), 0.0);
    }
    let t = t - s.x;
    if t < s.y {
        return (Vec2::new(bounds.max.x, bounds.min.y + t), FRAC_PI_2);
    }
    let t = t - s.y;
    if t < s.x {
        return (Vec2::new(bounds.max.x - t, bounds.max.y), PI);
    }
    let t = t - s.x;
    (Vec2::new(bounds.min.x, bounds.max.y - t), PI + FRAC_PI_2)
}
