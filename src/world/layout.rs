// src/world/layout.rs
//! Partition of the environment extent into per-area cells.

use glam::Vec2;

use super::core::Rect;
use crate::error::WorldError;

/// Near-square grid tiling: one cell per requested area, assigned row-major
/// in request order, each area centered inside its cell.
///
/// Fails when an area is larger than the cell the tiling gives it.
pub fn tile(world: Rect, sizes: &[Vec2]) -> Result<Vec<Rect>, WorldError> {
    let n = sizes.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let ws = world.size();
    let cols = ((n as f32 * ws.x / ws.y).sqrt().ceil() as usize).clamp(1, n);
    let rows = n.div_ceil(cols);
    let cell = Vec2::new(ws.x / cols as f32, ws.y / rows as f32);

    let mut out = Vec::with_capacity(n);
    for (i, size) in sizes.iter().enumerate() {
        if size.x > cell.x || size.y > cell.y {
            return Err(WorldError::InvalidConfig(format!(
                "area {} of size {}x{} does not fit its {:.1}x{:.1} layout cell",
                i, size.x, size.y, cell.x, cell.y
            )));
        }
        let col = (i % cols) as f32;
        let row = (i / cols) as f32;
        let center = world.min + Vec2::new((col + 0.5) * cell.x, (row + 0.5) * cell.y);
        out.push(Rect::centered(center, *size));
    }
    Ok(out)
}
