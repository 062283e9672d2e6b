// src/placement/validator.rs
//! Ordered rule evaluation, plus a text plot for eyeballing placements.

use glam::Vec2;
use tracing::trace;

use super::rules::Rule;
use crate::world::{Container, PlacedObject};

/// Holds an ordered rule set; a candidate is accepted only if every rule
/// accepts. Evaluation short-circuits, so rule order decides which failure
/// gets reported first.
pub struct Validator {
    rules: Vec<Box<dyn Rule>>,
}

impl Validator {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn validate(&self, candidate: Vec2, existing: &[&PlacedObject]) -> bool {
        for rule in &self.rules {
            if !rule.evaluate(candidate, existing) {
                trace!(
                    "candidate ({:.2}, {:.2}) rejected by '{}'",
                    candidate.x,
                    candidate.y,
                    rule.name()
                );
                return false;
            }
        }
        true
    }

    /// Inspection aid; see [`ascii_plot`].
    pub fn plot(&self, container: &dyn Container) -> String {
        ascii_plot(container)
    }
}

/// Render a container's placements as a text grid, objects marked with the
/// first letter of their template type. Inspection aid only.
pub fn ascii_plot(container: &dyn Container) -> String {
    const COLS: usize = 48;

    let bounds = container.bounds();
    let size = bounds.size().max(Vec2::splat(f32::EPSILON));
    // halve the row count to keep roughly square cells in terminal fonts
    let rows = ((COLS as f32 * size.y / size.x) * 0.5).round().max(1.0) as usize;

    let mut grid = vec![vec!['.'; COLS]; rows];
    let objects = container.objects();
    for obj in objects.values() {
        let u = ((obj.position.x - bounds.min.x) / size.x * (COLS - 1) as f32).round() as usize;
        let v = ((obj.position.y - bounds.min.y) / size.y * (rows - 1) as f32).round() as usize;
        let mark = obj
            .template
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        grid[rows - 1 - v.min(rows - 1)][u.min(COLS - 1)] = mark;
    }

    let mut out = format!(
        "{} ({} objects, {:.1}x{:.1})\n",
        container.name(),
        objects.len(),
        size.x,
        size.y
    );
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}
