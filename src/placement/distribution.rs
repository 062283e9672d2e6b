// src/placement/distribution.rs
//! Candidate-position sampling strategies. Distributions only propose;
//! validation happens elsewhere.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::world::Rect;

/// Data form of a distribution, as written in the world config.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum DistributionDef {
    /// Uniform over a disc (or annulus, when `hole > 0`) around the area
    /// center.
    CircularUniform {
        #[serde(default)]
        hole: f32,
        spread: f32,
    },
    /// Independent uniform draws over the area, shrunk by `margin` per side.
    RectUniform {
        #[serde(default)]
        margin: f32,
    },
}

/// Draws a single candidate position inside the given bounds. Re-callable
/// indefinitely; each draw is independent of prior rejects.
pub trait Distribution {
    fn sample(&mut self, bounds: Rect) -> Vec2;
}

/// Uniform over an annulus `[hole, spread]` around the bounds center.
pub struct CircularUniform {
    hole: f32,
    spread: f32,
    rng: ChaCha8Rng,
}

impl CircularUniform {
    pub fn new(hole: f32, spread: f32, rng: ChaCha8Rng) -> Self {
        let spread = spread.max(0.001);
        let hole = hole.clamp(0.0, spread);
        Self { hole, spread, rng }
    }
}

impl Distribution for CircularUniform {
    fn sample(&mut self, bounds: Rect) -> Vec2 {
        // Area-uniform radius, then clamp into bounds.
        let r = self
            .rng
            .random_range(self.hole * self.hole..=self.spread * self.spread)
            .sqrt();
        let ang = self.rng.random_range(0.0..std::f32::consts::TAU);
        bounds.clamp_point(bounds.center() + r * Vec2::new(ang.cos(), ang.sin()))
    }
}

/// Independent uniform draws on each axis over the (possibly shrunk) bounds.
pub struct RectUniform {
    margin: f32,
    rng: ChaCha8Rng,
}

impl RectUniform {
    pub fn new(margin: f32, rng: ChaCha8Rng) -> Self {
        Self { margin: margin.max(0.0), rng }
    }
}

impl Distribution for RectUniform {
    fn sample(&mut self, bounds: Rect) -> Vec2 {
        let r = bounds.shrunk(self.margin);
        Vec2::new(
            self.rng.random_range(r.min.x..=r.max.x),
            self.rng.random_range(r.min.y..=r.max.y),
        )
    }
}

/// Factory: build a boxed distribution from its config form.
pub fn make_distribution(def: &DistributionDef, rng: ChaCha8Rng) -> Box<dyn Distribution> {
    match def {
        DistributionDef::CircularUniform { hole, spread } => {
            Box::new(CircularUniform::new(*hole, *spread, rng))
        }
        DistributionDef::RectUniform { margin } => Box::new(RectUniform::new(*margin, rng)),
    }
}

/// Stable RNG per (seed, area, label): the world seed xor-mixed with hashes
/// of the identifying labels, so every placer stream is reproducible and
/// independent of placement order elsewhere.
pub fn rng_for(world_seed: u64, area: &str, label: &str) -> ChaCha8Rng {
    let mix = world_seed
        ^ fnv1a(area.as_bytes()).rotate_left(16)
        ^ fnv1a(label.as_bytes()).rotate_left(32)
        ^ 0x9E37_79B9_7F4A_7C15u64;
    ChaCha8Rng::seed_from_u64(mix)
}

#[inline]
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut h = 0xCBF2_9CE4_8422_2325u64;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::centered(Vec2::new(3.0, -2.0), Vec2::new(10.0, 6.0))
    }

    #[test]
    fn samples_stay_inside_bounds() {
        let b = bounds();
        let mut circular = CircularUniform::new(0.0, 50.0, rng_for(1, "a", "t"));
        let mut uniform = RectUniform::new(0.5, rng_for(1, "a", "u"));
        for _ in 0..500 {
            assert!(b.contains(circular.sample(b)));
            assert!(b.contains(uniform.sample(b)));
        }
    }

    #[test]
    fn same_seed_reproduces_the_stream() {
        let b = bounds();
        let mut first = RectUniform::new(0.0, rng_for(42, "a", "t"));
        let mut second = RectUniform::new(0.0, rng_for(42, "a", "t"));
        for _ in 0..20 {
            assert_eq!(first.sample(b), second.sample(b));
        }
    }

    #[test]
    fn distinct_labels_get_distinct_streams() {
        let b = bounds();
        let mut first = RectUniform::new(0.0, rng_for(42, "a", "tree"));
        let mut second = RectUniform::new(0.0, rng_for(42, "a", "rock"));
        let diverged = (0..10).any(|_| first.sample(b) != second.sample(b));
        assert!(diverged);
    }

    #[test]
    fn circular_respects_the_spread_radius() {
        let b = Rect::centered(Vec2::ZERO, Vec2::splat(100.0));
        let mut circular = CircularUniform::new(0.0, 5.0, rng_for(7, "a", "t"));
        for _ in 0..500 {
            assert!(circular.sample(b).length() <= 5.0 + 1e-4);
        }
    }
}
