// src/placement/mod.rs
//! Placement strategies and their shared contract.

mod border;
mod distribution;
mod random;
pub mod rules;
pub mod validator;

pub use border::BorderPlacer;
pub use distribution::{
    make_distribution, rng_for, CircularUniform, Distribution, DistributionDef, RectUniform,
};
pub use random::RandomPlacer;
pub use rules::{make_rules, BoundaryRule, MinDistanceRule, Rule, RuleDef};
pub use validator::{ascii_plot, Validator};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::WorldError;
use crate::naming::NameRegistry;
use crate::world::{Container, ObjectTemplate, PlacedObject};

/// Everything a placer needs besides the container: the acceptance rules and
/// the naming authority for this build.
pub struct PlacementCtx<'a> {
    pub validator: &'a Validator,
    pub names: &'a mut NameRegistry,
}

/// Shared contract for placement strategies.
pub trait Placer {
    /// Place `count` instances of `template` into `site`.
    ///
    /// Best-effort: on failure, instances placed so far stay put and the
    /// failed instance leaves the container untouched. Callers that need
    /// all-or-nothing semantics snapshot the container first.
    fn add(
        &mut self,
        site: &mut dyn Container,
        template: &Arc<ObjectTemplate>,
        count: u32,
        ctx: &mut PlacementCtx<'_>,
    ) -> Result<(), WorldError>;

    /// Remove a named object from `site`.
    fn remove(
        &mut self,
        site: &mut dyn Container,
        name: &str,
    ) -> Result<PlacedObject, WorldError> {
        site.remove(name)
    }
}

/// Data form of a placement strategy, as written in the world config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PlacementDef {
    Random {
        distribution: DistributionDef,
        #[serde(default = "default_max_tries")]
        max_tries: u32,
        /// Yaw range in radians; objects get a sampled rotation when set.
        #[serde(default)]
        rotation_range: Option<(f32, f32)>,
    },
}

fn default_max_tries() -> u32 {
    RandomPlacer::MAX_TRIES
}

/// Factory: build a boxed placer from its config form, with RNG streams
/// keyed on (seed, area, template).
pub fn make_placer(
    def: &PlacementDef,
    world_seed: u64,
    area: &str,
    template: &str,
) -> Box<dyn Placer> {
    match def {
        PlacementDef::Random { distribution, max_tries, rotation_range } => {
            let dist = make_distribution(distribution, rng_for(world_seed, area, template));
            let rot_rng = rng_for(world_seed, area, &format!("{template}/rot"));
            Box::new(RandomPlacer::new(dist, *max_tries, *rotation_range, rot_rng))
        }
    }
}
