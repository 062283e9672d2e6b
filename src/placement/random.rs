// src/placement/random.rs
//! Rejection-sampling placement: draw a candidate, validate, retry up to a
//! bound.

use std::sync::Arc;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use super::distribution::Distribution;
use super::{PlacementCtx, Placer};
use crate::error::WorldError;
use crate::world::{Container, ObjectTemplate, PlacedObject};

/// Places objects at validated random positions. The validator never proves
/// an addition is possible; instead the retry bound turns an overcrowded
/// configuration into a prompt failure.
pub struct RandomPlacer {
    distribution: Box<dyn Distribution>,
    max_tries: u32,
    rotation_range: Option<(f32, f32)>,
    rng: ChaCha8Rng,
}

impl RandomPlacer {
    /// Default per-instance retry bound.
    pub const MAX_TRIES: u32 = 10_000;

    pub fn new(
        distribution: Box<dyn Distribution>,
        max_tries: u32,
        rotation_range: Option<(f32, f32)>,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            distribution,
            max_tries: max_tries.max(1),
            rotation_range,
            rng,
        }
    }

    fn sample_rotation(&mut self) -> f32 {
        match self.rotation_range {
            Some((lo, hi)) if hi > lo => self.rng.random_range(lo..hi),
            Some((lo, _)) => lo,
            None => 0.0,
        }
    }
}

impl Placer for RandomPlacer {
    fn add(
        &mut self,
        site: &mut dyn Container,
        template: &Arc<ObjectTemplate>,
        count: u32,
        ctx: &mut PlacementCtx<'_>,
    ) -> Result<(), WorldError> {
        let bounds = site.bounds();
        for _ in 0..count {
            let mut tries: u32 = 0;
            let position = loop {
                let candidate = self.distribution.sample(bounds);
                let existing: Vec<&PlacedObject> = site.objects().into_values().collect();
                if ctx.validator.validate(candidate, &existing) {
                    break candidate;
                }
                tries += 1;
                if tries >= self.max_tries {
                    warn!(
                        "placing '{}' into '{}' exhausted {} tries",
                        template.name,
                        site.name(),
                        tries
                    );
                    return Err(WorldError::PlacementExhausted {
                        container: site.name().to_string(),
                        template: template.name.clone(),
                        tries,
                    });
                }
            };
            let name = ctx.names.allocate(&template.name);
            let rotation = self.sample_rotation();
            site.insert(PlacedObject::new(
                Arc::clone(template),
                name,
                position,
                rotation,
                site.name(),
            ))?;
        }
        debug!("'{}': placed {} x '{}'", site.name(), count, template.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NameRegistry;
    use crate::placement::distribution::{rng_for, RectUniform};
    use crate::placement::rules::MinDistanceRule;
    use crate::placement::validator::Validator;
    use crate::world::{Area, Rect, SceneFragment, TemplateKind};
    use glam::Vec2;

    fn template(name: &str) -> Arc<ObjectTemplate> {
        Arc::new(ObjectTemplate {
            name: name.to_string(),
            kind: TemplateKind::Free,
            fragment: SceneFragment(String::new()),
            extent: 1.0,
        })
    }

    fn placer(seed: u64, max_tries: u32) -> RandomPlacer {
        RandomPlacer::new(
            Box::new(RectUniform::new(0.0, rng_for(seed, "a", "t"))),
            max_tries,
            None,
            rng_for(seed, "a", "t/rot"),
        )
    }

    fn validator(dist: f32) -> Validator {
        Validator::new(vec![Box::new(MinDistanceRule::new(dist))])
    }

    #[test]
    fn count_zero_is_a_no_op() {
        let mut area = Area::new("a", Rect::centered(Vec2::ZERO, Vec2::splat(10.0)));
        let mut names = NameRegistry::new();
        let v = validator(1.0);
        let mut ctx = PlacementCtx { validator: &v, names: &mut names };
        placer(1, 100).add(&mut area, &template("box"), 0, &mut ctx).unwrap();
        assert!(area.is_empty());
        assert_eq!(names.issued(), 0);
    }

    #[test]
    fn places_exactly_count_objects_with_unique_names() {
        let mut area = Area::new("a", Rect::centered(Vec2::ZERO, Vec2::splat(10.0)));
        let mut names = NameRegistry::new();
        let v = validator(0.5);
        let mut ctx = PlacementCtx { validator: &v, names: &mut names };
        placer(1, RandomPlacer::MAX_TRIES)
            .add(&mut area, &template("box"), 12, &mut ctx)
            .unwrap();
        assert_eq!(area.len(), 12);
    }

    #[test]
    fn min_distance_holds_for_every_pair() {
        let mut area = Area::new("a", Rect::centered(Vec2::ZERO, Vec2::splat(10.0)));
        let mut names = NameRegistry::new();
        let v = validator(1.0);
        let mut ctx = PlacementCtx { validator: &v, names: &mut names };
        placer(3, RandomPlacer::MAX_TRIES)
            .add(&mut area, &template("box"), 5, &mut ctx)
            .unwrap();

        let objects = area.objects();
        let positions: Vec<Vec2> = objects.values().map(|o| o.position).collect();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert!(positions[i].distance(positions[j]) >= 1.0);
            }
        }
    }

    #[test]
    fn saturated_area_exhausts_without_corrupting_prior_placements() {
        // a 2x2 area cannot hold two objects 10 apart
        let mut area = Area::new("a", Rect::centered(Vec2::ZERO, Vec2::splat(2.0)));
        let mut names = NameRegistry::new();
        let v = validator(10.0);
        let mut ctx = PlacementCtx { validator: &v, names: &mut names };
        let err = placer(1, 50)
            .add(&mut area, &template("box"), 2, &mut ctx)
            .unwrap_err();
        match err {
            WorldError::PlacementExhausted { container, template, tries } => {
                assert_eq!(container, "a");
                assert_eq!(template, "box");
                assert_eq!(tries, 50);
            }
            other => panic!("unexpected error: {other}"),
        }
        // first instance survived the failure of the second
        assert_eq!(area.len(), 1);
    }

    #[test]
    fn rotation_range_is_honoured() {
        let mut area = Area::new("a", Rect::centered(Vec2::ZERO, Vec2::splat(10.0)));
        let mut names = NameRegistry::new();
        let v = validator(0.1);
        let mut ctx = PlacementCtx { validator: &v, names: &mut names };
        let mut placer = RandomPlacer::new(
            Box::new(RectUniform::new(0.0, rng_for(1, "a", "t"))),
            100,
            Some((1.0, 2.0)),
            rng_for(1, "a", "t/rot"),
        );
        placer.add(&mut area, &template("box"), 8, &mut ctx).unwrap();
        for obj in area.objects().values() {
            assert!(obj.rotation >= 1.0 && obj.rotation < 2.0);
        }
    }
}
