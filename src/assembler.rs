// src/assembler.rs
//! Orchestrates config + templates into a placed `Environment`.

use glam::Vec2;
use rand::Rng;
use tracing::info;

use crate::config::{AreaConfig, WorldConfig};
use crate::error::WorldError;
use crate::naming::NameRegistry;
use crate::placement::{
    make_placer, make_rules, rng_for, BorderPlacer, PlacementCtx, Placer, Validator,
};
use crate::registry::TemplateRegistry;
use crate::world::{layout, Area, Container, Environment, Rect};

/// Builds one world from a configuration and a template registry: layout the
/// areas, fill each through its configured placers, aggregate into the
/// environment. Glue, not algorithm.
pub struct Assembler<'a> {
    config: &'a WorldConfig,
    templates: &'a TemplateRegistry,
}

impl<'a> Assembler<'a> {
    pub fn new(config: &'a WorldConfig, templates: &'a TemplateRegistry) -> Self {
        Self { config, templates }
    }

    /// Build the whole world. Any placement failure aborts the build with the
    /// offending container and template named in the error; nothing is rolled
    /// back.
    pub fn assemble(&self) -> Result<Environment, WorldError> {
        self.config.validate()?;
        self.resolve_templates()?;

        let seed = self.config.seed;
        let mut names = NameRegistry::new();
        let mut env = Environment::new(
            &self.config.name,
            Vec2::new(self.config.size.0, self.config.size.1),
        );

        let sizes: Vec<Vec2> = self
            .config
            .areas
            .iter()
            .map(|a| Vec2::new(a.size.0, a.size.1))
            .collect();
        let cells = layout::tile(env.bounds(), &sizes)?;

        for (area_cfg, bounds) in self.config.areas.iter().zip(cells) {
            let area = self.fill_area(area_cfg, bounds, seed, &mut names)?;
            info!("area '{}': {} objects", area.name(), area.len());
            env.push_area(area)?;
        }

        info!(
            "world '{}' assembled: {} objects in {} areas",
            env.name(),
            env.objects().len(),
            env.areas().len()
        );
        Ok(env)
    }

    fn fill_area(
        &self,
        cfg: &AreaConfig,
        bounds: Rect,
        seed: u64,
        names: &mut NameRegistry,
    ) -> Result<Area, WorldError> {
        let mut area = Area::new(&cfg.name, bounds);
        let validator = Validator::new(make_rules(&cfg.rules, bounds));
        let mut ctx = PlacementCtx { validator: &validator, names };

        if let Some(border) = &cfg.border {
            let template = self.templates.get(&border.template)?;
            BorderPlacer::new(cfg.has_border).add(&mut area, template, border.amount, &mut ctx)?;
        }

        for spec in &cfg.objects {
            let template = self.templates.get(&spec.template)?;
            let count = match spec.count_max {
                Some(hi) if hi > spec.count => {
                    let mut rng = rng_for(seed, &cfg.name, &format!("{}/count", spec.template));
                    rng.random_range(spec.count..=hi)
                }
                _ => spec.count,
            };
            let mut placer = make_placer(&spec.placement, seed, &cfg.name, &spec.template);
            placer.add(&mut area, template, count, &mut ctx)?;
        }
        Ok(area)
    }

    /// Fail on unknown template names before any placement runs.
    fn resolve_templates(&self) -> Result<(), WorldError> {
        for area in &self.config.areas {
            if let Some(border) = &area.border {
                self.templates.get(&border.template)?;
            }
            for spec in &area.objects {
                self.templates.get(&spec.template)?;
            }
        }
        Ok(())
    }
}
