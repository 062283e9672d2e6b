//! End-to-end assembly tests: RON config + templates in, scene document out.

use std::collections::HashSet;
use std::io::Write;

use worldsmith::{Assembler, Container, SceneDoc, TemplateRegistry, WorldConfig, WorldError};

const TEMPLATES: &str = r#"[
    (name: "tree", kind: Attachable, fragment: "<body name=\"tree\"/>", extent: 1.0),
    (name: "rock", kind: Free, fragment: "<geom name=\"rock\"/>", extent: 0.5),
    (name: "wall", kind: Free, fragment: "<geom name=\"wall\"/>", extent: 1.0),
]"#;

const WORLD: &str = r#"(
    name: "meadow",
    size: (40.0, 40.0),
    seed: 7,
    areas: [
        (
            name: "grove",
            size: (18.0, 18.0),
            has_border: true,
            border: Some((template: "wall", amount: 16)),
            rules: [
                MinDistance(dist: 1.5, kinds: Some(["tree", "rock"])),
                Boundary(margin: 1.0),
            ],
            objects: [
                (
                    template: "tree",
                    count: 12,
                    placement: Random(distribution: CircularUniform(spread: 8.0)),
                ),
                (
                    template: "rock",
                    count: 3,
                    count_max: Some(6),
                    placement: Random(
                        distribution: RectUniform(margin: 1.5),
                        rotation_range: Some((0.0, 6.2831853)),
                    ),
                ),
            ],
        ),
        (
            name: "clearing",
            size: (14.0, 14.0),
            objects: [
                (
                    template: "rock",
                    count: 5,
                    placement: Random(distribution: RectUniform(margin: 1.0)),
                ),
            ],
        ),
    ],
)"#;

fn load_fixtures() -> (WorldConfig, TemplateRegistry) {
    let mut templates = tempfile::NamedTempFile::new().unwrap();
    write!(templates, "{TEMPLATES}").unwrap();
    let mut world = tempfile::NamedTempFile::new().unwrap();
    write!(world, "{WORLD}").unwrap();
    (
        WorldConfig::load(world.path()).unwrap(),
        TemplateRegistry::load(templates.path()).unwrap(),
    )
}

#[test]
fn assembles_the_full_world() {
    let (config, templates) = load_fixtures();
    let env = Assembler::new(&config, &templates).assemble().unwrap();

    assert_eq!(env.areas().len(), 2);
    let objects = env.objects();

    // 16 walls + 12 trees + 3..=6 rocks in the grove, 5 rocks in the clearing
    let walls = objects.values().filter(|o| o.template.name == "wall").count();
    let trees = objects.values().filter(|o| o.template.name == "tree").count();
    let rocks = objects.values().filter(|o| o.template.name == "rock").count();
    assert_eq!(walls, 16);
    assert_eq!(trees, 12);
    assert!((8..=11).contains(&rocks));

    // every object sits inside its area's bounds
    for area in env.areas() {
        for obj in area.objects().values() {
            assert!(area.bounds().contains(obj.position), "{} escaped {}", obj.name, area.name());
        }
    }
}

#[test]
fn names_are_unique_across_the_whole_build() {
    let (config, templates) = load_fixtures();
    let env = Assembler::new(&config, &templates).assemble().unwrap();

    let mut seen = HashSet::new();
    for area in env.areas() {
        for name in area.objects().keys() {
            assert!(seen.insert(name.to_string()), "name '{name}' issued twice");
        }
    }
}

#[test]
fn min_distance_holds_between_trees_and_rocks() {
    let (config, templates) = load_fixtures();
    let env = Assembler::new(&config, &templates).assemble().unwrap();

    let grove = &env.areas()[0];
    let placed: Vec<_> = grove
        .objects()
        .values()
        .filter(|o| o.template.name != "wall")
        .map(|o| o.position)
        .collect();
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            assert!(
                placed[i].distance(placed[j]) >= 1.5,
                "{:?} and {:?} too close",
                placed[i],
                placed[j]
            );
        }
    }
}

#[test]
fn identical_seeds_export_identical_scenes() {
    let (config, templates) = load_fixtures();
    let first = Assembler::new(&config, &templates).assemble().unwrap();
    let second = Assembler::new(&config, &templates).assemble().unwrap();
    assert_eq!(
        SceneDoc::from_environment(&first).to_json_string().unwrap(),
        SceneDoc::from_environment(&second).to_json_string().unwrap()
    );
}

#[test]
fn different_seeds_move_the_objects() {
    let (mut config, templates) = load_fixtures();
    let first = Assembler::new(&config, &templates).assemble().unwrap();
    config.seed = 8;
    let second = Assembler::new(&config, &templates).assemble().unwrap();
    assert_ne!(
        SceneDoc::from_environment(&first).to_json_string().unwrap(),
        SceneDoc::from_environment(&second).to_json_string().unwrap()
    );
}

#[test]
fn overcrowded_area_reports_placement_exhausted() {
    let (mut config, templates) = load_fixtures();
    // no area can hold 200 objects 1.5 apart within an 18x18 extent
    config.areas[0].objects[0].count = 200;
    let err = Assembler::new(&config, &templates).assemble().unwrap_err();
    match err {
        WorldError::PlacementExhausted { container, template, .. } => {
            assert_eq!(container, "grove");
            assert_eq!(template, "tree");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn removal_is_reflected_in_the_aggregate_view() {
    let (config, templates) = load_fixtures();
    let mut env = Assembler::new(&config, &templates).assemble().unwrap();

    let name = env.objects().keys().next().unwrap().to_string();
    env.remove(&name).unwrap();
    assert!(!env.objects().contains_key(name.as_str()));
    assert!(matches!(env.remove(&name), Err(WorldError::NotFound { .. })));
}
