// src/lib.rs
//! Procedural assembly of simulated-world scenes: a bounded 2D world is
//! partitioned into named areas, each filled with template objects at
//! validated non-colliding positions, and the result is exported as a scene
//! document for an external simulation engine.

pub mod assembler;
pub mod config;
pub mod error;
pub mod export;
pub mod naming;
pub mod placement;
pub mod registry;
pub mod world;

pub use assembler::Assembler;
pub use config::WorldConfig;
pub use error::WorldError;
pub use export::SceneDoc;
pub use naming::NameRegistry;
pub use registry::TemplateRegistry;
pub use world::{Area, Container, Environment, ObjectTemplate, PlacedObject, Rect};
