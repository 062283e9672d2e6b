// src/error.rs
//! Crate-wide error type. Every variant carries the offending container,
//! template, or object identity so failures are diagnosable at the call site.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    /// The rejection-sampling retry bound was hit for one instance.
    /// Already-placed instances stay in the container.
    #[error("placing '{template}' into '{container}' failed {tries} times, check the area configuration")]
    PlacementExhausted {
        container: String,
        template: String,
        tries: u32,
    },

    /// Deterministic geometric impossibility: the requested border count
    /// does not fit along the container perimeter.
    #[error("border of {requested} x '{template}' does not fit the perimeter of '{container}' ({capacity} slots)")]
    InsufficientSpace {
        container: String,
        template: String,
        requested: u32,
        capacity: u32,
    },

    /// Internal-consistency violation; cannot occur while names come from a
    /// single `NameRegistry`, but containers check anyway.
    #[error("duplicate object name '{name}' in container '{container}'")]
    DuplicateName { container: String, name: String },

    #[error("no object named '{name}' in container '{container}'")]
    NotFound { container: String, name: String },

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("RON parse error in {path}: {message}")]
    Ron { path: String, message: String },

    #[error("scene serialization: {0}")]
    Json(#[from] serde_json::Error),
}
