//! Error types
//!
//! Composition only fails on contract violations in a parameter table. Those
//! are programmer errors and are meant to stop the program at startup.

use std::path::PathBuf;

use thiserror::Error;

/// A parameter table that cannot be turned into a scene
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("{part}: lathe profile needs at least 2 points, got {points}")]
    ProfileTooShort { part: String, points: usize },

    #[error("{part}: row must contain at least one element")]
    EmptyRow { part: String },

    #[error("{part}: {reason}")]
    InvalidParameter { part: String, reason: String },

    #[error("duplicate node name {0:?} in scene tree")]
    DuplicateNode(String),

    #[error("animation target {0:?} not found in scene tree")]
    MissingTarget(String),
}

/// Loading or saving a scene parameter file failed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize scene parameters: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

/// Writing an exported model failed
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output path {0:?} has no file name")]
    InvalidPath(PathBuf),
}
