//! Scene parameter files
//!
//! A parameter file is a TOML rendition of [`SceneParams`]. Colors are
//! `"#rrggbb"` strings and vectors are 3-element arrays.

use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::params::{Preset, SceneParams};

/// Load and parse a scene parameter file
pub fn load_scene(path: &Path) -> Result<SceneParams, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let params: SceneParams = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(scene = %params.name, ?path, "loaded scene parameters");
    Ok(params)
}

/// Render scene parameters as TOML text
pub fn to_toml(params: &SceneParams) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(params)?)
}

/// Write scene parameters to a TOML file
pub fn save_scene(path: &Path, params: &SceneParams) -> Result<(), ConfigError> {
    let content = to_toml(params)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(scene = %params.name, ?path, "saved scene parameters");
    Ok(())
}

/// Where a scene comes from: a built-in preset or a parameter file
#[derive(Debug, Clone, PartialEq)]
pub enum SceneSource<'a> {
    Preset(Preset),
    File(&'a Path),
}

impl SceneSource<'_> {
    pub fn load(&self) -> Result<SceneParams, ConfigError> {
        match self {
            SceneSource::Preset(preset) => Ok(preset.params()),
            SceneSource::File(path) => load_scene(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("v6.toml");
        let params = Preset::V6.params();

        save_scene(&path, &params).unwrap();
        let loaded = load_scene(&path).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_colors_are_hex_strings() {
        let text = to_toml(&Preset::Sculpture.params()).unwrap();
        assert!(text.contains("color = \"#"));
        assert!(text.contains("kind = "));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_scene(&path).unwrap_err();
        assert!(matches!(&err, ConfigError::Read { path: p, .. } if p == &path));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = \"broken\"\n[bird]\nbody = 3\n").unwrap();
        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_source_prefers_preset_table() {
        let params = SceneSource::Preset(Preset::V5).load().unwrap();
        assert_eq!(params, Preset::V5.params());
    }
}
