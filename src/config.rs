use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "adventure.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding rooms.json, items.json and puzzles.json.
    pub data_dir: PathBuf,
    pub start_room: String,
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset.
    pub log_filter: String,
    pub field: FieldConfig,
}

/// Geometry of the pickup field. All distances are in field units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: i32,
    pub height: i32,
    pub step: i32,
    /// Half-size of the square around the player that touches a marker.
    pub reach: i32,
    /// Markers are never scattered closer than this to a border.
    pub margin: i32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            data_dir: PathBuf::from("data"),
            start_room: "entrance".to_string(),
            log_filter: "warn".to_string(),
            field: FieldConfig::default(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            width: 600,
            height: 400,
            step: 20,
            reach: 10,
            margin: 50,
            seed: None,
        }
    }
}

/// Upper bound for every field distance; keeps position arithmetic far from
/// `i32` overflow.
pub const MAX_FIELD_EXTENT: i32 = 1_000_000;

impl FieldConfig {
    /// Every distance must be within `0..=MAX_FIELD_EXTENT`, and the field
    /// and its step must be non-empty.
    pub fn check(&self) -> std::result::Result<(), String> {
        let positive = [("width", self.width), ("height", self.height), ("step", self.step)];
        for (name, value) in positive {
            if !(1..=MAX_FIELD_EXTENT).contains(&value) {
                return Err(format!(
                    "field.{name} must be between 1 and {MAX_FIELD_EXTENT}, got {value}"
                ));
            }
        }
        for (name, value) in [("reach", self.reach), ("margin", self.margin)] {
            if !(0..=MAX_FIELD_EXTENT).contains(&value) {
                return Err(format!(
                    "field.{name} must be between 0 and {MAX_FIELD_EXTENT}, got {value}"
                ));
            }
        }
        Ok(())
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config
            .field
            .check()
            .map_err(|message| GameError::ConfigValue {
                path: path.to_path_buf(),
                message,
            })?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents, path)?;

        // A relative data_dir is relative to the config file, not the cwd.
        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }
        Ok(config)
    }

    /// Loads `explicit` if given; otherwise `adventure.toml` when it exists,
    /// else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        match Self::load(fallback) {
            Err(GameError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, using default configuration", DEFAULT_CONFIG_FILE);
                Ok(Self::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("", Path::new("adventure.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.start_room, "entrance");
        assert_eq!(config.field.width, 600);
        assert_eq!(config.field.height, 400);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let toml = r#"
            start_room = "gate"

            [field]
            step = 10
            seed = 7
        "#;
        let config = GameConfig::from_toml_str(toml, Path::new("adventure.toml")).unwrap();
        assert_eq!(config.start_room, "gate");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.field.step, 10);
        assert_eq!(config.field.seed, Some(7));
        assert_eq!(config.field.reach, 10);
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        let err = GameConfig::from_toml_str("start_room = 3", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, GameError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn out_of_range_field_values_are_rejected() {
        for toml in [
            "[field]\nstep = 2147483647",
            "[field]\nstep = 0",
            "[field]\nwidth = -5",
            "[field]\nheight = 1000001",
            "[field]\nreach = -1",
        ] {
            let err = GameConfig::from_toml_str(toml, Path::new("adventure.toml")).unwrap_err();
            assert!(matches!(err, GameError::ConfigValue { .. }), "accepted: {toml}");
        }

        let err = GameConfig::from_toml_str("[field]\nstep = 0", Path::new("adventure.toml"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config file 'adventure.toml': field.step must be between 1 and 1000000, got 0"
        );
    }

    #[test]
    fn default_field_passes_its_own_check() {
        assert_eq!(FieldConfig::default().check(), Ok(()));
    }

    #[test]
    fn data_dir_is_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(&path, "data_dir = \"worlds/castle\"\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, dir.path().join("worlds/castle"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, GameError::Io { .. }));
    }
}
