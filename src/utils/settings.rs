use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::*;
use crate::player::character::PhysicsParams;
use crate::world::generator::GeneratorConfig;

pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameSettings {
    pub world: WorldSettings,
    pub generation: GeneratorConfig,
    pub physics: PhysicsParams,
    pub simulation: SimulationSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldSettings {
    pub width: usize,
    pub height: usize,
    /// Fixed seed for reproducible worlds. A random one is picked when absent.
    pub seed: Option<u64>,
    pub spawn_x: f64,
    pub spawn_y: f64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            seed: None,
            spawn_x: PLAYER_SPAWN.0,
            spawn_y: PLAYER_SPAWN.1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub tick_rate: u32,
    pub max_ticks_per_frame: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub columns: usize,
    pub rows: usize,
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            columns: VIEWPORT_COLUMNS,
            rows: VIEWPORT_ROWS,
            color: false,
        }
    }
}

impl GameSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.world.width == 0 || self.world.height == 0 {
            return Err(SettingsError::Invalid {
                field: "world",
                reason: format!(
                    "dimensions must be at least 1x1, got {}x{}",
                    self.world.width, self.world.height
                ),
            });
        }
        for (field, chance) in [
            ("generation.cave_chance", self.generation.cave_chance),
            ("generation.tree_chance", self.generation.tree_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{chance} is not a probability"),
                });
            }
        }
        for (field, value) in [
            ("generation.amplitude", self.generation.amplitude),
            ("generation.base_height_ratio", self.generation.base_height_ratio),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{value} is not a finite number"),
                });
            }
        }
        let smoothness = self.generation.smoothness;
        if !(smoothness.is_finite() && smoothness > 0.0) {
            return Err(SettingsError::Invalid {
                field: "generation.smoothness",
                reason: format!("{smoothness} must be a positive finite number"),
            });
        }
        if self.simulation.tick_rate == 0 {
            return Err(SettingsError::Invalid {
                field: "simulation.tick_rate",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// `<config dir>/grreencraft/settings.toml` for the current user.
pub fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "grreencraft")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

pub fn load_settings(path: &Path) -> Result<GameSettings, SettingsError> {
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    GameSettings::from_toml_str(&text)
}
