//! Viewer configuration (TOML file + CLI overrides).

use std::io;
use std::path::{Path, PathBuf};

use bevy::color::{Color, Srgba};
use pc_model::{FigureSettings, FurTextureParams, PoseMode};
use pc_render::{LightingPreset, LightingSettings, OrbitCamera, StageSettings};
use serde::Deserialize;
use tracing::warn;

use crate::cli::Args;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("unknown lighting preset {0:?}")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub fur_texture: FurTextureConfig,
    #[serde(default)]
    pub lighting: LightingConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Procedural Cat".to_string(),
            width: 1280,
            height: 800,
            vsync: true,
            background: "#1c1f24".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// `None` keeps the built-in coat color.
    pub fur_color: Option<String>,
    pub pose: String,
    pub wireframe: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            fur_color: None,
            pose: PoseMode::default().as_options_value().to_string(),
            wireframe: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FurTextureConfig {
    pub width: u32,
    pub height: u32,
    pub strokes: u32,
    pub seed: u64,
    pub tiling: f32,
}

impl Default for FurTextureConfig {
    fn default() -> Self {
        let params = FurTextureParams::default();
        Self {
            width: params.width,
            height: params.height,
            strokes: params.stroke_count,
            seed: params.seed,
            tiling: params.tiling,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub preset: String,
    pub intensity: f32,
    pub ambient: f32,
    pub shadows: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        let settings = LightingSettings::default();
        Self {
            preset: settings.preset.as_options_value().to_string(),
            intensity: settings.intensity_scale,
            ambient: settings.ambient_scale,
            shadows: settings.shadows_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let orbit = OrbitCamera::default();
        Self {
            distance: orbit.distance,
            auto_rotate: orbit.auto_rotate,
            auto_rotate_speed: orbit.auto_rotate_speed,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// CLI flags win over file values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(color) = &args.fur_color {
            self.figure.fur_color = Some(color.clone());
        }
        if let Some(pose) = &args.pose {
            self.figure.pose = pose.clone();
        }
        if args.wireframe {
            self.figure.wireframe = true;
        }
        if let Some(seed) = args.seed {
            self.fur_texture.seed = seed;
        }
        if let Some(preset) = &args.lighting {
            self.lighting.preset = preset.clone();
        }
    }

    pub fn figure_settings(&self) -> Result<FigureSettings, ConfigError> {
        let defaults = FigureSettings::default();
        let fur_color = match &self.figure.fur_color {
            Some(value) => parse_hex_color(value)?,
            None => defaults.fur_color,
        };
        let pose = PoseMode::from_options_value(&self.figure.pose).unwrap_or_else(|| {
            warn!(pose = %self.figure.pose, "unknown pose; using idle");
            PoseMode::default()
        });
        let fur_texture = FurTextureParams {
            width: self.fur_texture.width,
            height: self.fur_texture.height,
            stroke_count: self.fur_texture.strokes,
            seed: self.fur_texture.seed,
            tiling: self.fur_texture.tiling,
        }
        .sanitized();

        Ok(FigureSettings {
            fur_color,
            pose,
            wireframe: self.figure.wireframe,
            fur_texture,
        })
    }

    pub fn lighting_settings(&self) -> Result<LightingSettings, ConfigError> {
        let preset = LightingPreset::from_options_value(&self.lighting.preset)
            .ok_or_else(|| ConfigError::UnknownPreset(self.lighting.preset.clone()))?;
        Ok(LightingSettings {
            preset,
            intensity_scale: self.lighting.intensity,
            ambient_scale: self.lighting.ambient,
            shadows_enabled: self.lighting.shadows,
        })
    }

    pub fn stage_settings(&self) -> Result<StageSettings, ConfigError> {
        Ok(StageSettings {
            background_color: parse_hex_color(&self.window.background)?,
            ..StageSettings::default()
        })
    }

    pub fn orbit_camera(&self) -> OrbitCamera {
        let mut orbit = OrbitCamera {
            auto_rotate: self.camera.auto_rotate,
            auto_rotate_speed: self.camera.auto_rotate_speed,
            ..OrbitCamera::default()
        };
        orbit.distance = if self.camera.distance.is_finite() {
            self.camera.distance.clamp(orbit.min_distance, orbit.max_distance)
        } else {
            orbit.distance
        };
        orbit
    }
}

/// Accepts `#rgb`, `#rrggbb` and the alpha variants, with or without `#`.
pub fn parse_hex_color(value: &str) -> Result<Color, ConfigError> {
    Srgba::hex(value.trim())
        .map(Color::from)
        .map_err(|_| ConfigError::InvalidColor(value.to_string()))
}
