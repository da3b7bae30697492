use bevy::prelude::*;
use tracing::debug;

use crate::components::{FillLight, KeyLight};

/// Directional lights only use their orientation; the offset is cosmetic.
const LIGHT_DISTANCE: f32 = 10.0;
const MAX_INTENSITY_SCALE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightingPreset {
    #[default]
    Studio,
    Warm,
    Dramatic,
}

impl LightingPreset {
    pub const ALL: [Self; 3] = [Self::Studio, Self::Warm, Self::Dramatic];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::Warm => "Warm",
            Self::Dramatic => "Dramatic",
        }
    }

    pub const fn as_options_value(self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::Warm => "warm",
            Self::Dramatic => "dramatic",
        }
    }

    pub fn from_options_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "studio" | "neutral" => Some(Self::Studio),
            "warm" => Some(Self::Warm),
            "dramatic" | "rim" => Some(Self::Dramatic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LightingPresetParams {
    /// Direction pointing from the scene towards the key light.
    key_dir: Vec3,
    key_illuminance: f32,
    key_color: Color,
    fill_dir: Vec3,
    fill_illuminance: f32,
    fill_color: Color,
    ambient_brightness: f32,
    ambient_color: Color,
}

fn preset_params(preset: LightingPreset) -> LightingPresetParams {
    match preset {
        LightingPreset::Studio => LightingPresetParams {
            key_dir: Vec3::new(0.45, 0.85, 0.55).normalize(),
            key_illuminance: 9_000.0,
            key_color: Color::WHITE,
            fill_dir: Vec3::new(-0.6, 0.4, -0.3).normalize(),
            fill_illuminance: 2_500.0,
            fill_color: Color::srgb(0.85, 0.9, 1.0),
            ambient_brightness: 180.0,
            ambient_color: Color::srgb(0.9, 0.92, 1.0),
        },
        LightingPreset::Warm => LightingPresetParams {
            key_dir: Vec3::new(0.65, 0.6, 0.35).normalize(),
            key_illuminance: 7_500.0,
            key_color: Color::srgb(1.0, 0.86, 0.7),
            fill_dir: Vec3::new(-0.5, 0.5, -0.4).normalize(),
            fill_illuminance: 1_800.0,
            fill_color: Color::srgb(0.8, 0.75, 0.9),
            ambient_brightness: 150.0,
            ambient_color: Color::srgb(1.0, 0.9, 0.8),
        },
        LightingPreset::Dramatic => LightingPresetParams {
            key_dir: Vec3::new(-0.3, 0.5, -0.8).normalize(),
            key_illuminance: 12_000.0,
            key_color: Color::WHITE,
            fill_dir: Vec3::new(0.7, 0.2, 0.6).normalize(),
            fill_illuminance: 400.0,
            fill_color: Color::srgb(0.6, 0.7, 1.0),
            ambient_brightness: 40.0,
            ambient_color: Color::srgb(0.7, 0.75, 0.9),
        },
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightingSettings {
    pub preset: LightingPreset,
    /// Multiplier on both directional lights.
    pub intensity_scale: f32,
    pub ambient_scale: f32,
    pub shadows_enabled: bool,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            preset: LightingPreset::default(),
            intensity_scale: 1.0,
            ambient_scale: 1.0,
            shadows_enabled: true,
        }
    }
}

/// Final light values after applying the overrides to the preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLighting {
    pub key_transform: Transform,
    pub key_illuminance: f32,
    pub key_color: Color,
    pub fill_transform: Transform,
    pub fill_illuminance: f32,
    pub fill_color: Color,
    pub ambient_brightness: f32,
    pub ambient_color: Color,
    pub shadows_enabled: bool,
}

impl LightingSettings {
    pub fn resolve(&self) -> ResolvedLighting {
        let params = preset_params(self.preset);
        let scale = sanitize_scale(self.intensity_scale);
        let ambient_scale = sanitize_scale(self.ambient_scale);
        ResolvedLighting {
            key_transform: light_transform(params.key_dir),
            key_illuminance: params.key_illuminance * scale,
            key_color: params.key_color,
            fill_transform: light_transform(params.fill_dir),
            fill_illuminance: params.fill_illuminance * scale,
            fill_color: params.fill_color,
            ambient_brightness: params.ambient_brightness * ambient_scale,
            ambient_color: params.ambient_color,
            shadows_enabled: self.shadows_enabled,
        }
    }
}

fn sanitize_scale(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, MAX_INTENSITY_SCALE)
    } else {
        1.0
    }
}

fn light_transform(dir: Vec3) -> Transform {
    Transform::from_translation(dir * LIGHT_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y)
}

pub fn spawn_lights(mut commands: Commands, settings: Res<LightingSettings>) {
    let lighting = settings.resolve();

    commands.spawn((
        Name::new("KeyLight"),
        KeyLight,
        DirectionalLight {
            shadows_enabled: lighting.shadows_enabled,
            illuminance: lighting.key_illuminance,
            color: lighting.key_color,
            ..default()
        },
        lighting.key_transform,
    ));
    commands.spawn((
        Name::new("FillLight"),
        FillLight,
        DirectionalLight {
            shadows_enabled: false,
            illuminance: lighting.fill_illuminance,
            color: lighting.fill_color,
            ..default()
        },
        lighting.fill_transform,
    ));
    commands.insert_resource(AmbientLight {
        color: lighting.ambient_color,
        brightness: lighting.ambient_brightness,
        affects_lightmapped_meshes: true,
    });
}

pub fn apply_lighting_settings(
    settings: Res<LightingSettings>,
    mut ambient: ResMut<AmbientLight>,
    mut key_lights: Query<
        (&mut DirectionalLight, &mut Transform),
        (With<KeyLight>, Without<FillLight>),
    >,
    mut fill_lights: Query<
        (&mut DirectionalLight, &mut Transform),
        (With<FillLight>, Without<KeyLight>),
    >,
) {
    if !settings.is_changed() {
        return;
    }

    let lighting = settings.resolve();
    for (mut light, mut transform) in &mut key_lights {
        light.illuminance = lighting.key_illuminance;
        light.color = lighting.key_color;
        light.shadows_enabled = lighting.shadows_enabled;
        *transform = lighting.key_transform;
    }
    for (mut light, mut transform) in &mut fill_lights {
        light.illuminance = lighting.fill_illuminance;
        light.color = lighting.fill_color;
        *transform = lighting.fill_transform;
    }
    ambient.color = lighting.ambient_color;
    ambient.brightness = lighting.ambient_brightness;

    debug!(
        preset = settings.preset.as_options_value(),
        key = lighting.key_illuminance,
        shadows = lighting.shadows_enabled,
        "lighting applied"
    );
}
