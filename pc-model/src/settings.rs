use bevy::prelude::*;

use crate::figure::PoseMode;
use crate::geometry::{MAX_FUR_STROKES, MAX_FUR_TEXTURE_SIZE};
use crate::materials::DEFAULT_FUR_COLOR;

/// Construction-time customization of the figure.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FigureSettings {
    pub fur_color: Color,
    pub pose: PoseMode,
    pub wireframe: bool,
    pub fur_texture: FurTextureParams,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            fur_color: DEFAULT_FUR_COLOR,
            pose: PoseMode::default(),
            wireframe: false,
            fur_texture: FurTextureParams::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurTextureParams {
    pub width: u32,
    pub height: u32,
    pub stroke_count: u32,
    pub seed: u64,
    /// Repeats of the texture across UV space.
    pub tiling: f32,
}

impl Default for FurTextureParams {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            stroke_count: 6000,
            seed: 7,
            tiling: 4.0,
        }
    }
}

impl FurTextureParams {
    /// Dimensions clamped to `1..=MAX_FUR_TEXTURE_SIZE`, strokes to
    /// `MAX_FUR_STROKES`, tiling forced positive.
    pub fn sanitized(self) -> Self {
        Self {
            width: self.width.clamp(1, MAX_FUR_TEXTURE_SIZE),
            height: self.height.clamp(1, MAX_FUR_TEXTURE_SIZE),
            stroke_count: self.stroke_count.min(MAX_FUR_STROKES),
            tiling: if self.tiling.is_finite() && self.tiling > 0.0 {
                self.tiling
            } else {
                1.0
            },
            ..self
        }
    }
}

#[cfg(test)]
mod tests;
