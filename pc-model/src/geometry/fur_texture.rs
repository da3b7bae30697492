use std::f32::consts::TAU;

use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;

/// Tangent-space "straight up" normal.
pub const FLAT_NORMAL: [u8; 4] = [128, 128, 255, 255];

pub const MAX_FUR_TEXTURE_SIZE: u32 = 4096;
pub const MAX_FUR_STROKES: u32 = 1_000_000;

const STROKE_MIN_LEN: f32 = 3.0;
const STROKE_MAX_LEN: f32 = 8.0;
/// How far a stroke may tilt the red/green channels away from 128.
const STROKE_TILT: u8 = 40;
const STROKE_MIN_BLUE: u8 = 210;

/// Paints the RGBA8 pixels of a fur normal map.
///
/// The background is `FLAT_NORMAL`; each stroke is a short line with a random
/// start, direction, length and color. Strokes wrap around the edges so the
/// result tiles seamlessly. A zero dimension yields no pixels; the stroke
/// count is capped at `MAX_FUR_STROKES`.
pub fn paint_fur_normals(
    width: u32,
    height: u32,
    stroke_count: u32,
    rng: &mut impl Rng,
) -> Vec<u8> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut data = FLAT_NORMAL.repeat(width as usize * height as usize);

    for _ in 0..stroke_count.min(MAX_FUR_STROKES) {
        let x0 = rng.gen_range(0.0..width as f32);
        let y0 = rng.gen_range(0.0..height as f32);
        let angle = rng.gen_range(0.0..TAU);
        let length = rng.gen_range(STROKE_MIN_LEN..STROKE_MAX_LEN);
        let color = [
            rng.gen_range(128 - STROKE_TILT..=128 + STROKE_TILT),
            rng.gen_range(128 - STROKE_TILT..=128 + STROKE_TILT),
            rng.gen_range(STROKE_MIN_BLUE..=255),
            255,
        ];

        let (dy, dx) = angle.sin_cos();
        let steps = length.ceil() as u32;
        for s in 0..=steps {
            let px = (x0 + dx * s as f32).round() as i64;
            let py = (y0 + dy * s as f32).round() as i64;
            let px = px.rem_euclid(width as i64) as usize;
            let py = py.rem_euclid(height as i64) as usize;
            let offset = (py * width as usize + px) * 4;
            data[offset..offset + 4].copy_from_slice(&color);
        }
    }
    data
}

/// Builds the repeating fur normal map image.
///
/// Dimensions are clamped to `1..=MAX_FUR_TEXTURE_SIZE`.
pub fn build_fur_normal_texture(
    width: u32,
    height: u32,
    stroke_count: u32,
    rng: &mut impl Rng,
) -> Image {
    let width = width.clamp(1, MAX_FUR_TEXTURE_SIZE);
    let height = height.clamp(1, MAX_FUR_TEXTURE_SIZE);
    let data = paint_fur_normals(width, height, stroke_count, rng);

    let mut image = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        // Normal maps hold vectors, not colors: no sRGB decoding.
        TextureFormat::Rgba8Unorm,
        RenderAssetUsages::default(),
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        address_mode_w: ImageAddressMode::Repeat,
        ..ImageSamplerDescriptor::linear()
    });
    image
}
