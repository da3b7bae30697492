use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

/// Total angle (radians) the strands of one set fan across.
pub const WHISKER_FAN_ANGLE: f32 = 0.5;
/// Total vertical distance the strand anchors are spread over.
pub const WHISKER_VERTICAL_SPREAD: f32 = 0.03;
/// Fraction of the strand length the tip is swept back along -Z.
pub const WHISKER_SWEEP_BACK: f32 = 0.15;

/// One side's whiskers, drawn as a single line-list batch.
#[derive(Debug, Clone)]
pub struct WhiskerSet {
    pub name: &'static str,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub strand_count: u32,
}

/// Anchor/tip pairs for `count` strands starting near `origin`.
///
/// Strands point away from the face on the side given by the sign of
/// `origin.x`. Strand `i` is tilted by an angle that grows linearly across the
/// set, and anchors are stacked vertically so no two strands coincide.
pub fn whisker_endpoints(count: u32, length: f32, origin: Vec3) -> Vec<(Vec3, Vec3)> {
    let side = if origin.x < 0.0 { -1.0 } else { 1.0 };
    (0..count)
        .map(|i| {
            let f = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.5
            };
            let angle = (f - 0.5) * WHISKER_FAN_ANGLE;
            let anchor = origin + Vec3::Y * ((f - 0.5) * WHISKER_VERTICAL_SPREAD);
            let tip = anchor
                + Vec3::new(
                    side * length * angle.cos(),
                    length * angle.sin(),
                    -length * WHISKER_SWEEP_BACK,
                );
            (anchor, tip)
        })
        .collect()
}

/// Builds the `LineList` mesh holding `2 * count` endpoints.
pub fn build_whisker_set(count: u32, length: f32, origin: Vec3) -> Mesh {
    let endpoints = whisker_endpoints(count, length, origin);
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(endpoints.len() * 2);
    for (anchor, tip) in &endpoints {
        positions.push(anchor.to_array());
        positions.push(tip.to_array());
    }
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let uvs = vec![[0.0, 0.0]; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}
