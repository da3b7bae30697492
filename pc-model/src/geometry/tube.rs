use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use tracing::warn;

use super::{ControlCurve, CurveFrame};

pub const MIN_RADIAL_SEGMENTS: u32 = 3;
pub const MAX_RADIAL_SEGMENTS: u32 = 256;
pub const MIN_TUBULAR_SEGMENTS: u32 = 1;
pub const MAX_TUBULAR_SEGMENTS: u32 = 1024;
const MIN_RADIUS: f32 = 0.001;

/// A tube swept along a `ControlCurve`.
///
/// Higher segment counts trade triangle count for smoothness. Ends are capped
/// so the surface is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeShape {
    pub curve: ControlCurve,
    pub radius: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    pub capped: bool,
}

impl TubeShape {
    pub fn new(
        control_points: &[Vec3],
        radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
    ) -> Self {
        Self {
            curve: ControlCurve::new(control_points),
            radius,
            radial_segments,
            tubular_segments,
            capped: true,
        }
    }

    pub fn open(mut self) -> Self {
        self.capped = false;
        self
    }

    /// Segment counts after clamping, as `(radial, tubular)`.
    pub fn resolution(&self) -> (u32, u32) {
        (
            self.radial_segments
                .clamp(MIN_RADIAL_SEGMENTS, MAX_RADIAL_SEGMENTS),
            self.tubular_segments
                .clamp(MIN_TUBULAR_SEGMENTS, MAX_TUBULAR_SEGMENTS),
        )
    }

    pub fn mesh(&self) -> Mesh {
        if self.curve.is_degenerate() {
            warn!(
                points = self.curve.points().len(),
                "tube curve needs at least two control points; sweeping a degenerate tube"
            );
        }
        let radius = if self.radius.is_finite() && self.radius > 0.0 {
            self.radius
        } else {
            warn!(radius = self.radius, "tube radius must be > 0.0, clamping");
            MIN_RADIUS
        };
        let (radial, tubular) = self.resolution();
        let frames = self.curve.frames(tubular);

        let mut buffers = TubeBuffers::default();
        let ring = radial + 1;
        for (j, frame) in frames.iter().enumerate() {
            let u = j as f32 / tubular as f32;
            for r in 0..=radial {
                let dir = ring_direction(frame, r, radial);
                buffers.push(
                    frame.point + dir * radius,
                    dir,
                    [u, r as f32 / radial as f32],
                );
            }
        }

        for j in 0..tubular {
            for r in 0..radial {
                let a = j * ring + r;
                let b = (j + 1) * ring + r;
                let c = (j + 1) * ring + r + 1;
                let d = j * ring + r + 1;
                buffers.indices.extend_from_slice(&[a, d, b, d, c, b]);
            }
        }

        if self.capped {
            if let (Some(first), Some(last)) = (frames.first(), frames.last()) {
                buffers.add_cap(first, radius, radial, false);
                buffers.add_cap(last, radius, radial, true);
            }
        }

        buffers.into_mesh()
    }
}

/// Unit offset from the centerline for radial step `r`.
///
/// The seam column (`r == radial`) reuses angle zero so both seam vertices
/// land on the exact same position.
fn ring_direction(frame: &CurveFrame, r: u32, radial: u32) -> Vec3 {
    let theta = (r % radial) as f32 / radial as f32 * TAU;
    frame.normal * theta.cos() + frame.binormal * theta.sin()
}

#[derive(Default)]
struct TubeBuffers {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl TubeBuffers {
    fn push(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push(uv);
        index
    }

    fn add_cap(&mut self, frame: &CurveFrame, radius: f32, radial: u32, at_end: bool) {
        let normal = if at_end { frame.tangent } else { -frame.tangent };
        let center = self.push(frame.point, normal, [0.5, 0.5]);
        for r in 0..=radial {
            let dir = ring_direction(frame, r, radial);
            let theta = r as f32 / radial as f32 * TAU;
            self.push(
                frame.point + dir * radius,
                normal,
                [0.5 + 0.5 * theta.cos(), 0.5 + 0.5 * theta.sin()],
            );
        }
        for r in 0..radial {
            let a = center + 1 + r;
            let b = a + 1;
            // Fan winds counter-clockwise when seen from outside the cap.
            if at_end {
                self.indices.extend_from_slice(&[center, a, b]);
            } else {
                self.indices.extend_from_slice(&[center, b, a]);
            }
        }
    }

    fn into_mesh(self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs);
        mesh.insert_indices(Indices::U32(self.indices));
        mesh
    }
}
