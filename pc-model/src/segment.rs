use std::sync::Arc;

use bevy::prelude::*;
use bevy::render::mesh::{ConeMeshBuilder, MeshBuilder, SphereKind, SphereMeshBuilder};
use tracing::warn;

use crate::geometry::TubeShape;
use crate::materials::{MaterialRole, MaterialSet};

/// Geometry descriptor of a segment. Dimensions are in figure units.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentShape {
    Sphere {
        radius: f32,
        sectors: u32,
        stacks: u32,
    },
    /// Cone centered on its midpoint, tip towards +Y.
    Cone {
        radius: f32,
        height: f32,
        resolution: u32,
    },
    Tube(TubeShape),
}

impl SegmentShape {
    pub const fn sphere(radius: f32, sectors: u32, stacks: u32) -> Self {
        Self::Sphere {
            radius,
            sectors,
            stacks,
        }
    }

    pub const fn cone(radius: f32, height: f32, resolution: u32) -> Self {
        Self::Cone {
            radius,
            height,
            resolution,
        }
    }

    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Cone { .. } => "cone",
            Self::Tube(_) => "tube",
        }
    }

    pub fn mesh(&self) -> Mesh {
        match self {
            Self::Sphere {
                radius,
                sectors,
                stacks,
            } => SphereMeshBuilder::new(
                *radius,
                SphereKind::Uv {
                    sectors: (*sectors).max(3),
                    stacks: (*stacks).max(2),
                },
            )
            .build(),
            Self::Cone {
                radius,
                height,
                resolution,
            } => ConeMeshBuilder::new(*radius, *height, (*resolution).max(3)).build(),
            Self::Tube(tube) => tube.mesh(),
        }
    }
}

/// One named anatomical piece of the figure.
///
/// `shape`, `mesh` and `material` may be shared with a mirrored twin; the
/// transform never is.
#[derive(Debug, Clone)]
pub struct Segment {
    pub name: &'static str,
    pub shape: Arc<SegmentShape>,
    pub mesh: Handle<Mesh>,
    pub role: MaterialRole,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
    pub cast_shadows: bool,
    pub receive_shadows: bool,
}

/// Which coordinate gets reflected when mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorAxis {
    X,
    Y,
    Z,
}

impl MirrorAxis {
    pub fn reflect_translation(self, v: Vec3) -> Vec3 {
        match self {
            Self::X => Vec3::new(-v.x, v.y, v.z),
            Self::Y => Vec3::new(v.x, -v.y, v.z),
            Self::Z => Vec3::new(v.x, v.y, -v.z),
        }
    }

    /// Rotation seen through the mirror plane: the component along the
    /// mirrored axis is kept, the other two flip sign. For Euler angles this
    /// negates the angles about the two non-mirrored axes.
    pub fn reflect_rotation(self, q: Quat) -> Quat {
        match self {
            Self::X => Quat::from_xyzw(q.x, -q.y, -q.z, q.w),
            Self::Y => Quat::from_xyzw(-q.x, q.y, -q.z, q.w),
            Self::Z => Quat::from_xyzw(-q.x, -q.y, q.z, q.w),
        }
    }
}

/// Sphere or cone segment with the given local transform.
pub fn primitive_segment(
    meshes: &mut Assets<Mesh>,
    name: &'static str,
    shape: SegmentShape,
    transform: Transform,
    materials: &MaterialSet,
    role: MaterialRole,
) -> Segment {
    Segment::from_shape(meshes, name, shape, materials, role).with_transform(transform)
}

/// Tube swept through `control_points`, placed at the identity transform.
pub fn curve_tube_segment(
    meshes: &mut Assets<Mesh>,
    name: &'static str,
    control_points: &[Vec3],
    radius: f32,
    radial_segments: u32,
    tubular_segments: u32,
    materials: &MaterialSet,
    role: MaterialRole,
) -> Segment {
    let shape = SegmentShape::Tube(TubeShape::new(
        control_points,
        radius,
        radial_segments,
        tubular_segments,
    ));
    Segment::from_shape(meshes, name, shape, materials, role)
}

impl Segment {
    fn from_shape(
        meshes: &mut Assets<Mesh>,
        name: &'static str,
        shape: SegmentShape,
        materials: &MaterialSet,
        role: MaterialRole,
    ) -> Self {
        let mut mesh = shape.mesh();
        // The fur normal map needs tangents.
        if let Err(err) = mesh.generate_tangents() {
            warn!(segment = name, "failed to generate tangents: {err}");
        }
        Self {
            name,
            shape: Arc::new(shape),
            mesh: meshes.add(mesh),
            role,
            material: materials.handle(role).clone(),
            transform: Transform::IDENTITY,
            cast_shadows: true,
            receive_shadows: true,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.transform.translation = translation;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadows = cast;
        self.receive_shadows = receive;
        self
    }

    /// Bilateral twin reflected on `axis`.
    ///
    /// Geometry and material are shared with `self`; the transform is a fresh
    /// copy, so later changes to either twin stay local.
    pub fn mirrored(&self, name: &'static str, axis: MirrorAxis) -> Self {
        let transform = Transform {
            translation: axis.reflect_translation(self.transform.translation),
            rotation: axis.reflect_rotation(self.transform.rotation),
            scale: self.transform.scale,
        };
        Self {
            name,
            shape: Arc::clone(&self.shape),
            mesh: self.mesh.clone(),
            role: self.role,
            material: self.material.clone(),
            transform,
            cast_shadows: self.cast_shadows,
            receive_shadows: self.receive_shadows,
        }
    }

    pub fn shares_geometry_with(&self, other: &Segment) -> bool {
        Arc::ptr_eq(&self.shape, &other.shape) && self.mesh == other.mesh
    }
}
