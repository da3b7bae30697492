//! Cat proportions and the region builders that place every segment.
//!
//! Coordinates: +Y up, the cat faces +Z, its left side is +X, paws rest on
//! Y = 0. Left-side parts are authored here and mirrored to the right.

use bevy::prelude::*;

use crate::geometry::{WhiskerSet, build_whisker_set};
use crate::materials::{MaterialRole, MaterialSet};
use crate::segment::{MirrorAxis, Segment, SegmentShape, curve_tube_segment, primitive_segment};

pub const BODY_POSITION: Vec3 = Vec3::new(0.0, 0.75, 0.0);
pub const BODY_SCALE: Vec3 = Vec3::new(0.9, 0.8, 1.5);
const BODY_SHAPE: SegmentShape = SegmentShape::sphere(0.5, 32, 24);

const CHEST_SHAPE: SegmentShape = SegmentShape::sphere(0.3, 24, 16);
const CHEST_POSITION: Vec3 = Vec3::new(0.0, 0.68, 0.48);
const CHEST_SCALE: Vec3 = Vec3::new(1.0, 1.1, 0.8);

const HEAD_SHAPE: SegmentShape = SegmentShape::sphere(0.36, 32, 24);
const HEAD_POSITION: Vec3 = Vec3::new(0.0, 1.18, 0.82);
const HEAD_SCALE: Vec3 = Vec3::new(1.0, 0.9, 0.95);

const MUZZLE_SHAPE: SegmentShape = SegmentShape::sphere(0.14, 24, 16);
const MUZZLE_POSITION: Vec3 = Vec3::new(0.0, 1.07, 1.1);
const MUZZLE_SCALE: Vec3 = Vec3::new(1.25, 0.85, 0.8);

const EAR_SHAPE: SegmentShape = SegmentShape::cone(0.13, 0.28, 24);
const EAR_POSITION: Vec3 = Vec3::new(0.19, 1.48, 0.8);
const INNER_EAR_SHAPE: SegmentShape = SegmentShape::cone(0.085, 0.19, 24);
const INNER_EAR_POSITION: Vec3 = Vec3::new(0.195, 1.46, 0.835);
/// Euler XYZ: slight backwards lean, tilted outwards.
const EAR_ROTATION: Vec3 = Vec3::new(-0.15, 0.0, -0.35);

/// Hip → knee → foot, relative to the hip. Gives the leg a slight bend.
pub const LEG_CURVE: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, -0.25, 0.05),
    Vec3::new(0.0, -0.45, 0.0),
];
pub const LEG_RADIUS: f32 = 0.09;
const LEG_RADIAL_SEGMENTS: u32 = 16;
const LEG_TUBULAR_SEGMENTS: u32 = 24;
const LEG_FRONT_HIP: Vec3 = Vec3::new(0.22, 0.55, 0.45);
const LEG_BACK_HIP: Vec3 = Vec3::new(0.22, 0.55, -0.45);

const PAW_SHAPE: SegmentShape = SegmentShape::sphere(0.1, 16, 12);
const PAW_SCALE: Vec3 = Vec3::new(1.0, 0.55, 1.3);
const PAW_FRONT_POSITION: Vec3 = Vec3::new(0.22, 0.08, 0.49);
const PAW_BACK_POSITION: Vec3 = Vec3::new(0.22, 0.08, -0.41);

/// Base → tip, relative to the tail root. S-curve with a raised tip.
pub const TAIL_CURVE: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, 0.12, -0.28),
    Vec3::new(0.0, 0.45, -0.42),
    Vec3::new(0.0, 0.78, -0.3),
];
const TAIL_RADIUS: f32 = 0.055;
const TAIL_RADIAL_SEGMENTS: u32 = 12;
const TAIL_TUBULAR_SEGMENTS: u32 = 48;
pub const TAIL_ROOT: Vec3 = Vec3::new(0.0, 0.88, -0.68);

const EYE_SHAPE: SegmentShape = SegmentShape::sphere(0.075, 24, 16);
const EYE_POSITION: Vec3 = Vec3::new(0.14, 1.24, 1.1);
const EYE_SCALE: Vec3 = Vec3::new(1.0, 1.15, 0.6);

const NOSE_SHAPE: SegmentShape = SegmentShape::sphere(0.04, 16, 12);
const NOSE_POSITION: Vec3 = Vec3::new(0.0, 1.13, 1.205);
const NOSE_SCALE: Vec3 = Vec3::new(1.3, 0.85, 0.9);

pub const WHISKERS_PER_SIDE: u32 = 3;
pub const WHISKER_LENGTH: f32 = 0.42;
const WHISKER_ORIGIN: Vec3 = Vec3::new(0.11, 1.06, 1.17);

/// Accumulates segments while the regions are built in order.
pub(crate) struct FigureBuilder<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a MaterialSet,
    segments: Vec<Segment>,
}

impl<'a> FigureBuilder<'a> {
    pub(crate) fn new(meshes: &'a mut Assets<Mesh>, materials: &'a MaterialSet) -> Self {
        Self {
            meshes,
            materials,
            segments: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Vec<Segment> {
        self.segments
    }

    fn push(&mut self, segment: Segment) -> usize {
        self.segments.push(segment);
        self.segments.len() - 1
    }

    fn primitive(
        &mut self,
        name: &'static str,
        shape: SegmentShape,
        transform: Transform,
        role: MaterialRole,
    ) -> usize {
        let segment = primitive_segment(self.meshes, name, shape, transform, self.materials, role);
        self.push(segment)
    }

    fn tube(
        &mut self,
        name: &'static str,
        points: &[Vec3],
        radius: f32,
        segments: (u32, u32),
        role: MaterialRole,
    ) -> usize {
        let segment = curve_tube_segment(
            self.meshes,
            name,
            points,
            radius,
            segments.0,
            segments.1,
            self.materials,
            role,
        );
        self.push(segment)
    }

    fn mirror(&mut self, index: usize, name: &'static str) -> usize {
        let twin = self.segments[index].mirrored(name, MirrorAxis::X);
        self.push(twin)
    }

    fn edit(&mut self, index: usize, f: impl FnOnce(Segment) -> Segment) {
        let segment = self.segments[index].clone();
        self.segments[index] = f(segment);
    }

    /// Torso plus the white chest patch. Returns the torso index.
    pub(crate) fn build_body(&mut self) -> usize {
        let body = self.primitive(
            "body",
            BODY_SHAPE,
            Transform::from_translation(BODY_POSITION).with_scale(BODY_SCALE),
            MaterialRole::BlackFur,
        );
        self.primitive(
            "chest",
            CHEST_SHAPE,
            Transform::from_translation(CHEST_POSITION).with_scale(CHEST_SCALE),
            MaterialRole::WhiteFur,
        );
        body
    }

    pub(crate) fn build_head(&mut self) {
        self.primitive(
            "head",
            HEAD_SHAPE,
            Transform::from_translation(HEAD_POSITION).with_scale(HEAD_SCALE),
            MaterialRole::BlackFur,
        );
        self.primitive(
            "muzzle",
            MUZZLE_SHAPE,
            Transform::from_translation(MUZZLE_POSITION).with_scale(MUZZLE_SCALE),
            MaterialRole::WhiteFur,
        );
    }

    pub(crate) fn build_ears(&mut self) {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            EAR_ROTATION.x,
            EAR_ROTATION.y,
            EAR_ROTATION.z,
        );
        let ear = self.primitive(
            "ear_left",
            EAR_SHAPE,
            Transform::from_translation(EAR_POSITION).with_rotation(rotation),
            MaterialRole::BlackFur,
        );
        let inner = self.primitive(
            "ear_inner_left",
            INNER_EAR_SHAPE,
            Transform::from_translation(INNER_EAR_POSITION).with_rotation(rotation),
            MaterialRole::InnerEar,
        );
        self.edit(inner, |segment| segment.with_shadows(false, true));
        self.mirror(ear, "ear_right");
        self.mirror(inner, "ear_inner_right");
    }

    pub(crate) fn build_legs_and_paws(&mut self) {
        let legs = [
            ("leg_front_left", "leg_front_right", LEG_FRONT_HIP),
            ("leg_back_left", "leg_back_right", LEG_BACK_HIP),
        ];
        for (left, right, hip) in legs {
            let leg = self.tube(
                left,
                &LEG_CURVE,
                LEG_RADIUS,
                (LEG_RADIAL_SEGMENTS, LEG_TUBULAR_SEGMENTS),
                MaterialRole::BlackFur,
            );
            self.edit(leg, |segment| segment.with_translation(hip));
            self.mirror(leg, right);
        }

        let paws = [
            ("paw_front_left", "paw_front_right", PAW_FRONT_POSITION),
            ("paw_back_left", "paw_back_right", PAW_BACK_POSITION),
        ];
        for (left, right, position) in paws {
            let paw = self.primitive(
                left,
                PAW_SHAPE,
                Transform::from_translation(position).with_scale(PAW_SCALE),
                MaterialRole::WhiteFur,
            );
            self.mirror(paw, right);
        }
    }

    /// Returns the tail index.
    pub(crate) fn build_tail(&mut self) -> usize {
        let tail = self.tube(
            "tail",
            &TAIL_CURVE,
            TAIL_RADIUS,
            (TAIL_RADIAL_SEGMENTS, TAIL_TUBULAR_SEGMENTS),
            MaterialRole::BlackFur,
        );
        self.edit(tail, |segment| segment.with_translation(TAIL_ROOT));
        tail
    }

    pub(crate) fn build_eyes(&mut self) {
        let eye = self.primitive(
            "eye_left",
            EYE_SHAPE,
            Transform::from_translation(EYE_POSITION).with_scale(EYE_SCALE),
            MaterialRole::Eye,
        );
        self.edit(eye, |segment| segment.with_shadows(false, true));
        self.mirror(eye, "eye_right");
    }

    pub(crate) fn build_nose(&mut self) {
        let nose = self.primitive(
            "nose",
            NOSE_SHAPE,
            Transform::from_translation(NOSE_POSITION).with_scale(NOSE_SCALE),
            MaterialRole::Nose,
        );
        self.edit(nose, |segment| segment.with_shadows(false, true));
    }

    pub(crate) fn build_whiskers(&mut self) -> Vec<WhiskerSet> {
        [
            ("whiskers_left", WHISKER_ORIGIN),
            ("whiskers_right", MirrorAxis::X.reflect_translation(WHISKER_ORIGIN)),
        ]
        .into_iter()
        .map(|(name, origin)| WhiskerSet {
            name,
            mesh: self
                .meshes
                .add(build_whisker_set(WHISKERS_PER_SIDE, WHISKER_LENGTH, origin)),
            material: self.materials.handle(MaterialRole::WhiskerLine).clone(),
            strand_count: WHISKERS_PER_SIDE,
        })
        .collect()
    }
}
