//! The assembled cat and everything that mutates it after construction.

mod pose;
mod regions;
mod spawn;

pub use pose::*;
pub use regions::{
    BODY_POSITION, BODY_SCALE, LEG_CURVE, LEG_RADIUS, TAIL_CURVE, TAIL_ROOT, WHISKER_LENGTH,
    WHISKERS_PER_SIDE,
};
pub use spawn::*;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::geometry::{WhiskerSet, build_fur_normal_texture};
use crate::materials::MaterialSet;
use crate::segment::Segment;
use crate::settings::FigureSettings;
use regions::FigureBuilder;

/// Asset stores the figure is built into.
pub struct FigureAssets<'a> {
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
    pub images: &'a mut Assets<Image>,
}

/// Owns the cat: its segments, whiskers, shared materials and pose state.
///
/// Segment transforms are only ever written through the methods here. The
/// render layer copies them onto the spawned entities.
#[derive(Resource, Debug)]
pub struct FigureController {
    segments: Vec<Segment>,
    whiskers: Vec<WhiskerSet>,
    materials: MaterialSet,
    fur_normal_map: Handle<Image>,
    body: usize,
    tail: usize,
    state: AnimationState,
    root: Option<Entity>,
}

impl FigureController {
    /// Builds every region once, in the fixed order body → head → ears →
    /// legs+paws → tail → eyes → nose → whiskers → fur detail, then applies
    /// the initial pose and customization from `settings`.
    pub fn construct(assets: &mut FigureAssets, settings: &FigureSettings) -> Self {
        let mut materials = MaterialSet::new(assets.materials);

        let mut builder = FigureBuilder::new(assets.meshes, &materials);
        let body = builder.build_body();
        builder.build_head();
        builder.build_ears();
        builder.build_legs_and_paws();
        let tail = builder.build_tail();
        builder.build_eyes();
        builder.build_nose();
        let whiskers = builder.build_whiskers();
        let segments = builder.finish();

        let params = settings.fur_texture.sanitized();
        let mut rng = StdRng::seed_from_u64(params.seed);
        let fur_normal_map = assets.images.add(build_fur_normal_texture(
            params.width,
            params.height,
            params.stroke_count,
            &mut rng,
        ));
        materials.apply_fur_detail(assets.materials, &fur_normal_map, params.tiling);
        debug!(
            width = params.width,
            height = params.height,
            strokes = params.stroke_count,
            seed = params.seed,
            "fur normal map generated"
        );

        materials.set_fur_color(assets.materials, settings.fur_color);
        materials.set_wireframe(settings.wireframe);

        let mut figure = Self {
            segments,
            whiskers,
            materials,
            fur_normal_map,
            body,
            tail,
            state: AnimationState::default(),
            root: None,
        };
        figure.set_pose(settings.pose);

        info!(
            segments = figure.segments.len(),
            whisker_sets = figure.whiskers.len(),
            pose = figure.state.mode.as_options_value(),
            "cat figure constructed"
        );
        figure
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.name == name)
    }

    pub fn segment_mut(&mut self, name: &str) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|segment| segment.name == name)
    }

    pub fn body(&self) -> &Segment {
        &self.segments[self.body]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.tail]
    }

    pub fn whiskers(&self) -> &[WhiskerSet] {
        &self.whiskers
    }

    pub fn materials(&self) -> &MaterialSet {
        &self.materials
    }

    pub fn fur_normal_map(&self) -> &Handle<Image> {
        &self.fur_normal_map
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn pose(&self) -> PoseMode {
        self.state.mode
    }

    /// Root entity of the spawned figure, `None` until `spawn` ran.
    pub fn root_node(&self) -> Option<Entity> {
        self.root
    }

    /// Breathing and tail sway as absolute functions of `elapsed`.
    pub fn animate_idle(&mut self, elapsed: f32) {
        self.segments[self.body].transform.scale.y = breathing_scale_y(elapsed);
        self.segments[self.tail].transform.rotation = tail_sway(elapsed);
    }

    pub fn animate_sit(&mut self) {
        let body = &mut self.segments[self.body].transform;
        body.translation.y = SIT_BODY_Y;
        body.rotation = Quat::from_rotation_x(SIT_BODY_PITCH);
    }

    pub fn animate_stand(&mut self) {
        let body = &mut self.segments[self.body].transform;
        body.translation.y = STAND_BODY_Y;
        body.rotation = Quat::from_rotation_x(STAND_BODY_PITCH);
    }

    /// Switches pose mode and applies its base pose.
    ///
    /// Idle uses the standing base pose; the breathing overlay comes from
    /// `update` on every frame.
    pub fn set_pose(&mut self, mode: PoseMode) {
        self.state.mode = mode;
        match mode {
            PoseMode::Sit => self.animate_sit(),
            PoseMode::Idle | PoseMode::Stand => self.animate_stand(),
        }
        debug!(pose = mode.as_options_value(), "pose changed");
    }

    /// Per-frame entry point for the host loop.
    pub fn update(&mut self, elapsed: f32) {
        self.state.elapsed = elapsed;
        if self.state.mode.is_continuous() {
            self.animate_idle(elapsed);
        }
    }

    /// Recolors every black-fur segment at once through the shared material.
    pub fn set_fur_color(&self, materials: &mut Assets<StandardMaterial>, color: Color) {
        self.materials.set_fur_color(materials, color);
    }

    pub fn toggle_wireframe(&mut self, enabled: bool) {
        self.materials.set_wireframe(enabled);
    }

    /// Back to the default pose with breathing and tail sway at rest.
    pub fn reset(&mut self) {
        self.segments[self.body].transform.scale = BODY_SCALE;
        self.segments[self.tail].transform.rotation = Quat::IDENTITY;
        self.state = AnimationState::default();
        self.set_pose(PoseMode::default());
    }
}

#[cfg(test)]
mod tests;
