use bevy::prelude::*;

use crate::components::ViewerCamera;

const PITCH_LIMIT: f32 = 1.45;

/// Orbit rig around the cat. The camera transform is derived from this every
/// time it changes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    /// Radians per second.
    pub auto_rotate_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(0.0, 0.8, 0.2),
            yaw: 0.7,
            pitch: 0.25,
            distance: 4.0,
            min_distance: 1.5,
            max_distance: 12.0,
            auto_rotate: false,
            auto_rotate_speed: 0.3,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }

    /// `delta` is in radians: x turns around the focus, y tilts.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x;
        self.pitch = (self.pitch + delta.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Multiplies the distance by `factor`, clamped to the allowed range.
    pub fn zoom(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Back to the default framing. Auto-rotate is a user preference and stays.
    pub fn reset(&mut self) {
        *self = Self {
            auto_rotate: self.auto_rotate,
            auto_rotate_speed: self.auto_rotate_speed,
            ..Self::default()
        };
    }
}

pub fn spawn_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Name::new("ViewerCamera"),
        Camera3d::default(),
        ViewerCamera,
        orbit.transform(),
    ));
}

pub fn apply_orbit_camera(
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
    mut cameras: Query<&mut Transform, With<ViewerCamera>>,
) {
    if orbit.auto_rotate {
        let speed = orbit.auto_rotate_speed;
        orbit.yaw += speed * time.delta_secs();
    }
    if !orbit.is_changed() {
        return;
    }

    let transform = orbit.transform();
    for mut camera in &mut cameras {
        *camera = transform;
    }
}
