use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::camera::OrbitCamera;

/// Pixels of wheel travel treated as one line.
const PIXELS_PER_LINE: f32 = 40.0;

/// Set by the UI while egui wants the pointer, so drags on the panel do not
/// move the camera.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PointerCapture {
    pub captured: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct OrbitInputSettings {
    /// Radians per pixel of drag.
    pub drag_sensitivity: f32,
    /// Fraction of the distance per wheel line.
    pub zoom_step: f32,
}

impl Default for OrbitInputSettings {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.008,
            zoom_step: 0.1,
        }
    }
}

pub fn orbit_camera_input(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    mut wheel_events: EventReader<MouseWheel>,
    capture: Res<PointerCapture>,
    settings: Res<OrbitInputSettings>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if capture.captured {
        motion_events.clear();
        wheel_events.clear();
        return;
    }

    let mut drag = Vec2::ZERO;
    for ev in motion_events.read() {
        drag += ev.delta;
    }
    let mut scroll = 0.0;
    for ev in wheel_events.read() {
        scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_LINE,
        };
    }

    if buttons.pressed(MouseButton::Left) && drag != Vec2::ZERO {
        orbit.orbit(drag * settings.drag_sensitivity);
    }
    if scroll != 0.0 {
        orbit.zoom(zoom_factor(scroll, settings.zoom_step));
    }
}

/// Scrolling up (positive) moves the camera closer.
pub(crate) fn zoom_factor(scroll: f32, step: f32) -> f32 {
    (1.0 - scroll * step).clamp(0.5, 1.5)
}
