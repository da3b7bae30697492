use bevy::pbr::wireframe::WireframePlugin;
use bevy::prelude::*;
use pc_model::FigureSettings;

mod camera;
mod components;
mod figure;
mod input;
pub mod lighting;
mod stage;

pub use camera::OrbitCamera;
pub use components::{FillLight, KeyLight, StageRoot, ViewerCamera};
pub use figure::{animate_figure, apply_wireframe, spawn_figure, sync_segment_transforms};
pub use input::{OrbitInputSettings, PointerCapture};
pub use lighting::{LightingPreset, LightingSettings};
pub use stage::StageSettings;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(WireframePlugin::default())
            .init_resource::<FigureSettings>()
            .init_resource::<StageSettings>()
            .init_resource::<LightingSettings>()
            .init_resource::<OrbitCamera>()
            .init_resource::<OrbitInputSettings>()
            .init_resource::<PointerCapture>()
            .add_systems(
                Startup,
                (
                    stage::setup_stage,
                    lighting::spawn_lights,
                    camera::spawn_camera,
                    figure::spawn_figure,
                ),
            )
            .add_systems(
                Update,
                (
                    (input::orbit_camera_input, camera::apply_orbit_camera).chain(),
                    lighting::apply_lighting_settings,
                    (
                        figure::animate_figure,
                        figure::sync_segment_transforms,
                        figure::apply_wireframe,
                    )
                        .chain(),
                ),
            );
    }
}
