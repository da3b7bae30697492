use bevy::app::Plugin;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts, EguiPlugin, EguiPrimaryContextPass,
    egui::{self},
};
use pc_model::{FigureController, FigureSettings, MaterialRole, PoseMode};
use pc_render::{LightingPreset, LightingSettings, OrbitCamera, PointerCapture};
use tracing::debug;

const PANEL_TOGGLE_KEY: KeyCode = KeyCode::F1;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut bevy::app::App) {
        app.add_systems(EguiPrimaryContextPass, control_panel)
            .add_plugins(EguiPlugin::default())
            .init_resource::<ControlPanelState>()
            .add_systems(Startup, init_panel_state);
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControlPanelState {
    pub open: bool,
    /// Edited copy of the coat color; the material is only written on change.
    pub fur_rgb: [f32; 3],
}

impl Default for ControlPanelState {
    fn default() -> Self {
        Self {
            open: true,
            fur_rgb: color_to_rgb(FigureSettings::default().fur_color),
        }
    }
}

pub fn color_to_rgb(color: Color) -> [f32; 3] {
    let srgba = color.to_srgba();
    [srgba.red, srgba.green, srgba.blue]
}

pub fn rgb_to_color(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

pub fn init_panel_state(settings: Res<FigureSettings>, mut state: ResMut<ControlPanelState>) {
    state.fur_rgb = color_to_rgb(settings.fur_color);
}

fn control_panel(
    mut contexts: EguiContexts,
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<ControlPanelState>,
    figure: Option<ResMut<FigureController>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut lighting: ResMut<LightingSettings>,
    mut orbit: ResMut<OrbitCamera>,
    mut capture: ResMut<PointerCapture>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if keys.just_pressed(PANEL_TOGGLE_KEY) {
        state.open = !state.open;
    }

    let mut edited_lighting = lighting.clone();
    let mut auto_rotate = orbit.auto_rotate;
    let mut reset_camera = false;

    if state.open {
        let mut open = true;
        egui::Window::new("Cat")
            .open(&mut open)
            .resizable(false)
            .anchor(egui::Align2::LEFT_TOP, egui::Vec2::new(12.0, 12.0))
            .show(ctx, |ui| {
                if let Some(mut figure) = figure {
                    figure_section(ui, &mut state, &mut figure, &mut materials);
                } else {
                    ui.label("Building figure...");
                }

                ui.separator();
                lighting_section(ui, &mut edited_lighting);

                ui.separator();
                ui.heading("Camera");
                ui.checkbox(&mut auto_rotate, "Auto-rotate");
                if ui.button("Reset camera").clicked() {
                    reset_camera = true;
                }
                ui.add_space(4.0);
                ui.small("Drag to orbit, scroll to zoom, F1 hides this panel.");
            });
        if !open {
            state.open = false;
        }
    }

    if edited_lighting != *lighting {
        *lighting = edited_lighting;
    }
    if auto_rotate != orbit.auto_rotate {
        orbit.auto_rotate = auto_rotate;
    }
    if reset_camera {
        orbit.reset();
    }

    let captured = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    if capture.captured != captured {
        capture.captured = captured;
    }
}

fn figure_section(
    ui: &mut egui::Ui,
    state: &mut ControlPanelState,
    figure: &mut ResMut<FigureController>,
    materials: &mut Assets<StandardMaterial>,
) {
    ui.heading("Figure");

    ui.horizontal(|ui| {
        ui.label("Coat");
        if ui.color_edit_button_rgb(&mut state.fur_rgb).changed() {
            figure.set_fur_color(materials, rgb_to_color(state.fur_rgb));
        }
    });

    let mut wireframe = figure.materials().wireframe(MaterialRole::BlackFur);
    if ui.checkbox(&mut wireframe, "Wireframe fur").changed() {
        figure.toggle_wireframe(wireframe);
        debug!(wireframe, "wireframe toggled");
    }

    let mut pose = figure.pose();
    ui.horizontal(|ui| {
        ui.label("Pose");
        for mode in PoseMode::ALL {
            ui.selectable_value(&mut pose, mode, mode.label());
        }
    });
    if pose != figure.pose() {
        figure.set_pose(pose);
    }
    if ui.button("Reset pose").clicked() {
        figure.reset();
    }
}

fn lighting_section(ui: &mut egui::Ui, lighting: &mut LightingSettings) {
    ui.heading("Lighting");
    egui::ComboBox::from_label("Preset")
        .selected_text(lighting.preset.label())
        .show_ui(ui, |ui| {
            for preset in LightingPreset::ALL {
                ui.selectable_value(&mut lighting.preset, preset, preset.label());
            }
        });
    ui.add(egui::Slider::new(&mut lighting.intensity_scale, 0.0..=3.0).text("Light intensity"));
    ui.add(egui::Slider::new(&mut lighting.ambient_scale, 0.0..=3.0).text("Ambient"));
    ui.checkbox(&mut lighting.shadows_enabled, "Shadows");
}

#[cfg(test)]
mod tests;
