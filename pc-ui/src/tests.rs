use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use pc_model::FigureSettings;

use super::*;

#[test]
fn panel_starts_from_the_figure_settings() {
    let mut world = World::new();
    world.insert_resource(FigureSettings {
        fur_color: Color::srgb(0.9, 0.5, 0.1),
        ..FigureSettings::default()
    });
    world.init_resource::<ControlPanelState>();
    world.run_system_once(init_panel_state).unwrap();

    let state = world.resource::<ControlPanelState>();
    assert!(state.open);
    let [r, g, b] = state.fur_rgb;
    assert!((r - 0.9).abs() < 1e-6);
    assert!((g - 0.5).abs() < 1e-6);
    assert!((b - 0.1).abs() < 1e-6);
}

#[test]
fn rgb_conversion_keeps_srgb_values() {
    let rgb = [0.25, 0.5, 0.75];
    assert_eq!(color_to_rgb(rgb_to_color(rgb)), rgb);
    assert_eq!(
        ControlPanelState::default().fur_rgb,
        color_to_rgb(FigureSettings::default().fur_color)
    );
}
