use bevy::prelude::*;
use pc_model::FigureSettings;
use pc_render::{LightingSettings, OrbitCamera, StageSettings};

/// Seeds the resources the render and UI plugins start from.
pub struct ViewerCorePlugin {
    pub figure: FigureSettings,
    pub lighting: LightingSettings,
    pub stage: StageSettings,
    pub orbit: OrbitCamera,
}

impl Plugin for ViewerCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.figure.clone())
            .insert_resource(self.lighting.clone())
            .insert_resource(self.stage.clone())
            .insert_resource(self.orbit.clone())
            .add_systems(Update, exit_on_escape);
    }
}

fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
