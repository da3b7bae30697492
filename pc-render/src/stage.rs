use bevy::prelude::*;

use crate::components::StageRoot;

#[derive(Resource, Debug, Clone)]
pub struct StageSettings {
    pub ground_size: f32,
    pub ground_color: Color,
    pub background_color: Color,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            ground_size: 12.0,
            ground_color: Color::srgb(0.36, 0.35, 0.33),
            background_color: Color::srgb(0.11, 0.12, 0.14),
        }
    }
}

/// Ground plane under the cat. It only receives shadows.
pub fn setup_stage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StageSettings>,
) {
    commands.insert_resource(ClearColor(settings.background_color));

    let root = commands
        .spawn((
            Name::new("Stage"),
            StageRoot,
            Transform::default(),
            GlobalTransform::default(),
            Visibility::Visible,
        ))
        .id();

    commands.entity(root).with_children(|parent| {
        let ground_mesh = Mesh::from(Plane3d::default());
        parent.spawn((
            Mesh3d(meshes.add(ground_mesh)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: settings.ground_color,
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::from_scale(Vec3::splat(settings.ground_size)),
        ));
    });
}
