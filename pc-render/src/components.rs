use bevy::prelude::*;

#[derive(Component)]
pub struct ViewerCamera;

/// Shadow-casting directional light driven by the lighting preset.
#[derive(Component)]
pub struct KeyLight;

#[derive(Component)]
pub struct FillLight;

#[derive(Component)]
pub struct StageRoot;
