use bevy::pbr::wireframe::Wireframe;
use bevy::prelude::*;
use pc_model::{FigureAssets, FigureController, FigureSettings, SegmentIndex, SegmentRole};
use tracing::warn;

/// Builds the cat from the current `FigureSettings`, spawns it and hands the
/// controller to the world as a resource.
pub fn spawn_figure(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    settings: Res<FigureSettings>,
) {
    let mut figure = FigureController::construct(
        &mut FigureAssets {
            meshes: &mut meshes,
            materials: &mut materials,
            images: &mut images,
        },
        &settings,
    );
    figure.spawn(&mut commands);
    commands.insert_resource(figure);
}

pub fn animate_figure(time: Res<Time>, figure: Option<ResMut<FigureController>>) {
    let Some(mut figure) = figure else {
        return;
    };
    let elapsed = time.elapsed_secs();
    if figure.pose().is_continuous() {
        figure.update(elapsed);
    } else {
        // Static poses only record the clock; no transform changed.
        figure.bypass_change_detection().update(elapsed);
    }
}

/// Copies controller transforms onto the spawned segment entities.
pub fn sync_segment_transforms(
    figure: Option<Res<FigureController>>,
    mut parts: Query<(&SegmentIndex, &mut Transform)>,
) {
    let Some(figure) = figure else {
        return;
    };
    if !figure.is_changed() {
        return;
    }

    for (index, mut transform) in &mut parts {
        let Some(segment) = figure.segments().get(index.0) else {
            warn!(index = index.0, "segment entity without a matching segment");
            continue;
        };
        if *transform != segment.transform {
            *transform = segment.transform;
        }
    }
}

/// Mirrors the per-role wireframe flags onto Bevy's `Wireframe` component.
pub fn apply_wireframe(
    mut commands: Commands,
    figure: Option<Res<FigureController>>,
    parts: Query<(Entity, &SegmentRole, Has<Wireframe>)>,
) {
    let Some(figure) = figure else {
        return;
    };
    if !figure.is_changed() {
        return;
    }

    for (entity, role, has_wireframe) in &parts {
        let wanted = figure.materials().wireframe(role.0);
        if wanted && !has_wireframe {
            commands.entity(entity).insert(Wireframe);
        } else if !wanted && has_wireframe {
            commands.entity(entity).remove::<Wireframe>();
        }
    }
}
