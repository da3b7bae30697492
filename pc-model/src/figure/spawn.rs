use bevy::pbr::wireframe::Wireframe;
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use tracing::{debug, warn};

use super::FigureController;
use crate::materials::MaterialRole;

#[derive(Component, Debug)]
pub struct FigureRoot;

/// Index of the segment an entity renders, in `FigureController::segments` order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentIndex(pub usize);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRole(pub MaterialRole);

#[derive(Component, Debug)]
pub struct WhiskerLines;

impl FigureController {
    /// Spawns the root entity with one child per segment and whisker set.
    ///
    /// Returns the existing root if the figure was already spawned.
    pub fn spawn(&mut self, commands: &mut Commands) -> Entity {
        if let Some(root) = self.root {
            warn!("cat figure already spawned; reusing its root");
            return root;
        }

        let root = commands
            .spawn((
                Name::new("CatFigureRoot"),
                FigureRoot,
                Transform::IDENTITY,
                GlobalTransform::default(),
                Visibility::Visible,
                InheritedVisibility::default(),
                ViewVisibility::default(),
            ))
            .id();

        for (idx, segment) in self.segments.iter().enumerate() {
            let mut entity = commands.spawn((
                Name::new(format!("CatSegment[{}]", segment.name)),
                Mesh3d(segment.mesh.clone()),
                MeshMaterial3d(segment.material.clone()),
                segment.transform,
                GlobalTransform::default(),
                Visibility::Inherited,
                InheritedVisibility::default(),
                ViewVisibility::default(),
                SegmentIndex(idx),
                SegmentRole(segment.role),
            ));
            if !segment.cast_shadows {
                entity.insert(NotShadowCaster);
            }
            if !segment.receive_shadows {
                entity.insert(NotShadowReceiver);
            }
            if self.materials.wireframe(segment.role) {
                entity.insert(Wireframe);
            }
            let child = entity.id();
            commands.entity(root).add_child(child);
        }

        for whiskers in &self.whiskers {
            let child = commands
                .spawn((
                    Name::new(format!("CatWhiskers[{}]", whiskers.name)),
                    Mesh3d(whiskers.mesh.clone()),
                    MeshMaterial3d(whiskers.material.clone()),
                    Transform::IDENTITY,
                    GlobalTransform::default(),
                    Visibility::Inherited,
                    InheritedVisibility::default(),
                    ViewVisibility::default(),
                    WhiskerLines,
                    NotShadowCaster,
                    NotShadowReceiver,
                ))
                .id();
            commands.entity(root).add_child(child);
        }

        debug!(
            segments = self.segments.len(),
            whisker_sets = self.whiskers.len(),
            "cat figure spawned"
        );
        self.root = Some(root);
        root
    }
}
