use bevy::ecs::system::RunSystemOnce;
use bevy::pbr::NotShadowCaster;
use bevy::pbr::wireframe::Wireframe;
use bevy::prelude::*;

use super::*;
use crate::materials::{DEFAULT_FUR_COLOR, MaterialRole};
use crate::segment::{MirrorAxis, SegmentShape, primitive_segment};
use crate::settings::{FigureSettings, FurTextureParams};

struct Fixture {
    figure: FigureController,
    materials: Assets<StandardMaterial>,
    images: Assets<Image>,
}

fn small_settings() -> FigureSettings {
    FigureSettings {
        fur_texture: FurTextureParams {
            width: 32,
            height: 32,
            stroke_count: 64,
            ..FurTextureParams::default()
        },
        ..FigureSettings::default()
    }
}

fn build(settings: &FigureSettings) -> Fixture {
    let mut meshes = Assets::<Mesh>::default();
    let mut materials = Assets::<StandardMaterial>::default();
    let mut images = Assets::<Image>::default();
    let figure = FigureController::construct(
        &mut FigureAssets {
            meshes: &mut meshes,
            materials: &mut materials,
            images: &mut images,
        },
        settings,
    );
    Fixture {
        figure,
        materials,
        images,
    }
}

fn figure() -> FigureController {
    build(&small_settings()).figure
}

fn color_of(materials: &Assets<StandardMaterial>, handle: &Handle<StandardMaterial>) -> Color {
    materials.get(handle).expect("material exists").base_color
}

fn assert_euler_close(actual: Quat, expected: (f32, f32, f32)) {
    let (x, y, z) = actual.to_euler(EulerRot::XYZ);
    assert!((x - expected.0).abs() < 1e-4, "x: {x} vs {}", expected.0);
    assert!((y - expected.1).abs() < 1e-4, "y: {y} vs {}", expected.1);
    assert!((z - expected.2).abs() < 1e-4, "z: {z} vs {}", expected.2);
}

#[test]
fn regions_are_built_in_order() {
    let figure = figure();
    let names: Vec<&str> = figure.segments().iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "body",
            "chest",
            "head",
            "muzzle",
            "ear_left",
            "ear_inner_left",
            "ear_right",
            "ear_inner_right",
            "leg_front_left",
            "leg_front_right",
            "leg_back_left",
            "leg_back_right",
            "paw_front_left",
            "paw_front_right",
            "paw_back_left",
            "paw_back_right",
            "tail",
            "eye_left",
            "eye_right",
            "nose",
        ]
    );
    assert_eq!(figure.body().name, "body");
    assert_eq!(figure.tail().name, "tail");
    assert_eq!(figure.whiskers().len(), 2);
}

#[test]
fn idle_has_no_drift() {
    let mut stepped = figure();
    let mut direct = figure();

    for t in [0.0, 0.016, 0.5, 1.25, 3.7] {
        stepped.animate_idle(t);
    }
    stepped.animate_idle(12.5);
    direct.animate_idle(12.5);

    assert_eq!(stepped.body().transform.scale, direct.body().transform.scale);
    assert_eq!(
        stepped.tail().transform.rotation,
        direct.tail().transform.rotation
    );
}

#[test]
fn idle_scale_stays_within_amplitude() {
    let mut figure = figure();
    let low = BODY_BASE_SCALE_Y - BREATH_AMPLITUDE - 1e-6;
    let high = BODY_BASE_SCALE_Y + BREATH_AMPLITUDE + 1e-6;
    for i in -500..500 {
        let t = i as f32 * 0.137;
        figure.animate_idle(t);
        let y = figure.body().transform.scale.y;
        assert!((low..=high).contains(&y), "t={t}: scale.y={y}");
    }
}

#[test]
fn idle_only_touches_body_scale_and_tail_rotation() {
    let mut figure = figure();
    let before = figure.segments().to_vec();
    figure.animate_idle(0.9);
    for (old, new) in before.iter().zip(figure.segments()) {
        match new.name {
            "body" => {
                assert_eq!(old.transform.translation, new.transform.translation);
                assert_eq!(old.transform.rotation, new.transform.rotation);
                assert_eq!(old.transform.scale.x, new.transform.scale.x);
                assert_eq!(old.transform.scale.z, new.transform.scale.z);
            }
            "tail" => {
                assert_eq!(old.transform.translation, new.transform.translation);
                assert_eq!(old.transform.scale, new.transform.scale);
                assert_ne!(old.transform.rotation, new.transform.rotation);
            }
            _ => assert_eq!(old.transform, new.transform, "{} moved", new.name),
        }
    }
}

#[test]
fn extreme_elapsed_times_stay_finite() {
    let mut figure = figure();
    for t in [-1.0e6, -3.5, 0.0, 1.0e9] {
        figure.animate_idle(t);
        assert!(figure.body().transform.scale.is_finite());
        assert!(figure.tail().transform.rotation.is_normalized());
    }
}

#[test]
fn sit_stand_sit_matches_single_sit() {
    let mut cycled = figure();
    cycled.animate_sit();
    cycled.animate_stand();
    cycled.animate_sit();

    let mut once = figure();
    once.animate_sit();

    assert_eq!(cycled.body().transform, once.body().transform);
    assert_eq!(cycled.tail().transform, once.tail().transform);
    assert_eq!(cycled.body().transform.translation.y, SIT_BODY_Y);
    assert_euler_close(cycled.body().transform.rotation, (SIT_BODY_PITCH, 0.0, 0.0));
}

#[test]
fn stand_resets_height_and_pitch() {
    let mut figure = figure();
    figure.animate_sit();
    figure.animate_stand();
    figure.animate_stand();
    assert_eq!(figure.body().transform.translation.y, STAND_BODY_Y);
    assert_eq!(figure.body().transform.rotation, Quat::IDENTITY);
}

#[test]
fn idle_pose_uses_the_standing_base_pose() {
    let mut figure = build(&FigureSettings {
        pose: PoseMode::Sit,
        ..small_settings()
    })
    .figure;
    assert_eq!(figure.body().transform.translation.y, SIT_BODY_Y);

    figure.set_pose(PoseMode::Idle);
    assert_eq!(figure.pose(), PoseMode::Idle);
    assert_eq!(figure.body().transform.translation.y, STAND_BODY_Y);
    assert_eq!(figure.body().transform.rotation, Quat::IDENTITY);
}

#[test]
fn update_only_animates_while_idle() {
    let mut figure = figure();
    figure.set_pose(PoseMode::Sit);
    figure.update(0.8);
    assert_eq!(figure.state().elapsed, 0.8);
    assert_eq!(figure.body().transform.scale, BODY_SCALE);
    assert_eq!(figure.tail().transform.rotation, Quat::IDENTITY);

    figure.set_pose(PoseMode::Idle);
    figure.update(0.8);
    assert_ne!(figure.body().transform.scale.y, BODY_SCALE.y);
    assert_ne!(figure.tail().transform.rotation, Quat::IDENTITY);
}

#[test]
fn unknown_pose_values_fall_back_to_idle() {
    assert_eq!(PoseMode::parse_or_default("sit"), PoseMode::Sit);
    assert_eq!(PoseMode::parse_or_default(" Stand "), PoseMode::Stand);
    assert_eq!(PoseMode::parse_or_default("backflip"), PoseMode::Idle);
    assert_eq!(PoseMode::parse_or_default(""), PoseMode::Idle);
    for mode in PoseMode::ALL {
        assert_eq!(PoseMode::from_options_value(mode.as_options_value()), Some(mode));
    }
}

#[test]
fn fur_color_changes_only_black_fur() {
    let Fixture {
        figure,
        mut materials,
        ..
    } = build(&small_settings());
    let before: Vec<(MaterialRole, Color)> = MaterialRole::ALL
        .into_iter()
        .map(|role| (role, color_of(&materials, figure.materials().handle(role))))
        .collect();
    assert_eq!(before[0].1, DEFAULT_FUR_COLOR);

    let coat = Color::srgb(0.8, 0.4, 0.1);
    figure.set_fur_color(&mut materials, coat);

    for (role, old) in before {
        let now = color_of(&materials, figure.materials().handle(role));
        if role == MaterialRole::BlackFur {
            assert_eq!(now, coat);
        } else {
            assert_eq!(now, old, "{} changed", role.label());
        }
    }
    for segment in figure.segments() {
        let color = color_of(&materials, &segment.material);
        assert_eq!(
            color == coat,
            segment.role == MaterialRole::BlackFur,
            "{}",
            segment.name
        );
    }
}

#[test]
fn wireframe_touches_only_fur_roles() {
    let mut figure = figure();
    figure.toggle_wireframe(true);
    for role in MaterialRole::ALL {
        assert_eq!(figure.materials().wireframe(role), role.is_fur(), "{}", role.label());
    }
    figure.toggle_wireframe(false);
    for role in MaterialRole::ALL {
        assert!(!figure.materials().wireframe(role));
    }
}

#[test]
fn one_material_instance_per_role() {
    let Fixture {
        figure, materials, ..
    } = build(&small_settings());
    assert_eq!(materials.len(), MaterialRole::ALL.len());

    let set = figure.materials();
    for (i, a) in MaterialRole::ALL.into_iter().enumerate() {
        for b in MaterialRole::ALL.into_iter().skip(i + 1) {
            assert_ne!(set.handle(a), set.handle(b));
        }
    }
    for segment in figure.segments() {
        assert_eq!(&segment.material, set.handle(segment.role), "{}", segment.name);
    }
    for whiskers in figure.whiskers() {
        assert_eq!(&whiskers.material, set.handle(MaterialRole::WhiskerLine));
    }
}

#[test]
fn fur_detail_lands_on_fur_materials_only() {
    let Fixture {
        figure,
        materials,
        images,
    } = build(&small_settings());
    assert_eq!(images.len(), 1);
    let image = images.get(figure.fur_normal_map()).expect("normal map exists");
    assert_eq!(image.width(), 32);

    for role in MaterialRole::ALL {
        let material = materials.get(figure.materials().handle(role)).unwrap();
        if role.is_fur() {
            assert_eq!(
                material.normal_map_texture.as_ref(),
                Some(figure.fur_normal_map())
            );
        } else {
            assert!(material.normal_map_texture.is_none());
        }
    }
}

#[test]
fn right_ear_is_an_exact_reflection() {
    let figure = figure();
    let left = figure.segment("ear_left").unwrap();
    let right = figure.segment("ear_right").unwrap();

    let l = left.transform.translation;
    assert_eq!(right.transform.translation, Vec3::new(-l.x, l.y, l.z));
    let q = left.transform.rotation;
    assert_eq!(right.transform.rotation, Quat::from_xyzw(q.x, -q.y, -q.z, q.w));
    assert_eq!(right.transform.scale, left.transform.scale);

    let (x, y, z) = q.to_euler(EulerRot::XYZ);
    assert_euler_close(right.transform.rotation, (x, -y, -z));
    assert!(right.shares_geometry_with(left));
    assert_eq!(right.material, left.material);
}

#[test]
fn mutating_a_twin_leaves_the_original_alone() {
    let mut figure = figure();
    let left_before = figure.segment("ear_left").unwrap().transform;

    let right = figure.segment_mut("ear_right").unwrap();
    right.transform.translation.y += 1.0;
    right.transform.rotation = Quat::from_rotation_z(1.0);
    right.transform.scale = Vec3::splat(3.0);

    assert_eq!(figure.segment("ear_left").unwrap().transform, left_before);
}

#[test]
fn mirroring_reflects_on_every_axis() {
    let mut meshes = Assets::<Mesh>::default();
    let mut materials = Assets::<StandardMaterial>::default();
    let set = MaterialSet::new(&mut materials);
    let (a, b, c) = (0.3, -0.2, 0.5);
    let source = primitive_segment(
        &mut meshes,
        "nose_tip",
        SegmentShape::cone(0.1, 0.2, 8),
        Transform::from_xyz(1.0, 2.0, 3.0)
            .with_rotation(Quat::from_euler(EulerRot::XYZ, a, b, c))
            .with_scale(Vec3::new(1.0, 2.0, 0.5)),
        &set,
        MaterialRole::Nose,
    );

    let cases = [
        (MirrorAxis::X, Vec3::new(-1.0, 2.0, 3.0), (a, -b, -c)),
        (MirrorAxis::Y, Vec3::new(1.0, -2.0, 3.0), (-a, b, -c)),
        (MirrorAxis::Z, Vec3::new(1.0, 2.0, -3.0), (-a, -b, c)),
    ];
    for (axis, translation, euler) in cases {
        let twin = source.mirrored("twin", axis);
        assert_eq!(twin.transform.translation, translation, "{axis:?}");
        assert_euler_close(twin.transform.rotation, euler);
        assert_eq!(twin.transform.scale, source.transform.scale);
        assert!(twin.shares_geometry_with(&source));
    }
    assert_eq!(meshes.len(), 1);
}

#[test]
fn legs_are_tubes_along_the_leg_curve() {
    let figure = figure();
    for name in [
        "leg_front_left",
        "leg_front_right",
        "leg_back_left",
        "leg_back_right",
    ] {
        let leg = figure.segment(name).unwrap();
        match &*leg.shape {
            SegmentShape::Tube(tube) => {
                assert_eq!(tube.curve.points(), &LEG_CURVE[..]);
                assert_eq!(tube.radius, LEG_RADIUS);
                assert!(tube.capped);
            }
            other => panic!("{name} is a {}", other.kind_label()),
        }
    }
    let front_right = figure.segment("leg_front_right").unwrap();
    assert_eq!(front_right.transform.translation, Vec3::new(-0.22, 0.55, 0.45));
    assert_eq!(figure.tail().transform.translation, TAIL_ROOT);
    assert!(matches!(
        &*figure.tail().shape,
        SegmentShape::Tube(t) if t.curve.points() == &TAIL_CURVE[..]
    ));
}

#[test]
fn settings_are_applied_at_construction() {
    let coat = Color::srgb(1.0, 0.5, 0.0);
    let Fixture {
        figure, materials, ..
    } = build(&FigureSettings {
        fur_color: coat,
        pose: PoseMode::Stand,
        wireframe: true,
        ..small_settings()
    });
    assert_eq!(figure.materials().fur_color(&materials), Some(coat));
    assert_eq!(figure.pose(), PoseMode::Stand);
    assert!(figure.materials().wireframe(MaterialRole::BlackFur));
    assert!(figure.materials().wireframe(MaterialRole::WhiteFur));
    assert!(!figure.materials().wireframe(MaterialRole::Eye));
}

#[test]
fn reset_restores_the_default_pose() {
    let mut figure = figure();
    figure.set_pose(PoseMode::Sit);
    figure.animate_idle(2.2);
    figure.reset();

    assert_eq!(figure.state(), AnimationState::default());
    assert_eq!(
        figure.body().transform,
        Transform::from_translation(BODY_POSITION).with_scale(BODY_SCALE)
    );
    assert_eq!(figure.tail().transform.rotation, Quat::IDENTITY);
}

#[test]
fn spawn_builds_one_root_with_every_part() {
    let mut world = World::new();
    world.insert_resource(build(&FigureSettings {
        wireframe: true,
        ..small_settings()
    })
    .figure);
    assert!(world.resource::<FigureController>().root_node().is_none());

    let spawn = |mut commands: Commands, mut figure: ResMut<FigureController>| {
        figure.spawn(&mut commands)
    };
    let root = world.run_system_once(spawn).expect("spawn system runs");

    let figure = world.resource::<FigureController>();
    assert_eq!(figure.root_node(), Some(root));
    let expected_children = figure.segments().len() + figure.whiskers().len();
    let fur_segments = figure
        .segments()
        .iter()
        .filter(|segment| segment.role.is_fur())
        .count();
    let shadowless = figure
        .segments()
        .iter()
        .filter(|segment| !segment.cast_shadows)
        .count()
        + figure.whiskers().len();

    assert!(world.get::<FigureRoot>(root).is_some());
    let children = world.get::<Children>(root).expect("root has children");
    assert_eq!(children.len(), expected_children);

    let mut segments = world.query::<&SegmentIndex>();
    assert_eq!(segments.iter(&world).count(), expected_children - 2);
    let mut wireframes = world.query_filtered::<Entity, With<Wireframe>>();
    assert_eq!(wireframes.iter(&world).count(), fur_segments);
    let mut no_shadow = world.query_filtered::<Entity, With<NotShadowCaster>>();
    assert_eq!(no_shadow.iter(&world).count(), shadowless);
}

#[test]
fn spawning_twice_reuses_the_root() {
    let mut world = World::new();
    world.insert_resource(figure());
    let spawn = |mut commands: Commands, mut figure: ResMut<FigureController>| {
        figure.spawn(&mut commands)
    };
    let first = world.run_system_once(spawn).unwrap();
    let second = world.run_system_once(spawn).unwrap();
    assert_eq!(first, second);
    assert_eq!(world.query::<&FigureRoot>().iter(&world).count(), 1);
}
