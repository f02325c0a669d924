use crate::engine::loading::image_loader::{ImageBatch, ImageOutcome};
use crate::engine::systems::frame_loop::{FrameLoop, ViewKind, ViewTeardownEvent};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::render::mesh::PlaneMeshBuilder;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};
use constants::path::SHOWCASE_TEXTURE_PATHS;
use constants::showcase::*;

#[derive(Resource, Default)]
pub struct ShowcaseAnimation {
    pub textures: ImageBatch,
    /// Per texture: spawned as a card or skipped after a failed load.
    pub settled: Vec<bool>,
    pub frame_loop: FrameLoop,
    /// Pointer position in [-1, 1], y up.
    pub pointer: Vec2,
    /// Current scene rotation: x is pitch, y is yaw.
    pub rotation: Vec2,
}

#[derive(Component)]
pub struct ShowcaseCamera;

/// Parent of everything that rotates with the pointer.
#[derive(Component)]
pub struct ShowcaseRoot;

#[derive(Component, Debug, Clone)]
pub struct ShowcaseCard {
    pub index: usize,
    pub base_y: f32,
    pub base_rotation_y: f32,
    pub rotation_z: f32,
}

pub fn showcase_float_offset(time: f32, index: usize) -> f32 {
    (time * FLOAT_SPEED + index as f32 * FLOAT_PHASE_STEP).sin() * FLOAT_AMPLITUDE
}

pub fn showcase_wobble(time: f32, index: usize) -> f32 {
    (time * WOBBLE_RATE + index as f32 * WOBBLE_INDEX_OFFSET).sin() * WOBBLE_AMPLITUDE
}

/// Map a cursor position in logical pixels to [-1, 1] on both axes, y up.
pub fn normalize_pointer(position: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        position.x / size.x * 2.0 - 1.0,
        -(position.y / size.y) * 2.0 + 1.0,
    )
}

/// Target scene rotation (pitch, yaw) for a normalized pointer.
pub fn pointer_target_rotation(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.y * POINTER_PITCH_RANGE, pointer.x * POINTER_YAW_RANGE)
}

pub fn damp_towards(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

fn srgb(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

pub struct CardShowcasePlugin;

impl Plugin for CardShowcasePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(srgb(SHOWCASE_BACKGROUND)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .add_event::<ViewTeardownEvent>()
            .add_systems(Startup, setup_showcase)
            .add_systems(
                Update,
                (
                    spawn_loaded_showcase_cards,
                    track_showcase_pointer,
                    animate_showcase,
                    teardown_showcase,
                )
                    .chain(),
            );
    }
}

fn setup_showcase(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let textures = ImageBatch::load(&asset_server, &SHOWCASE_TEXTURE_PATHS);
    commands.insert_resource(ShowcaseAnimation {
        textures,
        settled: vec![false; SHOWCASE_TEXTURE_PATHS.len()],
        ..default()
    });

    let background = srgb(SHOWCASE_BACKGROUND);
    commands.spawn((
        ShowcaseCamera,
        Camera3d::default(),
        Camera {
            order: 0,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(CAMERA_TARGET, Vec3::Y),
        DistanceFog {
            color: background,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));

    let floor_mesh = meshes.add(PlaneMeshBuilder::from_size(Vec2::new(FLOOR_WIDTH, FLOOR_DEPTH)));
    let floor_material = materials.add(StandardMaterial {
        base_color: srgb(FLOOR_COLOR).with_alpha(FLOOR_OPACITY),
        metallic: FLOOR_METALLIC,
        perceptual_roughness: FLOOR_ROUGHNESS,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands
        .spawn((ShowcaseRoot, Transform::default(), Visibility::default()))
        .with_children(|root| {
            root.spawn((
                SpotLight {
                    intensity: KEY_LIGHT_INTENSITY,
                    outer_angle: KEY_LIGHT_OUTER_ANGLE,
                    inner_angle: KEY_LIGHT_OUTER_ANGLE * KEY_LIGHT_INNER_RATIO,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
            ));

            for accent in ACCENT_LIGHTS.iter() {
                root.spawn((
                    PointLight {
                        color: srgb(accent.color),
                        intensity: accent.intensity,
                        ..default()
                    },
                    Transform::from_translation(accent.position),
                ));
            }

            root.spawn((
                Mesh3d(floor_mesh),
                MeshMaterial3d(floor_material),
                Transform::from_xyz(0.0, FLOOR_HEIGHT, 0.0),
            ));
        });

    info!("Showcase scene initialised");
}

/// Textures arrive independently; each becomes a card as soon as it loads.
fn spawn_loaded_showcase_cards(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    showcase: Option<ResMut<ShowcaseAnimation>>,
    roots: Query<Entity, With<ShowcaseRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(mut showcase) = showcase else {
        return;
    };
    if !showcase.frame_loop.is_running() || showcase.settled.iter().all(|s| *s) {
        return;
    }
    let Ok(root) = roots.single() else {
        return;
    };

    let outcomes = showcase.textures.outcomes(&asset_server);
    for (index, outcome) in outcomes.into_iter().enumerate() {
        if showcase.settled.get(index).copied().unwrap_or(true) {
            continue;
        }
        match outcome {
            ImageOutcome::Pending => continue,
            ImageOutcome::Failed => {
                warn!(
                    "Showcase texture {} failed to load, skipping card",
                    SHOWCASE_TEXTURE_PATHS[index]
                );
            }
            ImageOutcome::Loaded => {
                let (Some(texture), Some(placement)) =
                    (showcase.textures.handle(index).cloned(), SHOWCASE_CARDS.get(index))
                else {
                    continue;
                };
                let mesh = meshes.add(Rectangle::new(CARD_PLANE_WIDTH, CARD_PLANE_HEIGHT));
                let material = materials.add(StandardMaterial {
                    base_color_texture: Some(texture),
                    metallic: CARD_METALLIC,
                    perceptual_roughness: CARD_ROUGHNESS,
                    alpha_mode: AlphaMode::Blend,
                    double_sided: true,
                    cull_mode: None,
                    ..default()
                });

                let card = commands
                    .spawn((
                        ShowcaseCard {
                            index,
                            base_y: placement.position.y,
                            base_rotation_y: placement.rotation_y,
                            rotation_z: placement.rotation_z,
                        },
                        Mesh3d(mesh),
                        MeshMaterial3d(material),
                        Transform::from_translation(placement.position)
                            .with_rotation(Quat::from_euler(
                                EulerRot::XYZ,
                                0.0,
                                placement.rotation_y,
                                placement.rotation_z,
                            ))
                            .with_scale(Vec3::splat(placement.scale)),
                    ))
                    .id();
                commands.entity(root).add_child(card);
                info!("Showcase card {} placed", index);
            }
        }
        showcase.settled[index] = true;
    }
}

fn track_showcase_pointer(
    mut moved: EventReader<CursorMoved>,
    mut left: EventReader<CursorLeft>,
    windows: Query<&Window, With<PrimaryWindow>>,
    showcase: Option<ResMut<ShowcaseAnimation>>,
) {
    let Some(mut showcase) = showcase else {
        moved.clear();
        left.clear();
        return;
    };

    if let Some(event) = moved.read().last() {
        if let Ok(window) = windows.get(event.window) {
            showcase.pointer =
                normalize_pointer(event.position, Vec2::new(window.width(), window.height()));
        }
    }
    if left.read().last().is_some() {
        showcase.pointer = Vec2::ZERO;
    }
}

fn animate_showcase(
    time: Res<Time>,
    showcase: Option<ResMut<ShowcaseAnimation>>,
    mut roots: Query<&mut Transform, (With<ShowcaseRoot>, Without<ShowcaseCard>)>,
    mut cards: Query<(&ShowcaseCard, &mut Transform), Without<ShowcaseRoot>>,
) {
    let Some(mut showcase) = showcase else {
        return;
    };
    if !showcase.frame_loop.tick() {
        return;
    }

    let t = time.elapsed_secs();
    for (card, mut transform) in &mut cards {
        transform.translation.y = card.base_y + showcase_float_offset(t, card.index);
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            0.0,
            card.base_rotation_y + showcase_wobble(t, card.index),
            card.rotation_z,
        );
    }

    let target = pointer_target_rotation(showcase.pointer);
    showcase.rotation = damp_towards(showcase.rotation, target, ROTATION_SMOOTHING);
    for mut transform in &mut roots {
        transform.rotation =
            Quat::from_euler(EulerRot::XYZ, showcase.rotation.x, showcase.rotation.y, 0.0);
    }
}

/// Removes the scene content. The camera stays so the window keeps being
/// cleared to the background colour.
pub fn teardown_showcase(
    mut commands: Commands,
    mut events: EventReader<ViewTeardownEvent>,
    showcase: Option<ResMut<ShowcaseAnimation>>,
    roots: Query<Entity, With<ShowcaseRoot>>,
) {
    if !events.read().any(|event| event.view == ViewKind::Showcase) {
        return;
    }
    let Some(mut showcase) = showcase else {
        return;
    };
    if !showcase.frame_loop.stop() {
        return;
    }

    for root in &roots {
        commands.entity(root).despawn();
    }
    info!(
        "Showcase view torn down after {} frames",
        showcase.frame_loop.frames()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_normalisation_flips_y() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_pointer(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        assert_eq!(normalize_pointer(size, size), Vec2::new(1.0, -1.0));
        assert_eq!(normalize_pointer(size / 2.0, size), Vec2::ZERO);
        assert_eq!(normalize_pointer(Vec2::ONE, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn pointer_maps_to_pitch_and_yaw() {
        let target = pointer_target_rotation(Vec2::new(1.0, -1.0));
        assert!((target.x + 0.08).abs() < 1e-6);
        assert!((target.y - 0.15).abs() < 1e-6);
    }

    #[test]
    fn damping_converges_without_overshoot() {
        let target = Vec2::new(0.08, 0.15);
        let mut rotation = Vec2::ZERO;
        let mut previous_gap = (target - rotation).length();
        for _ in 0..300 {
            rotation = damp_towards(rotation, target, ROTATION_SMOOTHING);
            let gap = (target - rotation).length();
            assert!(gap < previous_gap);
            assert!(rotation.x <= target.x && rotation.y <= target.y);
            previous_gap = gap;
        }
        assert!(previous_gap < 1e-4);
    }

    #[test]
    fn single_damping_step_covers_three_percent() {
        let next = damp_towards(Vec2::ZERO, Vec2::new(1.0, 0.0), ROTATION_SMOOTHING);
        assert!((next.x - 0.03).abs() < 1e-6);
    }

    #[test]
    fn card_offsets_are_bounded_and_phase_shifted() {
        for step in 0..100 {
            let t = step as f32 * 0.37;
            for index in 0..3 {
                assert!(showcase_float_offset(t, index).abs() <= FLOAT_AMPLITUDE);
                assert!(showcase_wobble(t, index).abs() <= WOBBLE_AMPLITUDE);
            }
        }
        assert!(showcase_float_offset(0.0, 0).abs() < 1e-6);
        assert!(showcase_float_offset(0.0, 1).abs() > 0.0);
    }

    #[test]
    fn teardown_removes_scene_and_freezes_loop() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<ViewTeardownEvent>()
            .insert_resource(ShowcaseAnimation::default())
            .add_systems(Update, teardown_showcase);

        let root = app
            .world_mut()
            .spawn((ShowcaseRoot, Transform::default()))
            .id();

        app.world_mut().send_event(ViewTeardownEvent {
            view: ViewKind::Showcase,
        });
        app.update();

        assert!(app.world().get_entity(root).is_err());
        let showcase = app.world().resource::<ShowcaseAnimation>();
        assert!(!showcase.frame_loop.is_running());
    }
}
