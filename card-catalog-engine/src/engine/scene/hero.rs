use crate::engine::loading::image_loader::{ImageBatch, ImageOutcome, all_resolved};
use crate::engine::systems::frame_loop::{FrameLoop, ViewKind, ViewTeardownEvent};
use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::render::view::RenderLayers;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::hero::*;
use constants::path::HERO_IMAGE_PATHS;

/// Hero sprites live on their own layer so no other 2D camera draws them.
pub const HERO_RENDER_LAYER: usize = 1;

/// Runtime copy of the hero constants.
#[derive(Resource, Debug, Clone)]
pub struct HeroLayout {
    pub band_height: f32,
    pub card_size: Vec2,
    pub float_amplitude: f32,
    pub cards: Vec<HeroCardConfig>,
}

impl Default for HeroLayout {
    fn default() -> Self {
        Self {
            band_height: HERO_BAND_HEIGHT,
            card_size: Vec2::new(HERO_CARD_WIDTH, HERO_CARD_HEIGHT),
            float_amplitude: HERO_FLOAT_AMPLITUDE,
            cards: HERO_CARDS.to_vec(),
        }
    }
}

#[derive(Resource, Default)]
pub struct HeroAnimation {
    pub images: ImageBatch,
    pub ready: bool,
    pub frame_loop: FrameLoop,
}

#[derive(Component)]
pub struct HeroCamera;

#[derive(Component, Debug, Clone)]
pub struct HeroCard {
    pub base_x: f32,
    pub base_y: f32,
    pub phase: f32,
    pub speed: f32,
    pub rotation: f32,
    pub time: f32,
    pub shadow: f32,
}

impl HeroCard {
    pub fn from_config(config: &HeroCardConfig) -> Self {
        Self {
            base_x: config.offset_x,
            base_y: 0.0,
            phase: config.phase,
            speed: config.speed,
            rotation: config.rotation_degrees.to_radians(),
            time: 0.0,
            shadow: HERO_SHADOW_BASE,
        }
    }
}

#[derive(Component)]
pub struct HeroShadow;

/// Speeds are tuned per 60 Hz frame; scale by elapsed time so the motion
/// matches at any refresh rate.
pub fn advance_phase(time: f32, speed: f32, delta_secs: f32) -> f32 {
    time + speed * delta_secs * HERO_REFERENCE_FPS
}

pub fn hero_float_offset(time: f32, phase: f32, amplitude: f32) -> f32 {
    (time + phase).sin() * amplitude
}

pub fn hero_rotation(base: f32, time: f32) -> f32 {
    base + (time * HERO_ROTATION_OSCILLATION_RATE).sin() * HERO_ROTATION_OSCILLATION_AMPLITUDE
}

pub fn hero_shadow(float_y: f32) -> f32 {
    HERO_SHADOW_BASE + float_y * HERO_SHADOW_FLOAT_SCALE
}

pub struct HeroAnimationPlugin;

impl Plugin for HeroAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeroLayout>()
            .add_event::<ViewTeardownEvent>()
            .add_systems(Startup, setup_hero)
            .add_systems(
                Update,
                (
                    fit_hero_viewport,
                    spawn_hero_cards_when_ready,
                    animate_hero_cards,
                    teardown_hero,
                )
                    .chain(),
            );
    }
}

fn setup_hero(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    layout: Res<HeroLayout>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    commands.insert_resource(HeroAnimation {
        images: ImageBatch::load(&asset_server, &HERO_IMAGE_PATHS),
        ..default()
    });

    let viewport = windows
        .single()
        .ok()
        .and_then(|window| band_viewport(window, layout.band_height));

    commands.spawn((
        HeroCamera,
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            viewport,
            ..default()
        },
        RenderLayers::layer(HERO_RENDER_LAYER),
    ));
}

/// Full window width, band height, anchored at the top edge.
fn band_viewport(window: &Window, band_height: f32) -> Option<Viewport> {
    let width = window.physical_width();
    let height = ((band_height * window.scale_factor()) as u32).min(window.physical_height());
    if width == 0 || height == 0 {
        return None;
    }
    Some(Viewport {
        physical_position: UVec2::ZERO,
        physical_size: UVec2::new(width, height),
        ..default()
    })
}

fn fit_hero_viewport(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<HeroLayout>,
    mut cameras: Query<&mut Camera, With<HeroCamera>>,
) {
    if resized.read().last().is_none() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    for mut camera in &mut cameras {
        camera.viewport = band_viewport(window, layout.band_height);
    }
}

/// Cards appear once every image has either loaded or failed; a failed
/// image leaves a plain white card.
fn spawn_hero_cards_when_ready(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    layout: Res<HeroLayout>,
    hero: Option<ResMut<HeroAnimation>>,
) {
    let Some(mut hero) = hero else {
        return;
    };
    if hero.ready || !hero.frame_loop.is_running() {
        return;
    }

    let outcomes = hero.images.outcomes(&asset_server);
    if !all_resolved(&outcomes) {
        return;
    }

    let layer = RenderLayers::layer(HERO_RENDER_LAYER);
    for (index, config) in layout.cards.iter().enumerate() {
        let card = HeroCard::from_config(config);
        let image = match outcomes.get(index) {
            Some(ImageOutcome::Loaded) => hero.images.handle(index).cloned(),
            _ => {
                warn!("Hero image {} unavailable, drawing blank card", index);
                None
            }
        };

        commands
            .spawn((
                Transform::from_xyz(card.base_x, card.base_y, index as f32),
                Visibility::default(),
                layer.clone(),
                card,
            ))
            .with_children(|parent| {
                parent.spawn((
                    HeroShadow,
                    Sprite::from_color(
                        Color::srgba(0.0, 0.0, 0.0, HERO_SHADOW_ALPHA),
                        layout.card_size + Vec2::splat(HERO_SHADOW_BASE),
                    ),
                    Transform::from_xyz(0.0, -HERO_SHADOW_BASE * 0.5, -0.2),
                    layer.clone(),
                ));
                parent.spawn((
                    Sprite::from_color(Color::WHITE, layout.card_size),
                    Transform::from_xyz(0.0, 0.0, -0.1),
                    layer.clone(),
                ));
                if let Some(image) = image {
                    parent.spawn((
                        Sprite {
                            image,
                            custom_size: Some(layout.card_size),
                            ..default()
                        },
                        layer.clone(),
                    ));
                }
            });
    }

    hero.ready = true;
    info!("Hero band ready with {} cards", layout.cards.len());
}

fn animate_hero_cards(
    time: Res<Time>,
    layout: Res<HeroLayout>,
    hero: Option<ResMut<HeroAnimation>>,
    mut cards: Query<(&mut HeroCard, &mut Transform), Without<HeroShadow>>,
    mut shadows: Query<(&ChildOf, &mut Sprite, &mut Transform), With<HeroShadow>>,
) {
    let Some(mut hero) = hero else {
        return;
    };
    if !hero.ready || !hero.frame_loop.tick() {
        return;
    }

    let delta = time.delta_secs();
    for (mut card, mut transform) in &mut cards {
        card.time = advance_phase(card.time, card.speed, delta);
        let float_y = hero_float_offset(card.time, card.phase, layout.float_amplitude);
        card.shadow = hero_shadow(float_y);

        // Offsets are screen-down; world y points up.
        transform.translation.x = card.base_x;
        transform.translation.y = card.base_y - float_y;
        transform.rotation = Quat::from_rotation_z(-hero_rotation(card.rotation, card.time));
    }

    for (child_of, mut sprite, mut transform) in &mut shadows {
        let Ok((card, _)) = cards.get(child_of.parent()) else {
            continue;
        };
        sprite.custom_size = Some(layout.card_size + Vec2::splat(card.shadow));
        transform.translation.y = -card.shadow * 0.5;
    }
}

pub fn teardown_hero(
    mut commands: Commands,
    mut events: EventReader<ViewTeardownEvent>,
    hero: Option<ResMut<HeroAnimation>>,
    entities: Query<Entity, Or<(With<HeroCard>, With<HeroCamera>)>>,
) {
    if !events.read().any(|event| event.view == ViewKind::Hero) {
        return;
    }
    let Some(mut hero) = hero else {
        return;
    };
    if !hero.frame_loop.stop() {
        return;
    }

    for entity in &entities {
        commands.entity(entity).despawn();
    }
    info!("Hero view torn down after {} frames", hero.frame_loop.frames());
}
