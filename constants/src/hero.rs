/// Height of the hero band in logical pixels.
pub const HERO_BAND_HEIGHT: f32 = 200.0;

pub const HERO_CARD_WIDTH: f32 = 90.0;
pub const HERO_CARD_HEIGHT: f32 = 140.0;
pub const HERO_CARD_SPACING: f32 = 100.0;

/// Vertical float amplitude in pixels.
pub const HERO_FLOAT_AMPLITUDE: f32 = 8.0;

/// Resting shadow blur; the live value is `HERO_SHADOW_BASE + float_y * HERO_SHADOW_FLOAT_SCALE`.
pub const HERO_SHADOW_BASE: f32 = 15.0;
pub const HERO_SHADOW_FLOAT_SCALE: f32 = 0.5;
pub const HERO_SHADOW_ALPHA: f32 = 0.25;

/// Phase speeds are expressed per frame at this rate.
pub const HERO_REFERENCE_FPS: f32 = 60.0;

pub const HERO_ROTATION_OSCILLATION_RATE: f32 = 0.5;
pub const HERO_ROTATION_OSCILLATION_AMPLITUDE: f32 = 0.02;

#[derive(Debug, Clone, Copy)]
pub struct HeroCardConfig {
    pub offset_x: f32,
    pub phase: f32,
    pub speed: f32,
    pub rotation_degrees: f32,
}

pub const HERO_CARDS: [HeroCardConfig; 3] = [
    HeroCardConfig {
        offset_x: -HERO_CARD_SPACING,
        phase: 0.0,
        speed: 0.015,
        rotation_degrees: -15.0,
    },
    HeroCardConfig {
        offset_x: 0.0,
        phase: std::f32::consts::PI / 3.0,
        speed: 0.02,
        rotation_degrees: 0.0,
    },
    HeroCardConfig {
        offset_x: HERO_CARD_SPACING,
        phase: std::f32::consts::PI / 1.5,
        speed: 0.018,
        rotation_degrees: 15.0,
    },
];
