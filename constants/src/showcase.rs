use bevy::math::Vec3;

pub const SHOWCASE_BACKGROUND: [u8; 3] = [0x0a, 0x0a, 0x0f];

pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.5, 6.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.5, 0.0);

pub const CARD_PLANE_WIDTH: f32 = 1.4;
pub const CARD_PLANE_HEIGHT: f32 = 2.2;

pub const FLOOR_WIDTH: f32 = 20.0;
pub const FLOOR_DEPTH: f32 = 10.0;
pub const FLOOR_HEIGHT: f32 = -1.2;

pub const FOG_START: f32 = 8.0;
pub const FOG_END: f32 = 15.0;

pub const FLOAT_SPEED: f32 = 0.6;
pub const FLOAT_AMPLITUDE: f32 = 0.05;
/// Per-card float phase is `index * FLOAT_PHASE_STEP`.
pub const FLOAT_PHASE_STEP: f32 = std::f32::consts::PI * 0.6;

pub const WOBBLE_RATE: f32 = 0.3;
pub const WOBBLE_INDEX_OFFSET: f32 = 0.5;
pub const WOBBLE_AMPLITUDE: f32 = 0.015;

/// Scene rotation reached at the view edge, in radians.
pub const POINTER_YAW_RANGE: f32 = 0.15;
pub const POINTER_PITCH_RANGE: f32 = 0.08;

/// Fraction of the remaining rotation covered each frame.
pub const ROTATION_SMOOTHING: f32 = 0.03;

#[derive(Debug, Clone, Copy)]
pub struct ShowcaseCardPlacement {
    pub position: Vec3,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub scale: f32,
}

pub const SHOWCASE_CARDS: [ShowcaseCardPlacement; 3] = [
    ShowcaseCardPlacement {
        position: Vec3::new(-2.0, 0.0, 0.3),
        rotation_y: 0.35,
        rotation_z: 0.0,
        scale: 1.0,
    },
    ShowcaseCardPlacement {
        position: Vec3::new(0.0, 0.2, 1.2),
        rotation_y: 0.0,
        rotation_z: 0.0,
        scale: 1.15,
    },
    ShowcaseCardPlacement {
        position: Vec3::new(2.0, 0.0, 0.3),
        rotation_y: -0.35,
        rotation_z: 0.0,
        scale: 1.0,
    },
];

/// Scene lighting, in Bevy photometric units.
pub const AMBIENT_BRIGHTNESS: f32 = 150.0;

pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 8.0, 5.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1_500_000.0;
pub const KEY_LIGHT_OUTER_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
/// Inner cone as a fraction of the outer cone; the rest is penumbra.
pub const KEY_LIGHT_INNER_RATIO: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct AccentLight {
    pub position: Vec3,
    pub color: [u8; 3],
    pub intensity: f32,
}

pub const ACCENT_LIGHTS: [AccentLight; 3] = [
    // Blue rim, back left
    AccentLight {
        position: Vec3::new(-4.0, 2.0, -3.0),
        color: [0x44, 0x88, 0xff],
        intensity: 800_000.0,
    },
    // Warm rim, back right
    AccentLight {
        position: Vec3::new(4.0, 2.0, -3.0),
        color: [0xff, 0x88, 0x44],
        intensity: 400_000.0,
    },
    // Fill from below
    AccentLight {
        position: Vec3::new(0.0, -2.0, 2.0),
        color: [0x22, 0x44, 0xaa],
        intensity: 300_000.0,
    },
];

pub const FLOOR_COLOR: [u8; 3] = [0x11, 0x11, 0x18];
pub const FLOOR_METALLIC: f32 = 0.9;
pub const FLOOR_ROUGHNESS: f32 = 0.3;
pub const FLOOR_OPACITY: f32 = 0.8;

pub const CARD_METALLIC: f32 = 0.2;
pub const CARD_ROUGHNESS: f32 = 0.5;
