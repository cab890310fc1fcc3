use glam::Vec3;

// Shared visual tuning constants used by the core and the native frontend.

// Scene layout
pub const ORBIT_DISTANCE: f32 = 12.0; // radius of the item shell around the viewer
pub const HEMISPHERE_HEIGHT_SCALE: f32 = 0.65; // flattens the curated band so labels clear the planet
pub const SINGLE_ITEM_POSITION: Vec3 = Vec3::new(0.0, 0.0, -ORBIT_DISTANCE); // straight ahead

// Item sizing
pub const SPHERE_RADIUS: f32 = 1.2;
pub const RING_INNER_MULT: f32 = 1.08;
pub const RING_OUTER_MULT: f32 = 1.12;
pub const LABEL_GAP: f32 = 1.5; // distance below the sphere surface, in camera-up units
pub const LABEL_SIZE: [f32; 2] = [3.5, 1.75];

// Motion
pub const BOB_AMPLITUDE: f32 = 0.5;
pub const BOB_SPEED: f32 = 0.4; // rad/s
pub const DRIFT_AMPLITUDE: [f32; 2] = [0.03, 0.02];
pub const DRIFT_FREQUENCY: [f32; 2] = [0.15, 0.12];

// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 500.0;
pub const CAMERA_EYE_OFFSET: f32 = 0.001; // eye-to-target distance; the viewer stays at the origin
pub const ROTATE_SPEED: f32 = -0.4; // negative: drag-style
pub const ROTATE_DAMPING: f32 = 0.06;
pub const AUTO_ROTATE_SPEED: f32 = 0.08;
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

// Hover feedback
pub const HOVER_SCALE: f32 = 1.15;
pub const REST_SCALE: f32 = 1.0;
pub const SCALE_TWEEN_SECS: f32 = 0.5;
pub const RING_TWEEN_SECS: f32 = 0.4;
pub const RING_INITIAL_OPACITY: f32 = 0.03;
pub const RING_REST_OPACITY: f32 = 0.15;
pub const RING_HOVER_OPACITY: f32 = 0.9;
pub const RING_DEFAULT_COLOR: [f32; 3] = [0x88 as f32 / 255.0, 0x99 as f32 / 255.0, 0xbb as f32 / 255.0];
pub const RING_HOVER_COLOR: [f32; 3] = [0xb8 as f32 / 255.0, 1.0, 0.0];

// Ambient
pub const PLANET_RADIUS: f32 = 180.0;
pub const PLANET_CENTER: Vec3 = Vec3::new(0.0, -PLANET_RADIUS - 35.0, 0.0);
pub const SUN_POSITION: Vec3 = Vec3::new(-60.0, 30.0, -100.0);
pub const DUST_COUNT: usize = 200;
pub const DUST_HALF_EXTENT: [f32; 3] = [20.0, 10.0, 20.0];
pub const DUST_CENTER_Y: f32 = 5.0;
pub const DUST_Y_RANGE: [f32; 2] = [-5.0, 15.0];
pub const DUST_WRAP_FACTOR: f32 = -0.9;
pub const DUST_SPIN: f32 = 0.01; // rad/s around +Y

// Textures
pub const TEXTURE_RETRY_SECS: f32 = 2.0;
pub const TEXTURE_FALLBACK_COLOR: [f32; 3] = [0.08, 0.09, 0.12];

#[inline]
pub fn ring_default_color() -> Vec3 {
    Vec3::from(RING_DEFAULT_COLOR)
}

#[inline]
pub fn ring_hover_color() -> Vec3 {
    Vec3::from(RING_HOVER_COLOR)
}
