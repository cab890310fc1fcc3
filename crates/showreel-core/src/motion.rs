//! Time-driven procedural motion. Everything here is a pure function of
//! elapsed time, so nothing accumulates frame to frame.

use crate::constants::{BOB_AMPLITUDE, BOB_SPEED, DRIFT_AMPLITUDE, DRIFT_FREQUENCY};
use glam::{Vec2, Vec3};

/// Shared vertical bobbing for all items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub amplitude: f32,
    /// Angular speed, rad/s.
    pub speed: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            amplitude: BOB_AMPLITUDE,
            speed: BOB_SPEED,
        }
    }
}

impl MotionParams {
    /// Time after which every item is back where it started.
    pub fn period(&self) -> f32 {
        std::f32::consts::TAU / self.speed
    }
}

#[inline]
pub fn offset_y(base_y: f32, phase: f32, elapsed: f32, params: &MotionParams) -> f32 {
    base_y + params.amplitude * (params.speed * elapsed + phase).sin()
}

/// Slow sway of the camera look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftParams {
    pub base_target: Vec3,
    pub amplitude: Vec2,
    pub frequency: Vec2,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            base_target: Vec3::ZERO,
            amplitude: Vec2::from(DRIFT_AMPLITUDE),
            frequency: Vec2::from(DRIFT_FREQUENCY),
        }
    }
}

/// Base target plus two independent sinusoids, one per axis. Bounded by
/// `amplitude` on each axis for all `elapsed`.
#[inline]
pub fn drift_target(elapsed: f32, params: &DriftParams) -> Vec3 {
    params.base_target
        + Vec3::new(
            (elapsed * params.frequency.x).sin() * params.amplitude.x,
            (elapsed * params.frequency.y).cos() * params.amplitude.y,
            0.0,
        )
}
