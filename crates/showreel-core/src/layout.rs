//! Deterministic placement of items on a shell around the viewer.
//!
//! Two strategies are available: an even golden-angle spread over the full
//! sphere, and a hand-curated table restricted to an upper-hemisphere band so
//! items never sit in front of the planet.

use crate::constants::{HEMISPHERE_HEIGHT_SCALE, ORBIT_DISTANCE, SINGLE_ITEM_POSITION};
use crate::error::SceneError;
use glam::Vec3;

/// The golden angle, π(3 − √5), in radians.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// One entry of a curated layout table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HemispherePreset {
    /// Azimuth around +Y, radians.
    pub theta: f32,
    /// Height on the unit sphere, expected in (0, 1).
    pub y: f32,
    /// Multiplier on the horizontal radius, lets items sit slightly in or out.
    pub r: f32,
}

impl HemispherePreset {
    pub const fn new(theta: f32, y: f32, r: f32) -> Self {
        Self { theta, y, r }
    }
}

pub const DEFAULT_PRESETS: &[HemispherePreset] = &[
    HemispherePreset::new(0.4, 0.75, 1.0),
    HemispherePreset::new(2.3, 0.45, 0.95),
    HemispherePreset::new(4.5, 0.85, 0.88),
    HemispherePreset::new(1.5, 0.55, 1.08),
    HemispherePreset::new(5.3, 0.3, 0.92),
];

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutStrategy {
    GoldenAngle {
        orbit: f32,
    },
    Curated {
        orbit: f32,
        presets: Vec<HemispherePreset>,
    },
}

impl LayoutStrategy {
    pub fn golden() -> Self {
        Self::GoldenAngle {
            orbit: ORBIT_DISTANCE,
        }
    }

    pub fn curated() -> Self {
        Self::Curated {
            orbit: ORBIT_DISTANCE,
            presets: DEFAULT_PRESETS.to_vec(),
        }
    }

    pub fn orbit(&self) -> f32 {
        match self {
            Self::GoldenAngle { orbit } | Self::Curated { orbit, .. } => *orbit,
        }
    }

    /// Largest item count this strategy can place, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Self::GoldenAngle { .. } => None,
            Self::Curated { presets, .. } => Some(presets.len()),
        }
    }
}

/// Compute `n` positions with the given strategy. Same input, same output.
pub fn layout(n: usize, strategy: &LayoutStrategy) -> Result<Vec<Vec3>, SceneError> {
    match strategy {
        LayoutStrategy::GoldenAngle { orbit } => Ok(golden_angle(n, *orbit)),
        LayoutStrategy::Curated { orbit, presets } => {
            if n > presets.len() {
                return Err(SceneError::PresetTableTooShort {
                    requested: n,
                    available: presets.len(),
                });
            }
            Ok(presets[..n]
                .iter()
                .map(|p| curated_position(p, *orbit))
                .collect())
        }
    }
}

/// Golden-angle spiral over the full sphere, top to bottom.
///
/// `n == 1` would divide by zero in the height step, so it maps to a single
/// point straight ahead of the default view direction instead.
pub fn golden_angle(n: usize, orbit: f32) -> Vec<Vec3> {
    match n {
        0 => Vec::new(),
        1 => vec![SINGLE_ITEM_POSITION * (orbit / ORBIT_DISTANCE)],
        _ => {
            let last = (n - 1) as f32;
            (0..n)
                .map(|i| {
                    let y = 1.0 - 2.0 * i as f32 / last;
                    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
                    let theta = i as f32 * GOLDEN_ANGLE;
                    Vec3::new(theta.cos() * radius_at_y, y, theta.sin() * radius_at_y) * orbit
                })
                .collect()
        }
    }
}

pub fn curated_position(preset: &HemispherePreset, orbit: f32) -> Vec3 {
    let radius_at_y = (1.0 - preset.y * preset.y).max(0.0).sqrt() * preset.r;
    Vec3::new(
        radius_at_y * preset.theta.cos() * orbit,
        preset.y * orbit * HEMISPHERE_HEIGHT_SCALE,
        radius_at_y * preset.theta.sin() * orbit,
    )
}

/// Oscillation phase for item `index` of `n`, spread evenly over one period.
#[inline]
pub fn phase_for(index: usize, n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    index as f32 * std::f32::consts::TAU / n as f32
}
