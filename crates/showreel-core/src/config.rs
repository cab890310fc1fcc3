//! Scene configuration. Scene variants differ only in these values.

use crate::ambient::AmbientConfig;
use crate::camera::ControlParams;
use crate::constants::{
    LABEL_GAP, LABEL_SIZE, RING_INITIAL_OPACITY, RING_INNER_MULT, RING_OUTER_MULT, SPHERE_RADIUS,
};
use crate::error::SceneError;
use crate::feedback::FeedbackStyle;
use crate::layout::{LayoutStrategy, DEFAULT_PRESETS};
use crate::motion::{DriftParams, MotionParams};
use crate::orientation::OrientationMode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationStyle {
    pub sphere_radius: f32,
    pub ring_inner_mult: f32,
    pub ring_outer_mult: f32,
    pub ring_initial_opacity: f32,
    /// Gap between the sphere surface and the label, in world units.
    pub label_gap: f32,
    pub label_size: [f32; 2],
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self {
            sphere_radius: SPHERE_RADIUS,
            ring_inner_mult: RING_INNER_MULT,
            ring_outer_mult: RING_OUTER_MULT,
            ring_initial_opacity: RING_INITIAL_OPACITY,
            label_gap: LABEL_GAP,
            label_size: LABEL_SIZE,
        }
    }
}

impl DecorationStyle {
    pub fn label_offset(&self) -> f32 {
        self.sphere_radius + self.label_gap
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub item_count: usize,
    pub layout: LayoutStrategy,
    pub motion: MotionParams,
    pub drift: DriftParams,
    pub decoration: DecorationStyle,
    /// Also carries the ring palette.
    pub feedback: FeedbackStyle,
    pub orientation: OrientationMode,
    pub controls: ControlParams,
    pub ambient: AmbientConfig,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::curated()
    }
}

impl SceneConfig {
    /// Five hand-placed items in the upper band, whole groups facing the viewer.
    pub fn curated() -> Self {
        Self {
            item_count: DEFAULT_PRESETS.len(),
            layout: LayoutStrategy::curated(),
            motion: MotionParams::default(),
            drift: DriftParams::default(),
            decoration: DecorationStyle::default(),
            feedback: FeedbackStyle::default(),
            orientation: OrientationMode::WholeGroup,
            controls: ControlParams::default(),
            ambient: AmbientConfig::default(),
            seed: 42,
        }
    }

    /// `n` items spread evenly over the full sphere; only decorations billboard.
    pub fn uniform(n: usize) -> Self {
        Self {
            item_count: n,
            layout: LayoutStrategy::golden(),
            orientation: OrientationMode::DecorationsOnly,
            ..Self::curated()
        }
    }

    /// Pick a variant from textual overrides (`golden`/`curated`, item count).
    /// The count only applies to the golden layout.
    pub fn from_overrides(layout: Option<&str>, items: Option<&str>) -> Result<Self, SceneError> {
        let count = match items.map(str::trim) {
            Some(raw) => Some(raw.parse::<usize>().map_err(|e| {
                SceneError::invalid("item_count", format!("`{raw}` is not a count: {e}"))
            })?),
            None => None,
        };
        let config = match layout.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("curated") => Self::curated(),
            Some("golden") => Self::uniform(count.unwrap_or(DEFAULT_PRESETS.len())),
            Some(other) => {
                return Err(SceneError::invalid(
                    "layout",
                    format!("unknown layout `{other}`, expected golden or curated"),
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        positive("layout.orbit", self.layout.orbit())?;
        if let Some(cap) = self.layout.capacity() {
            if self.item_count > cap {
                return Err(SceneError::PresetTableTooShort {
                    requested: self.item_count,
                    available: cap,
                });
            }
        }
        finite("motion.amplitude", self.motion.amplitude)?;
        positive("motion.speed", self.motion.speed)?;
        positive("decoration.sphere_radius", self.decoration.sphere_radius)?;
        finite("decoration.label_gap", self.decoration.label_gap)?;
        if self.decoration.ring_outer_mult <= self.decoration.ring_inner_mult {
            return Err(SceneError::invalid(
                "decoration.ring_outer_mult",
                "must exceed ring_inner_mult",
            ));
        }
        positive("feedback.hover_scale", self.feedback.hover_scale)?;
        positive("feedback.rest_scale", self.feedback.rest_scale)?;
        non_negative("feedback.scale_duration", self.feedback.scale_duration)?;
        non_negative("feedback.ring_duration", self.feedback.ring_duration)?;
        unit("feedback.ring_hover_opacity", self.feedback.ring_hover_opacity)?;
        unit("feedback.ring_rest_opacity", self.feedback.ring_rest_opacity)?;
        unit("controls.damping", self.controls.damping)?;
        finite("controls.rotate_speed", self.controls.rotate_speed)?;
        finite("controls.auto_rotate_speed", self.controls.auto_rotate_speed)?;
        Ok(())
    }
}

fn finite(field: &'static str, v: f32) -> Result<(), SceneError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("{v} is not finite")))
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), SceneError> {
    finite(field, v)?;
    if v > 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("{v} must be > 0")))
    }
}

fn non_negative(field: &'static str, v: f32) -> Result<(), SceneError> {
    finite(field, v)?;
    if v >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("{v} must be >= 0")))
    }
}

fn unit(field: &'static str, v: f32) -> Result<(), SceneError> {
    finite(field, v)?;
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("{v} must be within [0, 1]")))
    }
}
