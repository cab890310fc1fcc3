//! Hover feedback: turns hover events into scale/opacity/color tweens and
//! tracks the cursor affordance.

use crate::constants::{
    ring_default_color, ring_hover_color, HOVER_SCALE, REST_SCALE, RING_HOVER_OPACITY,
    RING_REST_OPACITY, RING_TWEEN_SECS, SCALE_TWEEN_SECS,
};
use crate::picking::{HoverEvent, ItemId};
use crate::tween::{
    Easing, Property, PropertyTarget, PropertyValue, TweenKey, TweenSet, TweenSpec,
};
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackStyle {
    pub hover_scale: f32,
    pub rest_scale: f32,
    pub scale_duration: f32,
    pub scale_easing: Easing,
    pub ring_hover_opacity: f32,
    pub ring_rest_opacity: f32,
    pub ring_hover_color: Vec3,
    pub ring_rest_color: Vec3,
    pub ring_duration: f32,
    pub ring_easing: Easing,
}

impl Default for FeedbackStyle {
    fn default() -> Self {
        Self {
            hover_scale: HOVER_SCALE,
            rest_scale: REST_SCALE,
            scale_duration: SCALE_TWEEN_SECS,
            scale_easing: Easing::CubicOut,
            ring_hover_opacity: RING_HOVER_OPACITY,
            ring_rest_opacity: RING_REST_OPACITY,
            ring_hover_color: ring_hover_color(),
            ring_rest_color: ring_default_color(),
            ring_duration: RING_TWEEN_SECS,
            ring_easing: Easing::QuadOut,
        }
    }
}

impl FeedbackStyle {
    fn specs(&self, hovered: bool) -> [(Property, TweenSpec); 3] {
        let (scale, opacity, color) = if hovered {
            (self.hover_scale, self.ring_hover_opacity, self.ring_hover_color)
        } else {
            (self.rest_scale, self.ring_rest_opacity, self.ring_rest_color)
        };
        [
            (
                Property::GroupScale,
                TweenSpec {
                    to: PropertyValue::Scalar(scale),
                    duration: self.scale_duration,
                    easing: self.scale_easing,
                },
            ),
            (
                Property::RingOpacity,
                TweenSpec {
                    to: PropertyValue::Scalar(opacity),
                    duration: self.ring_duration,
                    easing: self.ring_easing,
                },
            ),
            (
                Property::RingColor,
                TweenSpec {
                    to: PropertyValue::Color(color),
                    duration: self.ring_duration,
                    easing: self.ring_easing,
                },
            ),
        ]
    }
}

#[derive(Debug, Default)]
pub struct FeedbackAnimator {
    pub style: FeedbackStyle,
    tweens: TweenSet,
    cursor: Cursor,
}

impl FeedbackAnimator {
    pub fn new(style: FeedbackStyle) -> Self {
        Self {
            style,
            tweens: TweenSet::new(),
            cursor: Cursor::Default,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn tweens(&self) -> &TweenSet {
        &self.tweens
    }

    /// Start the tweens for one hover transition. Events must be fed in the
    /// order the hover tracker produced them.
    pub fn on_hover(&mut self, event: HoverEvent, now: f32, target: &impl PropertyTarget) {
        let (item, hovered) = match event {
            HoverEvent::Enter(item) => (item, true),
            HoverEvent::Leave(item) => (item, false),
        };
        self.cursor = if hovered {
            Cursor::Pointer
        } else {
            Cursor::Default
        };
        self.animate(item, hovered, now, target);
    }

    fn animate(&mut self, item: ItemId, hovered: bool, now: f32, target: &impl PropertyTarget) {
        for (property, spec) in self.style.specs(hovered) {
            self.tweens
                .start(TweenKey::new(item, property), spec, now, target);
        }
    }

    pub fn advance(&mut self, now: f32, target: &mut impl PropertyTarget) {
        self.tweens.advance(now, target);
    }
}
