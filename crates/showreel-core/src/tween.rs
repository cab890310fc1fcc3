//! Time-based property tweens with supersession.
//!
//! The set holds at most one tween per (item, property). Starting another
//! tween on the same key replaces the in-flight one, and the new tween starts
//! from whatever value the property currently holds.

use crate::picking::ItemId;
use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out ("power1.out").
    #[default]
    QuadOut,
    /// Cubic ease-out ("power2.out").
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// Map a fraction in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    GroupScale,
    RingOpacity,
    RingColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenKey {
    pub item: ItemId,
    pub property: Property,
}

impl TweenKey {
    pub fn new(item: ItemId, property: Property) -> Self {
        Self { item, property }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Scalar(f32),
    Color(Vec3),
}

impl PropertyValue {
    /// Mismatched variants snap to `to`.
    pub fn lerp(self, to: PropertyValue, s: f32) -> PropertyValue {
        match (self, to) {
            (PropertyValue::Scalar(a), PropertyValue::Scalar(b)) => {
                PropertyValue::Scalar(a + (b - a) * s)
            }
            (PropertyValue::Color(a), PropertyValue::Color(b)) => PropertyValue::Color(a.lerp(b, s)),
            (_, b) => b,
        }
    }
}

/// Anything tweens can read from and write to.
pub trait PropertyTarget {
    /// `None` when the target no longer exists.
    fn read(&self, key: TweenKey) -> Option<PropertyValue>;
    /// Returns false when the target no longer exists.
    fn write(&mut self, key: TweenKey, value: PropertyValue) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: PropertyValue,
    pub to: PropertyValue,
    pub duration: f32,
    pub easing: Easing,
    pub start: f32,
}

impl Tween {
    /// Normalized time, clamped to [0, 1]. Zero duration is already done.
    pub fn fraction(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f32) -> PropertyValue {
        self.from
            .lerp(self.to, self.easing.apply(self.fraction(now)))
    }

    pub fn is_finished(&self, now: f32) -> bool {
        self.fraction(now) >= 1.0
    }
}

/// Parameters of a tween before it is bound to a start value and time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub to: PropertyValue,
    pub duration: f32,
    pub easing: Easing,
}

#[derive(Debug, Default)]
pub struct TweenSet {
    active: FnvHashMap<TweenKey, Tween>,
}

impl TweenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn get(&self, key: TweenKey) -> Option<&Tween> {
        self.active.get(&key)
    }

    /// Start (or restart) a tween from the target's current value.
    /// Returns false, and starts nothing, when the target does not exist.
    pub fn start(
        &mut self,
        key: TweenKey,
        spec: TweenSpec,
        now: f32,
        target: &impl PropertyTarget,
    ) -> bool {
        let Some(from) = target.read(key) else {
            self.active.remove(&key);
            return false;
        };
        let replaced = self
            .active
            .insert(
                key,
                Tween {
                    from,
                    to: spec.to,
                    duration: spec.duration,
                    easing: spec.easing,
                    start: now,
                },
            )
            .is_some();
        if replaced {
            log::debug!("[tween] superseded {:?} on item {}", key.property, key.item);
        }
        true
    }

    /// Write every tween's value for `now` and retire finished ones. Tweens
    /// whose target vanished are dropped without error.
    pub fn advance(&mut self, now: f32, target: &mut impl PropertyTarget) {
        self.active.retain(|key, tween| {
            if !target.write(*key, tween.value_at(now)) {
                log::debug!("[tween] dropped {:?}: item {} is gone", key.property, key.item);
                return false;
            }
            !tween.is_finished(now)
        });
    }
}
