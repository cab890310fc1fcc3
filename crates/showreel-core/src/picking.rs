//! Pointer rays, ray/sphere tests and the hover state machine.

use crate::camera::Camera;
use glam::{Vec2, Vec3, Vec4};
use smallvec::SmallVec;

/// Stable item identity: the item's index in the scene.
pub type ItemId = usize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// World-space ray from the camera eye through a point given in NDC.
    pub fn from_ndc(ndc: Vec2, camera: &Camera) -> Self {
        let inv = camera.view_proj().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
        let p: Vec3 = p.truncate() / p.w;
        let origin = camera.eye;
        Self {
            origin,
            dir: (p - origin).normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Distance along a normalized ray to the first sphere surface in front of
/// the origin. A ray starting inside the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickCandidate {
    pub item: ItemId,
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub item: ItemId,
    pub distance: f32,
    pub point: Vec3,
}

/// Nearest candidate hit by `ray`. On an exact distance tie the candidate
/// that comes first in `candidates` wins.
pub fn pick_ray(ray: &Ray, candidates: &[PickCandidate]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for c in candidates {
        let Some(t) = ray_sphere(ray.origin, ray.dir, c.center, c.radius) else {
            continue;
        };
        match best {
            Some(b) if t >= b.distance => {}
            _ => {
                best = Some(Hit {
                    item: c.item,
                    distance: t,
                    point: ray.at(t),
                })
            }
        }
    }
    best
}

pub fn pick(ndc: Vec2, camera: &Camera, candidates: &[PickCandidate]) -> Option<Hit> {
    if candidates.is_empty() {
        return None;
    }
    pick_ray(&Ray::from_ndc(ndc, camera), candidates)
}

/// Map window pixels (origin top-left, y down) to NDC (y up), clamped.
#[inline]
pub fn pointer_ndc(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (px / width * 2.0 - 1.0).clamp(-1.0, 1.0),
        (1.0 - py / height * 2.0).clamp(-1.0, 1.0),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(ItemId),
    Leave(ItemId),
}

pub type HoverEvents = SmallVec<[HoverEvent; 2]>;

/// At most one hovered item; edge-triggered transitions.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    hovered: Option<ItemId>,
}

impl HoverTracker {
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    /// Feed this tick's pick result. A change of target always yields the
    /// leave before the enter.
    pub fn update(&mut self, target: Option<ItemId>) -> HoverEvents {
        let mut events = HoverEvents::new();
        if target == self.hovered {
            return events;
        }
        if let Some(prev) = self.hovered {
            events.push(HoverEvent::Leave(prev));
        }
        if let Some(next) = target {
            events.push(HoverEvent::Enter(next));
        }
        self.hovered = target;
        events
    }
}

/// Latest pointer sample, overwritten by move events and read once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    ndc: Option<Vec2>,
}

impl PointerState {
    pub fn set(&mut self, ndc: Vec2) {
        self.ndc = Some(ndc.clamp(Vec2::splat(-1.0), Vec2::ONE));
    }

    /// Pointer left the viewport.
    pub fn clear(&mut self) {
        self.ndc = None;
    }

    pub fn ndc(&self) -> Option<Vec2> {
        self.ndc
    }
}
