//! The scene aggregate: item hierarchy, ambient elements and the per-frame
//! pipeline (motion, orientation, picking, feedback).

use crate::ambient::Ambient;
use crate::camera::{Camera, CameraRig};
use crate::catalog::{self, ItemMeta};
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::feedback::{Cursor, FeedbackAnimator};
use crate::layout::{layout, phase_for};
use crate::motion::{drift_target, offset_y};
use crate::orientation::resolve;
use crate::picking::{pick, HoverEvents, HoverTracker, ItemId, PickCandidate, PointerState};
use crate::texture::{TextureProvider, TextureSlot};
use crate::tween::{Property, PropertyTarget, PropertyValue, TweenKey};
use glam::{Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupTransform {
    pub position: Vec3,
    pub rotation: Quat,
    /// Uniform scale.
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub rotation: Quat,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub opacity: f32,
    pub color: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub position: Vec3,
    pub rotation: Quat,
    pub size: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct Item {
    pub id: ItemId,
    pub meta: ItemMeta,
    pub base_position: Vec3,
    pub phase: f32,
    pub group: GroupTransform,
    pub ring: Ring,
    pub label: Label,
    pub texture: TextureSlot,
}

impl Item {
    /// Radius of the primary sphere in world units, including hover scale.
    pub fn pick_radius(&self, sphere_radius: f32) -> f32 {
        sphere_radius * self.group.scale
    }
}

impl PropertyTarget for Vec<Item> {
    fn read(&self, key: TweenKey) -> Option<PropertyValue> {
        let item = self.get(key.item)?;
        Some(match key.property {
            Property::GroupScale => PropertyValue::Scalar(item.group.scale),
            Property::RingOpacity => PropertyValue::Scalar(item.ring.opacity),
            Property::RingColor => PropertyValue::Color(item.ring.color),
        })
    }

    fn write(&mut self, key: TweenKey, value: PropertyValue) -> bool {
        let Some(item) = self.get_mut(key.item) else {
            return false;
        };
        match (key.property, value) {
            (Property::GroupScale, PropertyValue::Scalar(v)) => item.group.scale = v,
            (Property::RingOpacity, PropertyValue::Scalar(v)) => item.ring.opacity = v,
            (Property::RingColor, PropertyValue::Color(c)) => item.ring.color = c,
            _ => return false,
        }
        true
    }
}

/// Emitted when a click lands on an item. Sole trigger for the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    pub item: ItemId,
    pub meta: ItemMeta,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub hover_events: HoverEvents,
    pub hovered: Option<ItemId>,
    pub cursor: Cursor,
}

pub struct Scene {
    pub config: SceneConfig,
    items: Vec<Item>,
    candidates: Vec<PickCandidate>,
    rig: CameraRig,
    pointer: PointerState,
    hover: HoverTracker,
    feedback: FeedbackAnimator,
    ambient: Ambient,
    elapsed: f32,
}

impl Scene {
    pub fn new(config: SceneConfig, catalog: &[ItemMeta]) -> Result<Self, SceneError> {
        config.validate()?;
        let n = config.item_count;
        if n > 0 && catalog.is_empty() {
            return Err(SceneError::EmptyCatalog { requested: n });
        }
        let positions = layout(n, &config.layout)?;
        let metas = catalog::expand(catalog, n);
        let deco = config.decoration;
        let items = positions
            .into_iter()
            .zip(metas)
            .enumerate()
            .map(|(i, (position, meta))| {
                let texture = TextureSlot::new(meta.preview.clone());
                Item {
                    id: i,
                    base_position: position,
                    phase: phase_for(i, n),
                    group: GroupTransform {
                        position,
                        rotation: Quat::IDENTITY,
                        scale: config.feedback.rest_scale,
                    },
                    ring: Ring {
                        rotation: Quat::IDENTITY,
                        inner_radius: deco.sphere_radius * deco.ring_inner_mult,
                        outer_radius: deco.sphere_radius * deco.ring_outer_mult,
                        opacity: deco.ring_initial_opacity,
                        color: config.feedback.ring_rest_color,
                    },
                    label: Label {
                        position: position - Vec3::Y * deco.label_offset(),
                        rotation: Quat::IDENTITY,
                        size: deco.label_size,
                    },
                    texture,
                    meta,
                }
            })
            .collect::<Vec<_>>();
        let candidates = items
            .iter()
            .map(|item| PickCandidate {
                item: item.id,
                center: item.group.position,
                radius: item.pick_radius(deco.sphere_radius),
            })
            .collect();
        let ambient = Ambient::build(&config.ambient, config.seed);
        log::info!(
            "[scene] items={} layout={} stars={} dust={} planet={}",
            items.len(),
            match config.layout {
                crate::layout::LayoutStrategy::GoldenAngle { .. } => "golden",
                crate::layout::LayoutStrategy::Curated { .. } => "curated",
            },
            ambient.star_count(),
            ambient.dust.as_ref().map_or(0, |d| d.particles.len()),
            ambient.planet.is_some(),
        );
        Ok(Self {
            rig: CameraRig::new(Camera::default(), config.controls),
            feedback: FeedbackAnimator::new(config.feedback),
            config,
            items,
            candidates,
            pointer: PointerState::default(),
            hover: HoverTracker::default(),
            ambient,
            elapsed: 0.0,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn camera(&self) -> &Camera {
        &self.rig.camera
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn ambient(&self) -> &Ambient {
        &self.ambient
    }

    pub fn feedback(&self) -> &FeedbackAnimator {
        &self.feedback
    }

    pub fn hovered(&self) -> Option<ItemId> {
        self.hover.hovered()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn candidates(&self) -> &[PickCandidate] {
        &self.candidates
    }

    /// Pointer-move: overwrite the latest sample; picking happens on tick.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer.set(ndc);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.ndc()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.rig.set_auto_rotate(enabled);
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.rig.drag(dx_px, dy_px);
    }

    /// Advance the scene to `elapsed` seconds since start.
    pub fn tick(&mut self, elapsed: f32) -> FrameReport {
        let dt = (elapsed - self.elapsed).max(0.0);
        self.elapsed = elapsed;

        let target = drift_target(elapsed, &self.config.drift);
        self.rig.update(dt, target);

        self.apply_motion(elapsed);
        self.apply_orientation();
        self.refresh_candidates();

        let hit = self
            .pointer
            .ndc()
            .and_then(|ndc| pick(ndc, &self.rig.camera, &self.candidates));
        let hover_events = self.hover.update(hit.map(|h| h.item));
        for ev in &hover_events {
            log::debug!("[pick] {:?}", ev);
            self.feedback.on_hover(*ev, elapsed, &self.items);
        }
        self.feedback.advance(elapsed, &mut self.items);

        self.ambient.update(elapsed, self.rig.camera.eye);

        FrameReport {
            hover_events,
            hovered: self.hover.hovered(),
            cursor: self.feedback.cursor(),
        }
    }

    /// Click/tap at `ndc`, tested immediately against the current geometry.
    pub fn click(&mut self, ndc: Vec2) -> Option<Activation> {
        self.pointer.set(ndc);
        for item in &mut self.items {
            item.texture.retry_now();
        }
        let hit = pick(ndc, &self.rig.camera, &self.candidates)?;
        let item = &self.items[hit.item];
        log::info!("[click] activate item {} ({})", item.id, item.meta.client);
        Some(Activation {
            item: item.id,
            meta: item.meta.clone(),
        })
    }

    /// Give every texture that wants it another chance to start.
    pub fn service_textures(&mut self, provider: &mut impl TextureProvider) {
        let now = self.elapsed;
        for item in &mut self.items {
            if !item.texture.wants_retry(now) {
                continue;
            }
            let Some(source) = item.texture.source.clone() else {
                continue;
            };
            if provider.try_start(item.id, &source) {
                log::info!("[texture] item {} playing {}", item.id, source);
                item.texture.mark_playing();
            } else {
                log::debug!("[texture] item {} blocked, retrying later", item.id);
                item.texture.mark_blocked(now);
            }
        }
    }

    fn apply_motion(&mut self, elapsed: f32) {
        let params = self.config.motion;
        for item in &mut self.items {
            item.group.position.y = offset_y(item.base_position.y, item.phase, elapsed, &params);
        }
    }

    fn apply_orientation(&mut self) {
        let camera = &self.rig.camera;
        let up = camera.up_world();
        let offset = self.config.decoration.label_offset();
        let mode = self.config.orientation;
        for item in &mut self.items {
            let o = resolve(camera, up, item.group.position, offset, mode);
            item.group.rotation = o.group;
            item.ring.rotation = o.ring;
            item.label.position = o.label_position;
            item.label.rotation = o.label;
        }
    }

    fn refresh_candidates(&mut self) {
        let radius = self.config.decoration.sphere_radius;
        for (c, item) in self.candidates.iter_mut().zip(&self.items) {
            c.center = item.group.position;
            c.radius = item.pick_radius(radius);
        }
    }
}
