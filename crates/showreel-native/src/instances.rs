//! Flattens the scene into one instance per impostor quad, back to front.

use crate::labels::LabelAtlas;
use glam::{Quat, Vec3, Vec4};
use showreel_core::{Scene, TEXTURE_FALLBACK_COLOR};

pub const KIND_SPHERE: f32 = 0.0;
pub const KIND_RING: f32 = 1.0;
pub const KIND_POINT: f32 = 2.0;
pub const KIND_LABEL: f32 = 3.0;
pub const KIND_PLANET: f32 = 4.0;
pub const KIND_GLOW: f32 = 5.0;

/// Quad spans the camera's right/up axes.
pub const ORIENT_CAMERA: f32 = 0.0;
/// Quad spans the instance rotation's local X/Y axes.
pub const ORIENT_QUAD: f32 = 1.0;
/// Camera-facing silhouette, shaded in the instance rotation's frame.
pub const ORIENT_SHADE: f32 = 2.0;

const STAR_SCALE: f32 = 1.5;
const DUST_SCALE: f32 = 2.0;
const PLANET_COLOR: [f32; 3] = [0.03, 0.035, 0.06];
const SUN_COLOR: [f32; 3] = [1.0, 0.85, 0.6];
const SUN_SIZE: f32 = 18.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    /// x: kind, y: ring inner ratio or label aspect, z: orient mode, w: label atlas row.
    pub params: [f32; 4],
    /// Quaternion (x, y, z, w).
    pub rotation: [f32; 4],
}

impl InstanceData {
    fn new(pos: Vec3, scale: f32, color: Vec4, kind: f32, extra: f32) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            color: color.to_array(),
            params: [kind, extra, ORIENT_CAMERA, -1.0],
            rotation: Quat::IDENTITY.to_array(),
        }
    }

    fn oriented(mut self, mode: f32, rotation: Quat) -> Self {
        self.params[2] = mode;
        self.rotation = rotation.to_array();
        self
    }

    fn with_label_row(mut self, row: Option<u32>) -> Self {
        self.params[3] = row.map_or(-1.0, |r| r as f32);
        self
    }
}

/// Preview stand-in colour for an item whose texture is playing.
fn preview_tint(index: usize) -> Vec3 {
    let hue = (index as f32 * 0.618_034).fract();
    let k = |n: f32| {
        let k = (n + hue * 6.0) % 6.0;
        1.0 - (k.min(4.0 - k).clamp(0.0, 1.0)) * 0.55
    };
    Vec3::new(k(5.0), k(3.0), k(1.0)) * 0.8
}

/// Half-size of a billboard at `center` that covers the silhouette of a sphere.
fn silhouette_half_size(eye: Vec3, center: Vec3, radius: f32) -> f32 {
    let d = eye.distance(center);
    if d <= radius {
        return radius;
    }
    let s = radius / d;
    radius / (1.0 - s * s).sqrt()
}

pub fn build(scene: &Scene, labels: &LabelAtlas, out: &mut Vec<InstanceData>) {
    out.clear();
    let ambient = scene.ambient();
    let eye = scene.camera().eye;
    let t = scene.elapsed();

    out.push(InstanceData::new(
        ambient.sun,
        SUN_SIZE,
        Vec3::from(SUN_COLOR).extend(0.5),
        KIND_GLOW,
        0.0,
    ));

    for layer in &ambient.stars {
        let c = layer.config;
        for star in &layer.stars {
            out.push(InstanceData::new(
                star.position,
                c.size * STAR_SCALE,
                c.color.extend(c.opacity * star.twinkle(t)),
                KIND_POINT,
                0.0,
            ));
        }
    }

    if let Some(planet) = &ambient.planet {
        out.push(InstanceData::new(
            planet.center,
            silhouette_half_size(planet.uniforms.camera_pos, planet.center, planet.radius),
            Vec3::from(PLANET_COLOR).extend(1.0),
            KIND_PLANET,
            0.0,
        ));
    }

    if let Some(dust) = &ambient.dust {
        let c = dust.config;
        for p in &dust.particles {
            out.push(InstanceData::new(
                dust.rotation * p.position,
                c.size * DUST_SCALE,
                c.color.extend(c.opacity),
                KIND_POINT,
                0.0,
            ));
        }
    }

    let deco = scene.config.decoration;
    let mut order: Vec<usize> = (0..scene.items().len()).collect();
    order.sort_by(|&a, &b| {
        let da = scene.items()[a].group.position.distance_squared(eye);
        let db = scene.items()[b].group.position.distance_squared(eye);
        db.total_cmp(&da)
    });
    for i in order {
        let item = &scene.items()[i];
        let scale = item.group.scale;
        let base = if item.texture.is_live() {
            preview_tint(item.id)
        } else {
            Vec3::from(TEXTURE_FALLBACK_COLOR)
        };
        out.push(
            InstanceData::new(
                item.group.position,
                deco.sphere_radius * scale,
                base.extend(1.0),
                KIND_SPHERE,
                0.0,
            )
            .oriented(ORIENT_SHADE, item.group.rotation),
        );
        out.push(
            InstanceData::new(
                item.group.position,
                item.ring.outer_radius * scale,
                item.ring.color.extend(item.ring.opacity),
                KIND_RING,
                item.ring.inner_radius / item.ring.outer_radius,
            )
            .oriented(ORIENT_QUAD, item.ring.rotation),
        );
        let [w, h] = item.label.size;
        let alpha = if scene.hovered() == Some(item.id) {
            0.55
        } else {
            0.3
        };
        out.push(
            InstanceData::new(
                item.label.position,
                h * 0.5,
                Vec4::new(0.06, 0.07, 0.1, alpha),
                KIND_LABEL,
                w / h,
            )
            .oriented(ORIENT_QUAD, item.label.rotation)
            .with_label_row(labels.row_for(item.id)),
        );
    }
}
