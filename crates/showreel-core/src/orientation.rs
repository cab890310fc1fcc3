//! Camera-facing rotations (billboarding) and label placement.

use crate::camera::Camera;
use glam::{Mat3, Quat, Vec3};

/// Which parts of an item turn to face the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrientationMode {
    /// The sphere keeps its rest rotation; ring and label billboard.
    DecorationsOnly,
    /// The whole group turns so the textured front of the sphere faces the viewer.
    #[default]
    WholeGroup,
}

/// Rotation whose local +Z points from `from` toward `to`.
///
/// Falls back to identity when the points coincide and picks another
/// reference axis when the direction is parallel to `up`.
pub fn look_at_rotation(from: Vec3, to: Vec3, up: Vec3) -> Quat {
    let z = (to - from).normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut x = up.cross(z);
    if x.length_squared() < 1e-12 {
        let alt = if z.z.abs() < 0.9 { Vec3::Z } else { Vec3::X };
        x = alt.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Label anchor: the item position pushed "down" along the viewer's up axis.
#[inline]
pub fn label_position(item_world: Vec3, camera_up: Vec3, offset: f32) -> Vec3 {
    item_world - camera_up * offset
}

/// Per-frame orientation of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemOrientation {
    pub group: Quat,
    pub ring: Quat,
    pub label_position: Vec3,
    pub label: Quat,
}

/// All rotations are world-space.
pub fn resolve(
    camera: &Camera,
    camera_up: Vec3,
    item_world: Vec3,
    label_offset: f32,
    mode: OrientationMode,
) -> ItemOrientation {
    let facing = look_at_rotation(item_world, camera.eye, Vec3::Y);
    let group = match mode {
        OrientationMode::DecorationsOnly => Quat::IDENTITY,
        OrientationMode::WholeGroup => facing,
    };
    ItemOrientation {
        group,
        ring: facing,
        label_position: label_position(item_world, camera_up, label_offset),
        label: camera.rotation(),
    }
}
