//! Perspective camera and the orbit-style rig that steers it.
//!
//! The rig never translates the viewer: the eye stays a hair away from the
//! look-at target, so yaw/pitch only change where the viewer is looking.

use crate::constants::{
    AUTO_ROTATE_SPEED, CAMERA_EYE_OFFSET, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, PITCH_LIMIT,
    ROTATE_DAMPING, ROTATE_SPEED,
};
use glam::{Mat3, Mat4, Quat, Vec3};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_EYE_OFFSET),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// World-space rotation of the camera (camera looks down its local -Z).
    pub fn rotation(&self) -> Quat {
        let back = -self.forward();
        let right = self.up.cross(back).normalize_or_zero();
        let up = back.cross(right);
        Quat::from_mat3(&Mat3::from_cols(right, up, back))
    }

    /// The camera's "up" direction expressed in world space.
    pub fn up_world(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Project a world point to NDC; `None` when it is behind the camera.
    pub fn project(&self, world: Vec3) -> Option<glam::Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate().truncate() / clip.w)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }
}

/// Tunables for the rig, orbit-controls style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlParams {
    pub rotate_speed: f32,
    pub damping: f32,
    pub auto_rotate_speed: f32,
    pub auto_rotate: bool,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            rotate_speed: ROTATE_SPEED,
            damping: ROTATE_DAMPING,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            auto_rotate: true,
        }
    }
}

/// Drag/auto-rotate/damping controller around a (drifting) target.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    pub params: ControlParams,
    /// Azimuth of the eye around the target; 0 puts the eye on +Z.
    yaw: f32,
    /// Elevation of the eye above the target plane.
    pitch: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    viewport_height: f32,
}

impl CameraRig {
    pub fn new(camera: Camera, params: ControlParams) -> Self {
        let offset = camera.eye - camera.target;
        let len = offset.length().max(f32::EPSILON);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / len).clamp(-1.0, 1.0).asin();
        Self {
            camera,
            params,
            yaw,
            pitch,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            viewport_height: 1.0,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn auto_rotate(&self) -> bool {
        self.params.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        if self.params.auto_rotate != enabled {
            log::debug!("[camera] auto_rotate={}", enabled);
        }
        self.params.auto_rotate = enabled;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        self.viewport_height = height.max(1) as f32;
    }

    /// Queue a pointer drag in pixels. Applied gradually by `update`.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        let k = TAU / self.viewport_height * self.params.rotate_speed;
        self.pending_yaw -= dx_px * k;
        self.pending_pitch += dy_px * k;
    }

    /// Rotate immediately, bypassing damping.
    pub fn rotate_by(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = wrap_angle(self.yaw + d_yaw);
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.place_eye();
    }

    /// Advance auto-rotation and damped drag, then re-aim at `target`.
    pub fn update(&mut self, dt: f32, target: Vec3) {
        if self.params.auto_rotate {
            // orbit-controls units: speed 1.0 is one turn per 60 s
            self.yaw -= TAU / 60.0 * self.params.auto_rotate_speed * dt;
        }
        let damping = self.params.damping.clamp(0.0, 1.0);
        self.yaw = wrap_angle(self.yaw + self.pending_yaw * damping);
        self.pitch = (self.pitch + self.pending_pitch * damping).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.pending_yaw *= 1.0 - damping;
        self.pending_pitch *= 1.0 - damping;
        self.camera.target = target;
        self.place_eye();
    }

    fn place_eye(&mut self) {
        let dir = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.camera.eye = self.camera.target + dir * CAMERA_EYE_OFFSET;
    }
}

fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
