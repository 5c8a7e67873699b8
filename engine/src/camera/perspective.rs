//! Perspective Camera
//!
//! Look-at perspective camera with OpenGL clip conventions. The orbit
//! controller that moves it lives with the renderer; this side only needs
//! the camera's current state to turn a pointer into a world ray.

use glam::{Mat4, Vec2, Vec3};

use super::raycast::Ray;
use crate::config::CameraConfig;

/// Depth in NDC used when unprojecting a pointer (anywhere in (-1, 1) works).
const UNPROJECT_DEPTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: config.position,
            target: config.target,
            up: Vec3::Y,
            fov_degrees: config.fov_degrees,
            aspect,
            near: config.near,
            far: config.far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio after the viewport is resized.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Ray from the camera through a point given in NDC.
    ///
    /// The NDC point is unprojected back into world space and the ray runs
    /// from the camera position through it. Returns `None` if the camera
    /// state is degenerate (e.g. position equal to target).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let inverse = self.view_projection_matrix().inverse();
        let world = inverse.project_point3(Vec3::new(ndc.x, ndc.y, UNPROJECT_DEPTH));
        Ray::new(self.position, world - self.position)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }
}
