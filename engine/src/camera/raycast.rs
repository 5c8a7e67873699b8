//! Raycast Module
//!
//! Rays and the conversion from pointer coordinates to normalized device
//! coordinates (NDC) that every pick starts from.

use glam::{Vec2, Vec3};

/// A half-line in world space. `direction` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    ///
    /// Returns `None` when the direction is zero or not finite.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// The on-screen rectangle the scene is drawn into, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A viewport anchored at the window origin.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width over height, or 1.0 for a degenerate viewport.
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_degenerate() {
            1.0
        } else {
            self.width / self.height
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Convert a client-pixel position to NDC.
    ///
    /// NDC spans -1..1 on both axes with +y up, so the top-left corner of the
    /// viewport maps to (-1, 1). Returns `None` for a zero-sized viewport.
    pub fn to_ndc(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        let x = ((client_x - self.left) / self.width) * 2.0 - 1.0;
        let y = -((client_y - self.top) / self.height) * 2.0 + 1.0;
        Some(Vec2::new(x, y))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::sized(1280.0, 720.0)
    }
}
