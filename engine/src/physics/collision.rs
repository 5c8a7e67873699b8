//! Ray-Box Intersection
//!
//! Slab-method intersection of a ray with an axis-aligned bounding box,
//! reporting where the ray enters the box and through which face.
//!
//! # Example
//!
//! ```
//! use block_world_engine::physics::collision::ray_aabb_entry;
//! use glam::Vec3;
//!
//! let hit = ray_aabb_entry(
//!     Vec3::new(0.0, 0.0, -5.0),
//!     Vec3::Z,
//!     Vec3::splat(-0.5),
//!     Vec3::splat(0.5),
//! );
//! assert_eq!(hit.unwrap().distance, 4.5);
//! ```

use glam::{IVec3, Vec3};

/// Directions smaller than this on an axis are treated as parallel to it.
const PARALLEL_EPSILON: f32 = 1e-10;

/// Where a ray enters a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxEntry {
    /// Distance along the ray to the entry point (always > 0)
    pub distance: f32,
    /// Outward normal of the face the ray crossed
    pub normal: IVec3,
}

/// Intersect a ray with an AABB using the slab method.
///
/// Each axis contributes the interval during which the ray lies between the
/// two planes bounding the box on that axis. The ray is inside the box where
/// all three intervals overlap; the entry face belongs to the axis whose
/// interval starts last. Ties between axes resolve x, then y, then z.
///
/// Returns `None` when the ray misses, when the box is behind the origin, or
/// when the origin is inside (or on) the box, since no face is crossed from
/// outside in that case.
pub fn ray_aabb_entry(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<BoxEntry> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entry_axis = None;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];

        if dir.abs() < PARALLEL_EPSILON {
            // Parallel to this slab: either always inside it or never
            if origin < aabb_min[axis] || origin > aabb_max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (aabb_min[axis] - origin) * inv;
        let t2 = (aabb_max[axis] - origin) * inv;
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        if near > t_enter {
            t_enter = near;
            entry_axis = Some(axis);
        }
        t_exit = t_exit.min(far);

        if t_enter > t_exit {
            return None;
        }
    }

    let axis = entry_axis?;
    if t_enter <= 0.0 {
        return None;
    }

    let mut normal = IVec3::ZERO;
    normal[axis] = if ray_dir[axis] > 0.0 { -1 } else { 1 };

    Some(BoxEntry {
        distance: t_enter,
        normal,
    })
}
