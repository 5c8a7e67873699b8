//! Spatial Pick Resolver
//!
//! Finds the block a ray hits first. The resolver works on whatever block
//! collection it is handed, so tests can pick against synthetic sets
//! without building a whole world.

use glam::{IVec3, Vec3};

use crate::camera::Ray;
use crate::physics::ray_aabb_entry;
use crate::world::{Block, BlockHandle};

/// The nearest block along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult {
    pub handle: BlockHandle,
    /// Copy of the hit block at pick time
    pub block: Block,
    /// World-space intersection point on the block surface
    pub point: Vec3,
    /// Distance from the ray origin to `point`
    pub distance: f32,
    /// Outward normal of the face the ray crossed (axis-aligned, unit length)
    pub normal: IVec3,
}

impl PickResult {
    pub fn normal_f32(&self) -> Vec3 {
        self.normal.as_vec3()
    }
}

/// Intersect `ray` with every block in `blocks` and return the closest hit.
///
/// Only hits at a strictly positive distance count. When two blocks are hit
/// at exactly the same distance the one yielded first wins, so the result is
/// deterministic for a given iteration order.
pub fn pick<'a, I>(ray: &Ray, blocks: I) -> Option<PickResult>
where
    I: IntoIterator<Item = (BlockHandle, &'a Block)>,
{
    let mut best: Option<PickResult> = None;

    for (handle, block) in blocks {
        let (min, max) = block.aabb();
        let Some(entry) = ray_aabb_entry(ray.origin, ray.direction, min, max) else {
            continue;
        };

        let closer = best.is_none_or(|current| entry.distance < current.distance);
        if closer {
            best = Some(PickResult {
                handle,
                block: *block,
                point: ray.at(entry.distance),
                distance: entry.distance,
                normal: entry.normal,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BlockType;

    fn block(x: f32, y: f32, z: f32) -> Block {
        Block::new(Vec3::new(x, y, z), BlockType::Stone, true)
    }

    fn handles(blocks: &[Block]) -> impl Iterator<Item = (BlockHandle, &Block)> {
        blocks
            .iter()
            .enumerate()
            .map(|(i, b)| (BlockHandle(i as u64), b))
    }

    #[test]
    fn test_nearest_block_wins() {
        let blocks = [block(0.0, 0.0, 0.0), block(0.0, 0.0, 3.0), block(0.0, 0.0, -3.0)];
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z).unwrap();

        let hit = pick(&ray, handles(&blocks)).unwrap();
        assert_eq!(hit.handle, BlockHandle(1));
        assert_eq!(hit.normal, IVec3::Z);
        assert!((hit.distance - 6.5).abs() < 1e-6);
        assert!((hit.point - Vec3::new(0.0, 0.0, 3.5)).length() < 1e-6);
    }

    #[test]
    fn test_empty_space_returns_none() {
        let blocks = [block(0.0, 0.0, 0.0)];
        let ray = Ray::new(Vec3::new(50.0, 50.0, 50.0), Vec3::Y).unwrap();
        assert!(pick(&ray, handles(&blocks)).is_none());
        assert!(pick(&ray, std::iter::empty()).is_none());
    }

    #[test]
    fn test_exact_tie_keeps_first() {
        // Two coincident blocks: identical distance
        let blocks = [block(0.0, 0.0, 0.0), block(0.0, 0.0, 0.0)];
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y).unwrap();

        let hit = pick(&ray, handles(&blocks)).unwrap();
        assert_eq!(hit.handle, BlockHandle(0));
        assert_eq!(hit.normal, IVec3::Y);
    }

    #[test]
    fn test_face_normal_of_side_hit() {
        let blocks = [block(0.0, 0.0, 0.0)];
        let ray = Ray::new(Vec3::new(-4.0, 0.1, 0.2), Vec3::X).unwrap();

        let hit = pick(&ray, handles(&blocks)).unwrap();
        assert_eq!(hit.normal, IVec3::NEG_X);
        assert_eq!(hit.normal_f32(), Vec3::NEG_X);
        assert!((hit.point.x + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_only_supplied_blocks_considered() {
        let near = [block(0.0, 0.0, 5.0)];
        let far = [block(0.0, 0.0, -5.0)];
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z).unwrap();

        let hit = pick(&ray, handles(&far)).unwrap();
        assert_eq!(hit.block.position, Vec3::new(0.0, 0.0, -5.0));
        let hit = pick(&ray, handles(&near)).unwrap();
        assert_eq!(hit.block.position, Vec3::new(0.0, 0.0, 5.0));
    }
}
