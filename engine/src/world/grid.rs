//! Grid Snapping
//!
//! Block centers live on a regular lattice with spacing `BLOCK_SIZE`.
//! Positions computed from float normals drift slightly off the lattice,
//! so every placement goes through [`snap_to_grid`].

use glam::Vec3;

use super::block::BLOCK_SIZE;

/// Snap each axis of a position to the nearest multiple of `grid_size`.
pub fn snap_to_grid(pos: Vec3, grid_size: f32) -> Vec3 {
    (pos / grid_size).round() * grid_size
}

/// Snap to the block lattice.
pub fn snap_to_block_grid(pos: Vec3) -> Vec3 {
    snap_to_grid(pos, BLOCK_SIZE)
}

/// True when every coordinate is an exact multiple of `BLOCK_SIZE`.
pub fn is_grid_aligned(pos: Vec3) -> bool {
    let scaled = pos / BLOCK_SIZE;
    scaled.round() == scaled
}
