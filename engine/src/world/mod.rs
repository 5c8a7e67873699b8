//! World Module
//!
//! Block types, the block arena, and grid snapping.
//!
//! ## Coordinates
//! One block is `BLOCK_SIZE` (1 unit) on a side. A block's position is its
//! center, so the cube spans `position ± 0.5` on every axis.

pub mod block;
pub mod grid;
pub mod model;

pub use block::{BLOCK_SIZE, Block, BlockAppearance, BlockHandle, BlockType, UnknownBlockType, cell_of, fits_cell_range};
pub use grid::{is_grid_aligned, snap_to_block_grid, snap_to_grid};
pub use model::{World, WorldChange};
