//! Block Placement
//!
//! Applies place/remove actions to the world. Both operations run only
//! after a successful pick; a missing pick or an ineligible target is an
//! ordinary outcome, never an error.

use glam::Vec3;

use crate::picking::PickResult;
use crate::world::{BLOCK_SIZE, BlockHandle, BlockType, World, snap_to_block_grid};

/// Why a build action did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The ray hit no block
    NoPick,
    /// The picked block is fixed ground
    NotInteractive,
    /// The picked block no longer exists
    StaleTarget,
}

/// Result of a build action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Placed(BlockHandle),
    Removed(BlockHandle),
    Ignored(IgnoreReason),
}

impl BuildOutcome {
    /// True if the world changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, BuildOutcome::Ignored(_))
    }
}

/// Center of the block that would be placed against the picked face.
///
/// The neighbor one block along the face normal, snapped to the grid so
/// float error in the normal cannot produce an off-grid block.
pub fn adjacent_block_position(pick: &PickResult) -> Vec3 {
    snap_to_block_grid(pick.block.position + pick.normal_f32() * BLOCK_SIZE)
}

/// Place a block of `block_type` against the picked face.
///
/// If the target cell already holds an interactive block, the world's
/// last-write-wins policy replaces it.
pub fn place_block(world: &mut World, pick: Option<&PickResult>, block_type: BlockType) -> BuildOutcome {
    let Some(pick) = pick else {
        return BuildOutcome::Ignored(IgnoreReason::NoPick);
    };

    let position = adjacent_block_position(pick);
    let handle = world.add(position, block_type, true);
    BuildOutcome::Placed(handle)
}

/// Remove the picked block if it is interactive.
pub fn remove_block(world: &mut World, pick: Option<&PickResult>) -> BuildOutcome {
    let Some(pick) = pick else {
        return BuildOutcome::Ignored(IgnoreReason::NoPick);
    };

    match world.get(pick.handle) {
        None => BuildOutcome::Ignored(IgnoreReason::StaleTarget),
        Some(block) if !block.interactive => BuildOutcome::Ignored(IgnoreReason::NotInteractive),
        Some(_) => {
            world.remove(pick.handle);
            BuildOutcome::Removed(pick.handle)
        }
    }
}
