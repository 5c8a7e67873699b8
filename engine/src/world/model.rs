//! World Model
//!
//! Authoritative block storage. Blocks are arena entities addressed by
//! [`BlockHandle`]; the renderer holds handles only and mirrors the world by
//! draining [`WorldChange`] notifications once per frame.
//!
//! Handles are issued from a monotonically increasing counter, so ordering
//! the arena by handle is the same as ordering by insertion.

use std::collections::{BTreeMap, HashMap};

use glam::{IVec3, Vec3};

use super::block::{BLOCK_SIZE, Block, BlockHandle, BlockType};
use crate::config::GroundConfig;

/// A mutation the renderer must mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldChange {
    /// A block was inserted; create a mesh for it.
    Added { handle: BlockHandle, block: Block },
    /// A block was deleted; dispose its mesh.
    Removed { handle: BlockHandle, block: Block },
}

impl WorldChange {
    pub fn handle(&self) -> BlockHandle {
        match self {
            WorldChange::Added { handle, .. } | WorldChange::Removed { handle, .. } => *handle,
        }
    }
}

/// Every placed block, ground included.
///
/// Interactive blocks obey the occupancy invariant: at most one per grid cell.
/// Adding an interactive block to an occupied cell replaces the previous one
/// (last write wins). Ground blocks are kept out of the occupancy index.
#[derive(Debug, Default)]
pub struct World {
    blocks: BTreeMap<BlockHandle, Block>,
    occupancy: HashMap<IVec3, BlockHandle>,
    next_id: u64,
    changes: Vec<WorldChange>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block and return its handle.
    ///
    /// The position is stored as given; grid alignment is the caller's job.
    pub fn add(&mut self, position: Vec3, block_type: BlockType, interactive: bool) -> BlockHandle {
        let block = Block::new(position, block_type, interactive);

        if interactive {
            if let Some(&previous) = self.occupancy.get(&block.cell()) {
                log::debug!(
                    "cell {:?} already holds {:?}, replacing it",
                    block.cell(),
                    previous
                );
                self.remove(previous);
            }
        }

        let handle = BlockHandle(self.next_id);
        self.next_id += 1;

        self.blocks.insert(handle, block);
        if interactive {
            self.occupancy.insert(block.cell(), handle);
        }
        self.changes.push(WorldChange::Added { handle, block });
        log::debug!("added {} block {:?} at {}", block_type, handle, position);

        handle
    }

    /// Delete a block. Returns the removed block, or `None` for a stale handle.
    pub fn remove(&mut self, handle: BlockHandle) -> Option<Block> {
        let block = self.blocks.remove(&handle)?;

        if block.interactive && self.occupancy.get(&block.cell()) == Some(&handle) {
            self.occupancy.remove(&block.cell());
        }
        self.changes.push(WorldChange::Removed { handle, block });
        log::debug!("removed {} block {:?}", block.block_type, handle);

        Some(block)
    }

    pub fn get(&self, handle: BlockHandle) -> Option<&Block> {
        self.blocks.get(&handle)
    }

    /// Interactive blocks in insertion order. This is what gets exported.
    pub fn list(&self) -> Vec<Block> {
        self.interactive().map(|(_, block)| *block).collect()
    }

    /// All blocks, ground included, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockHandle, &Block)> + '_ {
        self.blocks.iter().map(|(handle, block)| (*handle, block))
    }

    /// Interactive blocks with their handles, in insertion order.
    pub fn interactive(&self) -> impl Iterator<Item = (BlockHandle, &Block)> + '_ {
        self.iter().filter(|(_, block)| block.interactive)
    }

    /// The interactive block occupying a grid cell, if any.
    pub fn block_at(&self, cell: IVec3) -> Option<(BlockHandle, &Block)> {
        let handle = *self.occupancy.get(&cell)?;
        self.blocks.get(&handle).map(|block| (handle, block))
    }

    /// Remove every interactive block. Ground blocks stay.
    ///
    /// Returns how many blocks were removed.
    pub fn clear(&mut self) -> usize {
        let handles: Vec<BlockHandle> = self.interactive().map(|(handle, _)| handle).collect();
        for handle in &handles {
            self.remove(*handle);
        }
        log::info!("cleared {} interactive blocks", handles.len());
        handles.len()
    }

    /// Swap the whole interactive set for `blocks` in one synchronous step.
    ///
    /// Used by import once every entry has been validated.
    pub fn replace_interactive<I>(&mut self, blocks: I) -> usize
    where
        I: IntoIterator<Item = (Vec3, BlockType)>,
    {
        self.clear();
        let mut count = 0;
        for (position, block_type) in blocks {
            self.add(position, block_type, true);
            count += 1;
        }
        count
    }

    /// Lay the fixed ground layer: a `size` x `size` square one block below y = 0.
    ///
    /// Returns the number of ground blocks added.
    pub fn seed_ground(&mut self, ground: &GroundConfig) -> usize {
        let half = ground.size / 2;
        let mut count = 0;
        for x in -half..ground.size - half {
            for z in -half..ground.size - half {
                let position = Vec3::new(
                    x as f32 * BLOCK_SIZE,
                    -BLOCK_SIZE,
                    z as f32 * BLOCK_SIZE,
                );
                self.add(position, ground.block_type, false);
                count += 1;
            }
        }
        log::info!("seeded {} ground blocks of {}", count, ground.block_type);
        count
    }

    /// Total number of blocks, ground included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn interactive_len(&self) -> usize {
        self.occupancy.len()
    }

    /// Take every change recorded since the last drain, oldest first.
    pub fn drain_changes(&mut self) -> Vec<WorldChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list_in_insertion_order() {
        let mut world = World::new();
        world.add(Vec3::new(2.0, 0.0, 0.0), BlockType::Stone, true);
        world.add(Vec3::new(0.0, 0.0, 0.0), BlockType::Wood, true);
        world.add(Vec3::new(1.0, 0.0, 0.0), BlockType::Sand, true);

        let types: Vec<BlockType> = world.list().iter().map(|b| b.block_type).collect();
        assert_eq!(types, vec![BlockType::Stone, BlockType::Wood, BlockType::Sand]);
    }

    #[test]
    fn test_list_excludes_ground() {
        let mut world = World::new();
        world.add(Vec3::new(0.0, -1.0, 0.0), BlockType::Grass, false);
        world.add(Vec3::new(0.0, 0.0, 0.0), BlockType::Stone, true);

        assert_eq!(world.len(), 2);
        assert_eq!(world.interactive_len(), 1);
        assert_eq!(world.list().len(), 1);
        assert_eq!(world.list()[0].block_type, BlockType::Stone);
    }

    #[test]
    fn test_occupied_cell_is_replaced() {
        let mut world = World::new();
        let first = world.add(Vec3::ZERO, BlockType::Stone, true);
        let second = world.add(Vec3::new(0.0, 1e-5, 0.0), BlockType::Glass, true);

        assert_ne!(first, second);
        assert!(world.get(first).is_none());
        assert_eq!(world.interactive_len(), 1);
        assert_eq!(world.list()[0].block_type, BlockType::Glass);
        assert_eq!(world.block_at(IVec3::ZERO).map(|(h, _)| h), Some(second));
    }

    #[test]
    fn test_ground_does_not_block_interactive() {
        let mut world = World::new();
        world.add(Vec3::ZERO, BlockType::Grass, false);
        world.add(Vec3::ZERO, BlockType::Stone, true);

        assert_eq!(world.len(), 2);
        assert_eq!(world.interactive_len(), 1);
    }

    #[test]
    fn test_remove_stale_handle() {
        let mut world = World::new();
        let handle = world.add(Vec3::ZERO, BlockType::Stone, true);
        assert!(world.remove(handle).is_some());
        assert!(world.remove(handle).is_none());
        assert!(world.block_at(IVec3::ZERO).is_none());
    }

    #[test]
    fn test_handles_not_reused() {
        let mut world = World::new();
        let a = world.add(Vec3::ZERO, BlockType::Stone, true);
        world.remove(a);
        let b = world.add(Vec3::ZERO, BlockType::Stone, true);
        assert!(b > a);
    }

    #[test]
    fn test_handles_continue_past_u32_range() {
        let mut world = World::new();
        world.next_id = u64::from(u32::MAX);
        let a = world.add(Vec3::ZERO, BlockType::Stone, true);
        let b = world.add(Vec3::X, BlockType::Stone, true);

        assert_eq!(a.id(), u64::from(u32::MAX));
        assert_eq!(b.id(), u64::from(u32::MAX) + 1);
        assert_eq!(world.list().len(), 2);
        assert_eq!(world.get(a).map(|block| block.position), Some(Vec3::ZERO));
    }

    #[test]
    fn test_clear_keeps_ground() {
        let mut world = World::new();
        world.add(Vec3::new(0.0, -1.0, 0.0), BlockType::Grass, false);
        world.add(Vec3::ZERO, BlockType::Stone, true);
        world.add(Vec3::X, BlockType::Stone, true);

        assert_eq!(world.clear(), 2);
        assert_eq!(world.len(), 1);
        assert!(world.list().is_empty());
    }

    #[test]
    fn test_changes_recorded_in_order() {
        let mut world = World::new();
        let a = world.add(Vec3::ZERO, BlockType::Stone, true);
        // Replacement shows up as a removal then an addition
        let b = world.add(Vec3::ZERO, BlockType::Dirt, true);

        let changes = world.drain_changes();
        assert_eq!(changes.len(), 3);
        assert!(matches!(changes[0], WorldChange::Added { handle, .. } if handle == a));
        assert!(matches!(changes[1], WorldChange::Removed { handle, .. } if handle == a));
        assert!(matches!(changes[2], WorldChange::Added { handle, .. } if handle == b));

        assert!(!world.has_pending_changes());
        assert!(world.drain_changes().is_empty());
    }

    #[test]
    fn test_seed_ground_layout() {
        let mut world = World::new();
        let count = world.seed_ground(&GroundConfig::default());

        assert_eq!(count, 400);
        assert_eq!(world.len(), 400);
        assert_eq!(world.interactive_len(), 0);

        let (min_x, max_x) = world.iter().fold((f32::MAX, f32::MIN), |(lo, hi), (_, b)| {
            (lo.min(b.position.x), hi.max(b.position.x))
        });
        assert_eq!(min_x, -10.0);
        assert_eq!(max_x, 9.0);
        assert!(world.iter().all(|(_, b)| b.position.y == -1.0));
        assert!(world.iter().all(|(_, b)| b.block_type == BlockType::Grass));
    }

    #[test]
    fn test_replace_interactive() {
        let mut world = World::new();
        world.add(Vec3::ZERO, BlockType::Stone, true);
        let count = world.replace_interactive([
            (Vec3::new(5.0, 0.0, 0.0), BlockType::Brick),
            (Vec3::new(6.0, 0.0, 0.0), BlockType::Brick),
        ]);
        assert_eq!(count, 2);
        assert!(world.block_at(IVec3::ZERO).is_none());
        assert_eq!(world.interactive_len(), 2);
    }
}
