//! Block Types
//!
//! The closed set of block materials, the placed-block record, and the
//! appearance table the renderer uses to build one material per type.

use std::fmt;
use std::str::FromStr;

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Edge length of every block, in world units.
pub const BLOCK_SIZE: f32 = 1.0;

/// Material tag of a block.
///
/// Serialized as the upper-case tag (`"GRASS"`, `"STONE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    Wood,
    Water,
    Leaves,
    Sand,
    Glass,
    Brick,
    Obsidian,
}

impl BlockType {
    /// All block types in palette order.
    pub const ALL: [BlockType; 10] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Water,
        BlockType::Leaves,
        BlockType::Sand,
        BlockType::Glass,
        BlockType::Brick,
        BlockType::Obsidian,
    ];

    /// The serialized tag of this type.
    pub fn tag(self) -> &'static str {
        match self {
            BlockType::Grass => "GRASS",
            BlockType::Dirt => "DIRT",
            BlockType::Stone => "STONE",
            BlockType::Wood => "WOOD",
            BlockType::Water => "WATER",
            BlockType::Leaves => "LEAVES",
            BlockType::Sand => "SAND",
            BlockType::Glass => "GLASS",
            BlockType::Brick => "BRICK",
            BlockType::Obsidian => "OBSIDIAN",
        }
    }

    /// Name shown in the palette.
    pub fn display_name(self) -> &'static str {
        match self {
            BlockType::Grass => "Grass",
            BlockType::Dirt => "Dirt",
            BlockType::Stone => "Stone",
            BlockType::Wood => "Wood",
            BlockType::Water => "Water",
            BlockType::Leaves => "Leaves",
            BlockType::Sand => "Sand",
            BlockType::Glass => "Glass",
            BlockType::Brick => "Brick",
            BlockType::Obsidian => "Obsidian",
        }
    }

    /// Visual description for the renderer.
    pub fn appearance(self) -> BlockAppearance {
        match self {
            BlockType::Grass => BlockAppearance::opaque(0x63b949),
            BlockType::Dirt => BlockAppearance::opaque(0x8b4513),
            BlockType::Stone => BlockAppearance::opaque(0x808080),
            BlockType::Wood => BlockAppearance::opaque(0xdeb887),
            BlockType::Water => BlockAppearance::translucent(0x1ca3ec, 0.7),
            BlockType::Leaves => BlockAppearance::opaque(0x228b22),
            BlockType::Sand => BlockAppearance::opaque(0xf4a460),
            BlockType::Glass => BlockAppearance::translucent(0xadd8e6, 0.5),
            BlockType::Brick => BlockAppearance::opaque(0xb22222),
            BlockType::Obsidian => BlockAppearance::opaque(0x3b003b),
        }
    }
}

impl Default for BlockType {
    fn default() -> Self {
        BlockType::Grass
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string is not one of the block type tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type: {0:?}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|ty| ty.tag() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// Color and transparency of a block material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockAppearance {
    /// 0xRRGGBB
    pub color: u32,
    pub opacity: f32,
    pub transparent: bool,
}

impl BlockAppearance {
    const fn opaque(color: u32) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
        }
    }

    const fn translucent(color: u32, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            transparent: true,
        }
    }

    /// Color as RGB floats in 0..=1.
    pub fn rgb(&self) -> [f32; 3] {
        [
            ((self.color >> 16) & 0xff) as f32 / 255.0,
            ((self.color >> 8) & 0xff) as f32 / 255.0,
            (self.color & 0xff) as f32 / 255.0,
        ]
    }
}

/// A placed unit cube.
///
/// `position` is the cube center. Interactive blocks are user-placed: they can
/// be removed and are exported. Non-interactive blocks form the fixed ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub position: Vec3,
    pub block_type: BlockType,
    pub interactive: bool,
}

impl Block {
    pub fn new(position: Vec3, block_type: BlockType, interactive: bool) -> Self {
        Self {
            position,
            block_type,
            interactive,
        }
    }

    /// Grid cell this block occupies (position rounded to the nearest cell).
    pub fn cell(&self) -> IVec3 {
        cell_of(self.position)
    }

    /// Minimum and maximum corners of the block's bounding box.
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let half = Vec3::splat(BLOCK_SIZE * 0.5);
        (self.position - half, self.position + half)
    }
}

/// Round a world position to the grid cell containing its nearest cell center.
///
/// Cells past the `i32` range saturate; check [`fits_cell_range`] first for
/// untrusted coordinates.
pub fn cell_of(position: Vec3) -> IVec3 {
    (position / BLOCK_SIZE).round().as_ivec3()
}

/// True when a coordinate's cell index is representable as an `i32`.
pub fn fits_cell_range(coordinate: f32) -> bool {
    let cell = (coordinate / BLOCK_SIZE).round();
    cell >= i32::MIN as f32 && cell < i32::MAX as f32
}

/// Stable identifier of a block inside a [`World`](super::World).
///
/// Handles are never reused, so a stale handle simply fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockHandle(pub(crate) u64);

impl BlockHandle {
    /// Wrap a raw id. Handles built this way only resolve if a world issued them.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric id, for renderers that key meshes by integer.
    pub fn id(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for ty in BlockType::ALL {
            assert_eq!(ty.tag().parse::<BlockType>(), Ok(ty));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(
            "LAVA".parse::<BlockType>(),
            Err(UnknownBlockType("LAVA".to_string()))
        );
        // Tags are case sensitive
        assert!("grass".parse::<BlockType>().is_err());
    }

    #[test]
    fn test_serde_uses_upper_case_tags() {
        let json = serde_json::to_string(&BlockType::Obsidian).unwrap();
        assert_eq!(json, "\"OBSIDIAN\"");
        let back: BlockType = serde_json::from_str("\"LEAVES\"").unwrap();
        assert_eq!(back, BlockType::Leaves);
    }

    #[test]
    fn test_transparent_materials() {
        let water = BlockType::Water.appearance();
        assert!(water.transparent);
        assert_eq!(water.opacity, 0.7);

        let glass = BlockType::Glass.appearance();
        assert!(glass.transparent);
        assert_eq!(glass.opacity, 0.5);

        assert!(!BlockType::Stone.appearance().transparent);
    }

    #[test]
    fn test_appearance_rgb() {
        let rgb = BlockType::Stone.appearance().rgb();
        for c in rgb {
            assert!((c - 128.0 / 255.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_block_aabb_and_cell() {
        let block = Block::new(Vec3::new(2.0, -1.0, 0.0), BlockType::Dirt, true);
        let (min, max) = block.aabb();
        assert_eq!(min, Vec3::new(1.5, -1.5, -0.5));
        assert_eq!(max, Vec3::new(2.5, -0.5, 0.5));
        assert_eq!(block.cell(), IVec3::new(2, -1, 0));

        // Drift is absorbed by rounding
        assert_eq!(cell_of(Vec3::new(0.9999, 1.0001, -2.00001)), IVec3::new(1, 1, -2));
    }

    #[test]
    fn test_cell_range_limits() {
        assert!(fits_cell_range(0.0));
        assert!(fits_cell_range(-2_147_483_648.0));
        assert!(fits_cell_range(2.0e9));
        assert!(!fits_cell_range(3.0e9));
        assert!(!fits_cell_range(-4.0e9));
        assert!(!fits_cell_range(2_147_483_648.0));
    }
}
