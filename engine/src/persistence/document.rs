//! World Document
//!
//! The versioned JSON shape a world is exported to:
//!
//! ```text
//! { "version": 1, "blocks": [ { "x": 0, "y": 0, "z": 0, "type": "STONE" }, ... ] }
//! ```
//!
//! Whole-number coordinates are written as JSON integers so documents stay
//! byte-compatible with the browser editor's output.

use serde::{Deserialize, Serialize};

use crate::world::{Block, BlockType};

/// The only document version this crate reads and the one it always writes.
pub const WORLD_DOCUMENT_VERSION: u32 = 1;

/// A serialized world: every interactive block, in world order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldDocument {
    pub version: u32,
    pub blocks: Vec<BlockRecord>,
}

impl WorldDocument {
    /// A current-version document holding `blocks`.
    pub fn new(blocks: Vec<BlockRecord>) -> Self {
        Self {
            version: WORLD_DOCUMENT_VERSION,
            blocks,
        }
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// JSON text indented by two spaces, the format offered for download.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// One serialized block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(serialize_with = "coord::serialize")]
    pub x: f32,
    #[serde(serialize_with = "coord::serialize")]
    pub y: f32,
    #[serde(serialize_with = "coord::serialize")]
    pub z: f32,
    #[serde(rename = "type")]
    pub block_type: BlockType,
}

impl From<&Block> for BlockRecord {
    fn from(block: &Block) -> Self {
        Self {
            x: block.position.x,
            y: block.position.y,
            z: block.position.z,
            block_type: block.block_type,
        }
    }
}

pub(super) mod coord {
    use serde::Serializer;

    /// Above this magnitude every f32 is whole but may not fit an i64.
    const MAX_INTEGRAL: f32 = 9.0e15;

    fn is_integral(value: f32) -> bool {
        value.fract() == 0.0 && value.abs() < MAX_INTEGRAL
    }

    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if is_integral(*value) {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f32(*value)
        }
    }

    /// The number a stored coordinate reads back as once exported.
    ///
    /// Whole values are written exactly; the rest as the shortest decimal
    /// that round-trips through f32.
    pub fn exported_value(value: f32) -> f64 {
        if is_integral(value) {
            return f64::from(value);
        }
        value.to_string().parse().unwrap_or(f64::from(value))
    }
}
