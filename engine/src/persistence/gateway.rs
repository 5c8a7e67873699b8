//! Serialization Gateway
//!
//! Converts between a [`World`] and a [`WorldDocument`].
//!
//! Import is validate-then-replace: the whole document is checked first and
//! the world is touched only once every block has passed, so a corrupt or
//! foreign file can never leave the world half replaced.

use glam::Vec3;
use serde_json::Value;

use super::document::{BlockRecord, WORLD_DOCUMENT_VERSION, WorldDocument, coord};
use crate::world::{BlockType, UnknownBlockType, World, fits_cell_range};

/// Why a document was rejected. The world is unchanged in every case.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unsupported world document version: {found}")]
    UnsupportedVersion { found: String },

    #[error("malformed world document: {reason}")]
    MalformedDocument { reason: &'static str },

    #[error("invalid block at index {index}: {reason}")]
    InvalidBlock { index: usize, reason: String },

    #[error("world document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot every interactive block into a current-version document.
pub fn export(world: &World) -> WorldDocument {
    WorldDocument::new(world.list().iter().map(BlockRecord::from).collect())
}

/// Check a parsed document without touching any world.
///
/// Returns the validated blocks in document order.
pub fn validate(document: &Value) -> Result<Vec<BlockRecord>, ImportError> {
    let Some(fields) = document.as_object() else {
        return Err(ImportError::MalformedDocument {
            reason: "document is not an object",
        });
    };

    match fields.get("version") {
        Some(version) if version.as_f64() == Some(f64::from(WORLD_DOCUMENT_VERSION)) => {}
        Some(version) => {
            return Err(ImportError::UnsupportedVersion {
                found: version.to_string(),
            });
        }
        None => {
            return Err(ImportError::UnsupportedVersion {
                found: "missing".to_string(),
            });
        }
    }

    let Some(entries) = fields.get("blocks").and_then(Value::as_array) else {
        return Err(ImportError::MalformedDocument {
            reason: "`blocks` is missing or not an array",
        });
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            validate_block(entry).map_err(|reason| ImportError::InvalidBlock { index, reason })
        })
        .collect()
}

fn validate_block(entry: &Value) -> Result<BlockRecord, String> {
    let Some(fields) = entry.as_object() else {
        return Err("entry is not an object".to_string());
    };

    let coordinate = |name: &str| -> Result<f32, String> {
        let value = fields
            .get(name)
            .ok_or_else(|| format!("missing `{name}`"))?;
        let number = value
            .as_f64()
            .ok_or_else(|| format!("`{name}` is not a number: {value}"))?;
        let stored = number as f32;
        if !stored.is_finite() || !fits_cell_range(stored) {
            return Err(format!("`{name}` is out of range: {number}"));
        }
        // Reject values f32 would round, so export writes back what was read
        if coord::exported_value(stored) != number {
            return Err(format!("`{name}` is not representable as f32: {number}"));
        }
        Ok(stored)
    };

    let x = coordinate("x")?;
    let y = coordinate("y")?;
    let z = coordinate("z")?;

    let tag = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| "`type` is missing or not a string".to_string())?;
    let block_type: BlockType = tag.parse().map_err(|e: UnknownBlockType| e.to_string())?;

    Ok(BlockRecord {
        x,
        y,
        z,
        block_type,
    })
}

/// Replace the world's interactive blocks with the document's blocks.
///
/// Returns the number of blocks imported. On error the world is untouched.
pub fn import(document: &Value, world: &mut World) -> Result<usize, ImportError> {
    let records = validate(document).inspect_err(|e| log::warn!("rejected world import: {e}"))?;

    let count = world.replace_interactive(
        records
            .iter()
            .map(|r| (Vec3::new(r.x, r.y, r.z), r.block_type)),
    );
    log::info!("imported {count} blocks");
    Ok(count)
}

/// Parse JSON text and [`import`] it.
pub fn import_str(text: &str, world: &mut World) -> Result<usize, ImportError> {
    let document: Value =
        serde_json::from_str(text).inspect_err(|e| log::warn!("rejected world import: {e}"))?;
    import(&document, world)
}

/// Import an already-typed document. It still goes through full validation.
pub fn import_document(document: &WorldDocument, world: &mut World) -> Result<usize, ImportError> {
    import(&document.to_value()?, world)
}
