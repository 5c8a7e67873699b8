//! World File Save/Load
//!
//! Native counterpart of the browser's download/upload buttons: writes the
//! indented JSON document to disk and reads one back through the gateway.

use std::path::Path;

use super::gateway::{ImportError, export, import_str};
use crate::world::World;

/// Errors from saving or loading a world file.
#[derive(Debug, thiserror::Error)]
pub enum WorldFileError {
    #[error("world file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("world file could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Write the world's interactive blocks to `path` as indented JSON.
///
/// Parent directories are created as needed.
pub fn save_world_file(path: &Path, world: &World) -> Result<(), WorldFileError> {
    let text = export(world).to_json_pretty()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    log::info!("saved {} blocks to {}", world.interactive_len(), path.display());
    Ok(())
}

/// Read a world document from `path` and import it into `world`.
///
/// Returns the number of blocks imported. If the file cannot be read or
/// fails validation, the world is left as it was.
pub fn load_world_file(path: &Path, world: &mut World) -> Result<usize, WorldFileError> {
    let text = std::fs::read_to_string(path)?;
    let count = import_str(&text, world)?;
    log::info!("loaded {} blocks from {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::config::DEFAULT_EXPORT_FILE_NAME;
    use crate::world::BlockType;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_EXPORT_FILE_NAME);

        let mut world = World::new();
        world.add(Vec3::new(1.0, 0.0, -2.0), BlockType::Leaves, true);
        world.add(Vec3::new(1.0, 1.0, -2.0), BlockType::Water, true);
        save_world_file(&path, &world).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"version\": 1,"));

        let mut loaded = World::new();
        assert_eq!(load_world_file(&path, &mut loaded).unwrap(), 2);
        assert_eq!(loaded.list(), world.list());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut world = World::new();
        match load_world_file(&dir.path().join("absent.json"), &mut world) {
            Err(WorldFileError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_file_keeps_world() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.json");
        std::fs::write(&path, r#"{"version":2,"blocks":[]}"#).unwrap();

        let mut world = World::new();
        world.add(Vec3::ZERO, BlockType::Stone, true);
        match load_world_file(&path, &mut world) {
            Err(WorldFileError::Import(ImportError::UnsupportedVersion { .. })) => {}
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
        assert_eq!(world.interactive_len(), 1);
    }
}
