//! Editor Configuration
//!
//! Central configuration for a block editor session. `Default` returns the
//! values the browser editor ships with; hosts may also load an
//! [`EditorConfig`] from JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::BlockType;

/// File name offered when the world is downloaded.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "block-world.json";

/// The fixed, non-interactive ground layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Edge length of the square ground layer, in blocks.
    pub size: i32,
    pub block_type: BlockType,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: 20,
            block_type: BlockType::Grass,
        }
    }
}

/// Initial perspective camera.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, 5.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Everything needed to start an editor session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub ground: GroundConfig,
    pub camera: CameraConfig,
    /// Selection before the palette reports anything
    pub default_block_type: BlockType,
    /// Skip the ground layer entirely (tests, headless tools)
    pub without_ground: bool,
}

impl EditorConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
