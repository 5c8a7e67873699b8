//! Block World Engine Library
//!
//! Core of a browser block editor: a grid-aligned world of typed cubes that
//! the user grows and shrinks with the mouse, saved to and loaded from a
//! versioned JSON document. Rendering stays with the host; this crate keeps
//! the authoritative world and reports what changed.
//!
//! # Modules
//!
//! - [`world`] - Blocks, block types, grid snapping and the world store
//! - [`camera`] - Perspective camera, viewport and pointer rays
//! - [`physics`] - Ray/box intersection
//! - [`picking`] - Nearest block under a ray, with the face that was hit
//! - [`builder`] - Place and remove actions against a pick
//! - [`persistence`] - World documents, import validation and world files
//! - [`input`] - Pointer buttons and the interaction controller
//! - [`editor`] - One editing session tying the above together
//! - [`config`] - Editor configuration and defaults
//!
//! # Example
//!
//! ```
//! use block_world_engine::camera::Viewport;
//! use block_world_engine::config::EditorConfig;
//! use block_world_engine::editor::BlockEditor;
//! use block_world_engine::input::{PointerButton, PointerEvent};
//! use block_world_engine::world::BlockType;
//!
//! let mut editor = BlockEditor::with_viewport(EditorConfig::default(), Viewport::sized(800.0, 600.0));
//! editor.set_selected_block_type(BlockType::Stone);
//!
//! // Left click in the middle of the view stacks a block on the ground
//! let outcome = editor.pointer_down(PointerEvent::new(400.0, 300.0, PointerButton::Primary));
//! assert!(outcome.build.is_some());
//!
//! let json = editor.export_json().unwrap();
//! assert!(json.starts_with(r#"{"version":1,"#));
//! ```

pub mod builder;
pub mod camera;
pub mod config;
pub mod editor;
pub mod input;
pub mod persistence;
pub mod physics;
pub mod picking;
pub mod world;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use builder::{BuildOutcome, IgnoreReason};
pub use config::EditorConfig;
pub use editor::BlockEditor;
pub use persistence::{ImportError, WorldDocument};
pub use picking::{PickResult, pick};
pub use world::{BLOCK_SIZE, Block, BlockHandle, BlockType, World, WorldChange};
