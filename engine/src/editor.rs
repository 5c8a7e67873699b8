//! Block Editor
//!
//! One editing session: the world plus the interaction controller that
//! mutates it. Host shells (browser, native window) forward pointer events
//! and file contents here and mirror [`WorldChange`]s into their renderer.

use serde_json::Value;

use crate::camera::Viewport;
use crate::config::EditorConfig;
use crate::input::{InteractionController, PointerEvent, PointerOutcome};
use crate::persistence::{ImportError, WorldDocument, export, import, import_str};
use crate::world::{BlockAppearance, BlockHandle, BlockType, World, WorldChange};

pub struct BlockEditor {
    config: EditorConfig,
    world: World,
    controller: InteractionController,
}

impl BlockEditor {
    /// Start a session with the ground layer already seeded.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_viewport(config, Viewport::default())
    }

    pub fn with_viewport(config: EditorConfig, viewport: Viewport) -> Self {
        let mut world = World::new();
        if !config.without_ground {
            world.seed_ground(&config.ground);
        }
        log::info!(
            "block editor ready: {} ground blocks, selected {}",
            world.len(),
            config.default_block_type
        );

        Self {
            config,
            world,
            controller: InteractionController::new(&config, viewport),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    pub fn pointer_down(&mut self, event: PointerEvent) -> PointerOutcome {
        self.controller.handle_pointer_down(&mut self.world, event)
    }

    pub fn selected_block_type(&self) -> BlockType {
        self.controller.selected_block_type()
    }

    pub fn set_selected_block_type(&mut self, block_type: BlockType) {
        self.controller.set_selected_block_type(block_type);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.controller.set_viewport(viewport);
    }

    pub fn export_document(&self) -> WorldDocument {
        export(&self.world)
    }

    /// Compact JSON of the interactive blocks.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        self.export_document().to_json()
    }

    /// Indented JSON, as written to a downloaded file.
    pub fn export_json_pretty(&self) -> Result<String, serde_json::Error> {
        self.export_document().to_json_pretty()
    }

    /// Replace the interactive blocks with those in `text`.
    ///
    /// On error nothing changes.
    pub fn import_json(&mut self, text: &str) -> Result<usize, ImportError> {
        import_str(text, &mut self.world)
    }

    pub fn import_value(&mut self, document: &Value) -> Result<usize, ImportError> {
        import(document, &mut self.world)
    }

    /// Remove all interactive blocks; the ground stays.
    pub fn clear(&mut self) -> usize {
        self.world.clear()
    }

    /// Pending renderer updates, oldest first.
    pub fn drain_changes(&mut self) -> Vec<WorldChange> {
        self.world.drain_changes()
    }

    /// Material for a block's mesh, if the block still exists.
    pub fn appearance(&self, handle: BlockHandle) -> Option<BlockAppearance> {
        self.world.get(handle).map(|block| block.block_type.appearance())
    }
}

impl Default for BlockEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
