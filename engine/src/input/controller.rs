//! Interaction Controller
//!
//! Turns pointer-down events into place/remove actions. Each event is one
//! synchronous transaction: build a ray, pick, mutate the world, return.
//!
//! The selected block type is plain state on the controller; the palette
//! changes it through [`InteractionController::set_selected_block_type`].

use crate::builder::{BuildOutcome, place_block, remove_block};
use crate::camera::{PerspectiveCamera, Ray, Viewport};
use crate::config::EditorConfig;
use crate::picking::{PickResult, pick};
use crate::world::{BlockType, World};

use super::mouse::{PointerButton, PointerEvent};

/// What happened in response to a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerOutcome {
    /// `None` if the button is not bound to a build action
    pub build: Option<BuildOutcome>,
    /// Whether the platform should cancel its default handling (context menu, text selection)
    pub prevent_default: bool,
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    selected: BlockType,
    camera: PerspectiveCamera,
    viewport: Viewport,
}

impl InteractionController {
    pub fn new(config: &EditorConfig, viewport: Viewport) -> Self {
        Self {
            selected: config.default_block_type,
            camera: PerspectiveCamera::from_config(&config.camera, viewport.aspect_ratio()),
            viewport,
        }
    }

    pub fn selected_block_type(&self) -> BlockType {
        self.selected
    }

    pub fn set_selected_block_type(&mut self, block_type: BlockType) {
        if self.selected != block_type {
            log::debug!("selected block type {} -> {}", self.selected, block_type);
        }
        self.selected = block_type;
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// The orbit controller writes the camera pose through this.
    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track a resized or moved mount element.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !viewport.is_degenerate() {
            self.camera.set_aspect(viewport.aspect_ratio());
        }
    }

    /// World ray under a client-pixel position.
    pub fn ray_at(&self, client_x: f32, client_y: f32) -> Option<Ray> {
        let ndc = self.viewport.to_ndc(client_x, client_y)?;
        self.camera.ray_from_ndc(ndc)
    }

    /// The block under a client-pixel position.
    pub fn pick_at(&self, world: &World, client_x: f32, client_y: f32) -> Option<PickResult> {
        let ray = self.ray_at(client_x, client_y)?;
        pick(&ray, world.iter())
    }

    /// Dispatch a pointer-down: primary places, secondary removes.
    pub fn handle_pointer_down(&self, world: &mut World, event: PointerEvent) -> PointerOutcome {
        let build = match event.button {
            PointerButton::Primary => {
                let hit = self.pick_at(world, event.client_x, event.client_y);
                Some(place_block(world, hit.as_ref(), self.selected))
            }
            PointerButton::Secondary => {
                let hit = self.pick_at(world, event.client_x, event.client_y);
                Some(remove_block(world, hit.as_ref()))
            }
            PointerButton::Middle | PointerButton::Other(_) => None,
        };

        if let Some(outcome) = build {
            log::debug!("{:?} at ({}, {}): {:?}", event.button, event.client_x, event.client_y, outcome);
        }

        PointerOutcome {
            build,
            prevent_default: build.is_some(),
        }
    }

    /// Whether the platform context menu must be cancelled for this button.
    ///
    /// The secondary button removes blocks, so its menu would interrupt editing.
    pub fn suppresses_context_menu(button: PointerButton) -> bool {
        button == PointerButton::Secondary
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&EditorConfig::default(), Viewport::default())
    }
}
