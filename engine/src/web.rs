//! Browser Bindings
//!
//! Thin wasm-bindgen wrapper over [`BlockEditor`]. The page owns the
//! three.js scene, the palette and the file buttons; it forwards DOM events
//! here and mirrors the returned changes into its meshes.

use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::camera::Viewport;
use crate::config::{DEFAULT_EXPORT_FILE_NAME, EditorConfig};
use crate::editor::BlockEditor;
use crate::input::{InteractionController, PointerButton, PointerEvent};
use crate::world::{BlockType, WorldChange};

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub struct WebBlockEditor {
    editor: BlockEditor,
}

#[wasm_bindgen]
impl WebBlockEditor {
    /// Create an editor with the default ground and camera.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebBlockEditor {
        console_error_panic_hook::set_once();
        // A second editor on the same page finds the logger already installed
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("console logger already installed");
        }

        WebBlockEditor {
            editor: BlockEditor::new(EditorConfig::default()),
        }
    }

    #[wasm_bindgen(js_name = selectedBlockType)]
    pub fn selected_block_type(&self) -> String {
        self.editor.selected_block_type().tag().to_string()
    }

    /// Palette hook. Unknown tags are rejected and the selection kept.
    #[wasm_bindgen(js_name = setSelectedBlockType)]
    pub fn set_selected_block_type(&mut self, tag: &str) -> Result<(), JsValue> {
        let block_type: BlockType = tag.parse().map_err(to_js_error)?;
        self.editor.set_selected_block_type(block_type);
        Ok(())
    }

    /// Handle a `mousedown` on the mount element.
    ///
    /// Returns true if the world changed.
    #[wasm_bindgen(js_name = onMouseDown)]
    pub fn on_mouse_down(&mut self, event: &MouseEvent, mount: &Element) -> bool {
        let rect = mount.get_bounding_client_rect();
        self.editor.resize(Viewport::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ));

        let outcome = self.editor.pointer_down(PointerEvent::new(
            event.client_x() as f32,
            event.client_y() as f32,
            PointerButton::from_dom_button(event.button()),
        ));
        if outcome.prevent_default {
            event.prevent_default();
        }
        outcome.build.is_some_and(|build| build.is_applied())
    }

    /// Handle a `contextmenu` event so right-click removal is not interrupted.
    #[wasm_bindgen(js_name = onContextMenu)]
    pub fn on_context_menu(&self, event: &MouseEvent) {
        if InteractionController::suppresses_context_menu(PointerButton::from_dom_button(event.button())) {
            event.prevent_default();
        }
    }

    /// Indented JSON for the download button.
    #[wasm_bindgen(js_name = exportWorld)]
    pub fn export_world(&self) -> Result<String, JsValue> {
        self.editor.export_json_pretty().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = exportFileName)]
    pub fn export_file_name() -> String {
        DEFAULT_EXPORT_FILE_NAME.to_string()
    }

    /// Load an uploaded file's text. On error the world is unchanged and the
    /// message is suitable for an alert.
    #[wasm_bindgen(js_name = importWorld)]
    pub fn import_world(&mut self, text: &str) -> Result<usize, JsValue> {
        self.editor.import_json(text).map_err(to_js_error)
    }

    pub fn clear(&mut self) -> usize {
        self.editor.clear()
    }

    #[wasm_bindgen(js_name = blockCount)]
    pub fn block_count(&self) -> usize {
        self.editor.world().interactive_len()
    }

    /// Pending mesh updates as a JSON array, oldest first.
    #[wasm_bindgen(js_name = drainChanges)]
    pub fn drain_changes(&mut self) -> String {
        let changes: Vec<_> = self
            .editor
            .drain_changes()
            .into_iter()
            .map(|change| match change {
                WorldChange::Added { handle, block } => {
                    let appearance = block.block_type.appearance();
                    json!({
                        "op": "added",
                        "id": handle.id(),
                        "x": block.position.x,
                        "y": block.position.y,
                        "z": block.position.z,
                        "type": block.block_type.tag(),
                        "color": appearance.color,
                        "opacity": appearance.opacity,
                        "transparent": appearance.transparent,
                    })
                }
                WorldChange::Removed { handle, .. } => json!({ "op": "removed", "id": handle.id() }),
            })
            .collect();
        serde_json::Value::Array(changes).to_string()
    }
}

impl Default for WebBlockEditor {
    fn default() -> Self {
        Self::new()
    }
}
