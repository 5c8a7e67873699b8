//! Persistence Module
//!
//! World documents and the gateway that validates and applies them.

pub mod document;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod gateway;

pub use document::{BlockRecord, WORLD_DOCUMENT_VERSION, WorldDocument};
#[cfg(not(target_arch = "wasm32"))]
pub use file::{WorldFileError, load_world_file, save_world_file};
pub use gateway::{ImportError, export, import, import_document, import_str, validate};
