//! Input Module
//!
//! Pointer events and the controller that maps them to build actions.

pub mod controller;
pub mod mouse;

pub use controller::{InteractionController, PointerOutcome};
pub use mouse::{PointerButton, PointerEvent};
