//! Camera Module
//!
//! Camera state and pointer-to-ray conversion.

pub mod perspective;
pub mod raycast;

pub use perspective::PerspectiveCamera;
pub use raycast::{Ray, Viewport};
