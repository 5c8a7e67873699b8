//! Builder Module
//!
//! Place and remove blocks at picked faces.

pub mod placement;

pub use placement::{BuildOutcome, IgnoreReason, adjacent_block_position, place_block, remove_block};
