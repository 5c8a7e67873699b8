//! Geometry queries used by block picking.

pub mod collision;

pub use collision::{BoxEntry, ray_aabb_entry};
