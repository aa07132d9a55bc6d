//! Build representations
//!
//! This module provides the discrete 7-slot build, the champion's legal
//! item pool, and the continuous encoding used by differential evolution.

#[allow(clippy::module_inception)]
pub mod build;
pub mod item_pool;
pub mod vector;

pub mod prelude {
    pub use super::build::*;
    pub use super::item_pool::*;
    pub use super::vector::*;
}
