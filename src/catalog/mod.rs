//! Tile storage and intensity search
//!
//! This module contains:
//! - The tile type with its precomputed intensity and usage counter
//! - The growable catalog filled while loading tiles
//! - The sorted catalog answering nearest-match queries
//! - The selection policy deciding which matches are acceptable

/// Growable catalog with positional insert and remove
pub mod collection;
/// Usage cap, substitute window and window-miss strategy
pub mod policy;
/// Frozen catalog in ascending intensity order
pub mod sorted;
/// Tile images with intensity and usage bookkeeping
pub mod tile;

pub use collection::TileCatalog;
pub use policy::{SelectionPolicy, WindowMiss};
pub use sorted::SortedCatalog;
pub use tile::Tile;
