//! Growable, positionally indexed tile collection used while loading tiles
//!
//! Capacity is tracked explicitly: it starts at
//! [`INITIAL_CATALOG_CAPACITY`] and doubles whenever a full catalog has to
//! accept another tile. Tile order is whatever the inserts produced until
//! [`TileCatalog::sort`] runs; searching is only offered once the catalog is
//! frozen into a [`SortedCatalog`].

use crate::catalog::sorted::SortedCatalog;
use crate::catalog::tile::Tile;
use crate::io::configuration::INITIAL_CATALOG_CAPACITY;
use crate::io::error::{Result, out_of_range};

/// Tiles in insertion order, sharing the dimensions of the model tile
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    capacity: usize,
    width: u32,
    height: u32,
}

impl TileCatalog {
    /// Create a catalog holding only `model`, whose dimensions become catalog-wide
    pub fn new(model: Tile) -> Self {
        let width = model.width();
        let height = model.height();
        let mut tiles = Vec::with_capacity(INITIAL_CATALOG_CAPACITY);
        tiles.push(model);

        Self {
            tiles,
            capacity: INITIAL_CATALOG_CAPACITY,
            width,
            height,
        }
    }

    /// Insert `tile` at `index`, shifting later tiles one slot right
    ///
    /// Dimensions are not checked against the model tile.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index > size()`
    pub fn insert(&mut self, tile: Tile, index: usize) -> Result<()> {
        if index > self.tiles.len() {
            return Err(out_of_range(index, self.tiles.len()));
        }

        if self.tiles.len() == self.capacity {
            self.capacity *= 2;
            self.tiles
                .reserve_exact(self.capacity.saturating_sub(self.tiles.len()));
        }

        self.tiles.insert(index, tile);
        Ok(())
    }

    /// Remove and return the tile at `index`, shifting later tiles one slot left
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= size()`
    pub fn remove(&mut self, index: usize) -> Result<Tile> {
        if index >= self.tiles.len() {
            return Err(out_of_range(index, self.tiles.len()));
        }
        Ok(self.tiles.remove(index))
    }

    /// Tile at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= size()`
    pub fn get(&self, index: usize) -> Result<&Tile> {
        self.tiles
            .get(index)
            .ok_or_else(|| out_of_range(index, self.tiles.len()))
    }

    /// Stable insertion sort, ascending by average intensity
    pub fn sort(&mut self) {
        for i in 1..self.tiles.len() {
            let mut j = i;
            while j > 0 && self.intensity_at(j) < self.intensity_at(j - 1) {
                self.tiles.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    /// Whether tiles are currently in ascending intensity order
    pub fn is_sorted(&self) -> bool {
        self.tiles
            .windows(2)
            .all(|pair| match pair {
                [a, b] => a.average_intensity() <= b.average_intensity(),
                _ => true,
            })
    }

    /// Sort and freeze the catalog so it can be searched
    pub fn into_sorted(mut self) -> SortedCatalog {
        self.sort();
        SortedCatalog::from_sorted_parts(self.tiles, self.capacity, self.width, self.height)
    }

    /// Number of tiles present
    pub const fn size(&self) -> usize {
        self.tiles.len()
    }

    /// Length of the backing storage
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Catalog-wide tile width, taken from the model tile
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Catalog-wide tile height, taken from the model tile
    pub const fn height(&self) -> u32 {
        self.height
    }

    fn intensity_at(&self, index: usize) -> f64 {
        self.tiles
            .get(index)
            .map_or(f64::NAN, Tile::average_intensity)
    }
}
