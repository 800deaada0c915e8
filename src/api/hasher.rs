use crate::api::cell::QuadCell;
use crate::api::config::HasherConfig;
use crate::core::constants::DEFAULT_MAX_ZOOM;
use crate::core::projection::tile_index_at;
use crate::core::quadrant::{decode_quadrant, encode_quadrant};
use crate::core::tile::TileIndex;
use crate::util::coord::Coordinate;
use crate::util::error::QuadHashError;
use rayon::prelude::*;
use tracing::debug;

/// Encodes coordinates into base-4 tile hashes and decodes them back.
///
/// Character `i` of a hash names the quadrant taken when refining from zoom
/// `i` to zoom `i + 1`, so a hash of length `z` addresses one tile at zoom `z`
/// and every prefix addresses one of its ancestors.
///
/// # Example
///
/// ```
/// use quadhash_rs::TileHasher;
///
/// # fn main() -> Result<(), quadhash_rs::QuadHashError> {
/// let hasher = TileHasher::default();
/// let hash = hasher.encode(&(-123.139, 49.304))?;
/// assert_eq!(hash.len(), 16);
///
/// let cell = hasher.decode(&hash[..6])?;
/// assert_eq!(cell.zoom, 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHasher {
    max_zoom: u8,
}

impl Default for TileHasher {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl TileHasher {
    /// Creates a hasher producing `max_zoom`-character hashes.
    pub fn new(max_zoom: u8) -> Result<Self, QuadHashError> {
        Self::from_config(&HasherConfig::new(max_zoom))
    }

    pub fn from_config(config: &HasherConfig) -> Result<Self, QuadHashError> {
        config.validate()?;
        Ok(Self {
            max_zoom: config.max_zoom,
        })
    }

    pub fn builder() -> TileHasherBuilder {
        TileHasherBuilder::new()
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    /// Encodes a longitude/latitude coordinate to a full-precision hash.
    ///
    /// The result always has exactly `max_zoom` characters. Coordinates outside
    /// the Web Mercator range fail with `InvalidCoordinate`.
    pub fn encode(&self, coord: &impl Coordinate) -> Result<String, QuadHashError> {
        let mut hash = String::with_capacity(usize::from(self.max_zoom));
        let mut previous = TileIndex::root();

        for zoom in 1..=self.max_zoom {
            let tile = tile_index_at(coord, zoom)?;
            // Each zoom doubles the grid, so the offset from the parent's
            // doubled index is always 0 or 1.
            let rel_x = tile.x - 2 * previous.x;
            let rel_y = tile.y - 2 * previous.y;
            hash.push(encode_quadrant(rel_x as u8, rel_y as u8));
            previous = tile;
        }

        Ok(hash)
    }

    /// Encodes a tile index to its hash, `tile.z` characters long.
    pub fn encode_tile(&self, tile: &TileIndex) -> Result<String, QuadHashError> {
        let tile = TileIndex::new(tile.x, tile.y, tile.z)?;
        if tile.z > self.max_zoom {
            return Err(QuadHashError::InvalidZoomLevel(tile.z));
        }
        Ok(tile_to_hash(&tile))
    }

    /// Decodes a hash into the tile and bounds it denotes.
    ///
    /// Accepts any length from 0 (the whole world) to `max_zoom`.
    pub fn decode(&self, hash: &str) -> Result<QuadCell, QuadHashError> {
        let len = hash.chars().count();
        if len > usize::from(self.max_zoom) {
            return Err(QuadHashError::HashTooLong(len));
        }
        let tile = hash_to_tile(hash)?;
        Ok(QuadCell::new(hash.to_string(), tile))
    }

    /// Encodes many coordinates in parallel, preserving input order.
    pub fn encode_batch<C>(&self, coords: &[C]) -> Vec<Result<String, QuadHashError>>
    where
        C: Coordinate + Sync,
    {
        debug!(count = coords.len(), max_zoom = self.max_zoom, "encoding batch");
        coords.par_iter().map(|coord| self.encode(coord)).collect()
    }
}

/// Hash of a tile: one quadrant digit per bit of its indices, most significant first.
pub(crate) fn tile_to_hash(tile: &TileIndex) -> String {
    (1..=tile.z)
        .map(|level| {
            let shift = tile.z - level;
            encode_quadrant(((tile.x >> shift) & 1) as u8, ((tile.y >> shift) & 1) as u8)
        })
        .collect()
}

pub(crate) fn hash_to_tile(hash: &str) -> Result<TileIndex, QuadHashError> {
    hash.chars().try_fold(TileIndex::root(), |tile, digit| {
        let (x_parity, y_parity) = decode_quadrant(digit)?;
        Ok(tile.child(x_parity, y_parity))
    })
}

/// Encodes a coordinate with the default 16-level hasher.
///
/// # Example
/// ```
/// assert_eq!(quadhash_rs::encode(0.0, 0.0).unwrap(), "3000000000000000");
/// ```
pub fn encode(lon: f64, lat: f64) -> Result<String, QuadHashError> {
    TileHasher::default().encode(&(lon, lat))
}

/// Decodes a hash of up to 16 characters with the default hasher.
pub fn decode(hash: &str) -> Result<QuadCell, QuadHashError> {
    TileHasher::default().decode(hash)
}

#[derive(Debug, Default)]
pub struct TileHasherBuilder {
    max_zoom: Option<u8>,
}

impl TileHasherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = Some(max_zoom);
        self
    }

    pub fn config(mut self, config: &HasherConfig) -> Self {
        self.max_zoom = Some(config.max_zoom);
        self
    }

    pub fn build(self) -> Result<TileHasher, QuadHashError> {
        TileHasher::new(self.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM))
    }
}
