use crate::api::hasher::{hash_to_tile, tile_to_hash};
use crate::core::bbox::BoundingBox;
use crate::core::constants::MAX_SUPPORTED_ZOOM;
use crate::core::projection::tile_index_at;
use crate::core::tile::TileIndex;
use crate::util::coord::Coordinate;
use crate::util::error::QuadHashError;
use geo_types::Polygon;
use serde::{Deserialize, Serialize};

/// A single tile addressed by a quadrant hash.
///
/// Produced by [`TileHasher::decode`](crate::TileHasher::decode). The hash
/// length equals the zoom level, and the bounds cover exactly the tile.
///
/// # Example
///
/// ```
/// use quadhash_rs::QuadCell;
///
/// # fn main() -> Result<(), quadhash_rs::QuadHashError> {
/// let cell = QuadCell::from_hash("021221")?;
/// println!("Tile: {}", cell.tile);
/// println!("Bounds: {:?}", cell.bounds());
///
/// // Convert the tile to a polygon for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadCell {
    /// Base-4 hash of this tile, one character per zoom level
    pub hash: String,
    /// Zoom level, equal to the hash length
    pub zoom: u8,
    /// Slippy-map tile index
    pub tile: TileIndex,
    /// Tile extent in degrees
    pub bbox: BoundingBox,
}

impl QuadCell {
    pub(crate) fn new(hash: String, tile: TileIndex) -> Self {
        Self {
            hash,
            zoom: tile.z,
            bbox: tile.bounding_box(),
            tile,
        }
    }

    /// Create a QuadCell from a hash of up to 30 characters.
    ///
    /// Not bound by any hasher's `max_zoom`: a 20-character hash decodes here
    /// but fails [`TileHasher::decode`](crate::TileHasher::decode) on a
    /// default 16-level hasher with `HashTooLong`.
    pub fn from_hash(hash: &str) -> Result<Self, QuadHashError> {
        let len = hash.chars().count();
        if len > usize::from(MAX_SUPPORTED_ZOOM) {
            return Err(QuadHashError::HashTooLong(len));
        }
        let tile = hash_to_tile(hash)?;
        Ok(Self::new(hash.to_string(), tile))
    }

    /// Create a QuadCell from a slippy-map tile index.
    pub fn from_tile(tile: &TileIndex) -> Result<Self, QuadHashError> {
        let tile = TileIndex::new(tile.x, tile.y, tile.z)?;
        Ok(Self::new(tile_to_hash(&tile), tile))
    }

    /// Create the QuadCell containing a longitude/latitude coordinate at `zoom`.
    pub fn from_coord(coord: &impl Coordinate, zoom: u8) -> Result<Self, QuadHashError> {
        let tile = tile_index_at(coord, zoom)?;
        Ok(Self::new(tile_to_hash(&tile), tile))
    }

    /// Tile edges as `[west, north, east, south]`.
    ///
    /// This is the slippy-map corner order: index 1 is the latitude of row
    /// `y` and index 3 the latitude of row `y + 1`. Use [`QuadCell::bbox`]
    /// for named fields.
    pub fn bounds(&self) -> [f64; 4] {
        self.tile.edges()
    }

    /// Midpoint of the tile in degrees.
    pub fn center(&self) -> (f64, f64) {
        self.bbox.center()
    }

    /// The enclosing tile one zoom level up, or `None` at zoom 0.
    pub fn parent(&self) -> Option<Self> {
        let tile = self.tile.parent()?;
        let mut hash = self.hash.clone();
        hash.pop();
        Some(Self::new(hash, tile))
    }

    /// Whether `other` is this tile or one of its descendants.
    pub fn contains(&self, other: &QuadCell) -> bool {
        other.hash.starts_with(&self.hash)
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bbox.to_polygon()
    }

    pub fn to_wkt(&self) -> String {
        use wkt::ToWkt;
        self.to_polygon().wkt_string()
    }
}
