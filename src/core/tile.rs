use crate::core::bbox::BoundingBox;
use crate::core::projection::{check_zoom, tile_x_to_longitude, tile_y_to_latitude};
use crate::util::error::QuadHashError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile in the Web Mercator slippy-map pyramid.
///
/// `x` grows eastwards and `y` southwards, both in `0..2^z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileIndex {
    /// Creates a tile index, checking that it lies inside the grid of its zoom.
    pub fn new(x: u32, y: u32, z: u8) -> Result<Self, QuadHashError> {
        check_zoom(z)?;
        let size = 1u32 << z;
        if x >= size || y >= size {
            return Err(QuadHashError::InvalidTileIndex { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// The single zoom-0 tile covering the whole world.
    pub fn root() -> Self {
        Self { x: 0, y: 0, z: 0 }
    }

    /// The child one zoom deeper selected by the given parities.
    pub fn child(&self, x_parity: u8, y_parity: u8) -> Self {
        Self {
            x: 2 * self.x + u32::from(x_parity & 1),
            y: 2 * self.y + u32::from(y_parity & 1),
            z: self.z + 1,
        }
    }

    pub fn parent(&self) -> Option<Self> {
        if self.z == 0 {
            return None;
        }
        Some(Self {
            x: self.x / 2,
            y: self.y / 2,
            z: self.z - 1,
        })
    }

    /// Tile edges in slippy order: `[west, north, east, south]`.
    ///
    /// Index 1 comes from row `y` and index 3 from row `y + 1`.
    pub fn edges(&self) -> [f64; 4] {
        [
            tile_x_to_longitude(self.x, self.z),
            tile_y_to_latitude(self.y, self.z),
            tile_x_to_longitude(self.x + 1, self.z),
            tile_y_to_latitude(self.y + 1, self.z),
        ]
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let [west, north, east, south] = self.edges();
        BoundingBox {
            west,
            south,
            east,
            north,
        }
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
