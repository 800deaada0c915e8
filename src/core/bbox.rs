use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::core::geometry::create_box_polygon;
use crate::util::coord::Coordinate;
use crate::util::error::QuadHashError;
use geo_types::{Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// A longitude/latitude box in degrees.
///
/// The fields are public, so every operation that consumes a box calls
/// [`BoundingBox::validate`] rather than trusting construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Creates a box, rejecting west > east or south > north.
    ///
    /// # Example
    /// ```
    /// use quadhash_rs::BoundingBox;
    ///
    /// assert!(BoundingBox::new(-10.0, -10.0, 10.0, 10.0).is_ok());
    /// assert!(BoundingBox::new(10.0, -10.0, -10.0, 10.0).is_err());
    /// ```
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Self, QuadHashError> {
        let bbox = Self {
            west,
            south,
            east,
            north,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Creates a box from a `[west, south, east, north]` array.
    pub fn from_array(bounds: [f64; 4]) -> Result<Self, QuadHashError> {
        Self::new(bounds[0], bounds[1], bounds[2], bounds[3])
    }

    /// Creates a box from two opposite corners given in any order.
    pub fn from_corners(a: &impl Coordinate, b: &impl Coordinate) -> Self {
        Self {
            west: a.x().min(b.x()),
            south: a.y().min(b.y()),
            east: a.x().max(b.x()),
            north: a.y().max(b.y()),
        }
    }

    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self {
            west: rect.min().x,
            south: rect.min().y,
            east: rect.max().x,
            north: rect.max().y,
        }
    }

    /// The full Web Mercator extent.
    pub fn world() -> Self {
        Self {
            west: MIN_LONGITUDE,
            south: MIN_LATITUDE,
            east: MAX_LONGITUDE,
            north: MAX_LATITUDE,
        }
    }

    pub fn validate(&self) -> Result<(), QuadHashError> {
        if !(self.west <= self.east) {
            return Err(QuadHashError::DegenerateBoundingBox(format!(
                "west {} is not <= east {}",
                self.west, self.east
            )));
        }
        if !(self.south <= self.north) {
            return Err(QuadHashError::DegenerateBoundingBox(format!(
                "south {} is not <= north {}",
                self.south, self.north
            )));
        }
        Ok(())
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Corners in the order southwest, southeast, northwest, northeast.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.west, self.south),
            (self.east, self.south),
            (self.west, self.north),
            (self.east, self.north),
        ]
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    /// Whether a point lies inside the box, edges included.
    ///
    /// For a tile's box this is not tile membership: tiles are half-open, so a
    /// point on the east or south edge belongs to the neighbouring tile, yet
    /// both boxes report containing it. Use [`tile_index_at`] for membership.
    ///
    /// [`tile_index_at`]: crate::core::projection::tile_index_at
    pub fn contains_point(&self, coord: &impl Coordinate) -> bool {
        coord.x() >= self.west
            && coord.x() <= self.east
            && coord.y() >= self.south
            && coord.y() <= self.north
    }

    /// Whether `other` lies entirely inside this box, edges included.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.west >= self.west
            && other.east <= self.east
            && other.south >= self.south
            && other.north <= self.north
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        create_box_polygon(self.west, self.south, self.east, self.north)
    }
}
