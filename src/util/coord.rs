use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::util::error::QuadHashError;
use geo_types::{Coord, Point};

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>` and
/// `geo_types::Coord<f64>`. The x component is the longitude.
pub trait Coordinate {
    /// Returns the longitude in degrees.
    fn x(&self) -> f64;
    /// Returns the latitude in degrees.
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Checks that a longitude lies in [-180, 180]. NaN is rejected.
pub fn validate_longitude(lon: f64) -> Result<f64, QuadHashError> {
    if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        Ok(lon)
    } else {
        Err(QuadHashError::InvalidCoordinate(format!(
            "longitude {} outside [{}, {}]",
            lon, MIN_LONGITUDE, MAX_LONGITUDE
        )))
    }
}

/// Checks that a latitude lies in the Web Mercator range. NaN is rejected.
pub fn validate_latitude(lat: f64) -> Result<f64, QuadHashError> {
    if (MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        Ok(lat)
    } else {
        Err(QuadHashError::InvalidCoordinate(format!(
            "latitude {} outside [{}, {}]",
            lat, MIN_LATITUDE, MAX_LATITUDE
        )))
    }
}
