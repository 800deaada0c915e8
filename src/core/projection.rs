use crate::core::constants::MAX_SUPPORTED_ZOOM;
use crate::core::tile::TileIndex;
use crate::util::coord::{Coordinate, validate_latitude, validate_longitude};
use crate::util::error::QuadHashError;
use std::f64::consts::PI;

#[inline]
fn tiles_per_axis(zoom: u8) -> f64 {
    2.0_f64.powi(i32::from(zoom))
}

pub(crate) fn check_zoom(zoom: u8) -> Result<(), QuadHashError> {
    if zoom > MAX_SUPPORTED_ZOOM {
        return Err(QuadHashError::InvalidZoomLevel(zoom));
    }
    Ok(())
}

// Keeps floor() results inside [0, 2^zoom - 1]; +180 and -MAX_LATITUDE land on the edge.
#[inline]
fn clamp_to_grid(v: f64, zoom: u8) -> u32 {
    let last = (1u32 << zoom) - 1;
    if v <= 0.0 {
        0
    } else if v >= f64::from(last) {
        last
    } else {
        v as u32
    }
}

/// Converts a longitude to the tile column containing it at `zoom`.
///
/// Tile columns are half-open: a longitude on a column edge belongs to the
/// column east of it. +180° is clamped into the last column.
pub fn longitude_to_tile_x(lon: f64, zoom: u8) -> Result<u32, QuadHashError> {
    check_zoom(zoom)?;
    let lon = validate_longitude(lon)?;

    let x = ((lon + 180.0) / 360.0 * tiles_per_axis(zoom)).floor();
    Ok(clamp_to_grid(x, zoom))
}

/// Converts a latitude to the tile row containing it at `zoom`.
///
/// Rows grow southwards from 0 at the northern Mercator limit. A latitude on a
/// row edge belongs to the row south of it.
pub fn latitude_to_tile_y(lat: f64, zoom: u8) -> Result<u32, QuadHashError> {
    check_zoom(zoom)?;
    let lat = validate_latitude(lat)?;

    let lat_rad = lat * PI / 180.0;
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * tiles_per_axis(zoom)).floor();
    Ok(clamp_to_grid(y, zoom))
}

/// Longitude of the western edge of tile column `x`.
///
/// `x == 2^zoom` is accepted and yields the eastern edge of the last column.
pub fn tile_x_to_longitude(x: u32, zoom: u8) -> f64 {
    f64::from(x) / tiles_per_axis(zoom) * 360.0 - 180.0
}

/// Latitude of the northern edge of tile row `y`.
pub fn tile_y_to_latitude(y: u32, zoom: u8) -> f64 {
    let n = PI - 2.0 * PI * f64::from(y) / tiles_per_axis(zoom);
    180.0 / PI * n.sinh().atan()
}

/// Returns the tile containing a coordinate at `zoom`.
pub fn tile_index_at(coord: &impl Coordinate, zoom: u8) -> Result<TileIndex, QuadHashError> {
    let x = longitude_to_tile_x(coord.x(), zoom)?;
    let y = latitude_to_tile_y(coord.y(), zoom)?;
    Ok(TileIndex { x, y, z: zoom })
}
