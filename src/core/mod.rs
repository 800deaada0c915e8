pub mod bbox;
pub mod constants;
pub mod geometry;
pub mod projection;
pub mod quadrant;
pub mod tile;

pub use bbox::BoundingBox;
pub use constants::{
    DEFAULT_MAX_ZOOM, MAX_LATITUDE, MAX_LONGITUDE, MAX_SUPPORTED_ZOOM, MIN_LATITUDE,
    MIN_LONGITUDE,
};
pub use geometry::create_box_polygon;
pub use projection::{
    latitude_to_tile_y, longitude_to_tile_x, tile_index_at, tile_x_to_longitude,
    tile_y_to_latitude,
};
pub use quadrant::{decode_quadrant, encode_quadrant};
pub use tile::TileIndex;
