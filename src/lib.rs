//! # quadhash-rs
//!
//! A hierarchical base-4 hash over the Web Mercator tile pyramid. Each hash
//! character picks one quadrant of the tile above it, so a hash of length `z`
//! names one slippy-map tile at zoom `z` and its prefixes name the ancestors.
//!
//! There are currently three main entry points.
//!
//! ### 1. `TileHasher` - Encode and Decode
//!
//! ```
//! use quadhash_rs::TileHasher;
//!
//! # fn main() -> Result<(), quadhash_rs::QuadHashError> {
//! let hasher = TileHasher::default();
//! let hash = hasher.encode(&(-123.139, 49.304))?;
//! println!("{}", hash);
//!
//! let cell = hasher.decode(&hash)?;
//! println!("{} {:?}", cell.tile, cell.bounds());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `CoverageResolver` - Tiles Covering a Box
//!
//! ```
//! use quadhash_rs::{BoundingBox, CoverageResolver};
//!
//! # fn main() -> Result<(), quadhash_rs::QuadHashError> {
//! let resolver = CoverageResolver::default();
//! let bbox = BoundingBox::new(-10.0, -10.0, 10.0, 10.0)?;
//!
//! for hash in resolver.relevant_hashes(&bbox)? {
//!     println!("{}", hash);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Geometry Input and GeoJSON Output
//!
//! ```
//! use quadhash_rs::{CoverageResolver, cells_to_feature_collection, parse_geometry};
//!
//! # fn main() -> Result<(), quadhash_rs::QuadHashError> {
//! let geometry = parse_geometry("LINESTRING(-3.2 55.9, -3.1 56.0)")?;
//! let resolver = CoverageResolver::default();
//!
//! let hashes = resolver.relevant_hashes_for_geometry(&geometry)?;
//! let cells = hashes
//!     .iter()
//!     .map(|h| resolver.hasher().decode(h))
//!     .collect::<Result<Vec<_>, _>>()?;
//! println!("{}", cells_to_feature_collection(&cells));
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use api::{
    CoverageResolver, HasherConfig, QuadCell, TileHasher, TileHasherBuilder, decode, encode,
    relevant_hashes, smallest_common_prefix,
};
pub use core::{
    BoundingBox, DEFAULT_MAX_ZOOM, MAX_LATITUDE, MAX_LONGITUDE, MAX_SUPPORTED_ZOOM, MIN_LATITUDE,
    MIN_LONGITUDE, TileIndex, create_box_polygon, decode_quadrant, encode_quadrant,
    latitude_to_tile_y, longitude_to_tile_x, tile_index_at, tile_x_to_longitude,
    tile_y_to_latitude,
};
pub use geom::{
    cell_to_feature, cells_to_feature_collection, parse_geojson, parse_geometry, parse_wkt,
};
pub use util::{Coordinate, QuadHashError};

pub use geo_types;
pub use geojson;
