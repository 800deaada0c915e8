pub mod export;
pub mod parse;

pub use export::{cell_to_feature, cells_to_feature_collection};
pub use parse::{parse_geojson, parse_geometry, parse_wkt};
