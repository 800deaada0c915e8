use crate::api::cell::QuadCell;
use geojson::{Feature, FeatureCollection, JsonObject, feature::Id};
use serde_json::Value;

/// Converts a cell to a GeoJSON feature with its tile polygon.
///
/// The feature id is the hash; `zoom`, `x` and `y` are stored as properties.
pub fn cell_to_feature(cell: &QuadCell) -> Feature {
    let polygon = cell.to_polygon();

    let mut properties = JsonObject::new();
    properties.insert("hash".to_string(), Value::from(cell.hash.as_str()));
    properties.insert("zoom".to_string(), Value::from(cell.zoom));
    properties.insert("x".to_string(), Value::from(cell.tile.x));
    properties.insert("y".to_string(), Value::from(cell.tile.y));

    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(&polygon)),
        id: Some(Id::String(cell.hash.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Converts cells to a GeoJSON feature collection, e.g. to eyeball a covering set.
pub fn cells_to_feature_collection(cells: &[QuadCell]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: cells.iter().map(cell_to_feature).collect(),
        foreign_members: None,
    }
}
