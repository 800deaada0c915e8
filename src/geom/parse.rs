use crate::util::coord::{validate_latitude, validate_longitude};
use crate::util::error::QuadHashError;
use geo::BoundingRect;
use geo_types::{Geometry, GeometryCollection};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Reads a WKT or GeoJSON string as a longitude/latitude geometry.
///
/// Input starting with `{` is read as GeoJSON, anything else as WKT. The
/// geometry's extent must fit the Web Mercator range, so projected input
/// (metres, e.g. British National Grid) fails with `InvalidCoordinate`.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, QuadHashError> {
    let s = s.trim();
    if s.starts_with('{') {
        parse_geojson(s)
    } else {
        parse_wkt(s)
    }
}

/// Reads a GeoJSON geometry, feature or feature collection.
///
/// A feature collection becomes a `GeometryCollection` of its features'
/// geometries; features without a geometry are skipped.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, QuadHashError> {
    let geojson = GeoJson::from_str(s).map_err(parse_error)?;

    let geometry = match geojson {
        GeoJson::Geometry(geometry) => to_geo(geometry)?,
        GeoJson::Feature(feature) => {
            to_geo(feature.geometry.ok_or(QuadHashError::EmptyGeometry)?)?
        }
        GeoJson::FeatureCollection(collection) => {
            let members = collection
                .features
                .into_iter()
                .filter_map(|feature| feature.geometry)
                .map(to_geo)
                .collect::<Result<Vec<_>, _>>()?;
            if members.is_empty() {
                return Err(QuadHashError::EmptyGeometry);
            }
            Geometry::GeometryCollection(GeometryCollection(members))
        }
    };

    check_lon_lat_extent(geometry)
}

/// Reads a WKT string.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, QuadHashError> {
    let wkt = Wkt::<f64>::from_str(s).map_err(parse_error)?;
    let geometry: Geometry<f64> = wkt.try_into().map_err(|_| {
        QuadHashError::GeometryParseError(format!("WKT has no coordinates: {}", s))
    })?;

    check_lon_lat_extent(geometry)
}

fn to_geo(geometry: geojson::Geometry) -> Result<Geometry<f64>, QuadHashError> {
    Geometry::try_from(geometry).map_err(parse_error)
}

fn parse_error(e: impl ToString) -> QuadHashError {
    QuadHashError::GeometryParseError(e.to_string())
}

// Both corners of the bounding rectangle must be valid coordinates.
fn check_lon_lat_extent(geometry: Geometry<f64>) -> Result<Geometry<f64>, QuadHashError> {
    let rect = geometry
        .bounding_rect()
        .ok_or(QuadHashError::EmptyGeometry)?;
    for corner in [rect.min(), rect.max()] {
        validate_longitude(corner.x)?;
        validate_latitude(corner.y)?;
    }
    Ok(geometry)
}
