use geo_types::{Coord, LineString, Polygon};

/// Builds the polygon of a longitude/latitude box, counter-clockwise from the southwest corner.
pub fn create_box_polygon(west: f64, south: f64, east: f64, north: f64) -> Polygon<f64> {
    let coords = vec![
        Coord { x: west, y: south },
        Coord { x: east, y: south },
        Coord { x: east, y: north },
        Coord { x: west, y: north },
        Coord { x: west, y: south },
    ];

    Polygon::new(LineString::from(coords), vec![])
}
