use crate::api::cell::QuadCell;
use crate::api::hasher::TileHasher;
use crate::core::bbox::BoundingBox;
use crate::core::projection::{latitude_to_tile_y, longitude_to_tile_x};
use crate::util::error::QuadHashError;
use geo::BoundingRect;
use geo_types::Geometry;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Finds the tiles covering a bounding box.
///
/// # Example
///
/// ```
/// use quadhash_rs::{BoundingBox, CoverageResolver};
///
/// # fn main() -> Result<(), quadhash_rs::QuadHashError> {
/// let resolver = CoverageResolver::default();
/// let bbox = BoundingBox::new(0.0, 0.0, 0.1, 0.0)?;
///
/// let hashes = resolver.relevant_hashes(&bbox)?;
/// assert_eq!(hashes, vec!["300000000000", "300000000001"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageResolver {
    hasher: TileHasher,
}

impl CoverageResolver {
    pub fn new(hasher: TileHasher) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &TileHasher {
        &self.hasher
    }

    /// Longest common prefix of the southwest and northeast corner hashes.
    ///
    /// Only a fast pre-filter: tiles of different sizes can share a corner, so
    /// the returned tile contains both corners but not necessarily the whole
    /// box. Use [`CoverageResolver::relevant_hashes`] for a covering set.
    pub fn smallest_common_prefix(&self, bbox: &BoundingBox) -> Result<String, QuadHashError> {
        bbox.validate()?;
        let southwest = self.hasher.encode(&(bbox.west, bbox.south))?;
        let northeast = self.hasher.encode(&(bbox.east, bbox.north))?;
        Ok(common_prefix(&southwest, &northeast).to_string())
    }

    /// The 1, 2 or 4 same-zoom tile hashes that together cover `bbox`.
    ///
    /// The zoom is the deepest one at which the box spans at most two columns
    /// and at most two rows, so the tiles under its four corners cover it.
    /// Hashes are returned sorted.
    pub fn relevant_hashes(&self, bbox: &BoundingBox) -> Result<Vec<String>, QuadHashError> {
        bbox.validate()?;
        let corners = bbox
            .corners()
            .iter()
            .map(|corner| self.hasher.encode(corner))
            .collect::<Result<Vec<_>, _>>()?;

        let base_zoom = corners[1..]
            .iter()
            .map(|hash| common_prefix(&corners[0], hash).len())
            .min()
            .unwrap_or(corners[0].len()) as u8;

        let lng_zoom = self.deepest_zoom_within_two_tiles(base_zoom, |zoom| {
            let west = longitude_to_tile_x(bbox.west, zoom)?;
            let east = longitude_to_tile_x(bbox.east, zoom)?;
            Ok(east.abs_diff(west))
        })?;
        let lat_zoom = self.deepest_zoom_within_two_tiles(base_zoom, |zoom| {
            let north = latitude_to_tile_y(bbox.north, zoom)?;
            let south = latitude_to_tile_y(bbox.south, zoom)?;
            Ok(south.abs_diff(north))
        })?;
        let zoom = lng_zoom.min(lat_zoom);

        debug!(
            base_zoom,
            lng_zoom,
            lat_zoom,
            zoom,
            ?bbox,
            "resolved covering zoom"
        );

        let hashes: BTreeSet<String> = corners
            .iter()
            .map(|hash| hash[..usize::from(zoom)].to_string())
            .collect();
        Ok(hashes.into_iter().collect())
    }

    /// Decoded form of [`CoverageResolver::relevant_hashes`].
    pub fn covering_cells(&self, bbox: &BoundingBox) -> Result<Vec<QuadCell>, QuadHashError> {
        self.relevant_hashes(bbox)?
            .iter()
            .map(|hash| self.hasher.decode(hash))
            .collect()
    }

    /// Covering hashes for the bounding rectangle of a geometry.
    pub fn relevant_hashes_for_geometry(
        &self,
        geometry: &Geometry<f64>,
    ) -> Result<Vec<String>, QuadHashError> {
        let rect = geometry
            .bounding_rect()
            .ok_or(QuadHashError::EmptyGeometry)?;
        self.relevant_hashes(&BoundingBox::from_rect(&rect))
    }

    // Advances from `start` while the tile span one zoom deeper stays below 2.
    fn deepest_zoom_within_two_tiles<F>(&self, start: u8, span_at: F) -> Result<u8, QuadHashError>
    where
        F: Fn(u8) -> Result<u32, QuadHashError>,
    {
        let mut zoom = start;
        while zoom < self.hasher.max_zoom() {
            let span = span_at(zoom + 1)?;
            trace!(zoom = zoom + 1, span, "tile span");
            if span >= 2 {
                break;
            }
            zoom += 1;
        }
        Ok(zoom)
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Smallest common corner prefix of a `[west, south, east, north]` box, default hasher.
pub fn smallest_common_prefix(bounds: [f64; 4]) -> Result<String, QuadHashError> {
    CoverageResolver::default().smallest_common_prefix(&BoundingBox::from_array(bounds)?)
}

/// Covering hashes of a `[west, south, east, north]` box, default hasher.
///
/// # Example
/// ```
/// let hashes = quadhash_rs::relevant_hashes([-10.0, -10.0, 10.0, 10.0]).unwrap();
/// assert_eq!(hashes, vec!["03333", "12222", "21111", "30000"]);
/// ```
pub fn relevant_hashes(bounds: [f64; 4]) -> Result<Vec<String>, QuadHashError> {
    CoverageResolver::default().relevant_hashes(&BoundingBox::from_array(bounds)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_LATITUDE;
    use geo_types::{LineString, coord};

    const STANLEY_PARK: (f64, f64) = (-123.13901424407958, 49.304195417949884);

    fn square_from(corner: (f64, f64), delta: f64) -> BoundingBox {
        BoundingBox {
            west: corner.0,
            south: corner.1,
            east: corner.0 + delta,
            north: corner.1 + delta,
        }
    }

    #[test]
    fn test_smallest_common_prefix() -> Result<(), QuadHashError> {
        let resolver = CoverageResolver::default();
        let hash = resolver.hasher().encode(&STANLEY_PARK)?;

        assert_eq!(
            resolver.smallest_common_prefix(&square_from(STANLEY_PARK, 10.0))?,
            hash[..3]
        );
        assert_eq!(
            resolver.smallest_common_prefix(&square_from(STANLEY_PARK, 0.01))?,
            hash[..11]
        );
        // So small it doesn't register
        assert_eq!(
            resolver.smallest_common_prefix(&square_from(STANLEY_PARK, 0.001))?,
            hash
        );
        Ok(())
    }

    #[test]
    fn test_smallest_common_prefix_across_origin_is_empty() -> Result<(), QuadHashError> {
        assert_eq!(smallest_common_prefix([-0.01, -0.01, 0.01, 0.01])?, "");
        Ok(())
    }

    #[test]
    fn test_smallest_common_prefix_rejects_bad_boxes() {
        assert!(matches!(
            smallest_common_prefix([1.0, 0.0, -1.0, 1.0]),
            Err(QuadHashError::DegenerateBoundingBox(_))
        ));
        // 40 degrees north of Stanley Park is past the Mercator limit
        assert!(matches!(
            CoverageResolver::default().smallest_common_prefix(&square_from(STANLEY_PARK, 40.0)),
            Err(QuadHashError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_relevant_hashes_single_point() -> Result<(), QuadHashError> {
        assert_eq!(relevant_hashes([0.0, 0.0, 0.0, 0.0])?, vec!["3000000000000000"]);
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_horizontal_split() -> Result<(), QuadHashError> {
        assert_eq!(
            relevant_hashes([0.0, 0.0, 0.1, 0.0])?,
            vec!["300000000000", "300000000001"]
        );
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_vertical_split() -> Result<(), QuadHashError> {
        assert_eq!(
            relevant_hashes([0.0, -0.1, 0.0, 0.0])?,
            vec!["300000000000", "300000000002"]
        );
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_quad_spread() -> Result<(), QuadHashError> {
        assert_eq!(
            relevant_hashes([-10.0, -10.0, 10.0, 10.0])?,
            vec!["03333", "12222", "21111", "30000"]
        );
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_known_zoom_6_block() -> Result<(), QuadHashError> {
        // Tiles 6/9/21, 6/10/21, 6/9/22 and 6/10/22
        let hashes = relevant_hashes([
            -125.20019531249999,
            46.56641407568593,
            -119.783935546875,
            49.880477638742555,
        ])?;
        assert_eq!(hashes, vec!["021203", "021212", "021221", "021230"]);
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_straddling_equator() -> Result<(), QuadHashError> {
        // The north edge sits just above the equator, so the rows split at every zoom
        let hashes = relevant_hashes([0.0, 0.0, 0.1, 0.00000001])?;
        assert_eq!(
            hashes,
            vec![
                "122222222222",
                "122222222223",
                "300000000000",
                "300000000001"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_whole_world() -> Result<(), QuadHashError> {
        let resolver = CoverageResolver::default();
        let hashes = resolver.relevant_hashes(&BoundingBox::world())?;
        assert_eq!(hashes, vec!["0", "1", "2", "3"]);
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_mixed_zooms_pick_shallowest() -> Result<(), QuadHashError> {
        let hashes = relevant_hashes([
            -115.53222656249999,
            31.203404950917395,
            -102.3486328125,
            42.00032514831621,
        ])?;
        assert_eq!(hashes, vec!["0212", "0213", "0230", "0231"]);
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_is_order_independent() -> Result<(), QuadHashError> {
        let resolver = CoverageResolver::default();
        let a = BoundingBox::from_corners(&(10.0, 10.0), &(-10.0, -10.0));
        let b = BoundingBox::from_corners(&(-10.0, 10.0), &(10.0, -10.0));
        let c = BoundingBox::from_corners(&(0.0, 0.0), &(0.0, -0.1));

        assert_eq!(resolver.relevant_hashes(&a)?, resolver.relevant_hashes(&b)?);
        assert_eq!(
            resolver.relevant_hashes(&c)?,
            vec!["300000000000", "300000000002"]
        );
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_rejects_degenerate_box() {
        let flipped = BoundingBox {
            west: 0.0,
            south: 0.0,
            east: 0.0,
            north: -0.1,
        };
        assert!(matches!(
            CoverageResolver::default().relevant_hashes(&flipped),
            Err(QuadHashError::DegenerateBoundingBox(_))
        ));
        assert!(relevant_hashes([10.0, 10.0, -10.0, -10.0]).is_err());
    }

    #[test]
    fn test_relevant_hashes_respects_max_zoom() -> Result<(), QuadHashError> {
        let resolver = CoverageResolver::new(TileHasher::new(8)?);
        let bbox = BoundingBox::new(0.0, 0.0, 0.0, 0.0)?;
        assert_eq!(resolver.relevant_hashes(&bbox)?, vec!["30000000"]);
        Ok(())
    }

    #[test]
    fn test_covering_cells_contain_box() -> Result<(), QuadHashError> {
        let resolver = CoverageResolver::default();
        let bbox = BoundingBox::new(-3.2, 55.9, -3.1, 56.0)?;
        let cells = resolver.covering_cells(&bbox)?;

        assert!(matches!(cells.len(), 1 | 2 | 4));
        let zoom = cells[0].zoom;
        assert!(cells.iter().all(|cell| cell.zoom == zoom));

        let west = cells.iter().map(|c| c.bbox.west).fold(f64::INFINITY, f64::min);
        let south = cells.iter().map(|c| c.bbox.south).fold(f64::INFINITY, f64::min);
        let east = cells.iter().map(|c| c.bbox.east).fold(f64::NEG_INFINITY, f64::max);
        let north = cells.iter().map(|c| c.bbox.north).fold(f64::NEG_INFINITY, f64::max);
        assert!(BoundingBox::new(west, south, east, north)?.contains(&bbox));
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_for_geometry() -> Result<(), QuadHashError> {
        let resolver = CoverageResolver::default();
        let line: Geometry<f64> = LineString::from(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 0.05, y: 0.0 },
            coord! { x: 0.1, y: 0.0 },
        ])
        .into();

        assert_eq!(
            resolver.relevant_hashes_for_geometry(&line)?,
            vec!["300000000000", "300000000001"]
        );

        let empty: Geometry<f64> = LineString::<f64>::new(vec![]).into();
        assert_eq!(
            resolver.relevant_hashes_for_geometry(&empty),
            Err(QuadHashError::EmptyGeometry)
        );
        Ok(())
    }

    #[test]
    fn test_relevant_hashes_at_mercator_limit() -> Result<(), QuadHashError> {
        let bbox = BoundingBox::new(179.9, MAX_LATITUDE - 0.01, 180.0, MAX_LATITUDE)?;
        let hashes = CoverageResolver::default().relevant_hashes(&bbox)?;
        assert!(matches!(hashes.len(), 1 | 2 | 4));
        assert!(hashes.iter().all(|h| h.starts_with('1')));
        Ok(())
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix("0123", "0132"), "01");
        assert_eq!(common_prefix("0123", "0123"), "0123");
        assert_eq!(common_prefix("", "0"), "");
    }
}
