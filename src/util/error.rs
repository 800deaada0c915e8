/// Error type for quadhash-rs operations.
#[derive(Debug, PartialEq)]
pub enum QuadHashError {
    /// Longitude outside [-180, 180] or latitude outside the Web Mercator range.
    InvalidCoordinate(String),
    /// A hash contains a character outside the base-4 alphabet `0123`.
    InvalidHashCharacter(char),
    /// A bounding box with west > east or south > north.
    DegenerateBoundingBox(String),
    /// The zoom level is outside the supported range.
    InvalidZoomLevel(u8),
    /// A tile index lies outside the 2^z by 2^z grid of its zoom level.
    InvalidTileIndex { x: u32, y: u32, z: u8 },
    /// A hash is longer than the hasher's maximum zoom.
    HashTooLong(usize),
    /// A geometry has no bounding rectangle to cover.
    EmptyGeometry,
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// Hasher configuration could not be read or is invalid.
    ConfigError(String),
}

impl std::fmt::Display for QuadHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadHashError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            QuadHashError::InvalidHashCharacter(c) => {
                write!(f, "Invalid hash character: {:?} (expected one of 0123)", c)
            }
            QuadHashError::DegenerateBoundingBox(msg) => {
                write!(f, "Degenerate bounding box: {}", msg)
            }
            QuadHashError::InvalidZoomLevel(z) => write!(f, "Invalid zoom level: {}", z),
            QuadHashError::InvalidTileIndex { x, y, z } => {
                write!(f, "Invalid tile index: {}/{}/{}", z, x, y)
            }
            QuadHashError::HashTooLong(len) => write!(f, "Hash too long: {} characters", len),
            QuadHashError::EmptyGeometry => write!(f, "Geometry is empty"),
            QuadHashError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            QuadHashError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for QuadHashError {}
