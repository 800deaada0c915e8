/// Default hash length, one character per zoom level 1..=16
pub const DEFAULT_MAX_ZOOM: u8 = 16;

/// Deepest zoom level the projection supports with `u32` tile indices
pub const MAX_SUPPORTED_ZOOM: u8 = 30;

/// Web Mercator latitude limit, the northern edge of tile row 0
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;
pub const MIN_LATITUDE: f64 = -MAX_LATITUDE;

/// Valid longitude range
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LONGITUDE: f64 = -180.0;

/// Hash alphabet, indexed by quadrant digit
pub const QUADRANT_ALPHABET: [char; 4] = ['0', '1', '2', '3'];
