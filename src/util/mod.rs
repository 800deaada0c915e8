pub mod coord;
pub mod error;

pub use coord::{Coordinate, validate_latitude, validate_longitude};
pub use error::QuadHashError;
