pub mod cell;
pub mod config;
pub mod coverage;
pub mod hasher;

pub use cell::QuadCell;
pub use config::HasherConfig;
pub use coverage::{CoverageResolver, relevant_hashes, smallest_common_prefix};
pub use hasher::{TileHasher, TileHasherBuilder, decode, encode};
