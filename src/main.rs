use quadhash_rs::{BoundingBox, CoverageResolver, QuadHashError, TileHasher};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QuadHashError> {
    // Defaults to INFO if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let lon = -123.13901424407958;
    let lat = 49.304195417949884;

    let hasher = TileHasher::default();
    let hash = hasher.encode(&(lon, lat))?;
    let cell = hasher.decode(&hash)?;

    println!("Hash: {}", hash);
    println!("Tile: {}", cell.tile);
    println!("Bounds: {:?}", cell.bounds());
    println!("Polygon: {}", cell.to_wkt());

    let resolver = CoverageResolver::new(hasher);
    let bbox = BoundingBox::new(lon, lat, lon + 0.01, lat + 0.01)?;
    println!("Common prefix: {}", resolver.smallest_common_prefix(&bbox)?);

    for cell in resolver.covering_cells(&bbox)? {
        println!("Covering tile: {} ({})", cell.hash, cell.tile);
    }

    Ok(())
}
