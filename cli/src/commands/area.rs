use anyhow::Result;
use geoarea::{AreaEngine, QueryPoint};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::AreaArgs) -> Result<()> {
    let engine = AreaEngine::with_shared_grid();
    let query = args.lat.zip(args.lon).map(|(lat, lon)| QueryPoint::new(lat, lon));
    let result = engine.compute(&args.wkt, query)?;

    println!("area: {} km²", result.square_kilometers);
    println!("parts: {}", result.geometry_count);
    if query.is_some() {
        println!("contains point: {}", result.contains_point);
    }

    Ok(())
}
