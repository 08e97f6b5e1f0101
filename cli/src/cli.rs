use std::path::PathBuf;

/// Geodetic area CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "geoarea", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Compute the area of one WKT geometry
    Area(AreaArgs),

    /// Build an area index from a file of WKT values
    Index(IndexArgs),
}

#[derive(clap::Args, Debug)]
pub struct AreaArgs {
    /// WKT geometry, e.g. "POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))"
    pub wkt: String,

    /// Query point latitude in decimal degrees, WGS84
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Query point longitude in decimal degrees, WGS84
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct IndexArgs {
    /// Input file, one WKT value per line
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Number of worker threads
    #[arg(short, long, default_value_t = 4)]
    pub workers: usize,

    /// Write the computed index to a JSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
