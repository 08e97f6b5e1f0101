use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result};
use geoarea::{AreaEngine, AreaIndex, CancelToken};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::IndexArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let values: BTreeSet<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if cli.verbose > 0 {
        eprintln!("[index] {} distinct values -> {} workers", values.len(), args.workers);
    }

    let index = AreaIndex::new(AreaEngine::with_shared_grid());
    index.populate(values.iter().cloned(), args.workers, &CancelToken::new());

    println!("Indexed {} areas from {}", index.len(), args.input.display());

    if let Some(out_path) = &args.output {
        let report: Vec<_> = values
            .iter()
            .filter_map(|wkt| {
                index.get(wkt).map(|area| {
                    serde_json::json!({
                        "wkt": wkt,
                        "square_kilometers": area.square_kilometers,
                        "geometry_count": area.geometry_count,
                    })
                })
            })
            .collect();
        fs::write(out_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        println!("Wrote index -> {}", out_path.display());
    }

    Ok(())
}
