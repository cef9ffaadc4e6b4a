//! Generates the benchmark dataset fixtures to disk.
//!
//! Writes `small.json`, `medium.json` and `large.json` to
//! `target/bench-fixtures/`. The files use the same dataset format the
//! `mstkit` CLI reads, so they double as large manual test inputs.

use std::error::Error;
use std::fs;
use std::io::{BufWriter, Write as _};

use mstkit_bench::{SizeTier, dataset_fixture_path, fixtures_dir, generate_dataset};

const GRAPHS_PER_FILE: usize = 5;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(fixtures_dir())?;

    for tier in [SizeTier::Small, SizeTier::Medium, SizeTier::Large] {
        let dataset = generate_dataset(tier, GRAPHS_PER_FILE, SEED);
        let edge_count: usize = dataset.graphs.iter().map(|g| g.edges.len()).sum();
        let path = dataset_fixture_path(tier);
        eprintln!(
            "Writing {} graphs ({edge_count} edges) to {}...",
            dataset.len(),
            path.display()
        );

        let mut writer = BufWriter::new(fs::File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, &dataset)?;
        writeln!(writer)?;
        writer.flush()?;

        let meta = fs::metadata(&path)?;
        eprintln!("{}: {:.1} KB", tier.name(), meta.len() as f64 / 1024.0);
    }

    Ok(())
}
