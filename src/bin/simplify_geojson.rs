//! CLI tool for simplifying GeoJSON feature collections for mobile maps
//!
//! Usage:
//!   cargo run --release --bin simplify_geojson -- <input> <output> [options]
//!
//! Examples:
//!   simplify_geojson regions.geojson regions.min.geojson
//!   simplify_geojson regions.geojson regions.min.geojson --tolerance 0.002
//!   simplify_geojson regions.geojson regions.min.geojson --tolerance 0.0005 --parallel

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geojson_simplify::{
    count, process_with, read_feature_collection, write_feature_collection, SimplifyOptions,
    SimplifyStats, DEFAULT_TOLERANCE,
};

#[derive(Parser)]
#[command(name = "simplify_geojson")]
#[command(author, version, about = "Simplify GeoJSON geometries for mobile performance", long_about = None)]
struct Cli {
    /// Input GeoJSON file
    input: PathBuf,

    /// Output GeoJSON file (written as compact JSON)
    output: PathBuf,

    /// Simplification tolerance in degrees (0.0005 minimal, 0.001 balanced, 0.002 aggressive)
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE, value_parser = parse_tolerance)]
    tolerance: f64,

    /// Simplify features in parallel
    #[arg(long)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_tolerance(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("tolerance must be a finite number >= 0, got {raw}"));
    }
    Ok(value)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

const BANNER_WIDTH: usize = 60;

fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn print_report(cli: &Cli, stats: &SimplifyStats, input_bytes: u64, output_bytes: u64) {
    println!();
    println!("=== Simplification complete ===");
    println!("  Features: {}", stats.features);
    println!("  Tolerance: {}", stats.tolerance);
    println!("  Initial coordinates: {}", stats.input_coordinates);
    println!("  Final coordinates: {}", stats.output_coordinates);
    println!("  Coordinate reduction: {:.1}%", stats.coordinate_reduction_percent());

    if stats.warnings() > 0 {
        let g = &stats.geometry;
        println!("  Warnings: {}", stats.warnings());
        println!("    Collapsed rings kept: {}", g.collapsed_rings);
        println!("    Malformed rings: {}", g.malformed_rings);
        println!("    Malformed lines: {}", g.malformed_lines);
        println!("    Unsupported geometries: {}", g.unsupported_geometries);
        println!("    Null geometries: {}", g.null_geometries);
    }

    let size_reduction = if input_bytes > 0 {
        (input_bytes as f64 - output_bytes as f64) / input_bytes as f64 * 100.0
    } else {
        0.0
    };

    println!();
    println!("=== File sizes ===");
    println!("  Input:  {:.2} MB ({})", megabytes(input_bytes), cli.input.display());
    println!("  Output: {:.2} MB ({})", megabytes(output_bytes), cli.output.display());
    println!("  Size reduction: {:.1}%", size_reduction);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    println!("{}", banner("GeoJSON Simplification Tool for Mobile Apps"));
    println!();

    let options = SimplifyOptions {
        tolerance: cli.tolerance,
        parallel: cli.parallel,
    };

    info!("Loading GeoJSON from: {}", cli.input.display());
    let start = Instant::now();
    let collection = read_feature_collection(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    info!(
        "Found {} features, {} coordinates ({:.2}ms)",
        collection.features.len(),
        count(&collection),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let start = Instant::now();
    let (simplified, stats) = process_with(&collection, &options).context("Failed to simplify geometries")?;
    info!("Simplified in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    info!("Writing simplified GeoJSON to: {}", cli.output.display());
    let output_bytes = write_feature_collection(&cli.output, &simplified)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    let input_bytes = std::fs::metadata(&cli.input)
        .with_context(|| format!("Failed to stat {}", cli.input.display()))?
        .len();

    print_report(&cli, &stats, input_bytes, output_bytes);

    println!();
    println!("{}", banner("Done! Replace your original file with the simplified version."));
    Ok(())
}
