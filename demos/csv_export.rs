//! CSV Export Example
//!
//! Demonstrates how to parse a DJI flight log and export every decoded
//! record to CSV format. The CSV header is the union of all record
//! fields, so telemetry and battery rows share one table.

use djilog_parser::{export_to_csv, parse_djilog_file, ExportOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Get input file from command line or show usage
    let input_file = std::env::args().nth(1).unwrap_or_else(|| {
        println!("Usage: csv_export <input.txt> [output_dir]");
        println!("Example: csv_export FLY012.txt ./output");
        std::process::exit(1);
    });

    // Get optional output directory from command line
    let output_dir = std::env::args().nth(2);

    // Configure export options - CSV only
    let export_opts = ExportOptions {
        csv: true,
        kml: false,
        json: false,
        output_dir,
    };

    // Parse the log file
    println!("Parsing: {}", input_file);
    let log = parse_djilog_file(Path::new(&input_file), false)?;

    // Display log information
    println!("\nLog Information:");
    println!("  Format version: {}", log.header.format_version);
    println!("  Total records: {}", log.record_count());
    println!("  Total frames: {}", log.stats.total_frames);

    // Export to CSV
    println!("\nExporting to CSV...");
    export_to_csv(&log, Path::new(&input_file), &export_opts)?;
    println!("✓ CSV export complete");

    Ok(())
}
