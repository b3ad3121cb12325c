//! KML Export Example
//!
//! Demonstrates how to export the GPS flight path to KML format for use
//! with Google Earth and other mapping applications.

use djilog_parser::{export_to_kml, parse_djilog_file, ExportOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Get input file from command line or show usage
    let input_file = std::env::args().nth(1).unwrap_or_else(|| {
        println!("Usage: kml_export <input.txt> [output_dir]");
        println!("Example: kml_export FLY012.txt ./output");
        println!("Note: KML export requires telemetry records in the log");
        std::process::exit(1);
    });

    // Get optional output directory from command line
    let output_dir = std::env::args().nth(2);

    // Configure export options - KML export enabled
    let export_opts = ExportOptions {
        csv: false,
        kml: true,
        json: false,
        output_dir,
    };

    // Parse the log file
    println!("Parsing: {}", input_file);
    let log = parse_djilog_file(Path::new(&input_file), false)?;

    let telemetry_count = log.telemetry_records().count();

    // Display log information
    println!("\nLog Information:");
    println!("  Format version: {}", log.header.format_version);
    println!("  Telemetry records: {}", telemetry_count);
    println!("  GPS points (nonzero position): {}", log.gps_records().count());

    // Export the track if there is anything to trace
    if telemetry_count > 0 {
        println!("\nExporting to KML...");
        export_to_kml(&log, Path::new(&input_file), &export_opts)?;
        println!("✓ KML export complete");
    } else {
        println!("\n⊘ No telemetry records available");
        println!("Note: This log may be empty or contain only battery frames.");
    }

    Ok(())
}
