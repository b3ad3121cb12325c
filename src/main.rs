//! CLI binary for the DJI Log Parser
//!
//! Expands the input patterns, parses each log file, prints a flight
//! summary, and runs the requested exports.

use anyhow::Result;
use clap::{Arg, Command};
use glob::glob;
use std::path::Path;

use djilog_parser::{
    export_to_csv, export_to_json, export_to_kml, horizontal_speed_ms, parse_djilog_file, DJILog,
    ExportOptions,
};

fn build_command() -> Command {
    Command::new("DJI Log Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read and parse DJI flight log files. Prints a flight summary, optionally exports CSV/KML/JSON.")
        .arg(
            Arg::new("files")
                .help("DJI log files to parse (.txt extension, case-insensitive, supports globbing)")
                .required(false)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Export decoded records to CSV files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("kml")
                .long("kml")
                .help("Export the GPS flight path to KML files (for Google Earth)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Export the full parsed document to JSON files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file)")
                .value_name("DIR"),
        )
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let export_options = ExportOptions {
        csv: matches.get_flag("csv"),
        kml: matches.get_flag("kml"),
        json: matches.get_flag("json"),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
    };

    // Check if no files were provided and show help
    let file_patterns: Vec<&String> = match matches.get_many::<String>("files") {
        Some(files) => files.collect(),
        None => {
            build_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let mut processed_files = 0;

    if debug {
        println!("Input patterns: {file_patterns:?}");
    }

    // Collect all valid file paths
    let mut valid_paths = Vec::new();
    for pattern in &file_patterns {
        if debug {
            println!("Processing pattern: {pattern}");
        }

        let paths: Vec<_> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => {
                    let collected = glob_iter.collect::<Result<Vec<_>, _>>();
                    match collected {
                        Ok(paths) => {
                            if debug {
                                println!("Glob pattern '{pattern}' matched {} files", paths.len());
                            }
                            paths
                        }
                        Err(e) => {
                            eprintln!("Error expanding glob pattern '{pattern}': {e}");
                            continue;
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![Path::new(pattern).to_path_buf()]
        };

        for path in paths {
            if debug {
                println!("Checking file: {path:?}");
            }

            if !path.exists() {
                eprintln!("Warning: File does not exist: {path:?}");
                continue;
            }

            if !has_supported_extension(&path) {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
                eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
                continue;
            }

            if debug {
                println!("Added valid file: {path:?}");
            }
            valid_paths.push(path);
        }
    }

    if debug {
        println!("Found {} valid files to process", valid_paths.len());
    }

    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extension: .txt (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    // Process files using the library API
    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match process_file(path, debug, &export_options) {
            Ok(record_count) => {
                if debug {
                    println!("Successfully processed {record_count} record(s)");
                }
                processed_files += 1;
            }
            Err(e) => {
                eprintln!("Error processing {filename}: {e:#}");
                eprintln!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        eprintln!("This could be due to:");
        eprintln!("  - Files not being valid DJI flight log format");
        eprintln!("  - Corrupted or empty files");
        eprintln!("  - Encrypted logs (format version 13 and above)");
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}

/// Parse one log file, print its summary, and run the requested exports.
/// Returns the number of decoded records.
fn process_file(path: &Path, debug: bool, export_options: &ExportOptions) -> Result<usize> {
    let log = parse_djilog_file(path, debug)?;

    print_summary(&log);

    if export_options.csv {
        export_to_csv(&log, path, export_options)?;
    }
    if export_options.kml {
        export_to_kml(&log, path, export_options)?;
    }
    if export_options.json {
        export_to_json(&log, path, export_options)?;
    }

    Ok(log.record_count())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// Render one flight-details value for the summary listing. Strings print
/// bare, everything else as compact JSON.
fn detail_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn print_summary(log: &DJILog) {
    println!("\n{}", "=".repeat(60));
    println!("FLIGHT SUMMARY");
    println!("{}\n", "=".repeat(60));

    if !log.header.details.is_empty() {
        println!("Flight Details:");
        for (key, value) in &log.header.details {
            println!("  {}: {}", key, detail_value(value));
        }
        println!();
    } else if let Some(raw) = &log.header.raw_details {
        println!("Flight Details:");
        println!("  raw: {raw}");
        println!();
    }

    let telemetry_count = log.telemetry_records().count();
    let battery_count = log.battery_records().count();

    println!("Total Records: {}", log.record_count());
    println!("  - Telemetry (OSD): {telemetry_count}");
    println!("  - Battery: {battery_count}");

    if telemetry_count > 0 {
        println!("\nTelemetry Summary:");

        let gps_points: Vec<_> = log.gps_records().collect();
        if let (Some(first), Some(last)) = (gps_points.first(), gps_points.last()) {
            println!("  GPS Points: {}", gps_points.len());
            println!(
                "  Start Position: {:.6}, {:.6}",
                first.latitude, first.longitude
            );
            println!(
                "  End Position: {:.6}, {:.6}",
                last.latitude, last.longitude
            );
        }

        let max_height = log
            .telemetry_records()
            .map(|t| t.height_m)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_height = log
            .telemetry_records()
            .map(|t| t.height_m)
            .fold(f64::INFINITY, f64::min);
        println!("  Max Height: {max_height:.2} m");
        println!("  Min Height: {min_height:.2} m");

        let max_speed = log
            .telemetry_records()
            .map(|t| horizontal_speed_ms(t.x_speed_ms, t.y_speed_ms))
            .fold(f64::NEG_INFINITY, f64::max);
        println!("  Max Horizontal Speed: {max_speed:.2} m/s");

        let sats_min = log.telemetry_records().map(|t| t.gps_satellites).min();
        let sats_max = log.telemetry_records().map(|t| t.gps_satellites).max();
        if let (Some(min_sats), Some(max_sats)) = (sats_min, sats_max) {
            println!("  GPS Satellites: {min_sats} - {max_sats}");
        }
    }

    if battery_count > 0 {
        println!("\nBattery Summary:");
        let levels: Vec<u8> = log.battery_records().map(|b| b.battery_percent).collect();
        if let (Some(first), Some(last), Some(min_level)) =
            (levels.first(), levels.last(), levels.iter().min())
        {
            println!("  Start Level: {first}%");
            println!("  End Level: {last}%");
            println!("  Min Level: {min_level}%");
        }
    }
}
