//! DJI Log Parser Library
//!
//! A Rust library for parsing DJI consumer drone flight log files.
//! This library provides both in-memory data access and export capabilities.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary
//!
//! # Quick Start
//!
//! Parse a log file and access decoded records:
//! ```rust,no_run
//! use djilog_parser::parse_djilog_file;
//! use std::path::Path;
//!
//! let log = parse_djilog_file(Path::new("FLY012.txt"), false).unwrap();
//! println!("Decoded {} records", log.record_count());
//! println!("Format version: {}", log.header.format_version);
//! ```
//!
//! Export to CSV format:
//! ```rust,no_run
//! use djilog_parser::{export_to_csv, parse_djilog_file, ExportOptions};
//! use std::path::Path;
//!
//! let options = ExportOptions {
//!     csv: true,
//!     kml: false,
//!     json: false,
//!     output_dir: None,
//! };
//! let log = parse_djilog_file(Path::new("FLY012.txt"), false).unwrap();
//! if let Some(path) = export_to_csv(&log, Path::new("FLY012.txt"), &options).unwrap() {
//!     println!("Exported to: {}", path.display());
//! }
//! ```
//!
//! # Public API
//!
//! ## Parsing Functions
//! - [`parse_djilog_file`] - Parse a DJI log file from disk
//! - [`parse_djilog_bytes`] - Parse DJI log data from memory
//! - [`parse_header`] - Low-level prologue and details decode
//! - [`scan_frames`] - Low-level record area scan
//!
//! ## Data Types
//! - [`DJILog`] - Complete parsed log with records and frame statistics
//! - [`DJIHeader`] - Prologue fields and flight details metadata
//! - [`Record`] - Decoded record, telemetry or battery
//! - [`TelemetryRecord`] - Position, speed, and attitude sample
//! - [`BatteryRecord`] - Battery charge and capacity sample
//! - [`FrameStats`] - Frame accounting collected during the scan
//! - [`ExportOptions`] - Configuration for export operations
//!
//! ## Export Functions
//! - [`export_to_csv`] - Export all records to CSV format
//! - [`export_to_kml`] - Export the flight path to KML format
//! - [`export_to_json`] - Export the full document to JSON format
//! - [`compute_export_path`] - Helper for consistent path computation
//!
//! ## Conversion Utilities
//! - [`convert_coordinate_to_degrees`] - Convert raw radians to degrees
//! - [`convert_height_to_meters`] - Convert raw height to meters
//! - [`convert_speed_to_ms`] - Convert raw speed to m/s
//! - [`convert_attitude_to_degrees`] - Convert raw attitude to degrees
//! - [`horizontal_speed_ms`] - Manhattan horizontal speed from components
//! - [`is_valid_coordinate`] - Range check for decoded positions

// Module declarations
pub mod conversion;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

// Re-export everything from modules for convenience
// This maintains backward compatibility while keeping the implementation flexible
#[allow(ambiguous_glob_reexports)]
pub use conversion::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
