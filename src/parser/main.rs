use crate::error::{DJIError, Result};
use crate::parser::frame::scan_frames;
use crate::parser::header::parse_header;
use crate::parser::stream::DJIDataStream;
use crate::types::DJILog;
use anyhow::Context;
use std::path::Path;

/// Lowest log format version this parser understands
pub const MIN_SUPPORTED_VERSION: u8 = 1;
/// Highest non-encrypted legacy format version
pub const MAX_SUPPORTED_VERSION: u8 = 12;

/// Parse a DJI log file from disk
pub fn parse_djilog_file(file_path: &Path, debug: bool) -> anyhow::Result<DJILog> {
    if debug {
        println!("=== PARSING DJI LOG FILE ===");
        let metadata = std::fs::metadata(file_path)?;
        println!(
            "File size: {} bytes ({:.2} MB)",
            metadata.len(),
            metadata.len() as f64 / 1024.0 / 1024.0
        );
    }

    let file_data = std::fs::read(file_path)
        .with_context(|| format!("Failed to read DJI log file: {:?}", file_path))?;

    let log = parse_djilog_bytes(&file_data, debug)
        .with_context(|| format!("Failed to parse DJI log file: {:?}", file_path))?;
    Ok(log)
}

/// Parse DJI log data from memory
///
/// Fails only when the fixed prologue is truncated or the format version
/// is outside the supported legacy range. Frame-level problems never fail
/// the parse; they are counted in the returned statistics, and the
/// records that did decode are all present in file order.
pub fn parse_djilog_bytes(data: &[u8], debug: bool) -> Result<DJILog> {
    if debug {
        println!("=== PARSING DJI LOG DATA ===");
        println!("Data size: {} bytes", data.len());
    }

    let mut stream = DJIDataStream::new(data);
    let header = parse_header(&mut stream, debug)?;

    if !(MIN_SUPPORTED_VERSION..=MAX_SUPPORTED_VERSION).contains(&header.format_version) {
        return Err(DJIError::UnsupportedVersion(header.format_version));
    }

    let record_area = &data[stream.pos..];
    let (records, stats) = scan_frames(record_area, debug);

    if debug {
        println!(
            "Decoded {} records ({} OSD, {} battery), {} skipped, {} decode errors",
            records.len(),
            stats.osd_frames,
            stats.battery_frames,
            stats.skipped_frames,
            stats.decode_errors
        );
    }

    Ok(DJILog {
        header,
        records,
        stats,
    })
}
