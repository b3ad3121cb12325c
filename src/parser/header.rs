use crate::error::{DJIError, Result};
use crate::parser::stream::DJIDataStream;
use crate::types::DJIHeader;
use serde_json::Value;

/// Size of the fixed file prologue in bytes
pub const PROLOGUE_SIZE: usize = 11;

/// Characters of raw details text kept when JSON parsing fails
pub const RAW_DETAILS_LIMIT: usize = 200;

/// Parse the fixed prologue and the details block
///
/// The prologue is a little-endian u64 record-area size, a u16 details
/// length and a u8 format version. The details block is UTF-8 text,
/// usually a JSON object describing the flight, padded with NULs. The
/// stream is left at the first byte after the details block, i.e. the
/// start of the frame record area.
///
/// Only a buffer shorter than the fixed prologue is fatal. An
/// unparseable details block degrades to the raw-text fallback, and a
/// details length that overruns the buffer is clamped to the bytes
/// actually present.
pub fn parse_header(stream: &mut DJIDataStream, debug: bool) -> Result<DJIHeader> {
    if stream.remaining() < PROLOGUE_SIZE {
        return Err(DJIError::TruncatedHeader {
            needed: PROLOGUE_SIZE,
            available: stream.remaining(),
        });
    }

    let record_area_size = stream.read_u64_le()?;
    let details_length = stream.read_u16_le()?;
    let format_version = stream.read_u8()?;

    if debug {
        println!("Log version: {}", format_version);
        println!("Details length: {} bytes", details_length);
        println!("Record area size: {} bytes", record_area_size);
    }

    let details_available = (details_length as usize).min(stream.remaining());
    let details_bytes = stream.read_bytes(details_available)?;

    let details_text = String::from_utf8_lossy(details_bytes);
    let details_text = details_text.trim_end_matches('\0');

    let mut details = serde_json::Map::new();
    let mut raw_details = None;

    if !details_text.is_empty() {
        match serde_json::from_str::<Value>(details_text) {
            Ok(Value::Object(map)) => details = map,
            _ => {
                raw_details = Some(details_text.chars().take(RAW_DETAILS_LIMIT).collect());
            }
        }
    }

    if debug {
        if !details.is_empty() {
            println!("Details: {} fields", details.len());
        } else if raw_details.is_some() {
            println!("Details: not valid JSON, keeping raw text");
        }
    }

    Ok(DJIHeader {
        record_area_size,
        details_length,
        format_version,
        details,
        raw_details,
    })
}
