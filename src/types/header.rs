use serde::Serialize;
use serde_json::{Map, Value};

/// DJI log header information
///
/// Decoded once from the fixed 11-byte prologue and the variable-length
/// details block that follows it, before any frame is scanned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DJIHeader {
    /// Declared size of the frame record area in bytes
    pub record_area_size: u64,
    /// Declared length of the details block in bytes
    pub details_length: u16,
    /// Log format version tag
    pub format_version: u8,
    /// Flight details parsed from the JSON details block
    ///
    /// Empty when the block is missing or does not parse as a JSON
    /// object; `raw_details` holds the fallback text in that case.
    pub details: Map<String, Value>,
    /// First 200 characters of the details text when it is not valid JSON
    pub raw_details: Option<String>,
}
