use std::fmt;

/// Custom error types for DJI log parsing
#[derive(Debug)]
pub enum DJIError {
    /// I/O errors
    Io(std::io::Error),
    /// Buffer too small for the fixed-size file prologue
    TruncatedHeader { needed: usize, available: usize },
    /// A fixed-width read ran past the end of the buffer
    ShortRead {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Format version outside the supported legacy range
    UnsupportedVersion(u8),
    /// Frame contents failed a validity check
    Malformed(String),
    /// Export format error
    Export(String),
}

impl fmt::Display for DJIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DJIError::Io(err) => write!(f, "I/O error: {}", err),
            DJIError::TruncatedHeader { needed, available } => write!(
                f,
                "Truncated header: need {} bytes, only {} available",
                needed, available
            ),
            DJIError::ShortRead {
                offset,
                needed,
                available,
            } => write!(
                f,
                "Short read at offset {}: need {} bytes, {} remain",
                offset, needed, available
            ),
            DJIError::UnsupportedVersion(version) => write!(
                f,
                "Unsupported format version: {} (supported: 1-12, non-encrypted)",
                version
            ),
            DJIError::Malformed(msg) => write!(f, "Malformed frame: {}", msg),
            DJIError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for DJIError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DJIError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DJIError {
    fn from(err: std::io::Error) -> Self {
        DJIError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, DJIError>;
