use crate::error::{DJIError, Result};

/// DJI log data stream for reading binary data
///
/// All multi-byte reads are little-endian, matching the log file layout.
/// Reads never panic; running past the end of the buffer yields
/// `DJIError::ShortRead` with the offending offset.
pub struct DJIDataStream<'a> {
    data: &'a [u8],
    pub pos: usize,
    end: usize,
}

impl<'a> DJIDataStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    /// Number of unread bytes left in the stream
    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
    }

    /// Carve `len` bytes off the front of the stream
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len <= self.remaining() {
            let slice = &self.data[self.pos..self.pos + len];
            self.pos += len;
            Ok(slice)
        } else {
            Err(DJIError::ShortRead {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            })
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        let bytes = self.read_bytes(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_i16_le(&mut self) -> Result<i16> {
        let bytes = self.read_bytes(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_f64_le(&mut self) -> Result<f64> {
        let bytes = self.read_bytes(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(f64::from_le_bytes(buf))
    }

    /// Look at the next byte without consuming it
    pub fn peek_u8(&self) -> Option<u8> {
        if self.pos < self.end {
            Some(self.data[self.pos])
        } else {
            None
        }
    }
}
