use crate::error::{DJIError, Result};
use crate::parser::stream::DJIDataStream;
use crate::types::BatteryRecord;

/// Minimum Smart Battery payload length in bytes
pub const BATTERY_MIN_PAYLOAD: usize = 28;

/// Decode a Smart Battery frame payload
///
/// `payload` is the frame body after the two type/length bytes: u8 charge
/// percent, u16 current and total capacity in mAh, three reserved bytes,
/// then the u32 charge cycle count (0 when the field is absent).
pub fn parse_battery_payload(payload: &[u8]) -> Result<BatteryRecord> {
    if payload.len() < BATTERY_MIN_PAYLOAD {
        return Err(DJIError::Malformed(format!(
            "battery payload too short: {} bytes, need {}",
            payload.len(),
            BATTERY_MIN_PAYLOAD
        )));
    }

    let mut stream = DJIDataStream::new(payload);
    let battery_percent = stream.read_u8()?;
    if battery_percent > 100 {
        return Err(DJIError::Malformed(format!(
            "battery percent out of range: {}",
            battery_percent
        )));
    }

    let current_capacity_mah = stream.read_u16_le()?;
    let total_capacity_mah = stream.read_u16_le()?;
    stream.read_bytes(3)?; // reserved
    let charge_cycles = if stream.remaining() >= 4 {
        stream.read_u32_le()?
    } else {
        0
    };

    Ok(BatteryRecord {
        battery_percent,
        current_capacity_mah,
        total_capacity_mah,
        charge_cycles,
    })
}
