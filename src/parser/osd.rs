use crate::conversion::{
    convert_attitude_to_degrees, convert_coordinate_to_degrees, convert_height_to_meters,
    convert_speed_to_ms, is_valid_coordinate,
};
use crate::error::{DJIError, Result};
use crate::parser::stream::DJIDataStream;
use crate::types::TelemetryRecord;

/// Minimum OSD payload length in bytes
pub const OSD_MIN_PAYLOAD: usize = 55;

/// Decode an OSD (main telemetry) frame payload
///
/// `payload` is the frame body after the two type/length bytes, laid out
/// little-endian: f64 longitude and latitude in radians, then i16 height,
/// x/y/z speed and pitch/roll/yaw in tenths, six reserved bytes and the
/// u8 GPS satellite count. Coordinates outside the valid degree ranges
/// make the whole record malformed.
pub fn parse_osd_payload(payload: &[u8]) -> Result<TelemetryRecord> {
    if payload.len() < OSD_MIN_PAYLOAD {
        return Err(DJIError::Malformed(format!(
            "OSD payload too short: {} bytes, need {}",
            payload.len(),
            OSD_MIN_PAYLOAD
        )));
    }

    let mut stream = DJIDataStream::new(payload);
    let longitude = convert_coordinate_to_degrees(stream.read_f64_le()?);
    let latitude = convert_coordinate_to_degrees(stream.read_f64_le()?);
    let height_m = convert_height_to_meters(stream.read_i16_le()?);
    let x_speed_ms = convert_speed_to_ms(stream.read_i16_le()?);
    let y_speed_ms = convert_speed_to_ms(stream.read_i16_le()?);
    let z_speed_ms = convert_speed_to_ms(stream.read_i16_le()?);
    let pitch_deg = convert_attitude_to_degrees(stream.read_i16_le()?);
    let roll_deg = convert_attitude_to_degrees(stream.read_i16_le()?);
    let yaw_deg = convert_attitude_to_degrees(stream.read_i16_le()?);
    stream.read_bytes(6)?; // reserved
    let gps_satellites = stream.read_u8()?;

    if !is_valid_coordinate(latitude, longitude) {
        return Err(DJIError::Malformed(format!(
            "coordinate out of range: lat {}, lon {}",
            latitude, longitude
        )));
    }

    Ok(TelemetryRecord {
        latitude,
        longitude,
        height_m,
        x_speed_ms,
        y_speed_ms,
        z_speed_ms,
        pitch_deg,
        roll_deg,
        yaw_deg,
        gps_satellites,
    })
}
