use crate::parser::battery::parse_battery_payload;
use crate::parser::osd::parse_osd_payload;
use crate::parser::stream::DJIDataStream;
use crate::types::{FrameStats, Record};

// Frame type codes used by legacy DJI logs
pub const FRAME_TYPE_HOME_POINT: u8 = 1;
pub const FRAME_TYPE_GIMBAL: u8 = 2;
pub const FRAME_TYPE_RC: u8 = 3;
pub const FRAME_TYPE_CUSTOM: u8 = 5;
pub const FRAME_TYPE_DEFORM: u8 = 11;
pub const FRAME_TYPE_CENTER_BATTERY: u8 = 12;
pub const FRAME_TYPE_SMART_BATTERY: u8 = 13;
pub const FRAME_TYPE_OSD: u8 = 255;

/// Display name for a recognized frame type code
pub fn frame_type_name(frame_type: u8) -> Option<&'static str> {
    match frame_type {
        FRAME_TYPE_HOME_POINT => Some("Home Point"),
        FRAME_TYPE_GIMBAL => Some("Gimbal"),
        FRAME_TYPE_RC => Some("RC"),
        FRAME_TYPE_CUSTOM => Some("Custom"),
        FRAME_TYPE_DEFORM => Some("Deform"),
        FRAME_TYPE_CENTER_BATTERY => Some("Center Battery"),
        FRAME_TYPE_SMART_BATTERY => Some("Smart Battery"),
        FRAME_TYPE_OSD => Some("OSD"),
        _ => None,
    }
}

/// Bytes that cannot start a frame: type 0 never occurs, and apart from
/// OSD (255) no recognized type code is above 20.
fn is_non_frame_byte(frame_type: u8) -> bool {
    frame_type == 0 || (frame_type > 20 && frame_type != FRAME_TYPE_OSD)
}

/// Scan the record area and decode every recognizable frame
///
/// Walks the buffer frame by frame using the embedded type and length
/// bytes. A byte that cannot start a frame, or a zero/overrunning length
/// field, advances the scan by a single byte so one corrupt field cannot
/// desynchronize the rest of the stream. Structurally valid frames always
/// advance by their full declared width, whether or not their contents
/// decode; every iteration advances the position, so the scan always
/// terminates.
pub fn scan_frames(record_area: &[u8], debug: bool) -> (Vec<Record>, FrameStats) {
    let mut records = Vec::new();
    let mut stats = FrameStats::default();
    let mut stream = DJIDataStream::new(record_area);

    if debug {
        println!("Record area: {} bytes", record_area.len());
        if !record_area.is_empty() {
            println!(
                "First 16 bytes: {:02X?}",
                &record_area[..16.min(record_area.len())]
            );
        }
    }

    // A frame needs at least its two type/length bytes
    while stream.remaining() >= 2 {
        let frame_start = stream.pos;

        let frame_type = match stream.read_u8() {
            Ok(byte) => byte,
            Err(_) => break,
        };

        if is_non_frame_byte(frame_type) {
            stats.skipped_frames += 1;
            stream.set_position(frame_start + 1);
            continue;
        }

        let declared_length = match stream.read_u8() {
            Ok(byte) => byte,
            Err(_) => break,
        };
        let frame_len = declared_length as usize + 2;

        if declared_length == 0 || frame_start + frame_len > record_area.len() {
            if debug && stats.decode_errors < 5 {
                println!(
                    "Invalid length {} for frame type {} at offset {}",
                    declared_length, frame_type, frame_start
                );
            }
            stats.decode_errors += 1;
            stream.set_position(frame_start + 1);
            continue;
        }

        let payload = match stream.read_bytes(declared_length as usize) {
            Ok(slice) => slice,
            Err(_) => break,
        };

        stats.total_frames += 1;
        stats.total_bytes += frame_len as u64;

        match frame_type {
            FRAME_TYPE_OSD => match parse_osd_payload(payload) {
                Ok(telemetry) => {
                    stats.osd_frames += 1;
                    records.push(Record::Telemetry(telemetry));
                }
                Err(err) => {
                    if debug && stats.decode_errors < 5 {
                        println!("OSD frame at offset {} dropped: {}", frame_start, err);
                    }
                    stats.decode_errors += 1;
                }
            },
            FRAME_TYPE_SMART_BATTERY => match parse_battery_payload(payload) {
                Ok(battery) => {
                    stats.battery_frames += 1;
                    records.push(Record::Battery(battery));
                }
                Err(err) => {
                    if debug && stats.decode_errors < 5 {
                        println!("Battery frame at offset {} dropped: {}", frame_start, err);
                    }
                    stats.decode_errors += 1;
                }
            },
            _ => {
                // Structurally valid frame with no decoder registered
                if debug && stats.skipped_frames < 5 {
                    match frame_type_name(frame_type) {
                        Some(name) => println!(
                            "Skipping {} frame ({} bytes) at offset {}",
                            name, frame_len, frame_start
                        ),
                        None => println!(
                            "Skipping unknown frame type {} ({} bytes) at offset {}",
                            frame_type, frame_len, frame_start
                        ),
                    }
                }
                stats.skipped_frames += 1;
            }
        }
    }

    (records, stats)
}
