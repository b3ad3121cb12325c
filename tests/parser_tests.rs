//! Integration tests for DJI log parsing
//!
//! Builds synthetic log buffers and checks the decoded records, the
//! frame accounting, and the failure modes against the format rules.

use djilog_parser::{parse_djilog_bytes, DJIError};

const FORMAT_VERSION: u8 = 5;

fn prologue(record_area_size: u64, details_length: u16, version: u8) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&record_area_size.to_le_bytes());
    data.extend_from_slice(&details_length.to_le_bytes());
    data.push(version);
    data
}

fn build_log_with_version(details: &str, version: u8, frames: &[Vec<u8>]) -> Vec<u8> {
    let record_area: Vec<u8> = frames.concat();
    let mut data = prologue(record_area.len() as u64, details.len() as u16, version);
    data.extend_from_slice(details.as_bytes());
    data.extend_from_slice(&record_area);
    data
}

fn build_log(details: &str, frames: &[Vec<u8>]) -> Vec<u8> {
    build_log_with_version(details, FORMAT_VERSION, frames)
}

fn frame(frame_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut buf = vec![frame_type, payload.len() as u8];
    buf.extend_from_slice(payload);
    buf
}

fn osd_payload(
    lon_rad: f64,
    lat_rad: f64,
    height_raw: i16,
    speeds_raw: [i16; 3],
    attitude_raw: [i16; 3],
    satellites: u8,
) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&lon_rad.to_le_bytes());
    payload.extend_from_slice(&lat_rad.to_le_bytes());
    payload.extend_from_slice(&height_raw.to_le_bytes());
    for raw in speeds_raw {
        payload.extend_from_slice(&raw.to_le_bytes());
    }
    for raw in attitude_raw {
        payload.extend_from_slice(&raw.to_le_bytes());
    }
    payload.extend_from_slice(&[0u8; 6]);
    payload.push(satellites);
    payload.resize(55, 0);
    payload
}

fn battery_payload(percent: u8, current_mah: u16, total_mah: u16, cycles: u32) -> Vec<u8> {
    let mut payload = vec![percent];
    payload.extend_from_slice(&current_mah.to_le_bytes());
    payload.extend_from_slice(&total_mah.to_le_bytes());
    payload.extend_from_slice(&[0u8; 3]);
    payload.extend_from_slice(&cycles.to_le_bytes());
    payload.resize(28, 0);
    payload
}

#[test]
fn test_osd_frame_decodes_telemetry() {
    let payload = osd_payload(0.5, 0.3, 1200, [-35, 12, 7], [52, -10, 903], 14);
    let data = build_log("{\"aircraft\":\"Mini 2\"}", &[frame(255, &payload)]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    let telemetry: Vec<_> = log.telemetry_records().collect();
    assert_eq!(telemetry.len(), 1);
    let t = telemetry[0];
    assert!((t.longitude - 28.64788975654116).abs() < 1e-9);
    assert!((t.latitude - 17.188733853924695).abs() < 1e-9);
    assert_eq!(t.height_m, 120.0);
    assert_eq!(t.x_speed_ms, -3.5);
    assert_eq!(t.y_speed_ms, 1.2);
    assert_eq!(t.z_speed_ms, 0.7);
    assert_eq!(t.pitch_deg, 5.2);
    assert_eq!(t.roll_deg, -1.0);
    assert_eq!(t.yaw_deg, 90.3);
    assert_eq!(t.gps_satellites, 14);

    assert_eq!(log.stats.osd_frames, 1);
    assert_eq!(log.stats.total_frames, 1);
    assert_eq!(log.stats.total_bytes, 57);
    assert_eq!(log.stats.skipped_frames, 0);
    assert_eq!(log.stats.decode_errors, 0);
}

#[test]
fn test_battery_frame_decodes_charge_state() {
    let data = build_log("{}", &[frame(13, &battery_payload(87, 2500, 3500, 12))]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    let batteries: Vec<_> = log.battery_records().collect();
    assert_eq!(batteries.len(), 1);
    let b = batteries[0];
    assert_eq!(b.battery_percent, 87);
    assert_eq!(b.current_capacity_mah, 2500);
    assert_eq!(b.total_capacity_mah, 3500);
    assert_eq!(b.charge_cycles, 12);

    assert_eq!(log.stats.battery_frames, 1);
    assert_eq!(log.stats.total_frames, 1);
}

#[test]
fn test_json_details_are_parsed_into_map() {
    let details = "{\"aircraft\":\"Mini 2\",\"maxHeight\":120}";
    let data = build_log(details, &[]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.header.format_version, FORMAT_VERSION);
    assert!(log.header.raw_details.is_none());
    assert_eq!(
        log.header.details.get("aircraft").and_then(|v| v.as_str()),
        Some("Mini 2")
    );
    assert_eq!(
        log.header.details.get("maxHeight").and_then(|v| v.as_i64()),
        Some(120)
    );
}

#[test]
fn test_non_json_details_fall_back_to_raw_text() {
    let data = build_log("City Park Flight 42", &[]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert!(log.header.details.is_empty());
    assert_eq!(log.header.raw_details.as_deref(), Some("City Park Flight 42"));
}

#[test]
fn test_zero_details_length_still_parses_records() {
    let data = build_log("", &[frame(13, &battery_payload(50, 2000, 4000, 3))]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.header.details_length, 0);
    assert_eq!(log.record_count(), 1);
}

#[test]
fn test_versions_at_gate_boundaries_are_accepted() {
    for version in [1u8, 12u8] {
        let data = build_log_with_version("{}", version, &[]);
        let log = parse_djilog_bytes(&data, false).expect("parse should succeed");
        assert_eq!(log.header.format_version, version);
    }
}

#[test]
fn test_encrypted_and_unknown_versions_are_rejected() {
    for version in [0u8, 13u8, 99u8] {
        let data = build_log_with_version("{}", version, &[]);
        let err = parse_djilog_bytes(&data, false).expect_err("version gate should reject");
        assert!(
            matches!(err, DJIError::UnsupportedVersion(v) if v == version),
            "unexpected error for version {version}: {err}"
        );
        assert!(err.to_string().contains("Unsupported format version"));
    }
}

#[test]
fn test_truncated_prologue_is_reported() {
    let data = vec![0u8; 10];

    let err = parse_djilog_bytes(&data, false).expect_err("short buffer should fail");
    assert!(matches!(
        err,
        DJIError::TruncatedHeader {
            needed: 11,
            available: 10
        }
    ));
}

#[test]
fn test_non_frame_bytes_are_skipped_individually() {
    let mut frames = vec![vec![0x00, 0xEE, 0x30]];
    frames.push(frame(13, &battery_payload(90, 3000, 3600, 5)));
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.record_count(), 1);
    assert_eq!(log.stats.skipped_frames, 3);
    assert_eq!(log.stats.total_frames, 1);
    assert_eq!(log.stats.decode_errors, 0);
}

#[test]
fn test_zero_length_frame_advances_one_byte() {
    let mut frames = vec![vec![13u8, 0u8]];
    frames.push(frame(13, &battery_payload(64, 1500, 2250, 40)));
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    // The zero length counts as a decode error, then the scan resumes at
    // the stale length byte, which is a non-frame byte.
    assert_eq!(log.stats.decode_errors, 1);
    assert_eq!(log.stats.skipped_frames, 1);
    assert_eq!(log.record_count(), 1);
}

#[test]
fn test_overrunning_length_claim_does_not_read_past_area() {
    let mut record_area = vec![0u8; 5];
    record_area.extend_from_slice(&[255, 200]);
    record_area.extend_from_slice(&[0u8; 13]);
    assert_eq!(record_area.len(), 20);
    let data = build_log("{}", &[record_area]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.record_count(), 0);
    assert_eq!(log.stats.decode_errors, 1);
    assert_eq!(log.stats.skipped_frames, 18);
    assert_eq!(log.stats.total_frames, 0);
}

#[test]
fn test_out_of_range_coordinates_count_as_decode_error() {
    // 2.0 rad is about 114.6 degrees latitude, outside the valid range
    let bad = osd_payload(0.3, 2.0, 100, [0, 0, 0], [0, 0, 0], 8);
    let frames = vec![
        frame(255, &bad),
        frame(13, &battery_payload(77, 2200, 3300, 9)),
    ];
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.telemetry_records().count(), 0);
    assert_eq!(log.battery_records().count(), 1);
    assert_eq!(log.stats.decode_errors, 1);
    assert_eq!(log.stats.osd_frames, 0);
    assert_eq!(log.stats.total_frames, 2);
}

#[test]
fn test_nan_coordinates_count_as_decode_error() {
    let bad = osd_payload(f64::NAN, f64::NAN, 100, [0, 0, 0], [0, 0, 0], 8);
    let data = build_log("{}", &[frame(255, &bad)]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.record_count(), 0);
    assert_eq!(log.stats.decode_errors, 1);
}

#[test]
fn test_battery_percent_above_hundred_is_rejected() {
    let frames = vec![
        frame(13, &battery_payload(150, 2000, 3000, 1)),
        frame(255, &osd_payload(0.3, 0.5, 50, [1, 2, 3], [4, 5, 6], 11)),
    ];
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.battery_records().count(), 0);
    assert_eq!(log.telemetry_records().count(), 1);
    assert_eq!(log.stats.decode_errors, 1);
    assert_eq!(log.stats.battery_frames, 0);
    assert_eq!(log.stats.osd_frames, 1);
}

#[test]
fn test_short_osd_payload_is_rejected() {
    let short = vec![0u8; 54];
    let data = build_log("{}", &[frame(255, &short)]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.record_count(), 0);
    assert_eq!(log.stats.decode_errors, 1);
    assert_eq!(log.stats.total_frames, 1);
}

#[test]
fn test_short_battery_payload_is_rejected() {
    let frames = vec![
        frame(13, &[0u8; 10]),
        frame(13, &battery_payload(87, 2500, 3500, 12)),
    ];
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    // The short frame counts as a decode error but still advances by its
    // full declared width, so the following frame decodes cleanly.
    let batteries: Vec<_> = log.battery_records().collect();
    assert_eq!(batteries.len(), 1);
    assert_eq!(batteries[0].battery_percent, 87);
    assert_eq!(log.stats.decode_errors, 1);
    assert_eq!(log.stats.battery_frames, 1);
    assert_eq!(log.stats.total_frames, 2);
    assert_eq!(log.stats.skipped_frames, 0);
}

#[test]
fn test_battery_payload_at_minimum_length_decodes() {
    let full = battery_payload(87, 2500, 3500, 12);
    assert_eq!(full.len(), 28);
    let frames = vec![frame(13, &full[..27]), frame(13, &full)];
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    // 27 bytes misses the minimum by one; 28 carries the whole layout
    let batteries: Vec<_> = log.battery_records().collect();
    assert_eq!(batteries.len(), 1);
    let b = batteries[0];
    assert_eq!(b.battery_percent, 87);
    assert_eq!(b.current_capacity_mah, 2500);
    assert_eq!(b.total_capacity_mah, 3500);
    assert_eq!(b.charge_cycles, 12);
    assert_eq!(log.stats.decode_errors, 1);
    assert_eq!(log.stats.battery_frames, 1);
    assert_eq!(log.stats.total_frames, 2);
}

#[test]
fn test_unhandled_frame_types_are_skipped_whole() {
    // Gimbal frame (type 2) has no decoder; the scan must hop over the
    // full frame, not byte by byte.
    let frames = vec![
        frame(2, &[0xAA; 12]),
        frame(13, &battery_payload(55, 1800, 3600, 21)),
    ];
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.record_count(), 1);
    assert_eq!(log.stats.skipped_frames, 1);
    assert_eq!(log.stats.total_frames, 2);
    assert_eq!(log.stats.decode_errors, 0);
}

#[test]
fn test_gps_records_require_nonzero_position() {
    let frames = vec![
        frame(255, &osd_payload(0.3, 0.0, 10, [0, 0, 0], [0, 0, 0], 4)),
        frame(255, &osd_payload(0.3, 0.5, 20, [0, 0, 0], [0, 0, 0], 9)),
    ];
    let data = build_log("{}", &frames);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.telemetry_records().count(), 2);
    assert_eq!(log.gps_records().count(), 1);
    assert!(log.has_gps_data());
}

#[test]
fn test_parsing_same_bytes_twice_gives_identical_logs() {
    let frames = vec![
        frame(255, &osd_payload(0.3, 0.5, 1200, [-35, 12, 7], [52, -10, 903], 14)),
        frame(13, &battery_payload(87, 2500, 3500, 12)),
        vec![0x00, 0xEE],
    ];
    let data = build_log("{\"aircraft\":\"Mini 2\"}", &frames);

    let first = parse_djilog_bytes(&data, false).expect("parse should succeed");
    let second = parse_djilog_bytes(&data, false).expect("parse should succeed");

    let first_json = serde_json::to_string(&first).expect("log should serialize");
    let second_json = serde_json::to_string(&second).expect("log should serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn test_empty_record_area_yields_empty_log() {
    let data = build_log("{\"aircraft\":\"Air 2S\"}", &[]);

    let log = parse_djilog_bytes(&data, false).expect("parse should succeed");

    assert_eq!(log.record_count(), 0);
    assert!(!log.has_gps_data());
    assert_eq!(log.stats.total_frames, 0);
    assert_eq!(log.stats.total_bytes, 0);
}
