use crate::types::{BatteryRecord, DJIHeader, Record, TelemetryRecord};
use serde::Serialize;

/// Frame statistics
///
/// `total_frames`/`total_bytes` count structurally valid frames (carved
/// with a trustworthy length), including frames whose contents failed to
/// decode. `skipped_frames` counts resynchronization bytes and valid
/// frames with no registered decoder; `decode_errors` counts corrupt
/// length fields and content decode failures.
#[derive(Debug, Default, Serialize)]
pub struct FrameStats {
    pub osd_frames: u32,
    pub battery_frames: u32,
    pub skipped_frames: u64,
    pub decode_errors: u64,
    pub total_frames: u32,
    pub total_bytes: u64,
}

/// Complete DJI log data
#[derive(Debug, Serialize)]
pub struct DJILog {
    pub header: DJIHeader,
    pub records: Vec<Record>,
    pub stats: FrameStats,
}

impl DJILog {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Telemetry records in file order
    pub fn telemetry_records(&self) -> impl Iterator<Item = &TelemetryRecord> {
        self.records.iter().filter_map(|record| match record {
            Record::Telemetry(telemetry) => Some(telemetry),
            _ => None,
        })
    }

    /// Battery records in file order
    pub fn battery_records(&self) -> impl Iterator<Item = &BatteryRecord> {
        self.records.iter().filter_map(|record| match record {
            Record::Battery(battery) => Some(battery),
            _ => None,
        })
    }

    /// Telemetry records with a GPS fix (both coordinates nonzero)
    pub fn gps_records(&self) -> impl Iterator<Item = &TelemetryRecord> {
        self.telemetry_records()
            .filter(|telemetry| telemetry.latitude != 0.0 && telemetry.longitude != 0.0)
    }

    /// Check if this log contains GPS position data
    pub fn has_gps_data(&self) -> bool {
        self.gps_records().next().is_some()
    }
}
