use serde::Serialize;

/// Position, attitude and velocity sampled from one OSD frame
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryRecord {
    /// Latitude in degrees, converted from radians
    pub latitude: f64,
    /// Longitude in degrees, converted from radians
    pub longitude: f64,
    /// Height above the start point in meters
    pub height_m: f64,
    pub x_speed_ms: f64,
    pub y_speed_ms: f64,
    pub z_speed_ms: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub yaw_deg: f64,
    pub gps_satellites: u8,
}

/// Battery state sampled from one Smart Battery frame
#[derive(Debug, Clone, Serialize)]
pub struct BatteryRecord {
    /// Charge level, 0-100
    pub battery_percent: u8,
    pub current_capacity_mah: u16,
    pub total_capacity_mah: u16,
    pub charge_cycles: u32,
}

/// One decoded record, ordered by file position
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Record {
    #[serde(rename = "OSD")]
    Telemetry(TelemetryRecord),
    #[serde(rename = "Battery")]
    Battery(BatteryRecord),
}

impl Record {
    /// Display name of the record variant (the CSV `type` column)
    pub fn record_type(&self) -> &'static str {
        match self {
            Record::Telemetry(_) => "OSD",
            Record::Battery(_) => "Battery",
        }
    }

    /// Field names with display-formatted values, for tabular export
    ///
    /// Coordinates are formatted to 7 decimal places, heights and speeds
    /// to 2, attitude angles to 1.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Record::Telemetry(telemetry) => vec![
                ("latitude", format!("{:.7}", telemetry.latitude)),
                ("longitude", format!("{:.7}", telemetry.longitude)),
                ("height_m", format!("{:.2}", telemetry.height_m)),
                ("x_speed_ms", format!("{:.2}", telemetry.x_speed_ms)),
                ("y_speed_ms", format!("{:.2}", telemetry.y_speed_ms)),
                ("z_speed_ms", format!("{:.2}", telemetry.z_speed_ms)),
                ("pitch_deg", format!("{:.1}", telemetry.pitch_deg)),
                ("roll_deg", format!("{:.1}", telemetry.roll_deg)),
                ("yaw_deg", format!("{:.1}", telemetry.yaw_deg)),
                ("gps_satellites", telemetry.gps_satellites.to_string()),
            ],
            Record::Battery(battery) => vec![
                ("battery_percent", battery.battery_percent.to_string()),
                (
                    "current_capacity_mah",
                    battery.current_capacity_mah.to_string(),
                ),
                (
                    "total_capacity_mah",
                    battery.total_capacity_mah.to_string(),
                ),
                ("charge_cycles", battery.charge_cycles.to_string()),
            ],
        }
    }
}
