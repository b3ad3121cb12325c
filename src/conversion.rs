//! Data conversion utilities for DJI log parsing
//!
//! Raw frame fields carry fixed scaling factors: coordinates are f64
//! radians, heights/speeds/attitude angles are signed 16-bit tenths.
//! These helpers convert them to the units records carry.

/// Convert a raw coordinate from radians to degrees
pub fn convert_coordinate_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Convert raw height (tenths of a meter) to meters
pub fn convert_height_to_meters(raw_value: i16) -> f64 {
    raw_value as f64 / 10.0
}

/// Convert raw speed (tenths of a m/s) to m/s
pub fn convert_speed_to_ms(raw_value: i16) -> f64 {
    raw_value as f64 / 10.0
}

/// Convert raw attitude angle (tenths of a degree) to degrees
pub fn convert_attitude_to_degrees(raw_value: i16) -> f64 {
    raw_value as f64 / 10.0
}

/// Combined horizontal speed as |x| + |y|
pub fn horizontal_speed_ms(x_speed_ms: f64, y_speed_ms: f64) -> f64 {
    x_speed_ms.abs() + y_speed_ms.abs()
}

/// Check that a converted latitude/longitude pair falls in the valid range
pub fn is_valid_coordinate(latitude_deg: f64, longitude_deg: f64) -> bool {
    (-90.0..=90.0).contains(&latitude_deg) && (-180.0..=180.0).contains(&longitude_deg)
}
