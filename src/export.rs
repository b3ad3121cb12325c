//! Export functionality for DJI log data
//!
//! Contains functions for exporting a parsed log to CSV, KML, and JSON
//! files. All exporters share the same output path convention: the input
//! file's stem with a new extension, placed next to the input or in the
//! configured output directory.

use crate::error::{DJIError, Result};
use crate::types::DJILog;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub csv: bool,
    pub kml: bool,
    pub json: bool,
    pub output_dir: Option<String>,
}

/// Compute the output path for an export derived from `input_path`
///
/// The output keeps the input's file stem and takes the given extension.
/// With `output_dir` set the file lands there instead of next to the
/// input; the directory is created if missing.
pub fn compute_export_path(
    input_path: &Path,
    extension: &str,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let base_name = input_path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let output_dir = match options.output_dir.as_deref() {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            if !dir.exists() {
                std::fs::create_dir_all(&dir)?;
            }
            dir
        }
        None => input_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default(),
    };

    Ok(output_dir.join(format!("{}.{}", base_name, extension)))
}

/// Export decoded records to CSV
///
/// The header row is the sorted union of field names over every record
/// (including the `type` discriminator); fields a record does not carry
/// are left blank. Returns the written path, or `None` when the log has
/// no records.
#[cfg(feature = "csv")]
pub fn export_to_csv(
    log: &DJILog,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<Option<PathBuf>> {
    if log.records.is_empty() {
        println!("No records to export");
        return Ok(None);
    }

    let output_path = compute_export_path(input_path, "csv", options)?;

    let mut field_names: Vec<&'static str> = vec!["type"];
    for record in &log.records {
        for (name, _) in record.fields() {
            if !field_names.contains(&name) {
                field_names.push(name);
            }
        }
    }
    field_names.sort_unstable();

    let mut writer = csv::Writer::from_path(&output_path)
        .map_err(|err| DJIError::Export(err.to_string()))?;
    writer
        .write_record(&field_names)
        .map_err(|err| DJIError::Export(err.to_string()))?;

    for record in &log.records {
        let fields = record.fields();
        let row: Vec<String> = field_names
            .iter()
            .map(|name| {
                if *name == "type" {
                    record.record_type().to_string()
                } else {
                    fields
                        .iter()
                        .find(|(field, _)| field == name)
                        .map(|(_, value)| value.clone())
                        .unwrap_or_default()
                }
            })
            .collect();
        writer
            .write_record(&row)
            .map_err(|err| DJIError::Export(err.to_string()))?;
    }
    writer.flush()?;

    println!(
        "Exported {} records to {}",
        log.records.len(),
        output_path.display()
    );
    Ok(Some(output_path))
}

/// Escape the XML metacharacters a file name may carry
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Export the flight path to KML
///
/// Produces a single LineString placemark tracing every telemetry record
/// in document order, longitude first as KML requires. Returns `None`
/// without writing a file when the log has no telemetry records.
pub fn export_to_kml(
    log: &DJILog,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<Option<PathBuf>> {
    let point_count = log.telemetry_records().count();
    if point_count == 0 {
        println!("No GPS records to export");
        return Ok(None);
    }

    let output_path = compute_export_path(input_path, "kml", options)?;
    let document_name = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let mut kml_file = File::create(&output_path)?;
    writeln!(kml_file, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(kml_file, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
    writeln!(kml_file, "  <Document>")?;
    writeln!(kml_file, "    <name>{}</name>", xml_escape(document_name))?;
    writeln!(kml_file, "    <Placemark>")?;
    writeln!(kml_file, "      <name>Flight Path</name>")?;
    writeln!(kml_file, "      <LineString>")?;
    writeln!(kml_file, "        <coordinates>")?;
    for telemetry in log.telemetry_records() {
        writeln!(
            kml_file,
            "          {:.7},{:.7},{:.2}",
            telemetry.longitude, telemetry.latitude, telemetry.height_m
        )?;
    }
    writeln!(kml_file, "        </coordinates>")?;
    writeln!(kml_file, "      </LineString>")?;
    writeln!(kml_file, "    </Placemark>")?;
    writeln!(kml_file, "  </Document>")?;
    writeln!(kml_file, "</kml>")?;

    println!(
        "Exported GPS track with {} points to {}",
        point_count,
        output_path.display()
    );
    Ok(Some(output_path))
}

/// Export the full log document as pretty-printed JSON
///
/// The document is `{"version", "details", "records"}`; when the header
/// kept raw details text instead of parsed JSON, `details` becomes
/// `{"raw": <text>}`.
pub fn export_to_json(log: &DJILog, input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let output_path = compute_export_path(input_path, "json", options)?;

    let details = match &log.header.raw_details {
        Some(raw) => serde_json::json!({ "raw": raw }),
        None => serde_json::Value::Object(log.header.details.clone()),
    };

    let document = serde_json::json!({
        "version": log.header.format_version,
        "details": details,
        "records": log.records,
    });

    let json_text = serde_json::to_string_pretty(&document)
        .map_err(|err| DJIError::Export(err.to_string()))?;
    std::fs::write(&output_path, json_text)?;

    println!("Exported full data to {}", output_path.display());
    Ok(output_path)
}
