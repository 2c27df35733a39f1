//! Report rendering for the query subcommands.

use std::io::Write;

use clap::ValueEnum;
use courier_core::{FleetSummary, PackageSnapshot, RouteReport, TimeOfDay};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Output encoding for non-interactive reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Round to two decimal places, as the combined distance is reported.
pub(crate) fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fleet summary with each truck's deliveries, as written in JSON.
#[derive(Serialize)]
struct TripsReport<'a> {
    #[serde(flatten)]
    summary: &'a FleetSummary,
    routes: &'a [RouteReport],
}

/// Write per-truck and combined distance, run time and delivery order.
pub(crate) fn write_trips(
    writer: &mut dyn Write,
    summary: &FleetSummary,
    routes: &[RouteReport],
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut summary = summary.clone();
    summary.total_distance = round_hundredths(summary.total_distance);
    match format {
        OutputFormat::Json => write_json(
            writer,
            &TripsReport {
                summary: &summary,
                routes,
            },
        ),
        OutputFormat::Text => {
            writeln!(writer, "Complete Trip Information")?;
            for truck in &summary.trucks {
                writeln!(writer)?;
                writeln!(writer, "Truck {} Info:", truck.id)?;
                writeln!(
                    writer,
                    "Total Distance Traveled: {}",
                    round_hundredths(truck.distance)
                )?;
                writeln!(
                    writer,
                    "Total Run Time: {} ({} to {})",
                    TimeOfDay::from_duration(truck.run_time),
                    truck.departure,
                    truck.finished_at
                )?;
                if let Some(route) = routes.iter().find(|route| route.truck == truck.id) {
                    let order: Vec<String> = route
                        .delivery_order()
                        .map(|id| id.to_string())
                        .collect();
                    writeln!(writer, "Delivery Order: {}", order.join(", "))?;
                }
            }
            writeln!(writer)?;
            writeln!(writer, "Combined Trucks Distance: {}", summary.total_distance)?;
            writeln!(
                writer,
                "Combined Delivery Time: {}",
                TimeOfDay::from_duration(summary.total_run_time)
            )?;
            Ok(())
        }
    }
}

/// Write one package view.
pub(crate) fn write_package(
    writer: &mut dyn Write,
    snapshot: &PackageSnapshot,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, snapshot),
        OutputFormat::Text => write_package_text(writer, snapshot),
    }
}

/// Write every package view at `at`.
pub(crate) fn write_packages(
    writer: &mut dyn Write,
    at: TimeOfDay,
    snapshots: &[PackageSnapshot],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, snapshots),
        OutputFormat::Text => {
            writeln!(writer, "Status of all packages at {at}:")?;
            for snapshot in snapshots {
                writeln!(writer)?;
                write_package_text(writer, snapshot)?;
            }
            Ok(())
        }
    }
}

fn write_package_text(writer: &mut dyn Write, snapshot: &PackageSnapshot) -> Result<(), CliError> {
    writeln!(writer, "Package ID: {}", snapshot.id)?;
    writeln!(writer, "Truck Number: {}", or_dash(snapshot.truck))?;
    writeln!(
        writer,
        "Weight: {} | Deadline: {} | Expected Delivery: {}",
        snapshot.weight,
        snapshot.deadline,
        or_dash(snapshot.expected_delivery)
    )?;
    writeln!(
        writer,
        "Current Status: {} | Time Loaded: {}",
        snapshot.status,
        or_dash(snapshot.loaded_at)
    )?;
    writeln!(writer, "Delivery Address: {}", snapshot.address)?;
    Ok(())
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |inner| inner.to_string())
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::Serialize)?;
    writer.write_all(payload.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}
