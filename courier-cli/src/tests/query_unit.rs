//! Report rendering tests.

use std::time::Duration;

use super::helpers::{capture, reference_simulation};
use super::*;
use crate::query::round_hundredths;
use courier_core::{
    DeliveredStop, DeliveryAddress, DeliveryStatus, FleetSummary, PackageSnapshot, RouteReport,
    TruckId, TruckSummary,
};
use rstest::{fixture, rstest};

#[fixture]
fn summary() -> FleetSummary {
    let truck = |id: u32, distance: f64, departure: TimeOfDay, minutes: u64| TruckSummary {
        id: TruckId::from(id),
        distance,
        departure,
        finished_at: departure.advance(Duration::from_secs(minutes * 60)),
        run_time: Duration::from_secs(minutes * 60),
    };
    FleetSummary {
        trucks: vec![
            truck(1, 36.1, TimeOfDay::from_hms(8, 0, 0), 120),
            truck(2, 40.25, TimeOfDay::from_hms(9, 10, 0), 134),
        ],
        total_distance: 76.349_999_999,
        total_run_time: Duration::from_secs(254 * 60),
    }
}

#[fixture]
fn routes() -> Vec<RouteReport> {
    let stop = |package: u32, street: &str, distance: f64, delivered_at: TimeOfDay| DeliveredStop {
        package: PackageId::from(package),
        address: street.to_owned(),
        distance,
        delivered_at,
    };
    vec![RouteReport {
        truck: TruckId::from(2),
        stops: vec![
            stop(11, "2600 Taylorsville Blvd", 0.6, TimeOfDay::from_hms(9, 12, 0)),
            stop(1, "195 W Oakland Ave", 1.1, TimeOfDay::from_hms(9, 15, 40)),
        ],
    }]
}

#[fixture]
fn unrouted() -> PackageSnapshot {
    PackageSnapshot {
        id: PackageId::from(41),
        at: TimeOfDay::from_hms(9, 0, 0),
        truck: None,
        address: DeliveryAddress::new("2530 S 500 E", "Salt Lake City", "UT", "84106"),
        deadline: "EOD".into(),
        weight: "5".into(),
        notes: String::new(),
        status: DeliveryStatus::Unknown,
        loaded_at: None,
        expected_delivery: None,
    }
}

#[rstest]
#[case(76.349_999_999, 76.35)]
#[case(107.3, 107.3)]
#[case(0.004, 0.0)]
fn rounds_to_hundredths(#[case] value: f64, #[case] expected: f64) {
    assert!((round_hundredths(value) - expected).abs() < 1e-9);
}

#[rstest]
fn trips_text_lists_each_truck_and_the_totals(summary: FleetSummary, routes: Vec<RouteReport>) {
    let text = capture(|w| query::write_trips(w, &summary, &routes, OutputFormat::Text));
    assert!(text.contains("Truck 1 Info:"));
    assert!(text.contains("Total Distance Traveled: 40.25"));
    assert!(text.contains("Total Run Time: 02:14:00 (09:10:00 to 11:24:00)"));
    assert!(text.contains("Combined Trucks Distance: 76.35"));
    assert!(text.contains("Combined Delivery Time: 04:14:00"));
    assert!(text.contains("Delivery Order: 11, 1"));
    assert_eq!(text.matches("Delivery Order:").count(), 1);
}

#[rstest]
fn trips_json_reports_rounded_totals(summary: FleetSummary, routes: Vec<RouteReport>) {
    let json = capture(|w| query::write_trips(w, &summary, &routes, OutputFormat::Json));
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["total_distance"], serde_json::json!(76.35));
    assert_eq!(value["total_run_time"], "04:14:00");
    assert_eq!(value["trucks"][1]["departure"], "09:10:00");
    assert_eq!(value["routes"][0]["truck"], 2);
    assert_eq!(value["routes"][0]["stops"][1]["delivered_at"], "09:15:40");
}

#[rstest]
fn unrouted_packages_render_dashes(unrouted: PackageSnapshot) {
    let text = capture(|w| query::write_package(w, &unrouted, OutputFormat::Text));
    assert!(text.contains("Truck Number: -"));
    assert!(text.contains("Expected Delivery: -"));
    assert!(text.contains("Current Status: Unknown | Time Loaded: -"));
    assert!(text.contains("Delivery Address: 2530 S 500 E, Salt Lake City, UT 84106"));
}

#[rstest]
fn package_json_uses_snake_case_status(unrouted: PackageSnapshot) {
    let json = capture(|w| query::write_package(w, &unrouted, OutputFormat::Json));
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["status"], "unknown");
    assert_eq!(value["id"], 41);
    assert!(value["truck"].is_null());
}

#[rstest]
#[case(TimeOfDay::from_hms(10, 19, 59), "300 State St")]
#[case(TimeOfDay::from_hms(10, 20, 0), "410 S State St.")]
fn package_nine_address_follows_the_correction(#[case] at: TimeOfDay, #[case] street: &str) {
    let simulation = reference_simulation();
    let text = capture(|w| run_package(&simulation, 9, at, w, OutputFormat::Text));
    assert!(
        text.contains(&format!("Delivery Address: {street},")),
        "unexpected report: {text}"
    );
}

#[rstest]
fn packages_report_covers_the_whole_roster() {
    let simulation = reference_simulation();
    let at = TimeOfDay::from_hms(9, 0, 0);
    let json = capture(|w| {
        query::write_packages(w, at, &simulation.packages_at(at), OutputFormat::Json)
    });
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let entries = value.as_array().expect("array of packages");
    assert_eq!(entries.len(), 40);
    let nine = entries
        .iter()
        .find(|entry| entry["id"] == 9)
        .expect("package 9 listed");
    assert_eq!(nine["status"], "at_hub");
}
