//! Behavioural tests for status resolution and address correction.

use std::cell::RefCell;

use courier_core::{
    AddressCorrection, DeliveryAddress, DeliveryStatus, Package, PackageId, TimeOfDay, TruckId,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct ViewWorld {
    package: RefCell<Option<Package>>,
    statuses: RefCell<Vec<DeliveryStatus>>,
    streets: RefCell<Vec<String>>,
}

#[fixture]
fn world() -> ViewWorld {
    ViewWorld::default()
}

fn time(raw: &str) -> TimeOfDay {
    raw.parse().unwrap_or_else(|err| panic!("bad time {raw}: {err}"))
}

fn roster_package(id: u32, street: &str) -> Package {
    Package::new(
        PackageId::from(id),
        DeliveryAddress::new(street, "Salt Lake City", "UT", "84103"),
    )
}

#[given("a package loaded at {loaded} and delivered at {delivered}")]
fn delivered_package(world: &ViewWorld, loaded: String, delivered: String) {
    let mut package = roster_package(1, "195 W Oakland Ave");
    package.load_onto(TruckId::from(1));
    package
        .record_delivery(time(&delivered), time(&loaded))
        .unwrap_or_else(|err| panic!("delivery rejected: {err}"));
    world.package.replace(Some(package));
}

#[given("package 9 with its placeholder address")]
fn wrong_address_package(world: &ViewWorld) {
    world
        .package
        .replace(Some(roster_package(9, "300 State St")));
}

#[given("a package that no truck delivered")]
fn unrouted_package(world: &ViewWorld) {
    world
        .package
        .replace(Some(roster_package(2, "2530 S 500 E")));
}

fn record_statuses(world: &ViewWorld, times: &[&str]) {
    let statuses: Vec<DeliveryStatus> = world
        .package
        .borrow()
        .as_ref()
        .map(|package| times.iter().map(|raw| package.status_at(time(raw))).collect())
        .unwrap_or_default();
    world.statuses.replace(statuses);
}

#[when("I check its status at 07:59:00, 08:30:00 and 08:45:00")]
fn check_timeline(world: &ViewWorld) {
    record_statuses(world, &["07:59:00", "08:30:00", "08:45:00"]);
}

#[when("I check its status at 12:00:00")]
fn check_noon(world: &ViewWorld) {
    record_statuses(world, &["12:00:00"]);
}

#[when("I view its address at 10:19:59 and at 10:20:00")]
fn view_addresses(world: &ViewWorld) {
    let rule = AddressCorrection::default();
    let streets: Vec<String> = world
        .package
        .borrow()
        .as_ref()
        .map(|package| {
            ["10:19:59", "10:20:00"]
                .iter()
                .map(|raw| rule.address_at(package, time(raw)).street.clone())
                .collect()
        })
        .unwrap_or_default();
    world.streets.replace(streets);
}

#[then("the statuses read At the hub, En route and Delivered")]
fn timeline_statuses(world: &ViewWorld) {
    let labels: Vec<&str> = world.statuses.borrow().iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["At the hub", "En route", "Delivered"]);
}

#[then("the status reads Unknown")]
fn unknown_status(world: &ViewWorld) {
    assert_eq!(*world.statuses.borrow(), vec![DeliveryStatus::Unknown]);
}

#[then("the first view shows 300 State St")]
fn first_view(world: &ViewWorld) {
    assert_eq!(
        world.streets.borrow().first().map(String::as_str),
        Some("300 State St")
    );
}

#[then("the second view shows 410 S State St.")]
fn second_view(world: &ViewWorld) {
    assert_eq!(
        world.streets.borrow().get(1).map(String::as_str),
        Some("410 S State St.")
    );
}

#[scenario(path = "tests/features/package_views.feature", index = 0)]
fn status_timeline(world: ViewWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_views.feature", index = 1)]
fn correction_boundary(world: ViewWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_views.feature", index = 2)]
fn unrouted_is_unknown(world: ViewWorld) {
    let _ = world;
}
