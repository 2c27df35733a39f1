//! Behavioural tests for stop-to-stop distance lookups.

use std::cell::RefCell;

use courier_core::{
    DistanceError, DistanceProvider, DistanceTable, Stop, StopDistances, StopIndex,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct DistanceWorld {
    table: RefCell<Option<DistanceTable>>,
    provider: RefCell<Option<StopDistances>>,
    lookups: RefCell<Vec<Result<f64, DistanceError>>>,
}

#[fixture]
fn world() -> DistanceWorld {
    DistanceWorld::default()
}

fn recorded(world: &DistanceWorld) -> Vec<Result<f64, DistanceError>> {
    world.lookups.borrow().clone()
}

#[given("a six stop table where only cell 5,2 holds 7.4")]
fn sparse_table(world: &DistanceWorld) {
    let rows = (0..6)
        .map(|row| {
            (0..6)
                .map(|column| match (row, column) {
                    (5, 2) => Some(7.4),
                    (r, c) if r == c => Some(0.0),
                    _ => None,
                })
                .collect()
        })
        .collect();
    world.table.replace(Some(DistanceTable::new(rows)));
}

#[given("stops for the hub and Dalton Ave")]
fn hub_and_dalton(world: &DistanceWorld) {
    let stops = StopIndex::new(vec![
        Stop {
            index: 0,
            name: "Western Governors University".into(),
            address: "4001 South 700 East".into(),
        },
        Stop {
            index: 1,
            name: "International Peace Gardens".into(),
            address: "1060 Dalton Ave S".into(),
        },
    ]);
    let table = DistanceTable::new(vec![vec![Some(0.0)], vec![Some(7.2), Some(0.0)]]);
    world
        .provider
        .replace(Some(StopDistances::new(stops, table)));
}

#[when("I look up the distance from stop {from} to stop {to}")]
fn look_up(world: &DistanceWorld, from: usize, to: usize) {
    let result = world
        .table
        .borrow()
        .as_ref()
        .map_or(Ok(f64::NAN), |table| table.distance(from, to));
    world.lookups.borrow_mut().push(result);
}

#[when("I ask for the distance from the hub to {address}")]
fn ask_from_hub(world: &DistanceWorld, address: String) {
    let address = address.trim_matches('"').to_owned();
    let result = world
        .provider
        .borrow()
        .as_ref()
        .map_or(Ok(f64::NAN), |provider| {
            provider.distance_between("4001 South 700 East", &address)
        });
    world.lookups.borrow_mut().push(result);
}

#[then("both lookups return 7.4")]
fn both_return(world: &DistanceWorld) {
    let lookups = recorded(world);
    assert_eq!(lookups, vec![Ok(7.4), Ok(7.4)]);
}

#[then("the lookup fails with a missing cell")]
fn missing_cell(world: &DistanceWorld) {
    let lookups = recorded(world);
    assert!(matches!(
        lookups.as_slice(),
        [Err(DistanceError::MissingCell { from: 1, to: 3 })]
    ));
}

#[then("the distance is 7.2")]
fn distance_is(world: &DistanceWorld) {
    assert_eq!(recorded(world), vec![Ok(7.2)]);
}

#[scenario(path = "tests/features/distance_lookup.feature", index = 0)]
fn mirrored_cell_fallback(world: DistanceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/distance_lookup.feature", index = 1)]
fn missing_pair(world: DistanceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/distance_lookup.feature", index = 2)]
fn abbreviated_address(world: DistanceWorld) {
    let _ = world;
}
