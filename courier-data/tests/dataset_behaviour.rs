//! Behavioural tests for loading a complete dataset directory.

use std::cell::RefCell;

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::{PackageId, Simulation, TimeOfDay, test_support::ManifestOrderRouter};
use courier_data::{
    DISTANCES_FILE, DataError, Dataset, DatasetPaths, FLEET_FILE, PACKAGES_FILE, STOPS_FILE,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

const STOPS: &str = "\
0,\"Western Governors University\",\"4001 South 700 East\"
1,\"International Peace Gardens\",\"1060 Dalton Ave S\"
2,\"Sugar House Park\",\"1330 2100 S\"
";
const DISTANCES: &str = "0.0\n7.2,0.0\n3.8,7.1,0.0\n";
const ROSTER: &str = "\
4,1060 Dalton Ave S,Salt Lake City,84104,UT,EOD,4,
7,1330 2100 S,Salt Lake City,84106,UT,EOD,8,
";
const FLEET: &str = r#"{"trucks": [{"id": 1, "departure": "08:00:00",
    "hub": "4001 South 700 East", "packages": [4, 7]}]}"#;

#[derive(Default)]
struct DatasetWorld {
    scratch: RefCell<Option<TempDir>>,
    dir: RefCell<Option<Utf8PathBuf>>,
    dataset: RefCell<Option<Result<Dataset, DataError>>>,
    counts: RefCell<Option<(usize, usize, usize)>>,
    simulation: RefCell<Option<Simulation>>,
    missing: RefCell<Vec<String>>,
}

#[fixture]
fn world() -> DatasetWorld {
    DatasetWorld::default()
}

fn paths(world: &DatasetWorld) -> DatasetPaths {
    let dir = world.dir.borrow().clone().expect("dataset directory chosen");
    DatasetPaths::in_dir(&dir)
}

fn write_dataset(world: &DatasetWorld, files: &[(&str, &str)]) {
    let scratch = tempfile::tempdir().expect("tempdir");
    let root = Utf8Path::from_path(scratch.path())
        .expect("utf8 tempdir")
        .to_path_buf();
    for (name, contents) in files {
        std::fs::write(root.join(name), contents).expect("write fixture file");
    }
    world.dir.replace(Some(root));
    world.scratch.replace(Some(scratch));
}

fn load_error(world: &DatasetWorld) -> DataError {
    world
        .dataset
        .take()
        .expect("dataset load attempted")
        .expect_err("load should fail")
}

#[given("the reference dataset directory")]
fn reference_dataset(world: &DatasetWorld) {
    let dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
    world.dir.replace(Some(dir));
}

#[given("a dataset directory whose roster repeats package 4 on row 2")]
fn duplicate_roster(world: &DatasetWorld) {
    let roster = "\
4,1060 Dalton Ave S,Salt Lake City,84104,UT,EOD,4,
4,1330 2100 S,Salt Lake City,84106,UT,EOD,8,
";
    write_dataset(
        world,
        &[
            (PACKAGES_FILE, roster),
            (STOPS_FILE, STOPS),
            (DISTANCES_FILE, DISTANCES),
            (FLEET_FILE, FLEET),
        ],
    );
}

#[given("a dataset directory whose distance table holds -1.5 in row 2 column 1")]
fn negative_distance(world: &DatasetWorld) {
    write_dataset(
        world,
        &[
            (PACKAGES_FILE, ROSTER),
            (STOPS_FILE, STOPS),
            (DISTANCES_FILE, "0.0\n-1.5,0.0\n3.8,7.1,0.0\n"),
            (FLEET_FILE, FLEET),
        ],
    );
}

#[given("a dataset directory without a fleet manifest")]
fn no_fleet(world: &DatasetWorld) {
    write_dataset(
        world,
        &[
            (PACKAGES_FILE, ROSTER),
            (STOPS_FILE, STOPS),
            (DISTANCES_FILE, DISTANCES),
        ],
    );
}

#[when("I load the dataset")]
fn load(world: &DatasetWorld) {
    let result = Dataset::load(&paths(world));
    if let Ok(dataset) = &result {
        world.counts.replace(Some((
            dataset.packages.len(),
            dataset.stops.stops().len(),
            dataset.fleet.len(),
        )));
    }
    world.dataset.replace(Some(result));
}

#[when("I simulate the day in manifest order")]
fn simulate(world: &DatasetWorld) {
    let dataset = world
        .dataset
        .take()
        .expect("dataset load attempted")
        .expect("reference dataset loads");
    let (builder, distances) = dataset.into_parts();
    let simulation = builder
        .build(&ManifestOrderRouter, &distances)
        .expect("reference dataset simulates");
    world.simulation.replace(Some(simulation));
}

#[when("I check for missing files")]
fn check_missing(world: &DatasetWorld) {
    let paths = paths(world);
    let missing = paths
        .missing_files()
        .into_iter()
        .filter_map(Utf8Path::file_name)
        .map(str::to_owned)
        .collect();
    world.missing.replace(missing);
}

#[then("40 packages, 27 stops and 3 trucks are loaded")]
fn reference_counts(world: &DatasetWorld) {
    assert_eq!(*world.counts.borrow(), Some((40, 27, 3)));
}

#[then("package {id} shows {street} at {at}")]
fn shows_street(world: &DatasetWorld, id: u32, street: String, at: TimeOfDay) {
    let simulation = world.simulation.borrow();
    let simulation = simulation.as_ref().expect("simulation built");
    let snapshot = simulation
        .package_at(PackageId::from(id), at)
        .expect("package exists");
    assert_eq!(snapshot.address.street, street.trim_matches('"'));
}

#[then("loading fails with a duplicate package on row {row}")]
fn duplicate_rejected(world: &DatasetWorld, row: usize) {
    let err = load_error(world);
    assert!(
        matches!(&err, DataError::DuplicatePackage { row: r, id, .. } if *r == row && *id == PackageId::from(4)),
        "unexpected error: {err}"
    );
}

#[then("loading fails with an invalid distance at row {row} column {column}")]
fn invalid_distance(world: &DatasetWorld, row: usize, column: usize) {
    let err = load_error(world);
    assert!(
        matches!(&err, DataError::InvalidDistance { row: r, column: c, .. } if *r == row && *c == column),
        "unexpected error: {err}"
    );
}

#[then("only {name} is reported missing")]
fn only_missing(world: &DatasetWorld, name: String) {
    assert_eq!(*world.missing.borrow(), vec![name.trim_matches('"').to_owned()]);
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 0)]
fn reference_dataset_simulates(world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 1)]
fn duplicate_package_rejected(world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 2)]
fn negative_distance_located(world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 3)]
fn missing_fleet_flagged(world: DatasetWorld) {
    let _ = world;
}
