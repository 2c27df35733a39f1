//! Shared test harness modules for the courier CLI.

use super::*;

mod helpers;
mod query_unit;
