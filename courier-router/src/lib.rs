//! Greedy dispatch for the courier engine.
//!
//! This crate provides [`NearestNeighbourRouter`], the default implementation
//! of the [`Router`](courier_core::Router) trait. Each truck repeatedly drives
//! to the closest undelivered package on its manifest until none remain, which
//! costs O(k²) distance lookups for k packages.

#![forbid(unsafe_code)]

mod nearest;

pub use nearest::{NearestNeighbourConfig, NearestNeighbourRouter, TieBreak};
