// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search bookkeeping that is not undone on backtrack.
//!
//! The grid and the ledger are restored through the trail; the counters here
//! only ever grow over the life of one search.

pub mod statistics;

pub use statistics::{Counters, Rejection, Statistics};
