use crate::{logging::RejectReason, Status};

use super::counters::*;

pub struct LoaderCounters;

impl LoaderCounters {
    pub fn catalog_loaded(path: &str, games: usize) {
        counter(
            "catalog_loaded",
            &format!("Loaded {games} games from '{path}'"),
        )
    }

    pub fn catalog_load_fail(path: &str, status: &Status) {
        error_counter(
            "catalog_load_fail",
            &format!("Failed to load games from '{path}'"),
            status,
        )
    }

    pub fn row_rejected(row: usize, reason: RejectReason) {
        counter(
            "row_rejected",
            &format!("Skipped csv row {row}: {reason}"),
        )
    }
}
