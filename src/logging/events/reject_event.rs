use serde::{Deserialize, Serialize};
use valuable::Valuable;

use crate::{log_event, logging::LogEvent};

/// A CSV row that did not make it into the catalog.
#[derive(Serialize, Deserialize, Valuable, Clone, Debug)]
pub struct RejectEvent {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub reason: RejectReason,
}

#[derive(Serialize, Deserialize, Valuable, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RejectReason {
    /// Url column missing or empty.
    MissingUrl,

    /// Name missing or equal to the configured placeholder.
    PlaceholderName,

    /// None of the url candidate columns links to a known storefront.
    NoStorefrontUrl,

    /// Neither the markup column nor the url yield a usable name.
    MissingName,
}

impl RejectEvent {
    pub fn log(row: usize, reason: RejectReason) {
        log_event!(LogEvent::Reject(RejectEvent { row, reason }));
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
