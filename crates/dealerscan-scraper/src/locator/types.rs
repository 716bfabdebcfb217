//! Domain types for dealer locator extraction.

use crate::error::LocatorError;

/// A dealer listing extracted from one `<li class="item">` block.
///
/// `name` is always non-empty; the remaining fields are empty strings when
/// the listing does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DealerRecord {
    pub name: String,
    pub address: String,
    pub website: String,
    pub email: String,
}

/// Result of querying the locator around one search point.
///
/// `NoDealers` and `Failed` both contribute zero records to the run; they are
/// kept apart so callers can report failed points separately.
#[derive(Debug)]
pub enum PointOutcome {
    Dealers(Vec<DealerRecord>),
    NoDealers,
    Failed(LocatorError),
}

impl PointOutcome {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, PointOutcome::Failed(_))
    }

    /// Records found at this point; empty for `NoDealers` and `Failed`.
    #[must_use]
    pub fn into_records(self) -> Vec<DealerRecord> {
        match self {
            PointOutcome::Dealers(records) => records,
            PointOutcome::NoDealers | PointOutcome::Failed(_) => Vec::new(),
        }
    }
}
