//! Usage aggregation types shared by the scanner and the renderers.

use serde::{Deserialize, Serialize};

/// Match count for one declared variable within one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageOccurrence {
    /// Path of the scanned file, relative to the scan root.
    pub file: String,
    /// Number of pattern matches in that file.
    pub count: usize,
}

/// All usage recorded for one declared variable.
///
/// Occurrences are kept in file discovery order. `total` is always the sum
/// of the per-occurrence counts; a variable that is never referenced has
/// `total == 0` and no occurrences, and must be surfaced as unused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageAggregate {
    pub total: usize,
    pub occurrences: Vec<UsageOccurrence>,
}

impl UsageAggregate {
    /// Record `count` matches in `file`. Zero counts are not recorded, so
    /// an occurrence always carries at least one match.
    pub fn record(&mut self, file: impl Into<String>, count: usize) {
        if count == 0 {
            return;
        }
        self.total += count;
        self.occurrences.push(UsageOccurrence {
            file: file.into(),
            count,
        });
    }

    pub fn is_unused(&self) -> bool {
        self.total == 0
    }
}
