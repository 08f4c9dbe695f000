use serde::{Deserialize, Serialize};

use super::PageType;

/// Outcome of one ordering check over a listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingReport {
    pub page_type: PageType,
    /// Story rows seen on the page, capped upstream.
    pub sampled: usize,
    /// Rows that produced a usable timestamp.
    pub parsed: usize,
    /// True iff the parsed timestamps run newest to oldest.
    pub ordered: bool,
}

impl OrderingReport {
    pub fn dropped(&self) -> usize {
        self.sampled - self.parsed
    }
}
