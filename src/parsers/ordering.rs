use chrono::{DateTime, Utc};
use tracing::warn;

use crate::models::{OrderingReport, PageType};

use super::parse_timestamp;

/// Drop rows without a usable timestamp, keeping the rest in page order.
pub fn parse_valid_timestamps(samples: &[Option<String>]) -> Vec<DateTime<Utc>> {
    samples
        .iter()
        .flatten()
        .filter_map(|raw| parse_timestamp(raw))
        .collect()
}

/// True iff every timestamp is at or before the one above it on the page.
///
/// Rows with a missing or unparseable timestamp contribute no ordering
/// constraint. Equal adjacent instants are in order; sequences of length 0
/// or 1 are trivially ordered.
pub fn is_non_increasing(samples: &[Option<String>]) -> bool {
    non_increasing(&parse_valid_timestamps(samples))
}

fn non_increasing(dates: &[DateTime<Utc>]) -> bool {
    dates.windows(2).all(|pair| pair[1] <= pair[0])
}

/// Run the ordering check and collect the counts for reporting.
pub fn verify_ordering(page_type: PageType, samples: &[Option<String>]) -> OrderingReport {
    let dates = parse_valid_timestamps(samples);

    if dates.len() < samples.len() {
        warn!(
            "{} of {} story rows had no parseable timestamp",
            samples.len() - dates.len(),
            samples.len()
        );
    }

    OrderingReport {
        page_type,
        sampled: samples.len(),
        parsed: dates.len(),
        ordered: non_increasing(&dates),
    }
}
