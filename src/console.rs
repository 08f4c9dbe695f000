use tracing::info;

use crate::models::{OrderingReport, MSG_NOT_SORTED, MSG_SORTED};

/// Pick the sentence for the outcome.
pub fn build_message(report: &OrderingReport) -> &'static str {
    if report.ordered {
        MSG_SORTED
    } else {
        MSG_NOT_SORTED
    }
}

/// Show the outcome to the user. The sentence goes to stdout; the counts go
/// to the log.
pub fn present(report: &OrderingReport) {
    info!(
        "Checked {} story rows ({} parseable timestamps) on the {} listing",
        report.sampled,
        report.parsed,
        report.page_type.key()
    );

    println!("{}", build_message(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageType;
    use pretty_assertions::assert_eq;

    fn report(ordered: bool) -> OrderingReport {
        OrderingReport {
            page_type: PageType::Newest,
            sampled: 100,
            parsed: 100,
            ordered,
        }
    }

    #[test]
    fn sorted_pages_get_the_positive_sentence() {
        assert_eq!(
            build_message(&report(true)),
            "The first 100 articles are sorted from newest to oldest."
        );
    }

    #[test]
    fn unsorted_pages_get_the_negative_sentence() {
        assert_eq!(
            build_message(&report(false)),
            "The first 100 articles are NOT sorted from newest to oldest."
        );
    }
}
