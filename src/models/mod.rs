pub mod page;
pub mod report;

pub use page::*;
pub use report::*;

// Fixed sentences shown once the check completes, matching the page cap
pub const MSG_SORTED: &str = "The first 100 articles are sorted from newest to oldest.";
pub const MSG_NOT_SORTED: &str = "The first 100 articles are NOT sorted from newest to oldest.";
