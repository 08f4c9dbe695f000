use std::io::{self, Write};

use anyhow::Result;

use crate::models::{InvalidPageType, PageType};

/// Validate a candidate against the allowed set. Matching is exact.
pub fn select_page_type(candidate: &str) -> Result<PageType, InvalidPageType> {
    PageType::from_key(candidate).ok_or_else(|| InvalidPageType {
        candidate: candidate.to_string(),
        allowed: PageType::allowed_keys(),
    })
}

/// Ask the user which listing to check. Reads exactly one line; an invalid
/// answer aborts the run with the allowed set re-listed.
pub fn choose_page_type() -> Result<PageType> {
    print!(
        "Choose a Hacker News page type ({}): ",
        PageType::allowed_keys()
    );
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(select_page_type(line.trim())?)
}
