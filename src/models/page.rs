use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    Newest,
    Front,
    NewComments,
    Ask,
    Show,
    Jobs,
}

impl PageType {
    pub const ALL: [PageType; 6] = [
        PageType::Newest,
        PageType::Front,
        PageType::NewComments,
        PageType::Ask,
        PageType::Show,
        PageType::Jobs,
    ];

    /// The path segment under news.ycombinator.com, also the key users type.
    pub fn key(&self) -> &'static str {
        match self {
            PageType::Newest => "newest",
            PageType::Front => "front",
            PageType::NewComments => "newcomments",
            PageType::Ask => "ask",
            PageType::Show => "show",
            PageType::Jobs => "jobs",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "newest" => Some(PageType::Newest),
            "front" => Some(PageType::Front),
            "newcomments" => Some(PageType::NewComments),
            "ask" => Some(PageType::Ask),
            "show" => Some(PageType::Show),
            "jobs" => Some(PageType::Jobs),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PageType::Newest => "Newest",
            PageType::Front => "Front Page",
            PageType::NewComments => "New Comments",
            PageType::Ask => "Ask HN",
            PageType::Show => "Show HN",
            PageType::Jobs => "Jobs",
        }
    }

    pub fn allowed_keys() -> String {
        PageType::ALL
            .iter()
            .map(|page_type| page_type.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Error)]
#[error("Invalid page type {candidate:?}. Choose one of: {allowed}")]
pub struct InvalidPageType {
    pub candidate: String,
    pub allowed: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_round_trip() {
        for page_type in PageType::ALL {
            assert_eq!(PageType::from_key(page_type.key()), Some(page_type));
        }
    }

    #[test]
    fn unknown_keys_have_no_page_type() {
        assert_eq!(PageType::from_key("frontpage"), None);
        assert_eq!(PageType::from_key("NEWEST"), None);
        assert_eq!(PageType::from_key(""), None);
    }

    #[test]
    fn allowed_keys_lists_every_page_type() {
        assert_eq!(
            PageType::allowed_keys(),
            "newest, front, newcomments, ask, show, jobs"
        );
    }

    #[test]
    fn invalid_page_type_relists_the_allowed_set() {
        let err = InvalidPageType {
            candidate: "frontpage".to_string(),
            allowed: PageType::allowed_keys(),
        };

        let message = err.to_string();
        assert!(message.contains("frontpage"));
        assert!(message.contains("newest, front, newcomments, ask, show, jobs"));
    }
}
