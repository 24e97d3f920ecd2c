//! Per-view aggregation: each module joins the fetched resources for one
//! page into a plain view model ready for rendering.

pub mod board;
pub mod character;
pub mod characters;
pub mod comments;
pub mod home;
pub mod scenario;
pub mod scenarios;
pub mod session;
pub mod sessions;
pub mod timetable;

use serde::{Deserialize, Serialize};

/// A labelled link to a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

/// Required-field check shared by the comment and bulletin forms.
/// Returns the trimmed values, `None` when either is missing.
pub fn validate_author_body(author: &str, body: &str) -> Option<(String, String)> {
    let author = author.trim();
    let body = body.trim();
    if author.is_empty() || body.is_empty() {
        return None;
    }
    Some((author.to_string(), body.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_missing_required_fields() {
        assert_eq!(validate_author_body("", "hello"), None);
        assert_eq!(validate_author_body("   ", "hello"), None);
        assert_eq!(validate_author_body("ann", "  "), None);
    }

    #[test]
    fn trims_accepted_values() {
        assert_eq!(
            validate_author_body(" ann ", " hi "),
            Some(("ann".to_string(), "hi".to_string()))
        );
    }
}
