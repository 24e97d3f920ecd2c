//! Free-text filtering for the character list.

/// Case-insensitive substring match over a fixed field set.
/// An empty or whitespace-only query matches everything.
pub fn matches(fields: &[Option<&str>], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_query_matches() {
        assert!(matches(&[Some("a")], ""));
        assert!(matches(&[None], "   "));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(matches(&[Some("CoC6"), None], "coc"));
        assert!(matches(&[Some("アキラ"), Some("KP")], "kp"));
    }

    #[test]
    fn no_field_matches() {
        assert!(!matches(&[Some("akira"), Some("探偵"), None], "gm"));
    }
}
