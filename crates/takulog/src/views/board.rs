//! Bulletin board posts.

use crate::datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use takulog_api::response::Post;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostItem {
    pub author: String,
    pub when: Option<DateTime<Utc>>,
    pub body: String,
}

/// Posts newest first; posts without a usable timestamp go last.
pub fn posts(items: &[Post]) -> Vec<PostItem> {
    let mut items: Vec<PostItem> = items
        .iter()
        .map(|p| PostItem {
            author: p.author.clone(),
            when: p.created_at.as_deref().and_then(datetime::parse_start),
            body: p.body.clone(),
        })
        .collect();
    items.sort_by(|a, b| match (a.when, b.when) {
        (Some(l), Some(r)) => r.cmp(&l),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    items
}
