//! Comment threads and the recent-comments block on the dashboard.

use crate::{collections, datetime, links, text::non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use takulog_api::response::{Character, Comment, Run, Scenario, TargetType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentItem {
    pub author: String,
    pub when: Option<DateTime<Utc>>,
    pub body: String,
}

/// A thread in server order.
pub fn thread(comments: &[Comment]) -> Vec<CommentItem> {
    comments
        .iter()
        .map(|c| CommentItem {
            author: c.author.clone(),
            when: c.created_at.as_deref().and_then(datetime::parse_start),
            body: c.body.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentItem {
    pub target_label: String,
    pub target_name: String,
    pub href: Option<String>,
    pub author: String,
    pub when: Option<DateTime<Utc>>,
    pub body: String,
}

/// Latest comments across all threads, with the target resolved to a
/// display name: character names, scenario titles, run titles, the raw id
/// when the join fails, the type label when even the id is blank.
pub fn recent(
    comments: &[Comment],
    characters: &[Character],
    scenarios: &[Scenario],
    runs: &[Run],
) -> Vec<RecentItem> {
    let characters_by_id = collections::index_by(characters, |c: &Character| c.id.as_str());
    let scenarios_by_id = collections::index_by(scenarios, |s: &Scenario| s.id.as_str());
    let runs_by_id = collections::index_by(runs, |r: &Run| r.id.as_str());

    comments
        .iter()
        .map(|c| {
            let id = c.target_id.as_str();
            let resolved = match c.target_type {
                TargetType::Character => characters_by_id
                    .get(id)
                    .and_then(|ch| non_blank(ch.name.as_deref())),
                TargetType::Scenario => scenarios_by_id
                    .get(id)
                    .and_then(|s| non_blank(s.title.as_deref())),
                // session comments hang off the run
                TargetType::Session => {
                    runs_by_id.get(id).and_then(|r| non_blank(r.title.as_deref()))
                }
                TargetType::Unknown => None,
            };
            let target_name = resolved
                .or(non_blank(Some(id)))
                .unwrap_or(c.target_type.label_ja())
                .to_string();
            RecentItem {
                target_label: c.target_type.label_ja().to_string(),
                target_name,
                href: links::comment_target(c),
                author: c.author.clone(),
                when: c.created_at.as_deref().and_then(datetime::parse_start),
                body: c.body.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn comment(target_type: TargetType, target_id: &str) -> Comment {
        Comment {
            target_type,
            target_id: target_id.to_string(),
            author: "ann".to_string(),
            body: "よかった".to_string(),
            created_at: Some("2025-08-01T12:00:00Z".to_string()),
        }
    }

    #[test]
    fn thread_keeps_server_order_and_parses_times() {
        let comments = vec![comment(TargetType::Character, "c1"), {
            let mut c = comment(TargetType::Character, "c1");
            c.author = "bob".to_string();
            c.created_at = Some("junk".to_string());
            c
        }];
        let items = thread(&comments);
        assert_eq!(items[0].author, "ann");
        assert!(items[0].when.is_some());
        assert_eq!(items[1].author, "bob");
        assert!(items[1].when.is_none());
    }

    #[test]
    fn recent_resolves_target_names() {
        let runs = vec![Run {
            id: "r1".to_string(),
            title: Some("第1卓".to_string()),
            scenario_id: None,
            gm: None,
            players: Vec::new(),
            status: Default::default(),
            characters: Vec::new(),
            cover: None,
        }];
        let items = recent(
            &[comment(TargetType::Session, "r1"), comment(TargetType::Scenario, "ghost")],
            &[],
            &[],
            &runs,
        );
        assert_eq!(items[0].target_name, "第1卓");
        assert_eq!(items[0].href.as_deref(), Some("/sessions/detail?id=r1"));
        // unresolved joins fall back to the raw id
        assert_eq!(items[1].target_name, "ghost");
    }

    #[test]
    fn blank_target_falls_back_to_the_type_label() {
        let items = recent(&[comment(TargetType::Character, "")], &[], &[], &[]);
        assert_eq!(items[0].target_name, "キャラクター");
    }
}
