//! Run detail: table info, participants and the full session history.

use crate::{
    assets, collections, links, schedule,
    text::non_blank,
    views::LinkItem,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use takulog_api::response::{Character, Run, RunStatus, Scenario, Session, SessionStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub start: DateTime<Utc>,
    pub title: Option<String>,
    pub status: SessionStatus,
    pub replay_url: Option<String>,
    pub stream_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetailView {
    pub title: String,
    pub status: RunStatus,
    pub cover: String,
    pub scenario: Option<LinkItem>,
    pub gm: Option<String>,
    pub players: Vec<String>,
    pub next_start: Option<DateTime<Utc>>,
    pub last_done: Option<DateTime<Utc>>,
    pub characters: Vec<LinkItem>,
    pub history: Vec<HistoryItem>,
}

/// `None` when no run matches the id.
pub fn build(
    run_id: &str,
    runs: &[Run],
    scenarios: &[Scenario],
    sessions: &[Session],
    characters: &[Character],
    now: DateTime<Utc>,
) -> Option<SessionDetailView> {
    let run = runs.iter().find(|r| r.id == run_id)?;
    let scenario = run
        .scenario_id
        .as_deref()
        .and_then(|sid| scenarios.iter().find(|s| s.id == sid));
    let characters_by_id = collections::index_by(characters, |c: &Character| c.id.as_str());

    let history_items = schedule::run_history(sessions, run_id);
    let next_start = schedule::next_by_run(sessions, now)
        .remove(run_id)
        .map(|d| d.start);
    let last_done = schedule::last_done(&history_items).map(|d| d.start);

    let character_links = run
        .characters
        .iter()
        .filter_map(|cid| {
            let character = characters_by_id.get(cid.as_str())?;
            Some(LinkItem {
                label: non_blank(character.name.as_deref())
                    .unwrap_or(&character.id)
                    .to_string(),
                href: links::character_detail(cid),
            })
        })
        .collect();

    let history = history_items
        .into_iter()
        .map(|d| HistoryItem {
            start: d.start,
            title: non_blank(d.session.title.as_deref()).map(str::to_string),
            status: d.session.status,
            replay_url: non_blank(d.session.replay_url.as_deref()).map(str::to_string),
            stream_url: non_blank(d.session.stream_url.as_deref()).map(str::to_string),
        })
        .collect();

    Some(SessionDetailView {
        title: non_blank(run.title.as_deref()).unwrap_or(&run.id).to_string(),
        status: run.status,
        cover: assets::run_cover(run, scenario),
        scenario: scenario.map(|s| LinkItem {
            label: non_blank(s.title.as_deref()).unwrap_or(&s.id).to_string(),
            href: links::scenario_detail(&s.id),
        }),
        gm: non_blank(run.gm.as_deref()).map(str::to_string),
        players: run.players.clone(),
        next_start,
        last_done,
        characters: character_links,
        history,
    })
}
