//! Scenario detail: summary plus its runs split into ongoing and finished.

use crate::{
    assets, collections, links, schedule,
    text::non_blank,
    views::LinkItem,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use takulog_api::response::{Character, Run, RunStatus, Scenario, Session};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunCard {
    pub id: String,
    pub title: String,
    pub status: RunStatus,
    pub gm: Option<String>,
    pub players: Vec<String>,
    pub next_start: Option<DateTime<Utc>>,
    pub last_start: Option<DateTime<Utc>>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDetailView {
    pub title: String,
    pub system: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub cover: String,
    pub active: Vec<RunCard>,
    pub done: Vec<RunCard>,
    pub characters: Vec<LinkItem>,
}

/// Nearest upcoming date first; runs with nothing scheduled go last.
fn run_card_order(a: &RunCard, b: &RunCard) -> Ordering {
    match (a.next_start, b.next_start) {
        (Some(l), Some(r)) => l.cmp(&r).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

/// `None` when no scenario matches the id.
pub fn build(
    id: &str,
    scenarios: &[Scenario],
    runs: &[Run],
    sessions: &[Session],
    character_ids: &[String],
    characters: &[Character],
    now: DateTime<Utc>,
) -> Option<ScenarioDetailView> {
    let scenario = scenarios.iter().find(|s| s.id == id)?;
    let next_by_run = schedule::next_by_run(sessions, now);
    let last_by_run = schedule::last_by_run(sessions, now);
    let characters_by_id = collections::index_by(characters, |c: &Character| c.id.as_str());

    let card = |run: &Run| RunCard {
        id: run.id.clone(),
        title: non_blank(run.title.as_deref()).unwrap_or(&run.id).to_string(),
        status: run.status,
        gm: non_blank(run.gm.as_deref()).map(str::to_string),
        players: run.players.clone(),
        next_start: next_by_run.get(&run.id).map(|d| d.start),
        last_start: last_by_run.get(&run.id).map(|d| d.start),
        href: links::session_detail(&run.id),
    };

    let related: Vec<&Run> = runs
        .iter()
        .filter(|r| r.scenario_id.as_deref() == Some(id))
        .collect();
    let mut active: Vec<RunCard> = related
        .iter()
        .filter(|r| r.status.is_active())
        .map(|r| card(r))
        .collect();
    let mut done: Vec<RunCard> = related
        .iter()
        .filter(|r| !r.status.is_active())
        .map(|r| card(r))
        .collect();
    active.sort_by(run_card_order);
    done.sort_by(run_card_order);

    let character_links = character_ids
        .iter()
        .map(|cid| LinkItem {
            label: characters_by_id
                .get(cid.as_str())
                .and_then(|c| non_blank(c.name.as_deref()))
                .unwrap_or(cid)
                .to_string(),
            href: links::character_detail(cid),
        })
        .collect();

    Some(ScenarioDetailView {
        title: non_blank(scenario.title.as_deref())
            .unwrap_or(&scenario.id)
            .to_string(),
        system: non_blank(scenario.system.as_deref()).map(str::to_string),
        description: non_blank(scenario.description.as_deref()).map(str::to_string),
        notes: non_blank(scenario.notes.as_deref()).map(str::to_string),
        tags: scenario.tags.clone(),
        cover: assets::scenario_cover(scenario),
        active,
        done,
        characters: character_links,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datetime::parse_start;
    use takulog_api::response::{RunStatus, SessionStatus};

    fn now() -> DateTime<Utc> {
        parse_start("2025-08-05T00:00:00Z").unwrap()
    }

    fn scenario(id: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            title: Some("沈黙の図書館".to_string()),
            system: Some("CoC7".to_string()),
            description: Some("蔵書に潜むもの".to_string()),
            notes: None,
            tags: vec!["クローズド".to_string()],
            cover: None,
        }
    }

    fn run(id: &str, scenario_id: &str, status: RunStatus) -> Run {
        Run {
            id: id.to_string(),
            title: Some(format!("{id}卓")),
            scenario_id: Some(scenario_id.to_string()),
            gm: Some("村田".to_string()),
            players: vec!["A".to_string()],
            status,
            characters: Vec::new(),
            cover: None,
        }
    }

    fn scheduled(run_id: &str, start: &str) -> Session {
        Session {
            id: format!("{run_id}-{start}"),
            run_id: run_id.to_string(),
            title: None,
            start: Some(start.to_string()),
            status: SessionStatus::Scheduled,
            duration_hours: None,
            notes: None,
            replay_url: None,
            stream_url: None,
        }
    }

    #[test]
    fn unknown_scenario_is_none() {
        assert!(build("nope", &[scenario("sc1")], &[], &[], &[], &[], now()).is_none());
    }

    #[test]
    fn partitions_and_sorts_runs_by_next_date() {
        let runs = vec![
            run("r1", "sc1", RunStatus::Active),
            run("r2", "sc1", RunStatus::Active),
            run("r3", "sc1", RunStatus::Active),
            run("r4", "sc1", RunStatus::Done),
            run("r5", "other", RunStatus::Active),
        ];
        let sessions = vec![
            scheduled("r1", "2999-06-01T00:00:00Z"),
            scheduled("r2", "2999-01-01T00:00:00Z"),
            {
                let mut done = scheduled("r4", "2024-05-01T00:00:00Z");
                done.status = SessionStatus::Done;
                done
            },
        ];
        let view = build("sc1", &[scenario("sc1")], &runs, &sessions, &[], &[], now()).unwrap();
        let active: Vec<&str> = view.active.iter().map(|r| r.id.as_str()).collect();
        // r3 has nothing scheduled and sorts last
        assert_eq!(active, ["r2", "r1", "r3"]);
        assert_eq!(view.done.len(), 1);
        assert_eq!(view.done[0].status, RunStatus::Done);
        assert_eq!(
            view.done[0].last_start,
            Some(parse_start("2024-05-01T00:00:00Z").unwrap())
        );
        assert_eq!(view.done[0].href, "/sessions/detail?id=r4");
    }

    #[test]
    fn character_links_resolve_names_with_id_fallback() {
        let characters = vec![Character {
            id: "c1".to_string(),
            name: Some("アキラ".to_string()),
            job: None,
            player: None,
            system: None,
            state: None,
            age: None,
            gender: None,
            height: None,
            weight: None,
            origin: None,
            image: None,
            ability_str: None,
            ability_con: None,
            ability_pow: None,
            ability_dex: None,
            ability_app: None,
            ability_siz: None,
            ability_int: None,
            ability_edu: None,
            memo: None,
        }];
        let ids = vec!["c1".to_string(), "ghost".to_string()];
        let view = build("sc1", &[scenario("sc1")], &[], &[], &ids, &characters, now()).unwrap();
        assert_eq!(view.characters[0].label, "アキラ");
        assert_eq!(view.characters[1].label, "ghost");
    }
}
