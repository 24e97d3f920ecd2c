//! Session board: one card per run, ongoing tables separated from
//! finished ones.

use crate::{assets, collections, schedule, text::non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use takulog_api::response::{Run, RunStatus, Scenario, Session};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingItem {
    pub start: DateTime<Utc>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSessionsCard {
    pub id: String,
    pub title: String,
    pub status: RunStatus,
    pub scenario_title: Option<String>,
    pub gm: Option<String>,
    pub players: Vec<String>,
    pub cover: String,
    pub upcoming: Vec<UpcomingItem>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsView {
    pub active: Vec<RunSessionsCard>,
    pub done: Vec<RunSessionsCard>,
}

pub fn build(
    scenarios: &[Scenario],
    runs: &[Run],
    sessions: &[Session],
    now: DateTime<Utc>,
) -> SessionsView {
    let scenarios_by_id = collections::index_by(scenarios, |s: &Scenario| s.id.as_str());
    let sessions_by_run = collections::group_by(sessions, |s: &Session| Some(s.run_id.as_str()));

    let mut view = SessionsView {
        active: Vec::new(),
        done: Vec::new(),
    };
    for run in runs {
        let scenario = run
            .scenario_id
            .as_deref()
            .and_then(|sid| scenarios_by_id.get(sid))
            .copied();
        // only ongoing cards list their upcoming dates
        let upcoming = if run.status.is_active() {
            let run_sessions: Vec<Session> = sessions_by_run
                .get(run.id.as_str())
                .map(|rows| rows.iter().map(|s| (*s).clone()).collect())
                .unwrap_or_default();
            schedule::upcoming(&run_sessions, now)
                .into_iter()
                .map(|d| UpcomingItem {
                    start: d.start,
                    title: non_blank(d.session.title.as_deref()).map(str::to_string),
                })
                .collect()
        } else {
            Vec::new()
        };

        let card = RunSessionsCard {
            id: run.id.clone(),
            title: non_blank(run.title.as_deref()).unwrap_or(&run.id).to_string(),
            status: run.status,
            scenario_title: scenario
                .and_then(|s| non_blank(s.title.as_deref()))
                .map(str::to_string),
            gm: non_blank(run.gm.as_deref()).map(str::to_string),
            players: run.players.clone(),
            cover: assets::run_cover(run, scenario),
            upcoming,
            href: crate::links::session_detail(&run.id),
        };
        if run.status.is_active() {
            view.active.push(card);
        } else {
            view.done.push(card);
        }
    }
    view
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datetime::parse_start;
    use takulog_api::response::SessionStatus;

    fn now() -> DateTime<Utc> {
        parse_start("2025-08-05T00:00:00Z").unwrap()
    }

    fn run(id: &str, status: RunStatus) -> Run {
        Run {
            id: id.to_string(),
            title: Some(format!("{id}卓")),
            scenario_id: Some("sc1".to_string()),
            gm: Some("村田".to_string()),
            players: vec!["A".to_string(), "B".to_string()],
            status,
            characters: Vec::new(),
            cover: None,
        }
    }

    fn session(run_id: &str, status: SessionStatus, start: &str) -> Session {
        Session {
            id: format!("{run_id}-{start}"),
            run_id: run_id.to_string(),
            title: Some("第2回".to_string()),
            start: Some(start.to_string()),
            status,
            duration_hours: None,
            notes: None,
            replay_url: None,
            stream_url: None,
        }
    }

    #[test]
    fn partitions_by_activity() {
        let runs = vec![
            run("r1", RunStatus::Active),
            run("r2", RunStatus::Done),
            run("r3", RunStatus::Planning),
        ];
        let view = build(&[], &runs, &[], now());
        assert_eq!(view.active.len(), 1);
        // anything not active lands in the finished column
        assert_eq!(view.done.len(), 2);
    }

    #[test]
    fn active_cards_list_future_sessions_in_order() {
        let runs = vec![run("r1", RunStatus::Active), run("r2", RunStatus::Done)];
        let sessions = vec![
            session("r1", SessionStatus::Scheduled, "2999-06-01T00:00:00Z"),
            session("r1", SessionStatus::Scheduled, "2999-01-01T00:00:00Z"),
            session("r1", SessionStatus::Done, "2024-01-01T00:00:00Z"),
            session("r2", SessionStatus::Scheduled, "2999-01-01T00:00:00Z"),
        ];
        let view = build(&[], &runs, &sessions, now());
        let starts: Vec<_> = view.active[0].upcoming.iter().map(|u| u.start).collect();
        assert_eq!(
            starts,
            vec![
                parse_start("2999-01-01T00:00:00Z").unwrap(),
                parse_start("2999-06-01T00:00:00Z").unwrap(),
            ]
        );
        // finished runs do not list upcoming dates
        assert!(view.done[0].upcoming.is_empty());
    }
}
