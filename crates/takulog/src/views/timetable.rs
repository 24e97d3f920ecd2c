//! Schedule page: every upcoming session across all tables.

use crate::{collections, schedule, text::non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use takulog_api::response::{Run, Scenario, Session};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableItem {
    pub start: DateTime<Utc>,
    pub scenario_title: Option<String>,
    pub run_title: String,
    pub session_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableView {
    pub items: Vec<TimetableItem>,
}

pub fn build(
    scenarios: &[Scenario],
    runs: &[Run],
    sessions: &[Session],
    now: DateTime<Utc>,
) -> TimetableView {
    let scenarios_by_id = collections::index_by(scenarios, |s: &Scenario| s.id.as_str());
    let runs_by_id = collections::index_by(runs, |r: &Run| r.id.as_str());

    let items = schedule::upcoming(sessions, now)
        .into_iter()
        .map(|d| {
            let run = runs_by_id.get(d.session.run_id.as_str()).copied();
            TimetableItem {
                start: d.start,
                scenario_title: run
                    .and_then(|r| r.scenario_id.as_deref())
                    .and_then(|sid| scenarios_by_id.get(sid))
                    .and_then(|s| non_blank(s.title.as_deref()))
                    .map(str::to_string),
                run_title: run
                    .and_then(|r| non_blank(r.title.as_deref()))
                    .unwrap_or(&d.session.run_id)
                    .to_string(),
                session_title: non_blank(d.session.title.as_deref()).map(str::to_string),
            }
        })
        .collect();
    TimetableView { items }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datetime::parse_start;
    use takulog_api::response::SessionStatus;

    fn now() -> DateTime<Utc> {
        parse_start("2025-08-05T00:00:00Z").unwrap()
    }

    fn session(run_id: &str, status: SessionStatus, start: &str) -> Session {
        Session {
            id: format!("{run_id}-{start}"),
            run_id: run_id.to_string(),
            title: None,
            start: Some(start.to_string()),
            status,
            duration_hours: None,
            notes: None,
            replay_url: None,
            stream_url: None,
        }
    }

    #[test]
    fn lists_future_scheduled_sessions_soonest_first() {
        let sessions = vec![
            session("r1", SessionStatus::Scheduled, "2999-06-01T00:00:00Z"),
            session("r1", SessionStatus::Scheduled, "2999-01-01T00:00:00Z"),
            session("r1", SessionStatus::Done, "2024-01-01T00:00:00Z"),
            session("r1", SessionStatus::Scheduled, "2024-02-01T00:00:00Z"),
        ];
        let view = build(&[], &[], &sessions, now());
        assert_eq!(view.items.len(), 2);
        assert!(view.items[0].start < view.items[1].start);
        // the run join is unresolved, the raw id still shows
        assert_eq!(view.items[0].run_title, "r1");
    }

    #[test]
    fn empty_schedule_is_empty() {
        assert!(build(&[], &[], &[], now()).items.is_empty());
    }
}
