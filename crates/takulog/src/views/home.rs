//! Dashboard: the single next session and the ongoing tables.

use crate::{collections, schedule, text::non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use takulog_api::response::{Run, Scenario, Session};

/// At most this many ongoing runs are shown on the dashboard.
const ONGOING_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    pub next: Option<NextSession>,
    pub ongoing: Vec<OngoingRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextSession {
    pub start: DateTime<Utc>,
    pub duration_hours: Option<f64>,
    pub run_title: String,
    pub scenario_title: Option<String>,
    pub session_title: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OngoingRun {
    pub id: String,
    pub title: String,
    pub scenario_title: Option<String>,
    pub players: Vec<String>,
    pub next_start: Option<DateTime<Utc>>,
}

pub fn build(
    scenarios: &[Scenario],
    runs: &[Run],
    sessions: &[Session],
    now: DateTime<Utc>,
) -> HomeView {
    let scenarios_by_id = collections::index_by(scenarios, |s: &Scenario| s.id.as_str());
    let runs_by_id = collections::index_by(runs, |r: &Run| r.id.as_str());
    let next_by_run = schedule::next_by_run(sessions, now);

    let scenario_title = |run: &Run| {
        run.scenario_id
            .as_deref()
            .and_then(|sid| scenarios_by_id.get(sid))
            .and_then(|s| non_blank(s.title.as_deref()))
            .or(non_blank(run.scenario_id.as_deref()))
            .map(str::to_string)
    };

    let next = schedule::upcoming(sessions, now).into_iter().next().map(|d| {
        let run = runs_by_id.get(d.session.run_id.as_str()).copied();
        NextSession {
            start: d.start,
            duration_hours: d.session.duration_hours.filter(|h| *h > 0.0),
            run_title: run
                .and_then(|r| non_blank(r.title.as_deref()))
                .unwrap_or(&d.session.run_id)
                .to_string(),
            scenario_title: run.and_then(&scenario_title),
            session_title: non_blank(d.session.title.as_deref()).map(str::to_string),
            notes: non_blank(d.session.notes.as_deref()).map(str::to_string),
        }
    });

    let ongoing = runs
        .iter()
        .filter(|r| r.status.is_ongoing())
        .take(ONGOING_LIMIT)
        .map(|r| OngoingRun {
            id: r.id.clone(),
            title: non_blank(r.title.as_deref()).unwrap_or(&r.id).to_string(),
            scenario_title: scenario_title(r),
            players: r.players.clone(),
            next_start: next_by_run.get(&r.id).map(|d| d.start),
        })
        .collect();

    HomeView { next, ongoing }
}
