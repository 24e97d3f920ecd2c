//! Next/last session selection.

use crate::{collections, datetime};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use takulog_api::response::{RunStatus, Session, SessionStatus};

/// A session paired with its parsed start time. Sessions with missing or
/// invalid starts never make it into one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct Dated {
    pub session: Session,
    pub start: DateTime<Utc>,
}

fn dated(session: &Session) -> Option<Dated> {
    let start = datetime::parse_start(session.start.as_deref()?)?;
    Some(Dated {
        session: session.clone(),
        start,
    })
}

/// All future `scheduled` sessions, soonest first.
pub fn upcoming(sessions: &[Session], now: DateTime<Utc>) -> Vec<Dated> {
    let mut items: Vec<Dated> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Scheduled)
        .filter_map(dated)
        .filter(|d| d.start > now)
        .collect();
    items.sort_by_key(|d| d.start);
    items
}

/// Earliest future `scheduled` session per run.
pub fn next_by_run(sessions: &[Session], now: DateTime<Utc>) -> HashMap<String, Dated> {
    let mut map: HashMap<String, Dated> = HashMap::new();
    for d in upcoming(sessions, now) {
        map.entry(d.session.run_id.clone())
            .and_modify(|cur| {
                if d.start < cur.start {
                    *cur = d.clone();
                }
            })
            .or_insert(d);
    }
    map
}

/// Latest past session per run, regardless of status.
pub fn last_by_run(sessions: &[Session], now: DateTime<Utc>) -> HashMap<String, Dated> {
    let mut map: HashMap<String, Dated> = HashMap::new();
    for session in sessions {
        let Some(d) = dated(session) else { continue };
        if d.start > now {
            continue;
        }
        map.entry(d.session.run_id.clone())
            .and_modify(|cur| {
                if d.start > cur.start {
                    *cur = d.clone();
                }
            })
            .or_insert(d);
    }
    map
}

/// One run's sessions in chronological order, invalid starts dropped.
pub fn run_history(sessions: &[Session], run_id: &str) -> Vec<Dated> {
    let by_run = collections::group_by(sessions, |s: &Session| Some(s.run_id.as_str()));
    let mut items: Vec<Dated> = by_run
        .get(run_id)
        .map(|rows| rows.iter().filter_map(|s| dated(s)).collect())
        .unwrap_or_default();
    items.sort_by_key(|d| d.start);
    items
}

/// Latest `done` session of a history produced by [`run_history`].
pub fn last_done(history: &[Dated]) -> Option<&Dated> {
    history
        .iter()
        .rev()
        .find(|d| d.session.status == SessionStatus::Done)
}

/// Schedule line on a run card: ongoing tables show their next date,
/// finished ones the last one played.
pub fn run_schedule_label(
    status: RunStatus,
    next: Option<DateTime<Utc>>,
    last: Option<DateTime<Utc>>,
) -> String {
    if status.is_ongoing() {
        match next {
            Some(next) => format!("次回: {}", datetime::format_date_time(next)),
            None => "次回未定".to_string(),
        }
    } else {
        match last {
            Some(last) => format!("最終: {}", datetime::format_date(last)),
            None => "最終未記録".to_string(),
        }
    }
}
