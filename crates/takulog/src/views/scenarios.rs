//! Scenario list: covers with per-scenario run counts.

use crate::{assets, links, text::non_blank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use takulog_api::response::{Run, Scenario};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCard {
    pub id: String,
    pub title: String,
    pub system: Option<String>,
    pub run_count: usize,
    pub cover: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenariosView {
    pub cards: Vec<ScenarioCard>,
}

pub fn build(scenarios: &[Scenario], runs: &[Run]) -> ScenariosView {
    let mut run_count_by_scenario: HashMap<&str, usize> = HashMap::new();
    for run in runs {
        if let Some(sid) = non_blank(run.scenario_id.as_deref()) {
            *run_count_by_scenario.entry(sid).or_default() += 1;
        }
    }

    let cards = scenarios
        .iter()
        .map(|s| ScenarioCard {
            id: s.id.clone(),
            title: non_blank(s.title.as_deref()).unwrap_or(&s.id).to_string(),
            system: non_blank(s.system.as_deref()).map(str::to_string),
            run_count: run_count_by_scenario
                .get(s.id.as_str())
                .copied()
                .unwrap_or_default(),
            cover: assets::scenario_cover(s),
            href: links::scenario_detail(&s.id),
        })
        .collect();
    ScenariosView { cards }
}

#[cfg(test)]
mod test {
    use super::*;
    use takulog_api::response::RunStatus;

    fn scenario(id: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            title: Some(format!("{id}の夜")),
            system: Some("CoC6".to_string()),
            description: None,
            notes: None,
            tags: Vec::new(),
            cover: None,
        }
    }

    fn run(id: &str, scenario_id: Option<&str>) -> Run {
        Run {
            id: id.to_string(),
            title: None,
            scenario_id: scenario_id.map(str::to_string),
            gm: None,
            players: Vec::new(),
            status: RunStatus::Active,
            characters: Vec::new(),
            cover: None,
        }
    }

    #[test]
    fn counts_runs_per_scenario() {
        let scenarios = vec![scenario("sc1"), scenario("sc2")];
        let runs = vec![
            run("r1", Some("sc1")),
            run("r2", Some("sc1")),
            run("r3", None),
            run("r4", Some("missing")),
        ];
        let view = build(&scenarios, &runs);
        assert_eq!(view.cards[0].run_count, 2);
        assert_eq!(view.cards[1].run_count, 0);
    }

    #[test]
    fn cards_keep_input_order_and_convention_cover() {
        let view = build(&[scenario("sc1")], &[]);
        assert_eq!(view.cards[0].cover, "/img/scenario/sc1.png");
        assert_eq!(view.cards[0].href, "/scenarios/detail?id=sc1");
    }
}
