//! Character sheet: profile, abilities, skills, memo, passed scenarios.

use crate::{
    assets, attributes, attributes::AttributeChip, collections, links, skills,
    text::non_blank,
    views::LinkItem,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use takulog_api::response::{
    Character, CharacterAttribute, CharacterSkill, CharacterState, Run, Scenario,
    SystemAttributeDef,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillChip {
    pub name: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDetailView {
    pub name: String,
    pub state: Option<CharacterState>,
    pub image: String,
    pub profile: Vec<ProfileRow>,
    pub abilities: Vec<AttributeChip>,
    pub skills: Vec<SkillChip>,
    pub memo: Option<String>,
    pub scenarios: Vec<LinkItem>,
}

fn profile_rows(c: &Character) -> Vec<ProfileRow> {
    let rows = [
        ("職業", non_blank(c.job.as_deref()).map(str::to_string)),
        ("年齢", c.age.map(|v| v.to_string())),
        ("性別", non_blank(c.gender.as_deref()).map(str::to_string)),
        ("身長", c.height.map(|v| format!("{v}cm"))),
        ("体重", c.weight.map(|v| format!("{v}kg"))),
        ("出身", non_blank(c.origin.as_deref()).map(str::to_string)),
        ("プレイヤー", non_blank(c.player.as_deref()).map(str::to_string)),
        ("システム", non_blank(c.system.as_deref()).map(str::to_string)),
    ];
    rows.into_iter()
        .filter_map(|(label, value)| {
            Some(ProfileRow {
                label: label.to_string(),
                value: value?,
            })
        })
        .collect()
}

/// `None` when no character matches the id.
#[allow(clippy::too_many_arguments)]
pub fn build(
    id: &str,
    characters: &[Character],
    scenarios: &[Scenario],
    runs: &[Run],
    passed_scenario_ids: &[String],
    skill_rows: &[CharacterSkill],
    attribute_defs: &[SystemAttributeDef],
    attribute_rows: &[CharacterAttribute],
) -> Option<CharacterDetailView> {
    let character = characters.iter().find(|c| c.id == id)?;
    let scenarios_by_id = collections::index_by(scenarios, |s: &Scenario| s.id.as_str());

    // the normalized link table wins; reverse lookup through the runs is
    // the fallback for data recorded before it existed
    let passed: Vec<String> = if passed_scenario_ids.is_empty() {
        runs.iter()
            .filter(|r| r.characters.iter().any(|cid| cid == id))
            .filter_map(|r| r.scenario_id.clone())
            .unique()
            .collect()
    } else {
        passed_scenario_ids.to_vec()
    };
    let scenario_links = passed
        .iter()
        .map(|sid| LinkItem {
            label: scenarios_by_id
                .get(sid.as_str())
                .and_then(|s| non_blank(s.title.as_deref()))
                .unwrap_or(sid)
                .to_string(),
            href: links::scenario_detail(sid),
        })
        .collect();

    let own_skills: Vec<CharacterSkill> = skill_rows
        .iter()
        .filter(|row| row.character_id == id)
        .cloned()
        .collect();
    let skill_chips = skills::noteworthy(&own_skills, character.system.as_deref())
        .into_iter()
        .map(|(name, value)| SkillChip { name, value })
        .collect();

    Some(CharacterDetailView {
        name: non_blank(character.name.as_deref())
            .unwrap_or(&character.id)
            .to_string(),
        state: character.state,
        image: assets::character_image(character),
        profile: profile_rows(character),
        abilities: attributes::merge(character, attribute_defs, attribute_rows),
        skills: skill_chips,
        memo: non_blank(character.memo.as_deref()).map(str::to_string),
        scenarios: scenario_links,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use takulog_api::response::RunStatus;

    fn character(id: &str) -> Character {
        Character {
            id: id.to_string(),
            name: Some("アキラ".to_string()),
            job: Some("探偵".to_string()),
            player: Some("KP村".to_string()),
            system: Some("CoC6".to_string()),
            state: Some(CharacterState::Survived),
            age: Some(27),
            gender: None,
            height: Some(172),
            weight: None,
            origin: Some("  ".to_string()),
            image: None,
            ability_str: Some(13),
            ability_con: None,
            ability_pow: None,
            ability_dex: None,
            ability_app: None,
            ability_siz: None,
            ability_int: None,
            ability_edu: None,
            memo: Some("line1\\nline2".to_string()),
        }
    }

    fn scenario(id: &str, title: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            title: Some(title.to_string()),
            system: None,
            description: None,
            notes: None,
            tags: Vec::new(),
            cover: None,
        }
    }

    fn run(id: &str, scenario_id: &str, characters: &[&str]) -> Run {
        Run {
            id: id.to_string(),
            title: None,
            scenario_id: Some(scenario_id.to_string()),
            gm: None,
            players: Vec::new(),
            status: RunStatus::Done,
            characters: characters.iter().map(|c| c.to_string()).collect(),
            cover: None,
        }
    }

    #[test]
    fn missing_character_is_none() {
        assert!(build("nope", &[character("c1")], &[], &[], &[], &[], &[], &[]).is_none());
    }

    #[test]
    fn profile_keeps_only_present_rows() {
        let view = build("c1", &[character("c1")], &[], &[], &[], &[], &[], &[]).unwrap();
        let labels: Vec<&str> = view.profile.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["職業", "年齢", "身長", "プレイヤー", "システム"]);
        assert_eq!(view.profile[2].value, "172cm");
    }

    #[test]
    fn passed_scenarios_prefer_the_link_table() {
        let scenarios = vec![scenario("sc1", "悪霊の家"), scenario("sc2", "毒の楽園")];
        let runs = vec![run("r1", "sc2", &["c1"])];
        let view = build(
            "c1",
            &[character("c1")],
            &scenarios,
            &runs,
            &["sc1".to_string()],
            &[],
            &[],
            &[],
        )
        .unwrap();
        assert_eq!(view.scenarios.len(), 1);
        assert_eq!(view.scenarios[0].label, "悪霊の家");
        assert_eq!(view.scenarios[0].href, "/scenarios/detail?id=sc1");
    }

    #[test]
    fn passed_scenarios_fall_back_to_run_reverse_lookup() {
        let scenarios = vec![scenario("sc2", "毒の楽園")];
        let runs = vec![
            run("r1", "sc2", &["c1", "c2"]),
            run("r2", "sc2", &["c1"]),
            run("r3", "sc3", &["other"]),
        ];
        let view = build(
            "c1",
            &[character("c1")],
            &scenarios,
            &runs,
            &[],
            &[],
            &[],
            &[],
        )
        .unwrap();
        // duplicates collapse, unknown titles fall back to the id
        assert_eq!(view.scenarios.len(), 1);
        assert_eq!(view.scenarios[0].label, "毒の楽園");
    }

    #[test]
    fn skills_are_scoped_to_the_character() {
        let skill_rows = vec![
            CharacterSkill {
                character_id: "c1".to_string(),
                name: "目星".to_string(),
                base_value: Some(25),
                override_value: Some(70),
            },
            CharacterSkill {
                character_id: "other".to_string(),
                name: "図書館".to_string(),
                base_value: Some(25),
                override_value: Some(90),
            },
        ];
        let view = build(
            "c1",
            &[character("c1")],
            &[],
            &[],
            &[],
            &skill_rows,
            &[],
            &[],
        )
        .unwrap();
        assert_eq!(view.skills, vec![SkillChip { name: "目星".to_string(), value: 70 }]);
    }

    #[test]
    fn memo_and_blank_fields_are_normalized() {
        let view = build("c1", &[character("c1")], &[], &[], &[], &[], &[], &[]).unwrap();
        assert_eq!(view.memo.as_deref(), Some("line1\\nline2"));
        // origin was whitespace-only and must not appear
        assert!(view.profile.iter().all(|r| r.label != "出身"));
    }
}
