//! Skill base values per game system.
//!
//! A skill is only worth showing when it was raised above its base value,
//! so each supported system carries its base table. Systems without a
//! table show every recorded skill.

use itertools::Itertools;
use std::cmp::Reverse;
use takulog_api::response::CharacterSkill;

const COC6_BASE: &[(&str, i32)] = &[
    ("回避", 20),
    ("キック", 25),
    ("組み付き", 25),
    ("こぶし（パンチ）", 50),
    ("頭突き", 10),
    ("投擲", 25),
    ("マーシャルアーツ", 1),
    ("拳銃", 20),
    ("サブマシンガン", 15),
    ("ショットガン", 30),
    ("マシンガン", 15),
    ("ライフル", 25),
    ("応急手当", 30),
    ("鍵開け", 1),
    ("隠す", 15),
    ("隠れる", 10),
    ("聞き耳", 25),
    ("忍び歩き", 10),
    ("写真術", 10),
    ("精神分析", 1),
    ("追跡", 10),
    ("登攀", 40),
    ("図書館", 25),
    ("目星", 25),
    ("運転", 20),
    ("機械修理", 20),
    ("重機械操作", 1),
    ("乗馬", 5),
    ("水泳", 25),
    ("製作", 5),
    ("操縦", 1),
    ("跳躍", 25),
    ("電気修理", 10),
    ("ナビゲート", 10),
    ("変装", 1),
    ("言いくるめ", 5),
    ("信用", 15),
    ("説得", 15),
    ("値切り", 5),
    ("医学", 5),
    ("オカルト", 5),
    ("化学", 1),
    ("クトゥルフ神話", 0),
    ("芸術", 5),
    ("経理", 10),
    ("考古学", 1),
    ("コンピューター", 1),
    ("心理学", 5),
    ("人類学", 1),
    ("生物学", 1),
    ("地質学", 1),
    ("電子工学", 1),
    ("天文学", 1),
    ("博物学", 10),
    ("物理学", 1),
    ("法律", 5),
    ("薬学", 1),
    ("歴史", 20),
];

const COC7_BASE: &[(&str, i32)] = &[
    ("回避", 0),
    ("近接戦闘", 25),
    ("投擲", 20),
    ("射撃", 0),
    ("応急手当", 30),
    ("鍵開け", 1),
    ("手さばき", 10),
    ("聞き耳", 20),
    ("隠密", 20),
    ("精神分析", 1),
    ("追跡", 10),
    ("登攀", 20),
    ("図書館", 20),
    ("目星", 25),
    ("鑑定", 5),
    ("運転", 20),
    ("機械修理", 10),
    ("重機械操作", 1),
    ("乗馬", 5),
    ("水泳", 20),
    ("製作", 5),
    ("操縦", 1),
    ("跳躍", 20),
    ("電気修理", 10),
    ("ナビゲート", 10),
    ("変装", 5),
    ("言いくるめ", 5),
    ("信用", 0),
    ("説得", 10),
    ("母国語", 0),
    ("威圧", 15),
    ("魅惑", 15),
    ("言語", 1),
    ("医学", 1),
    ("オカルト", 5),
    ("クトゥルフ神話", 0),
    ("芸術", 5),
    ("経理", 5),
    ("考古学", 1),
    ("コンピューター", 5),
    ("科学", 1),
    ("心理学", 10),
    ("人類学", 1),
    ("電子工学", 1),
    ("自然", 10),
    ("法律", 5),
    ("歴史", 5),
    ("サバイバル", 10),
];

fn base_table(system: &str) -> Option<&'static [(&'static str, i32)]> {
    match system {
        "CoC6" => Some(COC6_BASE),
        "CoC7" => Some(COC7_BASE),
        _ => None,
    }
}

/// Base value of a skill in a system, `None` when either is unknown.
pub fn base_value(system: &str, skill: &str) -> Option<i32> {
    base_table(system)?
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, value)| *value)
}

/// Skills worth showing on the sheet: value above the system base, every
/// recorded skill when the system or the skill has no base table entry.
/// Highest value first, name as tiebreak.
pub fn noteworthy(skills: &[CharacterSkill], system: Option<&str>) -> Vec<(String, i32)> {
    skills
        .iter()
        .filter_map(|skill| Some((skill.name.clone(), skill.display_value()?)))
        .filter(|(name, value)| {
            match system.and_then(|system| base_value(system, name)) {
                Some(base) => *value > base,
                None => true,
            }
        })
        .sorted_by_key(|(name, value)| (Reverse(*value), name.clone()))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn skill(name: &str, base: Option<i32>, over: Option<i32>) -> CharacterSkill {
        CharacterSkill {
            character_id: "c1".to_string(),
            name: name.to_string(),
            base_value: base,
            override_value: over,
        }
    }

    #[test]
    fn keeps_only_raised_skills_for_known_systems() {
        let skills = vec![
            skill("目星", Some(25), Some(70)),
            skill("図書館", Some(25), None),
            skill("聞き耳", Some(25), Some(60)),
        ];
        let chips = noteworthy(&skills, Some("CoC6"));
        assert_eq!(
            chips,
            vec![("目星".to_string(), 70), ("聞き耳".to_string(), 60)]
        );
    }

    #[test]
    fn seventh_edition_uses_its_own_bases() {
        // 図書館 is 25 in CoC6 but 20 in CoC7
        let skills = vec![skill("図書館", Some(20), Some(25))];
        assert!(noteworthy(&skills, Some("CoC6")).is_empty());
        assert_eq!(noteworthy(&skills, Some("CoC7")).len(), 1);
    }

    #[test]
    fn unknown_system_keeps_everything() {
        let skills = vec![skill("白兵", None, Some(3)), skill("射撃", None, Some(1))];
        assert_eq!(noteworthy(&skills, Some("SW2.5")).len(), 2);
        assert_eq!(noteworthy(&skills, None).len(), 2);
    }

    #[test]
    fn unknown_skill_in_known_system_is_kept() {
        let skills = vec![skill("自作技能", None, Some(10))];
        assert_eq!(noteworthy(&skills, Some("CoC6")).len(), 1);
    }

    #[test]
    fn valueless_rows_are_dropped_and_order_is_desc() {
        let skills = vec![
            skill("オカルト", Some(5), Some(30)),
            skill("医学", None, None),
            skill("応急手当", Some(30), Some(80)),
        ];
        let chips = noteworthy(&skills, Some("CoC6"));
        assert_eq!(
            chips.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
            ["応急手当", "オカルト"]
        );
    }
}
