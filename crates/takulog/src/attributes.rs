//! Ability-score chips: the generic per-system attribute schema merged
//! with the legacy fixed `ability_*` columns.

use crate::text::non_blank;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use takulog_api::response::{AttributeKind, Character, CharacterAttribute, SystemAttributeDef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeChip {
    pub label: String,
    pub value: String,
}

fn legacy_chips(character: &Character) -> Vec<AttributeChip> {
    [
        ("STR", character.ability_str),
        ("CON", character.ability_con),
        ("POW", character.ability_pow),
        ("DEX", character.ability_dex),
        ("APP", character.ability_app),
        ("SIZ", character.ability_siz),
        ("INT", character.ability_int),
        ("EDU", character.ability_edu),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        Some(AttributeChip {
            label: label.to_string(),
            value: value?.to_string(),
        })
    })
    .collect()
}

/// Chips in schema order where a schema exists, with legacy scores filling
/// the keys the schema does not cover. A generic value wins over the
/// legacy column of the same key.
pub fn merge(
    character: &Character,
    defs: &[SystemAttributeDef],
    attrs: &[CharacterAttribute],
) -> Vec<AttributeChip> {
    let mut chips = Vec::new();
    let mut covered = Vec::new();

    for def in defs.iter().sorted_by_key(|def| def.sort_order) {
        let attr = attrs
            .iter()
            .find(|attr| attr.character_id == character.id && attr.key == def.key);
        let value = attr.and_then(|attr| match def.kind {
            AttributeKind::Int => attr.value_int.map(|v| v.to_string()),
            AttributeKind::Emotion | AttributeKind::Unknown => {
                non_blank(attr.value_emotion.as_deref()).map(str::to_string)
            }
        });
        covered.push(def.key.to_uppercase());
        if let Some(value) = value {
            let label = non_blank(def.label.as_deref()).unwrap_or(&def.key);
            chips.push(AttributeChip {
                label: label.to_string(),
                value,
            });
        }
    }

    for chip in legacy_chips(character) {
        if !covered.contains(&chip.label) {
            chips.push(chip);
        }
    }
    chips
}

#[cfg(test)]
mod test {
    use super::*;

    fn character() -> Character {
        Character {
            id: "c1".to_string(),
            name: None,
            job: None,
            player: None,
            system: Some("CoC6".to_string()),
            state: None,
            age: None,
            gender: None,
            height: None,
            weight: None,
            origin: None,
            image: None,
            ability_str: Some(13),
            ability_con: Some(11),
            ability_pow: None,
            ability_dex: None,
            ability_app: None,
            ability_siz: None,
            ability_int: None,
            ability_edu: Some(16),
            memo: None,
        }
    }

    fn def(key: &str, kind: AttributeKind, label: Option<&str>, sort_order: i32) -> SystemAttributeDef {
        SystemAttributeDef {
            system: "CoC6".to_string(),
            key: key.to_string(),
            kind,
            label: label.map(str::to_string),
            sort_order,
        }
    }

    fn attr(key: &str, int: Option<i32>, emotion: Option<&str>) -> CharacterAttribute {
        CharacterAttribute {
            character_id: "c1".to_string(),
            key: key.to_string(),
            value_int: int,
            value_emotion: emotion.map(str::to_string),
        }
    }

    #[test]
    fn legacy_only_without_schema() {
        let chips = merge(&character(), &[], &[]);
        assert_eq!(
            chips,
            vec![
                AttributeChip { label: "STR".into(), value: "13".into() },
                AttributeChip { label: "CON".into(), value: "11".into() },
                AttributeChip { label: "EDU".into(), value: "16".into() },
            ]
        );
    }

    #[test]
    fn generic_value_overrides_legacy_column() {
        let defs = vec![def("str", AttributeKind::Int, Some("筋力"), 1)];
        let attrs = vec![attr("str", Some(15), None)];
        let chips = merge(&character(), &defs, &attrs);
        assert_eq!(chips[0], AttributeChip { label: "筋力".into(), value: "15".into() });
        // the legacy STR column is covered by the schema and must not reappear
        assert!(chips.iter().filter(|c| c.value == "13").count() == 0);
        assert_eq!(chips.len(), 3);
    }

    #[test]
    fn schema_order_and_emotion_values() {
        let defs = vec![
            def("hope", AttributeKind::Emotion, Some("希望"), 2),
            def("luck", AttributeKind::Int, None, 1),
        ];
        let attrs = vec![attr("luck", Some(45), None), attr("hope", None, Some("強気"))];
        let chips = merge(&character(), &defs, &attrs);
        assert_eq!(chips[0], AttributeChip { label: "luck".into(), value: "45".into() });
        assert_eq!(chips[1], AttributeChip { label: "希望".into(), value: "強気".into() });
    }

    #[test]
    fn other_characters_rows_are_ignored() {
        let defs = vec![def("luck", AttributeKind::Int, None, 1)];
        let mut other = attr("luck", Some(99), None);
        other.character_id = "someone_else".to_string();
        let chips = merge(&character(), &defs, &[other]);
        // no value for this character, schema key contributes nothing
        assert!(chips.iter().all(|c| c.value != "99"));
    }
}
