//! Character list: cards sorted by most recent play, searchable.

use crate::{assets, collections, datetime, links, search, text::non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use takulog_api::response::{Character, CharacterLastSession, CharacterState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterCard {
    pub id: String,
    pub name: String,
    pub job: Option<String>,
    pub player: Option<String>,
    pub system: Option<String>,
    pub state: Option<CharacterState>,
    pub image: String,
    pub href: String,
    pub last_start: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharactersView {
    pub cards: Vec<CharacterCard>,
}

/// Most recently played first; characters with no recorded session sort
/// after every character with one, names breaking ties.
fn card_order(a: &CharacterCard, b: &CharacterCard) -> Ordering {
    match (a.last_start, b.last_start) {
        (Some(l), Some(r)) => r.cmp(&l).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    }
}

pub fn build(
    characters: &[Character],
    last_sessions: &[CharacterLastSession],
) -> CharactersView {
    let last_by_character =
        collections::index_by(last_sessions, |l: &CharacterLastSession| {
            l.character_id.as_str()
        });

    let mut cards: Vec<CharacterCard> = characters
        .iter()
        .map(|c| CharacterCard {
            id: c.id.clone(),
            name: non_blank(c.name.as_deref()).unwrap_or(&c.id).to_string(),
            job: non_blank(c.job.as_deref()).map(str::to_string),
            player: non_blank(c.player.as_deref()).map(str::to_string),
            system: non_blank(c.system.as_deref()).map(str::to_string),
            state: c.state,
            image: assets::character_image(c),
            href: links::character_detail(&c.id),
            last_start: last_by_character
                .get(c.id.as_str())
                .and_then(|l| l.start.as_deref())
                .and_then(datetime::parse_start),
        })
        .collect();
    cards.sort_by(card_order);
    CharactersView { cards }
}

/// Live search over id, name, job, player and system.
pub fn filter(cards: &[CharacterCard], query: &str) -> Vec<CharacterCard> {
    cards
        .iter()
        .filter(|card| {
            search::matches(
                &[
                    Some(card.id.as_str()),
                    Some(card.name.as_str()),
                    card.job.as_deref(),
                    card.player.as_deref(),
                    card.system.as_deref(),
                ],
                query,
            )
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn character(id: &str, name: &str) -> Character {
        Character {
            id: id.to_string(),
            name: Some(name.to_string()),
            job: Some("探偵".to_string()),
            player: None,
            system: Some("CoC6".to_string()),
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
        }
    }

    fn last(character_id: &str, start: &str) -> CharacterLastSession {
        CharacterLastSession {
            character_id: character_id.to_string(),
            start: Some(start.to_string()),
        }
    }

    #[test]
    fn sorts_by_last_session_desc_with_missing_last() {
        let characters = vec![
            character("c1", "あきら"),
            character("c2", "ベン"),
            character("c3", "チカ"),
        ];
        let lasts = vec![
            last("c1", "2024-01-01T00:00:00Z"),
            last("c3", "2025-01-01T00:00:00Z"),
        ];
        let view = build(&characters, &lasts);
        let order: Vec<&str> = view.cards.iter().map(|c| c.id.as_str()).collect();
        // c2 has no recorded session and sorts last regardless of name
        assert_eq!(order, ["c3", "c1", "c2"]);
    }

    #[test]
    fn unmatched_query_yields_empty() {
        let view = build(&[character("c1", "あきら")], &[]);
        assert!(filter(&view.cards, "gm").is_empty());
        assert_eq!(filter(&view.cards, "探偵").len(), 1);
        assert_eq!(filter(&view.cards, "").len(), 1);
    }

    #[test]
    fn blank_name_falls_back_to_id() {
        let mut c = character("c9", "");
        c.image = Some("  ".to_string());
        let view = build(&[c], &[]);
        assert_eq!(view.cards[0].name, "c9");
        assert_eq!(view.cards[0].image, "/img/character/c9.png");
        assert_eq!(view.cards[0].href, "/characters/detail?id=c9");
    }
}
