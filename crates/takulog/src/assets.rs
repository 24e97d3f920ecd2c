//! Image path conventions.
//!
//! Paths are derived, never verified: the renderer binds a broken-image
//! handler that swaps in the category default at runtime.

use crate::text::non_blank;
use takulog_api::response::{Character, Run, Scenario};

pub const DEFAULT_CHARACTER_IMAGE: &str = "/img/character/default.png";
pub const DEFAULT_SCENARIO_COVER: &str = "/img/scenario/default.png";
pub const DEFAULT_SESSION_COVER: &str = "/img/session/default.png";

/// `/img/{category}/{id}.png`
pub fn image_path(category: &str, id: &str) -> String {
    format!("/img/{category}/{id}.png")
}

/// Explicit image field if present, otherwise the conventional path.
pub fn character_image(character: &Character) -> String {
    match non_blank(character.image.as_deref()) {
        Some(image) => image.to_string(),
        None => image_path("character", &character.id),
    }
}

pub fn scenario_cover(scenario: &Scenario) -> String {
    match non_blank(scenario.cover.as_deref()) {
        Some(cover) => cover.to_string(),
        None => image_path("scenario", &scenario.id),
    }
}

/// Run covers fall back through the scenario's cover to the session default.
pub fn run_cover(run: &Run, scenario: Option<&Scenario>) -> String {
    if let Some(cover) = non_blank(run.cover.as_deref()) {
        return cover.to_string();
    }
    if let Some(cover) = scenario.and_then(|s| non_blank(s.cover.as_deref())) {
        return cover.to_string();
    }
    DEFAULT_SESSION_COVER.to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    fn scenario(id: &str, cover: Option<&str>) -> Scenario {
        Scenario {
            id: id.to_string(),
            title: None,
            system: None,
            description: None,
            notes: None,
            tags: Vec::new(),
            cover: cover.map(str::to_string),
        }
    }

    fn run(cover: Option<&str>) -> Run {
        Run {
            id: "r1".to_string(),
            title: None,
            scenario_id: None,
            gm: None,
            players: Vec::new(),
            status: Default::default(),
            characters: Vec::new(),
            cover: cover.map(str::to_string),
        }
    }

    #[test]
    fn explicit_cover_wins() {
        let s = scenario("sc1", Some("/img/scenario/custom.png"));
        assert_eq!(scenario_cover(&s), "/img/scenario/custom.png");
    }

    #[test]
    fn blank_cover_falls_back_to_convention() {
        let s = scenario("sc1", Some("   "));
        assert_eq!(scenario_cover(&s), "/img/scenario/sc1.png");
    }

    #[test]
    fn run_cover_chains_to_scenario_then_default() {
        let s = scenario("sc1", Some("/img/scenario/sc1.png"));
        assert_eq!(run_cover(&run(None), Some(&s)), "/img/scenario/sc1.png");
        assert_eq!(
            run_cover(&run(Some("/img/session/r1.png")), Some(&s)),
            "/img/session/r1.png"
        );
        assert_eq!(
            run_cover(&run(None), Some(&scenario("sc1", None))),
            DEFAULT_SESSION_COVER
        );
        assert_eq!(run_cover(&run(None), None), DEFAULT_SESSION_COVER);
    }
}
