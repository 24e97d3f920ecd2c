//! Detail-page links. Every detail page selects its entity through the
//! `id` query parameter.

use takulog_api::response::{Comment, TargetType};
use url::form_urlencoded;

fn with_id(page: &str, id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("id", id)
        .finish();
    format!("{page}?{query}")
}

pub fn character_detail(id: &str) -> String {
    with_id("/characters/detail", id)
}

pub fn scenario_detail(id: &str) -> String {
    with_id("/scenarios/detail", id)
}

/// Session threads hang off the run, so this is also the comment target.
pub fn session_detail(run_id: &str) -> String {
    with_id("/sessions/detail", run_id)
}

/// Where a comment links to; session comments carry a run id.
pub fn comment_target(comment: &Comment) -> Option<String> {
    match comment.target_type {
        TargetType::Character => Some(character_detail(&comment.target_id)),
        TargetType::Scenario => Some(scenario_detail(&comment.target_id)),
        TargetType::Session => Some(session_detail(&comment.target_id)),
        TargetType::Unknown => None,
    }
}
