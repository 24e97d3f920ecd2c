//! Client context for communicating with the API.

use crate::error::{WebError, WebResult};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use takulog_api::{request as req, response as res};
use url::form_urlencoded;

#[derive(Debug, Clone)]
pub struct Client {
    api_base: Arc<str>,
}

/// Non-API methods
impl Client {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: Arc::from(api_base.trim_end_matches('/')),
        }
    }

    fn url(&self, resource: &str, query: Option<&str>) -> String {
        match query {
            Some(query) => format!("{}/api/{resource}?{query}", self.api_base),
            None => format!("{}/api/{resource}", self.api_base),
        }
    }

    async fn assert_success(&self, res: &reqwasm::http::Response) -> WebResult<()> {
        match res.status() {
            100..=399 => Ok(()),
            status => {
                let bytes = res.binary().await.unwrap_or_default();
                let body = match serde_json::from_slice::<res::Error>(&bytes) {
                    Ok(error) => error.message,
                    Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
                };
                Err(WebError::Api { status, body })
            }
        }
    }

    /// GET with cache bypassed; an empty success body decodes to the
    /// type's default.
    async fn get<T>(&self, resource: &str, query: Option<&str>) -> WebResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let res = reqwasm::http::Request::get(&self.url(resource, query))
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(WebError::http)?;
        self.assert_success(&res).await?;
        let text = res.text().await.map_err(WebError::http)?;
        if text.is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(WebError::json)
    }

    async fn post<B>(&self, resource: &str, payload: &B) -> WebResult<()>
    where
        B: Serialize,
    {
        let json = serde_json::to_string(payload).map_err(WebError::json)?;
        let res = reqwasm::http::Request::post(&self.url(resource, None))
            .header("Content-Type", "application/json")
            .body(json)
            .send()
            .await
            .map_err(WebError::http)?;
        self.assert_success(&res).await?;
        Ok(())
    }
}

fn query_pair(key: &str, value: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}

/// API methods
impl Client {
    pub async fn characters(&self) -> WebResult<Vec<res::Character>> {
        tracing::info!("Fetching characters");

        let characters: Vec<res::Character> = self.get("characters", None).await?;

        tracing::info!("Fetched {} characters", characters.len());
        Ok(characters)
    }

    pub async fn scenarios(&self) -> WebResult<Vec<res::Scenario>> {
        tracing::info!("Fetching scenarios");

        let scenarios: Vec<res::Scenario> = self.get("scenarios", None).await?;

        tracing::info!("Fetched {} scenarios", scenarios.len());
        Ok(scenarios)
    }

    pub async fn runs(&self) -> WebResult<Vec<res::Run>> {
        tracing::info!("Fetching runs");

        let runs: Vec<res::Run> = self.get("runs", None).await?;

        tracing::info!("Fetched {} runs", runs.len());
        Ok(runs)
    }

    pub async fn sessions(&self) -> WebResult<Vec<res::Session>> {
        tracing::info!("Fetching sessions");

        let sessions: Vec<res::Session> = self.get("sessions", None).await?;

        tracing::info!("Fetched {} sessions", sessions.len());
        Ok(sessions)
    }

    pub async fn comments(
        &self,
        target_type: res::TargetType,
        target_id: &str,
    ) -> WebResult<Vec<res::Comment>> {
        tracing::info!("Fetching comments for {target_type:?} {target_id}");

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("type", target_type.as_str())
            .append_pair("id", target_id)
            .finish();
        let comments = self.get("comments", Some(&query)).await?;

        Ok(comments)
    }

    pub async fn recent_comments(&self, limit: u32) -> WebResult<Vec<res::Comment>> {
        tracing::info!("Fetching {limit} recent comments");

        let query = query_pair("limit", &limit.to_string());
        let comments = self.get("comments/recent", Some(&query)).await?;

        Ok(comments)
    }

    pub async fn new_comment(&self, comment: &req::NewComment<'_>) -> WebResult<()> {
        tracing::info!(
            "Posting comment on {:?} {}",
            comment.target_type,
            comment.target_id
        );

        self.post("comments", comment).await?;

        tracing::info!("Posted comment");
        Ok(())
    }

    pub async fn posts(&self) -> WebResult<Vec<res::Post>> {
        tracing::info!("Fetching posts");

        let posts: Vec<res::Post> = self.get("posts", None).await?;

        tracing::info!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    pub async fn new_post(&self, post: &req::NewPost<'_>) -> WebResult<()> {
        tracing::info!("Posting to the board as {}", post.author);

        self.post("posts", post).await?;

        tracing::info!("Posted to the board");
        Ok(())
    }

    pub async fn character_skills(
        &self,
        character_id: &str,
    ) -> WebResult<Vec<res::CharacterSkill>> {
        tracing::info!("Fetching skills for character {character_id}");

        let query = query_pair("character_id", character_id);
        let skills = self.get("character_skill_list", Some(&query)).await?;

        Ok(skills)
    }

    pub async fn character_attributes(
        &self,
        character_id: &str,
    ) -> WebResult<Vec<res::CharacterAttribute>> {
        tracing::info!("Fetching attributes for character {character_id}");

        let query = query_pair("character_id", character_id);
        let attributes = self.get("character_attributes", Some(&query)).await?;

        Ok(attributes)
    }

    pub async fn system_attributes(
        &self,
        system: &str,
    ) -> WebResult<Vec<res::SystemAttributeDef>> {
        tracing::info!("Fetching attribute schema for {system}");

        let query = query_pair("system", system);
        let defs = self.get("system_attributes", Some(&query)).await?;

        Ok(defs)
    }

    /// Ids of the scenarios a character has played through.
    pub async fn character_scenarios(&self, character_id: &str) -> WebResult<Vec<String>> {
        tracing::info!("Fetching scenarios for character {character_id}");

        let query = query_pair("character_id", character_id);
        let ids = self.get("character_scenarios", Some(&query)).await?;

        Ok(ids)
    }

    /// Ids of the characters that have played a scenario.
    pub async fn scenario_characters(&self, scenario_id: &str) -> WebResult<Vec<String>> {
        tracing::info!("Fetching characters for scenario {scenario_id}");

        let query = query_pair("scenario_id", scenario_id);
        let ids = self.get("scenario_characters", Some(&query)).await?;

        Ok(ids)
    }

    pub async fn character_last_sessions(&self) -> WebResult<Vec<res::CharacterLastSession>> {
        tracing::info!("Fetching last sessions per character");

        let rows = self.get("character_last_session", None).await?;

        Ok(rows)
    }
}
