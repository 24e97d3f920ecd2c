//! Types for responses from the API.
//!
//! All endpoints return JSON arrays of plain records. Absent fields mean
//! "unset", so everything optional defaults instead of failing, and the
//! closed status enumerations fold unrecognized values into `Unknown`
//! rather than rejecting the record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub state: Option<CharacterState>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ability_str: Option<i32>,
    #[serde(default)]
    pub ability_con: Option<i32>,
    #[serde(default)]
    pub ability_pow: Option<i32>,
    #[serde(default)]
    pub ability_dex: Option<i32>,
    #[serde(default)]
    pub ability_app: Option<i32>,
    #[serde(default)]
    pub ability_siz: Option<i32>,
    #[serde(default)]
    pub ability_int: Option<i32>,
    #[serde(default)]
    pub ability_edu: Option<i32>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Narrative outcome of a character across the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterState {
    Lost,
    Rescued,
    Survived,
    #[serde(other)]
    Unknown,
}

impl CharacterState {
    pub fn badge(self) -> &'static str {
        match self {
            CharacterState::Lost => "LOST",
            CharacterState::Rescued => "RESCUED",
            CharacterState::Survived => "SURVIVED",
            CharacterState::Unknown => "—",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CharacterState::Lost => "lost",
            CharacterState::Rescued => "rescued",
            CharacterState::Survived => "survived",
            CharacterState::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

/// One table ("卓") playing through a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub scenario_id: Option<String>,
    #[serde(default)]
    pub gm: Option<String>,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub status: RunStatus,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Active,
    Planning,
    Done,
    #[serde(other)]
    Unknown,
}

impl Default for RunStatus {
    fn default() -> Self {
        RunStatus::Unknown
    }
}

impl RunStatus {
    pub fn is_active(self) -> bool {
        matches!(self, RunStatus::Active)
    }

    /// Anything that has not finished counts as ongoing.
    pub fn is_ongoing(self) -> bool {
        !matches!(self, RunStatus::Done)
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            RunStatus::Active => "進行中",
            RunStatus::Planning => "予定中",
            RunStatus::Done => "終了済み",
            RunStatus::Unknown => "—",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            RunStatus::Active => "Active",
            RunStatus::Planning => "Planning",
            RunStatus::Done => "Done",
            RunStatus::Unknown => "—",
        }
    }

    pub fn css_class(self) -> &'static str {
        if self.is_active() {
            "active"
        } else {
            "done"
        }
    }
}

/// One scheduled or completed play date belonging to a run.
///
/// `start` stays a raw string here: the API has contained unparseable
/// timestamps before, and one bad row must not reject the whole list.
/// Parsing happens in the domain crate and invalid rows are filtered there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub run_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub replay_url: Option<String>,
    #[serde(default)]
    pub stream_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Done,
    #[serde(other)]
    Unknown,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Unknown
    }
}

impl SessionStatus {
    pub fn label_ja(self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "予定",
            SessionStatus::Done => "終了",
            SessionStatus::Unknown => "—",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Done => "done",
            SessionStatus::Unknown => "",
        }
    }
}

/// A comment on a character, scenario or session thread.
///
/// Session comments target the run id, since one thread covers the whole
/// table rather than a single play date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub target_type: TargetType,
    #[serde(default)]
    pub target_id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Character,
    Scenario,
    Session,
    #[serde(other)]
    Unknown,
}

impl Default for TargetType {
    fn default() -> Self {
        TargetType::Unknown
    }
}

impl TargetType {
    /// The wire value, as used in comment queries.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::Character => "character",
            TargetType::Scenario => "scenario",
            TargetType::Session => "session",
            TargetType::Unknown => "",
        }
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            TargetType::Character => "キャラクター",
            TargetType::Scenario => "シナリオ",
            TargetType::Session => "セッション",
            TargetType::Unknown => "",
        }
    }
}

/// A free-form bulletin board post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSkill {
    pub character_id: String,
    pub name: String,
    #[serde(default)]
    pub base_value: Option<i32>,
    #[serde(default)]
    pub override_value: Option<i32>,
}

impl CharacterSkill {
    /// The value shown on the sheet: an explicit override beats the base.
    pub fn display_value(&self) -> Option<i32> {
        self.override_value.or(self.base_value)
    }
}

/// Per-system stat schema, newer than the fixed `ability_*` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemAttributeDef {
    pub system: String,
    pub key: String,
    #[serde(default)]
    pub kind: AttributeKind,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Int,
    Emotion,
    #[serde(other)]
    Unknown,
}

impl Default for AttributeKind {
    fn default() -> Self {
        AttributeKind::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAttribute {
    pub character_id: String,
    pub key: String,
    #[serde(default)]
    pub value_int: Option<i32>,
    #[serde(default)]
    pub value_emotion: Option<String>,
}

/// Precomputed latest past session per character, used for list ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterLastSession {
    pub character_id: String,
    #[serde(default)]
    pub start: Option<String>,
}
