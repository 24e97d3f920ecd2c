//! Types for requests sent to the API.

use crate::response::TargetType;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewComment<'a> {
    pub target_type: TargetType,
    pub target_id: Cow<'a, str>,
    pub author: Cow<'a, str>,
    pub body: Cow<'a, str>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewPost<'a> {
    pub author: Cow<'a, str>,
    pub body: Cow<'a, str>,
}
