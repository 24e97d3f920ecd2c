//! Types for communication with the takulog API.

pub mod request;
pub mod response;
