//! Data models for the procedure API

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

/// A team eligible to submit answers
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

/// Questions configured for a team
#[derive(Debug, Clone, Serialize)]
pub struct TeamQuestionsResponse {
    pub team_id: i32,
    pub team_name: String,
    /// Question list as stored; opaque to the server
    pub questions: serde_json::Value,
}

/// One answered question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub question: String,
    pub answer: String,
}

/// Request to generate a procedure document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswersRequest {
    pub team_id: i32,
    #[serde(default)]
    pub team_name: Option<String>,
    /// Keyed by question id; iterated in key order for the transcript
    pub answers: BTreeMap<String, AnswerEntry>,
}

/// Response after a successful generation
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswersResponse {
    pub success: bool,
    pub document_name: String,
    pub download_url: String,
    pub message: String,
}
