//! HTTP handlers for the procedure API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::prompt;
use crate::state::AppState;

use procedure_engine::{assemble_sections, build_document, render_docx};

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Handler: GET /
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "compliance-procedure-generator-api",
    })
}

/// Handler: GET /api/teams
pub async fn list_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams: Vec<Team> = sqlx::query_as("SELECT id, name FROM teams ORDER BY name")
        .fetch_all(&state.db)
        .await?;

    tracing::info!(count = teams.len(), "retrieved teams");
    Ok(Json(teams))
}

/// Handler: GET /api/teams/:id/questions
pub async fn team_questions(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<i32>,
) -> Result<Json<TeamQuestionsResponse>, ApiError> {
    let row: Option<(i32, String, Option<serde_json::Value>)> =
        sqlx::query_as("SELECT id, name, questions FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_optional(&state.db)
            .await?;

    let (id, name, questions) = row.ok_or(ApiError::TeamNotFound(team_id))?;

    tracing::info!(team = %name, "retrieved team questions");
    Ok(Json(TeamQuestionsResponse {
        team_id: id,
        team_name: name,
        questions: questions.unwrap_or_else(|| serde_json::Value::Array(Vec::new())),
    }))
}

/// Handler: POST /api/submit_answers
///
/// Runs the full generation pipeline: Q/A transcript -> completion ->
/// section assembly -> document build -> storage -> submission upsert.
pub async fn submit_answers(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Json<SubmitAnswersResponse>, ApiError> {
    if req.answers.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Team ID and answers are required".to_string(),
        ));
    }

    let transcript = prompt::format_transcript(&req.answers);
    let system = prompt::build_system_prompt(&state.template.full_text());

    let generated = state.llm.complete(&system, &transcript).await?;

    let sections = assemble_sections(&generated, &state.template.headings());
    let document = build_document(&state.template, &sections);
    let bytes = render_docx(&document)?;

    let document_name = format!("{}_procedure_document.docx", req.team_id);
    state.store.save(&document_name, bytes).await?;

    // The document is already in storage at this point; a failed upsert
    // leaves it unreferenced and the request still reports success.
    if let Err(e) = record_submission(&state, &req, &document_name).await {
        tracing::error!("Database upsert error: {}", e);
    }

    tracing::info!(
        team_id = req.team_id,
        document = %document_name,
        "generated procedure document"
    );

    Ok(Json(SubmitAnswersResponse {
        success: true,
        document_name: document_name.clone(),
        download_url: format!("/api/download/{}", document_name),
        message: "Document generated successfully".to_string(),
    }))
}

/// Upsert the latest submission for a team, overwriting any prior row.
async fn record_submission(
    state: &AppState,
    req: &SubmitAnswersRequest,
    document_name: &str,
) -> anyhow::Result<()> {
    let submission = serde_json::to_value(req)?;

    sqlx::query(
        r#"
        INSERT INTO teams_compliance_procedures
            (team_id, document_name, submission_data, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        ON CONFLICT (team_id) DO UPDATE SET
            document_name = EXCLUDED.document_name,
            submission_data = EXCLUDED.submission_data,
            status = EXCLUDED.status,
            updated_at = NOW()
        "#,
    )
    .bind(req.team_id)
    .bind(document_name)
    .bind(submission)
    .bind("generated")
    .execute(&state.db)
    .await?;

    Ok(())
}

/// Handler: GET /api/download/:filename
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let safe_name = sanitize_filename(&filename)
        .ok_or_else(|| ApiError::InvalidRequest("Invalid filename".to_string()))?;

    if !state.store.exists(safe_name).await? {
        return Err(ApiError::DocumentNotFound(safe_name.to_string()));
    }

    let bytes = state.store.get(safe_name).await?;

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), DOCX_MIME.to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", safe_name),
            ),
        ],
        bytes,
    ))
}

/// Reject names that could escape the documents directory.
fn sanitize_filename(name: &str) -> Option<&str> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_accepts_generated_names() {
        assert_eq!(
            sanitize_filename("12_procedure_document.docx"),
            Some("12_procedure_document.docx")
        );
    }

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert_eq!(sanitize_filename("../secrets.docx"), None);
        assert_eq!(sanitize_filename("a/b.docx"), None);
        assert_eq!(sanitize_filename("a\\b.docx"), None);
        assert_eq!(sanitize_filename(""), None);
    }
}
