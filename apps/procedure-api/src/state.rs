//! Application state for the procedure API

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

use llm_bridge::CompletionClient;
use procedure_engine::Template;
use procedure_storage::{DocumentStore, StorageConfig};

pub struct AppState {
    pub db: PgPool,
    pub store: DocumentStore,
    pub llm: CompletionClient,
    pub template: Template,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let database_url = database_url();
        tracing::info!("Connecting to database");

        let db = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
            .context("failed to connect to PostgreSQL")?;

        // Run migrations
        run_migrations(&db).await?;

        let store = DocumentStore::open(StorageConfig::from_env()?)?;
        let llm = CompletionClient::from_env()?;

        // The template is loaded once; a missing or malformed template is
        // a fatal configuration error, not a per-request failure.
        let template_path =
            std::env::var("TEMPLATE_PATH").unwrap_or_else(|_| "Procedure.docx".to_string());
        let template = Template::from_docx_file(&template_path)
            .with_context(|| format!("failed to load template from {}", template_path))?;
        tracing::info!(
            path = %template_path,
            headings = template.headings().len(),
            "loaded procedure template"
        );

        Ok(Self {
            db,
            store,
            llm,
            template,
        })
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the
/// individual `DB_*` variables with development defaults.
fn database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }
    let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let name = std::env::var("DB_NAME").unwrap_or_else(|_| "compliance_admin".to_string());
    let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = std::env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string());
    let port = std::env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

async fn run_migrations(pool: &PgPool) -> Result<()> {
    tracing::info!("Running database migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            questions JSONB NOT NULL DEFAULT '[]'
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teams_compliance_procedures (
            team_id INTEGER PRIMARY KEY,
            document_name TEXT NOT NULL,
            submission_data JSONB NOT NULL,
            status TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
