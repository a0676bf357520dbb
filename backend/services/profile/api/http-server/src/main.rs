// backend/services/profile/api/http-server/src/main.rs

use std::sync::Arc;

use profile::infrastructure::api::http::{build_router, AppState};
use profile::infrastructure::github::GithubDirectoryGateway;
use profile::infrastructure::postgres::repositories::PostgresProfileRepository;
use profile::infrastructure::postgres::utils::run_postgres_migrations;
use shared_kernel::errors::{internal_err, AppResult};
use shared_kernel::infrastructure::postgres::factories::PostgresContext;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    run_server(&format!("0.0.0.0:{port}")).await
}

pub async fn run_server(addr: &str) -> AppResult<()> {
    // 1. Store
    let postgres = PostgresContext::builder()?.build().await?;
    run_postgres_migrations(&postgres.pool()).await?;
    let repo = Arc::new(PostgresProfileRepository::new(postgres.pool()));

    // 2. Annuaire amont
    let github_url =
        std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string());
    let directory = Arc::new(GithubDirectoryGateway::new(github_url)?);

    // 3. Cas d'usage + routes
    let state = AppState::new(repo, directory);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| internal_err(format!("bind {addr} failed: {e}")))?;

    tracing::info!("profile http server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| internal_err(format!("server stopped: {e}")))?;

    Ok(())
}
