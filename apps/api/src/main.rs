mod catalog;
mod coaching;
mod config;
mod db;
mod errors;
mod matching;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::coaching::{FeedbackTableScorer, TemplateIdeaGenerator, TemplateQuestionGenerator};
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::profile::session::{AnonymousIdentity, SessionRegistry};
use crate::profile::store::PgProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TechPath API v{}", env!("CARGO_PKG_VERSION"));

    // Static reference data, validated before the server accepts traffic
    let catalog = Arc::new(Catalog::load()?);
    info!(
        "Catalog loaded: {} roles, {} projects, {} hackathons, {} internships",
        catalog.roles.len(),
        catalog.projects.len(),
        catalog.hackathons.len(),
        catalog.internships.len()
    );

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Build app state
    let state = AppState {
        catalog,
        sessions: SessionRegistry::new(),
        store: Arc::new(PgProfileStore::new(db)),
        identity: Arc::new(AnonymousIdentity),
        question_generator: Arc::new(TemplateQuestionGenerator::default()),
        answer_scorer: Arc::new(FeedbackTableScorer::default()),
        idea_generator: Arc::new(TemplateIdeaGenerator::default()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
