//! FairLend Gateway binary.
//!
//! Loads configuration, connects the collaborators, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fairlend_gateway::adapters::auth::JwtTokenVerifier;
use fairlend_gateway::adapters::http::{
    api_router, ask::AskHandlers, consent::ConsentHandlers, governance::GovernanceHandlers,
    insight::InsightHandlers, users::UserHandlers,
};
use fairlend_gateway::adapters::monitor::{AiBackendClient, AiBackendConfig};
use fairlend_gateway::adapters::postgres::{PgConsentStore, PgProfileReader};
use fairlend_gateway::application::governance::GovernanceSummaryCache;
use fairlend_gateway::application::handlers::{
    AskAiHandler, BuildInsightHandler, FindUserHandler, ListUsersHandler, RecordConsentHandler,
    VerifyConsentHandler,
};
use fairlend_gateway::config::AppConfig;
use fairlend_gateway::ports::{ConsentStore, DecisionExplainer, FairnessMonitor, ProfileReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Collaborators behind their ports.
    let profile_reader: Arc<dyn ProfileReader> = Arc::new(PgProfileReader::new(pool.clone()));
    let consent_store: Arc<dyn ConsentStore> = Arc::new(PgConsentStore::new(pool));

    let mut backend_config = AiBackendConfig::new(config.monitor.base_url.clone())
        .with_fetch_timeout(config.monitor.fetch_timeout())
        .with_mutate_timeout(config.monitor.mutate_timeout());
    if let Some(token) = config.monitor.bearer_token.clone() {
        backend_config = backend_config.with_bearer_token(token);
    }
    let backend = Arc::new(AiBackendClient::new(backend_config)?);
    let monitor: Arc<dyn FairnessMonitor> = backend.clone();
    let explainer: Arc<dyn DecisionExplainer> = backend;

    // Application services.
    let verify_consent = Arc::new(VerifyConsentHandler::new(consent_store.clone()));
    let cache = Arc::new(GovernanceSummaryCache::new(monitor));

    let user_handlers = UserHandlers::new(
        Arc::new(FindUserHandler::new(profile_reader.clone())),
        Arc::new(ListUsersHandler::new(profile_reader.clone())),
    );
    let insight_handlers =
        InsightHandlers::new(Arc::new(BuildInsightHandler::new(profile_reader)));
    let consent_handlers =
        ConsentHandlers::new(Arc::new(RecordConsentHandler::new(consent_store)));
    let ask_handlers = AskHandlers::new(Arc::new(AskAiHandler::new(verify_consent, explainer)));
    let governance_handlers = GovernanceHandlers::new(cache);

    let verifier = Arc::new(JwtTokenVerifier::new(
        &config.auth.jwt_secret,
        &config.auth.issuer,
    ));

    let app = api_router(
        user_handlers,
        insight_handlers,
        consent_handlers,
        ask_handlers,
        governance_handlers,
        verifier,
    )
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )))
    .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "FairLend gateway listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
