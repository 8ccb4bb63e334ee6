use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reloomate_api::config::ServerConfig;
use reloomate_api::router::build_app_router;
use reloomate_api::state::AppState;
use reloomate_core::onboarding::OnboardingCatalog;
use reloomate_db::{MemoryProfileStore, PgProfileStore, ProfileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        environment = %config.environment,
        "Loaded server configuration"
    );

    // --- Onboarding catalog ---
    let onboarding = match &config.onboarding_catalog_path {
        Some(path) => {
            let catalog = OnboardingCatalog::from_path(path)
                .with_context(|| format!("Failed to load onboarding catalog {}", path.display()))?;
            tracing::info!(path = %path.display(), steps = catalog.len(), "Loaded onboarding catalog");
            catalog
        }
        None => OnboardingCatalog::builtin(),
    };

    // --- Profile store ---
    let profiles = build_profile_store(&config).await?;

    // --- App state & router ---
    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    let state = AppState::new(config, onboarding, profiles);
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` controls filtering; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reloomate_api=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Connect to PostgreSQL when `DATABASE_URL` is set, otherwise fall back to
/// the in-memory store.
async fn build_profile_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn ProfileStore>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, profiles are kept in memory");
        return Ok(Arc::new(MemoryProfileStore::new()));
    };

    let pool = reloomate_db::create_pool(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    reloomate_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    reloomate_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgProfileStore::new(pool)))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
