//! Energy Profile server.
//!
//! Loads configuration from the environment, selects PostgreSQL or
//! in-memory storage, and serves the REST API until Ctrl+C or SIGTERM.

use std::sync::Arc;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use energy_profile::adapters::http::{api_router, ApiState};
use energy_profile::adapters::{
    InMemoryProfileStore, PostgresProfileReader, PostgresProfileRepository,
};
use energy_profile::config::{AppConfig, ConfigError, DatabaseConfig, ValidationError};
use energy_profile::ports::{ProfileReader, ProfileRepository};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database connection failed: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let (repository, reader) = storage(config.database.as_ref()).await?;
    let state = ApiState::new(
        repository,
        reader,
        config.history.max_profiles,
        config.features.verbose_errors,
    );
    let app = api_router(state, &config.server, &config.features);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        version = env!("CARGO_PKG_VERSION"),
        "energy profile API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("energy profile API shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.clone().into());

    if config.features.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn storage(
    database: Option<&DatabaseConfig>,
) -> Result<(Arc<dyn ProfileRepository>, Arc<dyn ProfileReader>), StartupError> {
    let Some(database) = database else {
        tracing::warn!("no database configured, profiles are kept in memory");
        let store = Arc::new(InMemoryProfileStore::new());
        let repository: Arc<dyn ProfileRepository> = store.clone();
        let reader: Arc<dyn ProfileReader> = store;
        return Ok((repository, reader));
    };

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(database.url.expose_secret())
        .await
        .map_err(StartupError::Database)?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let repository: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));
    let reader: Arc<dyn ProfileReader> = Arc::new(PostgresProfileReader::new(pool));
    Ok((repository, reader))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
