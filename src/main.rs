//! Taskboard HTTP server.
//!
//! Reads configuration from the environment (and a `.env` file when
//! present), selects the item store, optionally seeds demo items, and serves
//! the `/task` and `/todo` resources until Ctrl+C or SIGTERM.
//!
//! See [`taskboard::config`] for the recognised variables. `RUST_LOG`
//! controls log filtering (default `taskboard=info,tower_http=info`).

use std::process::ExitCode;
use std::sync::Arc;

use taskboard::{
    api,
    config::{AppConfig, ConfigError, StorageMode},
    item::{
        adapters::{
            memory::InMemoryItemRepository,
            postgres::{self, PostgresItemRepository},
        },
        domain::{Task, Todo},
        ports::{ItemRepository, ItemRepositoryError},
        services::{ItemService, ItemServiceError},
    },
    seed::seed_demo_items,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Failures that stop the server from starting or running.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("item store unavailable: {0}")]
    Store(#[from] ItemRepositoryError),
    #[error("demo data seeding failed: {0}")]
    Seed(#[from] ItemServiceError),
    #[error("server i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("start-up task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "taskboard stopped with an error");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    tracing::info!(
        storage_mode = ?config.storage_mode,
        seed_demo_data = config.seed_demo_data,
        "configuration loaded"
    );

    match config.storage_mode {
        StorageMode::InMemory => {
            let tasks = Arc::new(InMemoryItemRepository::<Task>::new());
            let todos = Arc::new(InMemoryItemRepository::<Todo>::new());
            serve(&config, tasks, todos).await
        }
        StorageMode::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or(ConfigError::MissingDatabaseUrl)?;
            let pool_size = config.pool_size;
            let pool = tokio::task::spawn_blocking(move || {
                let pool = postgres::connect_pool(&url, pool_size)?;
                postgres::apply_schema(&pool)?;
                Ok::<_, ItemRepositoryError>(pool)
            })
            .await??;
            tracing::info!(pool_size, "database schema ready");

            let tasks = Arc::new(PostgresItemRepository::<Task>::new(pool.clone()));
            let todos = Arc::new(PostgresItemRepository::<Todo>::new(pool));
            serve(&config, tasks, todos).await
        }
    }
}

async fn serve<TR, DR>(config: &AppConfig, tasks: Arc<TR>, todos: Arc<DR>) -> Result<(), StartupError>
where
    TR: ItemRepository<Task> + 'static,
    DR: ItemRepository<Todo> + 'static,
{
    let tasks = ItemService::new(tasks);
    let todos = ItemService::new(todos);

    if config.seed_demo_data {
        seed_demo_items(&tasks).await?;
        seed_demo_items(&todos).await?;
    }

    let address = config.socket_addr();
    let listener = TcpListener::bind(address).await?;
    tracing::info!(%address, "taskboard listening");

    axum::serve(listener, api::app(tasks, todos))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("taskboard shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
