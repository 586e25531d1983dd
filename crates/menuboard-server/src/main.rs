//! # Menuboard Server
//!
//! Main entry point for the Menuboard catalog service: wires the MySQL
//! repositories into the service layer and serves the REST API.

use async_trait::async_trait;
use menuboard_config::ConfigLoader;
use menuboard_core::{MenuboardError, MenuboardResult};
use menuboard_repository::{create_pool, DatabasePool, MySqlCategoryRepository, MySqlMenuRepository};
use menuboard_rest::{create_router, AppState, ReadinessProbe};
use menuboard_service::{MenuService, MenuServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

/// Readiness backed by the database pool.
struct DatabaseReadiness(Arc<DatabasePool>);

#[async_trait]
impl ReadinessProbe for DatabaseReadiness {
    async fn is_ready(&self) -> bool {
        self.0.health_check().await.is_ok()
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    startup::print_banner();
    info!("Starting Menuboard Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> MenuboardResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Wire the layers explicitly: repositories into the service, the
    // service into the REST state
    let menu_repository = Arc::new(MySqlMenuRepository::new(db_pool.clone()));
    let category_repository = Arc::new(MySqlCategoryRepository::new(db_pool.clone()));

    let menu_service: Arc<dyn MenuService> = Arc::new(
        MenuServiceImpl::new(menu_repository, category_repository)
            .with_page_per_block(config.listing.page_block),
    );

    let readiness = Arc::new(DatabaseReadiness(db_pool.clone()));
    let app_state = AppState::new(menu_service, readiness);
    let router = create_router(app_state, &config.server);

    // Start REST server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);
    startup::print_startup_info(config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MenuboardError::Internal(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MenuboardError::Internal(format!("Server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,menuboard=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
