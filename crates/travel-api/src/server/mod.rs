//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};
use travel_cache::{RedisPool, RedisSessionStore};
use travel_common::{AppConfig, AppError, SessionTokenService};
use travel_core::{SnowflakeGenerator, UPLOADS_ROOT};
use travel_db::{
    create_pool, run_migrations, PgAdminRepository, PgBlogRepository, PgContactMessageRepository,
    PgDestinationRepository, PgEmployeeRepository, PgPartnerRepository, PoolConfig,
};
use travel_service::{AuthService, LocalImageStore, ServiceContextBuilder};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Stored image paths are `uploads/<category>/<file>` relative to the
/// storage root, so they resolve directly as URLs. Health checks and
/// `/uploads` sit outside the API stack so they are never rate limited.
pub fn create_app(state: AppState) -> Router {
    let api = apply_middleware(create_router(), state.config());
    let uploads = ServeDir::new(state.storage_root().join(UPLOADS_ROOT));

    api.merge(health_routes())
        .nest_service("/uploads", uploads)
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations applied");
    }

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    if let Err(e) = redis_pool.health_check().await {
        warn!(error = %e, "Redis is not reachable yet");
    }
    let session_store = Arc::new(RedisSessionStore::new(redis_pool.clone()));
    let shared_redis = Arc::new(redis_pool);

    // Image storage
    let image_store = LocalImageStore::new(&config.storage.root_dir);
    image_store
        .ensure_dirs()
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;
    info!(root = %image_store.root().display(), "Upload directory ready");

    let token_service = Arc::new(SessionTokenService::new(
        &config.session.secret,
        config.session.ttl_secs,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .redis_pool(shared_redis)
        .blog_repo(Arc::new(PgBlogRepository::new(pool.clone())))
        .destination_repo(Arc::new(PgDestinationRepository::new(pool.clone())))
        .partner_repo(Arc::new(PgPartnerRepository::new(pool.clone())))
        .employee_repo(Arc::new(PgEmployeeRepository::new(pool.clone())))
        .admin_repo(Arc::new(PgAdminRepository::new(pool.clone())))
        .contact_message_repo(Arc::new(PgContactMessageRepository::new(pool)))
        .session_store(session_store)
        .image_store(Arc::new(image_store))
        .token_service(token_service)
        .snowflake_generator(snowflake_generator)
        .max_upload_bytes(config.storage.max_file_size_bytes())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    if let Some(seed) = &config.admin {
        AuthService::new(&service_context).seed_admin(seed).await?;
    }

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
