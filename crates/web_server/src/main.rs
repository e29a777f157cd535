//! Main entry point for the campground listings server.
//! This crate wires the store, the request pipeline and the HTTP server together.

use std::sync::Arc;

use actix_web::{
    App, HttpServer,
    middleware::{Logger, NormalizePath},
    web,
};
use campgrounds::{CampgroundStore, MemoryCampgroundStore, PgCampgroundStore};
use postgres::database::*;
use sqlx::PgPool;
use web_handlers::{MethodOverride, configure_routes};

/// Server settings loaded from the environment
mod config;
use config::{ServerConfig, StoreBackend};

/// Connects to PostgreSQL and prepares the schema.
///
/// In strict mode an unreachable database stops the process. Otherwise the
/// failure is logged and a lazily connecting pool is returned, so requests
/// fail individually with a 500 until the database comes back.
async fn connect_store(config: &ServerConfig) -> PgPool {
    match create_connection_pool(&config.database_url).await {
        Ok(pool) => {
            log::info!("🗃️ Database pool created successfully");

            if let Err(e) = test_connection(&pool).await {
                log::error!("❌ Database connection test failed: {}", e);
            }
            if let Err(e) = ensure_schema(&pool).await {
                log::error!("❌ Failed to prepare campgrounds schema: {}", e);
            }
            pool
        }
        Err(e) if config.db_startup_strict => {
            log::error!("❌ Failed to create database pool: {}", e);
            log::error!("💡 Make sure PostgreSQL is running or set DB_STARTUP_STRICT=false");
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("❌ Failed to create database pool: {}", e);
            log::warn!("🔧 Continuing without a database; requests will fail until it is reachable");

            match create_lazy_pool(&config.database_url) {
                Ok(pool) => pool,
                Err(e) => {
                    log::error!("❌ Invalid DATABASE_URL: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting campground server...");

    let config = ServerConfig::from_env();
    log::info!("🏕️ Using {} campground store", config.store_backend);

    let store: Arc<dyn CampgroundStore> = match config.store_backend {
        StoreBackend::Postgres => Arc::new(PgCampgroundStore::new(connect_store(&config).await)),
        StoreBackend::Memory => Arc::new(MemoryCampgroundStore::new()),
    };
    let store = web::Data::from(store);

    log::info!(
        "🌐 Server will be available at: http://{}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(MethodOverride)
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
