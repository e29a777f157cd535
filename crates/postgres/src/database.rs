use sqlx::{PgPool, Row, postgres::PgPoolOptions};

/// Default connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/yelp_camp";

/// Reads `DATABASE_URL` from the environment, falling back to the local default.
pub fn database_url_from_env() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates a connection pool to the PostgreSQL database, connecting eagerly.
pub async fn create_connection_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Creates a pool that only opens connections on first use.
///
/// Used when the server is allowed to start against an unreachable database:
/// every store call then fails at I/O time and surfaces as a 500 fault.
pub fn create_lazy_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().connect_lazy(database_url)
}

/// Tests the database connection by executing a simple query.
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    let row = sqlx::query("SELECT 1 as test").fetch_one(pool).await?;

    let test_value: i32 = row.get("test");
    log::info!(
        "✅ Database connection successful! Test value: {}",
        test_value
    );

    Ok(())
}

/// Creates the `campgrounds` table if it does not exist yet.
///
/// `seq` only records insertion order for listing; it never leaves the store.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS campgrounds (
            id UUID PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            title TEXT NOT NULL,
            location TEXT NOT NULL,
            image TEXT NOT NULL,
            description TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    log::info!("🗃️ Campgrounds schema is ready");
    Ok(())
}
