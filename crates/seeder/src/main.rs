//! Seeds the campgrounds table with random listings.
//! Every existing campground is deleted first.

use anyhow::Context;
use campgrounds::{CampgroundStore, PgCampgroundStore};
use postgres::database::*;
use rand::Rng;

/// Random campground generation
mod seed_helpers;
use seed_helpers::random_campground;

/// Number of campgrounds created when `SEED_COUNT` is not set
const DEFAULT_SEED_COUNT: usize = 50;

/// Inserts `count` random campgrounds, returning how many were created
async fn seed<R: Rng + ?Sized>(
    store: &dyn CampgroundStore,
    count: usize,
    rng: &mut R,
) -> anyhow::Result<usize> {
    let batch: Vec<_> = (0..count).map(|_| random_campground(rng)).collect();

    for fields in batch {
        store
            .create(fields)
            .await
            .context("failed to insert seed campground")?;
    }

    Ok(count)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let count = match std::env::var("SEED_COUNT") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SEED_COUNT must be a number, got {:?}", raw))?,
        Err(_) => DEFAULT_SEED_COUNT,
    };

    let pool = create_connection_pool(&database_url_from_env())
        .await
        .context("failed to connect to the database")?;
    ensure_schema(&pool).await.context("failed to prepare schema")?;

    let store = PgCampgroundStore::new(pool.clone());
    let removed = store.delete_all().await?;
    log::info!("🧹 Removed {} existing campgrounds", removed);

    let created = seed(&store, count, &mut rand::rng()).await?;
    log::info!("🌱 Seeded {} campgrounds", created);

    pool.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campgrounds::MemoryCampgroundStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_seed_inserts_requested_count() {
        let store = MemoryCampgroundStore::new();
        let mut rng = StdRng::seed_from_u64(42);

        let created = seed(&store, 12, &mut rng).await.unwrap();

        assert_eq!(created, 12);
        assert_eq!(store.list_all().await.unwrap().len(), 12);
    }
}
