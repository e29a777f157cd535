use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::store::*;
use crate::types::*;

/// Campground store backed by the `campgrounds` table
#[derive(Clone)]
pub struct PgCampgroundStore {
    pool: PgPool,
}

impl PgCampgroundStore {
    /// Creates a new instance of `PgCampgroundStore` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Deletes every campground, returning how many rows were removed
    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM campgrounds")
            .execute(&self.pool)
            .await?;

        debug!("Deleted {} campgrounds", result.rows_affected());
        Ok(result.rows_affected())
    }
}

fn campground_from_row(row: &PgRow) -> Campground {
    Campground {
        id: row.get("id"),
        title: row.get("title"),
        location: row.get("location"),
        image: row.get("image"),
        description: row.get("description"),
        price: row.get("price"),
    }
}

#[async_trait::async_trait]
impl CampgroundStore for PgCampgroundStore {
    async fn create(&self, fields: CampgroundFields) -> Result<Campground, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO campgrounds (id, title, location, image, description, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, location, image, description, price
            "#,
        )
        .bind(new_campground_id())
        .bind(&fields.title)
        .bind(&fields.location)
        .bind(&fields.image)
        .bind(&fields.description)
        .bind(fields.price)
        .fetch_one(&self.pool)
        .await?;

        let campground = campground_from_row(&row);
        debug!(id = %campground.id, "Created campground");
        Ok(campground)
    }

    async fn list_all(&self) -> Result<Vec<Campground>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, location, image, description, price
            FROM campgrounds
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(campground_from_row).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Campground, StoreError> {
        let id = parse_campground_id(id)?;

        let row = sqlx::query(
            r#"
            SELECT id, title, location, image, description, price
            FROM campgrounds
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(campground_from_row(&row)),
            None => Err(StoreError::NotFound),
        }
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: CampgroundFields,
    ) -> Result<Campground, StoreError> {
        let id = parse_campground_id(id)?;

        let row = sqlx::query(
            r#"
            UPDATE campgrounds
            SET title = $1,
                location = $2,
                image = $3,
                description = $4,
                price = $5
            WHERE id = $6
            RETURNING id, title, location, image, description, price
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.location)
        .bind(&fields.image)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                debug!(%id, "Updated campground");
                Ok(campground_from_row(&row))
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_campground_id(id)?;

        let result = sqlx::query("DELETE FROM campgrounds WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        debug!(%id, "Deleted campground");
        Ok(())
    }
}
