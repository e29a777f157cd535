use uuid::Uuid;

use crate::types::*;

/// Data-access contract for campgrounds.
///
/// Implementations apply no business validation; callers hand in fields that
/// already passed the schema validator. Ids arrive as raw path segments and a
/// malformed one is reported as [`StoreError::InvalidId`], never as
/// [`StoreError::NotFound`].
#[async_trait::async_trait]
pub trait CampgroundStore: Send + Sync {
    /// Persists a new campground under a freshly assigned id
    async fn create(&self, fields: CampgroundFields) -> Result<Campground, StoreError>;

    /// Returns every campground in insertion order
    async fn list_all(&self) -> Result<Vec<Campground>, StoreError>;

    /// Looks a campground up by id
    async fn get_by_id(&self, id: &str) -> Result<Campground, StoreError>;

    /// Replaces all writable fields of an existing campground
    async fn update_by_id(
        &self,
        id: &str,
        fields: CampgroundFields,
    ) -> Result<Campground, StoreError>;

    /// Removes a campground
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Generates an id for a new campground
pub fn new_campground_id() -> Uuid {
    Uuid::new_v4()
}
