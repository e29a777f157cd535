use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::*;
use crate::types::*;

/// Campground store that keeps everything in process memory.
///
/// Insertion order is the order of the backing vector. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryCampgroundStore {
    campgrounds: Arc<RwLock<Vec<Campground>>>,
}

impl MemoryCampgroundStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored campgrounds
    pub async fn len(&self) -> usize {
        self.campgrounds.read().await.len()
    }

    /// Whether the store holds no campgrounds
    pub async fn is_empty(&self) -> bool {
        self.campgrounds.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CampgroundStore for MemoryCampgroundStore {
    async fn create(&self, fields: CampgroundFields) -> Result<Campground, StoreError> {
        let campground = Campground::from_fields(new_campground_id(), fields);
        self.campgrounds.write().await.push(campground.clone());
        Ok(campground)
    }

    async fn list_all(&self) -> Result<Vec<Campground>, StoreError> {
        Ok(self.campgrounds.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Campground, StoreError> {
        let id = parse_campground_id(id)?;
        self.campgrounds
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: CampgroundFields,
    ) -> Result<Campground, StoreError> {
        let id = parse_campground_id(id)?;
        let mut campgrounds = self.campgrounds.write().await;
        let campground = campgrounds
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;

        campground.replace_fields(fields);
        Ok(campground.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_campground_id(id)?;
        let mut campgrounds = self.campgrounds.write().await;
        let position = campgrounds
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;

        campgrounds.remove(position);
        Ok(())
    }
}
