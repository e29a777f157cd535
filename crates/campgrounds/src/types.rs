use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted campground listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campground {
    /// Identifier assigned by the store on creation
    pub id: Uuid,
    /// Display name of the campground
    pub title: String,
    /// Free-form location, e.g. "Boulder, CO"
    pub location: String,
    /// URL of the cover image
    pub image: String,
    /// Long description
    pub description: String,
    /// Nightly price
    pub price: f64,
}

/// The client-writable part of a campground.
///
/// Values of this type only come out of the schema validator, so every
/// instance already satisfies the field constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampgroundFields {
    /// Display name of the campground
    pub title: String,
    /// Free-form location
    pub location: String,
    /// URL of the cover image
    pub image: String,
    /// Long description
    pub description: String,
    /// Nightly price, never negative
    pub price: f64,
}

impl Campground {
    /// Builds an entity from an id and a full set of fields
    pub fn from_fields(id: Uuid, fields: CampgroundFields) -> Self {
        Self {
            id,
            title: fields.title,
            location: fields.location,
            image: fields.image,
            description: fields.description,
            price: fields.price,
        }
    }

    /// Returns the writable fields of this campground
    pub fn fields(&self) -> CampgroundFields {
        CampgroundFields {
            title: self.title.clone(),
            location: self.location.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }

    /// Replaces every writable field, keeping the id
    pub fn replace_fields(&mut self, fields: CampgroundFields) {
        self.title = fields.title;
        self.location = fields.location;
        self.image = fields.image;
        self.description = fields.description;
        self.price = fields.price;
    }
}

/// Custom error type for store operations
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The id does not have the shape of a store identifier
    #[error("Invalid campground id: {0}")]
    InvalidId(String),

    /// The id is well formed but no campground has it
    #[error("Campground not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Parses a raw path segment into a campground id
pub fn parse_campground_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}
