//! Destination entity - a place the agency sells trips to

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{RichText, Snowflake};

/// Maximum number of gallery images per destination
pub const GALLERY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: Snowflake,
    pub name: String,
    pub country: String,
    pub city: String,
    pub description: RichText,
    pub visa_requirements: String,
    pub language: String,
    pub currency_used: String,
    pub area_km2: f64,
    pub estimated_budget: f64,
    pub is_active: bool,
    pub popular_sites: Vec<String>,
    pub highlights: Vec<String>,
    pub main_photo_url: String,
    pub gallery: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Destination {
    /// Create an active destination with its required main photo
    pub fn new(id: Snowflake, name: String, main_photo_url: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            country: String::new(),
            city: String::new(),
            description: RichText::default(),
            visa_requirements: String::new(),
            language: String::new(),
            currency_used: String::new(),
            area_km2: 0.0,
            estimated_budget: 0.0,
            is_active: true,
            popular_sites: Vec::new(),
            highlights: Vec::new(),
            main_photo_url,
            gallery: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Split the current gallery into `(kept, dropped)`
    ///
    /// `None` keeps everything. Entries in `keep` that are not part of the
    /// current gallery are ignored, so a client cannot adopt foreign files.
    pub fn partition_gallery(&self, keep: Option<&[String]>) -> (Vec<String>, Vec<String>) {
        match keep {
            None => (self.gallery.clone(), Vec::new()),
            Some(keep) => self
                .gallery
                .iter()
                .cloned()
                .partition(|path| keep.contains(path)),
        }
    }

    /// Reject a gallery that would grow past [`GALLERY_LIMIT`]
    pub fn check_gallery_capacity(kept: usize, added: usize) -> Result<(), DomainError> {
        let requested = kept + added;
        if requested > GALLERY_LIMIT {
            return Err(DomainError::GalleryLimitExceeded {
                limit: GALLERY_LIMIT,
                requested,
            });
        }
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Utc::now();
    }

    /// Every stored file this record owns
    pub fn image_paths(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.main_photo_url.as_str())
            .filter(|p| !p.is_empty())
            .chain(self.gallery.iter().map(String::as_str))
    }
}
