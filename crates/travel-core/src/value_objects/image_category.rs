//! Upload categories and the relative paths stored in the database

use std::fmt;

/// Directory prefix every stored image path starts with
pub const UPLOADS_ROOT: &str = "uploads";

/// Which record family an uploaded image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    BlogPhotos,
    Destinations,
    PartnerPhotos,
    EmployeePhotos,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 4] = [
        Self::BlogPhotos,
        Self::Destinations,
        Self::PartnerPhotos,
        Self::EmployeePhotos,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            Self::BlogPhotos => "blog_photos",
            Self::Destinations => "destinations",
            Self::PartnerPhotos => "partner_photos",
            Self::EmployeePhotos => "employee_photos",
        }
    }

    /// Relative path recorded on the owning row, e.g. `uploads/blog_photos/a.jpg`
    pub fn relative_path(self, file_name: &str) -> String {
        format!("{UPLOADS_ROOT}/{}/{file_name}", self.dir_name())
    }

    /// Split a stored path back into its category and file name
    ///
    /// Returns `None` for anything outside the known upload directories or
    /// containing traversal segments.
    pub fn parse_path(path: &str) -> Option<(ImageCategory, &str)> {
        let mut parts = path.trim_start_matches('/').splitn(3, '/');
        if parts.next()? != UPLOADS_ROOT {
            return None;
        }
        let dir = parts.next()?;
        let file = parts.next()?;
        if file.is_empty() || file.contains('/') || file.contains('\\') || file.starts_with('.') {
            return None;
        }
        let category = Self::ALL.into_iter().find(|c| c.dir_name() == dir)?;
        Some((category, file))
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
