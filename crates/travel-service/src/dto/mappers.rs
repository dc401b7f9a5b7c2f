//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use travel_core::{Admin, Blog, BlogAuthor, ContactMessage, Destination, Employee, Partner};

use super::responses::{
    AdminResponse, BlogAuthorResponse, BlogResponse, ContactMessageResponse, DestinationResponse,
    EmployeeResponse, PartnerResponse, ProfileResponse,
};

// ============================================================================
// Blog Mappers
// ============================================================================

impl From<&BlogAuthor> for BlogAuthorResponse {
    fn from(author: &BlogAuthor) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name.clone(),
            email: author.email.clone(),
        }
    }
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title.clone(),
            description: blog.description.clone(),
            image_url: blog.image_url.clone(),
            author_id: blog.author_id.map(|id| id.to_string()),
            author: blog.author.as_ref().map(BlogAuthorResponse::from),
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self::from(&blog)
    }
}

// ============================================================================
// Destination Mappers
// ============================================================================

impl From<&Destination> for DestinationResponse {
    fn from(d: &Destination) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.clone(),
            country: d.country.clone(),
            city: d.city.clone(),
            description: d.description.clone(),
            visa_requirements: d.visa_requirements.clone(),
            language: d.language.clone(),
            currency_used: d.currency_used.clone(),
            area_km2: d.area_km2,
            estimated_budget: d.estimated_budget,
            is_active: d.is_active,
            popular_sites: d.popular_sites.clone(),
            highlights: d.highlights.clone(),
            main_photo_url: d.main_photo_url.clone(),
            gallery: d.gallery.clone(),
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

impl From<Destination> for DestinationResponse {
    fn from(d: Destination) -> Self {
        Self::from(&d)
    }
}

// ============================================================================
// Partner / Employee / Admin Mappers
// ============================================================================

impl From<&Partner> for PartnerResponse {
    fn from(p: &Partner) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            address: p.address.clone(),
            image_url: p.image_url.clone(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<Partner> for PartnerResponse {
    fn from(p: Partner) -> Self {
        Self::from(&p)
    }
}

impl From<&Employee> for EmployeeResponse {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id.to_string(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            address: e.address.clone(),
            profile_photo: e.profile_photo.clone(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self::from(&e)
    }
}

impl From<&Admin> for AdminResponse {
    fn from(a: &Admin) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            email: a.email.clone(),
            created_at: a.created_at,
        }
    }
}

impl From<Employee> for ProfileResponse {
    fn from(e: Employee) -> Self {
        Self::Employee(EmployeeResponse::from(&e))
    }
}

impl From<Admin> for ProfileResponse {
    fn from(a: Admin) -> Self {
        Self::Admin(AdminResponse::from(&a))
    }
}

// ============================================================================
// Contact Message Mappers
// ============================================================================

impl From<&ContactMessage> for ContactMessageResponse {
    fn from(m: &ContactMessage) -> Self {
        Self {
            id: m.id.to_string(),
            first_name: m.first_name.clone(),
            email: m.email.clone(),
            message: m.message.clone(),
            status: m.status,
            priority: m.priority,
            created_at: m.created_at,
        }
    }
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(m: ContactMessage) -> Self {
        Self::from(&m)
    }
}
