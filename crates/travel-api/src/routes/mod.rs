//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{
    routing::{get, patch, post},
    Extension, Router,
};
use travel_core::SessionRole;

use crate::handlers::{auth, blogs, contact_messages, destinations, employees, health, partners};
use crate::state::AppState;

/// Create the main API router (health is mounted separately, outside the rate limit)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth/employee", session_routes(SessionRole::Employee))
        .nest("/auth/admin", session_routes(SessionRole::Admin))
        .merge(blog_routes())
        .merge(destination_routes())
        .merge(partner_routes())
        .merge(employee_routes())
        .merge(contact_message_routes())
}

/// Login and session endpoints for one role
fn session_routes(role: SessionRole) -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session_status))
        .route("/profile", get(auth::profile))
        .route("/lock", post(auth::lock))
        .route("/unlock", post(auth::unlock))
        .layer(Extension(role))
}

fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route(
            "/blogs/:id",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
}

fn destination_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/destinations",
            get(destinations::list_destinations).post(destinations::create_destination),
        )
        .route("/destinations/active", get(destinations::list_active_destinations))
        .route(
            "/destinations/:id",
            get(destinations::get_destination)
                .put(destinations::update_destination)
                .delete(destinations::delete_destination),
        )
        .route(
            "/destinations/:id/soft-delete",
            patch(destinations::soft_delete_destination),
        )
        .route("/destinations/:id/restore", patch(destinations::restore_destination))
}

fn partner_routes() -> Router<AppState> {
    Router::new()
        .route("/partners", get(partners::list_partners).post(partners::create_partner))
        .route(
            "/partners/:id",
            get(partners::get_partner)
                .put(partners::update_partner)
                .delete(partners::delete_partner),
        )
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
}

fn contact_message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contact-messages",
            get(contact_messages::list_contact_messages)
                .post(contact_messages::create_contact_message),
        )
        .route(
            "/contact-messages/:id",
            get(contact_messages::get_contact_message)
                .delete(contact_messages::delete_contact_message),
        )
        .route(
            "/contact-messages/:id/status",
            patch(contact_messages::update_contact_message_status),
        )
}
