//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_status, check_test_env, expect_data, expect_error, fixtures::*, TestServer,
    ADMIN_PASSWORD,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login_and_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let response = server
        .get_auth("/api/auth/admin/profile", &token)
        .await
        .unwrap();
    let profile: serde_json::Value = expect_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["email"], server.admin.email.as_str());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let login = LoginRequest {
        email: server.admin.email.clone(),
        password: "wrongpass1".to_string(),
    };

    let response = server.post("/api/auth/admin/login", &login).await.unwrap();
    let code = expect_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_protected_route_requires_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .post(server.url("/api/blogs"))
        .multipart(blog_form("Trip", "x"))
        .send()
        .await
        .unwrap();
    let code = expect_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_employee_cookie_session_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.admin_token().await.unwrap();

    let email = format!("ada{}@example.com", unique_suffix());
    let response = server
        .post_form("/api/employees", &admin, employee_form(&email, "s3cretpass"))
        .await
        .unwrap();
    let _: EmployeeData = expect_data(response, StatusCode::CREATED).await.unwrap();

    // Browser-style: the session rides on the HttpOnly cookie
    let browser = server.cookie_client().unwrap();
    let login = LoginRequest {
        email: email.clone(),
        password: "s3cretpass".to_string(),
    };
    let response = browser
        .post(server.url("/api/auth/employee/login"))
        .json(&login)
        .send()
        .await
        .unwrap();
    let auth: AuthData = expect_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.role, "employee");

    let status: SessionStatus = expect_data(
        browser
            .get(server.url("/api/auth/employee/session"))
            .send()
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(status.is_valid);
    assert!(!status.is_locked);
    assert_eq!(status.employee.unwrap().email, email);

    // Lock: mutations are refused, locking again conflicts
    let response = browser
        .post(server.url("/api/auth/employee/lock"))
        .send()
        .await
        .unwrap();
    let locked: SessionStatus = expect_data(response, StatusCode::OK).await.unwrap();
    assert!(locked.is_locked);

    let response = browser
        .post(server.url("/api/contact-messages"))
        .json(&ContactMessageRequest::unique())
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = browser
        .get(server.url("/api/contact-messages"))
        .send()
        .await
        .unwrap();
    let code = expect_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "SESSION_LOCKED");

    let response = browser
        .post(server.url("/api/auth/employee/lock"))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Unlock with a wrong password keeps the lock
    let response = browser
        .post(server.url("/api/auth/employee/unlock"))
        .json(&UnlockRequest {
            password: "wrongpass1".to_string(),
        })
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = browser
        .post(server.url("/api/auth/employee/unlock"))
        .json(&UnlockRequest {
            password: "s3cretpass".to_string(),
        })
        .send()
        .await
        .unwrap();
    let unlocked: SessionStatus = expect_data(response, StatusCode::OK).await.unwrap();
    assert!(!unlocked.is_locked);

    // Logout clears the cookie and the record
    let response = browser
        .post(server.url("/api/auth/employee/logout"))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let status: SessionStatus = expect_data(
        server
            .get_auth("/api/auth/employee/session", &auth.token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!status.is_valid);
    assert!(!status.is_locked);
    assert!(status.employee.is_none());
}

#[tokio::test]
async fn test_invalid_token_session_is_invalid() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .get_auth("/api/auth/employee/session", "not-a-token")
        .await
        .unwrap();
    let status: SessionStatus = expect_data(response, StatusCode::OK).await.unwrap();
    assert!(!status.is_valid);
    assert!(!status.is_locked);
    assert!(status.employee.is_none());
}

#[tokio::test]
async fn test_employee_routes_require_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.admin_token().await.unwrap();

    let email = format!("emp{}@example.com", unique_suffix());
    let response = server
        .post_form("/api/employees", &admin, employee_form(&email, "s3cretpass"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest {
        email,
        password: "s3cretpass".to_string(),
    };
    let auth: AuthData = expect_data(
        server.post("/api/auth/employee/login", &login).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let response = server.get_auth("/api/employees", &auth.token).await.unwrap();
    let code = expect_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "ADMIN_REQUIRED");

    // An employee token is not an admin session either
    let response = server
        .get_auth("/api/auth/admin/profile", &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_deleting_employee_ends_their_sessions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.admin_token().await.unwrap();

    let email = format!("gone{}@example.com", unique_suffix());
    let employee: EmployeeData = expect_data(
        server
            .post_form(
                "/api/employees",
                &admin,
                employee_form(&email, "s3cretpass").part("profilePhoto", png_part("me.png")),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    let photo = employee.profile_photo.clone().unwrap();
    assert!(server.upload_exists(&photo));

    let login = LoginRequest {
        email,
        password: "s3cretpass".to_string(),
    };
    let auth: AuthData = expect_data(
        server.post("/api/auth/employee/login", &login).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let response = server
        .delete_auth(&format!("/api/employees/{}", employee.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(!server.upload_exists(&photo));

    let response = server
        .get_auth("/api/auth/employee/profile", &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_employee_update_with_blank_password_keeps_it() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.admin_token().await.unwrap();

    let email = format!("keep{}@example.com", unique_suffix());
    let employee: EmployeeData = expect_data(
        server
            .post_form("/api/employees", &admin, employee_form(&email, "s3cretpass"))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // An edit form submits every input, including an untouched password box
    let form = reqwest::multipart::Form::new()
        .text("firstName", "Grace")
        .text("password", "");
    let updated: EmployeeData = expect_data(
        server
            .put_form(&format!("/api/employees/{}", employee.id), &admin, form)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(updated.first_name, "Grace");

    let login = LoginRequest {
        email,
        password: "s3cretpass".to_string(),
    };
    let response = server.post("/api/auth/employee/login", &login).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Blog Tests
// ============================================================================

#[tokio::test]
async fn test_blog_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let form = blog_form("Trip", "<p>Hi</p>").part("blogImg", png_part("cover.png"));
    let blog: BlogData = expect_data(
        server.post_form("/api/blogs", &token, form).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    assert_eq!(blog.title, "Trip");
    assert_eq!(blog.description.details, "<p>Hi</p>");
    let first_image = blog.image_url.clone().unwrap();
    assert!(first_image.starts_with("uploads/blog_photos/"));
    assert!(server.upload_exists(&first_image));

    // The stored path is also the public URL
    let response = server.get(&format!("/{first_image}")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Replacing the image removes the old file
    let form = reqwest::multipart::Form::new().part("blogImg", png_part("new.png"));
    let updated: BlogData = expect_data(
        server
            .put_form(&format!("/api/blogs/{}", blog.id), &token, form)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let second_image = updated.image_url.unwrap();
    assert_ne!(second_image, first_image);
    assert!(!server.upload_exists(&first_image));
    assert!(server.upload_exists(&second_image));
    assert_eq!(updated.description.details, "<p>Hi</p>");

    // Delete removes row and file
    let response = server
        .delete_auth(&format!("/api/blogs/{}", blog.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(!server.upload_exists(&second_image));

    let response = server.get(&format!("/api/blogs/{}", blog.id)).await.unwrap();
    let code = expect_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_blog_without_description_stores_empty_details() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let form = reqwest::multipart::Form::new().text("title", "Bare");
    let blog: BlogData = expect_data(
        server.post_form("/api/blogs", &token, form).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(blog.description.details, "");
    assert!(blog.image_url.is_none());
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/blogs/not-a-number").await.unwrap();
    let code = expect_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Destination Tests
// ============================================================================

#[tokio::test]
async fn test_destination_requires_main_photo() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let form = reqwest::multipart::Form::new().text("name", "Nowhere");
    let response = server.post_form("/api/destinations", &token, form).await.unwrap();
    let code = expect_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_MAIN_PHOTO");
}

#[tokio::test]
async fn test_destination_gallery_limit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let created: DestinationData = expect_data(
        server
            .post_form("/api/destinations", &token, destination_form("Bali", 10))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(created.gallery.len(), 10);
    assert_eq!(created.popular_sites, vec!["Ubud", "Uluwatu"]);
    assert!(created.is_active);

    // Keep 9, upload 2: over the limit, nothing changes
    let keep = serde_json::to_string(&created.gallery[..9]).unwrap();
    let form = reqwest::multipart::Form::new()
        .text("keepImages", keep)
        .part("gallery", png_part("x.png"))
        .part("gallery", png_part("y.png"));
    let response = server
        .put_form(&format!("/api/destinations/{}", created.id), &token, form)
        .await
        .unwrap();
    let code = expect_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "GALLERY_LIMIT_EXCEEDED");

    let current: DestinationData = expect_data(
        server
            .get(&format!("/api/destinations/{}", created.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(current.gallery, created.gallery);
    for path in &current.gallery {
        assert!(server.upload_exists(path));
    }

    // Keep 9, upload 1: the dropped image is removed from disk
    let keep = serde_json::to_string(&created.gallery[..9]).unwrap();
    let form = reqwest::multipart::Form::new()
        .text("keepImages", keep)
        .part("gallery", png_part("z.png"));
    let updated: DestinationData = expect_data(
        server
            .put_form(&format!("/api/destinations/{}", created.id), &token, form)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(updated.gallery.len(), 10);
    assert!(!updated.gallery.contains(&created.gallery[9]));
    assert!(!server.upload_exists(&created.gallery[9]));
}

#[tokio::test]
async fn test_destination_soft_delete_and_restore() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let name = format!("Hidden {}", unique_suffix());
    let created: DestinationData = expect_data(
        server
            .post_form("/api/destinations", &token, destination_form(&name, 0))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let path = format!("/api/destinations/{}/soft-delete", created.id);
    let hidden: DestinationData = expect_data(
        server.patch_auth(&path, &token, &json!({})).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!hidden.is_active);

    let active: Vec<DestinationData> = expect_data(
        server.get("/api/destinations/active").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(active.iter().all(|d| d.id != created.id));

    let path = format!("/api/destinations/{}/restore", created.id);
    let restored: DestinationData = expect_data(
        server.patch_auth(&path, &token, &json!({})).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(restored.is_active);

    let response = server
        .delete_auth(&format!("/api/destinations/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(!server.upload_exists(&created.main_photo_url));
}

// ============================================================================
// Partner Tests
// ============================================================================

#[tokio::test]
async fn test_partner_duplicate_email_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let email = format!("ops{}@acme.test", unique_suffix());
    let phone_a = unique_phone();
    let phone_b = unique_phone();

    let created: PartnerData = expect_data(
        server
            .post_form("/api/partners", &token, partner_form(&email, &phone_a))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(created.email, email);

    let response = server
        .post_form(
            "/api/partners",
            &token,
            partner_form(&email, &phone_b).part("partnerImg", png_part("logo.png")),
        )
        .await
        .unwrap();
    let code = expect_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_partner_invalid_phone_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let email = format!("bad{}@acme.test", unique_suffix());
    let response = server
        .post_form("/api/partners", &token, partner_form(&email, "call me"))
        .await
        .unwrap();
    let code = expect_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

// ============================================================================
// Contact Message Tests
// ============================================================================

#[tokio::test]
async fn test_contact_message_triage() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let created: ContactMessageData = expect_data(
        server
            .post("/api/contact-messages", &ContactMessageRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(created.status, "unread");
    assert_eq!(created.priority, "normal");

    let path = format!("/api/contact-messages/{}/status", created.id);
    let updated: ContactMessageData = expect_data(
        server
            .patch_auth(&path, &token, &json!({"status": "read", "priority": "high"}))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(updated.status, "read");
    assert_eq!(updated.priority, "high");

    let response = server
        .delete_auth(&format!("/api/contact-messages/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/contact-messages/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unlock_password_is_the_admin_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/auth/admin/lock", &token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            "/api/auth/admin/unlock",
            &token,
            &UnlockRequest {
                password: ADMIN_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    let status: SessionStatus = expect_data(response, StatusCode::OK).await.unwrap();
    assert!(status.is_valid);
    assert!(!status.is_locked);
}
