//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and reading the response envelope.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use reqwest::{multipart::Form, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use travel_api::{create_app, create_app_state};
use travel_common::{
    AdminSeedConfig, AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, RedisConfig, ServerConfig, SessionConfig, SnowflakeConfig, StorageConfig,
};
use uuid::Uuid;

use crate::fixtures::{AuthData, Envelope, ErrorEnvelope, LoginRequest};

pub const ADMIN_PASSWORD: &str = "Adm1nistrator";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    /// Client without a cookie store; authenticate with bearer tokens
    pub client: Client,
    pub admin: AdminSeedConfig,
    pub storage_root: PathBuf,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with a freshly seeded admin and its own upload directory
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let admin = config
            .admin
            .clone()
            .ok_or_else(|| anyhow::anyhow!("test config must seed an admin"))?;
        let storage_root = PathBuf::from(&config.storage.root_dir);

        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0: the OS picks a free one
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            admin,
            storage_root,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// A client that keeps cookies, for the browser-style session flow
    pub fn cookie_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// POST a multipart form with a bearer token
    pub async fn post_form(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        self.send(self.client.post(self.url(path)).bearer_auth(token).multipart(form))
            .await
    }

    /// PUT a multipart form with a bearer token
    pub async fn put_form(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        self.send(self.client.put(self.url(path)).bearer_auth(token).multipart(form))
            .await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        Ok(request.send().await?)
    }

    /// Log in as the seeded admin and return the session token
    pub async fn admin_token(&self) -> Result<String> {
        let login = LoginRequest {
            email: self.admin.email.clone(),
            password: ADMIN_PASSWORD.to_string(),
        };
        let response = self.post("/api/auth/admin/login", &login).await?;
        let auth: AuthData = expect_data(response, StatusCode::OK).await?;
        Ok(auth.token)
    }

    /// Whether a stored path (`uploads/...`) exists under the upload root
    pub fn upload_exists(&self, stored_path: &str) -> bool {
        self.storage_root.join(stored_path).is_file()
    }
}

/// Configuration for one test server
///
/// Each server gets its own admin account and upload directory so tests
/// can run concurrently against the same database.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")?;
    let redis_url = std::env::var("REDIS_URL")?;
    let run_id = Uuid::new_v4().simple().to_string();

    let storage_root = std::env::temp_dir().join(format!("travel-it-{run_id}"));

    Ok(AppConfig {
        app: AppSettings {
            name: "travel-api-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
            run_migrations: true,
        },
        redis: RedisConfig {
            url: redis_url,
            max_connections: 5,
        },
        session: SessionConfig {
            secret: format!("integration-secret-{run_id}"),
            ttl_secs: 3600,
            cookie_name: "travel_session".to_string(),
            cookie_secure: false,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1,
            burst: 10_000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        storage: StorageConfig {
            root_dir: storage_root.to_string_lossy().into_owned(),
            max_file_size_mb: 1,
            public_base_url: None,
        },
        snowflake: SnowflakeConfig { worker_id: 7 },
        admin: Some(AdminSeedConfig {
            email: format!("admin-{run_id}@example.com"),
            password: ADMIN_PASSWORD.to_string(),
            name: "Test Admin".to_string(),
        }),
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert the status and unwrap `data` from the success envelope
pub async fn expect_data<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    let envelope: Envelope<T> = serde_json::from_str(&body)?;
    anyhow::ensure!(envelope.success, "success flag not set: {body}");
    Ok(envelope.data)
}

/// Assert the status and return the error code from the error envelope
pub async fn expect_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    let envelope: ErrorEnvelope = serde_json::from_str(&body)?;
    anyhow::ensure!(!envelope.success, "error body has success=true: {body}");
    Ok(envelope.error.code)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
