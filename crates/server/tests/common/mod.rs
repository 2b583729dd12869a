//! Common test utilities for E2E testing with mocks.
//!
//! Provides a test fixture that builds the in-process server with a mock
//! catalog injected, so the full HTTP surface can be exercised without
//! external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use explorer_core::{
    testing::MockMovieCatalog, Browser, Config, DatabaseConfig, DetailsLoader, MovieCatalog,
    ServerConfig, SessionController, SessionStore, SqliteSessionStore, TmdbConfig, TrendingWindow,
};

use explorer_server::AppState;

/// Re-export fixtures for test convenience
pub use explorer_core::testing::fixtures;

/// Test fixture for E2E testing with a mock catalog.
///
/// The session store is a real SQLite store on a temp path; the catalog
/// is fully controllable through the mock.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure pages, details, errors and delays
    pub catalog: Arc<MockMovieCatalog>,
    /// Temporary directory holding the test database
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with an empty mock catalog.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let catalog = Arc::new(MockMovieCatalog::new());

        let config = Config {
            catalog: TmdbConfig {
                api_token: "test-token".to_string(),
                base_url: None,
                image_base_url: None,
                trending_window: TrendingWindow::Day,
            },
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            database: DatabaseConfig {
                path: db_path.clone(),
            },
        };

        let session_store: Arc<dyn SessionStore> = Arc::new(
            SqliteSessionStore::new(&db_path).expect("Failed to create session store"),
        );
        let session = SessionController::new(session_store);

        let browser = Browser::new(
            Arc::clone(&catalog) as Arc<dyn MovieCatalog>,
            TrendingWindow::Day,
        );
        let details = DetailsLoader::new(Arc::clone(&catalog) as Arc<dyn MovieCatalog>);

        let state = Arc::new(AppState::new(config, session, browser, details));
        let router = explorer_server::create_router(state);

        Self {
            router,
            catalog,
            temp_dir,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request("PUT", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
