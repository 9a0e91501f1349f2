// Employee REST API module
// This module wires handlers, storage and configuration into an axum server

pub mod handlers;
pub mod types;


use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router, Server,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::engine::{assembler::COLLECTION_PATH, load_seed_data, EmployeeStorage, InMemoryStorage};
use handlers::{
    find_one, health_check, list_employees, new_employee, not_found, update_employee,
    EmployeeApiState,
};

/// Employee API server configuration
#[derive(Clone, Debug)]
pub struct EmployeeApiConfig {
    pub port: u16,
    pub host: String,
    pub cors_enabled: bool,
    /// Public root for generated links, e.g. `https://api.example.com`
    pub external_url: Option<String>,
    /// Load the demo employees before serving
    pub seed_data: bool,
}

impl Default for EmployeeApiConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            cors_enabled: true,
            external_url: None,
            seed_data: true,
        }
    }
}

/// Employee API Server
pub struct EmployeeApiServer {
    config: EmployeeApiConfig,
    state: EmployeeApiState,
}

impl EmployeeApiServer {
    /// Create a new server backed by in-memory storage
    pub fn new(config: EmployeeApiConfig) -> Self {
        let storage: Arc<dyn EmployeeStorage> = Arc::new(InMemoryStorage::new());
        let state = EmployeeApiState::new(storage).with_external_url(config.external_url.clone());

        Self { config, state }
    }

    /// Swap in a different storage backend
    pub fn with_storage(mut self, storage: Arc<dyn EmployeeStorage>) -> Self {
        self.state.storage = storage;
        self
    }

    /// Create the Axum router with all employee routes
    pub fn create_router(&self) -> Router {
        let item_path = format!("{}/:id", COLLECTION_PATH);

        let api_router = Router::new()
            // Collection and item endpoints
            .route(COLLECTION_PATH, get(list_employees).post(new_employee))
            .route(&item_path, get(find_one).put(update_employee))
            // Health check
            .route("/health", get(health_check))
            // Fallback for unknown routes
            .fallback(not_found)
            .with_state(self.state.clone())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "request",
                        request_id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            );

        // Add CORS if enabled
        if self.config.cors_enabled {
            api_router.layer(CorsLayer::permissive())
        } else {
            api_router
        }
    }

    /// Load the demo employees if seeding is enabled
    pub async fn seed(&self) -> crate::Result<()> {
        if self.config.seed_data {
            let saved = load_seed_data(self.state.storage.as_ref()).await?;
            info!("🌱 Seeded {} employees", saved.len());
        }
        Ok(())
    }

    /// Seed, then serve until Ctrl-C
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.seed().await?;

        let app = self.create_router();
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!("👥 Employee HAL API server starting");
        info!("📡 Server address: http://{}", addr);
        info!("🔗 API endpoints:");
        info!("   GET  http://{}{}", addr, COLLECTION_PATH);
        info!("   POST http://{}{}", addr, COLLECTION_PATH);
        info!("   GET  http://{}{}/{{id}}", addr, COLLECTION_PATH);
        info!("   PUT  http://{}{}/{{id}}", addr, COLLECTION_PATH);
        info!("   GET  http://{}/health", addr);
        info!("📋 Configuration:");
        info!("   CORS enabled: {}", self.config.cors_enabled);
        match &self.config.external_url {
            Some(url) => info!("   Links rooted at: {}", url),
            None => info!("   Links rooted at: request Host header"),
        }

        Server::bind(&addr.parse()?)
            .serve(app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        return;
    }
    info!("🛑 Shutting down");
}

/// Builder pattern for the employee API server
pub struct EmployeeApiServerBuilder {
    config: EmployeeApiConfig,
    storage: Option<Arc<dyn EmployeeStorage>>,
}

impl EmployeeApiServerBuilder {
    pub fn new() -> Self {
        Self {
            config: EmployeeApiConfig::default(),
            storage: None,
        }
    }

    pub fn with_config(mut self, config: EmployeeApiConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.config.host = host;
        self
    }

    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.config.cors_enabled = enabled;
        self
    }

    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.config.external_url = Some(url.into());
        self
    }

    pub fn with_seed_data(mut self, enabled: bool) -> Self {
        self.config.seed_data = enabled;
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn EmployeeStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> EmployeeApiServer {
        let server = EmployeeApiServer::new(self.config);

        match self.storage {
            Some(storage) => server.with_storage(storage),
            None => server,
        }
    }
}

impl Default for EmployeeApiServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to create a server with default settings
pub fn create_default_server() -> EmployeeApiServer {
    EmployeeApiServerBuilder::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_server_creation() {
        let server = create_default_server();
        assert_eq!(server.config.port, 8080);
        assert!(server.config.cors_enabled);
        assert!(server.config.seed_data);
    }

    #[tokio::test]
    async fn test_builder_pattern() {
        let server = EmployeeApiServerBuilder::new()
            .with_port(9090)
            .with_cors(false)
            .with_external_url("https://api.example.com")
            .with_seed_data(false)
            .build();

        assert_eq!(server.config.port, 9090);
        assert!(!server.config.cors_enabled);
        assert!(!server.config.seed_data);
        assert_eq!(
            server.state.external_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[tokio::test]
    async fn test_seed_respects_config() {
        let storage = Arc::new(InMemoryStorage::new());
        let server = EmployeeApiServerBuilder::new()
            .with_seed_data(false)
            .with_storage(storage.clone())
            .build();
        server.seed().await.unwrap();
        assert!(storage.is_empty().unwrap());

        let server = EmployeeApiServerBuilder::new()
            .with_storage(storage.clone())
            .build();
        server.seed().await.unwrap();
        assert_eq!(storage.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_default_server().create_router();

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method(Method::GET)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_default_server().create_router();

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/managers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
