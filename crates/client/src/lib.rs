//! Tourdesk Resource Client
//!
//! Typed access to the back-office REST API:
//! - `Transport` seam with an HTTP implementation (reqwest) for production
//! - In-memory mock backend for testing and development
//! - Generic `ResourceClient` generated once per resource from a declarative
//!   `ResourceDescriptor`, covering list/get/save/remove and lifecycle transitions
//! - Multipart file upload with progress reporting

pub mod http;
pub mod mock;
pub mod progress;
pub mod resource;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub use progress::{FileUpload, ProgressFn, UploadProgress};
pub use reqwest::Method;
pub use resource::{
    list_page, Lifecycle, NoTransition, RemoveMethod, Resource, ResourceClient,
    ResourceDescriptor,
};
pub use tourdesk_common::{ClientConfig, ClientError, Page, PageQuery, PageResult, Result};

/// A single request against the back-office API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL, e.g. `/open/region/list`
    pub path: String,
    /// JSON body, `None` for bodiless requests
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Attach a JSON body
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            ClientError::Request(format!("Failed to encode request body: {}", e))
        })?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Request/response transport for the back-office API.
///
/// Implementations own base URL, auth headers, and body encoding. Non-2xx
/// answers are reported as `ClientError::Status`; empty 2xx bodies come back
/// as `Value::Null`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a JSON request and return the decoded response body.
    async fn send(&self, request: ApiRequest) -> Result<Value>;

    /// Upload a file as multipart form data, reporting progress percentages.
    async fn upload(
        &self,
        path: &str,
        file: FileUpload,
        progress: Option<ProgressFn>,
    ) -> Result<Value>;
}

/// Decode a response body into the expected type
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Factory for creating Transport implementations
pub struct TransportFactory;

impl TransportFactory {
    /// Create a Transport based on configuration.
    pub fn create(config: ClientConfig) -> Result<Arc<dyn Transport>> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!(base_url = %config.base_url, "Creating HTTP transport");
                Ok(Arc::new(http::HttpTransport::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock transport");
                Ok(Arc::new(mock::MockBackend::new()))
            }
            provider => Err(ClientError::Configuration(format!(
                "Unknown transport provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
