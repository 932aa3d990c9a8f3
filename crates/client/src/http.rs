//! HTTP Transport Implementation
//!
//! Sends JSON requests to `{base_url}{path}` with the configured bearer token
//! using the reqwest HTTP client. Uploads stream the file body in chunks so
//! progress can be reported as bytes are handed to the connection.

use futures::stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response};
use serde_json::Value;

use crate::progress::{FileUpload, ProgressFn, UploadProgress};
use crate::{ApiRequest, ClientConfig, ClientError, Result, Transport};

/// Real HTTP transport for the back-office API.
pub struct HttpTransport {
    http: Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            ClientError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn read_body(method: &str, path: &str, response: Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            tracing::warn!(%method, %path, status = status.as_u16(), "Back-office API returned an error");
            return Err(ClientError::from_status(status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Request(format!("Failed to read response body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::Response(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.config.url_for(&request.path);
        let method = request.method.to_string();

        tracing::debug!(%method, path = %request.path, "Sending back-office API request");

        let mut builder = self.authorize(self.http.request(request.method, &url));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Request(format!("HTTP request failed: {}", e)))?;

        Self::read_body(&method, &request.path, response).await
    }

    async fn upload(
        &self,
        path: &str,
        file: FileUpload,
        progress: Option<ProgressFn>,
    ) -> Result<Value> {
        let url = self.config.url_for(path);
        let total = file.len();

        tracing::debug!(path = %path, file_name = %file.file_name, bytes = total, "Uploading file");

        let mut tracker = UploadProgress::new(total, progress);
        let chunks = file.chunks().map(move |chunk| {
            tracker.advance(chunk.len() as u64);
            Ok::<_, std::io::Error>(chunk)
        });
        let body = Body::wrap_stream(stream::iter(chunks));

        let part = Part::stream_with_length(body, total)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| ClientError::Request(format!("Invalid content type: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self
            .authorize(self.http.post(&url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Request(format!("Upload request failed: {}", e)))?;

        Self::read_body("POST", path, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> HttpTransport {
        HttpTransport::new(ClientConfig::new(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_json_and_parses_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/open/region/saveOrUpdate"))
            .and(body_json(json!({"title": "North Shore"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "title": "North Shore"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::new(Method::POST, "/open/region/saveOrUpdate")
            .with_json(&json!({"title": "North Shore"}))
            .unwrap();
        let value = transport_for(&server).send(request).await.unwrap();
        assert_eq!(value["id"], 5);
    }

    #[tokio::test]
    async fn test_send_attaches_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/open/region/1"))
            .and(header("authorization", "Bearer token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new(server.uri()).with_access_token("token-123");
        let transport = HttpTransport::new(config).unwrap();
        transport.send(ApiRequest::get("/open/region/1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/open/region/doTop/3"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let value = transport_for(&server)
            .send(ApiRequest::put("/open/region/doTop/3"))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_non_success_surfaces_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/open/region/99"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "region not found"})),
            )
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .send(ApiRequest::get("/open/region/99"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: region not found");
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/open/region/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .send(ApiRequest::get("/open/region/1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Response(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        let config = ClientConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_secs(2));
        let transport = HttpTransport::new(config).unwrap();
        let err = transport
            .send(ApiRequest::get("/open/region/1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_upload_reports_progress_to_100() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/open/files/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fileName": "map.png",
                "fileUrl": "https://cdn.example.com/map.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let progress: ProgressFn = Arc::new(move |p| sink.lock().unwrap().push(p));

        let file = FileUpload::new("map.png", "image/png", vec![1u8; 200 * 1024]);
        let value = transport_for(&server)
            .upload("/open/files/upload", file, Some(progress))
            .await
            .unwrap();

        assert_eq!(value["fileName"], "map.png");
        let seen = seen.lock().unwrap().clone();
        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.last(), Some(&100));
    }
}
