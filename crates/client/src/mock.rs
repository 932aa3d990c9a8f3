//! Mock Back-Office Backend
//!
//! In-memory transport that serves the resource endpoint grammar for tests
//! and offline development:
//! - `{ns}/list` and `{ns}/*PageQuery` page over stored records
//! - `{ns}/saveOrUpdate` assigns fresh ids on create and merges on update
//! - `{ns}/{id}`, `{ns}/remove`, and `{ns}/{segment}/{id}` transitions
//! - fixtures for one-off endpoints, programmable failures, request recording

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::progress::{FileUpload, ProgressFn, UploadProgress};
use crate::{ApiRequest, ClientError, Result, Transport};

const DEFAULT_FILE_BASE_URL: &str = "https://files.mock.local";

/// A recorded request for test assertions
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct Collection {
    records: BTreeMap<i64, Value>,
    last_id: i64,
}

impl Collection {
    fn insert(&mut self, id: i64, record: Value) {
        self.last_id = self.last_id.max(id);
        self.records.insert(id, record);
    }
}

#[derive(Debug, Default)]
struct MockState {
    collections: HashMap<String, Collection>,
    fixtures: HashMap<(Method, String), Value>,
    effects: HashMap<(String, String), Vec<(String, Value)>>,
    failures: VecDeque<(u16, String)>,
    history: Vec<RecordedRequest>,
    deletions: usize,
}

/// Mock back-office backend with programmable behavior
#[derive(Debug, Clone)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
    file_base_url: String,
}

impl MockBackend {
    /// Create an empty mock backend.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            file_base_url: DEFAULT_FILE_BASE_URL.to_string(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .expect("mock state lock poisoned by a panicking test")
    }

    /// Store records under a namespace; each must carry an integer `id`
    pub fn seed(&self, namespace: &str, records: impl IntoIterator<Item = Value>) {
        let mut state = self.lock();
        let collection = state.collections.entry(namespace.to_string()).or_default();
        for record in records {
            if let Some(id) = record.get("id").and_then(Value::as_i64) {
                collection.insert(id, record);
            }
        }
    }

    /// Serve a fixed response for one method and path
    pub fn set_fixture(&self, method: Method, path: &str, response: Value) {
        self.lock().fixtures.insert((method, path.to_string()), response);
    }

    /// Set `field` to `value` on the target record when `segment` is applied
    pub fn on_transition(&self, namespace: &str, segment: &str, field: &str, value: Value) {
        self.lock()
            .effects
            .entry((namespace.to_string(), segment.to_string()))
            .or_default()
            .push((field.to_string(), value));
    }

    /// Fail the next request with the given status and message
    pub fn fail_next(&self, status: u16, message: &str) {
        self.lock().failures.push_back((status, message.to_string()));
    }

    pub fn record(&self, namespace: &str, id: i64) -> Option<Value> {
        self.lock()
            .collections
            .get(namespace)
            .and_then(|c| c.records.get(&id).cloned())
    }

    pub fn records(&self, namespace: &str) -> Vec<Value> {
        self.lock()
            .collections
            .get(namespace)
            .map(|c| c.records.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.lock().history.clone()
    }

    /// Clear history
    pub fn reset_history(&self) {
        self.lock().history.clear();
    }

    /// Number of records deleted through remove endpoints
    pub fn deletion_count(&self) -> usize {
        self.lock().deletions
    }

    fn handle(state: &mut MockState, request: &ApiRequest) -> Result<Value> {
        if let Some(fixture) = state
            .fixtures
            .get(&(request.method.clone(), request.path.clone()))
        {
            return Ok(fixture.clone());
        }

        let (namespace, last) = split_last(&request.path);
        let id = last.parse::<i64>().ok();
        let method = &request.method;

        if *method == Method::POST && (last == "list" || last.ends_with("PageQuery")) {
            return Self::list(state, namespace, request.body.as_ref());
        }
        if *method == Method::POST && last == "saveOrUpdate" {
            return Self::save(state, namespace, request.body.clone());
        }
        if (*method == Method::POST || *method == Method::DELETE) && last == "remove" {
            return Self::remove(state, namespace, request.body.as_ref());
        }
        match id {
            Some(id) if *method == Method::GET => state
                .collections
                .get(namespace)
                .and_then(|c| c.records.get(&id).cloned())
                .ok_or_else(|| not_found(namespace, id)),
            Some(id) if *method == Method::PUT => {
                let (namespace, segment) = split_last(namespace);
                Self::transition(state, namespace, segment, id)
            }
            _ => Err(ClientError::Status {
                status: 404,
                message: format!("No mock route for {} {}", request.method, request.path),
            }),
        }
    }

    fn list(state: &MockState, namespace: &str, body: Option<&Value>) -> Result<Value> {
        let body = body.cloned().unwrap_or(Value::Null);
        let current = body["page"]["current"].as_u64().unwrap_or(1).max(1);
        let size = body["page"]["size"].as_u64().unwrap_or(10).max(1);
        let filter = body["queryBody"].as_object().cloned().unwrap_or_default();

        let matching: Vec<Value> = state
            .collections
            .get(namespace)
            .map(|c| {
                c.records
                    .values()
                    .filter(|record| matches_filter(record, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let total = matching.len() as u64;
        let skip = usize::try_from(current.saturating_sub(1).saturating_mul(size))
            .unwrap_or(usize::MAX);
        let take = usize::try_from(size).unwrap_or(usize::MAX);
        let records: Vec<Value> = matching.into_iter().skip(skip).take(take).collect();

        Ok(json!({
            "records": records,
            "total": total,
            "size": size,
            "current": current,
            "pages": total.div_ceil(size),
        }))
    }

    fn save(state: &mut MockState, namespace: &str, body: Option<Value>) -> Result<Value> {
        let Some(Value::Object(fields)) = body else {
            return Err(ClientError::Status {
                status: 400,
                message: "saveOrUpdate expects a JSON object".to_string(),
            });
        };
        let collection = state.collections.entry(namespace.to_string()).or_default();

        let id = fields.get("id").and_then(Value::as_i64);
        let record = match id {
            Some(id) => {
                let existing = collection
                    .records
                    .get_mut(&id)
                    .ok_or_else(|| not_found(namespace, id))?;
                if let Value::Object(target) = existing {
                    for (key, value) in fields {
                        target.insert(key, value);
                    }
                }
                existing.clone()
            }
            None => {
                let id = collection.last_id + 1;
                let mut fields = fields;
                fields.insert("id".to_string(), json!(id));
                let record = Value::Object(fields);
                collection.insert(id, record.clone());
                record
            }
        };

        Ok(record)
    }

    fn remove(state: &mut MockState, namespace: &str, body: Option<&Value>) -> Result<Value> {
        let ids: Vec<i64> = body
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default();

        let removed = match state.collections.get_mut(namespace) {
            Some(collection) => ids
                .iter()
                .filter(|id| collection.records.remove(*id).is_some())
                .count(),
            None => 0,
        };
        state.deletions += removed;
        Ok(Value::Null)
    }

    fn transition(state: &mut MockState, namespace: &str, segment: &str, id: i64) -> Result<Value> {
        let effects = state
            .effects
            .get(&(namespace.to_string(), segment.to_string()))
            .cloned()
            .unwrap_or_default();

        let record = state
            .collections
            .get_mut(namespace)
            .and_then(|c| c.records.get_mut(&id))
            .ok_or_else(|| not_found(namespace, id))?;

        if let Value::Object(fields) = record {
            for (field, value) in effects {
                fields.insert(field, value);
            }
        }
        Ok(Value::Null)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn split_last(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

fn not_found(namespace: &str, id: i64) -> ClientError {
    ClientError::Status {
        status: 404,
        message: format!("No record {} in {}", id, namespace),
    }
}

/// Strings match by substring, everything else by equality. Filter keys the
/// record does not carry are ignored.
fn matches_filter(record: &Value, filter: &Map<String, Value>) -> bool {
    filter.iter().all(|(key, wanted)| match (record.get(key), wanted) {
        (_, Value::Null) | (None, _) => true,
        (Some(Value::String(actual)), Value::String(wanted)) => actual.contains(wanted.as_str()),
        (Some(actual), wanted) => actual == wanted,
    })
}

#[async_trait::async_trait]
impl Transport for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        tracing::debug!(method = %request.method, path = %request.path, "Mock backend: handling request");

        let mut state = self
            .state
            .lock()
            .map_err(|e| ClientError::Request(format!("mock state lock poisoned: {e}")))?;
        state.history.push(RecordedRequest {
            method: request.method.clone(),
            path: request.path.clone(),
            body: request.body.clone(),
        });

        if let Some((status, message)) = state.failures.pop_front() {
            return Err(ClientError::Status { status, message });
        }

        Self::handle(&mut state, &request)
    }

    async fn upload(
        &self,
        path: &str,
        file: FileUpload,
        progress: Option<ProgressFn>,
    ) -> Result<Value> {
        tracing::debug!(path = %path, file_name = %file.file_name, "Mock backend: receiving upload");

        {
            let mut state = self
                .state
                .lock()
                .map_err(|e| ClientError::Request(format!("mock state lock poisoned: {e}")))?;
            state.history.push(RecordedRequest {
                method: Method::POST,
                path: path.to_string(),
                body: Some(json!({
                    "fileName": file.file_name,
                    "contentType": file.content_type,
                    "size": file.len(),
                })),
            });
            if let Some((status, message)) = state.failures.pop_front() {
                return Err(ClientError::Status { status, message });
            }
        }

        let mut tracker = UploadProgress::new(file.len(), progress);
        for chunk in file.chunks() {
            tracker.advance(chunk.len() as u64);
        }

        Ok(json!({
            "fileName": file.file_name,
            "fileUrl": format!("{}/{}", self.file_base_url, file.file_name),
        }))
    }
}
