//! Generic paginated CRUD resource client
//!
//! Every back-office resource exposes the same endpoint family under its own
//! namespace:
//!
//! | operation        | request                                 |
//! |------------------|-----------------------------------------|
//! | list             | `POST {ns}/list` with a `PageQuery`     |
//! | get by id        | `GET {ns}/{id}`                         |
//! | save or update   | `POST {ns}/saveOrUpdate`                |
//! | remove           | `DELETE` or `POST {ns}/remove` with ids |
//! | transition       | `PUT {ns}/{segment}/{id}`               |
//!
//! A resource declares its shapes and a [`ResourceDescriptor`] once; the
//! [`ResourceClient`] turns that declaration into typed calls. The client
//! keeps no state between calls and never validates lifecycle transitions.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

use crate::{decode, ApiRequest, PageQuery, PageResult, Result, Transport};

/// HTTP verb a resource's bulk removal endpoint expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveMethod {
    Delete,
    Post,
}

impl RemoveMethod {
    pub fn method(self) -> Method {
        match self {
            RemoveMethod::Delete => Method::DELETE,
            RemoveMethod::Post => Method::POST,
        }
    }
}

/// Declarative endpoint layout of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Human-readable resource name used in logs
    pub name: &'static str,
    /// URL namespace, e.g. `/open/attraction`
    pub namespace: &'static str,
    pub remove_method: RemoveMethod,
}

impl ResourceDescriptor {
    /// Descriptor removing through `DELETE {ns}/remove`
    pub const fn new(name: &'static str, namespace: &'static str) -> Self {
        Self {
            name,
            namespace,
            remove_method: RemoveMethod::Delete,
        }
    }

    /// Remove through `POST {ns}/remove` instead
    pub const fn removed_with_post(mut self) -> Self {
        self.remove_method = RemoveMethod::Post;
        self
    }

    pub fn list_path(&self) -> String {
        format!("{}/list", self.namespace)
    }

    pub fn save_path(&self) -> String {
        format!("{}/saveOrUpdate", self.namespace)
    }

    pub fn detail_path(&self, id: i64) -> String {
        format!("{}/{}", self.namespace, id)
    }

    pub fn remove_path(&self) -> String {
        format!("{}/remove", self.namespace)
    }

    pub fn transition_path(&self, segment: &str, id: i64) -> String {
        format!("{}/{}/{}", self.namespace, segment, id)
    }
}

/// A named lifecycle edge of a resource, addressed by its path segment
pub trait Lifecycle: Copy + Send + Sync + fmt::Debug + 'static {
    /// Path segment of the transition endpoint, e.g. `publish`
    fn segment(&self) -> &'static str;
}

/// Transition type for resources without a lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTransition {}

impl Lifecycle for NoTransition {
    fn segment(&self) -> &'static str {
        match *self {}
    }
}

/// Request and response shapes of one back-office resource
pub trait Resource: Send + Sync + 'static {
    /// Entity snapshot as returned by the backend
    type Record: DeserializeOwned + Send;
    /// Filter carried in `PageQuery::query_body`
    type Query: Serialize + Send + Sync;
    /// Create/update payload; an absent id means create
    type SaveRequest: Serialize + Send + Sync;
    /// Lifecycle transitions the resource exposes
    type Transition: Lifecycle;

    const DESCRIPTOR: ResourceDescriptor;
}

/// Run one paginated query against `path`
pub async fn list_page<Q, E>(
    transport: &dyn Transport,
    path: &str,
    query: &PageQuery<Q>,
) -> Result<PageResult<E>>
where
    Q: Serialize + Sync,
    E: DeserializeOwned,
{
    let request = ApiRequest::new(Method::POST, path).with_json(query)?;
    decode(transport.send(request).await?)
}

/// Typed client for a single resource
pub struct ResourceClient<R: Resource> {
    transport: Arc<dyn Transport>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::DESCRIPTOR.name)
            .field("namespace", &R::DESCRIPTOR.namespace)
            .finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    pub fn descriptor(&self) -> ResourceDescriptor {
        R::DESCRIPTOR
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Query one page of records
    pub async fn list(&self, query: &PageQuery<R::Query>) -> Result<PageResult<R::Record>> {
        let result = list_page(
            self.transport.as_ref(),
            &R::DESCRIPTOR.list_path(),
            query,
        )
        .await?;
        tracing::debug!(
            resource = R::DESCRIPTOR.name,
            total = result.total,
            returned = result.records.len(),
            "Listed records"
        );
        Ok(result)
    }

    /// Fetch one record; a missing id surfaces as a 404 status error
    pub async fn get_by_id(&self, id: i64) -> Result<R::Record> {
        let request = ApiRequest::get(R::DESCRIPTOR.detail_path(id));
        decode(self.transport.send(request).await?)
    }

    /// Create (no id) or update (id present) a record and return the server's copy
    pub async fn save_or_update(&self, request: &R::SaveRequest) -> Result<R::Record> {
        let request = ApiRequest::new(Method::POST, R::DESCRIPTOR.save_path()).with_json(request)?;
        decode(self.transport.send(request).await?)
    }

    /// Delete records in bulk. An empty id list sends nothing.
    pub async fn remove(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            tracing::debug!(resource = R::DESCRIPTOR.name, "Skipping remove of empty id list");
            return Ok(());
        }
        let request = ApiRequest::new(
            R::DESCRIPTOR.remove_method.method(),
            R::DESCRIPTOR.remove_path(),
        )
        .with_json(ids)?;
        self.transport.send(request).await?;
        Ok(())
    }

    /// Apply a lifecycle transition; the server decides whether it is legal
    pub async fn transition(&self, transition: R::Transition, id: i64) -> Result<()> {
        let request = ApiRequest::put(R::DESCRIPTOR.transition_path(transition.segment(), id));
        tracing::debug!(
            resource = R::DESCRIPTOR.name,
            transition = transition.segment(),
            id,
            "Applying transition"
        );
        self.transport.send(request).await?;
        Ok(())
    }
}
