//! Registered users of the consumer app
//!
//! The back office may only browse these accounts and switch them between
//! `normal` and `forbidden`; it cannot create, edit, or delete them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tourdesk_client::{
    Lifecycle, PageQuery, PageResult, Resource, ResourceClient, ResourceDescriptor, Result,
    Transport,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserRecord {
    pub id: i64,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
    /// `normal` or `forbidden`
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppUserTransition {
    Enable,
    Disable,
}

impl Lifecycle for AppUserTransition {
    fn segment(&self) -> &'static str {
        match self {
            AppUserTransition::Enable => "normal",
            AppUserTransition::Disable => "forbidden",
        }
    }
}

pub struct AppUsers;

impl Resource for AppUsers {
    type Record = AppUserRecord;
    type Query = AppUserQuery;
    // Never sent: the client below exposes no save.
    type SaveRequest = ();
    type Transition = AppUserTransition;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("app user", "/open/user");
}

/// List and enable/disable access to app users
#[derive(Debug, Clone)]
pub struct AppUserClient {
    inner: ResourceClient<AppUsers>,
}

impl AppUserClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport),
        }
    }

    pub async fn list(&self, query: &PageQuery<AppUserQuery>) -> Result<PageResult<AppUserRecord>> {
        self.inner.list(query).await
    }

    pub async fn enable(&self, id: i64) -> Result<()> {
        self.inner.transition(AppUserTransition::Enable, id).await
    }

    pub async fn disable(&self, id: i64) -> Result<()> {
        self.inner.transition(AppUserTransition::Disable, id).await
    }
}
