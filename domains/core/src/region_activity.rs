//! Region activities: user-submitted events that go through review before
//! publication

use serde::{Deserialize, Serialize};
use tourdesk_client::{Lifecycle, Resource, ResourceClient, ResourceDescriptor, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionActivityRecord {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_id: i64,
    pub region_id: i64,
    #[serde(default)]
    pub region_name: String,
    pub title: String,
    #[serde(default)]
    pub connect_info: String,
    #[serde(default)]
    pub gmt_start: String,
    #[serde(default)]
    pub gmt_end: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publish_status: String,
    #[serde(default)]
    pub audit_status: String,
    #[serde(default)]
    pub extend_content: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub sort_no: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionActivityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionActivitySaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub region_id: i64,
    pub region_name: String,
    pub title: String,
    pub connect_info: String,
    pub gmt_start: String,
    pub gmt_end: String,
    pub content: String,
    pub tags: Vec<String>,
    pub cover_url: String,
    pub sort_no: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionActivityTransition {
    Publish,
    /// Withdraw a published activity
    Rollback,
    Reject,
    Approve,
}

impl Lifecycle for RegionActivityTransition {
    fn segment(&self) -> &'static str {
        match self {
            RegionActivityTransition::Publish => "publish",
            RegionActivityTransition::Rollback => "rollback",
            RegionActivityTransition::Reject => "reject",
            RegionActivityTransition::Approve => "approved",
        }
    }
}

pub struct RegionActivities;

impl Resource for RegionActivities {
    type Record = RegionActivityRecord;
    type Query = RegionActivityQuery;
    type SaveRequest = RegionActivitySaveRequest;
    type Transition = RegionActivityTransition;

    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("region activity", "/open/regionActivity");
}

pub type RegionActivityClient = ResourceClient<RegionActivities>;

#[async_trait::async_trait]
pub trait RegionActivityLifecycle {
    async fn publish(&self, id: i64) -> Result<()>;
    async fn rollback(&self, id: i64) -> Result<()>;
    async fn reject(&self, id: i64) -> Result<()>;
    async fn approve(&self, id: i64) -> Result<()>;
}

#[async_trait::async_trait]
impl RegionActivityLifecycle for RegionActivityClient {
    async fn publish(&self, id: i64) -> Result<()> {
        self.transition(RegionActivityTransition::Publish, id).await
    }

    async fn rollback(&self, id: i64) -> Result<()> {
        self.transition(RegionActivityTransition::Rollback, id).await
    }

    async fn reject(&self, id: i64) -> Result<()> {
        self.transition(RegionActivityTransition::Reject, id).await
    }

    async fn approve(&self, id: i64) -> Result<()> {
        self.transition(RegionActivityTransition::Approve, id).await
    }
}
