//! Attractions: points of interest inside a region

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tourdesk_client::{Lifecycle, Resource, ResourceClient, ResourceDescriptor, Result};

use crate::PublishStatus;

/// Map position of an attraction plus any extra provider-specific keys
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationInfo {
    /// `"lng,lat"` pair
    pub lnglat: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionRecord {
    pub id: i64,
    pub region_id: i64,
    #[serde(default)]
    pub region_name: String,
    pub location_info: LocationInfo,
    #[serde(default)]
    pub location: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extend_content: Map<String, Value>,
    #[serde(default)]
    pub cover_list: Vec<String>,
    #[serde(default)]
    pub publish_status: PublishStatus,
    #[serde(default)]
    pub enable_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_status: Option<PublishStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub region_id: i64,
    pub location_info: LocationInfo,
    pub title: String,
    pub location: String,
    pub extend_content: Map<String, Value>,
    pub cover_list: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_status: Option<PublishStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_status: Option<bool>,
}

impl From<AttractionRecord> for AttractionSaveRequest {
    fn from(record: AttractionRecord) -> Self {
        Self {
            id: Some(record.id),
            region_id: record.region_id,
            location_info: record.location_info,
            title: record.title,
            location: record.location,
            extend_content: record.extend_content,
            cover_list: record.cover_list,
            description: record.description,
            publish_status: Some(record.publish_status),
            enable_status: Some(record.enable_status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttractionTransition {
    /// Pin to the top of listings
    DoTop,
    /// PENDING -> PUBLISH
    Publish,
    /// PUBLISH -> PENDING
    Unpublish,
}

impl Lifecycle for AttractionTransition {
    fn segment(&self) -> &'static str {
        match self {
            AttractionTransition::DoTop => "doTop",
            AttractionTransition::Publish => "publish",
            AttractionTransition::Unpublish => "unpublish",
        }
    }
}

pub struct Attractions;

impl Resource for Attractions {
    type Record = AttractionRecord;
    type Query = AttractionQuery;
    type SaveRequest = AttractionSaveRequest;
    type Transition = AttractionTransition;

    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("attraction", "/open/attraction").removed_with_post();
}

pub type AttractionClient = ResourceClient<Attractions>;

/// Named lifecycle calls for attractions
#[async_trait::async_trait]
pub trait AttractionLifecycle {
    async fn do_top(&self, id: i64) -> Result<()>;
    async fn publish(&self, id: i64) -> Result<()>;
    async fn unpublish(&self, id: i64) -> Result<()>;
}

#[async_trait::async_trait]
impl AttractionLifecycle for AttractionClient {
    async fn do_top(&self, id: i64) -> Result<()> {
        self.transition(AttractionTransition::DoTop, id).await
    }

    async fn publish(&self, id: i64) -> Result<()> {
        self.transition(AttractionTransition::Publish, id).await
    }

    async fn unpublish(&self, id: i64) -> Result<()> {
        self.transition(AttractionTransition::Unpublish, id).await
    }
}
