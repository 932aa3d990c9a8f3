//! Regions: the administrative areas attractions and rooms belong to

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tourdesk_client::{Lifecycle, Resource, ResourceClient, ResourceDescriptor, Result};

/// Administrative level of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    Country,
    Province,
    City,
    District,
    Street,
}

impl std::fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionLevel::Country => write!(f, "country"),
            RegionLevel::Province => write!(f, "province"),
            RegionLevel::City => write!(f, "city"),
            RegionLevel::District => write!(f, "district"),
            RegionLevel::Street => write!(f, "street"),
        }
    }
}

/// One key/value row of a region's extended content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extend_content: Vec<ExtendEntry>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_id: i64,
    #[serde(default)]
    pub location_info: Map<String, Value>,
    // The backend spells this one field in snake case.
    #[serde(rename = "enable_status", default)]
    pub enable_status: i32,
    pub level: RegionLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "enable_status", skip_serializing_if = "Option::is_none")]
    pub enable_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<RegionLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ndistrict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nprovince: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nstreet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub cover_url: String,
    pub description: String,
    pub extend_content: Vec<ExtendEntry>,
    pub location: String,
    pub location_id: i64,
    pub location_info: Map<String, Value>,
    pub level: RegionLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionTransition {
    DoTop,
}

impl Lifecycle for RegionTransition {
    fn segment(&self) -> &'static str {
        match self {
            RegionTransition::DoTop => "doTop",
        }
    }
}

pub struct Regions;

impl Resource for Regions {
    type Record = RegionRecord;
    type Query = RegionQuery;
    type SaveRequest = RegionSaveRequest;
    type Transition = RegionTransition;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("region", "/open/region");
}

pub type RegionClient = ResourceClient<Regions>;

#[async_trait::async_trait]
pub trait RegionLifecycle {
    async fn do_top(&self, id: i64) -> Result<()>;
}

#[async_trait::async_trait]
impl RegionLifecycle for RegionClient {
    async fn do_top(&self, id: i64) -> Result<()> {
        self.transition(RegionTransition::DoTop, id).await
    }
}
