//! Guesthouse rooms offered for booking

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tourdesk_client::{Lifecycle, Resource, ResourceClient, ResourceDescriptor, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuesthouseRoomRecord {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
    pub region_id: i64,
    pub title: String,
    #[serde(default)]
    pub room_no: String,
    #[serde(default)]
    pub room_amenities: Vec<Value>,
    #[serde(default)]
    pub room_desc: Vec<Value>,
    #[serde(default)]
    pub policies: String,
    #[serde(default)]
    pub cover_list: Vec<Value>,
    #[serde(default)]
    pub enable_status: bool,
    #[serde(default)]
    pub ori_price: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub sort_no: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuesthouseRoomQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuesthouseRoomSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub region_id: i64,
    pub title: String,
    pub room_no: String,
    pub room_amenities: Vec<Value>,
    pub room_desc: Vec<Value>,
    pub policies: String,
    pub cover_list: Vec<Value>,
    pub enable_status: bool,
    pub ori_price: Decimal,
    pub price: Decimal,
    pub sort_no: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuesthouseRoomTransition {
    Publish,
    /// Take a published room off sale
    Rollback,
}

impl Lifecycle for GuesthouseRoomTransition {
    fn segment(&self) -> &'static str {
        match self {
            GuesthouseRoomTransition::Publish => "publish",
            GuesthouseRoomTransition::Rollback => "rollback",
        }
    }
}

pub struct GuesthouseRooms;

impl Resource for GuesthouseRooms {
    type Record = GuesthouseRoomRecord;
    type Query = GuesthouseRoomQuery;
    type SaveRequest = GuesthouseRoomSaveRequest;
    type Transition = GuesthouseRoomTransition;

    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("guesthouse room", "/open/guesthouseRooms");
}

pub type GuesthouseRoomClient = ResourceClient<GuesthouseRooms>;

#[async_trait::async_trait]
pub trait GuesthouseRoomLifecycle {
    async fn publish(&self, id: i64) -> Result<()>;
    async fn rollback(&self, id: i64) -> Result<()>;
}

#[async_trait::async_trait]
impl GuesthouseRoomLifecycle for GuesthouseRoomClient {
    async fn publish(&self, id: i64) -> Result<()> {
        self.transition(GuesthouseRoomTransition::Publish, id).await
    }

    async fn rollback(&self, id: i64) -> Result<()> {
        self.transition(GuesthouseRoomTransition::Rollback, id).await
    }
}
