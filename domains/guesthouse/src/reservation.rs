//! Guesthouse reservations made by registered guests

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tourdesk_client::{
    decode, ApiRequest, Method, NoTransition, Resource, ResourceClient, ResourceDescriptor, Result,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuesthouseReservationRecord {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
    pub region_id: i64,
    pub guests_id: i64,
    pub room_id: i64,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub id_card: String,
    /// Check-in, as formatted by the backend
    #[serde(default)]
    pub gmt_start: String,
    /// Check-out, as formatted by the backend
    #[serde(default)]
    pub gmt_end: String,
    #[serde(default)]
    pub ori_price: Decimal,
    #[serde(default)]
    pub pay_price: Decimal,
    #[serde(default)]
    pub discount_price: Decimal,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuesthouseReservationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuesthouseReservationSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub region_id: i64,
    pub guests_id: i64,
    pub room_id: i64,
    pub real_name: String,
    pub id_card: String,
    pub gmt_start: Option<DateTime<Utc>>,
    pub gmt_end: Option<DateTime<Utc>>,
    pub ori_price: Decimal,
    pub pay_price: Decimal,
    pub discount_price: Decimal,
    pub phone: String,
    pub remark: String,
}

pub struct GuesthouseReservations;

impl Resource for GuesthouseReservations {
    type Record = GuesthouseReservationRecord;
    type Query = GuesthouseReservationQuery;
    type SaveRequest = GuesthouseReservationSaveRequest;
    type Transition = NoTransition;

    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("guesthouse reservation", "/open/guesthouseReservation");
}

pub type GuesthouseReservationClient = ResourceClient<GuesthouseReservations>;

/// Reservation writes that tolerate an empty acknowledgement
#[async_trait::async_trait]
pub trait ReservationBooking {
    /// Create or update a reservation. Returns the stored record when the
    /// backend echoes one and `None` when it answers with an empty body.
    async fn book(
        &self,
        request: &GuesthouseReservationSaveRequest,
    ) -> Result<Option<GuesthouseReservationRecord>>;
}

#[async_trait::async_trait]
impl ReservationBooking for GuesthouseReservationClient {
    async fn book(
        &self,
        request: &GuesthouseReservationSaveRequest,
    ) -> Result<Option<GuesthouseReservationRecord>> {
        let request =
            ApiRequest::new(Method::POST, self.descriptor().save_path()).with_json(request)?;
        match self.transport().send(request).await? {
            Value::Null => Ok(None),
            body => decode(body).map(Some),
        }
    }
}
