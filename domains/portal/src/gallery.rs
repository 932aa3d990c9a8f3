//! Read-only attraction gallery as the consumer app sees it

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tourdesk_client::{list_page, PageQuery, PageResult, Result, Transport};

pub const GALLERY_QUERY_PATH: &str = "/open/attractionGallery/attractionPageQuery";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionGalleryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct GalleryLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionGalleryItem {
    #[serde(default)]
    pub gmt_modified: String,
    #[serde(default)]
    pub location_info: GalleryLocation,
    pub region_id: i64,
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub sort_no: i32,
    pub title: String,
}

#[derive(Clone)]
pub struct AttractionGalleryClient {
    transport: Arc<dyn Transport>,
}

impl AttractionGalleryClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn query(
        &self,
        query: &PageQuery<AttractionGalleryQuery>,
    ) -> Result<PageResult<AttractionGalleryItem>> {
        let page = list_page(self.transport.as_ref(), GALLERY_QUERY_PATH, query).await?;
        tracing::debug!(total = page.total, "Queried attraction gallery");
        Ok(page)
    }
}
