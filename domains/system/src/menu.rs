//! Navigation menus rendered by the back-office UI

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tourdesk_client::{
    NoTransition, Page, PageQuery, PageResult, Resource, ResourceClient, ResourceDescriptor,
    Result,
};

/// Page size used to fetch the whole menu tree in one request
pub const ALL_MENUS_PAGE_SIZE: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMeta {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub keep_alive: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysMenuRecord {
    pub id: i64,
    #[serde(default)]
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub redirect: String,
    /// Parent menu id; absent for top-level menus
    #[serde(default, deserialize_with = "id_as_string")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub meta_info: MenuMeta,
    #[serde(default)]
    pub sort_no: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysMenuQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysMenuSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub path: String,
    pub name: String,
    pub component: String,
    pub redirect: String,
    pub parent_id: String,
    pub meta_info: MenuMeta,
    pub sort_no: i32,
}

// The backend sends parent ids as numbers in some responses and strings in others.
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub struct SysMenus;

impl Resource for SysMenus {
    type Record = SysMenuRecord;
    type Query = SysMenuQuery;
    type SaveRequest = SysMenuSaveRequest;
    type Transition = NoTransition;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("menu", "/open/sysMenu");
}

pub type SysMenuClient = ResourceClient<SysMenus>;

/// Whole-tree menu access
#[async_trait::async_trait]
pub trait SysMenuCatalog {
    /// Every menu in one page, ordered by `sortNo` (ties keep server order)
    async fn all_menus(&self) -> Result<PageResult<SysMenuRecord>>;
}

#[async_trait::async_trait]
impl SysMenuCatalog for SysMenuClient {
    async fn all_menus(&self) -> Result<PageResult<SysMenuRecord>> {
        let query = PageQuery::unfiltered(Page::first(ALL_MENUS_PAGE_SIZE));
        let mut page = self.list(&query).await?;
        page.records.sort_by_key(|menu| menu.sort_no);
        if page.total > page.records.len() as u64 {
            tracing::warn!(
                total = page.total,
                fetched = page.records.len(),
                "Menu tree exceeds a single page; trailing menus are missing"
            );
        }
        Ok(page)
    }
}
