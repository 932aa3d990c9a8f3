//! Back-office roles and the menus they grant

use serde::{Deserialize, Serialize};
use tourdesk_client::{NoTransition, Resource, ResourceClient, ResourceDescriptor};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysRoleRecord {
    pub id: i64,
    pub role_name: String,
    #[serde(default)]
    pub role_code: String,
    #[serde(default)]
    pub description: String,
    /// Menus granted to the role
    #[serde(default)]
    pub menu_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysRoleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SysRoleSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub role_name: String,
    pub role_code: String,
    pub description: String,
    pub menu_ids: Vec<i64>,
}

pub struct SysRoles;

impl Resource for SysRoles {
    type Record = SysRoleRecord;
    type Query = SysRoleQuery;
    type SaveRequest = SysRoleSaveRequest;
    type Transition = NoTransition;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("role", "/open/sysRole");
}

pub type SysRoleClient = ResourceClient<SysRoles>;
